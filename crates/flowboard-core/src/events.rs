//! Semantic event vocabulary.
//!
//! Raw platform input is normalized into this closed set of events before it
//! reaches the engine. Each event carries a resolved [`EventTarget`] so the
//! dispatcher never touches toolkit-specific objects.

use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entity kinds an interaction can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    Node,
    Edge,
    EdgeBadge,
    NodeConnector,
    PotentialNode,
    PanelHandle,
    Workspace,
}

/// Attribute key for a connector subtype on a connector element.
pub const ATTR_CONNECTOR_TYPE: &str = "connector-type";
/// Attribute key for an explicit potential-node width.
pub const ATTR_WIDTH: &str = "width";
/// Attribute key for an explicit potential-node height.
pub const ATTR_HEIGHT: &str = "height";

/// A resolved interaction target.
///
/// `attributes` carries the data attributes of the originating element, so
/// the dispatcher can read connector subtypes and explicit sizes without a
/// reference back into the host UI tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTarget {
    /// Entity id, when the target maps to a diagram entity.
    pub id: Option<String>,
    /// Kind of entity that was hit.
    pub target_type: TargetType,
    /// Data attributes copied from the originating element.
    pub attributes: BTreeMap<String, String>,
}

impl EventTarget {
    /// Create a target with no attributes.
    pub fn new(target_type: TargetType, id: Option<&str>) -> Self {
        Self {
            id: id.map(str::to_string),
            target_type,
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute attachment.
    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Explicit size carried on the originating element, if both dimensions
    /// are present and parse as numbers.
    pub fn size_hint(&self) -> Option<Size> {
        let width = self.attributes.get(ATTR_WIDTH)?.parse::<f64>().ok()?;
        let height = self.attributes.get(ATTR_HEIGHT)?.parse::<f64>().ok()?;
        Some(Size::new(width, height))
    }

    /// Connector subtype carried on the originating element.
    pub fn connector_type(&self) -> Option<String> {
        self.attributes.get(ATTR_CONNECTOR_TYPE).cloned()
    }
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Platform command modifier (ctrl, or cmd on mac).
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Normalized key codes the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    KeyA,
    KeyC,
    KeyZ,
    Delete,
    Backspace,
    /// Any key the engine has no binding for.
    Other,
}

/// A normalized, platform-independent input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SemanticEvent {
    LeftClick {
        target: EventTarget,
        modifiers: Modifiers,
    },
    RightClick {
        target: EventTarget,
        position: Point,
    },
    MouseDown {
        target: EventTarget,
    },
    MouseOver {
        target: EventTarget,
    },
    MouseOut {
        target: EventTarget,
    },
    DragStart {
        target: EventTarget,
        position: Point,
    },
    Drag {
        target: EventTarget,
        position: Point,
        /// Drag offset/delta reported by the input layer for this tick.
        offset: Vec2,
    },
    DragEnd {
        target: EventTarget,
        position: Point,
    },
    Drop {
        target: EventTarget,
        dropzone: EventTarget,
    },
    Wheel {
        position: Point,
        delta: Vec2,
        ctrl: bool,
        /// Workspace resolution for the pointer, produced by the target
        /// resolver. `None` (or a non-workspace target) suppresses pan/zoom.
        target: Option<EventTarget>,
    },
    KeyDown {
        code: KeyCode,
        modifiers: Modifiers,
    },
    ContainerResize {
        size: Size,
    },
}

/// Discriminant used to key event-bus subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    LeftClick,
    RightClick,
    MouseDown,
    MouseOver,
    MouseOut,
    DragStart,
    Drag,
    DragEnd,
    Drop,
    Wheel,
    KeyDown,
    ContainerResize,
}

impl EventKind {
    /// Every event kind, for wiring a subscriber to the full vocabulary.
    pub const ALL: [EventKind; 12] = [
        EventKind::LeftClick,
        EventKind::RightClick,
        EventKind::MouseDown,
        EventKind::MouseOver,
        EventKind::MouseOut,
        EventKind::DragStart,
        EventKind::Drag,
        EventKind::DragEnd,
        EventKind::Drop,
        EventKind::Wheel,
        EventKind::KeyDown,
        EventKind::ContainerResize,
    ];
}

impl SemanticEvent {
    /// The subscription key for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            SemanticEvent::LeftClick { .. } => EventKind::LeftClick,
            SemanticEvent::RightClick { .. } => EventKind::RightClick,
            SemanticEvent::MouseDown { .. } => EventKind::MouseDown,
            SemanticEvent::MouseOver { .. } => EventKind::MouseOver,
            SemanticEvent::MouseOut { .. } => EventKind::MouseOut,
            SemanticEvent::DragStart { .. } => EventKind::DragStart,
            SemanticEvent::Drag { .. } => EventKind::Drag,
            SemanticEvent::DragEnd { .. } => EventKind::DragEnd,
            SemanticEvent::Drop { .. } => EventKind::Drop,
            SemanticEvent::Wheel { .. } => EventKind::Wheel,
            SemanticEvent::KeyDown { .. } => EventKind::KeyDown,
            SemanticEvent::ContainerResize { .. } => EventKind::ContainerResize,
        }
    }

    /// The resolved target for events that carry one.
    pub fn target(&self) -> Option<&EventTarget> {
        match self {
            SemanticEvent::LeftClick { target, .. }
            | SemanticEvent::RightClick { target, .. }
            | SemanticEvent::MouseDown { target }
            | SemanticEvent::MouseOver { target }
            | SemanticEvent::MouseOut { target }
            | SemanticEvent::DragStart { target, .. }
            | SemanticEvent::Drag { target, .. }
            | SemanticEvent::DragEnd { target, .. }
            | SemanticEvent::Drop { target, .. } => Some(target),
            SemanticEvent::Wheel { target, .. } => target.as_ref(),
            SemanticEvent::KeyDown { .. } | SemanticEvent::ContainerResize { .. } => None,
        }
    }
}
