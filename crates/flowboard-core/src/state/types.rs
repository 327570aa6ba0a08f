//! State snapshot types.
//!
//! The full engine state is one [`AppState`] value. Every dispatch produces
//! a fresh snapshot; holders of a previous snapshot (undo entries, render
//! diffing) observe no change.

use crate::events::TargetType;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Editor interaction modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EditorMode {
    /// Free editing; drags on the workspace pan the view.
    #[default]
    Drag,
    /// Drags on the workspace draw a selection marquee.
    Select,
    /// Stamp-copy mode; only workspace drags (marquee) are allowed.
    Copy,
    /// All mutating interactions are blocked.
    ReadOnly,
}

/// A diagram node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeState {
    pub id: String,
    pub type_id: String,
    /// Position in workspace coordinates (top-left corner).
    pub position: Point,
    pub size: Size,
    pub selected: bool,
    /// Position at drag start; set while a drag is in progress.
    pub start_drag_position: Option<Point>,
    /// Opaque consumer payload.
    pub consumer_data: Option<serde_json::Value>,
}

impl NodeState {
    pub fn new(id: &str, type_id: &str, position: Point, size: Size) -> Self {
        Self {
            id: id.to_string(),
            type_id: type_id.to_string(),
            position,
            size,
            selected: false,
            start_drag_position: None,
            consumer_data: None,
        }
    }

    /// Bounding rectangle in workspace coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

/// A diagram edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeState {
    pub id: String,
    pub src: String,
    pub dest: String,
    pub connector_src_type: Option<String>,
    pub connector_dest_type: Option<String>,
    pub selected: bool,
    pub hovered: bool,
    /// Opaque consumer payload.
    pub consumer_data: Option<serde_json::Value>,
}

impl EdgeState {
    pub fn new(id: &str, src: &str, dest: &str) -> Self {
        Self {
            id: id.to_string(),
            src: src.to_string(),
            dest: dest.to_string(),
            connector_src_type: None,
            connector_dest_type: None,
            selected: false,
            hovered: false,
            consumer_data: None,
        }
    }
}

/// Pan/zoom state of the diagram workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceState {
    /// Location of the workspace origin in screen space (pan offset).
    pub position: Point,
    /// Zoom factor, always > 0.
    pub scale: f64,
    /// Size of the diagram canvas in workspace units.
    pub canvas_size: Size,
    /// Size of the visible container in screen pixels.
    pub view_container_size: Size,
}

impl WorkspaceState {
    pub fn new(canvas_size: Size, view_container_size: Size) -> Self {
        Self {
            position: Point::ZERO,
            scale: 1.0,
            canvas_size,
            view_container_size,
        }
    }

    /// The canvas rectangle in workspace coordinates.
    pub fn rectangle(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.canvas_size)
    }
}

/// An open context menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextMenu {
    /// Screen position of the triggering click.
    pub position: Point,
    /// Entity type the menu was opened on.
    pub target_type: TargetType,
}

/// Selection marquee bounds, in workspace coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionMarquee {
    /// Fixed corner where the drag started.
    pub anchor: Point,
    /// Moving corner under the pointer.
    pub position: Point,
}

impl SelectionMarquee {
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.anchor, self.position)
    }
}

/// Editor chrome state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EditorState {
    pub mode: EditorMode,
    pub context_menu: Option<ContextMenu>,
    pub selection_marquee: Option<SelectionMarquee>,
}

/// Ephemeral preview of a node being dragged from a palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotentialNode {
    pub type_id: String,
    pub position: Point,
    pub size: Size,
}

/// Ephemeral floating edge endpoint during a connector drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotentialEdge {
    /// Node the drag started from.
    pub src: String,
    /// Floating endpoint in workspace coordinates.
    pub position: Point,
    pub connector_src_type: Option<String>,
}

/// A UI-chrome panel (e.g. toolbox), positioned in raw screen space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelState {
    pub id: String,
    pub position: Point,
    pub size: Size,
    /// Set while a drag on this panel's handle is in progress.
    pub dragging: bool,
}

impl PanelState {
    pub fn new(id: &str, position: Point, size: Size) -> Self {
        Self {
            id: id.to_string(),
            position,
            size,
            dragging: false,
        }
    }
}

/// Full engine state snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub nodes: HashMap<String, NodeState>,
    pub edges: HashMap<String, EdgeState>,
    pub workspace: WorkspaceState,
    pub editor: EditorState,
    pub potential_node: Option<PotentialNode>,
    pub potential_edge: Option<PotentialEdge>,
    pub panels: HashMap<String, PanelState>,
}

impl AppState {
    /// Create an empty state with the given workspace dimensions.
    pub fn new(canvas_size: Size, view_container_size: Size) -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
            workspace: WorkspaceState::new(canvas_size, view_container_size),
            editor: EditorState::default(),
            potential_node: None,
            potential_edge: None,
            panels: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_bounds() {
        let node = NodeState::new("n1", "t", Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        let bounds = node.bounds();
        assert_eq!(bounds, Rect::new(10.0, 20.0, 110.0, 70.0));
    }

    #[test]
    fn test_marquee_bounds_normalizes_corners() {
        let marquee = SelectionMarquee {
            anchor: Point::new(100.0, 100.0),
            position: Point::new(20.0, 40.0),
        };
        assert_eq!(marquee.bounds(), Rect::new(20.0, 40.0, 100.0, 100.0));
    }
}
