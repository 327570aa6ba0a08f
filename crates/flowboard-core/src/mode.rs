//! Editor mode policy.
//!
//! A single predicate decides whether an incoming event is processed at all
//! in the current mode. Filtering happens before any dispatcher logic runs,
//! so blocked events produce no state change and no render callbacks.

use crate::events::{EventKind, SemanticEvent, TargetType};
use crate::state::types::EditorMode;

/// Whether `event` may be processed while the editor is in `mode`.
pub fn allows(event: &SemanticEvent, mode: EditorMode) -> bool {
    match mode {
        EditorMode::Drag | EditorMode::Select => true,
        EditorMode::ReadOnly => matches!(
            event.kind(),
            EventKind::Wheel
                | EventKind::ContainerResize
                | EventKind::MouseOver
                | EventKind::MouseOut
        ),
        EditorMode::Copy => match event.kind() {
            EventKind::ContainerResize
            | EventKind::Wheel
            | EventKind::MouseDown
            | EventKind::LeftClick
            | EventKind::KeyDown => true,
            // Marquee selection stays available: drags are let through only
            // when they started on the workspace itself.
            EventKind::DragStart | EventKind::Drag | EventKind::DragEnd => event
                .target()
                .is_some_and(|target| target.target_type == TargetType::Workspace),
            EventKind::RightClick | EventKind::MouseOver | EventKind::MouseOut | EventKind::Drop => {
                false
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventTarget, KeyCode, Modifiers};
    use kurbo::{Point, Size, Vec2};

    fn drag_on(target_type: TargetType) -> SemanticEvent {
        SemanticEvent::Drag {
            target: EventTarget::new(target_type, Some("e1")),
            position: Point::ZERO,
            offset: Vec2::ZERO,
        }
    }

    #[test]
    fn test_drag_and_select_modes_allow_everything() {
        let events = [
            drag_on(TargetType::Node),
            SemanticEvent::KeyDown {
                code: KeyCode::Delete,
                modifiers: Modifiers::default(),
            },
            SemanticEvent::RightClick {
                target: EventTarget::new(TargetType::Edge, Some("e1")),
                position: Point::ZERO,
            },
        ];
        for event in &events {
            assert!(allows(event, EditorMode::Drag));
            assert!(allows(event, EditorMode::Select));
        }
    }

    #[test]
    fn test_read_only_blocks_mutating_events() {
        assert!(!allows(&drag_on(TargetType::Node), EditorMode::ReadOnly));
        assert!(!allows(
            &SemanticEvent::KeyDown {
                code: KeyCode::Delete,
                modifiers: Modifiers::default(),
            },
            EditorMode::ReadOnly
        ));
        assert!(!allows(
            &SemanticEvent::LeftClick {
                target: EventTarget::new(TargetType::Node, Some("n1")),
                modifiers: Modifiers::default(),
            },
            EditorMode::ReadOnly
        ));
    }

    #[test]
    fn test_read_only_allows_view_events() {
        assert!(allows(
            &SemanticEvent::Wheel {
                position: Point::ZERO,
                delta: Vec2::new(0.0, -10.0),
                ctrl: true,
                target: Some(EventTarget::new(TargetType::Workspace, None)),
            },
            EditorMode::ReadOnly
        ));
        assert!(allows(
            &SemanticEvent::ContainerResize {
                size: Size::new(800.0, 600.0),
            },
            EditorMode::ReadOnly
        ));
        assert!(allows(
            &SemanticEvent::MouseOver {
                target: EventTarget::new(TargetType::Edge, Some("e1")),
            },
            EditorMode::ReadOnly
        ));
    }

    #[test]
    fn test_copy_mode_restricts_drags_to_workspace() {
        assert!(allows(&drag_on(TargetType::Workspace), EditorMode::Copy));
        assert!(!allows(&drag_on(TargetType::Node), EditorMode::Copy));
        assert!(!allows(&drag_on(TargetType::NodeConnector), EditorMode::Copy));
    }

    #[test]
    fn test_copy_mode_allows_clicks_and_keys() {
        assert!(allows(
            &SemanticEvent::LeftClick {
                target: EventTarget::new(TargetType::Node, Some("n1")),
                modifiers: Modifiers::default(),
            },
            EditorMode::Copy
        ));
        assert!(allows(
            &SemanticEvent::KeyDown {
                code: KeyCode::KeyC,
                modifiers: Modifiers { ctrl: true, ..Default::default() },
            },
            EditorMode::Copy
        ));
        assert!(!allows(
            &SemanticEvent::Drop {
                target: EventTarget::new(TargetType::Node, Some("n1")),
                dropzone: EventTarget::new(TargetType::Node, Some("n2")),
            },
            EditorMode::Copy
        ));
    }
}
