//! Undo/redo history.
//!
//! Every undoable action gets an inverse action computed against the state
//! the action is about to mutate. Two strategies cover the action set:
//! creations invert to deletions derivable from the action alone, while
//! deletions and drag completions need a snapshot of the affected records
//! taken before the action runs.

use crate::state::actions::{Action, EdgeAction, GlobalAction, NodeAction};
use crate::state::types::AppState;

/// A recorded action paired with the inverse that reverts it.
#[derive(Debug, Clone, PartialEq)]
pub struct UndoEntry {
    pub forward: Action,
    pub inverse: Action,
}

/// Inverse of `action` against `state`, or `None` when the action is not
/// undoable (view changes, selection, in-flight drags).
pub fn inverse_for(state: &AppState, action: &Action) -> Option<Action> {
    derived_inverse(action).or_else(|| snapshot_inverse(state, action))
}

/// Build the history entry for `action`, or `None` when it is not undoable.
///
/// Usually the forward side is the action itself. A drag completion is the
/// exception: replaying `DragEnd` alone would not move the node, so the
/// recorded forward is a `Drag` to the position the node ended up at.
pub fn entry_for(state: &AppState, action: &Action) -> Option<UndoEntry> {
    let inverse = inverse_for(state, action)?;
    let forward = match action {
        Action::Node(NodeAction::DragEnd { id }) => {
            let node = state.nodes.get(id)?;
            Action::Node(NodeAction::Drag {
                id: node.id.clone(),
                position: node.position,
                size: node.size,
                workspace_rectangle: state.workspace.rectangle(),
            })
        }
        _ => action.clone(),
    };
    Some(UndoEntry { forward, inverse })
}

/// Inverses derivable from the action payload alone.
fn derived_inverse(action: &Action) -> Option<Action> {
    match action {
        Action::Node(NodeAction::Create { id, .. }) => {
            Some(Action::Global(GlobalAction::DeleteItems {
                node_ids: vec![id.clone()],
                edge_ids: Vec::new(),
            }))
        }
        Action::Edge(EdgeAction::Create { id, .. }) => {
            Some(Action::Global(GlobalAction::DeleteItems {
                node_ids: Vec::new(),
                edge_ids: vec![id.clone()],
            }))
        }
        _ => None,
    }
}

/// Inverses that must capture the records the action is about to destroy.
fn snapshot_inverse(state: &AppState, action: &Action) -> Option<Action> {
    match action {
        Action::Node(NodeAction::Delete { id }) => {
            let node = state.nodes.get(id)?;
            Some(Action::Node(NodeAction::Create {
                id: node.id.clone(),
                type_id: node.type_id.clone(),
                position: node.position,
                size: node.size,
                consumer_data: node.consumer_data.clone(),
            }))
        }
        Action::Edge(EdgeAction::Delete { id }) => {
            let edge = state.edges.get(id)?;
            Some(Action::Edge(EdgeAction::Create {
                id: edge.id.clone(),
                src: edge.src.clone(),
                dest: edge.dest.clone(),
                connector_src_type: edge.connector_src_type.clone(),
                connector_dest_type: edge.connector_dest_type.clone(),
                consumer_data: edge.consumer_data.clone(),
            }))
        }
        Action::Node(NodeAction::DragEnd { id }) => {
            let node = state.nodes.get(id)?;
            let start = node.start_drag_position?;
            Some(Action::Node(NodeAction::Drag {
                id: node.id.clone(),
                position: start,
                size: node.size,
                workspace_rectangle: state.workspace.rectangle(),
            }))
        }
        Action::Global(GlobalAction::DeleteItems { node_ids, edge_ids }) => {
            let nodes = node_ids
                .iter()
                .filter_map(|id| state.nodes.get(id))
                .cloned()
                .collect();
            let edges = edge_ids
                .iter()
                .filter_map(|id| state.edges.get(id))
                .cloned()
                .collect();
            Some(Action::Global(GlobalAction::CreateItems { nodes, edges }))
        }
        _ => None,
    }
}

/// Bounded stacks of recorded entries.
#[derive(Debug, Default)]
pub struct UndoHistory {
    undo: Vec<UndoEntry>,
    redo: Vec<UndoEntry>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh user action. Any redoable future is discarded.
    pub fn record(&mut self, entry: UndoEntry) {
        self.undo.push(entry);
        self.redo.clear();
    }

    /// Re-record an entry during redo; the redo stack survives.
    pub fn record_replayed(&mut self, entry: UndoEntry) {
        self.undo.push(entry);
    }

    pub fn pop_undo(&mut self) -> Option<UndoEntry> {
        self.undo.pop()
    }

    pub fn push_redo(&mut self, entry: UndoEntry) {
        self.redo.push(entry);
    }

    pub fn pop_redo(&mut self) -> Option<UndoEntry> {
        self.redo.pop()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{EdgeState, NodeState};
    use kurbo::{Point, Size};

    fn state_with_node() -> AppState {
        let mut state = AppState::new(Size::new(1200.0, 800.0), Size::new(1000.0, 600.0));
        let mut node = NodeState::new("n1", "t", Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        node.consumer_data = Some(serde_json::json!({"label": "start"}));
        state.nodes.insert("n1".to_string(), node);
        state
            .edges
            .insert("e1".to_string(), EdgeState::new("e1", "n1", "n1"));
        state
    }

    #[test]
    fn test_create_inverts_to_delete() {
        let state = state_with_node();
        let action = Action::Node(NodeAction::Create {
            id: "n2".to_string(),
            type_id: "t".to_string(),
            position: Point::ZERO,
            size: Size::new(10.0, 10.0),
            consumer_data: None,
        });
        assert_eq!(
            inverse_for(&state, &action),
            Some(Action::Global(GlobalAction::DeleteItems {
                node_ids: vec!["n2".to_string()],
                edge_ids: vec![],
            }))
        );
    }

    #[test]
    fn test_node_delete_inverts_to_full_recreate() {
        let state = state_with_node();
        let inverse = inverse_for(
            &state,
            &Action::Node(NodeAction::Delete { id: "n1".to_string() }),
        )
        .unwrap();
        let Action::Node(NodeAction::Create { id, consumer_data, .. }) = inverse else {
            panic!("expected node create");
        };
        assert_eq!(id, "n1");
        assert_eq!(consumer_data, Some(serde_json::json!({"label": "start"})));
    }

    #[test]
    fn test_delete_items_snapshots_records() {
        let state = state_with_node();
        let inverse = inverse_for(
            &state,
            &Action::Global(GlobalAction::DeleteItems {
                node_ids: vec!["n1".to_string(), "ghost".to_string()],
                edge_ids: vec!["e1".to_string()],
            }),
        )
        .unwrap();
        let Action::Global(GlobalAction::CreateItems { nodes, edges }) = inverse else {
            panic!("expected create items");
        };
        // Missing ids are skipped, present ones captured whole.
        assert_eq!(nodes.len(), 1);
        assert_eq!(edges.len(), 1);
        assert_eq!(nodes[0].id, "n1");
    }

    #[test]
    fn test_drag_end_inverts_to_drag_back() {
        let mut state = state_with_node();
        state.nodes.get_mut("n1").unwrap().start_drag_position = Some(Point::new(1.0, 2.0));
        let inverse = inverse_for(
            &state,
            &Action::Node(NodeAction::DragEnd { id: "n1".to_string() }),
        )
        .unwrap();
        let Action::Node(NodeAction::Drag { position, .. }) = inverse else {
            panic!("expected drag");
        };
        assert_eq!(position, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_drag_end_entry_replays_as_drag_to_end() {
        let mut state = state_with_node();
        let node = state.nodes.get_mut("n1").unwrap();
        node.start_drag_position = Some(Point::new(1.0, 2.0));
        node.position = Point::new(300.0, 400.0);

        let entry = entry_for(
            &state,
            &Action::Node(NodeAction::DragEnd { id: "n1".to_string() }),
        )
        .unwrap();
        let Action::Node(NodeAction::Drag { position, .. }) = entry.forward else {
            panic!("expected drag forward");
        };
        assert_eq!(position, Point::new(300.0, 400.0));
    }

    #[test]
    fn test_drag_end_without_start_is_not_undoable() {
        let state = state_with_node();
        assert!(inverse_for(
            &state,
            &Action::Node(NodeAction::DragEnd { id: "n1".to_string() }),
        )
        .is_none());
    }

    #[test]
    fn test_view_and_selection_actions_are_not_undoable() {
        use crate::state::actions::WorkspaceAction;
        let state = state_with_node();
        for action in [
            Action::Workspace(WorkspaceAction::Drag { position: Point::ZERO }),
            Action::Workspace(WorkspaceAction::SelectAll),
            Action::Node(NodeAction::Select { id: "n1".to_string() }),
            Action::Node(NodeAction::DragStart { id: "n1".to_string() }),
        ] {
            assert!(inverse_for(&state, &action).is_none());
        }
    }

    #[test]
    fn test_record_clears_redo() {
        let entry = UndoEntry {
            forward: Action::Node(NodeAction::Delete { id: "n1".to_string() }),
            inverse: Action::Node(NodeAction::Create {
                id: "n1".to_string(),
                type_id: "t".to_string(),
                position: Point::ZERO,
                size: Size::new(1.0, 1.0),
                consumer_data: None,
            }),
        };
        let mut history = UndoHistory::new();
        history.record(entry.clone());
        let popped = history.pop_undo().unwrap();
        history.push_redo(popped);
        assert_eq!(history.redo_depth(), 1);

        history.record(entry);
        assert_eq!(history.redo_depth(), 0);
        assert_eq!(history.undo_depth(), 1);
    }
}
