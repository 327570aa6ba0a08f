//! State management: snapshot types, actions, slice reducers and the store.

pub mod actions;
pub mod edge;
pub mod editor;
pub mod global;
pub mod node;
pub mod panel;
pub mod store;
pub mod types;
pub mod workspace;

use actions::Action;
use types::AppState;

/// Root reducer: apply `action` to every slice and assemble the next state.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    AppState {
        nodes: node::reduce_nodes(&state.nodes, action),
        edges: edge::reduce_edges(&state.edges, action),
        workspace: workspace::reduce_workspace(&state.workspace, action),
        editor: editor::reduce_editor(&state.editor, action),
        potential_node: node::reduce_potential_node(&state.potential_node, action),
        potential_edge: edge::reduce_potential_edge(&state.potential_edge, action),
        panels: panel::reduce_panels(&state.panels, action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actions::{NodeAction, WorkspaceAction};
    use kurbo::{Point, Size};
    use types::NodeState;

    #[test]
    fn test_reduce_touches_only_relevant_slices() {
        let mut state = AppState::new(Size::new(1200.0, 800.0), Size::new(1000.0, 600.0));
        state.nodes.insert(
            "n1".to_string(),
            NodeState::new("n1", "t", Point::ZERO, Size::new(10.0, 10.0)),
        );

        let next = reduce(
            &state,
            &Action::Workspace(WorkspaceAction::Drag {
                position: Point::new(-5.0, -5.0),
            }),
        );
        assert_eq!(next.nodes, state.nodes);
        assert_ne!(next.workspace.position, state.workspace.position);
    }

    #[test]
    fn test_unknown_target_leaves_state_unchanged() {
        let state = AppState::new(Size::new(1200.0, 800.0), Size::new(1000.0, 600.0));
        let next = reduce(
            &state,
            &Action::Node(NodeAction::Select {
                id: "ghost".to_string(),
            }),
        );
        assert_eq!(next, state);
    }
}
