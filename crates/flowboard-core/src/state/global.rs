//! Cross-domain operations.
//!
//! Deleting a selection removes nodes and edges in a single action so undo
//! can restore the whole set in one step. Edges incident to a deleted node
//! go with it even when not selected themselves.

use crate::state::actions::{Action, GlobalAction};
use crate::state::store::Store;
use crate::state::types::AppState;

/// The node and edge ids a delete-selection would remove.
pub fn selection_to_delete(state: &AppState) -> (Vec<String>, Vec<String>) {
    let mut node_ids: Vec<String> = state
        .nodes
        .values()
        .filter(|node| node.selected)
        .map(|node| node.id.clone())
        .collect();
    node_ids.sort();
    let mut edge_ids: Vec<String> = state
        .edges
        .values()
        .filter(|edge| {
            edge.selected || node_ids.contains(&edge.src) || node_ids.contains(&edge.dest)
        })
        .map(|edge| edge.id.clone())
        .collect();
    edge_ids.sort();
    (node_ids, edge_ids)
}

/// Delete every selected node and edge, cascading to incident edges.
pub fn handle_delete_selected(store: &mut Store) {
    let (node_ids, edge_ids) = selection_to_delete(store.state());
    if node_ids.is_empty() && edge_ids.is_empty() {
        return;
    }
    store.dispatch(Action::Global(GlobalAction::DeleteItems { node_ids, edge_ids }));
}
