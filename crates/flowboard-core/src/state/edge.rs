//! Edge domain: slice reducers and action builders.

use crate::events::EventTarget;
use crate::state::actions::{Action, EdgeAction, EditorAction, GlobalAction, WorkspaceAction};
use crate::state::store::Store;
use crate::state::types::{EdgeState, PotentialEdge};
use kurbo::Point;
use std::collections::HashMap;
use uuid::Uuid;

/// Edge slice reducer.
pub fn reduce_edges(
    edges: &HashMap<String, EdgeState>,
    action: &Action,
) -> HashMap<String, EdgeState> {
    let mut draft = edges.clone();
    match action {
        Action::Edge(edge_action) => match edge_action {
            EdgeAction::Create {
                id,
                src,
                dest,
                connector_src_type,
                connector_dest_type,
                consumer_data,
            } => {
                let mut edge = EdgeState::new(id, src, dest);
                edge.connector_src_type = connector_src_type.clone();
                edge.connector_dest_type = connector_dest_type.clone();
                edge.consumer_data = consumer_data.clone();
                draft.insert(id.clone(), edge);
            }
            EdgeAction::Delete { id } => {
                draft.remove(id);
            }
            EdgeAction::Select { id } => {
                if let Some(edge) = draft.get_mut(id) {
                    edge.selected = true;
                }
            }
            EdgeAction::Deselect { id } => {
                if let Some(edge) = draft.get_mut(id) {
                    edge.selected = false;
                }
            }
            EdgeAction::MouseOver { id } => {
                if let Some(edge) = draft.get_mut(id) {
                    edge.hovered = true;
                }
            }
            EdgeAction::MouseOut { id } => {
                if let Some(edge) = draft.get_mut(id) {
                    edge.hovered = false;
                }
            }
            EdgeAction::DragStart { .. } | EdgeAction::Drag { .. } | EdgeAction::DragEnd => {}
        },
        Action::Workspace(WorkspaceAction::Deselect) => {
            for edge in draft.values_mut() {
                edge.selected = false;
            }
        }
        Action::Workspace(WorkspaceAction::SelectAll) => {
            for edge in draft.values_mut() {
                edge.selected = true;
            }
        }
        // Marquee selection applies to nodes only; edges drop out of the
        // selection while a marquee is live.
        Action::Editor(EditorAction::UpdateSelectionMarquee { .. }) => {
            for edge in draft.values_mut() {
                edge.selected = false;
            }
        }
        Action::Global(GlobalAction::DeleteItems { edge_ids, .. }) => {
            for id in edge_ids {
                draft.remove(id);
            }
        }
        Action::Global(GlobalAction::CreateItems { edges, .. }) => {
            for edge in edges {
                draft.insert(edge.id.clone(), edge.clone());
            }
        }
        _ => {}
    }
    draft
}

/// Floating-edge slice reducer.
pub fn reduce_potential_edge(
    potential: &Option<PotentialEdge>,
    action: &Action,
) -> Option<PotentialEdge> {
    match action {
        Action::Edge(EdgeAction::DragStart {
            id,
            position,
            connector_src_type,
        }) => Some(PotentialEdge {
            src: id.clone(),
            position: *position,
            connector_src_type: connector_src_type.clone(),
        }),
        Action::Edge(EdgeAction::Drag { position }) => potential.clone().map(|mut floating| {
            floating.position = *position;
            floating
        }),
        Action::Edge(EdgeAction::DragEnd) | Action::Edge(EdgeAction::Create { .. }) => None,
        _ => potential.clone(),
    }
}

/// Click on an edge: same selection semantics as node clicks.
pub fn handle_edge_click(store: &mut Store, id: Option<&str>, with_modifier: bool) {
    let Some(id) = id else {
        return;
    };
    let Some(selected) = store.state().edges.get(id).map(|edge| edge.selected) else {
        log::trace!("edge click on unknown id {id}");
        return;
    };
    if !with_modifier {
        store.dispatch(Action::Workspace(WorkspaceAction::Deselect));
    }
    if with_modifier && selected {
        store.dispatch(Action::Edge(EdgeAction::Deselect { id: id.to_string() }));
    } else {
        store.dispatch(Action::Edge(EdgeAction::Select { id: id.to_string() }));
    }
}

pub fn handle_edge_mouse_over(store: &mut Store, id: Option<&str>) {
    let Some(id) = id else {
        return;
    };
    store.dispatch(Action::Edge(EdgeAction::MouseOver { id: id.to_string() }));
}

pub fn handle_edge_mouse_out(store: &mut Store, id: Option<&str>) {
    let Some(id) = id else {
        return;
    };
    store.dispatch(Action::Edge(EdgeAction::MouseOut { id: id.to_string() }));
}

/// Begin a connector drag from a node, floating a new edge endpoint.
pub fn handle_edge_drag_start(store: &mut Store, target: &EventTarget, position: Point) {
    let Some(id) = target.id.as_deref() else {
        return;
    };
    if !store.state().nodes.contains_key(id) {
        log::trace!("connector drag from unknown node {id}");
        return;
    }
    store.dispatch(Action::Edge(EdgeAction::DragStart {
        id: id.to_string(),
        position,
        connector_src_type: target.connector_type(),
    }));
}

pub fn handle_edge_drag(store: &mut Store, position: Point) {
    if store.state().potential_edge.is_none() {
        return;
    }
    store.dispatch(Action::Edge(EdgeAction::Drag { position }));
}

pub fn handle_edge_drag_end(store: &mut Store) {
    if store.state().potential_edge.is_none() {
        return;
    }
    store.dispatch(Action::Edge(EdgeAction::DragEnd));
}

/// Complete a connector drag dropped on another node's connector.
///
/// Both endpoints must exist, and an edge with the same endpoints and
/// connector subtypes must not already exist.
pub fn handle_edge_create(store: &mut Store, dropzone: &EventTarget) {
    let Some(floating) = store.state().potential_edge.clone() else {
        return;
    };
    let Some(dest) = dropzone.id.as_deref() else {
        return;
    };
    let connector_dest_type = dropzone.connector_type();
    let state = store.state();
    if !state.nodes.contains_key(&floating.src) || !state.nodes.contains_key(dest) {
        log::debug!("edge drop with missing endpoint {} -> {dest}", floating.src);
        return;
    }
    let duplicate = state.edges.values().any(|edge| {
        edge.src == floating.src
            && edge.dest == dest
            && edge.connector_src_type == floating.connector_src_type
            && edge.connector_dest_type == connector_dest_type
    });
    if duplicate {
        // The host's drag-end event clears the floating preview.
        log::debug!("duplicate edge {} -> {dest} ignored", floating.src);
        return;
    }
    store.dispatch(Action::Edge(EdgeAction::Create {
        id: Uuid::new_v4().to_string(),
        src: floating.src,
        dest: dest.to_string(),
        connector_src_type: floating.connector_src_type,
        connector_dest_type,
        consumer_data: None,
    }));
}
