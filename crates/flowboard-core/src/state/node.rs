//! Node domain: slice reducers and action builders.

use crate::config::EngineConfig;
use crate::events::EventTarget;
use crate::state::actions::{Action, EditorAction, GlobalAction, NodeAction, WorkspaceAction};
use crate::state::store::Store;
use crate::state::types::{NodeState, PotentialNode, SelectionMarquee};
use kurbo::{Point, Rect, Size};
use std::collections::HashMap;
use uuid::Uuid;

/// Clamp an entity's top-left corner so its rectangle stays inside `bounds`.
pub(crate) fn clamp_to_rect(position: Point, size: Size, bounds: Rect) -> Point {
    let max_x = (bounds.x1 - size.width).max(bounds.x0);
    let max_y = (bounds.y1 - size.height).max(bounds.y0);
    Point::new(
        position.x.clamp(bounds.x0, max_x),
        position.y.clamp(bounds.y0, max_y),
    )
}

/// Center a rectangle of `size` on `position`.
fn center_on(position: Point, size: Size) -> Point {
    Point::new(
        position.x - size.width / 2.0,
        position.y - size.height / 2.0,
    )
}

/// Node slice reducer.
pub fn reduce_nodes(
    nodes: &HashMap<String, NodeState>,
    action: &Action,
) -> HashMap<String, NodeState> {
    let mut draft = nodes.clone();
    match action {
        Action::Node(node_action) => match node_action {
            NodeAction::Create {
                id,
                type_id,
                position,
                size,
                consumer_data,
            } => {
                let mut node = NodeState::new(id, type_id, *position, *size);
                node.consumer_data = consumer_data.clone();
                draft.insert(id.clone(), node);
            }
            NodeAction::Delete { id } => {
                draft.remove(id);
            }
            NodeAction::Select { id } => {
                if let Some(node) = draft.get_mut(id) {
                    node.selected = true;
                }
            }
            NodeAction::Deselect { id } => {
                if let Some(node) = draft.get_mut(id) {
                    node.selected = false;
                }
            }
            NodeAction::DragStart { id } => {
                if let Some(node) = draft.get_mut(id) {
                    node.start_drag_position = Some(node.position);
                }
            }
            NodeAction::Drag {
                id,
                position,
                size,
                workspace_rectangle,
            } => {
                if let Some(node) = draft.get_mut(id) {
                    node.position = clamp_to_rect(*position, *size, *workspace_rectangle);
                }
            }
            NodeAction::DragEnd { id } => {
                if let Some(node) = draft.get_mut(id) {
                    node.start_drag_position = None;
                }
            }
            NodeAction::PotentialDragStart { .. }
            | NodeAction::PotentialDrag { .. }
            | NodeAction::PotentialDragEnd => {}
        },
        Action::Workspace(WorkspaceAction::Deselect) => {
            for node in draft.values_mut() {
                node.selected = false;
            }
        }
        Action::Workspace(WorkspaceAction::SelectAll) => {
            for node in draft.values_mut() {
                node.selected = true;
            }
        }
        Action::Editor(EditorAction::UpdateSelectionMarquee { anchor, position }) => {
            let bounds = SelectionMarquee {
                anchor: *anchor,
                position: *position,
            }
            .bounds();
            for node in draft.values_mut() {
                node.selected = node.bounds().intersect(bounds).area() > 0.0;
            }
        }
        Action::Global(GlobalAction::DeleteItems { node_ids, .. }) => {
            for id in node_ids {
                draft.remove(id);
            }
        }
        Action::Global(GlobalAction::CreateItems { nodes, .. }) => {
            for node in nodes {
                draft.insert(node.id.clone(), node.clone());
            }
        }
        _ => {}
    }
    draft
}

/// Potential-node slice reducer.
pub fn reduce_potential_node(
    potential: &Option<PotentialNode>,
    action: &Action,
) -> Option<PotentialNode> {
    match action {
        Action::Node(NodeAction::PotentialDragStart {
            type_id,
            position,
            size,
        }) => Some(PotentialNode {
            type_id: type_id.clone(),
            position: *position,
            size: *size,
        }),
        Action::Node(NodeAction::PotentialDrag {
            position,
            workspace_rectangle,
        }) => potential.clone().map(|mut preview| {
            preview.position = clamp_to_rect(*position, preview.size, *workspace_rectangle);
            preview
        }),
        // The preview is replaced by the created node, or simply discarded.
        Action::Node(NodeAction::PotentialDragEnd) | Action::Node(NodeAction::Create { .. }) => {
            None
        }
        _ => potential.clone(),
    }
}

/// Click on a node: single-select unless the multi-select modifier is held.
pub fn handle_node_click(store: &mut Store, id: Option<&str>, with_modifier: bool) {
    let Some(id) = id else {
        return;
    };
    let Some(selected) = store.state().nodes.get(id).map(|node| node.selected) else {
        log::trace!("node click on unknown id {id}");
        return;
    };
    if !with_modifier {
        store.dispatch(Action::Workspace(WorkspaceAction::Deselect));
    }
    if with_modifier && selected {
        store.dispatch(Action::Node(NodeAction::Deselect { id: id.to_string() }));
    } else {
        store.dispatch(Action::Node(NodeAction::Select { id: id.to_string() }));
    }
}

pub fn handle_node_drag_start(store: &mut Store, id: Option<&str>) {
    let Some(id) = id else {
        return;
    };
    store.dispatch(Action::Node(NodeAction::DragStart { id: id.to_string() }));
}

pub fn handle_node_drag(store: &mut Store, id: Option<&str>, position: Point) {
    let Some(id) = id else {
        return;
    };
    let Some((size, workspace_rectangle)) = store
        .state()
        .nodes
        .get(id)
        .map(|node| (node.size, store.state().workspace.rectangle()))
    else {
        return;
    };
    store.dispatch(Action::Node(NodeAction::Drag {
        id: id.to_string(),
        position,
        size,
        workspace_rectangle,
    }));
}

pub fn handle_node_drag_end(store: &mut Store, id: Option<&str>) {
    let Some(id) = id else {
        return;
    };
    store.dispatch(Action::Node(NodeAction::DragEnd { id: id.to_string() }));
}

/// Create a real node from the current potential-node preview.
pub fn handle_node_create(store: &mut Store, type_id: Option<&str>) {
    let Some(type_id) = type_id else {
        return;
    };
    let Some(preview) = store.state().potential_node.clone() else {
        log::debug!("node create for {type_id} without an active preview");
        return;
    };
    let id = format!("node-{}", Uuid::new_v4());
    store.dispatch(Action::Node(NodeAction::Create {
        id,
        type_id: type_id.to_string(),
        position: preview.position,
        size: preview.size,
        consumer_data: None,
    }));
}

/// Begin dragging a palette entry. The preview size comes from an explicit
/// size attribute on the dragged element, falling back to the consumer's
/// type lookup; without either, nothing is dispatched.
pub fn handle_potential_node_drag_start(
    store: &mut Store,
    config: &EngineConfig,
    target: &EventTarget,
    position: Point,
) {
    let Some(type_id) = target.id.as_deref() else {
        return;
    };
    let Some(size) = target
        .size_hint()
        .or_else(|| config.size_for_node_type(type_id))
    else {
        log::debug!("no size resolvable for potential node type {type_id}");
        return;
    };
    store.dispatch(Action::Node(NodeAction::PotentialDragStart {
        type_id: type_id.to_string(),
        position: center_on(position, size),
        size,
    }));
}

pub fn handle_potential_node_drag(store: &mut Store, position: Point) {
    let Some((position, workspace_rectangle)) = store
        .state()
        .potential_node
        .as_ref()
        .map(|preview| {
            (
                center_on(position, preview.size),
                store.state().workspace.rectangle(),
            )
        })
    else {
        return;
    };
    store.dispatch(Action::Node(NodeAction::PotentialDrag {
        position,
        workspace_rectangle,
    }));
}

pub fn handle_potential_node_drag_end(store: &mut Store, id: Option<&str>) {
    if id.is_none() {
        return;
    }
    store.dispatch(Action::Node(NodeAction::PotentialDragEnd));
}
