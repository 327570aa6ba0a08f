//! Workspace domain: pan/zoom slice reducer.

use crate::state::actions::{Action, WorkspaceAction};
use crate::state::store::Store;
use crate::state::types::WorkspaceState;
use kurbo::{Point, Size};

/// Smallest permitted zoom factor.
pub const MIN_SCALE: f64 = 0.1;
/// Largest permitted zoom factor.
pub const MAX_SCALE: f64 = 10.0;
/// Zoom speed per unit of wheel delta.
pub const ZOOM_FACTOR: f64 = 0.005;

/// Keep the scaled canvas covering the view container.
///
/// The origin can never move right/down past zero, and never left/up so far
/// that the canvas edge comes inside the container. When the canvas is
/// smaller than the container on an axis, the origin pins to zero there.
fn clamp_pan(position: Point, scale: f64, canvas: Size, container: Size) -> Point {
    let min_x = (container.width - canvas.width * scale).min(0.0);
    let min_y = (container.height - canvas.height * scale).min(0.0);
    Point::new(position.x.clamp(min_x, 0.0), position.y.clamp(min_y, 0.0))
}

/// Workspace slice reducer.
pub fn reduce_workspace(workspace: &WorkspaceState, action: &Action) -> WorkspaceState {
    let mut draft = workspace.clone();
    let Action::Workspace(workspace_action) = action else {
        return draft;
    };
    match workspace_action {
        WorkspaceAction::Drag { position } => {
            draft.position = clamp_pan(
                *position,
                draft.scale,
                draft.canvas_size,
                draft.view_container_size,
            );
        }
        WorkspaceAction::Zoom { delta, anchor } => {
            let scale = (draft.scale * (1.0 + delta * ZOOM_FACTOR)).clamp(MIN_SCALE, MAX_SCALE);
            if scale != draft.scale {
                // Keep the workspace point under the anchor stationary.
                let focus = (*anchor - draft.position) / draft.scale;
                draft.position = *anchor - focus * scale;
                draft.scale = scale;
                draft.position = clamp_pan(
                    draft.position,
                    draft.scale,
                    draft.canvas_size,
                    draft.view_container_size,
                );
            }
        }
        WorkspaceAction::Resize { size } => {
            draft.view_container_size = *size;
            draft.position = clamp_pan(
                draft.position,
                draft.scale,
                draft.canvas_size,
                draft.view_container_size,
            );
        }
        WorkspaceAction::Deselect | WorkspaceAction::SelectAll => {}
    }
    draft
}

pub fn handle_workspace_drag(store: &mut Store, position: Point) {
    store.dispatch(Action::Workspace(WorkspaceAction::Drag { position }));
}

pub fn handle_workspace_zoom(store: &mut Store, delta: f64, anchor: Point) {
    store.dispatch(Action::Workspace(WorkspaceAction::Zoom { delta, anchor }));
}

pub fn handle_workspace_resize(store: &mut Store, size: Size) {
    store.dispatch(Action::Workspace(WorkspaceAction::Resize { size }));
}

/// Plain click on empty workspace clears the whole selection.
pub fn handle_workspace_click(store: &mut Store) {
    store.dispatch(Action::Workspace(WorkspaceAction::Deselect));
}

pub fn handle_select_all(store: &mut Store) {
    store.dispatch(Action::Workspace(WorkspaceAction::SelectAll));
}
