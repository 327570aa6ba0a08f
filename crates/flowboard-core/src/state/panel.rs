//! Panel domain: draggable UI chrome positioned in raw screen space.

use crate::state::actions::{Action, PanelAction};
use crate::state::node::clamp_to_rect;
use crate::state::store::Store;
use crate::state::types::PanelState;
use kurbo::{Point, Rect};
use std::collections::HashMap;

/// Panel slice reducer.
pub fn reduce_panels(
    panels: &HashMap<String, PanelState>,
    action: &Action,
) -> HashMap<String, PanelState> {
    let mut draft = panels.clone();
    let Action::Panel(panel_action) = action else {
        return draft;
    };
    match panel_action {
        PanelAction::DragStart { id } => {
            if let Some(panel) = draft.get_mut(id) {
                panel.dragging = true;
            }
        }
        PanelAction::Drag {
            id,
            position,
            container_size,
        } => {
            if let Some(panel) = draft.get_mut(id) {
                let viewport = Rect::from_origin_size(Point::ZERO, *container_size);
                panel.position = clamp_to_rect(*position, panel.size, viewport);
            }
        }
    }
    draft
}

pub fn handle_panel_drag_start(store: &mut Store, id: Option<&str>) {
    let Some(id) = id else {
        return;
    };
    store.dispatch(Action::Panel(PanelAction::DragStart { id: id.to_string() }));
}

/// Panels track the pointer in raw screen coordinates, clamped to the view
/// container.
pub fn handle_panel_drag(store: &mut Store, id: Option<&str>, position: Point) {
    let Some(id) = id else {
        return;
    };
    if !store.state().panels.contains_key(id) {
        log::trace!("panel drag on unknown id {id}");
        return;
    }
    let container_size = store.state().workspace.view_container_size;
    store.dispatch(Action::Panel(PanelAction::Drag {
        id: id.to_string(),
        position,
        container_size,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::AppState;
    use kurbo::Size;

    fn store_with_panel() -> Store {
        let mut state = AppState::new(Size::new(1200.0, 800.0), Size::new(1000.0, 600.0));
        state.panels.insert(
            "toolbox".to_string(),
            PanelState::new("toolbox", Point::new(20.0, 20.0), Size::new(200.0, 400.0)),
        );
        Store::new(state)
    }

    #[test]
    fn test_panel_drag_moves_in_screen_space() {
        let mut store = store_with_panel();

        handle_panel_drag_start(&mut store, Some("toolbox"));
        assert!(store.state().panels["toolbox"].dragging);

        handle_panel_drag(&mut store, Some("toolbox"), Point::new(300.0, 100.0));
        assert_eq!(
            store.state().panels["toolbox"].position,
            Point::new(300.0, 100.0)
        );
    }

    #[test]
    fn test_panel_drag_clamps_to_viewport() {
        let mut store = store_with_panel();

        handle_panel_drag(&mut store, Some("toolbox"), Point::new(950.0, 550.0));
        // 1000-200, 600-400
        assert_eq!(
            store.state().panels["toolbox"].position,
            Point::new(800.0, 200.0)
        );

        handle_panel_drag(&mut store, Some("toolbox"), Point::new(-40.0, -10.0));
        assert_eq!(store.state().panels["toolbox"].position, Point::ZERO);
    }

    #[test]
    fn test_unknown_panel_is_noop() {
        let mut store = store_with_panel();
        let before = store.state().clone();
        handle_panel_drag(&mut store, Some("ghost"), Point::new(1.0, 1.0));
        assert_eq!(store.state(), &before);
    }
}
