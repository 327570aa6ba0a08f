//! Editor chrome domain: mode, context menu and selection marquee.

use crate::events::TargetType;
use crate::state::actions::{Action, EditorAction};
use crate::state::store::Store;
use crate::state::types::{ContextMenu, EditorMode, EditorState, SelectionMarquee};
use kurbo::Point;

/// Editor slice reducer.
pub fn reduce_editor(editor: &EditorState, action: &Action) -> EditorState {
    let mut draft = editor.clone();
    let Action::Editor(editor_action) = action else {
        return draft;
    };
    match editor_action {
        EditorAction::SetMode { mode } => {
            draft.mode = *mode;
            // In-flight chrome does not survive a mode switch.
            draft.context_menu = None;
            draft.selection_marquee = None;
        }
        EditorAction::ShowContextMenu {
            position,
            target_type,
        } => {
            draft.context_menu = Some(ContextMenu {
                position: *position,
                target_type: *target_type,
            });
        }
        EditorAction::HideContextMenu => {
            draft.context_menu = None;
        }
        EditorAction::ShowSelectionMarquee { anchor } => {
            draft.selection_marquee = Some(SelectionMarquee {
                anchor: *anchor,
                position: *anchor,
            });
        }
        EditorAction::UpdateSelectionMarquee { anchor, position } => {
            draft.selection_marquee = Some(SelectionMarquee {
                anchor: *anchor,
                position: *position,
            });
        }
        EditorAction::HideSelectionMarquee => {
            draft.selection_marquee = None;
        }
    }
    draft
}

pub fn handle_set_mode(store: &mut Store, mode: EditorMode) {
    store.dispatch(Action::Editor(EditorAction::SetMode { mode }));
}

pub fn handle_show_context_menu(store: &mut Store, position: Point, target_type: TargetType) {
    store.dispatch(Action::Editor(EditorAction::ShowContextMenu {
        position,
        target_type,
    }));
}

pub fn handle_hide_context_menu(store: &mut Store) {
    if store.state().editor.context_menu.is_none() {
        return;
    }
    store.dispatch(Action::Editor(EditorAction::HideContextMenu));
}

pub fn handle_marquee_start(store: &mut Store, anchor: Point) {
    store.dispatch(Action::Editor(EditorAction::ShowSelectionMarquee { anchor }));
}

/// Grow the marquee to the pointer; selection updates in the same dispatch.
pub fn handle_marquee_drag(store: &mut Store, position: Point) {
    let Some(anchor) = store
        .state()
        .editor
        .selection_marquee
        .as_ref()
        .map(|marquee| marquee.anchor)
    else {
        return;
    };
    store.dispatch(Action::Editor(EditorAction::UpdateSelectionMarquee {
        anchor,
        position,
    }));
}

pub fn handle_marquee_end(store: &mut Store) {
    if store.state().editor.selection_marquee.is_none() {
        return;
    }
    store.dispatch(Action::Editor(EditorAction::HideSelectionMarquee));
}
