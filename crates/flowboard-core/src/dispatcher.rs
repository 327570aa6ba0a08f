//! Event dispatcher.
//!
//! Translates semantic events into store actions. This is the only place
//! that knows which coordinate space each interaction lives in:
//!
//! * panels and workspace panning track the pointer in raw screen space,
//!   anchored by the drag offset;
//! * node drags subtract the drag offset first, then map through the
//!   workspace pan/zoom;
//! * connector drags, palette drags and the selection marquee map the
//!   pointer position directly through the workspace pan/zoom.

use crate::config::EngineConfig;
use crate::events::{KeyCode, SemanticEvent, TargetType};
use crate::mode;
use crate::state::store::Store;
use crate::state::types::{EditorMode, WorkspaceState};
use crate::state::{edge, editor, global, node, panel, workspace};
use kurbo::Point;
use std::cell::RefCell;
use std::rc::Rc;

/// Map a screen position into workspace coordinates.
fn to_workspace(position: Point, workspace: &WorkspaceState) -> Point {
    ((position - workspace.position) / workspace.scale).to_point()
}

/// Routes semantic events to the store, applying the mode policy and the
/// per-interaction coordinate transforms.
pub struct Dispatcher {
    store: Rc<RefCell<Store>>,
    config: Rc<EngineConfig>,
}

impl Dispatcher {
    pub fn new(store: Rc<RefCell<Store>>, config: Rc<EngineConfig>) -> Self {
        Self { store, config }
    }

    /// Process one event. Events blocked by the current mode are dropped
    /// before any state is touched.
    pub fn dispatch_event(&self, event: &SemanticEvent) {
        let current_mode = self.store.borrow().state().editor.mode;
        if !mode::allows(event, current_mode) {
            log::trace!("event dropped by {current_mode:?} mode: {event:?}");
            return;
        }
        let store = &mut *self.store.borrow_mut();
        match event {
            SemanticEvent::LeftClick { target, modifiers } => {
                editor::handle_hide_context_menu(store);
                match target.target_type {
                    TargetType::Node => {
                        node::handle_node_click(store, target.id.as_deref(), modifiers.command());
                    }
                    TargetType::Edge | TargetType::EdgeBadge => {
                        edge::handle_edge_click(store, target.id.as_deref(), modifiers.command());
                    }
                    TargetType::Workspace => workspace::handle_workspace_click(store),
                    _ => {}
                }
            }
            SemanticEvent::RightClick { target, position } => {
                editor::handle_show_context_menu(store, *position, target.target_type);
            }
            SemanticEvent::MouseDown { .. } => {
                editor::handle_hide_context_menu(store);
            }
            SemanticEvent::MouseOver { target } => {
                if matches!(target.target_type, TargetType::Edge | TargetType::EdgeBadge) {
                    edge::handle_edge_mouse_over(store, target.id.as_deref());
                }
            }
            SemanticEvent::MouseOut { target } => {
                if matches!(target.target_type, TargetType::Edge | TargetType::EdgeBadge) {
                    edge::handle_edge_mouse_out(store, target.id.as_deref());
                }
            }
            SemanticEvent::DragStart { target, position } => {
                let view = store.state().workspace.clone();
                match target.target_type {
                    TargetType::Node => node::handle_node_drag_start(store, target.id.as_deref()),
                    TargetType::NodeConnector => {
                        edge::handle_edge_drag_start(store, target, to_workspace(*position, &view));
                    }
                    TargetType::PotentialNode => {
                        node::handle_potential_node_drag_start(
                            store,
                            &self.config,
                            target,
                            to_workspace(*position, &view),
                        );
                    }
                    TargetType::PanelHandle => {
                        panel::handle_panel_drag_start(store, target.id.as_deref());
                    }
                    TargetType::Workspace => {
                        if matches!(store.state().editor.mode, EditorMode::Select | EditorMode::Copy)
                        {
                            editor::handle_marquee_start(store, to_workspace(*position, &view));
                        }
                    }
                    TargetType::Edge | TargetType::EdgeBadge => {}
                }
            }
            SemanticEvent::Drag {
                target,
                position,
                offset,
            } => {
                let view = store.state().workspace.clone();
                match target.target_type {
                    TargetType::Node => {
                        let anchored = *position - *offset;
                        node::handle_node_drag(
                            store,
                            target.id.as_deref(),
                            to_workspace(anchored, &view),
                        );
                    }
                    TargetType::NodeConnector => {
                        edge::handle_edge_drag(store, to_workspace(*position, &view));
                    }
                    TargetType::PotentialNode => {
                        node::handle_potential_node_drag(store, to_workspace(*position, &view));
                    }
                    TargetType::PanelHandle => {
                        panel::handle_panel_drag(store, target.id.as_deref(), *position - *offset);
                    }
                    TargetType::Workspace => match store.state().editor.mode {
                        EditorMode::Select | EditorMode::Copy => {
                            editor::handle_marquee_drag(store, to_workspace(*position, &view));
                        }
                        EditorMode::Drag => {
                            workspace::handle_workspace_drag(store, *position - *offset);
                        }
                        EditorMode::ReadOnly => {}
                    },
                    TargetType::Edge | TargetType::EdgeBadge => {}
                }
            }
            SemanticEvent::DragEnd { target, .. } => match target.target_type {
                TargetType::Node => node::handle_node_drag_end(store, target.id.as_deref()),
                TargetType::NodeConnector => edge::handle_edge_drag_end(store),
                TargetType::PotentialNode => {
                    node::handle_potential_node_drag_end(store, target.id.as_deref());
                }
                TargetType::Workspace => editor::handle_marquee_end(store),
                TargetType::Edge | TargetType::EdgeBadge | TargetType::PanelHandle => {}
            },
            SemanticEvent::Drop { target, dropzone } => {
                match (target.target_type, dropzone.target_type) {
                    (TargetType::NodeConnector, TargetType::NodeConnector) => {
                        edge::handle_edge_create(store, dropzone);
                    }
                    (TargetType::PotentialNode, TargetType::Workspace) => {
                        node::handle_node_create(store, target.id.as_deref());
                    }
                    _ => {}
                }
            }
            SemanticEvent::Wheel {
                position,
                delta,
                ctrl,
                target,
            } => {
                // Pan/zoom only applies with the pointer over the workspace
                // and no context menu in the way.
                let over_workspace = target
                    .as_ref()
                    .is_some_and(|target| target.target_type == TargetType::Workspace);
                if !over_workspace || store.state().editor.context_menu.is_some() {
                    return;
                }
                if *ctrl {
                    workspace::handle_workspace_zoom(store, -delta.y, *position);
                } else {
                    let panned =
                        store.state().workspace.position - *delta * self.config.wheel_pan_factor;
                    workspace::handle_workspace_drag(store, panned);
                }
            }
            SemanticEvent::KeyDown { code, modifiers } => match code {
                KeyCode::Delete | KeyCode::Backspace => global::handle_delete_selected(store),
                KeyCode::KeyA if modifiers.command() => workspace::handle_select_all(store),
                KeyCode::KeyZ if modifiers.command() => {
                    if modifiers.shift {
                        store.redo();
                    } else {
                        store.undo();
                    }
                }
                _ => {}
            },
            SemanticEvent::ContainerResize { size } => {
                workspace::handle_workspace_resize(store, *size);
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}
