//! Engine facade.
//!
//! Owns the event bus, the store and the dispatcher, and wires them
//! together: every event kind is routed to the dispatcher, and render hooks
//! are driven by diffing consecutive state snapshots.

use crate::bus::EventBus;
use crate::config::EngineConfig;
use crate::dispatcher::Dispatcher;
use crate::events::{EventKind, SemanticEvent};
use crate::state::store::Store;
use crate::state::types::{AppState, EdgeState, EditorMode, NodeState};
use std::cell::RefCell;
use std::rc::Rc;

/// Render callbacks supplied by the embedding application.
///
/// All hooks are optional; an embedder that re-renders the whole scene from
/// a state subscription can leave this empty.
#[derive(Default)]
pub struct RenderHooks {
    pub render_node: Option<Box<dyn FnMut(&NodeState)>>,
    pub destroy_node: Option<Box<dyn FnMut(&str)>>,
    pub render_edge: Option<Box<dyn FnMut(&EdgeState)>>,
    pub destroy_edge: Option<Box<dyn FnMut(&str)>>,
}

impl std::fmt::Debug for RenderHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderHooks")
            .field("render_node", &self.render_node.is_some())
            .field("destroy_node", &self.destroy_node.is_some())
            .field("render_edge", &self.render_edge.is_some())
            .field("destroy_edge", &self.destroy_edge.is_some())
            .finish()
    }
}

/// Invoke hooks for every entity that changed between two snapshots.
fn sync_renderers(
    prev: &AppState,
    next: &AppState,
    hooks: &mut RenderHooks,
    config: &EngineConfig,
) {
    for (id, node) in &next.nodes {
        let rerender = match prev.nodes.get(id) {
            None => true,
            Some(old) if old != node => config
                .should_rerender_node
                .as_ref()
                .map_or(true, |allow| allow(old, node)),
            Some(_) => false,
        };
        if rerender {
            if let Some(render_node) = hooks.render_node.as_mut() {
                render_node(node);
            }
        }
    }
    for id in prev.nodes.keys() {
        if !next.nodes.contains_key(id) {
            if let Some(destroy_node) = hooks.destroy_node.as_mut() {
                destroy_node(id);
            }
        }
    }
    for (id, edge) in &next.edges {
        if prev.edges.get(id) != Some(edge) {
            if let Some(render_edge) = hooks.render_edge.as_mut() {
                render_edge(edge);
            }
        }
    }
    for id in prev.edges.keys() {
        if !next.edges.contains_key(id) {
            if let Some(destroy_edge) = hooks.destroy_edge.as_mut() {
                destroy_edge(id);
            }
        }
    }
}

/// An embeddable diagram editor: feed it semantic events, observe state.
pub struct DiagramEngine {
    bus: EventBus,
    store: Rc<RefCell<Store>>,
    config: Rc<EngineConfig>,
}

impl DiagramEngine {
    pub fn new(config: EngineConfig) -> Self {
        let mut initial = AppState::new(config.canvas_size, config.view_container_size);
        initial.editor.mode = config.initial_mode;
        for panel in &config.panels {
            initial.panels.insert(panel.id.clone(), panel.clone());
        }
        let config = Rc::new(config);
        let store = Rc::new(RefCell::new(Store::new(initial)));

        let mut bus = EventBus::new();
        let dispatcher = Rc::new(Dispatcher::new(Rc::clone(&store), Rc::clone(&config)));
        for kind in EventKind::ALL {
            let dispatcher = Rc::clone(&dispatcher);
            bus.subscribe(kind, Box::new(move |event| dispatcher.dispatch_event(event)));
        }

        Self { bus, store, config }
    }

    /// Feed one semantic event through the pipeline.
    pub fn publish(&mut self, event: &SemanticEvent) {
        self.bus.publish(event);
    }

    /// Read the current state.
    pub fn with_state<R>(&self, read: impl FnOnce(&AppState) -> R) -> R {
        read(self.store.borrow().state())
    }

    /// Register a listener invoked with every fresh snapshot.
    pub fn on_state_change(&self, subscriber: Box<dyn FnMut(&AppState)>) {
        self.store.borrow_mut().subscribe(subscriber);
    }

    /// Drive the supplied render hooks from state changes.
    pub fn attach_renderer(&self, mut hooks: RenderHooks) {
        let config = Rc::clone(&self.config);
        let mut prev = self.store.borrow().state().clone();
        self.store.borrow_mut().subscribe(Box::new(move |next| {
            sync_renderers(&prev, next, &mut hooks, &config);
            prev = next.clone();
        }));
    }

    /// Dispatch an action directly, bypassing event translation.
    pub fn dispatch(&self, action: crate::state::actions::Action) {
        self.store.borrow_mut().dispatch(action);
    }

    /// Switch the editor mode.
    pub fn set_mode(&self, mode: EditorMode) {
        crate::state::editor::handle_set_mode(&mut self.store.borrow_mut(), mode);
    }

    pub fn undo(&self) {
        self.store.borrow_mut().undo();
    }

    pub fn redo(&self) {
        self.store.borrow_mut().redo();
    }
}

impl std::fmt::Debug for DiagramEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagramEngine")
            .field("bus", &self.bus)
            .field("store", &self.store.borrow())
            .finish()
    }
}
