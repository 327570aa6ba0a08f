//! Flowboard Core Library
//!
//! Platform-agnostic diagram editing engine: semantic input events in,
//! immutable state snapshots and render callbacks out.

pub mod bus;
pub mod config;
pub mod dispatcher;
pub mod engine;
pub mod events;
pub mod mode;
pub mod resolver;
pub mod state;
pub mod undo;

pub use bus::{EventBus, SubscriberId};
pub use config::{EngineConfig, WHEEL_PAN_FACTOR};
pub use dispatcher::Dispatcher;
pub use engine::{DiagramEngine, RenderHooks};
pub use events::{EventKind, EventTarget, KeyCode, Modifiers, SemanticEvent, TargetType};
pub use resolver::{resolve_of_type, resolve_target, SceneGraph, SceneId, TargetSource};
pub use state::actions::Action;
pub use state::store::Store;
pub use state::types::{
    AppState, EdgeState, EditorMode, NodeState, PanelState, PotentialEdge, PotentialNode,
    WorkspaceState,
};
pub use state::workspace::{MAX_SCALE, MIN_SCALE, ZOOM_FACTOR};
