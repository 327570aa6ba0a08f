//! Engine configuration supplied by the embedding application.

use crate::state::types::{EditorMode, NodeState, PanelState};
use kurbo::Size;

/// Fraction of the wheel delta applied when a plain wheel gesture pans the
/// workspace.
pub const WHEEL_PAN_FACTOR: f64 = 0.5;

type NodeSizeLookup = Box<dyn Fn(&str) -> Option<Size>>;
type RerenderPredicate = Box<dyn Fn(&NodeState, &NodeState) -> bool>;

/// Static configuration for a [`DiagramEngine`](crate::engine::DiagramEngine).
pub struct EngineConfig {
    /// Mode the editor starts in.
    pub initial_mode: EditorMode,
    /// Diagram canvas size in workspace units.
    pub canvas_size: Size,
    /// Initial view container size in screen pixels.
    pub view_container_size: Size,
    /// Wheel pan speed; see [`WHEEL_PAN_FACTOR`].
    pub wheel_pan_factor: f64,
    /// Panels present at startup.
    pub panels: Vec<PanelState>,
    /// Fallback size lookup for palette drags whose element carries no
    /// explicit size attributes.
    pub node_size_for_type: Option<NodeSizeLookup>,
    /// Consumer veto over node re-render callbacks. `None` re-renders on any
    /// record change.
    pub should_rerender_node: Option<RerenderPredicate>,
}

impl EngineConfig {
    /// Resolve a preview size for a palette node type.
    pub fn size_for_node_type(&self, type_id: &str) -> Option<Size> {
        self.node_size_for_type.as_ref()?(type_id)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_mode: EditorMode::default(),
            canvas_size: Size::new(3200.0, 2400.0),
            view_container_size: Size::new(800.0, 600.0),
            wheel_pan_factor: WHEEL_PAN_FACTOR,
            panels: Vec::new(),
            node_size_for_type: None,
            should_rerender_node: None,
        }
    }
}

impl std::fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("initial_mode", &self.initial_mode)
            .field("canvas_size", &self.canvas_size)
            .field("view_container_size", &self.view_container_size)
            .field("wheel_pan_factor", &self.wheel_pan_factor)
            .field("panels", &self.panels.len())
            .field("node_size_for_type", &self.node_size_for_type.is_some())
            .field("should_rerender_node", &self.should_rerender_node.is_some())
            .finish()
    }
}
