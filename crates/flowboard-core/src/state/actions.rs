//! State-mutating actions.
//!
//! One sum type per domain, nested under [`Action`]. Reducers, the mode
//! policy and the inverse builders all match on these, so adding a variant
//! forces every table to be revisited at compile time.

use crate::events::TargetType;
use crate::state::types::{EdgeState, EditorMode, NodeState};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Every action the engine can dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Node(NodeAction),
    Edge(EdgeAction),
    Workspace(WorkspaceAction),
    Editor(EditorAction),
    Panel(PanelAction),
    Global(GlobalAction),
}

/// Node and potential-node actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeAction {
    Create {
        id: String,
        type_id: String,
        position: Point,
        size: Size,
        consumer_data: Option<serde_json::Value>,
    },
    Delete {
        id: String,
    },
    Select {
        id: String,
    },
    Deselect {
        id: String,
    },
    DragStart {
        id: String,
    },
    Drag {
        id: String,
        position: Point,
        size: Size,
        /// Canvas bounds the node is clamped into.
        workspace_rectangle: Rect,
    },
    DragEnd {
        id: String,
    },
    PotentialDragStart {
        type_id: String,
        position: Point,
        size: Size,
    },
    PotentialDrag {
        position: Point,
        workspace_rectangle: Rect,
    },
    PotentialDragEnd,
}

/// Edge and floating-edge actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EdgeAction {
    Create {
        id: String,
        src: String,
        dest: String,
        connector_src_type: Option<String>,
        connector_dest_type: Option<String>,
        consumer_data: Option<serde_json::Value>,
    },
    Delete {
        id: String,
    },
    Select {
        id: String,
    },
    Deselect {
        id: String,
    },
    MouseOver {
        id: String,
    },
    MouseOut {
        id: String,
    },
    DragStart {
        id: String,
        position: Point,
        connector_src_type: Option<String>,
    },
    Drag {
        position: Point,
    },
    DragEnd,
}

/// Workspace view and whole-selection actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkspaceAction {
    /// Clear the selected flag on every node and edge.
    Deselect,
    /// Select every node and edge.
    SelectAll,
    /// Pan: set the workspace origin's screen position.
    Drag { position: Point },
    /// Zoom by `delta`, keeping `anchor` (screen space) stationary.
    Zoom { delta: f64, anchor: Point },
    /// Container resized; update the viewport size.
    Resize { size: Size },
}

/// Editor chrome actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorAction {
    SetMode {
        mode: EditorMode,
    },
    ShowContextMenu {
        position: Point,
        target_type: TargetType,
    },
    HideContextMenu,
    ShowSelectionMarquee {
        anchor: Point,
    },
    UpdateSelectionMarquee {
        anchor: Point,
        position: Point,
    },
    HideSelectionMarquee,
}

/// Panel actions; positions are raw screen space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PanelAction {
    DragStart {
        id: String,
    },
    Drag {
        id: String,
        position: Point,
        /// Viewport the panel is clamped into.
        container_size: Size,
    },
}

/// Cross-domain bulk actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GlobalAction {
    /// Remove the listed nodes and edges in one step.
    DeleteItems {
        node_ids: Vec<String>,
        edge_ids: Vec<String>,
    },
    /// Insert full node/edge records (used to replay deletions in reverse).
    CreateItems {
        nodes: Vec<NodeState>,
        edges: Vec<EdgeState>,
    },
}
