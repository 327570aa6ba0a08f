//! Target resolution over an injected tree abstraction.
//!
//! Maps a raw interaction point (as a node reference into the host's UI
//! tree) to the nearest tagged diagram entity by walking ancestry. The host
//! toolkit is abstracted behind [`TargetSource`]; the crate ships
//! [`SceneGraph`], a small arena implementation used by consumers that have
//! no retained tree of their own, and by tests.

use crate::events::{EventTarget, TargetType};
use std::collections::BTreeMap;

/// A tree of interactive elements the resolver can walk.
pub trait TargetSource {
    /// Opaque reference to a tree node.
    type NodeRef: Copy;

    /// Parent of a node, `None` at the root.
    fn parent(&self, node: Self::NodeRef) -> Option<Self::NodeRef>;

    /// Entity-type marker on a node, if it is tagged.
    fn target_type(&self, node: Self::NodeRef) -> Option<TargetType>;

    /// Entity id on a node, if any.
    fn entity_id(&self, node: Self::NodeRef) -> Option<String>;

    /// Data attributes on a node.
    fn attributes(&self, node: Self::NodeRef) -> BTreeMap<String, String> {
        BTreeMap::new()
    }
}

/// Resolve the nearest tagged ancestor (including `origin` itself).
///
/// The returned target carries the matched ancestor's id and type, and the
/// data attributes of the origin element. `None` means no tagged ancestor
/// exists up to the root.
pub fn resolve_target<S: TargetSource>(source: &S, origin: S::NodeRef) -> Option<EventTarget> {
    let mut cursor = Some(origin);
    while let Some(node) = cursor {
        if let Some(target_type) = source.target_type(node) {
            return Some(EventTarget {
                id: source.entity_id(node),
                target_type,
                attributes: source.attributes(origin),
            });
        }
        cursor = source.parent(node);
    }
    None
}

/// Resolve the nearest ancestor tagged with a specific type.
///
/// Used for wheel events to confirm the pointer is over the workspace
/// before treating the event as pan/zoom.
pub fn resolve_of_type<S: TargetSource>(
    source: &S,
    origin: S::NodeRef,
    wanted: TargetType,
) -> Option<EventTarget> {
    let mut cursor = Some(origin);
    while let Some(node) = cursor {
        if source.target_type(node) == Some(wanted) {
            return Some(EventTarget {
                id: source.entity_id(node),
                target_type: wanted,
                attributes: source.attributes(origin),
            });
        }
        cursor = source.parent(node);
    }
    None
}

/// Index into a [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId(usize);

#[derive(Debug, Clone, Default)]
struct SceneEntry {
    parent: Option<SceneId>,
    target_type: Option<TargetType>,
    entity_id: Option<String>,
    attributes: BTreeMap<String, String>,
}

/// Arena-backed implementation of [`TargetSource`].
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    entries: Vec<SceneEntry>,
}

impl SceneGraph {
    /// Create an empty scene graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an untagged element.
    pub fn add_element(&mut self, parent: Option<SceneId>) -> SceneId {
        self.entries.push(SceneEntry {
            parent,
            ..SceneEntry::default()
        });
        SceneId(self.entries.len() - 1)
    }

    /// Add an element tagged as a diagram entity.
    pub fn add_entity(
        &mut self,
        parent: Option<SceneId>,
        target_type: TargetType,
        entity_id: Option<&str>,
    ) -> SceneId {
        self.entries.push(SceneEntry {
            parent,
            target_type: Some(target_type),
            entity_id: entity_id.map(str::to_string),
            attributes: BTreeMap::new(),
        });
        SceneId(self.entries.len() - 1)
    }

    /// Set a data attribute on an element.
    pub fn set_attribute(&mut self, node: SceneId, key: &str, value: &str) {
        self.entries[node.0]
            .attributes
            .insert(key.to_string(), value.to_string());
    }
}

impl TargetSource for SceneGraph {
    type NodeRef = SceneId;

    fn parent(&self, node: SceneId) -> Option<SceneId> {
        self.entries[node.0].parent
    }

    fn target_type(&self, node: SceneId) -> Option<TargetType> {
        self.entries[node.0].target_type
    }

    fn entity_id(&self, node: SceneId) -> Option<String> {
        self.entries[node.0].entity_id.clone()
    }

    fn attributes(&self, node: SceneId) -> BTreeMap<String, String> {
        self.entries[node.0].attributes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ATTR_CONNECTOR_TYPE;

    #[test]
    fn test_resolves_self_when_tagged() {
        let mut scene = SceneGraph::new();
        let node = scene.add_entity(None, TargetType::Node, Some("n1"));

        let target = resolve_target(&scene, node).unwrap();
        assert_eq!(target.target_type, TargetType::Node);
        assert_eq!(target.id.as_deref(), Some("n1"));
    }

    #[test]
    fn test_walks_ancestry_to_nearest_tag() {
        let mut scene = SceneGraph::new();
        let workspace = scene.add_entity(None, TargetType::Workspace, None);
        let node = scene.add_entity(Some(workspace), TargetType::Node, Some("n1"));
        let label = scene.add_element(Some(node));
        let glyph = scene.add_element(Some(label));

        let target = resolve_target(&scene, glyph).unwrap();
        assert_eq!(target.target_type, TargetType::Node);
        assert_eq!(target.id.as_deref(), Some("n1"));
    }

    #[test]
    fn test_untagged_tree_resolves_to_none() {
        let mut scene = SceneGraph::new();
        let root = scene.add_element(None);
        let leaf = scene.add_element(Some(root));

        assert!(resolve_target(&scene, leaf).is_none());
    }

    #[test]
    fn test_attributes_come_from_origin() {
        let mut scene = SceneGraph::new();
        let node = scene.add_entity(None, TargetType::Node, Some("n1"));
        let connector = scene.add_entity(Some(node), TargetType::NodeConnector, Some("n1"));
        scene.set_attribute(connector, ATTR_CONNECTOR_TYPE, "output");

        let target = resolve_target(&scene, connector).unwrap();
        assert_eq!(target.target_type, TargetType::NodeConnector);
        assert_eq!(target.connector_type().as_deref(), Some("output"));
    }

    #[test]
    fn test_resolve_of_type_skips_closer_tags() {
        let mut scene = SceneGraph::new();
        let workspace = scene.add_entity(None, TargetType::Workspace, None);
        let node = scene.add_entity(Some(workspace), TargetType::Node, Some("n1"));

        let target = resolve_of_type(&scene, node, TargetType::Workspace).unwrap();
        assert_eq!(target.target_type, TargetType::Workspace);

        let mut detached = SceneGraph::new();
        let loose = detached.add_entity(None, TargetType::Node, Some("n2"));
        assert!(resolve_of_type(&detached, loose, TargetType::Workspace).is_none());
    }
}
