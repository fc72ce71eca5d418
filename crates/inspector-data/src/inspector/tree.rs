//! In-memory component tree answering inspector queries.

use tracing::{debug, instrument};

use super::Inspector;
use crate::config::InspectorConfig;
use crate::diagnostic::{InspectorError, Result, SourceLocation};
use crate::snapshot::InspectionSnapshot;

/// Handle to a component in a `ComponentTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Component {
    name: String,
    parent: Option<NodeId>,
    source: Option<SourceLocation>,
}

/// Arena of components. Parents are always inserted before their children,
/// so parent links can never form a cycle.
#[derive(Debug, Clone, Default)]
pub struct ComponentTree {
    nodes: Vec<Component>,
    config: InspectorConfig,
}

impl ComponentTree {
    pub fn new(config: InspectorConfig) -> Self {
        Self {
            nodes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a component with no parent.
    pub fn add_root(&mut self, name: impl Into<String>, source: Option<SourceLocation>) -> NodeId {
        self.push(name.into(), None, source)
    }

    /// Adds a component under `parent`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        source: Option<SourceLocation>,
    ) -> Result<NodeId> {
        self.component(parent)?;
        Ok(self.push(name.into(), Some(parent), source))
    }

    /// Display name of a component.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).map(|c| c.name.as_str())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|c| c.parent)
    }

    pub fn source(&self, id: NodeId) -> Option<&SourceLocation> {
        self.nodes.get(id.0).and_then(|c| c.source.as_ref())
    }

    /// Display names from the root down to `id`, root first.
    pub fn ancestry(&self, id: NodeId) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            let component = self.component(node)?;
            names.push(component.name.clone());
            current = component.parent;
        }
        names.reverse();
        Ok(names)
    }

    fn push(&mut self, name: String, parent: Option<NodeId>, source: Option<SourceLocation>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Component {
            name,
            parent,
            source,
        });
        id
    }

    fn component(&self, id: NodeId) -> Result<&Component> {
        self.nodes
            .get(id.0)
            .ok_or(InspectorError::UnknownNode { id: id.0 })
    }
}

impl Inspector for ComponentTree {
    type Node = NodeId;

    #[instrument(skip_all, fields(node = node.index()))]
    fn inspect(&self, node: &NodeId) -> Result<InspectionSnapshot> {
        let mut hierarchy = self.ancestry(*node)?;

        if let Some(limit) = self.config.depth_limit() {
            if hierarchy.len() > limit {
                let dropped = hierarchy.len() - limit;
                hierarchy.drain(..dropped);
                debug!(dropped, limit, "truncated inspector hierarchy");
            }
        }

        let source = self.component(*node)?.source.clone();
        Ok(InspectionSnapshot::innermost(hierarchy, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(config: InspectorConfig) -> (ComponentTree, NodeId, NodeId) {
        let mut tree = ComponentTree::new(config);
        let app = tree.add_root("App", SourceLocation::resolve("App.src", 1, 1));
        let screen = tree.add_child(app, "Screen", None).unwrap();
        let button = tree
            .add_child(screen, "Button", SourceLocation::resolve("Button.src", 10, 3))
            .unwrap();
        (tree, screen, button)
    }

    #[test]
    fn test_inspect_selects_node() {
        let (tree, _, button) = sample(InspectorConfig::default());
        let snapshot = tree.inspect(&button).unwrap();

        assert_eq!(snapshot.hierarchy(), ["App", "Screen", "Button"]);
        assert_eq!(snapshot.selected_index(), 2);
        assert_eq!(snapshot.file_name(), "Button.src");
        assert_eq!(snapshot.line_number(), 10);
        assert_eq!(snapshot.column_number(), 3);
    }

    #[test]
    fn test_inspect_unmapped_node() {
        let (tree, screen, _) = sample(InspectorConfig::default());
        let snapshot = tree.inspect(&screen).unwrap();

        assert_eq!(snapshot.hierarchy(), ["App", "Screen"]);
        assert_eq!(snapshot.selected_name(), Some("Screen"));
        assert!(!snapshot.is_source_resolved());
    }

    #[test]
    fn test_max_depth_keeps_inspected_node() {
        let config = InspectorConfig {
            max_depth: Some(2),
            ..InspectorConfig::default()
        };
        let (tree, _, button) = sample(config);
        let snapshot = tree.inspect(&button).unwrap();
        assert_eq!(snapshot.hierarchy(), ["Screen", "Button"]);
        assert_eq!(snapshot.selected_index(), 1);

        let config = InspectorConfig {
            max_depth: Some(0),
            ..InspectorConfig::default()
        };
        let (tree, _, button) = sample(config);
        assert_eq!(tree.inspect(&button).unwrap().hierarchy(), ["Button"]);
    }

    #[test]
    fn test_accessors() {
        let (tree, screen, button) = sample(InspectorConfig::default());
        let app = tree.parent(screen).unwrap();

        assert_eq!(tree.name(button), Some("Button"));
        assert_eq!(tree.name(app), Some("App"));
        assert_eq!(tree.parent(app), None);
        assert_eq!(tree.parent(screen), Some(app));
        assert_eq!(tree.parent(button), Some(screen));
        assert_eq!(tree.source(screen), None);
        assert_eq!(tree.source(button).map(|s| s.line()), Some(10));
        assert_eq!(tree.config(), &InspectorConfig::default());
        assert!(!tree.is_empty());

        let missing = NodeId(42);
        assert_eq!(tree.name(missing), None);
        assert_eq!(tree.parent(missing), None);
        assert_eq!(tree.source(missing), None);
    }

    #[test]
    fn test_unknown_node() {
        let (mut tree, _, _) = sample(InspectorConfig::default());
        let missing = NodeId(42);

        assert_eq!(tree.inspect(&missing).unwrap_err(), InspectorError::UnknownNode { id: 42 });
        assert!(tree.add_child(missing, "Orphan", None).is_err());
        assert_eq!(tree.len(), 3);
    }
}
