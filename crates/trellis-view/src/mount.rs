#![forbid(unsafe_code)]

//! Mounted-node trees: the live counterpart of immutable view descriptors.
//!
//! A [`MountedTree`] is an arena of nodes keyed by [`NodeId`], with explicit
//! parent/child links. Nodes are created when a descriptor is first attached,
//! their child lists rebuilt when reconciliation replaces content, and
//! destroyed when their descriptor leaves the tree.
//!
//! The module also provides:
//!
//! - Canonical serialization snapshots for replay/diff tooling.
//! - Strict validation that rejects malformed trees, including the 1:1
//!   correspondence between each node's mounted children and the child
//!   sequence its descriptor extracts.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use trellis_core::NodeId;

use crate::view::{View, extract_children};

/// Current mounted-tree snapshot schema version.
pub const TREE_SNAPSHOT_SCHEMA_VERSION: u16 = 1;

/// Structural defects in a mounted tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    NodeIdOverflow {
        current: NodeId,
    },
    UnsupportedSchemaVersion {
        version: u16,
    },
    MissingNode {
        node: NodeId,
    },
    MissingRoot {
        root: NodeId,
    },
    RootHasParent {
        root: NodeId,
        parent: NodeId,
    },
    DuplicateNodeId {
        node: NodeId,
    },
    MissingChild {
        parent: NodeId,
        child: NodeId,
    },
    ParentMismatch {
        node: NodeId,
        expected: Option<NodeId>,
        actual: Option<NodeId>,
    },
    CycleDetected {
        node: NodeId,
    },
    UnreachableNode {
        node: NodeId,
    },
    /// A node's mounted children disagree in count with the child sequence
    /// its descriptor extracts.
    ChildCountMismatch {
        node: NodeId,
        expected: usize,
        actual: usize,
    },
    /// A mounted child's descriptor is not the one its parent extracts at
    /// that position.
    ChildContentMismatch {
        parent: NodeId,
        child: NodeId,
    },
    NextIdNotAfterExisting {
        next_id: NodeId,
        max_existing: NodeId,
    },
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeIdOverflow { current } => {
                write!(f, "node id space exhausted at {current}")
            }
            Self::UnsupportedSchemaVersion { version } => write!(
                f,
                "unsupported tree snapshot schema version {version} (expected {TREE_SNAPSHOT_SCHEMA_VERSION})"
            ),
            Self::MissingNode { node } => write!(f, "mounted node {node} not found"),
            Self::MissingRoot { root } => write!(f, "root node {root} not found"),
            Self::RootHasParent { root, parent } => {
                write!(f, "root node {root} must not have parent {parent}")
            }
            Self::DuplicateNodeId { node } => write!(f, "duplicate node id {node}"),
            Self::MissingChild { parent, child } => {
                write!(f, "node {parent} references missing child {child}")
            }
            Self::ParentMismatch {
                node,
                expected,
                actual,
            } => write!(
                f,
                "node {node} parent mismatch: expected {:?}, got {:?}",
                expected.map(NodeId::get),
                actual.map(NodeId::get)
            ),
            Self::CycleDetected { node } => {
                write!(f, "node {node} is reachable through more than one path")
            }
            Self::UnreachableNode { node } => {
                write!(f, "node {node} is not reachable from the root")
            }
            Self::ChildCountMismatch {
                node,
                expected,
                actual,
            } => write!(
                f,
                "node {node} mounts {actual} children but its descriptor extracts {expected}"
            ),
            Self::ChildContentMismatch { parent, child } => write!(
                f,
                "child {child} of node {parent} does not match the extracted descriptor at its position"
            ),
            Self::NextIdNotAfterExisting {
                next_id,
                max_existing,
            } => write!(
                f,
                "next id {next_id} must be greater than every existing id (max {max_existing})"
            ),
        }
    }
}

impl std::error::Error for MountError {}

/// A live tree node wrapping a view descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountedNode {
    id: NodeId,
    parent: Option<NodeId>,
    view: View,
    children: Vec<NodeId>,
}

impl MountedNode {
    /// This node's identifier.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The parent node, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The descriptor this node was mounted from.
    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Mounted children, in extraction order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Canonical serialized tree shape for replay/diff tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    #[serde(default = "default_schema_version")]
    pub schema_version: u16,
    pub root: NodeId,
    pub next_id: NodeId,
    pub nodes: Vec<MountedNode>,
}

fn default_schema_version() -> u16 {
    TREE_SNAPSHOT_SCHEMA_VERSION
}

/// An arena of mounted nodes with a designated root.
///
/// Node storage is a `BTreeMap` so iteration order is deterministic for
/// snapshots and replay.
#[derive(Debug, Clone, PartialEq)]
pub struct MountedTree {
    nodes: BTreeMap<NodeId, MountedNode>,
    root: NodeId,
    next_id: NodeId,
}

impl MountedTree {
    /// Mount a descriptor tree, creating one node per extracted child,
    /// recursively, in extraction order.
    pub fn mount(view: View) -> Result<Self, MountError> {
        let mut tree = Self {
            nodes: BTreeMap::new(),
            root: NodeId::MIN,
            next_id: NodeId::MIN,
        };
        tree.root = tree.mount_subtree(view, None)?;
        Ok(tree)
    }

    /// The root node's identifier.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&MountedNode> {
        self.nodes.get(&id)
    }

    /// Look up a node's descriptor.
    #[must_use]
    pub fn view(&self, id: NodeId) -> Option<&View> {
        self.nodes.get(&id).map(MountedNode::view)
    }

    /// A node's mounted children, or an empty slice for an unknown id.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(&id).map_or(&[], MountedNode::children)
    }

    /// Number of mounted nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes. Trees built through
    /// [`MountedTree::mount`] always hold at least the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all mounted nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &MountedNode> {
        self.nodes.values()
    }

    /// Reconciliation hook: replace a node's descriptor and rebuild its
    /// child subtree.
    ///
    /// The old child subtrees are unmounted; new children are mounted 1:1
    /// with the replacement descriptor's extraction.
    pub fn remount(&mut self, node: NodeId, view: View) -> Result<(), MountError> {
        let old_children = self
            .nodes
            .get(&node)
            .ok_or(MountError::MissingNode { node })?
            .children
            .clone();
        for child in old_children {
            self.unmount_subtree(child);
        }
        let child_views: Vec<View> = extract_children(&view).to_vec();
        let mut children = Vec::with_capacity(child_views.len());
        for child_view in child_views {
            children.push(self.mount_subtree(child_view, Some(node))?);
        }
        if let Some(entry) = self.nodes.get_mut(&node) {
            entry.view = view;
            entry.children = children;
        }
        Ok(())
    }

    /// Capture a canonical snapshot of the tree.
    #[must_use]
    pub fn snapshot(&self) -> TreeSnapshot {
        TreeSnapshot {
            schema_version: TREE_SNAPSHOT_SCHEMA_VERSION,
            root: self.root,
            next_id: self.next_id,
            nodes: self.nodes.values().cloned().collect(),
        }
    }

    /// Rebuild a tree from a snapshot, validating it strictly.
    pub fn from_snapshot(snapshot: TreeSnapshot) -> Result<Self, MountError> {
        if snapshot.schema_version != TREE_SNAPSHOT_SCHEMA_VERSION {
            return Err(MountError::UnsupportedSchemaVersion {
                version: snapshot.schema_version,
            });
        }
        let mut nodes = BTreeMap::new();
        for node in snapshot.nodes {
            let id = node.id;
            if nodes.insert(id, node).is_some() {
                return Err(MountError::DuplicateNodeId { node: id });
            }
        }
        if let Some(&max_existing) = nodes.keys().next_back()
            && max_existing >= snapshot.next_id
        {
            return Err(MountError::NextIdNotAfterExisting {
                next_id: snapshot.next_id,
                max_existing,
            });
        }
        let tree = Self {
            nodes,
            root: snapshot.root,
            next_id: snapshot.next_id,
        };
        tree.validate()?;
        Ok(tree)
    }

    /// Strictly validate the tree's structure.
    ///
    /// Checks root presence, parent/child link consistency, single-path
    /// reachability, and the 1:1 correspondence between every node's
    /// mounted children and its descriptor's extraction (count and
    /// content).
    pub fn validate(&self) -> Result<(), MountError> {
        let root = self
            .nodes
            .get(&self.root)
            .ok_or(MountError::MissingRoot { root: self.root })?;
        if let Some(parent) = root.parent {
            return Err(MountError::RootHasParent {
                root: self.root,
                parent,
            });
        }

        for node in self.nodes.values() {
            let extracted = extract_children(&node.view);
            if extracted.len() != node.children.len() {
                return Err(MountError::ChildCountMismatch {
                    node: node.id,
                    expected: extracted.len(),
                    actual: node.children.len(),
                });
            }
            for (child_view, &child_id) in extracted.iter().zip(&node.children) {
                let child = self.nodes.get(&child_id).ok_or(MountError::MissingChild {
                    parent: node.id,
                    child: child_id,
                })?;
                if child.parent != Some(node.id) {
                    return Err(MountError::ParentMismatch {
                        node: child_id,
                        expected: Some(node.id),
                        actual: child.parent,
                    });
                }
                if child.view != *child_view {
                    return Err(MountError::ChildContentMismatch {
                        parent: node.id,
                        child: child_id,
                    });
                }
            }
        }

        let mut visited = BTreeSet::new();
        let mut pending = vec![self.root];
        while let Some(id) = pending.pop() {
            if !visited.insert(id) {
                return Err(MountError::CycleDetected { node: id });
            }
            pending.extend_from_slice(self.children(id));
        }
        for &id in self.nodes.keys() {
            if !visited.contains(&id) {
                return Err(MountError::UnreachableNode { node: id });
            }
        }
        Ok(())
    }

    fn alloc(&mut self) -> Result<NodeId, MountError> {
        let id = self.next_id;
        self.next_id = id
            .checked_next()
            .ok_or(MountError::NodeIdOverflow { current: id })?;
        Ok(id)
    }

    fn mount_subtree(&mut self, view: View, parent: Option<NodeId>) -> Result<NodeId, MountError> {
        let id = self.alloc()?;
        let child_views: Vec<View> = extract_children(&view).to_vec();
        let mut children = Vec::with_capacity(child_views.len());
        for child_view in child_views {
            children.push(self.mount_subtree(child_view, Some(id))?);
        }
        self.nodes.insert(
            id,
            MountedNode {
                id,
                parent,
                view,
                children,
            },
        );
        Ok(id)
    }

    fn unmount_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(&id) {
            for child in node.children {
                self.unmount_subtree(child);
            }
        }
    }
}
