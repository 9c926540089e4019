#![forbid(unsafe_code)]

//! Render-target trait and a recording implementation.

use serde::{Deserialize, Serialize};
use trellis_core::{NodeId, Size, Translation};

use crate::transform::TransformStack;

/// The per-traversal rendering seam the layout executor drives.
///
/// A backend implements this to receive the results of a layout pass.
/// The contract mirrors the traversal: `push_transform` before descending
/// into a child, `pop_transform` after the child's layout returns, and
/// `place` to commit a node's final size at the currently composed offset.
///
/// Implementations must keep push/pop balanced bookkeeping; the executor
/// guarantees every push is matched by a pop before its enclosing call
/// returns, including on error paths.
pub trait RenderTarget {
    /// Push a parent-relative translation for the subtree about to be
    /// laid out.
    fn push_transform(&mut self, offset: Translation);

    /// Pop the translation pushed for the subtree just finished.
    fn pop_transform(&mut self);

    /// Commit a node's final size at the currently composed offset.
    fn place(&mut self, node: NodeId, size: Size);
}

/// A committed node placement in root coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// The node this placement belongs to.
    pub node: NodeId,
    /// Origin in the traversal root's coordinate space.
    pub origin: Translation,
    /// Final size the node was laid out within.
    pub size: Size,
}

/// A render target that records placements instead of drawing.
///
/// Placements are kept in visit order (parents before their children),
/// with origins resolved against the composed transform at `place` time.
/// Tests and headless harnesses assert on the recorded sequence; snapshot
/// tooling serializes it.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    transforms: TransformStack,
    placements: Vec<Placement>,
}

impl RecordingTarget {
    /// Create an empty recording target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded placements in visit order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Current transform-stack depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.transforms.depth()
    }

    /// The first recorded placement for `node`, if any.
    #[must_use]
    pub fn find(&self, node: NodeId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.node == node)
    }
}

impl RenderTarget for RecordingTarget {
    fn push_transform(&mut self, offset: Translation) {
        self.transforms.push(offset);
    }

    fn pop_transform(&mut self) {
        self.transforms.pop();
    }

    fn place(&mut self, node: NodeId, size: Size) {
        self.placements.push(Placement {
            node,
            origin: self.transforms.offset(),
            size,
        });
    }
}
