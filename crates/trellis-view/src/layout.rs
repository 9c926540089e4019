#![forbid(unsafe_code)]

//! Two-phase size negotiation and layout execution.
//!
//! Every container-like view implements [`LayoutView`]: measure with
//! [`LayoutView::desired_size`] under an advisory [`Proposal`], then commit
//! with [`LayoutView::layout`] under a final [`Size`]. Measurement never
//! touches the render target; commitment mutates nothing but the target's
//! transform context and placement log.
//!
//! The stack policy is the even-division default: the stack-axis extent,
//! minus inter-child spacing, is divided evenly among children, and the
//! cross-axis extent passes through whole. Intrinsic-minimum-aware
//! measurement is an extension point, not implemented here.

use std::fmt;

use trellis_core::{NodeId, Proposal, Size, Translation};
use trellis_render::RenderTarget;

use crate::mount::MountedTree;
use crate::view::{Group, Leaf, Sizing, Stack, View};

/// Context defaults a layout pass runs under.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct LayoutOptions {
    /// Spacing applied between stack children whose descriptor carries no
    /// explicit spacing override.
    pub default_spacing: f32,
}

impl LayoutOptions {
    /// Set the context-default spacing.
    #[must_use]
    pub fn default_spacing(mut self, spacing: f32) -> Self {
        self.default_spacing = spacing;
        self
    }
}

/// Contract violations surfaced during a layout pass.
///
/// A structurally inconsistent mount is a reconciliation-invariant
/// violation and is reported to the caller, never skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// A node's mounted child count disagrees with its descriptor's
    /// extraction.
    StructuralMismatch {
        node: NodeId,
        expected: usize,
        actual: usize,
    },
    /// A child entry could not be resolved to a concrete mounted node.
    MissingNode { node: NodeId },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StructuralMismatch {
                node,
                expected,
                actual,
            } => write!(
                f,
                "node {node} mounts {actual} children but its descriptor extracts {expected}"
            ),
            Self::MissingNode { node } => {
                write!(f, "mounted node {node} not found during layout")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// The two-phase protocol every container-like view implements.
pub trait LayoutView {
    /// Report the size this node wants under an advisory proposal.
    ///
    /// Strictly measurement: must not recurse into [`LayoutView::layout`]
    /// and must not touch any render target. A node with no mounted
    /// children reports zero.
    fn desired_size(
        &self,
        proposal: Proposal,
        node: NodeId,
        tree: &MountedTree,
        options: &LayoutOptions,
    ) -> Size;

    /// Commit a layout under a final size, assigning each child a position
    /// and concrete size and recursing into the child's own layout.
    ///
    /// The only side effect is on `target`: a translation pushed before
    /// each child's recursive layout and popped after it, and one
    /// placement per visited child. A node with no mounted children is a
    /// no-op.
    fn layout(
        &self,
        size: Size,
        node: NodeId,
        tree: &MountedTree,
        target: &mut dyn RenderTarget,
        options: &LayoutOptions,
    ) -> Result<(), LayoutError>;
}

impl LayoutView for Leaf {
    fn desired_size(
        &self,
        proposal: Proposal,
        _node: NodeId,
        _tree: &MountedTree,
        _options: &LayoutOptions,
    ) -> Size {
        match self.sizing {
            Sizing::Fixed(size) => size,
            Sizing::Flexible => proposal.resolve(Size::ZERO),
        }
    }

    fn layout(
        &self,
        _size: Size,
        node: NodeId,
        tree: &MountedTree,
        _target: &mut dyn RenderTarget,
        _options: &LayoutOptions,
    ) -> Result<(), LayoutError> {
        let mounted = tree.children(node).len();
        if mounted != 0 {
            return Err(LayoutError::StructuralMismatch {
                node,
                expected: 0,
                actual: mounted,
            });
        }
        Ok(())
    }
}

impl LayoutView for Group {
    fn desired_size(
        &self,
        proposal: Proposal,
        node: NodeId,
        tree: &MountedTree,
        options: &LayoutOptions,
    ) -> Size {
        let mut desired = Size::ZERO;
        for &child in tree.children(node) {
            let Some(view) = tree.view(child) else {
                continue;
            };
            desired = desired.max(view.desired_size(proposal, child, tree, options));
        }
        desired
    }

    fn layout(
        &self,
        size: Size,
        node: NodeId,
        tree: &MountedTree,
        target: &mut dyn RenderTarget,
        options: &LayoutOptions,
    ) -> Result<(), LayoutError> {
        let children = tree.children(node);
        if children.len() != self.children.len() {
            return Err(LayoutError::StructuralMismatch {
                node,
                expected: self.children.len(),
                actual: children.len(),
            });
        }
        if children.is_empty() {
            return Ok(());
        }
        // Transparent overlay: every element shares the group's offset and
        // is proposed the full final size.
        for &child in children {
            let view = tree
                .view(child)
                .ok_or(LayoutError::MissingNode { node: child })?;
            let child_size = view.desired_size(Proposal::exact(size), child, tree, options);
            target.place(child, child_size);
            view.layout(child_size, child, tree, target, options)?;
        }
        Ok(())
    }
}

impl Stack {
    fn resolved_spacing(&self, options: &LayoutOptions) -> f32 {
        let spacing = self.spacing.unwrap_or(options.default_spacing);
        if spacing.is_nan() || spacing < 0.0 {
            0.0
        } else {
            spacing
        }
    }
}

impl LayoutView for Stack {
    fn desired_size(
        &self,
        proposal: Proposal,
        node: NodeId,
        tree: &MountedTree,
        options: &LayoutOptions,
    ) -> Size {
        let children = tree.children(node);
        let count = children.len();
        if count == 0 {
            return Size::ZERO;
        }

        let spacing = self.resolved_spacing(options);
        let total_gap = spacing * (count - 1) as f32;
        let child_proposal = proposal
            .shrink_along(self.axis, total_gap)
            .divide_along(self.axis, count);

        let mut along_sum = 0.0_f32;
        let mut cross_max = 0.0_f32;
        for &child in children {
            // Measurement is advisory; unresolvable entries surface as
            // errors in the commit phase, not here.
            let Some(view) = tree.view(child) else {
                continue;
            };
            let desired = view.desired_size(child_proposal, child, tree, options);
            along_sum += desired.along(self.axis);
            cross_max = cross_max.max(desired.across(self.axis));
        }
        Size::from_axes(self.axis, along_sum + total_gap, cross_max)
    }

    fn layout(
        &self,
        size: Size,
        node: NodeId,
        tree: &MountedTree,
        target: &mut dyn RenderTarget,
        options: &LayoutOptions,
    ) -> Result<(), LayoutError> {
        let children = tree.children(node);
        let expected = self.child_views().len();
        if children.len() != expected {
            return Err(LayoutError::StructuralMismatch {
                node,
                expected,
                actual: children.len(),
            });
        }
        if children.is_empty() {
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "stack_layout",
            axis = ?self.axis,
            children = children.len(),
            w = size.width,
            h = size.height
        )
        .entered();

        let spacing = self.resolved_spacing(options);
        let cross = size.across(self.axis);
        let mut remaining = size.along(self.axis);
        let mut offset = 0.0_f32;

        for (index, &child) in children.iter().enumerate() {
            let view = tree
                .view(child)
                .ok_or(LayoutError::MissingNode { node: child })?;

            // Remaining extent, minus the gaps still owed, split evenly
            // among the children not yet placed.
            let remaining_count = children.len() - index;
            let remaining_gap = spacing * (remaining_count - 1) as f32;
            let slice = (remaining - remaining_gap).max(0.0) / remaining_count as f32;
            let child_proposal = Proposal::exact(Size::from_axes(self.axis, slice, cross));

            let child_size = view.desired_size(child_proposal, child, tree, options);
            let slack = (cross - child_size.across(self.axis)).max(0.0);
            let cross_offset = slack * self.alignment.factor();

            #[cfg(feature = "tracing")]
            tracing::trace!(
                message = "stack.place",
                child = child.get(),
                along = offset,
                across = cross_offset
            );

            target.push_transform(Translation::from_axes(self.axis, offset, cross_offset));
            target.place(child, child_size);
            let result = view.layout(child_size, child, tree, target, options);
            target.pop_transform();
            result?;

            // The running offset advances by an integral amount; the
            // fractional part of a child's extent is truncated.
            let advance = child_size.along(self.axis).trunc();
            if index + 1 < children.len() {
                offset += advance + spacing;
                remaining = (remaining - advance - spacing).max(0.0);
            }
        }
        Ok(())
    }
}

impl LayoutView for View {
    fn desired_size(
        &self,
        proposal: Proposal,
        node: NodeId,
        tree: &MountedTree,
        options: &LayoutOptions,
    ) -> Size {
        match self {
            Self::Leaf(leaf) => leaf.desired_size(proposal, node, tree, options),
            Self::Group(group) => group.desired_size(proposal, node, tree, options),
            Self::Stack(stack) => stack.desired_size(proposal, node, tree, options),
        }
    }

    fn layout(
        &self,
        size: Size,
        node: NodeId,
        tree: &MountedTree,
        target: &mut dyn RenderTarget,
        options: &LayoutOptions,
    ) -> Result<(), LayoutError> {
        match self {
            Self::Leaf(leaf) => leaf.layout(size, node, tree, target, options),
            Self::Group(group) => group.layout(size, node, tree, target, options),
            Self::Stack(stack) => stack.layout(size, node, tree, target, options),
        }
    }
}

/// Measure a mounted tree's root under a proposal.
///
/// An empty arena measures as zero, matching the empty-container contract.
#[must_use]
pub fn measure_tree(tree: &MountedTree, proposal: Proposal, options: &LayoutOptions) -> Size {
    match tree.view(tree.root()) {
        Some(view) => view.desired_size(proposal, tree.root(), tree, options),
        None => Size::ZERO,
    }
}

/// Lay out a mounted tree within an allocated final size.
///
/// Places the root at the target's current offset and recursively commits
/// the whole tree. This is the entry point the reconciler/renderer calls
/// once per allocation.
pub fn layout_tree(
    tree: &MountedTree,
    size: Size,
    target: &mut dyn RenderTarget,
    options: &LayoutOptions,
) -> Result<(), LayoutError> {
    let root = tree.root();
    let view = tree.view(root).ok_or(LayoutError::MissingNode { node: root })?;
    target.place(root, size);
    view.layout(size, root, tree, target, options)
}
