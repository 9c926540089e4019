#![forbid(unsafe_code)]

//! Trellis public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use trellis::prelude::*;
//!
//! let view = View::from(Stack::vertical(View::group([
//!     View::fixed(80.0, 30.0),
//!     View::flexible(),
//! ])));
//! let tree = MountedTree::mount(view).unwrap();
//!
//! let mut target = RecordingTarget::new();
//! layout_tree(
//!     &tree,
//!     Size::new(100.0, 200.0),
//!     &mut target,
//!     &LayoutOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(target.depth(), 0);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use trellis_core::{
    Axis, HorizontalAlignment, NodeId, Proposal, Size, StackAlignment, Translation,
    VerticalAlignment,
};

// --- Render re-exports -----------------------------------------------------

pub use trellis_render::{Placement, RecordingTarget, RenderTarget, TransformStack};

// --- View re-exports -------------------------------------------------------

pub use trellis_view::{
    Group, Leaf, LayoutError, LayoutOptions, LayoutView, MountError, MountedNode, MountedTree,
    Sizing, Stack, TreeSnapshot, View, extract_children, layout_tree, measure_tree,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Axis, HorizontalAlignment, LayoutOptions, LayoutView, MountedTree, Proposal,
        RecordingTarget, RenderTarget, Size, Stack, Translation, VerticalAlignment, View,
        layout_tree, measure_tree,
    };
}
