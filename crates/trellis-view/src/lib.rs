#![forbid(unsafe_code)]

//! View descriptors, mounted trees, and the two-phase layout protocol.
//!
//! # Role in trellis
//! This crate is the layout core. It defines:
//!
//! - [`View`]: the closed descriptor sum type (leaves, transparent
//!   groups, stack containers) and the child-extraction flattening rule.
//! - [`MountedTree`]: the live arena of mounted nodes the reconciler
//!   keeps in 1:1 correspondence with extracted children, with strict
//!   validation and canonical snapshots.
//! - [`LayoutView`]: the measure-then-commit protocol
//!   ([`LayoutView::desired_size`] / [`LayoutView::layout`]) every
//!   container participates in, plus the [`measure_tree`] /
//!   [`layout_tree`] entry points the renderer drives.
//!
//! # Protocol at a glance
//! A container's executor receives an allocated size, derives each child's
//! proposal from the remaining extent (even division, spacing-aware),
//! queries the child's desired size, pushes a translation onto the render
//! target, recurses, and pops it. Traversal is single-threaded and
//! depth-first; `&mut` exclusivity of the target enforces the
//! one-in-flight-pass rule at compile time.

/// Two-phase size negotiation and layout execution.
pub mod layout;
/// Mounted-node trees, validation, and snapshots.
pub mod mount;
/// Immutable view descriptors and child extraction.
pub mod view;

pub use layout::{LayoutError, LayoutOptions, LayoutView, layout_tree, measure_tree};
pub use mount::{MountError, MountedNode, MountedTree, TREE_SNAPSHOT_SCHEMA_VERSION, TreeSnapshot};
pub use view::{Group, Leaf, Sizing, Stack, View, extract_children};
