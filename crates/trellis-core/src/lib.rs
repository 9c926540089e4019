#![forbid(unsafe_code)]

//! Shared vocabulary for the trellis layout engine.
//!
//! # Role in trellis
//! `trellis-core` holds the types every other crate speaks: sizes and
//! proposals for the two-phase negotiation, translations for the transform
//! stack, axes and alignments for stack containers, and stable node
//! identifiers for mounted trees.
//!
//! # How it fits in the system
//! `trellis-render` composes [`Translation`]s into a transform stack,
//! `trellis-view` negotiates [`Size`]s under [`Proposal`]s and addresses
//! mounted nodes by [`NodeId`]. This crate keeps that vocabulary free of
//! rendering or tree dependencies.

/// Cross-axis alignment enums and their offset factors.
pub mod alignment;
/// Sizes, proposals, translations, and axes.
pub mod geometry;
/// Stable identifiers for mounted nodes.
pub mod node;

pub use alignment::{HorizontalAlignment, StackAlignment, VerticalAlignment};
pub use geometry::{Axis, Proposal, Size, Translation};
pub use node::NodeId;
