#![forbid(unsafe_code)]

//! Render-target seam for trellis.
//!
//! # Role in trellis
//! Layout never draws. It talks to a [`RenderTarget`]: a backend-supplied
//! handle that maintains a scoped stack of parent-relative translations and
//! accepts node placements at the currently composed offset. Concrete
//! surfaces (DOM, canvas, terminal cells) implement the trait; this crate
//! ships the transform discipline and a recording implementation for tests
//! and headless harnesses.

/// Render-target trait and the recording implementation.
pub mod target;
/// Scoped stack of 2D translations.
pub mod transform;

pub use target::{Placement, RecordingTarget, RenderTarget};
pub use transform::TransformStack;
