#![forbid(unsafe_code)]

//! Geometric primitives for size negotiation and placement.
//!
//! All magnitudes are `f32` logical units with origin at the top-left.
//! Negative and NaN inputs are clamped to zero at construction so that
//! degenerate geometry never propagates through a layout pass.

use serde::{Deserialize, Serialize};

/// Clamp a scalar magnitude to the non-negative range, mapping NaN to zero.
#[inline]
fn sanitize(value: f32) -> f32 {
    if value.is_nan() || value < 0.0 { 0.0 } else { value }
}

/// The axis along which a stack arranges its children sequentially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left to right (row stacks).
    Horizontal,
    /// Top to bottom (column stacks).
    Vertical,
}

impl Axis {
    /// The axis perpendicular to this one.
    #[inline]
    #[must_use]
    pub const fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// A non-negative (width, height) pair.
///
/// Used both as a final size a node must lay out within and as the
/// resolved result of size negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Extent along the horizontal axis.
    pub width: f32,
    /// Extent along the vertical axis.
    pub height: f32,
}

impl Size {
    /// The zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a size, clamping negative and NaN components to zero.
    #[inline]
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Assemble a size from its stack-axis and cross-axis extents.
    #[inline]
    #[must_use]
    pub fn from_axes(axis: Axis, along: f32, across: f32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(along, across),
            Axis::Vertical => Self::new(across, along),
        }
    }

    /// Extent along the given axis.
    #[inline]
    #[must_use]
    pub const fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Extent across the given axis (along its perpendicular).
    #[inline]
    #[must_use]
    pub const fn across(&self, axis: Axis) -> f32 {
        self.along(axis.cross())
    }

    /// Componentwise maximum.
    #[inline]
    #[must_use]
    pub fn max(&self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Check whether either extent is zero.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// An advisory size hint passed to a child during measurement.
///
/// `None` on an axis means unconstrained: the child should use its natural
/// size along that axis. A child may ignore a proposal entirely; it is a
/// hint, not an allocation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Proposal {
    /// Proposed width, or `None` for unconstrained.
    pub width: Option<f32>,
    /// Proposed height, or `None` for unconstrained.
    pub height: Option<f32>,
}

impl Proposal {
    /// A proposal with no preference on either axis.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Create a proposal, clamping constrained components to non-negative.
    #[inline]
    #[must_use]
    pub fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self {
            width: width.map(sanitize),
            height: height.map(sanitize),
        }
    }

    /// Propose an exact size on both axes.
    #[inline]
    #[must_use]
    pub fn exact(size: Size) -> Self {
        Self {
            width: Some(size.width),
            height: Some(size.height),
        }
    }

    /// Proposed extent along the given axis.
    #[inline]
    #[must_use]
    pub const fn along(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Proposed extent across the given axis.
    #[inline]
    #[must_use]
    pub const fn across(&self, axis: Axis) -> Option<f32> {
        self.along(axis.cross())
    }

    /// Replace the extent along the given axis.
    #[inline]
    #[must_use]
    pub fn with_along(self, axis: Axis, value: Option<f32>) -> Self {
        let value = value.map(sanitize);
        match axis {
            Axis::Horizontal => Self {
                width: value,
                ..self
            },
            Axis::Vertical => Self {
                height: value,
                ..self
            },
        }
    }

    /// Shrink a constrained axis by `amount`, saturating at zero.
    ///
    /// An unconstrained axis stays unconstrained.
    #[inline]
    #[must_use]
    pub fn shrink_along(self, axis: Axis, amount: f32) -> Self {
        let shrunk = self.along(axis).map(|v| sanitize(v - amount));
        self.with_along(axis, shrunk)
    }

    /// Divide a constrained axis evenly by `count`.
    ///
    /// An unconstrained axis stays unconstrained; `count == 0` leaves the
    /// proposal untouched.
    #[inline]
    #[must_use]
    pub fn divide_along(self, axis: Axis, count: usize) -> Self {
        if count == 0 {
            return self;
        }
        let divided = self.along(axis).map(|v| v / count as f32);
        self.with_along(axis, divided)
    }

    /// Resolve to a concrete size, substituting `fallback` on
    /// unconstrained axes.
    #[inline]
    #[must_use]
    pub fn resolve(self, fallback: Size) -> Size {
        Size::new(
            self.width.unwrap_or(fallback.width),
            self.height.unwrap_or(fallback.height),
        )
    }
}

impl From<Size> for Proposal {
    fn from(size: Size) -> Self {
        Self::exact(size)
    }
}

/// A 2D translation offset, parent-relative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

impl Translation {
    /// The identity translation.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a translation. Offsets may be negative (a child shifted
    /// left/up relative to its parent), but NaN maps to zero.
    #[inline]
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: if x.is_nan() { 0.0 } else { x },
            y: if y.is_nan() { 0.0 } else { y },
        }
    }

    /// Assemble a translation from stack-axis and cross-axis offsets.
    #[inline]
    #[must_use]
    pub fn from_axes(axis: Axis, along: f32, across: f32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(along, across),
            Axis::Vertical => Self::new(across, along),
        }
    }

    /// Compose with another translation (vector addition).
    #[inline]
    #[must_use]
    pub fn compose(&self, other: Translation) -> Translation {
        Translation::new(self.x + other.x, self.y + other.y)
    }
}
