#![forbid(unsafe_code)]

//! Cross-axis alignment for stack containers.
//!
//! An alignment maps to an offset factor in `[0.0, 1.0]`: a child narrower
//! than its container is shifted across the stack axis by
//! `(container_cross - child_cross) * factor`.

use serde::{Deserialize, Serialize};

/// An alignment position along the horizontal axis.
///
/// Carried by vertical stacks, whose cross axis is horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    Leading,
    #[default]
    Center,
    Trailing,
}

impl HorizontalAlignment {
    /// Offset factor: leading 0, center 0.5, trailing 1.
    #[inline]
    #[must_use]
    pub const fn factor(self) -> f32 {
        match self {
            Self::Leading => 0.0,
            Self::Center => 0.5,
            Self::Trailing => 1.0,
        }
    }
}

/// An alignment position along the vertical axis.
///
/// Carried by horizontal stacks, whose cross axis is vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

impl VerticalAlignment {
    /// Offset factor: top 0, center 0.5, bottom 1.
    #[inline]
    #[must_use]
    pub const fn factor(self) -> f32 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
        }
    }
}

/// The cross-axis alignment a stack descriptor carries.
///
/// Which variant is meaningful depends on the stack axis: vertical stacks
/// align horizontally, horizontal stacks align vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackAlignment {
    Horizontal(HorizontalAlignment),
    Vertical(VerticalAlignment),
}

impl StackAlignment {
    /// Offset factor for the carried alignment.
    #[inline]
    #[must_use]
    pub const fn factor(self) -> f32 {
        match self {
            Self::Horizontal(alignment) => alignment.factor(),
            Self::Vertical(alignment) => alignment.factor(),
        }
    }
}

impl From<HorizontalAlignment> for StackAlignment {
    fn from(alignment: HorizontalAlignment) -> Self {
        Self::Horizontal(alignment)
    }
}

impl From<VerticalAlignment> for StackAlignment {
    fn from(alignment: VerticalAlignment) -> Self {
        Self::Vertical(alignment)
    }
}

#[cfg(test)]
mod tests {
    use super::{HorizontalAlignment, StackAlignment, VerticalAlignment};

    #[test]
    fn factors_map_to_unit_interval() {
        assert_eq!(HorizontalAlignment::Leading.factor(), 0.0);
        assert_eq!(HorizontalAlignment::Center.factor(), 0.5);
        assert_eq!(HorizontalAlignment::Trailing.factor(), 1.0);
        assert_eq!(VerticalAlignment::Top.factor(), 0.0);
        assert_eq!(VerticalAlignment::Center.factor(), 0.5);
        assert_eq!(VerticalAlignment::Bottom.factor(), 1.0);
    }

    #[test]
    fn defaults_are_centered() {
        assert_eq!(HorizontalAlignment::default(), HorizontalAlignment::Center);
        assert_eq!(VerticalAlignment::default(), VerticalAlignment::Center);
    }

    #[test]
    fn stack_alignment_dispatches_factor() {
        assert_eq!(
            StackAlignment::from(HorizontalAlignment::Trailing).factor(),
            1.0
        );
        assert_eq!(StackAlignment::from(VerticalAlignment::Top).factor(), 0.0);
    }
}
