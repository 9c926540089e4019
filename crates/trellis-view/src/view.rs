#![forbid(unsafe_code)]

//! Immutable view descriptors and child extraction.
//!
//! A [`View`] is a closed sum over the three node shapes the layout core
//! understands: opaque leaves, transparent groups, and stack containers.
//! Descriptors are plain values: created once per tree construction,
//! superseded (never mutated) on re-render.

use serde::{Deserialize, Serialize};
use trellis_core::{Axis, HorizontalAlignment, Size, StackAlignment, VerticalAlignment};

/// How a leaf responds to size proposals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sizing {
    /// Report this intrinsic size regardless of the proposal.
    Fixed(Size),
    /// Adopt the proposal, falling back to zero on unconstrained axes.
    Flexible,
}

/// An opaque leaf with no children of its own.
///
/// Content measurement (text, images) is a collaborator concern; the leaf
/// carries only a [`Sizing`] policy standing in for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    pub sizing: Sizing,
}

impl Leaf {
    /// A leaf with a fixed intrinsic size.
    #[must_use]
    pub fn fixed(size: Size) -> Self {
        Self {
            sizing: Sizing::Fixed(size),
        }
    }

    /// A leaf that adopts whatever is proposed.
    #[must_use]
    pub fn flexible() -> Self {
        Self {
            sizing: Sizing::Flexible,
        }
    }
}

/// A transparent grouping construct with no layout identity of its own.
///
/// When a group is the direct content of a container, its elements are
/// spliced into the container's child list (flattened one level).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Group {
    pub children: Vec<View>,
}

impl Group {
    /// Group the given views.
    #[must_use]
    pub fn new(children: impl IntoIterator<Item = View>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }
}

/// A container that arranges its children sequentially along one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    pub(crate) axis: Axis,
    pub(crate) alignment: StackAlignment,
    pub(crate) spacing: Option<f32>,
    pub(crate) content: Box<View>,
}

impl Stack {
    /// A vertical (column) stack, centered on its horizontal cross axis.
    #[must_use]
    pub fn vertical(content: impl Into<View>) -> Self {
        Self {
            axis: Axis::Vertical,
            alignment: StackAlignment::Horizontal(HorizontalAlignment::Center),
            spacing: None,
            content: Box::new(content.into()),
        }
    }

    /// A horizontal (row) stack, centered on its vertical cross axis.
    #[must_use]
    pub fn horizontal(content: impl Into<View>) -> Self {
        Self {
            axis: Axis::Horizontal,
            alignment: StackAlignment::Vertical(VerticalAlignment::Center),
            spacing: None,
            content: Box::new(content.into()),
        }
    }

    /// Set the cross-axis alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: impl Into<StackAlignment>) -> Self {
        self.alignment = alignment.into();
        self
    }

    /// Set an explicit inter-child spacing.
    ///
    /// Absent, the context-default spacing applies. Negative and NaN
    /// values clamp to zero.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(if spacing.is_nan() || spacing < 0.0 {
            0.0
        } else {
            spacing
        });
        self
    }

    /// The axis children are arranged along.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The views this stack lays out, after group flattening.
    #[must_use]
    pub fn child_views(&self) -> &[View] {
        match &*self.content {
            View::Group(group) => &group.children,
            other => std::slice::from_ref(other),
        }
    }
}

/// A node in a view description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Leaf(Leaf),
    Group(Group),
    Stack(Stack),
}

impl View {
    /// A leaf with a fixed intrinsic size.
    #[must_use]
    pub fn fixed(width: f32, height: f32) -> Self {
        Self::Leaf(Leaf::fixed(Size::new(width, height)))
    }

    /// A leaf that adopts whatever is proposed.
    #[must_use]
    pub fn flexible() -> Self {
        Self::Leaf(Leaf::flexible())
    }

    /// A transparent group of views.
    #[must_use]
    pub fn group(children: impl IntoIterator<Item = View>) -> Self {
        Self::Group(Group::new(children))
    }

    /// The ordered child views this node extracts.
    ///
    /// Pure and structurally stable: repeated calls on an unchanged
    /// descriptor yield structurally equal sequences.
    #[must_use]
    pub fn children(&self) -> &[View] {
        match self {
            Self::Leaf(_) => &[],
            Self::Group(group) => &group.children,
            Self::Stack(stack) => stack.child_views(),
        }
    }
}

impl From<Leaf> for View {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Group> for View {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl From<Stack> for View {
    fn from(stack: Stack) -> Self {
        Self::Stack(stack)
    }
}

/// Resolve a descriptor's content into its ordered child sequence.
///
/// A container whose content is a transparent group has the group's
/// elements spliced in place; any other content is a single child.
#[must_use]
pub fn extract_children(view: &View) -> &[View] {
    view.children()
}
