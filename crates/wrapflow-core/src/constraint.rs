//! Per-axis sizing constraints.
//!
//! A [`Constraint`] travels from a container's parent into the container
//! and from the container into each item. Children get their constraint from
//! [`Constraint::resolve_child`], which combines the parent's constraint with
//! the child's declared [`SizeIntent`].

use crate::types::Px;

/// How strictly an axis is constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureMode {
    /// The axis size is fixed and must be honored exactly.
    Exact,
    /// The axis size is an upper bound; content may be smaller.
    AtMost,
    /// No limit.
    Unbounded,
}

/// Sizing instruction for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    pub mode: MeasureMode,
    /// Always non-negative; zero for [`MeasureMode::Unbounded`].
    pub size: Px,
}

impl Constraint {
    /// A fixed size. Negative sizes clamp to zero.
    pub fn exact(size: Px) -> Self {
        Self { mode: MeasureMode::Exact, size: size.max(0) }
    }

    /// An upper bound. Negative sizes clamp to zero.
    pub fn at_most(size: Px) -> Self {
        Self { mode: MeasureMode::AtMost, size: size.max(0) }
    }

    pub fn unbounded() -> Self {
        Self { mode: MeasureMode::Unbounded, size: 0 }
    }

    pub fn is_exact(&self) -> bool {
        self.mode == MeasureMode::Exact
    }

    /// Upper bound of the axis, or `None` when unbounded.
    pub fn bound(&self) -> Option<Px> {
        match self.mode {
            MeasureMode::Exact | MeasureMode::AtMost => Some(self.size),
            MeasureMode::Unbounded => None,
        }
    }

    /// Size a well-behaved item settles on given its content size.
    pub fn constrain(&self, content: Px) -> Px {
        match self.mode {
            MeasureMode::Exact => self.size,
            MeasureMode::AtMost => content.clamp(0, self.size),
            MeasureMode::Unbounded => content.max(0),
        }
    }

    /// Shrink the constraint by `amount`, saturating at zero.
    pub fn deflate(self, amount: Px) -> Self {
        match self.mode {
            MeasureMode::Unbounded => self,
            mode => Self { mode, size: self.size.saturating_sub(amount).max(0) },
        }
    }

    /// Constraint to hand a child that declared `intent`, when this
    /// constraint is the parent's and `reserved` is taken by the parent's
    /// padding on this axis.
    pub fn resolve_child(self, reserved: Px, intent: SizeIntent) -> Constraint {
        match (intent, self.mode) {
            (SizeIntent::Fixed(size), _) => Constraint::exact(size),
            (SizeIntent::Fill, MeasureMode::Exact | MeasureMode::AtMost) => {
                Constraint::exact(self.deflate(reserved).size)
            }
            (SizeIntent::Wrap, MeasureMode::Exact | MeasureMode::AtMost) => {
                Constraint::at_most(self.deflate(reserved).size)
            }
            (SizeIntent::Fill | SizeIntent::Wrap, MeasureMode::Unbounded) => {
                Constraint::unbounded()
            }
        }
    }
}

/// A child's declared sizing on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeIntent {
    /// A fixed size in device units
    Fixed(Px),
    /// Take all the space the parent offers
    Fill,
    /// Fit the content
    #[default]
    Wrap,
}

/// Per-axis sizing intents declared by an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutParams {
    pub width: SizeIntent,
    pub height: SizeIntent,
}

impl LayoutParams {
    pub const fn new(width: SizeIntent, height: SizeIntent) -> Self {
        Self { width, height }
    }

    /// Fixed size on both axes.
    pub const fn fixed(width: Px, height: Px) -> Self {
        Self::new(SizeIntent::Fixed(width), SizeIntent::Fixed(height))
    }
}
