//! Core types for the wrapflow layout engine.
//!
//! This crate defines the vocabulary shared by sources and containers:
//! - Geometry and configuration values ([`Size`], [`Bounds`], [`Padding`], [`Spacing`])
//! - Per-axis [`Constraint`]s and how children derive theirs
//! - The [`Item`] contract and the [`ItemParent`] view handed to sources
//! - [`FlowError`]

pub mod constraint;
pub mod errors;
pub mod item;
pub mod types;

pub use constraint::{Constraint, LayoutParams, MeasureMode, SizeIntent};
pub use errors::FlowError;
pub use item::{Item, ItemParent, SizedItem};
pub use types::{Bounds, Padding, Px, Size, Spacing, Visibility};
