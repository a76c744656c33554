//! Item sources for wrapflow containers.
//!
//! A container never constructs its own items. It asks a [`Source`] for a
//! count and then for each item by index. Sources own a
//! [`DataSetObservable`] so that whoever holds them can learn when the
//! backing data changed and repopulate.
//!
//! Two implementations are provided:
//! - [`VecSource`]: owns its data and broadcasts on every mutation
//! - [`FnSource`]: wraps a pair of closures over data owned elsewhere

mod observable;
mod source;

pub use observable::{DataSetObservable, ObserverId};
pub use source::{FnSource, Source, VecSource};
