//! Wrapping flow layout.
//!
//! A [`FlowContainer`] arranges items left to right and starts a new row
//! whenever the next item would overflow the available width. It sizes
//! itself to its content on `AtMost`/`Unbounded` axes and to the given size
//! on `Exact` axes.
//!
//! # Architecture
//!
//! 1. **Population**: items come from a [`Source`](wrapflow_adapter::Source),
//!    fully replacing the previous list
//! 2. **Measurement**: [`FlowContainer::measure`] groups visible items into
//!    rows and returns a [`LayoutState`]
//! 3. **Layout**: [`FlowContainer::layout`] places items from that state
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use wrapflow_adapter::VecSource;
//! use wrapflow_core::{Bounds, Constraint, Item, ItemParent, SizedItem, Spacing};
//! use wrapflow_layout::FlowContainer;
//!
//! let tags = VecSource::new(vec![100, 100, 100, 50], |w: &i32, _: usize, _: &dyn ItemParent| {
//!     Box::new(SizedItem::new(*w, 30)) as Box<dyn Item>
//! });
//!
//! let mut flow = FlowContainer::new().with_spacing(Spacing::new(16, 24))?;
//! flow.set_source(Some(Rc::new(tags)))?;
//!
//! let state = flow.measure(Constraint::exact(300), Constraint::at_most(600));
//! assert_eq!(state.row_count(), 2);
//!
//! flow.layout(&state, Bounds::new(0, 0, state.width(), state.height()))?;
//! assert_eq!(flow.items()[2].bounds(), Some(Bounds::new(0, 54, 100, 84)));
//! # Ok::<(), wrapflow_core::FlowError>(())
//! ```

mod container;
mod measure;
mod place;
mod state;

pub use container::FlowContainer;
pub use state::{LayoutState, Row, RowEntry};
