//! Item sources.
//!
//! A [`Source`] hands a container its items on demand. Containers call
//! [`Source::item_at`] once per index when populating and never diff against
//! an earlier population.

use std::cell::{Ref, RefCell};
use std::fmt;

use wrapflow_core::{Item, ItemParent};

use crate::observable::DataSetObservable;

/// Supplies an ordered list of items and a change-notification channel.
pub trait Source {
    /// Number of items the source currently provides.
    fn count(&self) -> usize;

    /// Produce the item at `index`; `index` is always below [`count`](Self::count).
    fn item_at(&self, index: usize, parent: &dyn ItemParent) -> Box<dyn Item>;

    /// Observers of this source's backing data.
    fn observable(&self) -> &DataSetObservable;
}

/// A source backed by a vector of data values and an item factory.
///
/// Mutators broadcast a change after the data has been updated.
pub struct VecSource<T, F> {
    data: RefCell<Vec<T>>,
    factory: F,
    observable: DataSetObservable,
}

impl<T, F> VecSource<T, F>
where
    F: Fn(&T, usize, &dyn ItemParent) -> Box<dyn Item>,
{
    pub fn new(data: Vec<T>, factory: F) -> Self {
        Self {
            data: RefCell::new(data),
            factory,
            observable: DataSetObservable::new(),
        }
    }

    /// Borrow the backing data.
    pub fn data(&self) -> Ref<'_, Vec<T>> {
        self.data.borrow()
    }

    /// Replace all data values.
    pub fn set_items(&self, data: Vec<T>) {
        *self.data.borrow_mut() = data;
        self.observable.notify_changed();
    }

    pub fn push(&self, value: T) {
        self.data.borrow_mut().push(value);
        self.observable.notify_changed();
    }

    /// Remove the value at `index`, if present.
    pub fn remove(&self, index: usize) -> Option<T> {
        let removed = {
            let mut data = self.data.borrow_mut();
            (index < data.len()).then(|| data.remove(index))
        };
        if removed.is_some() {
            self.observable.notify_changed();
        }
        removed
    }

    pub fn clear(&self) {
        self.data.borrow_mut().clear();
        self.observable.notify_changed();
    }
}

impl<T, F> Source for VecSource<T, F>
where
    F: Fn(&T, usize, &dyn ItemParent) -> Box<dyn Item>,
{
    fn count(&self) -> usize {
        self.data.borrow().len()
    }

    fn item_at(&self, index: usize, parent: &dyn ItemParent) -> Box<dyn Item> {
        let data = self.data.borrow();
        (self.factory)(&data[index], index, parent)
    }

    fn observable(&self) -> &DataSetObservable {
        &self.observable
    }
}

impl<T: fmt::Debug, F> fmt::Debug for VecSource<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VecSource")
            .field("data", &self.data)
            .field("observable", &self.observable)
            .finish_non_exhaustive()
    }
}

type CountFn = Box<dyn Fn() -> usize>;
type ItemFn = Box<dyn Fn(usize, &dyn ItemParent) -> Box<dyn Item>>;

/// A source defined by two closures.
///
/// The closures usually capture shared data owned elsewhere; whoever mutates
/// that data calls `observable().notify_changed()`.
pub struct FnSource {
    count: CountFn,
    item: ItemFn,
    observable: DataSetObservable,
}

impl FnSource {
    pub fn new(
        count: impl Fn() -> usize + 'static,
        item: impl Fn(usize, &dyn ItemParent) -> Box<dyn Item> + 'static,
    ) -> Self {
        Self {
            count: Box::new(count),
            item: Box::new(item),
            observable: DataSetObservable::new(),
        }
    }
}

impl Source for FnSource {
    fn count(&self) -> usize {
        (self.count)()
    }

    fn item_at(&self, index: usize, parent: &dyn ItemParent) -> Box<dyn Item> {
        (self.item)(index, parent)
    }

    fn observable(&self) -> &DataSetObservable {
        &self.observable
    }
}

impl fmt::Debug for FnSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource")
            .field("count", &self.count())
            .field("observable", &self.observable)
            .finish_non_exhaustive()
    }
}
