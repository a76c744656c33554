//! Change notification owned by each source.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

/// Handle returned by [`DataSetObservable::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

type Callback = Rc<dyn Fn()>;

/// Ordered list of change callbacks.
///
/// Callbacks carry no payload; observers re-query the source to learn what
/// changed.
#[derive(Default)]
pub struct DataSetObservable {
    observers: RefCell<IndexMap<ObserverId, Callback>>,
    next_id: Cell<u64>,
}

impl DataSetObservable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Callbacks run in registration order.
    pub fn register(&self, callback: impl Fn() + 'static) -> ObserverId {
        let id = ObserverId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().insert(id, Rc::new(callback));
        id
    }

    /// Remove a callback. Returns `false` if `id` was not registered.
    pub fn unregister(&self, id: ObserverId) -> bool {
        self.observers.borrow_mut().shift_remove(&id).is_some()
    }

    pub fn unregister_all(&self) {
        self.observers.borrow_mut().clear();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Invoke every registered callback.
    ///
    /// Callbacks may register or unregister observers; such changes apply to
    /// the next broadcast. A callback must not repopulate a container that is
    /// between its measurement and layout passes.
    pub fn notify_changed(&self) {
        let callbacks: Vec<Callback> = self.observers.borrow().values().cloned().collect();
        log::trace!("notifying {} data set observers", callbacks.len());
        for callback in callbacks {
            callback();
        }
    }
}

impl fmt::Debug for DataSetObservable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSetObservable")
            .field("observers", &self.observer_count())
            .finish()
    }
}
