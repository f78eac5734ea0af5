//! Recording listener for store notification tests.

use std::cell::RefCell;
use std::rc::Rc;

/// Records one value per notification
///
/// The recorder is a cheap handle; every listener created from it appends
/// to the same log, so notification order across listeners is observable.
///
/// # Example
///
/// ```
/// use module_store_testing::RecordingListener;
///
/// let recorder = RecordingListener::new();
/// let mut listener = recorder.listener(|count: &u32| *count * 2);
///
/// listener(&1);
/// listener(&5);
///
/// assert_eq!(recorder.snapshots(), vec![2, 10]);
/// ```
#[derive(Debug)]
pub struct RecordingListener<T> {
    log: Rc<RefCell<Vec<T>>>,
}

impl<T> RecordingListener<T> {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Build a listener that records `project(state)` on every call
    pub fn listener<S, F>(&self, project: F) -> impl FnMut(&S) + use<T, S, F>
    where
        F: Fn(&S) -> T + 'static,
        T: 'static,
        S: ?Sized,
    {
        let log = Rc::clone(&self.log);
        move |state: &S| log.borrow_mut().push(project(state))
    }

    /// Number of recorded notifications
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    /// Returns true if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    /// Take everything recorded so far, leaving the log empty
    #[must_use]
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.log.borrow_mut())
    }
}

impl<T: Clone> RecordingListener<T> {
    /// Copy of everything recorded so far
    #[must_use]
    pub fn snapshots(&self) -> Vec<T> {
        self.log.borrow().clone()
    }

    /// Most recent recorded value
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.log.borrow().last().cloned()
    }
}

impl<T> Clone for RecordingListener<T> {
    fn clone(&self) -> Self {
        Self {
            log: Rc::clone(&self.log),
        }
    }
}

impl<T> Default for RecordingListener<T> {
    fn default() -> Self {
        Self::new()
    }
}
