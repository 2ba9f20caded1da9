//! Observable single-threaded state cells.
//!
//! A [`MutableState`] notifies its runtime on every write so the host knows a
//! new frame is needed. Reads never observe a partially applied update: all
//! writes happen on the UI thread between frames.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::runtime::RuntimeHandle;

struct StateCell<T> {
    value: T,
    version: u64,
    runtime: Option<RuntimeHandle>,
}

pub struct MutableState<T> {
    inner: Rc<RefCell<StateCell<T>>>,
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> MutableState<T> {
    /// Creates a detached state that does not schedule frames on writes.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StateCell {
                value,
                version: 0,
                runtime: None,
            })),
        }
    }

    pub fn with_runtime(value: T, runtime: RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StateCell {
                value,
                version: 0,
                runtime: Some(runtime),
            })),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let (result, runtime) = {
            let mut cell = self.inner.borrow_mut();
            let result = f(&mut cell.value);
            cell.version += 1;
            (result, cell.runtime.clone())
        };
        if let Some(runtime) = runtime {
            runtime.schedule();
        }
        result
    }

    /// Number of writes applied so far.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    pub fn as_state(&self) -> State<T> {
        State {
            inner: self.clone(),
        }
    }
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn value(&self) -> T {
        self.inner.borrow().value.clone()
    }

    pub fn get(&self) -> T {
        self.value()
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = self.inner.borrow();
        f.debug_struct("MutableState")
            .field("value", &cell.value)
            .field("version", &cell.version)
            .finish()
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T> {
    inner: MutableState<T>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: 'static> State<T> {
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.with(f)
    }

    pub fn version(&self) -> u64 {
        self.inner.version()
    }
}

impl<T: Clone + 'static> State<T> {
    pub fn value(&self) -> T {
        self.inner.value()
    }

    pub fn get(&self) -> T {
        self.inner.value()
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}
