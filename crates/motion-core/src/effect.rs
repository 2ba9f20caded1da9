//! Scoped ownership of asynchronous UI work.
//!
//! An [`EffectScope`] owns every task it launches. Cancelling or dropping the
//! scope cancels those tasks, so a screen that owns its scopes cannot leak
//! timers past its own lifetime. [`KeyedEffect`] restarts its scope whenever
//! its key changes.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::hash::Hash;
use std::rc::Rc;

use log::debug;
use smallvec::SmallVec;

use crate::hash::{hash_key, Key};
use crate::runtime::{RuntimeHandle, TaskHandle};

pub struct EffectScope {
    runtime: RuntimeHandle,
    active: Rc<Cell<bool>>,
    tasks: RefCell<SmallVec<[TaskHandle; 2]>>,
}

impl EffectScope {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            runtime,
            active: Rc::new(Cell::new(true)),
            tasks: RefCell::new(SmallVec::new()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn runtime(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    /// Launches `future` on the UI thread, tied to this scope.
    ///
    /// Does nothing once the scope has been cancelled.
    pub fn launch<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        if !self.is_active() {
            return;
        }
        let mut tasks = self.tasks.borrow_mut();
        tasks.retain(|handle| self.runtime.has_task(handle.id()));
        if let Some(handle) = self.runtime.spawn_ui(future) {
            tasks.push(handle);
        }
    }

    /// Posts UI-only work that runs on the next drain unless the scope is
    /// cancelled first.
    pub fn post_ui(&self, task: impl FnOnce() + 'static) {
        if !self.is_active() {
            return;
        }
        let active = Rc::clone(&self.active);
        self.runtime.enqueue_ui_task(Box::new(move || {
            if active.get() {
                task();
            }
        }));
    }

    pub fn cancel(&self) {
        self.active.set(false);
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        for handle in tasks {
            handle.cancel();
        }
    }
}

impl Drop for EffectScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Effect that relaunches whenever its key changes.
///
/// Launching with a new key cancels everything started under the previous
/// key before the new effect body runs.
#[derive(Default)]
pub struct KeyedEffect {
    key: Option<Key>,
    scope: Option<EffectScope>,
}

impl KeyedEffect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `effect` if `keys` differ from the keys of the last run.
    ///
    /// Returns whether the effect was (re)started.
    pub fn run_if_changed<K, F>(&mut self, runtime: &RuntimeHandle, keys: &K, effect: F) -> bool
    where
        K: Hash + ?Sized,
        F: FnOnce(&EffectScope),
    {
        let key = hash_key(keys);
        if self.key == Some(key) {
            return false;
        }
        self.restart_with_key(runtime, key, effect);
        true
    }

    fn restart_with_key<F>(&mut self, runtime: &RuntimeHandle, key: Key, effect: F)
    where
        F: FnOnce(&EffectScope),
    {
        if let Some(previous) = self.scope.take() {
            debug!("restarting keyed effect");
            previous.cancel();
        }
        self.key = Some(key);
        let scope = EffectScope::new(runtime.clone());
        effect(&scope);
        self.scope = Some(scope);
    }

    pub fn is_running(&self) -> bool {
        self.scope.as_ref().is_some_and(EffectScope::is_active)
    }

    pub fn cancel(&mut self) {
        self.key = None;
        if let Some(scope) = self.scope.take() {
            scope.cancel();
        }
    }
}
