//! State-driven groups of animations.
//!
//! A [`Transition`] owns a target state and any number of child values
//! derived from it. Changing the target retargets every child in the same
//! call, so they all start on the same frame.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use motion_core::RuntimeHandle;
use motion_ui_graphics::Color;

use crate::animation::{Animatable, Animated, AnimationType};

trait TransitionChild<S> {
    fn retarget(&self, initial: &S, target: &S);
    fn is_running(&self) -> bool;
}

struct ChildAnimation<S, T: Animated> {
    animatable: Animatable<T>,
    spec_for: Box<dyn Fn(&S, &S) -> AnimationType>,
    target_for: Box<dyn Fn(&S) -> T>,
}

impl<S, T: Animated> TransitionChild<S> for ChildAnimation<S, T> {
    fn retarget(&self, initial: &S, target: &S) {
        let spec = (self.spec_for)(initial, target);
        self.animatable.animate_to((self.target_for)(target), spec);
    }

    fn is_running(&self) -> bool {
        self.animatable.is_running()
    }
}

struct TransitionInner<S> {
    label: &'static str,
    runtime: RuntimeHandle,
    current_state: S,
    target_state: S,
    children: Vec<Rc<dyn TransitionChild<S>>>,
}

pub struct Transition<S: Clone + PartialEq + 'static> {
    inner: Rc<RefCell<TransitionInner<S>>>,
}

/// Read handle for one child of a [`Transition`].
pub struct TransitionValue<T: Animated> {
    animatable: Animatable<T>,
}

impl<T: Animated> TransitionValue<T> {
    pub fn value(&self) -> T {
        self.animatable.value()
    }

    pub fn target(&self) -> T {
        self.animatable.target()
    }

    pub fn is_running(&self) -> bool {
        self.animatable.is_running()
    }
}

impl<T: Animated> Clone for TransitionValue<T> {
    fn clone(&self) -> Self {
        Self {
            animatable: self.animatable.clone(),
        }
    }
}

impl<S: Clone + PartialEq + 'static> Transition<S> {
    pub fn new(initial: S, runtime: RuntimeHandle, label: &'static str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TransitionInner {
                label,
                runtime,
                current_state: initial.clone(),
                target_state: initial,
                children: Vec::new(),
            })),
        }
    }

    /// Adds a child whose value is `target_for(state)`.
    ///
    /// `spec_for` receives the settled state and the new target each time
    /// the target changes.
    pub fn animate_value<T: Animated>(
        &self,
        label: &'static str,
        spec_for: impl Fn(&S, &S) -> AnimationType + 'static,
        target_for: impl Fn(&S) -> T + 'static,
    ) -> TransitionValue<T> {
        let mut inner = self.inner.borrow_mut();
        let initial = target_for(&inner.target_state);
        let animatable = Animatable::with_label(initial, inner.runtime.clone(), label);
        inner.children.push(Rc::new(ChildAnimation {
            animatable: animatable.clone(),
            spec_for: Box::new(spec_for),
            target_for: Box::new(target_for),
        }));
        TransitionValue { animatable }
    }

    pub fn animate_float(
        &self,
        label: &'static str,
        spec_for: impl Fn(&S, &S) -> AnimationType + 'static,
        target_for: impl Fn(&S) -> f32 + 'static,
    ) -> TransitionValue<f32> {
        self.animate_value(label, spec_for, target_for)
    }

    pub fn animate_color(
        &self,
        label: &'static str,
        spec_for: impl Fn(&S, &S) -> AnimationType + 'static,
        target_for: impl Fn(&S) -> Color + 'static,
    ) -> TransitionValue<Color> {
        self.animate_value(label, spec_for, target_for)
    }

    /// Moves every child towards the values for `target`.
    pub fn set_target_state(&self, target: S) {
        self.settle();
        let (children, initial) = {
            let mut inner = self.inner.borrow_mut();
            if inner.target_state == target {
                return;
            }
            debug!("transition '{}' retargeted", inner.label);
            inner.target_state = target.clone();
            (inner.children.clone(), inner.current_state.clone())
        };
        for child in &children {
            child.retarget(&initial, &target);
        }
    }

    pub fn target_state(&self) -> S {
        self.inner.borrow().target_state.clone()
    }

    /// The last state every child settled at.
    pub fn current_state(&self) -> S {
        self.settle();
        self.inner.borrow().current_state.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner
            .borrow()
            .children
            .iter()
            .any(|child| child.is_running())
    }

    fn settle(&self) {
        if self.is_running() {
            return;
        }
        let mut inner = self.inner.borrow_mut();
        if inner.current_state != inner.target_state {
            inner.current_state = inner.target_state.clone();
        }
    }
}

impl<S: Clone + PartialEq + 'static> Clone for Transition<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
