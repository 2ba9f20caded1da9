//! Animations that repeat for as long as their owner is alive.
//!
//! An [`InfiniteTransition`] drives all of its children from one frame
//! loop, so children created together stay in phase. Dropping the
//! transition cancels the loop; child handles keep their last value.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use motion_core::{FrameCallbackRegistration, MutableState, RuntimeHandle};
use motion_ui_graphics::Color;

use crate::animation::{Animated, AnimationSpec, Lerp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// Every iteration plays from the initial value to the target.
    #[default]
    Restart,
    /// Odd iterations play backwards, so the value ping-pongs.
    Reverse,
}

/// A tween repeated forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfiniteRepeatableSpec {
    pub animation: AnimationSpec,
    pub repeat_mode: RepeatMode,
}

impl InfiniteRepeatableSpec {
    pub fn new(animation: AnimationSpec, repeat_mode: RepeatMode) -> Self {
        Self {
            animation,
            repeat_mode,
        }
    }

    pub fn restart(animation: AnimationSpec) -> Self {
        Self::new(animation, RepeatMode::Restart)
    }

    pub fn reverse(animation: AnimationSpec) -> Self {
        Self::new(animation, RepeatMode::Reverse)
    }

    /// Length of one iteration, start delay included.
    pub fn iteration_nanos(&self) -> u64 {
        self.animation.total_nanos().max(1)
    }

    /// Eased fraction between initial (0) and target (1) at `play_time_nanos`.
    pub fn fraction_at(&self, play_time_nanos: u64) -> f32 {
        let iteration_nanos = self.iteration_nanos();
        let iteration = play_time_nanos / iteration_nanos;
        let mut local = play_time_nanos % iteration_nanos;
        if self.repeat_mode == RepeatMode::Reverse && iteration % 2 == 1 {
            local = iteration_nanos - local;
        }
        self.animation.progress_at(local).unwrap_or(0.0)
    }
}

trait InfiniteChild {
    fn set_play_time(&self, play_time_nanos: u64);
}

struct InfiniteAnimationInner<T: Animated> {
    initial: T,
    target: T,
    spec: InfiniteRepeatableSpec,
    state: MutableState<T>,
}

impl<T: Animated> InfiniteAnimationInner<T> {
    fn value_at(&self, play_time_nanos: u64) -> T {
        let fraction = self.spec.fraction_at(play_time_nanos);
        self.initial.lerp(&self.target, fraction)
    }
}

impl<T: Animated> InfiniteChild for InfiniteAnimationInner<T> {
    fn set_play_time(&self, play_time_nanos: u64) {
        self.state.set(self.value_at(play_time_nanos));
    }
}

/// One value driven by an [`InfiniteTransition`].
pub struct InfiniteAnimation<T: Animated> {
    inner: Rc<InfiniteAnimationInner<T>>,
}

impl<T: Animated> InfiniteAnimation<T> {
    pub fn value(&self) -> T {
        self.inner.state.value()
    }

    /// Value this animation takes after `play_time_nanos` of play.
    pub fn value_at(&self, play_time_nanos: u64) -> T {
        self.inner.value_at(play_time_nanos)
    }

    pub fn spec(&self) -> InfiniteRepeatableSpec {
        self.inner.spec
    }
}

impl<T: Animated> Clone for InfiniteAnimation<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct InfiniteTransitionInner {
    label: &'static str,
    runtime: RuntimeHandle,
    start_time_nanos: Option<u64>,
    play_time_nanos: u64,
    children: Vec<Rc<dyn InfiniteChild>>,
    registration: Option<FrameCallbackRegistration>,
}

/// Frame loop shared by a group of repeating animations.
pub struct InfiniteTransition {
    inner: Rc<RefCell<InfiniteTransitionInner>>,
}

impl InfiniteTransition {
    pub fn new(runtime: RuntimeHandle, label: &'static str) -> Self {
        debug!("infinite transition '{label}' started");
        let transition = Self {
            inner: Rc::new(RefCell::new(InfiniteTransitionInner {
                label,
                runtime,
                start_time_nanos: None,
                play_time_nanos: 0,
                children: Vec::new(),
                registration: None,
            })),
        };
        Self::schedule_frame(&transition.inner);
        transition
    }

    pub fn animate_value<T: Animated>(
        &self,
        initial: T,
        target: T,
        spec: InfiniteRepeatableSpec,
    ) -> InfiniteAnimation<T> {
        let mut inner = self.inner.borrow_mut();
        let child = Rc::new(InfiniteAnimationInner {
            initial: initial.clone(),
            target,
            spec,
            state: MutableState::with_runtime(initial, inner.runtime.clone()),
        });
        child.set_play_time(inner.play_time_nanos);
        inner.children.push(child.clone());
        InfiniteAnimation { inner: child }
    }

    pub fn animate_float(
        &self,
        initial: f32,
        target: f32,
        spec: InfiniteRepeatableSpec,
    ) -> InfiniteAnimation<f32> {
        self.animate_value(initial, target, spec)
    }

    pub fn animate_color(
        &self,
        initial: Color,
        target: Color,
        spec: InfiniteRepeatableSpec,
    ) -> InfiniteAnimation<Color> {
        self.animate_value(initial, target, spec)
    }

    /// Time played since the first frame after creation.
    pub fn play_time_nanos(&self) -> u64 {
        self.inner.borrow().play_time_nanos
    }

    pub fn play_time_millis(&self) -> u64 {
        self.play_time_nanos() / 1_000_000
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    fn schedule_frame(this: &Rc<RefCell<InfiniteTransitionInner>>) {
        let runtime = this.borrow().runtime.clone();
        let weak: Weak<RefCell<InfiniteTransitionInner>> = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        if registration.is_active() {
            this.borrow_mut().registration = Some(registration);
        }
    }

    fn on_frame(this: &Rc<RefCell<InfiniteTransitionInner>>, frame_time_nanos: u64) {
        let (children, play_time) = {
            let mut inner = this.borrow_mut();
            // Already fired; nothing left to cancel.
            inner.registration = None;
            let start = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            inner.play_time_nanos = frame_time_nanos.saturating_sub(start);
            (inner.children.clone(), inner.play_time_nanos)
        };
        for child in &children {
            child.set_play_time(play_time);
        }
        Self::schedule_frame(this);
    }
}

impl Drop for InfiniteTransition {
    fn drop(&mut self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        debug!("infinite transition '{}' stopped", inner.label);
    }
}

#[cfg(test)]
#[path = "tests/infinite_tests.rs"]
mod tests;
