//! Time-based animations with easing curves and spring physics.
//!
//! An [`Animatable`] publishes its value through a [`MutableState`] and
//! advances on frame-clock callbacks. Re-targeting an in-flight animation
//! starts the new one from the current value (and, for springs, the
//! current velocity), so motion never jumps.

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};
use std::task::{Context, Poll, Waker};

use log::debug;
use motion_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State};
use motion_ui_graphics::{Color, Point, Size};
use smallvec::{smallvec, SmallVec};

use crate::spring::SpringSimulation;

/// Components of an animated value, one entry per animated dimension.
pub type AnimationVector = SmallVec<[f32; 4]>;

/// Values that can be decomposed into independently animated components.
pub trait Animated: Clone + 'static {
    /// Distance under which a spring is considered to have reached its target.
    const VISIBILITY_THRESHOLD: f32 = 0.01;

    fn to_vector(&self) -> AnimationVector;

    fn from_vector(vector: &[f32]) -> Self;
}

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl<T: Animated> Lerp for T {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        let start = self.to_vector();
        let end = target.to_vector();
        let blended: AnimationVector = start
            .iter()
            .zip(end.iter())
            .map(|(from, to)| from + (to - from) * fraction)
            .collect();
        T::from_vector(&blended)
    }
}

impl Animated for f32 {
    fn to_vector(&self) -> AnimationVector {
        smallvec![*self]
    }

    fn from_vector(vector: &[f32]) -> Self {
        vector[0]
    }
}

impl Animated for f64 {
    fn to_vector(&self) -> AnimationVector {
        smallvec![*self as f32]
    }

    fn from_vector(vector: &[f32]) -> Self {
        vector[0] as f64
    }
}

impl Animated for Point {
    const VISIBILITY_THRESHOLD: f32 = 0.5;

    fn to_vector(&self) -> AnimationVector {
        smallvec![self.x, self.y]
    }

    fn from_vector(vector: &[f32]) -> Self {
        Point::new(vector[0], vector[1])
    }
}

impl Animated for Size {
    const VISIBILITY_THRESHOLD: f32 = 0.5;

    fn to_vector(&self) -> AnimationVector {
        smallvec![self.width, self.height]
    }

    fn from_vector(vector: &[f32]) -> Self {
        Size::new(vector[0], vector[1])
    }
}

impl Animated for Color {
    const VISIBILITY_THRESHOLD: f32 = 0.001;

    fn to_vector(&self) -> AnimationVector {
        smallvec![self.0, self.1, self.2, self.3]
    }

    // Springs may overshoot; channels are clamped back into range.
    fn from_vector(vector: &[f32]) -> Self {
        Color(
            vector[0].clamp(0.0, 1.0),
            vector[1].clamp(0.0, 1.0),
            vector[2].clamp(0.0, 1.0),
            vector[3].clamp(0.0, 1.0),
        )
    }
}

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Ease in using cubic curve.
    EaseIn,
    /// Ease out using cubic curve.
    EaseOut,
    /// Ease in and out using cubic curve.
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowInEasing,
    /// Linear out, slow in (material design).
    LinearOutSlowInEasing,
    /// Fast out, linear in (material design).
    FastOutLinearEasing,
    /// Quartic ease in and out.
    EaseInOutQuart,
    /// Ease out that overshoots the target before settling.
    EaseOutBack,
    /// Custom cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1).
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match *self {
            Easing::LinearEasing => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
            Easing::EaseInOutQuart => cubic_bezier(0.76, 0.0, 0.24, 1.0, fraction),
            Easing::EaseOutBack => cubic_bezier(0.34, 1.56, 0.64, 1.0, fraction),
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric `t` matching the x fraction,
    // clamped to [0, 1].
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Tween specification combining duration, easing and start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Eased progress after `elapsed_nanos`, or `None` while still delayed.
    pub fn progress_at(&self, elapsed_nanos: u64) -> Option<f32> {
        let delay_nanos = self.delay_millis * 1_000_000;
        if elapsed_nanos < delay_nanos {
            return None;
        }
        let duration_nanos = (self.duration_millis * 1_000_000).max(1);
        let linear = ((elapsed_nanos - delay_nanos) as f64 / duration_nanos as f64).min(1.0);
        Some(self.easing.transform(linear as f32))
    }

    pub fn total_nanos(&self) -> u64 {
        (self.delay_millis + self.duration_millis) * 1_000_000
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Standard damping ratios and stiffness values.
pub struct Spring;

impl Spring {
    pub const DAMPING_RATIO_HIGH_BOUNCY: f32 = 0.2;
    pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
    pub const DAMPING_RATIO_LOW_BOUNCY: f32 = 0.75;
    pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;

    pub const STIFFNESS_HIGH: f32 = 10_000.0;
    pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
    pub const STIFFNESS_MEDIUM_LOW: f32 = 400.0;
    pub const STIFFNESS_LOW: f32 = 200.0;
    pub const STIFFNESS_VERY_LOW: f32 = 50.0;
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Rest threshold overriding the animated type's default.
    pub visibility_threshold: Option<f32>,
}

impl SpringSpec {
    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            visibility_threshold: None,
        }
    }

    /// Critically damped spring with medium stiffness.
    pub fn default_spring() -> Self {
        Self::new(Spring::DAMPING_RATIO_NO_BOUNCY, Spring::STIFFNESS_MEDIUM)
    }

    pub fn with_visibility_threshold(mut self, threshold: f32) -> Self {
        self.visibility_threshold = Some(threshold);
        self
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Time-based tween animation.
    Tween(AnimationSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl AnimationType {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        AnimationType::Tween(AnimationSpec::tween(duration_millis, easing))
    }

    pub fn spring(damping_ratio: f32, stiffness: f32) -> Self {
        AnimationType::Spring(SpringSpec::new(damping_ratio, stiffness))
    }
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

impl From<AnimationSpec> for AnimationType {
    fn from(spec: AnimationSpec) -> Self {
        AnimationType::Tween(spec)
    }
}

impl From<SpringSpec> for AnimationType {
    fn from(spec: SpringSpec) -> Self {
        AnimationType::Spring(spec)
    }
}

/// Why an `animate_to` run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEndReason {
    /// The value reached its target.
    Finished,
    /// Another animation, a snap, a stop or disposal superseded the run.
    Interrupted,
}

#[derive(Default)]
struct CompletionSlot {
    result: Option<AnimationEndReason>,
    waker: Option<Waker>,
}

impl CompletionSlot {
    fn resolve(slot: &Rc<RefCell<CompletionSlot>>, reason: AnimationEndReason) {
        let waker = {
            let mut slot = slot.borrow_mut();
            if slot.result.is_some() {
                return;
            }
            slot.result = Some(reason);
            slot.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

/// Future returned by [`Animatable::animate_to_async`].
///
/// Resolves once the run finishes or is superseded.
pub struct AnimationCompletion {
    slot: Rc<RefCell<CompletionSlot>>,
}

impl Future for AnimationCompletion {
    type Output = AnimationEndReason;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut slot = self.slot.borrow_mut();
        match slot.result {
            Some(reason) => Poll::Ready(reason),
            None => {
                slot.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

/// Generic animatable value holder.
pub struct Animatable<T: Animated> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Animated> {
    label: &'static str,
    state: MutableState<T>,
    runtime: RuntimeHandle,
    current: AnimationVector,
    velocity: AnimationVector,
    start: AnimationVector,
    start_velocity: AnimationVector,
    target: T,
    target_vector: AnimationVector,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    generation: u64,
    running: bool,
    completion: Option<Rc<RefCell<CompletionSlot>>>,
}

impl<T: Animated> AnimatableInner<T> {
    fn publish(&self) {
        self.state.set(T::from_vector(&self.current));
    }

    fn interrupt_current_run(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        if self.running {
            debug!("animation '{}' interrupted", self.label);
        }
        self.running = false;
        if let Some(slot) = self.completion.take() {
            CompletionSlot::resolve(&slot, AnimationEndReason::Interrupted);
        }
    }

    fn finish(&mut self) {
        self.current = self.target_vector.clone();
        self.start = self.target_vector.clone();
        self.velocity = zeroed(self.current.len());
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.running = false;
        self.state.set(self.target.clone());
        if let Some(slot) = self.completion.take() {
            CompletionSlot::resolve(&slot, AnimationEndReason::Finished);
        }
    }

    fn rest_threshold(&self, spec: &SpringSpec) -> f32 {
        spec.visibility_threshold.unwrap_or(T::VISIBILITY_THRESHOLD)
    }

    /// Advances to `frame_time_nanos`; returns whether another frame is needed.
    fn advance(&mut self, frame_time_nanos: u64) -> bool {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let previous = self.current.clone();
        let dt_secs = self
            .last_frame_nanos
            .map(|last| frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0)
            .unwrap_or(0.0);
        self.last_frame_nanos = Some(frame_time_nanos);

        match self.animation_type {
            AnimationType::Tween(spec) => {
                let Some(progress) = spec.progress_at(elapsed_nanos) else {
                    return true;
                };
                let done = elapsed_nanos >= spec.total_nanos();
                if done {
                    self.finish();
                    return false;
                }
                for index in 0..self.current.len() {
                    let from = self.start[index];
                    let to = self.target_vector[index];
                    self.current[index] = from + (to - from) * progress;
                    if dt_secs > 0.0 {
                        self.velocity[index] = (self.current[index] - previous[index]) / dt_secs;
                    }
                }
                self.publish();
                true
            }
            AnimationType::Spring(spec) => {
                let simulation = SpringSimulation::new(spec.damping_ratio, spec.stiffness);
                let threshold = self.rest_threshold(&spec);
                let t = elapsed_nanos as f32 / 1_000_000_000.0;
                let mut at_rest = true;
                for index in 0..self.current.len() {
                    let target = self.target_vector[index];
                    let (displacement, velocity) = simulation.update(
                        self.start[index] - target,
                        self.start_velocity[index],
                        t,
                    );
                    self.current[index] = target + displacement;
                    self.velocity[index] = velocity;
                    if !simulation.is_at_rest(displacement, velocity, threshold) {
                        at_rest = false;
                    }
                }
                if at_rest {
                    self.finish();
                    false
                } else {
                    self.publish();
                    true
                }
            }
        }
    }
}

impl<T: Animated> Drop for AnimatableInner<T> {
    fn drop(&mut self) {
        if let Some(slot) = self.completion.take() {
            CompletionSlot::resolve(&slot, AnimationEndReason::Interrupted);
        }
    }
}

fn zeroed(len: usize) -> AnimationVector {
    smallvec![0.0; len]
}

impl<T: Animated> Animatable<T> {
    /// Create a new animatable with the given initial value.
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        Self::with_label(initial, runtime, "animatable")
    }

    /// Create a new animatable whose log lines carry `label`.
    pub fn with_label(initial: T, runtime: RuntimeHandle, label: &'static str) -> Self {
        let vector = initial.to_vector();
        let len = vector.len();
        let inner = AnimatableInner {
            label,
            state: MutableState::with_runtime(initial.clone(), runtime.clone()),
            runtime,
            current: vector.clone(),
            velocity: zeroed(len),
            start: vector.clone(),
            start_velocity: zeroed(len),
            target: initial,
            target_vector: vector,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            registration: None,
            generation: 0,
            running: false,
            completion: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate to the target value using the specified animation.
    ///
    /// An in-flight run is superseded: the new run starts from the current
    /// value and velocity.
    pub fn animate_to(&self, target: T, animation: impl Into<AnimationType>) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.interrupt_current_run();

            inner.start = inner.current.clone();
            inner.start_velocity = inner.velocity.clone();
            inner.target_vector = target.to_vector();
            inner.target = target;
            inner.animation_type = animation.into();
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;
            inner.generation += 1;
            inner.running = true;
            debug!("animation '{}' started", inner.label);
        }
        Self::schedule_frame(&self.inner);
    }

    /// Like [`Animatable::animate_to`], returning a future that resolves when
    /// this run ends.
    pub fn animate_to_async(
        &self,
        target: T,
        animation: impl Into<AnimationType>,
    ) -> AnimationCompletion {
        self.animate_to(target, animation);
        let slot = Rc::new(RefCell::new(CompletionSlot::default()));
        self.inner.borrow_mut().completion = Some(Rc::clone(&slot));
        AnimationCompletion { slot }
    }

    /// Snap immediately to the target value without animating.
    pub fn snap_to(&self, target: T) {
        let mut inner = self.inner.borrow_mut();
        inner.interrupt_current_run();
        inner.generation += 1;
        inner.target_vector = target.to_vector();
        inner.current = inner.target_vector.clone();
        inner.start = inner.target_vector.clone();
        inner.velocity = zeroed(inner.current.len());
        inner.start_time_nanos = None;
        inner.last_frame_nanos = None;
        inner.target = target.clone();
        inner.state.set(target);
    }

    /// Current (interpolated) value.
    pub fn value(&self) -> T {
        self.inner.borrow().state.value()
    }

    /// Return the current animation target.
    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    /// Current velocity per component, in units per second.
    pub fn velocity(&self) -> AnimationVector {
        self.inner.borrow().velocity.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Return the animation spec currently driving this animatable.
    pub fn animation_type(&self) -> AnimationType {
        self.inner.borrow().animation_type
    }

    /// Get the published state.
    pub fn state(&self) -> State<T> {
        self.inner.borrow().state.as_state()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let (runtime, generation) = {
            let inner = this.borrow();
            if inner.registration.is_some() || !inner.running {
                return;
            }
            (inner.runtime.clone(), inner.generation)
        };
        let weak: Weak<RefCell<AnimatableInner<T>>> = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, generation, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, generation: u64, frame_time_nanos: u64) {
        let schedule_next = {
            let mut inner = this.borrow_mut();
            if inner.generation != generation || !inner.running {
                return;
            }
            // The callback has fired; dropping the registration is a no-op.
            inner.registration = None;
            inner.advance(frame_time_nanos)
        };

        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl<T: Animated> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Animated + fmt::Debug> fmt::Debug for Animatable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Animatable")
            .field("label", &inner.label)
            .field("target", &inner.target)
            .field("running", &inner.running)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
