//! Animated swaps between pieces of content keyed by state.
//!
//! [`AnimatedContent`] keeps one entry per state that is still on screen.
//! Each entry animates from the frame it was last drawn with to the end
//! frame of its current role: fully shown when entering, the exit
//! transition's final frame when leaving. Interrupting an entry restarts
//! that run from wherever it is, so nothing jumps. Exiting entries stay
//! until their exit animation finishes and the owner prunes them.

use std::fmt;
use std::ops::Add;

use log::debug;
use motion_core::RuntimeHandle;
use motion_ui_graphics::Point;

use crate::animation::{Animatable, AnimationSpec, AnimationType};

/// How a piece of content appears.
///
/// Offsets are fractions of the content's own size: `(0, 1)` starts one
/// full height below the final position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnterTransition {
    pub fade: bool,
    pub slide_from: Option<Point>,
    pub initial_scale: Option<f32>,
    pub expand: bool,
    pub spec: Option<AnimationType>,
}

/// How a piece of content disappears. Mirrors [`EnterTransition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitTransition {
    pub fade: bool,
    pub slide_to: Option<Point>,
    pub target_scale: Option<f32>,
    pub shrink: bool,
    pub spec: Option<AnimationType>,
}

impl EnterTransition {
    pub const NONE: EnterTransition = EnterTransition {
        fade: false,
        slide_from: None,
        initial_scale: None,
        expand: false,
        spec: None,
    };

    pub fn fade_in() -> Self {
        Self {
            fade: true,
            ..Self::NONE
        }
    }

    pub fn slide_in(from: Point) -> Self {
        Self {
            slide_from: Some(from),
            ..Self::NONE
        }
    }

    pub fn slide_in_horizontally(fraction: f32) -> Self {
        Self::slide_in(Point::new(fraction, 0.0))
    }

    pub fn slide_in_vertically(fraction: f32) -> Self {
        Self::slide_in(Point::new(0.0, fraction))
    }

    pub fn scale_in(initial_scale: f32) -> Self {
        Self {
            initial_scale: Some(initial_scale),
            ..Self::NONE
        }
    }

    pub fn expand_vertically() -> Self {
        Self {
            expand: true,
            ..Self::NONE
        }
    }

    pub fn with_spec(mut self, spec: impl Into<AnimationType>) -> Self {
        self.spec = Some(spec.into());
        self
    }

    pub fn together_with(self, exit: ExitTransition) -> ContentTransform {
        ContentTransform {
            enter: self,
            exit,
            clip: true,
        }
    }

    /// Frame for an entry at visibility `progress`.
    pub fn frame_at(&self, progress: f32) -> ContentFrame {
        frame_for(
            progress,
            self.fade,
            self.slide_from,
            self.initial_scale,
            self.expand,
        )
    }
}

impl ExitTransition {
    pub const NONE: ExitTransition = ExitTransition {
        fade: false,
        slide_to: None,
        target_scale: None,
        shrink: false,
        spec: None,
    };

    pub fn fade_out() -> Self {
        Self {
            fade: true,
            ..Self::NONE
        }
    }

    pub fn slide_out(to: Point) -> Self {
        Self {
            slide_to: Some(to),
            ..Self::NONE
        }
    }

    pub fn slide_out_horizontally(fraction: f32) -> Self {
        Self::slide_out(Point::new(fraction, 0.0))
    }

    pub fn slide_out_vertically(fraction: f32) -> Self {
        Self::slide_out(Point::new(0.0, fraction))
    }

    pub fn scale_out(target_scale: f32) -> Self {
        Self {
            target_scale: Some(target_scale),
            ..Self::NONE
        }
    }

    pub fn shrink_vertically() -> Self {
        Self {
            shrink: true,
            ..Self::NONE
        }
    }

    pub fn with_spec(mut self, spec: impl Into<AnimationType>) -> Self {
        self.spec = Some(spec.into());
        self
    }

    pub fn frame_at(&self, progress: f32) -> ContentFrame {
        frame_for(
            progress,
            self.fade,
            self.slide_to,
            self.target_scale,
            self.shrink,
        )
    }
}

/// Combining keeps every effect; the right-hand spec wins when both set one.
impl Add for EnterTransition {
    type Output = EnterTransition;

    fn add(self, rhs: EnterTransition) -> EnterTransition {
        EnterTransition {
            fade: self.fade || rhs.fade,
            slide_from: rhs.slide_from.or(self.slide_from),
            initial_scale: rhs.initial_scale.or(self.initial_scale),
            expand: self.expand || rhs.expand,
            spec: rhs.spec.or(self.spec),
        }
    }
}

impl Add for ExitTransition {
    type Output = ExitTransition;

    fn add(self, rhs: ExitTransition) -> ExitTransition {
        ExitTransition {
            fade: self.fade || rhs.fade,
            slide_to: rhs.slide_to.or(self.slide_to),
            target_scale: rhs.target_scale.or(self.target_scale),
            shrink: self.shrink || rhs.shrink,
            spec: rhs.spec.or(self.spec),
        }
    }
}

fn frame_for(
    progress: f32,
    fade: bool,
    offset: Option<Point>,
    scale: Option<f32>,
    resize: bool,
) -> ContentFrame {
    let clamped = progress.clamp(0.0, 1.0);
    let remaining = 1.0 - progress;
    ContentFrame {
        alpha: if fade { clamped } else { 1.0 },
        offset: offset
            .map(|offset| Point::new(offset.x * remaining, offset.y * remaining))
            .unwrap_or(Point::ZERO),
        scale: scale
            .map(|edge| edge + (1.0 - edge) * progress)
            .unwrap_or(1.0),
        size_fraction: if resize { clamped } else { 1.0 },
    }
}

/// Visual state of one entry for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentFrame {
    pub alpha: f32,
    /// Offset as a fraction of the content size.
    pub offset: Point,
    pub scale: f32,
    /// Fraction of the content's height that is laid out.
    pub size_fraction: f32,
}

impl ContentFrame {
    pub const VISIBLE: ContentFrame = ContentFrame {
        alpha: 1.0,
        offset: Point::ZERO,
        scale: 1.0,
        size_fraction: 1.0,
    };

    /// Interpolates towards `other`; alpha and size stay within `0..=1`
    /// when `fraction` overshoots.
    pub fn lerp(&self, other: &ContentFrame, fraction: f32) -> ContentFrame {
        if fraction == 1.0 {
            return *other;
        }
        let mix = |a: f32, b: f32| a + (b - a) * fraction;
        ContentFrame {
            alpha: mix(self.alpha, other.alpha).clamp(0.0, 1.0),
            offset: Point::new(
                mix(self.offset.x, other.offset.x),
                mix(self.offset.y, other.offset.y),
            ),
            scale: mix(self.scale, other.scale),
            size_fraction: mix(self.size_fraction, other.size_fraction).clamp(0.0, 1.0),
        }
    }
}

/// Animated hand-off between two frames.
///
/// Retargeting starts the new run from the frame currently drawn.
pub(crate) struct FrameTrack {
    from: ContentFrame,
    to: ContentFrame,
    progress: Animatable<f32>,
}

impl FrameTrack {
    pub(crate) fn settled(frame: ContentFrame, runtime: RuntimeHandle) -> Self {
        Self {
            from: frame,
            to: frame,
            progress: Animatable::with_label(1.0, runtime, "content frame"),
        }
    }

    pub(crate) fn frame(&self) -> ContentFrame {
        self.from.lerp(&self.to, self.progress.value())
    }

    /// Animates from `from` to `to`, dropping wherever the track was.
    pub(crate) fn start(&mut self, from: ContentFrame, to: ContentFrame, spec: AnimationType) {
        self.from = from;
        self.to = to;
        self.progress.snap_to(0.0);
        self.progress.animate_to(1.0, spec);
    }

    /// Animates from the current frame to `to`.
    pub(crate) fn retarget(&mut self, to: ContentFrame, spec: AnimationType) {
        let current = self.frame();
        self.start(current, to, spec);
    }

    pub(crate) fn is_running(&self) -> bool {
        self.progress.is_running()
    }
}

/// Enter and exit transitions applied together when the target changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentTransform {
    pub enter: EnterTransition,
    pub exit: ExitTransition,
    /// Whether the container clips content that slides outside of it.
    pub clip: bool,
}

impl ContentTransform {
    pub fn with_clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryRole {
    Entering,
    Exiting,
}

struct ContentEntry<S> {
    state: S,
    track: FrameTrack,
    role: EntryRole,
}

/// One state on screen for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem<S> {
    pub state: S,
    pub frame: ContentFrame,
    pub is_target: bool,
}

type TransformFn<S> = Box<dyn Fn(&S, &S) -> ContentTransform>;

pub struct AnimatedContent<S: Clone + PartialEq + 'static> {
    runtime: RuntimeHandle,
    target: S,
    entries: Vec<ContentEntry<S>>,
    transform_for: TransformFn<S>,
    clip: bool,
    default_spec: AnimationType,
}

impl<S: Clone + PartialEq + 'static> AnimatedContent<S> {
    /// Shows `initial` fully; later target changes use `transform_for(old, new)`.
    pub fn new(
        initial: S,
        runtime: RuntimeHandle,
        transform_for: impl Fn(&S, &S) -> ContentTransform + 'static,
    ) -> Self {
        let track = FrameTrack::settled(ContentFrame::VISIBLE, runtime.clone());
        Self {
            runtime,
            target: initial.clone(),
            entries: vec![ContentEntry {
                state: initial,
                track,
                role: EntryRole::Entering,
            }],
            transform_for: Box::new(transform_for),
            clip: true,
            default_spec: AnimationType::default(),
        }
    }

    /// Content that fades between states with `spec` in both directions.
    pub fn crossfade(initial: S, runtime: RuntimeHandle, spec: AnimationSpec) -> Self {
        let mut content = Self::new(initial, runtime, move |_, _| {
            EnterTransition::fade_in()
                .with_spec(spec)
                .together_with(ExitTransition::fade_out().with_spec(spec))
        });
        content.default_spec = AnimationType::Tween(spec);
        content
    }

    pub fn target(&self) -> &S {
        &self.target
    }

    pub fn clip(&self) -> bool {
        self.clip
    }

    pub fn set_target(&mut self, target: S) {
        if self.target == target {
            return;
        }
        let transform = (self.transform_for)(&self.target, &target);
        self.clip = transform.clip;
        let exit_spec = transform.exit.spec.unwrap_or(self.default_spec);
        let enter_spec = transform.enter.spec.unwrap_or(self.default_spec);

        for entry in &mut self.entries {
            if entry.state == target {
                continue;
            }
            if entry.role == EntryRole::Entering {
                entry.role = EntryRole::Exiting;
                entry.track.retarget(transform.exit.frame_at(0.0), exit_spec);
            }
        }

        match self.entries.iter_mut().find(|entry| entry.state == target) {
            Some(entry) => {
                debug!("content re-entering while still on screen");
                entry.role = EntryRole::Entering;
                entry.track.retarget(ContentFrame::VISIBLE, enter_spec);
            }
            None => {
                let mut track = FrameTrack::settled(ContentFrame::VISIBLE, self.runtime.clone());
                track.start(
                    transform.enter.frame_at(0.0),
                    ContentFrame::VISIBLE,
                    enter_spec,
                );
                self.entries.push(ContentEntry {
                    state: target.clone(),
                    track,
                    role: EntryRole::Entering,
                });
            }
        }
        self.target = target;
    }

    /// Entries in draw order, the target drawn last.
    pub fn items(&self) -> Vec<ContentItem<S>> {
        let mut items: Vec<ContentItem<S>> = self
            .entries
            .iter()
            .map(|entry| ContentItem {
                state: entry.state.clone(),
                frame: entry.track.frame(),
                is_target: entry.state == self.target,
            })
            .collect();
        items.sort_by_key(|item| item.is_target);
        items
    }

    /// Removes entries whose exit animation has finished.
    ///
    /// Returns the removed states so the owner can dispose of them.
    pub fn prune(&mut self) -> Vec<S> {
        let mut removed = Vec::new();
        self.entries.retain(|entry| {
            let finished = entry.role == EntryRole::Exiting && !entry.track.is_running();
            if finished {
                removed.push(entry.state.clone());
            }
            !finished
        });
        removed
    }

    pub fn is_running(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.track.is_running())
    }

    /// Number of states currently on screen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Clone + PartialEq + fmt::Debug + 'static> fmt::Debug for AnimatedContent<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedContent")
            .field("target", &self.target)
            .field(
                "states",
                &self.entries.iter().map(|e| &e.state).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
