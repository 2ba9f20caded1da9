use motion_core::RuntimeHandle;

use crate::animation::AnimationType;
use crate::content::{ContentFrame, EnterTransition, ExitTransition, FrameTrack};

/// Shows and hides one piece of content with enter/exit transitions.
///
/// While hiding, [`AnimatedVisibility::frame`] keeps returning frames until
/// the exit animation finishes; after that the content is gone. Toggling
/// mid-animation continues from the frame currently drawn.
pub struct AnimatedVisibility {
    visible: bool,
    track: FrameTrack,
    enter: EnterTransition,
    exit: ExitTransition,
}

impl AnimatedVisibility {
    pub fn new(
        visible: bool,
        runtime: RuntimeHandle,
        enter: EnterTransition,
        exit: ExitTransition,
    ) -> Self {
        Self {
            visible,
            track: FrameTrack::settled(ContentFrame::VISIBLE, runtime),
            enter,
            exit,
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if visible {
            let spec: AnimationType = self.enter.spec.unwrap_or_default();
            if self.track.is_running() {
                self.track.retarget(ContentFrame::VISIBLE, spec);
            } else {
                self.track
                    .start(self.enter.frame_at(0.0), ContentFrame::VISIBLE, spec);
            }
        } else {
            let spec: AnimationType = self.exit.spec.unwrap_or_default();
            self.track.retarget(self.exit.frame_at(0.0), spec);
        }
    }

    /// Target visibility.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the content is on screen, including while it animates out.
    pub fn is_present(&self) -> bool {
        self.visible || self.track.is_running()
    }

    pub fn is_running(&self) -> bool {
        self.track.is_running()
    }

    /// Frame to draw the content with, or `None` once fully hidden.
    pub fn frame(&self) -> Option<ContentFrame> {
        self.is_present().then(|| self.track.frame())
    }
}
