use std::fmt;

use log::info;
use motion_core::RuntimeHandle;
use motion_ui_graphics::{Point, Size};

use crate::scene::{Action, Scene};
use crate::screens;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ScreenId {
    Main,
    AnimatedContent,
    ValueDemo1,
    ValueDemo2,
    Gesture,
}

impl ScreenId {
    pub const ALL: [ScreenId; 5] = [
        ScreenId::Main,
        ScreenId::AnimatedContent,
        ScreenId::ValueDemo1,
        ScreenId::ValueDemo2,
        ScreenId::Gesture,
    ];

    /// Short name used by scripts.
    pub fn slug(self) -> &'static str {
        match self {
            ScreenId::Main => "main",
            ScreenId::AnimatedContent => "content",
            ScreenId::ValueDemo1 => "value1",
            ScreenId::ValueDemo2 => "value2",
            ScreenId::Gesture => "gesture",
        }
    }

    /// Label of the main-menu button leading to this screen.
    pub fn label(self) -> &'static str {
        match self {
            ScreenId::Main => "Main",
            ScreenId::AnimatedContent => "Animated Content",
            ScreenId::ValueDemo1 => "Value Based Animation 1",
            ScreenId::ValueDemo2 => "Value Based Animation 2",
            ScreenId::Gesture => "Gesture Based Animation",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.slug() == slug)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A mounted screen.
///
/// Screens own every animation, timer and task they start; dropping the
/// screen cancels them.
pub trait Screen {
    fn id(&self) -> ScreenId;

    fn render(&self, scene: &mut Scene);

    /// Handles a screen-local action pressed at `point`.
    fn on_action(&mut self, action: Action, point: Point);

    /// Housekeeping after each frame, such as disposing finished exits.
    fn after_frame(&mut self) {}
}

/// Holds the single mounted screen.
pub struct Navigator {
    runtime: RuntimeHandle,
    viewport: Size,
    current: Box<dyn Screen>,
}

impl Navigator {
    pub fn new(runtime: RuntimeHandle, viewport: Size) -> Self {
        let current = screens::mount(ScreenId::Main, &runtime, viewport);
        Self {
            runtime,
            viewport,
            current,
        }
    }

    pub fn current_id(&self) -> ScreenId {
        self.current.id()
    }

    pub fn screen(&self) -> &dyn Screen {
        self.current.as_ref()
    }

    pub fn screen_mut(&mut self) -> &mut dyn Screen {
        self.current.as_mut()
    }

    /// Replaces the mounted screen with a fresh instance of `id`.
    ///
    /// Navigating to the current screen remounts it.
    pub fn navigate_to(&mut self, id: ScreenId) {
        info!("navigate {} -> {}", self.current.id(), id);
        self.current = screens::mount(id, &self.runtime, self.viewport);
    }

    /// Returns to the main screen; `false` when already there.
    pub fn back(&mut self) -> bool {
        if self.current.id() == ScreenId::Main {
            return false;
        }
        self.navigate_to(ScreenId::Main);
        true
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
