//! Top-level application: one navigator plus input routing.

use log::debug;
use motion_core::RuntimeHandle;
use motion_ui_graphics::{Point, Size};

use crate::navigation::{Navigator, ScreenId};
use crate::scene::{Action, Scene};

pub struct ShowcaseApp {
    viewport: Size,
    navigator: Navigator,
}

impl ShowcaseApp {
    /// Starts on the main screen.
    pub fn new(runtime: RuntimeHandle, viewport: Size) -> Self {
        Self {
            navigator: Navigator::new(runtime, viewport),
            viewport,
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn current_screen(&self) -> ScreenId {
        self.navigator.current_id()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigate_to(&mut self, id: ScreenId) {
        self.navigator.navigate_to(id);
    }

    pub fn back(&mut self) -> bool {
        self.navigator.back()
    }

    /// Screen housekeeping once a frame's animations have run.
    pub fn after_frame(&mut self) {
        self.navigator.screen_mut().after_frame();
    }

    pub fn render(&self) -> Scene {
        let mut scene = Scene::new(self.viewport);
        self.navigator.screen().render(&mut scene);
        scene
    }

    /// Presses the topmost hit region under `point`.
    ///
    /// Returns whether anything handled the press.
    pub fn press(&mut self, point: Point) -> bool {
        if !point.is_finite() {
            debug!("ignoring non-finite press");
            return false;
        }
        let action = match self.render().hit_at(point) {
            Some(hit) => {
                debug!("press '{}' at ({}, {})", hit.label, point.x, point.y);
                hit.action
            }
            None => return false,
        };
        self.dispatch(action, point);
        true
    }

    /// Presses the center of the topmost region labelled `label`.
    pub fn click(&mut self, label: &str) -> bool {
        let hit = self
            .render()
            .hit_by_label(label)
            .map(|hit| (hit.bounds.center(), hit.action));
        match hit {
            Some((center, action)) => {
                debug!("click '{label}'");
                self.dispatch(action, center);
                true
            }
            None => false,
        }
    }

    pub fn dispatch(&mut self, action: Action, point: Point) {
        match action {
            Action::Navigate(id) => self.navigate_to(id),
            Action::Back => {
                self.back();
            }
            other => self.navigator.screen_mut().on_action(other, point),
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
