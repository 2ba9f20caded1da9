//! Headless driver that runs a [`ShowcaseApp`] on a virtual frame clock.

use std::fmt;

use log::{debug, info, trace};
use motion_runtime_std::StdRuntime;
use motion_ui_graphics::Point;

use crate::app::ShowcaseApp;
use crate::navigation::ScreenId;
use crate::scene::Scene;
use crate::script::{Command, Script};
use crate::settings::ShowcaseSettings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// `click` named a label that is not on screen.
    LabelNotFound { label: String, screen: ScreenId },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::LabelNotFound { label, screen } => {
                write!(f, "no clickable '{label}' on screen {screen}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

pub struct Session {
    settings: ShowcaseSettings,
    runtime: StdRuntime,
    app: ShowcaseApp,
    frame_time_nanos: u64,
    frames: u64,
    idle_frames: u64,
}

impl Session {
    pub fn new(settings: ShowcaseSettings) -> Self {
        let runtime = StdRuntime::new();
        let app = ShowcaseApp::new(runtime.runtime_handle(), settings.viewport);
        info!(
            "session started: {}x{} at {} fps",
            settings.viewport.width, settings.viewport.height, settings.frames_per_second
        );
        Self {
            settings,
            runtime,
            app,
            frame_time_nanos: 0,
            frames: 0,
            idle_frames: 0,
        }
    }

    pub fn settings(&self) -> &ShowcaseSettings {
        &self.settings
    }

    pub fn app(&self) -> &ShowcaseApp {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut ShowcaseApp {
        &mut self.app
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn frame_time_millis(&self) -> u64 {
        self.frame_time_nanos / 1_000_000
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames skipped because no animation or task asked for them.
    pub fn idle_frames(&self) -> u64 {
        self.idle_frames
    }

    /// Advances virtual time by one frame interval and runs that frame if
    /// the runtime asked for one. Realtime sessions then wait for the
    /// frame's wall-clock deadline.
    pub fn step_frame(&mut self) {
        self.frame_time_nanos = self
            .frame_time_nanos
            .saturating_add(self.settings.frame_interval_nanos());
        self.frames += 1;
        if self.runtime.tick(self.frame_time_nanos).ran() {
            self.app.after_frame();
        } else {
            self.idle_frames += 1;
        }
        trace!(
            "frame {} at {}ms on {}",
            self.frames,
            self.frame_time_millis(),
            self.app.current_screen()
        );
        if self.settings.realtime {
            self.runtime.pace(self.frame_time_nanos);
        }
    }

    /// Runs as many frames as fit in `millis`, rounding up.
    pub fn wait(&mut self, millis: u64) {
        for _ in 0..frames_for(millis, self.settings.frame_interval_nanos()) {
            self.step_frame();
        }
    }

    pub fn tap(&mut self, point: Point) -> bool {
        self.app.press(point)
    }

    pub fn click(&mut self, label: &str) -> Result<(), SessionError> {
        if self.app.click(label) {
            Ok(())
        } else {
            Err(SessionError::LabelNotFound {
                label: label.to_string(),
                screen: self.app.current_screen(),
            })
        }
    }

    pub fn goto(&mut self, id: ScreenId) {
        self.app.navigate_to(id);
    }

    pub fn back(&mut self) -> bool {
        self.app.back()
    }

    pub fn snapshot(&self) -> Scene {
        let scene = self.app.render();
        if self.settings.log_scenes {
            info!(
                "[{} ms] {}: {}",
                self.frame_time_millis(),
                self.app.current_screen(),
                scene.summary()
            );
        }
        scene
    }

    pub fn execute(&mut self, command: &Command) -> Result<(), SessionError> {
        match command {
            Command::Goto(id) => self.goto(*id),
            Command::Back => {
                if !self.back() {
                    debug!("back ignored on main screen");
                }
            }
            Command::Tap(point) => {
                if !self.tap(*point) {
                    debug!("tap at ({}, {}) hit nothing", point.x, point.y);
                }
            }
            Command::Click(label) => self.click(label)?,
            Command::Wait(millis) => self.wait(*millis),
            Command::Snapshot => {
                self.snapshot();
            }
        }
        Ok(())
    }

    /// Runs every command; input commands are followed by one frame so the
    /// work they start is picked up before the next command.
    pub fn run_script(&mut self, script: &Script) -> Result<(), SessionError> {
        for line in script.lines() {
            info!("line {}: {}", line.line, line.command);
            self.execute(&line.command)?;
            if !matches!(line.command, Command::Wait(_) | Command::Snapshot) {
                self.step_frame();
            }
        }
        Ok(())
    }
}

/// Whole frames of `interval_nanos` needed to cover `millis`.
fn frames_for(millis: u64, interval_nanos: u64) -> u64 {
    millis
        .saturating_mul(1_000_000)
        .div_ceil(interval_nanos.max(1))
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
