//! Session settings with environment overrides.

use std::fmt;

use motion_ui_graphics::Size;

pub const VIEWPORT_ENV: &str = "SHOWCASE_VIEWPORT";
pub const FPS_ENV: &str = "SHOWCASE_FPS";
pub const REALTIME_ENV: &str = "SHOWCASE_REALTIME";

/// Configuration for a showcase session.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseSettings {
    /// Logical size of the screen in pixels.
    pub viewport: Size,
    /// Frames per second of the virtual frame clock.
    pub frames_per_second: u32,
    /// Sleep between frames so the session runs at wall-clock speed.
    pub realtime: bool,
    /// Log a scene summary on every `snapshot` command.
    pub log_scenes: bool,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            viewport: Size::new(400.0, 800.0),
            frames_per_second: 60,
            realtime: false,
            log_scenes: true,
        }
    }
}

impl ShowcaseSettings {
    pub fn builder() -> ShowcaseSettingsBuilder {
        ShowcaseSettingsBuilder::default()
    }

    /// Defaults overridden by the `SHOWCASE_*` environment variables.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ShowcaseSettings::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        if let Some(raw) = lookup(VIEWPORT_ENV) {
            settings.viewport = parse_viewport(&raw)?;
        }
        if let Some(raw) = lookup(FPS_ENV) {
            settings.frames_per_second = parse_fps(&raw)?;
        }
        if let Some(raw) = lookup(REALTIME_ENV) {
            settings.realtime = parse_flag(REALTIME_ENV, &raw)?;
        }
        Ok(settings)
    }

    pub fn frame_interval_nanos(&self) -> u64 {
        1_000_000_000 / u64::from(self.frames_per_second.max(1))
    }
}

fn parse_viewport(raw: &str) -> Result<Size, SettingsError> {
    let invalid = || SettingsError::InvalidValue {
        key: VIEWPORT_ENV,
        value: raw.to_string(),
        expected: "WIDTHxHEIGHT with positive numbers",
    };
    let (width, height) = raw.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: f32 = width.trim().parse().map_err(|_| invalid())?;
    let height: f32 = height.trim().parse().map_err(|_| invalid())?;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(invalid());
    }
    Ok(Size::new(width, height))
}

fn parse_fps(raw: &str) -> Result<u32, SettingsError> {
    match raw.trim().parse::<u32>() {
        Ok(fps) if (1..=1000).contains(&fps) => Ok(fps),
        _ => Err(SettingsError::InvalidValue {
            key: FPS_ENV,
            value: raw.to_string(),
            expected: "an integer between 1 and 1000",
        }),
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, SettingsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidValue {
            key,
            value: raw.to_string(),
            expected: "1, 0, true or false",
        }),
    }
}

/// Builder for [`ShowcaseSettings`].
#[derive(Clone, Debug, Default)]
pub struct ShowcaseSettingsBuilder {
    settings: ShowcaseSettings,
}

impl ShowcaseSettingsBuilder {
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.settings.viewport = Size::new(width, height);
        self
    }

    pub fn with_fps(mut self, frames_per_second: u32) -> Self {
        self.settings.frames_per_second = frames_per_second.max(1);
        self
    }

    pub fn with_realtime(mut self, realtime: bool) -> Self {
        self.settings.realtime = realtime;
        self
    }

    pub fn with_scene_logging(mut self, log_scenes: bool) -> Self {
        self.settings.log_scenes = log_scenes;
        self
    }

    pub fn build(self) -> ShowcaseSettings {
        self.settings
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidValue {
                key,
                value,
                expected,
            } => write!(f, "invalid {key}={value:?}: expected {expected}"),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
