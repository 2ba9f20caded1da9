//! Animation showcase: a set of screens exercising tweens, springs,
//! transitions and infinite loops on a frame-driven runtime.

pub mod app;
pub mod navigation;
pub mod scene;
pub mod screens;
pub mod script;
pub mod session;
pub mod settings;

pub use app::ShowcaseApp;
pub use navigation::{Navigator, Screen, ScreenId};
pub use scene::{Action, HitRegion, Scene, SceneShape, SceneText};
pub use script::{Command, Script, ScriptError, ScriptErrorKind};
pub use session::{Session, SessionError};
pub use settings::{SettingsError, ShowcaseSettings};
