//! Single-threaded runtime for frame-driven animation.
//!
//! The runtime owns three queues: frame callbacks (drained once per frame
//! with the frame timestamp), local UI closures and spawned futures. Hosts
//! call [`RuntimeHandle::drain_frame_callbacks`] followed by
//! [`RuntimeHandle::drain_ui`] on every tick.

mod collections;
mod effect;
mod frame_clock;
mod hash;
mod platform;
mod runtime;
mod state;

pub use effect::{EffectScope, KeyedEffect};
pub use frame_clock::{FrameCallbackRegistration, FrameClock, Interval, NextFrame};
pub use hash::{hash_key, Key};
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle, TaskHandle};
pub use state::{MutableState, State};

pub type FrameCallbackId = u64;

pub mod prelude {
    pub use crate::{
        EffectScope, FrameClock, KeyedEffect, MutableState, Runtime, RuntimeHandle, State,
    };
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod runtime_tests;

#[cfg(test)]
#[path = "tests/effect_tests.rs"]
mod effect_tests;
