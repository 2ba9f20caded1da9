//! `std` host services for the motion runtime.
//!
//! [`StdRuntime`] owns a [`Runtime`] wired to a [`StdScheduler`]. A host
//! calls [`StdRuntime::tick`] once per frame interval; frames nobody asked
//! for are skipped, and [`StdRuntime::pace`] uses [`StdClock`] to hold a
//! frame until its wall-clock deadline.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::trace;
use motion_core::{Clock, FrameClock, Runtime, RuntimeHandle, RuntimeScheduler};

/// Scheduler that records whether a frame has been requested.
#[derive(Default)]
pub struct StdScheduler {
    frame_requested: AtomicBool,
}

impl StdScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a frame has been requested since the last call.
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.swap(false, Ordering::SeqCst)
    }
}

impl fmt::Debug for StdScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdScheduler")
            .field(
                "frame_requested",
                &self.frame_requested.load(Ordering::SeqCst),
            )
            .finish()
    }
}

impl RuntimeScheduler for StdScheduler {
    fn schedule_frame(&self) {
        self.frame_requested.store(true, Ordering::SeqCst);
    }
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StdClock;

impl StdClock {
    /// Nanoseconds since `since`, saturating at `u64::MAX`.
    pub fn elapsed_nanos(&self, since: Instant) -> u64 {
        u64::try_from(since.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn elapsed_millis(&self, since: Self::Instant) -> u64 {
        u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// What [`StdRuntime::tick`] did with a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Frame callbacks and UI work ran.
    Ran,
    /// Nothing was pending; only the frame time was recorded.
    Idle,
}

impl Tick {
    pub fn ran(self) -> bool {
        self == Tick::Ran
    }
}

/// Runtime, scheduler and wall clock bundled for a `std` host.
pub struct StdRuntime {
    scheduler: Arc<StdScheduler>,
    clock: StdClock,
    runtime: Runtime,
    started: Instant,
}

impl StdRuntime {
    pub fn new() -> Self {
        let scheduler = Arc::new(StdScheduler::new());
        let runtime = Runtime::new(scheduler.clone());
        let clock = StdClock;
        Self {
            scheduler,
            clock,
            runtime,
            started: clock.now(),
        }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }

    /// Returns whether a frame was requested since the last poll.
    pub fn take_frame_request(&self) -> bool {
        self.scheduler.take_frame_request()
    }

    /// Wall time since this runtime was created.
    pub fn now_nanos(&self) -> u64 {
        self.clock.elapsed_nanos(self.started)
    }

    /// Runs the frame at `frame_time_nanos` if anything asked for one.
    ///
    /// A pending request or queued work drains frame callbacks and then the
    /// UI work they released. Otherwise the frame is skipped and only its
    /// time is recorded, so delays started later measure from it.
    pub fn tick(&self, frame_time_nanos: u64) -> Tick {
        let requested = self.take_frame_request();
        let handle = self.runtime_handle();
        if !requested && !self.runtime.needs_frame() {
            handle.skip_frame(frame_time_nanos);
            trace!("idle frame at {frame_time_nanos}ns");
            return Tick::Idle;
        }
        handle.drain_frame_callbacks(frame_time_nanos);
        handle.drain_ui();
        trace!("ran frame at {frame_time_nanos}ns");
        Tick::Ran
    }

    /// Sleeps until `frame_time_nanos` of wall time have passed since the
    /// runtime started. Returns how long it slept.
    pub fn pace(&self, frame_time_nanos: u64) -> Duration {
        let now = self.now_nanos();
        if frame_time_nanos <= now {
            return Duration::ZERO;
        }
        let wait = Duration::from_nanos(frame_time_nanos - now);
        thread::sleep(wait);
        wait
    }
}

impl fmt::Debug for StdRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdRuntime")
            .field("scheduler", &self.scheduler)
            .field("needs_frame", &self.runtime.needs_frame())
            .finish()
    }
}

impl Default for StdRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/std_runtime_tests.rs"]
mod tests;
