use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::trace;
use motion_core::{FrameClock, Runtime, RuntimeHandle, RuntimeScheduler};

/// Nanoseconds between frames at 60 fps.
pub const FRAME_NANOS_60FPS: u64 = 16_666_667;

/// Scheduler that only counts frame requests.
#[derive(Debug, Default)]
pub struct TestScheduler {
    requests: AtomicUsize,
}

impl TestScheduler {
    pub fn frame_requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.requests.store(0, Ordering::SeqCst);
    }
}

impl RuntimeScheduler for TestScheduler {
    fn schedule_frame(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

/// Headless frame driver running a runtime on a virtual clock.
///
/// Each [`FrameDriver::advance_frame`] moves time forward by one frame
/// interval, drains frame callbacks at the new timestamp and then drains
/// UI work, the same order a real host uses.
pub struct FrameDriver {
    runtime: Runtime,
    scheduler: Arc<TestScheduler>,
    frame_time_nanos: u64,
    frame_interval_nanos: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::with_frame_interval(FRAME_NANOS_60FPS)
    }

    pub fn with_frame_interval(frame_interval_nanos: u64) -> Self {
        let scheduler = Arc::new(TestScheduler::default());
        Self {
            runtime: Runtime::new(scheduler.clone()),
            scheduler,
            frame_time_nanos: 0,
            frame_interval_nanos: frame_interval_nanos.max(1),
        }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }

    pub fn scheduler(&self) -> &TestScheduler {
        &self.scheduler
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn frame_time_millis(&self) -> u64 {
        self.frame_time_nanos / 1_000_000
    }

    /// Runs queued UI work without advancing time.
    pub fn pump_ui(&mut self) {
        self.runtime.handle().drain_ui();
    }

    /// Advances one frame and returns the new frame time.
    pub fn advance_frame(&mut self) -> u64 {
        self.frame_time_nanos += self.frame_interval_nanos;
        let handle = self.runtime.handle();
        handle.drain_frame_callbacks(self.frame_time_nanos);
        handle.drain_ui();
        trace!("test frame at {}ms", self.frame_time_millis());
        self.frame_time_nanos
    }

    /// Advances whole frames until at least `millis` of frame time passed.
    pub fn advance_by_millis(&mut self, millis: u64) {
        let deadline = self.frame_time_nanos + millis * 1_000_000;
        while self.frame_time_nanos < deadline {
            self.advance_frame();
        }
    }

    /// Whether no frame callbacks or UI work are pending.
    pub fn is_idle(&self) -> bool {
        let handle = self.runtime.handle();
        !handle.has_frame_callbacks() && !handle.has_pending_ui()
    }

    /// Advances frames until idle, returning the number of frames run.
    ///
    /// Panics after `max_frames` frames; infinite animations never go idle.
    pub fn pump_until_idle(&mut self, max_frames: usize) -> usize {
        self.pump_ui();
        let mut frames = 0;
        while !self.is_idle() {
            assert!(
                frames < max_frames,
                "runtime still busy after {} frames",
                max_frames
            );
            self.advance_frame();
            frames += 1;
        }
        frames
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
