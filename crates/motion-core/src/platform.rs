//! Platform abstraction traits for runtime services.
//!
//! These traits let the runtime delegate frame scheduling and wall-clock
//! queries to the host, so the same animation code runs under a real-time
//! driver and under a virtual test clock.

/// Schedules work for the runtime.
///
/// Implementations are responsible for triggering frame processing on
/// behalf of the runtime. They must be safe to share across threads because
/// task wakers hold on to them.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> u64;
}
