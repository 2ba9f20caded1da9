use crate::runtime::RuntimeHandle;
use crate::FrameCallbackId;
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

const NANOS_PER_MILLI: u64 = 1_000_000;

#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let mut callback_opt = Some(callback);
        let runtime = self.runtime.clone();
        match runtime.register_frame_callback(move |time| {
            if let Some(callback) = callback_opt.take() {
                callback(time);
            }
        }) {
            Some(id) => FrameCallbackRegistration::new(runtime, id),
            None => FrameCallbackRegistration::inactive(runtime),
        }
    }

    pub fn next_frame(&self) -> NextFrame {
        NextFrame::new(self.clone())
    }

    /// Suspends until `millis` of frame time have passed.
    ///
    /// Time is measured from the most recently drained frame, or from the
    /// next frame when none has been drained yet. The future completes on
    /// the first frame at or past the deadline.
    pub fn delay(&self, millis: u64) -> impl Future<Output = u64> + 'static {
        let clock = self.clone();
        async move {
            let start = clock.current_frame_nanos().await;
            clock
                .frame_at_or_after(start.saturating_add(millis.saturating_mul(NANOS_PER_MILLI)))
                .await
        }
    }

    /// Ticker firing every `millis` of frame time.
    ///
    /// Deadlines are multiples of the period from the first tick's start,
    /// so a late frame never pushes the following ticks back.
    pub fn interval(&self, millis: u64) -> Interval {
        Interval {
            clock: self.clone(),
            period_nanos: millis.saturating_mul(NANOS_PER_MILLI),
            start: None,
            ticks: 0,
        }
    }

    async fn current_frame_nanos(&self) -> u64 {
        match self.runtime.last_frame_nanos() {
            Some(time) => time,
            None => self.next_frame().await,
        }
    }

    async fn frame_at_or_after(&self, deadline: u64) -> u64 {
        loop {
            let now = self.next_frame().await;
            if now >= deadline {
                return now;
            }
        }
    }
}

/// Fixed-rate ticker created by [`FrameClock::interval`].
pub struct Interval {
    clock: FrameClock,
    period_nanos: u64,
    start: Option<u64>,
    ticks: u64,
}

impl Interval {
    /// Completes on the first frame at or past the next deadline and
    /// returns that frame's time.
    pub async fn tick(&mut self) -> u64 {
        let start = match self.start {
            Some(start) => start,
            None => {
                let start = self.clock.current_frame_nanos().await;
                self.start = Some(start);
                start
            }
        };
        self.ticks += 1;
        let deadline = start.saturating_add(self.period_nanos.saturating_mul(self.ticks));
        self.clock.frame_at_or_after(deadline).await
    }

    /// Number of ticks started so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

pub struct FrameCallbackRegistration {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
}

struct NextFrameState {
    registration: Option<FrameCallbackRegistration>,
    time: Option<u64>,
    waker: Option<Waker>,
}

impl NextFrameState {
    fn new() -> Self {
        Self {
            registration: None,
            time: None,
            waker: None,
        }
    }
}

/// Future resolving with the timestamp of the next drained frame.
pub struct NextFrame {
    clock: FrameClock,
    state: Rc<RefCell<NextFrameState>>,
}

impl NextFrame {
    fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            state: Rc::new(RefCell::new(NextFrameState::new())),
        }
    }
}

impl Future for NextFrame {
    type Output = u64;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(time) = self.state.borrow().time {
            return Poll::Ready(time);
        }

        let needs_registration = {
            let mut state = self.state.borrow_mut();
            state.waker = Some(cx.waker().clone());
            state.registration.is_none()
        };

        if needs_registration {
            let weak = Rc::downgrade(&self.state);
            let registration = self.clock.with_frame_nanos(move |time| {
                if let Some(state) = weak.upgrade() {
                    let mut state = state.borrow_mut();
                    state.time = Some(time);
                    // The registration already fired; forget it without cancelling.
                    if let Some(mut fired) = state.registration.take() {
                        fired.id = None;
                    }
                    if let Some(waker) = state.waker.take() {
                        waker.wake();
                    }
                }
            });
            self.state.borrow_mut().registration = Some(registration);
        }

        match self.state.borrow().time {
            Some(time) => Poll::Ready(time),
            None => Poll::Pending,
        }
    }
}

impl Drop for NextFrame {
    fn drop(&mut self) {
        let registration = self.state.borrow_mut().registration.take();
        drop(registration);
    }
}

impl FrameCallbackRegistration {
    fn new(runtime: RuntimeHandle, id: FrameCallbackId) -> Self {
        Self {
            runtime,
            id: Some(id),
        }
    }

    fn inactive(runtime: RuntimeHandle) -> Self {
        Self { runtime, id: None }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}
