use crate::{MutableState, Runtime, RuntimeScheduler};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const FRAME: u64 = 16_666_667;

#[derive(Default)]
struct CountingScheduler {
    requests: AtomicUsize,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

fn runtime() -> (Runtime, Arc<CountingScheduler>) {
    let scheduler = Arc::new(CountingScheduler::default());
    (Runtime::new(scheduler.clone()), scheduler)
}

#[test]
fn frame_callback_receives_frame_time_once() {
    let (runtime, scheduler) = runtime();
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let seen_cb = Rc::clone(&seen);
    let _registration = runtime
        .frame_clock()
        .with_frame_nanos(move |time| seen_cb.borrow_mut().push(time));

    assert!(runtime.needs_frame());
    assert!(scheduler.requests.load(Ordering::SeqCst) > 0);

    handle.drain_frame_callbacks(FRAME);
    handle.drain_frame_callbacks(2 * FRAME);

    assert_eq!(seen.borrow().as_slice(), &[FRAME]);
    assert!(!runtime.needs_frame());
    assert_eq!(handle.last_frame_nanos(), Some(2 * FRAME));
}

#[test]
fn callbacks_registered_during_a_frame_run_on_the_next_one() {
    let (runtime, _) = runtime();
    let handle = runtime.handle();
    let frames = Rc::new(RefCell::new(Vec::new()));
    let keep_alive = Rc::new(RefCell::new(Vec::new()));

    let clock = runtime.frame_clock();
    let frames_outer = Rc::clone(&frames);
    let keep_alive_outer = Rc::clone(&keep_alive);
    let clock_inner = clock.clone();
    let registration = clock.with_frame_nanos(move |nanos| {
        frames_outer.borrow_mut().push(("outer", nanos / 1_000_000));
        let frames_inner = Rc::clone(&frames_outer);
        let inner = clock_inner.with_frame_nanos(move |nanos| {
            frames_inner.borrow_mut().push(("inner", nanos / 1_000_000))
        });
        keep_alive_outer.borrow_mut().push(inner);
    });
    keep_alive.borrow_mut().push(registration);

    handle.drain_frame_callbacks(16_000_000);
    assert_eq!(frames.borrow().as_slice(), &[("outer", 16)]);

    handle.drain_frame_callbacks(32_000_000);
    assert_eq!(frames.borrow().as_slice(), &[("outer", 16), ("inner", 32)]);
}

#[test]
fn dropping_registration_cancels_callback() {
    let (runtime, _) = runtime();
    let handle = runtime.handle();
    let fired = Rc::new(Cell::new(false));

    let fired_cb = Rc::clone(&fired);
    let registration = runtime
        .frame_clock()
        .with_frame_nanos(move |_| fired_cb.set(true));
    assert!(handle.has_frame_callbacks());
    drop(registration);

    assert!(!handle.has_frame_callbacks());
    assert!(!runtime.needs_frame());
    handle.drain_frame_callbacks(FRAME);
    assert!(!fired.get());
}

#[test]
fn spawned_task_resumes_after_next_frame() {
    let (runtime, _) = runtime();
    let handle = runtime.handle();
    let observed = Rc::new(Cell::new(None));

    let clock = runtime.frame_clock();
    let observed_task = Rc::clone(&observed);
    handle
        .spawn_ui(async move {
            let time = clock.next_frame().await;
            observed_task.set(Some(time));
        })
        .expect("runtime alive");

    handle.drain_ui();
    assert_eq!(observed.get(), None);
    assert!(handle.has_pending_ui());

    handle.drain_frame_callbacks(FRAME);
    handle.drain_ui();
    assert_eq!(observed.get(), Some(FRAME));
    assert!(!handle.has_pending_ui());
}

#[test]
fn delay_completes_on_first_frame_past_deadline() {
    let (runtime, _) = runtime();
    let handle = runtime.handle();
    handle.drain_frame_callbacks(0);

    let finished_at = Rc::new(Cell::new(None));
    let clock = runtime.frame_clock();
    let finished_task = Rc::clone(&finished_at);
    handle.spawn_ui(async move {
        let time = clock.delay(500).await;
        finished_task.set(Some(time));
    });
    handle.drain_ui();

    let mut time = 0;
    while finished_at.get().is_none() && time < 2_000_000_000 {
        time += FRAME;
        handle.drain_frame_callbacks(time);
        handle.drain_ui();
    }

    let finished = finished_at.get().expect("delay finished");
    assert!(finished >= 500_000_000);
    assert!(finished < 500_000_000 + FRAME);
}

#[test]
fn delay_after_skipped_frames_measures_from_the_latest_frame() {
    let (runtime, _) = runtime();
    let handle = runtime.handle();
    handle.drain_frame_callbacks(0);
    for frame in 1..=120u64 {
        handle.skip_frame(frame * FRAME);
    }
    assert_eq!(handle.last_frame_nanos(), Some(120 * FRAME));
    assert!(!handle.needs_frame(), "skipping requests nothing");

    let finished_at = Rc::new(Cell::new(None));
    let clock = runtime.frame_clock();
    let finished_task = Rc::clone(&finished_at);
    handle.spawn_ui(async move {
        finished_task.set(Some(clock.delay(100).await));
    });
    handle.drain_ui();

    let mut time = 120 * FRAME;
    while finished_at.get().is_none() && time < 4_000_000_000 {
        time += FRAME;
        handle.drain_frame_callbacks(time);
        handle.drain_ui();
    }
    let finished = finished_at.get().expect("delay finished");
    assert!(finished >= 120 * FRAME + 100_000_000);
    assert!(finished < 120 * FRAME + 100_000_000 + FRAME);
}

#[test]
fn interval_ticks_stay_on_a_fixed_schedule() {
    let (runtime, _) = runtime();
    let handle = runtime.handle();
    handle.drain_frame_callbacks(0);

    let ticks = Rc::new(RefCell::new(Vec::new()));
    let clock = runtime.frame_clock();
    let recorded = Rc::clone(&ticks);
    handle.spawn_ui(async move {
        let mut interval = clock.interval(500);
        loop {
            let time = interval.tick().await;
            recorded.borrow_mut().push(time);
        }
    });
    handle.drain_ui();

    let mut time = 0;
    while time < 10_000_000_000 {
        time += FRAME;
        handle.drain_frame_callbacks(time);
        handle.drain_ui();
    }

    let ticks = ticks.borrow();
    assert_eq!(ticks.len(), 20);
    for (index, tick) in ticks.iter().enumerate() {
        let deadline = (index as u64 + 1) * 500_000_000;
        assert!(*tick >= deadline && *tick < deadline + FRAME, "tick {index} at {tick}");
    }
}

#[test]
fn cancelled_task_is_never_polled_again() {
    let (runtime, _) = runtime();
    let handle = runtime.handle();
    let ticks = Rc::new(Cell::new(0));

    let clock = runtime.frame_clock();
    let ticks_task = Rc::clone(&ticks);
    let task = handle
        .spawn_ui(async move {
            loop {
                clock.next_frame().await;
                ticks_task.set(ticks_task.get() + 1);
            }
        })
        .expect("runtime alive");
    handle.drain_ui();

    handle.drain_frame_callbacks(FRAME);
    handle.drain_ui();
    assert_eq!(ticks.get(), 1);

    let id = task.id();
    task.cancel();
    assert!(!handle.has_task(id));
    assert!(!handle.has_frame_callbacks());

    handle.drain_frame_callbacks(2 * FRAME);
    handle.drain_ui();
    assert_eq!(ticks.get(), 1);
}

#[test]
fn task_can_cancel_a_sibling_while_polling() {
    let (runtime, _) = runtime();
    let handle = runtime.handle();
    let sibling_ran = Rc::new(Cell::new(false));

    let sibling_slot = Rc::new(RefCell::new(None));
    let slot_for_first = Rc::clone(&sibling_slot);
    handle.spawn_ui(async move {
        if let Some(task) = slot_for_first.borrow_mut().take() {
            crate::TaskHandle::cancel(task);
        }
    });
    let ran = Rc::clone(&sibling_ran);
    let sibling = handle
        .spawn_ui(async move {
            ran.set(true);
        })
        .expect("runtime alive");
    *sibling_slot.borrow_mut() = Some(sibling);

    handle.drain_ui();
    assert!(!sibling_ran.get());
    assert!(!handle.has_pending_ui());
}

#[test]
fn state_writes_request_frames() {
    let (runtime, scheduler) = runtime();
    let state = MutableState::with_runtime(0u32, runtime.handle());
    let before = scheduler.requests.load(Ordering::SeqCst);

    state.set(3);
    state.update(|value| *value += 1);

    assert_eq!(state.value(), 4);
    assert_eq!(state.version(), 2);
    assert_eq!(state.as_state().get(), 4);
    assert_eq!(scheduler.requests.load(Ordering::SeqCst), before + 2);
    assert!(runtime.needs_frame());
}

#[test]
fn handles_become_inert_once_runtime_is_dropped() {
    let (runtime, _) = runtime();
    let handle = runtime.handle();
    drop(runtime);

    assert!(!handle.is_alive());
    assert!(handle.spawn_ui(async {}).is_none());
    assert!(handle.register_frame_callback(|_| {}).is_none());

    let ran = Rc::new(Cell::new(false));
    let ran_task = Rc::clone(&ran);
    handle.enqueue_ui_task(Box::new(move || ran_task.set(true)));
    assert!(ran.get());
}
