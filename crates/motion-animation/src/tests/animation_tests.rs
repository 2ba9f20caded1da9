use super::*;

use motion_testing::assertions::{assert_approx_eq, assert_color_approx_eq};
use motion_testing::FrameDriver;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn animatable_tween_interpolates_over_time() {
    let mut driver = FrameDriver::new();
    let anim = Animatable::new(0.0f32, driver.runtime_handle());
    assert_eq!(anim.value(), 0.0);

    anim.animate_to(1.0, AnimationSpec::linear(300));
    assert_eq!(anim.value(), 0.0, "value changes only on frames");
    assert!(anim.is_running());

    let mut samples = Vec::new();
    for _ in 0..40 {
        driver.advance_frame();
        samples.push(anim.value());
        if !anim.is_running() {
            break;
        }
    }

    assert!(samples.iter().any(|v| *v > 0.0 && *v < 1.0));
    assert!(samples.windows(2).all(|w| w[1] >= w[0]));
    assert_eq!(*samples.last().unwrap_or(&0.0), 1.0);
    assert!(!anim.is_running());
    assert!(driver.is_idle());
}

#[test]
fn tween_respects_start_delay() {
    let mut driver = FrameDriver::with_frame_interval(10_000_000);
    let anim = Animatable::new(0.0f32, driver.runtime_handle());
    anim.animate_to(10.0, AnimationSpec::linear(100).with_delay(50));

    // First frame records the start time.
    driver.advance_frame();
    driver.advance_by_millis(40);
    assert_eq!(anim.value(), 0.0);

    driver.advance_by_millis(60);
    assert_approx_eq(anim.value(), 5.0, 0.01, "halfway after delay");
}

#[test]
fn retarget_starts_from_current_value() {
    let mut driver = FrameDriver::with_frame_interval(10_000_000);
    let anim = Animatable::new(0.0f32, driver.runtime_handle());
    anim.animate_to(100.0, AnimationSpec::linear(100));
    driver.advance_frame();
    driver.advance_by_millis(50);
    let midpoint = anim.value();
    assert_approx_eq(midpoint, 50.0, 0.01, "midpoint");

    anim.animate_to(0.0, AnimationSpec::linear(100));
    driver.advance_frame();
    assert_approx_eq(anim.value(), midpoint, 0.01, "no jump on retarget");
    driver.advance_by_millis(50);
    assert_approx_eq(anim.value(), 25.0, 0.01, "halfway back");
}

#[test]
fn spring_settles_exactly_on_target() {
    let mut driver = FrameDriver::new();
    let anim = Animatable::new(100.0f32, driver.runtime_handle());
    anim.animate_to(
        200.0,
        SpringSpec::new(Spring::DAMPING_RATIO_MEDIUM_BOUNCY, Spring::STIFFNESS_MEDIUM),
    );

    let mut overshoot = false;
    for _ in 0..600 {
        driver.advance_frame();
        if anim.value() > 200.0 {
            overshoot = true;
        }
        if !anim.is_running() {
            break;
        }
    }

    assert!(overshoot, "medium bouncy spring overshoots");
    assert!(!anim.is_running());
    assert_eq!(anim.value(), 200.0);
}

#[test]
fn spring_retarget_keeps_velocity() {
    let mut driver = FrameDriver::new();
    let anim = Animatable::new(0.0f32, driver.runtime_handle());
    anim.animate_to(100.0, SpringSpec::default_spring());
    for _ in 0..5 {
        driver.advance_frame();
    }
    let velocity = anim.velocity()[0];
    assert!(velocity > 0.0);

    let before = anim.value();
    anim.animate_to(0.0, SpringSpec::default_spring());
    driver.advance_frame();
    assert_approx_eq(anim.value(), before, 1e-3, "retarget starts in place");
    assert_approx_eq(
        anim.velocity()[0],
        velocity,
        velocity.abs() * 1e-3,
        "retarget keeps momentum",
    );
}

#[test]
fn color_animation_reaches_target() {
    let mut driver = FrameDriver::new();
    let anim = Animatable::new(Color::RED, driver.runtime_handle());
    anim.animate_to(Color::GREEN, AnimationSpec::linear(100));
    driver.pump_until_idle(20);
    assert_color_approx_eq(anim.value(), Color::GREEN, 1e-6, "final color");
}

#[test]
fn snap_to_interrupts_pending_completion() {
    let mut driver = FrameDriver::new();
    let anim = Animatable::new(0.0f32, driver.runtime_handle());
    let reason = Rc::new(Cell::new(None));

    let completion = anim.animate_to_async(1.0, AnimationSpec::linear(500));
    let slot = Rc::clone(&reason);
    let _task = driver.runtime_handle().spawn_ui(async move {
        slot.set(Some(completion.await));
    });
    driver.advance_frame();
    assert_eq!(reason.get(), None);

    anim.snap_to(0.25);
    driver.pump_ui();
    assert_eq!(reason.get(), Some(AnimationEndReason::Interrupted));
    assert_eq!(anim.value(), 0.25);
    assert!(!anim.is_running());
    assert!(driver.is_idle());
}

#[test]
fn completion_reports_finished() {
    let mut driver = FrameDriver::new();
    let anim = Animatable::new(0.0f32, driver.runtime_handle());
    let reason = Rc::new(Cell::new(None));

    let first = anim.animate_to_async(1.0, AnimationSpec::linear(100));
    let slot = Rc::clone(&reason);
    let _task = driver.runtime_handle().spawn_ui(async move {
        slot.set(Some(first.await));
    });
    driver.pump_until_idle(30);
    assert_eq!(reason.get(), Some(AnimationEndReason::Finished));
}

#[test]
fn superseded_run_resolves_interrupted() {
    let mut driver = FrameDriver::new();
    let anim = Animatable::new(0.0f32, driver.runtime_handle());
    let first = anim.animate_to_async(1.0, AnimationSpec::linear(100));
    driver.advance_frame();
    let second = anim.animate_to_async(2.0, AnimationSpec::linear(100));

    let results = Rc::new(RefCell::new(Vec::new()));
    for completion in [first, second] {
        let results = Rc::clone(&results);
        let _ = driver.runtime_handle().spawn_ui(async move {
            let reason = completion.await;
            results.borrow_mut().push(reason);
        });
    }
    driver.pump_until_idle(30);
    assert_eq!(
        *results.borrow(),
        vec![
            AnimationEndReason::Interrupted,
            AnimationEndReason::Finished
        ]
    );
}

#[test]
fn dropping_animatable_cancels_frame_callback() {
    let driver = FrameDriver::new();
    let anim = Animatable::new(0.0f32, driver.runtime_handle());
    anim.animate_to(1.0, AnimationSpec::linear(300));
    assert!(driver.runtime_handle().has_frame_callbacks());
    drop(anim);
    assert!(!driver.runtime_handle().has_frame_callbacks());
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::LinearEasing,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
        Easing::LinearOutSlowInEasing,
        Easing::EaseInOutQuart,
        Easing::EaseOutBack,
        Easing::CubicBezier {
            x1: 0.4,
            y1: 0.0,
            x2: 0.2,
            y2: 1.0,
        },
    ];

    for easing in easings {
        let start = easing.transform(0.0);
        let end = easing.transform(1.0);
        assert!(
            (start - 0.0).abs() < 0.01,
            "Start should be ~0 for {:?}",
            easing
        );
        assert!(
            (end - 1.0).abs() < 0.01,
            "End should be ~1 for {:?}",
            easing
        );
    }
}

#[test]
fn ease_out_back_overshoots() {
    let peak = (1..100)
        .map(|i| Easing::EaseOutBack.transform(i as f32 / 100.0))
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.05, "peak {peak}");
}

#[test]
fn custom_bezier_matches_named_curve() {
    let custom = Easing::CubicBezier {
        x1: 0.4,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert_approx_eq(
            custom.transform(t),
            Easing::FastOutSlowInEasing.transform(t),
            1e-6,
            "same control points",
        );
    }
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowInEasing);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn spring_spec_default_is_critically_damped() {
    let spec = SpringSpec::default();
    assert_eq!(spec.damping_ratio, 1.0);
    assert_eq!(spec.stiffness, Spring::STIFFNESS_MEDIUM);
}

#[test]
fn lerp_blends_components() {
    let mid = Point::new(0.0, 10.0).lerp(&Point::new(10.0, 30.0), 0.5);
    assert_eq!(mid, Point::new(5.0, 20.0));
}
