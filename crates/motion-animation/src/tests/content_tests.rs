use super::*;

use crate::animation::Easing;
use crate::visibility::AnimatedVisibility;
use motion_testing::assertions::assert_approx_eq;
use motion_testing::FrameDriver;

fn slide_up() -> ContentTransform {
    let spec = AnimationSpec::tween(300, Easing::FastOutSlowInEasing);
    (EnterTransition::slide_in_vertically(1.0) + EnterTransition::fade_in())
        .with_spec(spec)
        .together_with(
            (ExitTransition::slide_out_vertically(-1.0) + ExitTransition::fade_out())
                .with_spec(spec),
        )
        .with_clip(false)
}

#[test]
fn initial_state_is_fully_visible() {
    let driver = FrameDriver::new();
    let content = AnimatedContent::new(0u32, driver.runtime_handle(), |_, _| slide_up());
    let items = content.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].frame, ContentFrame::VISIBLE);
    assert!(items[0].is_target);
}

#[test]
fn swap_animates_both_entries_then_prunes() {
    let mut driver = FrameDriver::new();
    let mut content = AnimatedContent::new(0u32, driver.runtime_handle(), |_, _| slide_up());
    content.set_target(1);
    assert!(!content.clip());

    let items = content.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].state, 0, "outgoing drawn first");
    assert_eq!(items[1].state, 1);
    assert_approx_eq(items[1].frame.offset.y, 1.0, 1e-6, "starts one height below");
    assert_approx_eq(items[1].frame.alpha, 0.0, 1e-6, "starts transparent");

    for _ in 0..6 {
        driver.advance_frame();
    }
    let items = content.items();
    assert!(items[0].frame.offset.y < 0.0, "old value moves up");
    assert!(items[1].frame.offset.y > 0.0 && items[1].frame.offset.y < 1.0);
    assert!(content.prune().is_empty(), "exit still running");

    driver.pump_until_idle(60);
    assert_eq!(content.prune(), vec![0]);
    assert_eq!(content.items()[0].frame, ContentFrame::VISIBLE);
    assert_eq!(content.len(), 1);
}

#[test]
fn returning_to_exiting_state_reuses_it() {
    let mut driver = FrameDriver::new();
    let mut content = AnimatedContent::new("a", driver.runtime_handle(), |_, _| slide_up());
    content.set_target("b");
    driver.advance_frame();
    driver.advance_frame();
    content.set_target("a");
    assert_eq!(content.len(), 2);

    driver.pump_until_idle(60);
    assert_eq!(content.prune(), vec!["b"]);
    assert_eq!(content.target(), &"a");
}

#[test]
fn crossfade_only_changes_alpha() {
    let mut driver = FrameDriver::new();
    let mut content =
        AnimatedContent::crossfade(false, driver.runtime_handle(), AnimationSpec::linear(800));
    content.set_target(true);
    driver.advance_frame();
    driver.advance_by_millis(400);
    let items = content.items();
    assert_approx_eq(items[0].frame.alpha, 0.5, 0.03, "outgoing half faded");
    assert_approx_eq(items[1].frame.alpha, 0.5, 0.03, "incoming half shown");
    for item in &items {
        assert_eq!(item.frame.offset, Point::ZERO);
        assert_eq!(item.frame.scale, 1.0);
    }
}

#[test]
fn scale_transitions_interpolate_from_edges() {
    let enter = EnterTransition::scale_in(0.8) + EnterTransition::fade_in();
    let exit = ExitTransition::scale_out(1.2) + ExitTransition::fade_out();
    assert_approx_eq(enter.frame_at(0.0).scale, 0.8, 1e-6, "enter start");
    assert_approx_eq(enter.frame_at(1.0).scale, 1.0, 1e-6, "enter end");
    assert_approx_eq(exit.frame_at(1.0).scale, 1.0, 1e-6, "exit start");
    assert_approx_eq(exit.frame_at(0.0).scale, 1.2, 1e-6, "exit end");
    assert_approx_eq(exit.frame_at(0.25).alpha, 0.25, 1e-6, "fading");
}

#[test]
fn visibility_keeps_frames_until_exit_finishes() {
    let mut driver = FrameDriver::new();
    let mut visibility = AnimatedVisibility::new(
        false,
        driver.runtime_handle(),
        EnterTransition::expand_vertically() + EnterTransition::fade_in(),
        ExitTransition::shrink_vertically() + ExitTransition::fade_out(),
    );
    assert!(visibility.frame().is_none());

    visibility.set_visible(true);
    driver.pump_until_idle(60);
    assert_eq!(visibility.frame(), Some(ContentFrame::VISIBLE));

    visibility.set_visible(false);
    driver.advance_frame();
    driver.advance_frame();
    let frame = visibility.frame();
    assert!(frame.is_some_and(|f| f.size_fraction < 1.0 && f.alpha < 1.0));

    driver.pump_until_idle(60);
    assert!(visibility.frame().is_none());
}

#[test]
fn interrupted_entry_exits_from_where_it_is() {
    let mut driver = FrameDriver::new();
    let mut content = AnimatedContent::new(0u32, driver.runtime_handle(), |_, _| slide_up());
    content.set_target(1);
    driver.advance_by_millis(100);
    let frame_of = |content: &AnimatedContent<u32>, state: u32| {
        content
            .items()
            .into_iter()
            .find(|item| item.state == state)
            .map(|item| item.frame)
            .expect("state on screen")
    };
    let before = frame_of(&content, 1);
    assert!(before.offset.y > 0.1, "still sliding in: {before:?}");

    content.set_target(2);
    assert_eq!(frame_of(&content, 1), before, "no jump when the role flips");

    driver.advance_frame();
    let next = frame_of(&content, 1);
    assert!((next.offset.y - before.offset.y).abs() < 0.2, "{before:?} -> {next:?}");

    driver.pump_until_idle(60);
    let mut pruned = content.prune();
    pruned.sort();
    assert_eq!(pruned, vec![0, 1]);
}

#[test]
fn reentering_an_exiting_state_continues_from_its_frame() {
    let mut driver = FrameDriver::new();
    let mut content = AnimatedContent::new("a", driver.runtime_handle(), |_, _| slide_up());
    content.set_target("b");
    driver.advance_by_millis(100);
    let before = content.items()[0].frame;
    assert_eq!(content.items()[0].state, "a");
    assert!(before.alpha < 1.0 && before.offset.y < 0.0);

    content.set_target("a");
    let resumed = content
        .items()
        .into_iter()
        .find(|item| item.state == "a")
        .expect("a on screen");
    assert!(resumed.is_target);
    assert_eq!(resumed.frame, before);

    driver.pump_until_idle(60);
    assert_eq!(content.prune(), vec!["b"]);
    assert_eq!(content.items()[0].frame, ContentFrame::VISIBLE);
}

#[test]
fn visibility_toggled_mid_exit_continues() {
    let mut driver = FrameDriver::new();
    let mut visibility = AnimatedVisibility::new(
        true,
        driver.runtime_handle(),
        EnterTransition::expand_vertically() + EnterTransition::fade_in(),
        ExitTransition::shrink_vertically() + ExitTransition::fade_out(),
    );
    visibility.set_visible(false);
    for _ in 0..6 {
        driver.advance_frame();
    }
    let leaving = visibility.frame().expect("still drawn while leaving");
    assert!(leaving.alpha < 1.0);

    visibility.set_visible(true);
    assert_eq!(visibility.frame(), Some(leaving), "turning back does not jump");

    driver.pump_until_idle(60);
    assert_eq!(visibility.frame(), Some(ContentFrame::VISIBLE));
}
