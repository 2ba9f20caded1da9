use super::*;

fn session() -> Session {
    let settings = ShowcaseSettings::builder()
        .with_scene_logging(false)
        .build();
    Session::new(settings)
}

#[test]
fn wait_rounds_up_to_whole_frames() {
    let mut session = session();
    session.wait(100);
    assert_eq!(session.frames(), 7);
    assert_eq!(session.frame_time_nanos(), 7 * 16_666_666);
    session.wait(0);
    assert_eq!(session.frames(), 7);
}

#[test]
fn frame_counts_saturate_for_huge_waits() {
    assert_eq!(frames_for(100, 16_666_666), 7);
    assert_eq!(frames_for(u64::MAX, 16_666_666), u64::MAX.div_ceil(16_666_666));
    assert_eq!(frames_for(5, 0), 5_000_000);
}

#[test]
fn frames_nobody_asked_for_are_skipped() {
    let mut session = session();
    session.wait(500);
    let (frames, idle) = (session.frames(), session.idle_frames());
    session.wait(1000);
    assert_eq!(
        session.idle_frames() - idle,
        session.frames() - frames,
        "a static menu runs no frame work"
    );

    session.goto(ScreenId::ValueDemo2);
    let idle = session.idle_frames();
    session.wait(1000);
    assert_eq!(session.idle_frames(), idle, "infinite loops request every frame");
}

#[test]
fn ticker_started_after_idle_frames_keeps_its_period() {
    let mut session = session();
    session.wait(2000);
    assert!(session.idle_frames() > 0);
    session.goto(ScreenId::AnimatedContent);
    session.click("Crossfade").expect("crossfade tab");

    let dots = |session: &Session| {
        session
            .snapshot()
            .texts_tagged("crossfade.dots")
            .iter()
            .map(|text| text.text.clone())
            .collect::<Vec<_>>()
    };
    for _ in 0..25 {
        session.step_frame();
    }
    assert_eq!(dots(&session), vec!["Animating"]);
    for _ in 0..10 {
        session.step_frame();
    }
    assert_eq!(dots(&session), vec!["Animating."]);
}

#[test]
fn click_on_missing_label_is_an_error() {
    let mut session = session();
    let err = session.click("Increment").expect_err("not on main");
    assert_eq!(
        err,
        SessionError::LabelNotFound {
            label: "Increment".to_string(),
            screen: ScreenId::Main,
        }
    );
    assert_eq!(err.to_string(), "no clickable 'Increment' on screen Main");
}

#[test]
fn script_drives_navigation() {
    let mut session = session();
    let script = Script::parse("goto content\nclick Increment\nwait 400\nsnapshot")
        .expect("valid script");
    session.run_script(&script).expect("script runs");

    assert_eq!(session.app().current_screen(), ScreenId::AnimatedContent);
    let scene = session.snapshot();
    let digits: Vec<String> = scene
        .texts_tagged("counter.digit")
        .into_iter()
        .map(|text| text.text.clone())
        .collect();
    assert_eq!(digits, vec!["1".to_string()]);
}

#[test]
fn script_stops_at_first_failure() {
    let mut session = session();
    let script = Script::parse("goto gesture\nclick Increment\ngoto value2").expect("valid");
    let err = session.run_script(&script).expect_err("no Increment on gesture");
    assert!(matches!(err, SessionError::LabelNotFound { .. }));
    assert_eq!(session.app().current_screen(), ScreenId::Gesture);
}

#[test]
fn builtin_walkthrough_runs_to_completion() {
    let mut session = session();
    let script = Script::walkthrough().expect("walkthrough parses");
    session.run_script(&script).expect("walkthrough runs");
    assert_eq!(session.app().current_screen(), ScreenId::Main);
}
