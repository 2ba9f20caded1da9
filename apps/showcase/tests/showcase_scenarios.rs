use motion_showcase::{Command, Scene, Script, ScriptErrorKind, ScreenId, Session, ShowcaseSettings};
use motion_ui_graphics::Point;

fn session() -> Session {
    Session::new(
        ShowcaseSettings::builder()
            .with_viewport(400.0, 800.0)
            .with_scene_logging(false)
            .build(),
    )
}

fn click(session: &mut Session, label: &str) {
    session.click(label).unwrap_or_else(|err| panic!("{err}"));
    session.step_frame();
}

fn texts(scene: &Scene, tag: &str) -> Vec<String> {
    scene
        .texts_tagged(tag)
        .into_iter()
        .map(|text| text.text.clone())
        .collect()
}

#[test]
fn counter_never_goes_below_zero() {
    let mut session = session();
    session.goto(ScreenId::AnimatedContent);
    click(&mut session, "Decrement");
    for _ in 0..3 {
        click(&mut session, "Increment");
    }
    click(&mut session, "Decrement");
    session.wait(600);

    assert_eq!(texts(&session.snapshot(), "counter.digit"), vec!["2"]);
}

#[test]
fn count_survives_a_round_trip_through_other_tabs() {
    let mut session = session();
    session.goto(ScreenId::AnimatedContent);
    click(&mut session, "Increment");
    click(&mut session, "Increment");
    click(&mut session, "Expand");
    session.wait(1500);
    assert!(texts(&session.snapshot(), "counter.digit").is_empty());

    click(&mut session, "Count");
    session.wait(1500);
    assert_eq!(texts(&session.snapshot(), "counter.digit"), vec!["2"]);
}

#[test]
fn expanding_twice_returns_to_the_collapsed_layout() {
    let mut session = session();
    session.goto(ScreenId::AnimatedContent);
    click(&mut session, "Expand");
    session.wait(1500);
    let collapsed = session.snapshot().shape("expand.glow").map(|glow| glow.bounds);

    click(&mut session, "Tap Me");
    session.wait(1500);
    let scene = session.snapshot();
    assert_eq!(texts(&scene, "expand.label"), vec!["Expanded"]);
    let glow = scene.shape("expand.glow").expect("glow").bounds;
    assert!((glow.width - 220.0).abs() < 1e-3, "{glow:?}");

    click(&mut session, "Expanded");
    session.wait(1500);
    let scene = session.snapshot();
    assert_eq!(texts(&scene, "expand.label"), vec!["Tap Me"]);
    assert_eq!(scene.shape("expand.glow").map(|glow| glow.bounds), collapsed);
}

#[test]
fn crossfade_swaps_pages_and_restarts_the_ticker() {
    let mut session = session();
    session.goto(ScreenId::AnimatedContent);
    click(&mut session, "Crossfade");
    session.wait(1500);
    click(&mut session, "Switch to Page B");

    let scene = session.snapshot();
    let mut pages = texts(&scene, "crossfade.page");
    pages.sort();
    assert_eq!(pages, vec!["Page A", "Page B"], "both pages during the fade");

    session.wait(1000);
    let scene = session.snapshot();
    assert_eq!(texts(&scene, "crossfade.page"), vec!["Page B"]);
    assert!(scene.hit_by_label("Switch to Page A").is_some());
    let status = texts(&scene, "crossfade.dots");
    assert_eq!(status.len(), 1);
    assert!(status[0].starts_with("Animating"));
}

#[test]
fn gesture_marker_follows_taps() {
    let mut session = session();
    session.goto(ScreenId::Gesture);
    assert!(session.tap(Point::new(200.0, 300.0)));
    session.wait(300);
    let midway = session.snapshot().shape("gesture.marker").expect("marker").bounds;
    assert!(midway.x > 0.0 && midway.x < 200.0, "{midway:?}");

    session.wait(500);
    let settled = session.snapshot().shape("gesture.marker").expect("marker").bounds;
    assert_eq!((settled.x, settled.y), (200.0, 300.0));
}

#[test]
fn value_card_expands_and_collapses() {
    let mut session = session();
    session.goto(ScreenId::ValueDemo1);
    let collapsed = session.snapshot().shape("value1.card").expect("card").bounds;

    click(&mut session, "Click to Expand");
    session.wait(1500);
    let scene = session.snapshot();
    let expanded = scene.shape("value1.card").expect("card").bounds;
    assert!(expanded.width > collapsed.width);
    assert!(expanded.height > collapsed.height);
    assert!(scene.text("value1.details").is_some());

    click(&mut session, "Expanded View");
    session.wait(1500);
    let scene = session.snapshot();
    assert_eq!(scene.shape("value1.card").map(|card| card.bounds), Some(collapsed));
    assert!(scene.text("value1.details").is_none());
    assert!(scene.text("value1.instructions").is_some());
}

#[test]
fn back_button_returns_to_the_menu_from_every_demo() {
    for id in [
        ScreenId::AnimatedContent,
        ScreenId::ValueDemo1,
        ScreenId::ValueDemo2,
        ScreenId::Gesture,
    ] {
        let mut session = session();
        session.goto(id);
        session.wait(50);
        click(&mut session, "Back");
        assert_eq!(session.app().current_screen(), ScreenId::Main, "from {id}");
    }
}

#[test]
fn rapid_tab_switching_settles_on_the_last_tab() {
    let mut session = session();
    session.goto(ScreenId::AnimatedContent);
    for label in ["Expand", "Crossfade", "Count", "Expand", "Crossfade"] {
        click(&mut session, label);
    }
    session.wait(2000);
    let scene = session.snapshot();
    assert!(texts(&scene, "counter.title").is_empty());
    assert!(texts(&scene, "expand.title").is_empty());
    assert_eq!(texts(&scene, "crossfade.title"), vec!["Crossfade Animation"]);
}

#[test]
fn scripts_report_the_offending_line() {
    let err = Script::parse("goto content\n\nwait soon").expect_err("bad wait");
    assert_eq!(err.line, 3);
    assert!(matches!(err.kind, ScriptErrorKind::InvalidArgument { .. }));

    let script = Script::parse("# tour\ngoto gesture\ntap 10 20\nback").expect("valid");
    let commands: Vec<&Command> = script.lines().iter().map(|line| &line.command).collect();
    assert_eq!(
        commands,
        vec![
            &Command::Goto(ScreenId::Gesture),
            &Command::Tap(Point::new(10.0, 20.0)),
            &Command::Back,
        ]
    );
}
