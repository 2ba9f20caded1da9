use super::*;

use motion_testing::assertions::{assert_approx_eq, assert_color_approx_eq};
use motion_testing::{FrameDriver, FRAME_NANOS_60FPS};

fn mount() -> (FrameDriver, ValueDemo1Screen) {
    let driver = FrameDriver::new();
    let screen = ValueDemo1Screen::new(driver.runtime_handle(), Size::new(400.0, 800.0));
    (driver, screen)
}

fn run_for(driver: &mut FrameDriver, screen: &mut ValueDemo1Screen, millis: u64) {
    let frames = (millis * 1_000_000).div_ceil(FRAME_NANOS_60FPS);
    for _ in 0..frames {
        driver.advance_frame();
        screen.after_frame();
    }
}

fn render(screen: &ValueDemo1Screen) -> Scene {
    let mut scene = Scene::new(Size::new(400.0, 800.0));
    screen.render(&mut scene);
    scene
}

#[test]
fn starts_collapsed() {
    let (_driver, screen) = mount();
    assert!(!screen.is_selected());
    assert_approx_eq(screen.width(), 280.0, 1e-6, "width");
    assert_approx_eq(screen.corner_radius(), 8.0, 1e-6, "corner");
    assert!(!screen.details().is_present());
    assert!(!screen.has_pulsing_dots());

    let scene = render(&screen);
    assert!(scene.hit_by_label("Click to Expand").is_some());
    assert!(scene.text("value1.instructions").is_some());
    assert!(scene.shape("value1.progress").is_none());
}

#[test]
fn selection_drives_every_parameter() {
    let (mut driver, mut screen) = mount();
    screen.toggle();
    assert_eq!(screen.header_text(), "Expanded View");
    run_for(&mut driver, &mut screen, 2000);

    assert!(!screen.is_running());
    assert_approx_eq(screen.width(), 320.0, 1e-3, "width");
    assert_approx_eq(screen.corner_radius(), 24.0, 1e-3, "corner");
    assert_approx_eq(screen.elevation(), 16.0, 1e-3, "elevation");
    assert_approx_eq(screen.padding(), 24.0, 1e-3, "padding");
    assert_approx_eq(screen.icon_rotation(), 180.0, 1e-3, "icon");
    assert_approx_eq(screen.scale(), 1.05, 1e-3, "scale");
    assert_color_approx_eq(
        screen.background(),
        Color::from_argb(0xFFF3_E5F5),
        1e-3,
        "background",
    );
    let (start, end) = screen.border_colors();
    assert_color_approx_eq(start, Color::from_argb(0xFF62_00EE), 1e-3, "start border");
    assert_color_approx_eq(end, Color::from_argb(0xFF03_DAC5), 1e-3, "end border");

    let scene = render(&screen);
    let track = scene.shape("value1.progress_track").expect("track");
    let bar = scene.shape("value1.progress").expect("bar");
    assert_approx_eq(bar.bounds.width, track.bounds.width * 0.8, 1e-3, "progress");
    assert_eq!(scene.shapes_tagged("value1.dot").len(), 3);
    assert!(scene.text("value1.details").is_some());
}

#[test]
fn padding_waits_for_its_delay() {
    let (mut driver, mut screen) = mount();
    screen.toggle();
    run_for(&mut driver, &mut screen, 40);
    assert_approx_eq(screen.padding(), 16.0, 1e-6, "still in delay");
    run_for(&mut driver, &mut screen, 400);
    assert_approx_eq(screen.padding(), 24.0, 1e-3, "finished");
}

#[test]
fn dots_exist_only_while_details_show() {
    let (mut driver, mut screen) = mount();
    screen.toggle();
    run_for(&mut driver, &mut screen, 17);
    assert!(screen.has_pulsing_dots());

    let mut scales = Vec::new();
    for _ in 0..60 {
        run_for(&mut driver, &mut screen, 17);
        let scene = render(&screen);
        scales.extend(scene.shapes_tagged("value1.dot").iter().map(|dot| dot.layer.scale));
    }
    assert!(scales
        .iter()
        .all(|scale| (0.8 - 1e-4..=1.2 + 1e-4).contains(scale)));

    screen.toggle();
    run_for(&mut driver, &mut screen, 17);
    assert!(screen.details().is_present(), "exit still animating");
    assert!(screen.has_pulsing_dots());
    run_for(&mut driver, &mut screen, 400);
    assert!(!screen.details().is_present());
    assert!(!screen.has_pulsing_dots());
}

#[test]
fn card_press_toggles_selection() {
    let (_driver, mut screen) = mount();
    screen.on_action(Action::ToggleSelected, Point::ZERO);
    assert!(screen.is_selected());
    screen.on_action(Action::Touch, Point::ZERO);
    assert!(screen.is_selected());
}
