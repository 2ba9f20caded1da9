use super::*;

use motion_testing::FrameDriver;

fn app(driver: &FrameDriver) -> ShowcaseApp {
    ShowcaseApp::new(driver.runtime_handle(), Size::new(400.0, 800.0))
}

#[test]
fn main_menu_lists_every_demo() {
    let driver = FrameDriver::new();
    let app = app(&driver);
    let scene = app.render();
    for id in crate::screens::main_menu::DESTINATIONS {
        let hit = scene.hit_by_label(id.label()).expect("menu button");
        assert_eq!(hit.action, Action::Navigate(id));
    }
    assert!(scene.hit_by_label("Back").is_none(), "main has no back button");
}

#[test]
fn pressing_a_menu_button_navigates() {
    let driver = FrameDriver::new();
    let mut app = app(&driver);
    let center = app
        .render()
        .hit_by_label("Gesture Based Animation")
        .map(|hit| hit.bounds.center())
        .expect("gesture button");

    assert!(app.press(center));
    assert_eq!(app.current_screen(), ScreenId::Gesture);
}

#[test]
fn presses_outside_hits_and_non_finite_points_are_ignored() {
    let driver = FrameDriver::new();
    let mut app = app(&driver);
    assert!(!app.press(Point::new(2.0, 790.0)));
    assert!(!app.press(Point::new(f32::NAN, 10.0)));
    assert!(!app.press(Point::new(f32::INFINITY, f32::INFINITY)));
    assert_eq!(app.current_screen(), ScreenId::Main);
}

#[test]
fn back_button_returns_to_main() {
    let driver = FrameDriver::new();
    let mut app = app(&driver);
    app.navigate_to(ScreenId::ValueDemo2);

    assert!(app.click("Back"));
    assert_eq!(app.current_screen(), ScreenId::Main);
    assert!(!app.click("Back"));
}

#[test]
fn frame_runs_animations_and_housekeeping() {
    let mut driver = FrameDriver::new();
    let mut app = app(&driver);
    app.navigate_to(ScreenId::ValueDemo2);
    let before = app.render().shape("value2.background").map(|s| s.brush.clone());

    for _ in 0..30 {
        driver.advance_frame();
        app.after_frame();
    }
    let after = app.render().shape("value2.background").map(|s| s.brush.clone());
    assert_ne!(before, after, "background color moves over time");
    assert!(!driver.is_idle(), "infinite loop keeps requesting frames");
}
