//! Assertion helpers for animated values and rendered scenes.

use motion_ui_graphics::{Color, Point, Rect};

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Compares all four channels of two colors.
pub fn assert_color_approx_eq(actual: Color, expected: Color, tolerance: f32, msg: &str) {
    let channels = [
        ("red", actual.r(), expected.r()),
        ("green", actual.g(), expected.g()),
        ("blue", actual.b(), expected.b()),
        ("alpha", actual.a(), expected.a()),
    ];
    for (name, got, want) in channels {
        assert!(
            (got - want).abs() <= tolerance,
            "{}: {} channel expected {} got {} ({} vs {})",
            msg,
            name,
            want,
            got,
            expected,
            actual
        );
    }
}

pub fn assert_rect_contains_point(rect: Rect, point: Point, msg: &str) {
    assert!(
        rect.contains(point.x, point.y),
        "{}: point ({}, {}) not in rect {:?}",
        msg,
        point.x,
        point.y,
        rect
    );
}

/// Assert that a list contains a specific text fragment.
pub fn assert_contains_text(texts: &[String], fragment: &str, msg: &str) {
    assert!(
        texts.iter().any(|t| t.contains(fragment)),
        "{}: text '{}' not found in {:?}",
        msg,
        fragment,
        texts
    );
}

pub fn assert_not_contains_text(texts: &[String], fragment: &str, msg: &str) {
    assert!(
        !texts.iter().any(|t| t.contains(fragment)),
        "{}: text '{}' unexpectedly found in {:?}",
        msg,
        fragment,
        texts
    );
}
