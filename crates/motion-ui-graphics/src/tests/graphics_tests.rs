use super::*;

#[test]
fn from_argb_unpacks_channels() {
    let color = Color::from_argb(0xFF5D5FEF);
    assert_eq!(color, Color::from_rgb_u8(0x5D, 0x5F, 0xEF));
    assert_eq!(color.to_argb(), 0xFF5D5FEF);
}

#[test]
fn with_alpha_keeps_rgb() {
    let faded = Color::WHITE.with_alpha(0.6);
    assert_eq!(faded.r(), 1.0);
    assert_eq!(faded.a(), 0.6);
    assert_eq!(faded.to_argb() >> 24, 153);
}

#[test]
fn color_display_is_hex() {
    assert_eq!(Color::RED.to_string(), "#FFFF0000");
}

#[test]
fn centered_rect_contains_its_center() {
    let rect = Rect::centered(Point::new(100.0, 50.0), 40.0, 20.0);
    assert_eq!(rect.x, 80.0);
    assert_eq!(rect.y, 40.0);
    assert!(rect.contains(100.0, 50.0));
    assert!(!rect.contains(79.0, 50.0));
    assert_eq!(rect.center(), Point::new(100.0, 50.0));
}

#[test]
fn layers_compose_multiplicatively() {
    let outer = GraphicsLayer::default().with_alpha(0.5).with_scale(2.0);
    let inner = GraphicsLayer::default()
        .with_alpha(0.5)
        .with_rotation_z(90.0)
        .with_translation(3.0, 4.0);
    let combined = outer.then(inner);
    assert_eq!(combined.alpha, 0.25);
    assert_eq!(combined.scale, 2.0);
    assert_eq!(combined.rotation_z, 90.0);
    assert_eq!(combined.translation_y, 4.0);
}

#[test]
fn point_round_snaps_to_pixels() {
    assert_eq!(Point::new(10.4, -3.6).round(), Point::new(10.0, -4.0));
    assert!(!Point::new(f32::NAN, 0.0).is_finite());
}
