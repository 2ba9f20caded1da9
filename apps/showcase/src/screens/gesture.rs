use log::debug;
use motion_animation::{Animatable, AnimationSpec, Easing};
use motion_core::{EffectScope, RuntimeHandle};
use motion_ui_graphics::{Brush, Color, Point, Rect, Size};

use crate::navigation::{Screen, ScreenId};
use crate::scene::{Action, Scene, SceneShape, SceneText};
use crate::screens::back_button;

const BACKGROUND: Color = Color::from_argb(0xFFE0_E0E0);
const MARKER_COLOR: Color = Color::from_argb(0xFF29_79FF);
pub const MARKER_SIZE: f32 = 60.0;

/// Marker that eases toward the latest touch-down.
pub struct GestureScreen {
    viewport: Size,
    position: Animatable<Point>,
    scope: EffectScope,
}

impl GestureScreen {
    pub fn new(runtime: RuntimeHandle, viewport: Size) -> Self {
        Self {
            viewport,
            position: Animatable::with_label(Point::ZERO, runtime.clone(), "marker"),
            scope: EffectScope::new(runtime),
        }
    }

    /// Interpolated marker offset, unrounded.
    pub fn position(&self) -> Point {
        self.position.value()
    }

    /// Top-left corner of the marker as drawn, snapped to whole pixels.
    pub fn marker_position(&self) -> Point {
        self.position.value().round()
    }

    pub fn target(&self) -> Point {
        self.position.target()
    }

    pub fn is_running(&self) -> bool {
        self.position.is_running()
    }

    /// Starts easing toward `point`; non-finite points are ignored.
    pub fn touch(&mut self, point: Point) {
        if !point.is_finite() {
            return;
        }
        let position = self.position.clone();
        self.scope.launch(async move {
            let spec = AnimationSpec::tween(600, Easing::FastOutSlowInEasing);
            let reason = position.animate_to_async(point, spec).await;
            debug!("marker move to ({}, {}) ended: {reason:?}", point.x, point.y);
        });
    }
}

impl Screen for GestureScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Gesture
    }

    fn render(&self, scene: &mut Scene) {
        let bounds = Rect::from_size(self.viewport);
        scene.push_shape(SceneShape::rect(
            "gesture.background",
            bounds,
            Brush::solid(BACKGROUND),
        ));
        scene.push_text(SceneText::new(
            "gesture.instructions",
            "Tap anywhere to move the circle",
            Point::new(self.viewport.width / 2.0, 60.0),
            Color::DARK_GRAY,
        ));
        scene.push_shape(SceneShape::circle(
            "gesture.marker",
            Rect::from_origin_size(
                self.marker_position(),
                Size::new(MARKER_SIZE, MARKER_SIZE),
            ),
            Brush::solid(MARKER_COLOR),
        ));
        scene.push_hit("Touch area", bounds, Action::Touch);
        back_button(scene);
    }

    fn on_action(&mut self, action: Action, point: Point) {
        if action == Action::Touch {
            self.touch(point);
        }
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
