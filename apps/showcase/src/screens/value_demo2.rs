use motion_animation::{
    AnimationSpec, InfiniteAnimation, InfiniteRepeatableSpec, InfiniteTransition,
};
use motion_core::RuntimeHandle;
use motion_ui_graphics::{Brush, Color, Point, Rect, Size};

use crate::navigation::{Screen, ScreenId};
use crate::scene::{Action, Scene, SceneShape, SceneText};
use crate::screens::back_button;

/// Full-screen background looping between red and green.
pub struct ValueDemo2Screen {
    viewport: Size,
    _transition: InfiniteTransition,
    color: InfiniteAnimation<Color>,
}

impl ValueDemo2Screen {
    pub fn new(runtime: RuntimeHandle, viewport: Size) -> Self {
        let transition = InfiniteTransition::new(runtime, "background color");
        let color = transition.animate_color(
            Color::RED,
            Color::GREEN,
            InfiniteRepeatableSpec::reverse(AnimationSpec::linear(2000)),
        );
        Self {
            viewport,
            _transition: transition,
            color,
        }
    }

    pub fn color(&self) -> Color {
        self.color.value()
    }
}

impl Screen for ValueDemo2Screen {
    fn id(&self) -> ScreenId {
        ScreenId::ValueDemo2
    }

    fn render(&self, scene: &mut Scene) {
        scene.push_shape(SceneShape::rect(
            "value2.background",
            Rect::from_size(self.viewport),
            Brush::solid(self.color()),
        ));
        scene.push_text(
            SceneText::new(
                "value2.label",
                "Infinite Color Transition",
                Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0),
                Color::WHITE,
            )
            .sized(24.0),
        );
        back_button(scene);
    }

    fn on_action(&mut self, _action: Action, _point: Point) {}
}
