use motion_animation::{
    AnimatedContent, AnimationSpec, ContentTransform, Easing, EnterTransition, ExitTransition,
    InfiniteAnimation, InfiniteRepeatableSpec, InfiniteTransition,
};
use motion_core::RuntimeHandle;
use motion_ui_graphics::{Brush, Color, GraphicsLayer, Point, Rect};

use crate::scene::{Action, Scene, SceneShape, SceneText};
use crate::screens::{offset, ACCENT};

const BADGE_START: Color = Color::from_argb(0xFF6F_3CE9);
const BADGE_END: Color = Color::from_argb(0xFF33_C9FF);
const BADGE_SIZE: f32 = 140.0;
/// Height of one digit run at font size 48; slides travel this far.
const DIGIT_HEIGHT: f32 = 58.0;

/// Non-negative counter shared by every mount of the counter tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterValue(u32);

impl CounterValue {
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Floors at zero; returns whether the value changed.
    pub fn decrement(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        true
    }
}

/// Digits slide in from below when counting up and from above when counting down.
pub fn digit_transform(from: &u32, to: &u32) -> ContentTransform {
    let spec = AnimationSpec::tween(300, Easing::FastOutSlowInEasing);
    let direction = if to > from { 1.0 } else { -1.0 };
    (EnterTransition::slide_in_vertically(direction) + EnterTransition::fade_in())
        .with_spec(spec)
        .together_with(
            (ExitTransition::slide_out_vertically(-direction) + ExitTransition::fade_out())
                .with_spec(spec),
        )
        .with_clip(false)
}

pub struct CounterTab {
    digits: AnimatedContent<u32>,
    _pulse_loop: InfiniteTransition,
    pulse: InfiniteAnimation<f32>,
}

impl CounterTab {
    pub fn new(runtime: RuntimeHandle, count: u32) -> Self {
        let pulse_loop = InfiniteTransition::new(runtime.clone(), "increment pulse");
        let pulse = pulse_loop.animate_float(
            1.0,
            1.1,
            InfiniteRepeatableSpec::reverse(AnimationSpec::tween(
                1000,
                Easing::FastOutSlowInEasing,
            )),
        );
        Self {
            digits: AnimatedContent::new(count, runtime, digit_transform),
            _pulse_loop: pulse_loop,
            pulse,
        }
    }

    pub fn set_count(&mut self, count: u32) {
        self.digits.set_target(count);
    }

    pub fn digits(&self) -> &AnimatedContent<u32> {
        &self.digits
    }

    pub fn pulse_scale(&self) -> f32 {
        self.pulse.value()
    }

    pub fn after_frame(&mut self) {
        self.digits.prune();
    }

    pub fn render(&self, scene: &mut Scene, bounds: Rect) {
        let center_x = bounds.center().x;
        scene.push_text(
            SceneText::new(
                "counter.title",
                "Counter Animation",
                Point::new(center_x, bounds.y + 40.0),
                Color::WHITE,
            )
            .sized(22.0),
        );

        let badge_center = Point::new(center_x, bounds.y + bounds.height * 0.42);
        scene.push_shape(
            SceneShape::circle(
                "counter.badge",
                Rect::centered(badge_center, BADGE_SIZE, BADGE_SIZE),
                Brush::linear_gradient(vec![BADGE_START, BADGE_END]),
            )
            .elevated(6.0),
        );
        for item in self.digits.items() {
            let frame = item.frame;
            scene.push_text(
                SceneText::new(
                    "counter.digit",
                    item.state.to_string(),
                    badge_center,
                    Color::WHITE,
                )
                .sized(48.0)
                .with_layer(
                    GraphicsLayer::default()
                        .with_alpha(frame.alpha)
                        .with_translation(0.0, frame.offset.y * DIGIT_HEIGHT),
                ),
            );
        }

        let row_y = bounds.y + bounds.height * 0.78;
        let row_center = Point::new(center_x, row_y);
        let decrement = Rect::centered(offset(row_center, -56.0, 0.0), 48.0, 48.0);
        scene.push_shape(SceneShape::circle(
            "counter.decrement",
            decrement,
            Brush::solid(ACCENT),
        ));
        scene.push_text(
            SceneText::new("counter.decrement", "-", decrement.center(), Color::WHITE).sized(24.0),
        );
        scene.push_hit("Decrement", decrement, Action::Decrement);

        let increment = Rect::centered(offset(row_center, 56.0, 0.0), 56.0, 56.0);
        let pulse = GraphicsLayer::default().with_scale(self.pulse.value());
        scene.push_shape(
            SceneShape::circle("counter.increment", increment, Brush::solid(ACCENT))
                .elevated(4.0)
                .with_layer(pulse),
        );
        scene.push_text(
            SceneText::new("counter.increment", "+", increment.center(), Color::WHITE)
                .sized(24.0)
                .with_layer(pulse),
        );
        scene.push_hit("Increment", increment, Action::Increment);
    }
}
