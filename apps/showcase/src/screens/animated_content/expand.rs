use motion_animation::{
    AnimationSpec, AnimationType, Easing, InfiniteAnimation, InfiniteRepeatableSpec,
    InfiniteTransition, Spring, Transition, TransitionValue,
};
use motion_core::RuntimeHandle;
use motion_ui_graphics::{Brush, Color, GraphicsLayer, Point, Rect};

use crate::scene::{Action, Scene, SceneShape, SceneText};

const COLLAPSED_GLOW: Color = Color::from_argb(0xFF42_69E1);
const EXPANDED_GLOW: Color = Color::from_argb(0xFF00_FFA3);
const COLLAPSED_GRADIENT: (Color, Color) = (
    Color::from_argb(0xFF42_69E1),
    Color::from_argb(0xFF23_32BD),
);
const EXPANDED_GRADIENT: (Color, Color) = (
    Color::from_argb(0xFF00_FFA3),
    Color::from_argb(0xFF00_E0FF),
);

fn tween(duration_millis: u64, easing: Easing) -> AnimationType {
    AnimationType::tween(duration_millis, easing)
}

fn pick<T>(expanded: bool, collapsed_value: T, expanded_value: T) -> T {
    if expanded {
        expanded_value
    } else {
        collapsed_value
    }
}

/// Tap target that grows, spins and recolors between two states.
pub struct ExpandTab {
    expanded: bool,
    transition: Transition<bool>,
    glow_size: TransitionValue<f32>,
    glow_color: TransitionValue<Color>,
    inner_size: TransitionValue<f32>,
    rotation: TransitionValue<f32>,
    gradient_start: TransitionValue<Color>,
    gradient_end: TransitionValue<Color>,
    label_scale: TransitionValue<f32>,
    icon_rotation: TransitionValue<f32>,
    _glow_loop: InfiniteTransition,
    glow_alpha: InfiniteAnimation<f32>,
}

impl ExpandTab {
    pub fn new(runtime: RuntimeHandle, expanded: bool) -> Self {
        let transition = Transition::new(expanded, runtime.clone(), "expand");
        let glow_size = transition.animate_float(
            "glow size",
            |_, _| tween(500, Easing::FastOutSlowInEasing),
            |expanded| pick(*expanded, 110.0, 220.0),
        );
        let glow_color = transition.animate_color(
            "glow color",
            |_, _| tween(500, Easing::FastOutSlowInEasing),
            |expanded| pick(*expanded, COLLAPSED_GLOW, EXPANDED_GLOW),
        );
        let inner_size = transition.animate_float(
            "inner size",
            |_, _| {
                AnimationType::spring(
                    Spring::DAMPING_RATIO_MEDIUM_BOUNCY,
                    Spring::STIFFNESS_MEDIUM,
                )
            },
            |expanded| pick(*expanded, 100.0, 200.0),
        );
        let rotation = transition.animate_float(
            "rotation",
            |_, _| tween(1000, Easing::EaseInOutQuart),
            |expanded| pick(*expanded, 0.0, 360.0),
        );
        let gradient_start = transition.animate_color(
            "gradient start",
            |_, _| tween(500, Easing::FastOutSlowInEasing),
            |expanded| pick(*expanded, COLLAPSED_GRADIENT.0, EXPANDED_GRADIENT.0),
        );
        let gradient_end = transition.animate_color(
            "gradient end",
            |_, _| tween(500, Easing::FastOutSlowInEasing),
            |expanded| pick(*expanded, COLLAPSED_GRADIENT.1, EXPANDED_GRADIENT.1),
        );
        let label_scale = transition.animate_float(
            "label scale",
            |_, _| AnimationType::spring(Spring::DAMPING_RATIO_NO_BOUNCY, Spring::STIFFNESS_LOW),
            |expanded| pick(*expanded, 1.0, 1.5),
        );
        let icon_rotation = transition.animate_float(
            "icon rotation",
            |_, _| tween(500, Easing::FastOutSlowInEasing),
            |expanded| pick(*expanded, 0.0, 180.0),
        );

        let glow_loop = InfiniteTransition::new(runtime, "glow");
        let glow_alpha = glow_loop.animate_float(
            0.2,
            0.7,
            InfiniteRepeatableSpec::reverse(AnimationSpec::tween(
                1500,
                Easing::FastOutSlowInEasing,
            )),
        );

        Self {
            expanded,
            transition,
            glow_size,
            glow_color,
            inner_size,
            rotation,
            gradient_start,
            gradient_end,
            label_scale,
            icon_rotation,
            _glow_loop: glow_loop,
            glow_alpha,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
        self.transition.set_target_state(expanded);
    }

    /// Label text; swaps immediately on toggle.
    pub fn label(&self) -> &'static str {
        if self.expanded {
            "Expanded"
        } else {
            "Tap Me"
        }
    }

    pub fn glow_size(&self) -> f32 {
        self.glow_size.value()
    }

    pub fn glow_color(&self) -> Color {
        self.glow_color.value()
    }

    pub fn glow_alpha(&self) -> f32 {
        self.glow_alpha.value()
    }

    pub fn inner_size(&self) -> f32 {
        self.inner_size.value()
    }

    pub fn rotation(&self) -> f32 {
        self.rotation.value()
    }

    pub fn gradient(&self) -> (Color, Color) {
        (self.gradient_start.value(), self.gradient_end.value())
    }

    pub fn label_scale(&self) -> f32 {
        self.label_scale.value()
    }

    pub fn icon_rotation(&self) -> f32 {
        self.icon_rotation.value()
    }

    pub fn is_running(&self) -> bool {
        self.transition.is_running()
    }

    pub fn render(&self, scene: &mut Scene, bounds: Rect) {
        let center_x = bounds.center().x;
        scene.push_text(
            SceneText::new(
                "expand.title",
                "Expansion Animation",
                Point::new(center_x, bounds.y + 40.0),
                Color::WHITE,
            )
            .sized(22.0),
        );

        let center = Point::new(center_x, bounds.y + bounds.height * 0.55);
        let glow = self.glow_size();
        scene.push_shape(
            SceneShape::circle(
                "expand.glow",
                Rect::centered(center, glow, glow),
                Brush::solid(self.glow_color()),
            )
            .with_layer(GraphicsLayer::default().with_alpha(self.glow_alpha())),
        );

        let inner = Rect::centered(center, self.inner_size(), self.inner_size());
        let (start, end) = self.gradient();
        scene.with_layer(
            GraphicsLayer::default().with_rotation_z(self.rotation()),
            |scene| {
                scene.push_shape(
                    SceneShape::circle(
                        "expand.inner",
                        inner,
                        Brush::linear_gradient(vec![start, end]),
                    )
                    .elevated(8.0),
                );
                let font_size = if self.expanded { 22.0 } else { 16.0 };
                scene.push_text(
                    SceneText::new("expand.label", self.label(), center, Color::WHITE)
                        .sized(font_size)
                        .with_layer(GraphicsLayer::default().with_scale(self.label_scale())),
                );
                scene.push_shape(
                    SceneShape::rect(
                        "expand.icon",
                        Rect::centered(Point::new(center.x, center.y + 28.0), 24.0, 24.0),
                        Brush::solid(Color::WHITE),
                    )
                    .with_layer(GraphicsLayer::default().with_rotation_z(self.icon_rotation())),
                );
            },
        );
        scene.push_hit(self.label(), inner, Action::ToggleExpanded);
    }
}
