use motion_animation::{
    AnimatedVisibility, AnimationSpec, AnimationType, Easing, EnterTransition, ExitTransition,
    InfiniteAnimation, InfiniteRepeatableSpec, InfiniteTransition, Spring, SpringSpec,
    Transition, TransitionValue,
};
use motion_core::RuntimeHandle;
use motion_ui_graphics::{Brush, Color, GraphicsLayer, Point, Rect, Size};

use crate::navigation::{Screen, ScreenId};
use crate::scene::{Action, Scene, SceneShape, SceneText};
use crate::screens::back_button;

const HEADER_HEIGHT: f32 = 32.0;
const PROGRESS_HEIGHT: f32 = 24.0;
const DETAILS_HEIGHT: f32 = 120.0;
const DOT_SIZE: f32 = 16.0;
const PROGRESS: f32 = 0.8;
const DOT_COLORS: [Color; 3] = [
    Color::from_argb(0xFF62_00EE),
    Color::from_argb(0xFF03_DAC5),
    Color::from_argb(0xFFFF_8800),
];
const DETAILS_TEXT: &str = "This card combines coordinated transitions with \
                            physics-based and visibility animations.";

fn tween(duration_millis: u64, easing: Easing) -> AnimationType {
    AnimationType::tween(duration_millis, easing)
}

fn pick<T>(selected: bool, unselected_value: T, selected_value: T) -> T {
    if selected {
        selected_value
    } else {
        unselected_value
    }
}

/// Three dots pulsing out of phase; present only while the details show.
struct DotPulse {
    _transition: InfiniteTransition,
    scales: Vec<InfiniteAnimation<f32>>,
}

impl DotPulse {
    fn new(runtime: RuntimeHandle) -> Self {
        let transition = InfiniteTransition::new(runtime, "detail dots");
        let scales = [0, 150, 300]
            .into_iter()
            .map(|delay| {
                transition.animate_float(
                    0.8,
                    1.2,
                    InfiniteRepeatableSpec::reverse(
                        AnimationSpec::tween(1000, Easing::FastOutSlowInEasing)
                            .with_delay(delay),
                    ),
                )
            })
            .collect();
        Self {
            _transition: transition,
            scales,
        }
    }
}

pub struct ValueDemo1Screen {
    runtime: RuntimeHandle,
    viewport: Size,
    selected: bool,
    transition: Transition<bool>,
    start_border: TransitionValue<Color>,
    end_border: TransitionValue<Color>,
    elevation: TransitionValue<f32>,
    corner_radius: TransitionValue<f32>,
    padding: TransitionValue<f32>,
    width: TransitionValue<f32>,
    background: TransitionValue<Color>,
    icon_rotation: TransitionValue<f32>,
    scale: TransitionValue<f32>,
    details: AnimatedVisibility,
    instructions: AnimatedVisibility,
    dots: Option<DotPulse>,
}

impl ValueDemo1Screen {
    pub fn new(runtime: RuntimeHandle, viewport: Size) -> Self {
        let transition = Transition::new(false, runtime.clone(), "card selection");
        let start_border = transition.animate_color(
            "start border",
            |_, _| tween(800, Easing::FastOutSlowInEasing),
            |selected| {
                pick(
                    *selected,
                    Color::from_argb(0xFFBB_BBBB),
                    Color::from_argb(0xFF62_00EE),
                )
            },
        );
        let end_border = transition.animate_color(
            "end border",
            |_, _| tween(800, Easing::FastOutSlowInEasing),
            |selected| {
                pick(
                    *selected,
                    Color::from_argb(0xFFEE_EEEE),
                    Color::from_argb(0xFF03_DAC5),
                )
            },
        );
        let elevation = transition.animate_float(
            "elevation",
            |_, _| {
                AnimationType::spring(Spring::DAMPING_RATIO_MEDIUM_BOUNCY, Spring::STIFFNESS_LOW)
            },
            |selected| pick(*selected, 2.0, 16.0),
        );
        let corner_radius = transition.animate_float(
            "corner radius",
            |_, _| tween(500, Easing::LinearOutSlowInEasing),
            |selected| pick(*selected, 8.0, 24.0),
        );
        let padding = transition.animate_float(
            "padding",
            |_, _| {
                AnimationSpec::tween(300, Easing::LinearOutSlowInEasing)
                    .with_delay(50)
                    .into()
            },
            |selected| pick(*selected, 16.0, 24.0),
        );
        let width = transition.animate_float(
            "width",
            |_, _| tween(300, Easing::FastOutSlowInEasing),
            |selected| pick(*selected, 280.0, 320.0),
        );
        let background = transition.animate_color(
            "background",
            |_, _| {
                tween(
                    500,
                    Easing::CubicBezier {
                        x1: 0.4,
                        y1: 0.0,
                        x2: 0.2,
                        y2: 1.0,
                    },
                )
            },
            |selected| pick(*selected, Color::WHITE, Color::from_argb(0xFFF3_E5F5)),
        );
        let icon_rotation = transition.animate_float(
            "icon rotation",
            |_, _| {
                AnimationType::spring(
                    Spring::DAMPING_RATIO_MEDIUM_BOUNCY,
                    Spring::STIFFNESS_MEDIUM,
                )
            },
            |selected| pick(*selected, 0.0, 180.0),
        );
        let scale = transition.animate_float(
            "content scale",
            |_, _| {
                AnimationType::spring(Spring::DAMPING_RATIO_LOW_BOUNCY, Spring::STIFFNESS_LOW)
            },
            |selected| pick(*selected, 1.0, 1.05),
        );

        let details = AnimatedVisibility::new(
            false,
            runtime.clone(),
            EnterTransition::expand_vertically()
                + EnterTransition::fade_in()
                + EnterTransition::slide_in_vertically(1.0).with_spec(SpringSpec::new(
                    Spring::DAMPING_RATIO_MEDIUM_BOUNCY,
                    Spring::STIFFNESS_MEDIUM,
                )),
            ExitTransition::shrink_vertically()
                + ExitTransition::fade_out()
                + ExitTransition::slide_out_vertically(1.0)
                    .with_spec(AnimationSpec::tween(150, Easing::LinearOutSlowInEasing)),
        );
        let instructions = AnimatedVisibility::new(
            true,
            runtime.clone(),
            EnterTransition::fade_in() + EnterTransition::expand_vertically(),
            ExitTransition::fade_out() + ExitTransition::shrink_vertically(),
        );

        Self {
            runtime,
            viewport,
            selected: false,
            transition,
            start_border,
            end_border,
            elevation,
            corner_radius,
            padding,
            width,
            background,
            icon_rotation,
            scale,
            details,
            instructions,
            dots: None,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn toggle(&mut self) {
        self.selected = !self.selected;
        self.transition.set_target_state(self.selected);
        self.details.set_visible(self.selected);
        self.instructions.set_visible(!self.selected);
    }

    pub fn is_running(&self) -> bool {
        self.transition.is_running()
            || self.details.is_running()
            || self.instructions.is_running()
    }

    pub fn width(&self) -> f32 {
        self.width.value()
    }

    pub fn elevation(&self) -> f32 {
        self.elevation.value()
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius.value()
    }

    pub fn padding(&self) -> f32 {
        self.padding.value()
    }

    pub fn icon_rotation(&self) -> f32 {
        self.icon_rotation.value()
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn background(&self) -> Color {
        self.background.value()
    }

    pub fn border_colors(&self) -> (Color, Color) {
        (self.start_border.value(), self.end_border.value())
    }

    pub fn details(&self) -> &AnimatedVisibility {
        &self.details
    }

    pub fn has_pulsing_dots(&self) -> bool {
        self.dots.is_some()
    }

    pub fn header_text(&self) -> &'static str {
        if self.selected {
            "Expanded View"
        } else {
            "Click to Expand"
        }
    }

    fn card_bounds(&self) -> Rect {
        let padding = self.padding();
        let details = self
            .details
            .frame()
            .map(|frame| DETAILS_HEIGHT * frame.size_fraction)
            .unwrap_or(0.0);
        let progress = if self.selected { PROGRESS_HEIGHT } else { 0.0 };
        let height = HEADER_HEIGHT + progress + details + padding * 2.0;
        let width = self.width();
        Rect::new((self.viewport.width - width) / 2.0, 140.0, width, height)
    }

    fn render_details(&self, scene: &mut Scene, top: Point) {
        let Some(frame) = self.details.frame() else {
            return;
        };
        let layer = GraphicsLayer::default()
            .with_alpha(frame.alpha)
            .with_translation(0.0, frame.offset.y * DETAILS_HEIGHT);
        scene.with_layer(layer, |scene| {
            scene.push_text(SceneText::new(
                "value1.details",
                DETAILS_TEXT,
                Point::new(top.x, top.y + 32.0),
                Color::DARK_GRAY,
            ));
            let Some(dots) = &self.dots else {
                return;
            };
            for (index, (scale, color)) in dots.scales.iter().zip(DOT_COLORS).enumerate() {
                let center = Point::new(top.x + (index as f32 - 1.0) * 32.0, top.y + 84.0);
                scene.push_shape(
                    SceneShape::circle(
                        "value1.dot",
                        Rect::centered(center, DOT_SIZE, DOT_SIZE),
                        Brush::solid(color),
                    )
                    .with_layer(GraphicsLayer::default().with_scale(scale.value())),
                );
            }
        });
    }
}

impl Screen for ValueDemo1Screen {
    fn id(&self) -> ScreenId {
        ScreenId::ValueDemo1
    }

    fn render(&self, scene: &mut Scene) {
        scene.push_text(
            SceneText::new(
                "value1.title",
                "Interactive Animation Demo",
                Point::new(self.viewport.width / 2.0, 96.0),
                Color::BLACK,
            )
            .sized(24.0),
        );

        let card = self.card_bounds();
        let padding = self.padding();
        let (start, end) = self.border_colors();
        scene.with_layer(GraphicsLayer::default().with_scale(self.scale()), |scene| {
            scene.push_shape(
                SceneShape::rect("value1.card", card, Brush::solid(self.background()))
                    .rounded(self.corner_radius())
                    .bordered(2.0, Brush::horizontal_gradient(vec![start, end]))
                    .elevated(self.elevation()),
            );

            let header_y = card.y + padding + HEADER_HEIGHT / 2.0;
            scene.push_text(
                SceneText::new(
                    "value1.header",
                    self.header_text(),
                    Point::new(card.center().x, header_y),
                    Color::BLACK,
                )
                .sized(18.0),
            );
            scene.push_shape(
                SceneShape::rect(
                    "value1.icon",
                    Rect::centered(
                        Point::new(card.x + card.width - padding - 12.0, header_y),
                        24.0,
                        24.0,
                    ),
                    Brush::solid(Color::DARK_GRAY),
                )
                .with_layer(GraphicsLayer::default().with_rotation_z(self.icon_rotation())),
            );

            let mut cursor = card.y + padding + HEADER_HEIGHT;
            if self.selected {
                let track = Rect::new(
                    card.x + padding,
                    cursor + 8.0,
                    card.width - padding * 2.0,
                    8.0,
                );
                scene.push_shape(
                    SceneShape::rect(
                        "value1.progress_track",
                        track,
                        Brush::solid(Color::from_argb(0xFFE0_E0E0)),
                    )
                    .rounded(4.0),
                );
                scene.push_shape(
                    SceneShape::rect(
                        "value1.progress",
                        Rect::new(track.x, track.y, track.width * PROGRESS, track.height),
                        Brush::solid(Color::from_argb(0xFF62_00EE)),
                    )
                    .rounded(4.0),
                );
                cursor += PROGRESS_HEIGHT;
            }
            self.render_details(scene, Point::new(card.center().x, cursor));
        });
        scene.push_hit(self.header_text(), card, Action::ToggleSelected);

        if let Some(frame) = self.instructions.frame() {
            scene.push_text(
                SceneText::new(
                    "value1.instructions",
                    "Tap the card to see animations",
                    Point::new(self.viewport.width / 2.0, card.y + card.height + 32.0),
                    Color::DARK_GRAY,
                )
                .with_layer(GraphicsLayer::default().with_alpha(frame.alpha)),
            );
        }

        back_button(scene);
    }

    fn on_action(&mut self, action: Action, _point: Point) {
        if action == Action::ToggleSelected {
            self.toggle();
        }
    }

    fn after_frame(&mut self) {
        match (self.details.is_present(), self.dots.is_some()) {
            (true, false) => self.dots = Some(DotPulse::new(self.runtime.clone())),
            (false, true) => self.dots = None,
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "tests/value_demo1_tests.rs"]
mod tests;
