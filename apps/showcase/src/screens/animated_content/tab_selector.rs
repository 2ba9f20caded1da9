use motion_animation::{AnimationType, Easing, Spring, Transition, TransitionValue};
use motion_core::RuntimeHandle;
use motion_ui_graphics::{Brush, Color, GraphicsLayer, Rect};

use super::AnimationTab;
use crate::scene::{Action, Scene, SceneShape, SceneText};
use crate::screens::ACCENT;

const CARD_COLOR: Color = Color::from_argb(0xB31D_1E33);
const PILL_HEIGHT: f32 = 40.0;
const CARD_PADDING: f32 = 8.0;

pub const SELECTED_SCALE: f32 = 1.1;

fn color_spec() -> AnimationType {
    AnimationType::tween(300, Easing::FastOutSlowInEasing)
}

fn scale_spec() -> AnimationType {
    AnimationType::spring(Spring::DAMPING_RATIO_NO_BOUNCY, Spring::STIFFNESS_LOW)
}

struct TabAnimations {
    tab: AnimationTab,
    transition: Transition<bool>,
    background: TransitionValue<Color>,
    text: TransitionValue<Color>,
    scale: TransitionValue<f32>,
}

impl TabAnimations {
    fn new(tab: AnimationTab, selected: bool, runtime: &RuntimeHandle) -> Self {
        let transition = Transition::new(selected, runtime.clone(), "tab transition");
        let background = transition.animate_color(
            "background color",
            |_, _| color_spec(),
            |selected| if *selected { ACCENT } else { Color::TRANSPARENT },
        );
        let text = transition.animate_color(
            "text color",
            |_, _| color_spec(),
            |selected| {
                if *selected {
                    Color::WHITE
                } else {
                    Color::WHITE.with_alpha(0.6)
                }
            },
        );
        let scale = transition.animate_float(
            "scale",
            |_, _| scale_spec(),
            |selected| if *selected { SELECTED_SCALE } else { 1.0 },
        );
        Self {
            tab,
            transition,
            background,
            text,
            scale,
        }
    }
}

/// Three-way tab selector with per-tab color and scale transitions.
pub struct TabSelector {
    selected: AnimationTab,
    tabs: Vec<TabAnimations>,
}

impl TabSelector {
    pub fn new(selected: AnimationTab, runtime: &RuntimeHandle) -> Self {
        let tabs = AnimationTab::ALL
            .into_iter()
            .map(|tab| TabAnimations::new(tab, tab == selected, runtime))
            .collect();
        Self { selected, tabs }
    }

    pub fn selected(&self) -> AnimationTab {
        self.selected
    }

    /// Retargets every tab's animations in one pass.
    pub fn select(&mut self, tab: AnimationTab) {
        self.selected = tab;
        for animations in &self.tabs {
            animations.transition.set_target_state(animations.tab == tab);
        }
    }

    fn animations(&self, tab: AnimationTab) -> Option<&TabAnimations> {
        self.tabs.iter().find(|animations| animations.tab == tab)
    }

    pub fn background(&self, tab: AnimationTab) -> Color {
        self.animations(tab)
            .map(|a| a.background.value())
            .unwrap_or(Color::TRANSPARENT)
    }

    pub fn text_color(&self, tab: AnimationTab) -> Color {
        self.animations(tab)
            .map(|a| a.text.value())
            .unwrap_or(Color::WHITE)
    }

    pub fn scale(&self, tab: AnimationTab) -> f32 {
        self.animations(tab).map(|a| a.scale.value()).unwrap_or(1.0)
    }

    pub fn is_running(&self) -> bool {
        self.tabs.iter().any(|a| a.transition.is_running())
    }

    pub fn render(&self, scene: &mut Scene, bounds: Rect) {
        scene.push_shape(
            SceneShape::rect("tabs.card", bounds, Brush::solid(CARD_COLOR))
                .rounded(24.0)
                .bordered(1.0, Brush::solid(Color::WHITE.with_alpha(0.2)))
                .elevated(4.0),
        );

        let inner_width = bounds.width - 2.0 * CARD_PADDING;
        let pill_width = inner_width / self.tabs.len() as f32;
        for (index, animations) in self.tabs.iter().enumerate() {
            let pill = Rect::new(
                bounds.x + CARD_PADDING + index as f32 * pill_width,
                bounds.y + (bounds.height - PILL_HEIGHT) / 2.0,
                pill_width,
                PILL_HEIGHT,
            );
            let layer = GraphicsLayer::default().with_scale(animations.scale.value());
            scene.push_shape(
                SceneShape::rect("tabs.pill", pill, Brush::solid(animations.background.value()))
                    .rounded(16.0)
                    .with_layer(layer),
            );
            scene.push_text(
                SceneText::new(
                    "tabs.label",
                    animations.tab.label(),
                    pill.center(),
                    animations.text.value(),
                )
                .with_layer(layer),
            );
            scene.push_hit(
                animations.tab.label(),
                pill,
                Action::SelectTab(animations.tab),
            );
        }
    }
}
