//! Tabbed screen switching between three animated content demos.

mod counter;
mod crossfade;
mod expand;
mod tab_selector;

pub use counter::{CounterTab, CounterValue};
pub use crossfade::{CrossfadeTab, Page};
pub use expand::ExpandTab;
pub use tab_selector::TabSelector;

use std::f32::consts::PI;

use log::debug;
use motion_animation::{
    AnimatedContent, AnimationSpec, ContentFrame, ContentItem, ContentTransform,
    EnterTransition, ExitTransition, InfiniteAnimation, InfiniteRepeatableSpec,
    InfiniteTransition, Spring, SpringSpec,
};
use motion_core::RuntimeHandle;
use motion_ui_graphics::{Brush, Color, GraphicsLayer, Point, Rect, Size};

use crate::navigation::{Screen, ScreenId};
use crate::scene::{Action, Scene, SceneShape, SceneText};
use crate::screens::{back_button, centered_x};

const BACKGROUND_START: Color = Color::from_argb(0xFF2E_3192);
const BACKGROUND_END: Color = Color::from_argb(0xFF1B_FFFF);
const CARD_COLOR: Color = Color::from_argb(0xD91D_1E33);
const CARD_BORDER: Color = Color::from_argb(0x805D_5FEF);
const ORB_COUNT: usize = 5;
const CONTENT_WIDTH: f32 = 300.0;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AnimationTab {
    Count,
    Expand,
    Crossfade,
}

impl AnimationTab {
    pub const ALL: [AnimationTab; 3] = [
        AnimationTab::Count,
        AnimationTab::Expand,
        AnimationTab::Crossfade,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnimationTab::Count => "Count",
            AnimationTab::Expand => "Expand",
            AnimationTab::Crossfade => "Crossfade",
        }
    }
}

/// Spring used for tab slides and fades; precise enough for pixel offsets.
fn tab_spring() -> SpringSpec {
    SpringSpec::new(Spring::DAMPING_RATIO_NO_BOUNCY, Spring::STIFFNESS_MEDIUM_LOW)
        .with_visibility_threshold(0.001)
}

/// Enter/exit pair for switching to `to`.
pub fn tab_transform(_from: &AnimationTab, to: &AnimationTab) -> ContentTransform {
    let (enter, exit) = match to {
        AnimationTab::Count => (
            EnterTransition::slide_in_horizontally(1.0),
            ExitTransition::slide_out_horizontally(-1.0),
        ),
        AnimationTab::Expand => (
            EnterTransition::slide_in_vertically(1.0),
            ExitTransition::slide_out_vertically(-1.0),
        ),
        AnimationTab::Crossfade => (
            EnterTransition::scale_in(0.8),
            ExitTransition::scale_out(1.2),
        ),
    };
    (enter + EnterTransition::fade_in().with_spec(tab_spring()))
        .together_with(exit + ExitTransition::fade_out().with_spec(tab_spring()))
        .with_clip(false)
}

enum TabContent {
    Count(CounterTab),
    Expand(ExpandTab),
    Crossfade(CrossfadeTab),
}

impl TabContent {
    fn render(&self, scene: &mut Scene, bounds: Rect) {
        match self {
            TabContent::Count(tab) => tab.render(scene, bounds),
            TabContent::Expand(tab) => tab.render(scene, bounds),
            TabContent::Crossfade(tab) => tab.render(scene, bounds),
        }
    }

    fn after_frame(&mut self) {
        match self {
            TabContent::Count(tab) => tab.after_frame(),
            TabContent::Expand(_) => {}
            TabContent::Crossfade(tab) => tab.after_frame(),
        }
    }
}

struct MountedTab {
    tab: AnimationTab,
    content: TabContent,
}

pub struct AnimatedContentScreen {
    runtime: RuntimeHandle,
    viewport: Size,
    _ambient: InfiniteTransition,
    rotation: InfiniteAnimation<f32>,
    orbs: Vec<InfiniteAnimation<f32>>,
    selector: TabSelector,
    content: AnimatedContent<AnimationTab>,
    mounted: Vec<MountedTab>,
    count: CounterValue,
    expanded: bool,
}

impl AnimatedContentScreen {
    pub fn new(runtime: RuntimeHandle, viewport: Size) -> Self {
        let ambient = InfiniteTransition::new(runtime.clone(), "content background");
        let rotation = ambient.animate_float(
            0.0,
            360.0,
            InfiniteRepeatableSpec::restart(AnimationSpec::linear(10_000)),
        );
        let orbs = (0..ORB_COUNT)
            .map(|index| {
                ambient.animate_float(
                    0.0,
                    1.0,
                    InfiniteRepeatableSpec::reverse(
                        AnimationSpec::linear(3000).with_delay(index as u64 * 500),
                    ),
                )
            })
            .collect();

        let initial = AnimationTab::Count;
        let count = CounterValue::default();
        let mut screen = Self {
            selector: TabSelector::new(initial, &runtime),
            content: AnimatedContent::new(initial, runtime.clone(), tab_transform),
            mounted: Vec::new(),
            _ambient: ambient,
            rotation,
            orbs,
            runtime,
            viewport,
            count,
            expanded: false,
        };
        screen.mount_tab(initial);
        screen
    }

    pub fn selected_tab(&self) -> AnimationTab {
        self.selector.selected()
    }

    pub fn selector(&self) -> &TabSelector {
        &self.selector
    }

    pub fn content(&self) -> &AnimatedContent<AnimationTab> {
        &self.content
    }

    pub fn count(&self) -> u32 {
        self.count.get()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Tabs with live state, including ones still animating out.
    pub fn mounted_tabs(&self) -> Vec<AnimationTab> {
        self.mounted.iter().map(|mounted| mounted.tab).collect()
    }

    pub fn counter(&self) -> Option<&CounterTab> {
        self.mounted.iter().find_map(|mounted| match &mounted.content {
            TabContent::Count(tab) => Some(tab),
            _ => None,
        })
    }

    pub fn expand(&self) -> Option<&ExpandTab> {
        self.mounted.iter().find_map(|mounted| match &mounted.content {
            TabContent::Expand(tab) => Some(tab),
            _ => None,
        })
    }

    pub fn crossfade(&self) -> Option<&CrossfadeTab> {
        self.mounted.iter().find_map(|mounted| match &mounted.content {
            TabContent::Crossfade(tab) => Some(tab),
            _ => None,
        })
    }

    fn counter_mut(&mut self) -> Option<&mut CounterTab> {
        self.mounted
            .iter_mut()
            .find_map(|mounted| match &mut mounted.content {
                TabContent::Count(tab) => Some(tab),
                _ => None,
            })
    }

    fn expand_mut(&mut self) -> Option<&mut ExpandTab> {
        self.mounted
            .iter_mut()
            .find_map(|mounted| match &mut mounted.content {
                TabContent::Expand(tab) => Some(tab),
                _ => None,
            })
    }

    fn crossfade_mut(&mut self) -> Option<&mut CrossfadeTab> {
        self.mounted
            .iter_mut()
            .find_map(|mounted| match &mut mounted.content {
                TabContent::Crossfade(tab) => Some(tab),
                _ => None,
            })
    }

    fn mount_tab(&mut self, tab: AnimationTab) {
        if self.mounted.iter().any(|mounted| mounted.tab == tab) {
            return;
        }
        debug!("mounting tab {}", tab.label());
        let content = match tab {
            AnimationTab::Count => {
                TabContent::Count(CounterTab::new(self.runtime.clone(), self.count.get()))
            }
            AnimationTab::Expand => {
                TabContent::Expand(ExpandTab::new(self.runtime.clone(), self.expanded))
            }
            AnimationTab::Crossfade => {
                TabContent::Crossfade(CrossfadeTab::new(self.runtime.clone()))
            }
        };
        self.mounted.push(MountedTab { tab, content });
    }

    pub fn select(&mut self, tab: AnimationTab) {
        self.selector.select(tab);
        self.mount_tab(tab);
        self.content.set_target(tab);
    }

    pub fn increment(&mut self) {
        self.count.increment();
        let count = self.count.get();
        if let Some(counter) = self.counter_mut() {
            counter.set_count(count);
        }
    }

    pub fn decrement(&mut self) {
        if !self.count.decrement() {
            return;
        }
        let count = self.count.get();
        if let Some(counter) = self.counter_mut() {
            counter.set_count(count);
        }
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
        let expanded = self.expanded;
        if let Some(expand) = self.expand_mut() {
            expand.set_expanded(expanded);
        }
    }

    pub fn toggle_page(&mut self) {
        if let Some(crossfade) = self.crossfade_mut() {
            crossfade.toggle();
        }
    }

    fn selector_bounds(&self) -> Rect {
        centered_x(self.viewport, 104.0, self.viewport.width * 0.9, 64.0)
    }

    fn card_bounds(&self) -> Rect {
        let width = CONTENT_WIDTH.min(self.viewport.width - 32.0);
        centered_x(self.viewport, 192.0, width, self.viewport.height * 0.6)
    }

    fn render_background(&self, scene: &mut Scene) {
        let viewport = self.viewport;
        scene.push_shape(SceneShape::rect(
            "content.background",
            Rect::from_size(viewport),
            Brush::radial_gradient(
                vec![BACKGROUND_START, BACKGROUND_END],
                Point::new(viewport.width, viewport.height),
                1200.0,
            ),
        ));

        let rotation = self.rotation.value();
        scene.with_layer(GraphicsLayer::default().with_rotation_z(rotation), |scene| {
            for (index, orb) in self.orbs.iter().enumerate() {
                let phase = orb.value();
                let diameter = 100.0 + index as f32 * 30.0;
                let center = Point::new(
                    viewport.width / 2.0 + index as f32 * 50.0,
                    viewport.height / 2.0 + (phase * PI).sin() * 100.0,
                );
                scene.push_shape(
                    SceneShape::circle(
                        "content.orb",
                        Rect::centered(center, diameter, diameter),
                        Brush::solid(Color::WHITE.with_alpha(0.2)),
                    )
                    .with_layer(
                        GraphicsLayer::default()
                            .with_alpha(0.15)
                            .with_scale(0.5 + phase * 0.5),
                    ),
                );
            }
        });
    }

    fn render_tab(&self, scene: &mut Scene, item: &ContentItem<AnimationTab>, card: Rect) {
        let Some(mounted) = self.mounted.iter().find(|mounted| mounted.tab == item.state) else {
            return;
        };
        let ContentFrame {
            alpha,
            offset,
            scale,
            ..
        } = item.frame;
        let layer = GraphicsLayer::default()
            .with_alpha(alpha)
            .with_scale(scale)
            .with_translation(offset.x * card.width, offset.y * card.height);
        scene.with_layer(layer, |scene| {
            let draw = |scene: &mut Scene| {
                scene.push_shape(
                    SceneShape::rect("content.card", card, Brush::solid(CARD_COLOR))
                        .rounded(16.0)
                        .bordered(2.0, Brush::solid(CARD_BORDER))
                        .elevated(8.0),
                );
                mounted.content.render(scene, card);
            };
            if item.is_target {
                draw(scene);
            } else {
                scene.inert(draw);
            }
        });
    }
}

impl Screen for AnimatedContentScreen {
    fn id(&self) -> ScreenId {
        ScreenId::AnimatedContent
    }

    fn render(&self, scene: &mut Scene) {
        self.render_background(scene);

        let pulse = 1.0 + (self.rotation.value() * 0.05).sin() * 0.05;
        scene.push_text(
            SceneText::new(
                "content.title",
                "Animation Showcase",
                Point::new(self.viewport.width / 2.0, 72.0),
                Color::WHITE,
            )
            .sized(28.0)
            .with_layer(GraphicsLayer::default().with_scale(pulse)),
        );

        self.selector.render(scene, self.selector_bounds());

        let card = self.card_bounds();
        for item in self.content.items() {
            self.render_tab(scene, &item, card);
        }

        back_button(scene);
    }

    fn on_action(&mut self, action: Action, _point: Point) {
        match action {
            Action::SelectTab(tab) => self.select(tab),
            Action::Increment => self.increment(),
            Action::Decrement => self.decrement(),
            Action::ToggleExpanded => self.toggle_expanded(),
            Action::TogglePage => self.toggle_page(),
            _ => {}
        }
    }

    fn after_frame(&mut self) {
        let removed = self.content.prune();
        if !removed.is_empty() {
            self.mounted.retain(|mounted| {
                let keep = !removed.contains(&mounted.tab);
                if !keep {
                    debug!("disposing tab {}", mounted.tab.label());
                }
                keep
            });
        }
        for mounted in &mut self.mounted {
            mounted.content.after_frame();
        }
    }
}

#[cfg(test)]
#[path = "../tests/animated_content_tests.rs"]
mod tests;
