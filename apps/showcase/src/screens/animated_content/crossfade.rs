use log::debug;
use motion_animation::{Animatable, AnimatedContent, AnimationSpec, Easing};
use motion_core::{EffectScope, KeyedEffect, MutableState, RuntimeHandle};
use motion_ui_graphics::{Brush, Color, GraphicsLayer, Point, Rect};

use crate::scene::{Action, Scene, SceneShape, SceneText};
use crate::screens::{button, ACCENT};

const CARD_SIZE: f32 = 200.0;
const DOT_INTERVAL_MILLIS: u64 = 500;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Page {
    A,
    B,
}

impl Page {
    pub fn toggled(self) -> Page {
        match self {
            Page::A => Page::B,
            Page::B => Page::A,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::A => "Page A",
            Page::B => "Page B",
        }
    }

    fn border(self) -> Color {
        match self {
            Page::A => Color::from_argb(0xFFF4_3F5E),
            Page::B => Color::from_argb(0xFF60_A5FA),
        }
    }

    fn gradient(self) -> Vec<Color> {
        let (start, end) = match self {
            Page::A => (Color::from_argb(0xFFFD_A4AF), Color::from_argb(0xFFF4_3F5E)),
            Page::B => (Color::from_argb(0xFF93_C5FD), Color::from_argb(0xFF3B_82F6)),
        };
        vec![start.with_alpha(0.9), end.with_alpha(0.9)]
    }
}

fn status_text(dots: u32) -> String {
    format!("Animating{}", ".".repeat(dots as usize))
}

/// Dot counter owned by one page while it is on screen.
struct PageDots {
    page: Page,
    count: MutableState<u32>,
    _ticker: EffectScope,
}

impl PageDots {
    /// Starts at zero and advances every 500 ms of frame time, wrapping at four.
    fn start(page: Page, runtime: RuntimeHandle) -> Self {
        let count = MutableState::with_runtime(0, runtime.clone());
        let ticker = EffectScope::new(runtime.clone());
        let clock = runtime.frame_clock();
        let ticking = count.clone();
        ticker.launch(async move {
            let mut interval = clock.interval(DOT_INTERVAL_MILLIS);
            loop {
                interval.tick().await;
                ticking.update(|count| *count = (*count + 1) % 4);
            }
        });
        Self {
            page,
            count,
            _ticker: ticker,
        }
    }
}

/// Two pages that cross-fade. Each toggle restarts the spin, and every page
/// on screen runs its own dot ticker.
pub struct CrossfadeTab {
    runtime: RuntimeHandle,
    page: Page,
    pages: AnimatedContent<Page>,
    rotation: Animatable<f32>,
    dots: Vec<PageDots>,
    spin_effect: KeyedEffect,
}

impl CrossfadeTab {
    pub fn new(runtime: RuntimeHandle) -> Self {
        let page = Page::A;
        let mut tab = Self {
            pages: AnimatedContent::crossfade(
                page,
                runtime.clone(),
                AnimationSpec::tween(800, Easing::FastOutSlowInEasing),
            ),
            rotation: Animatable::with_label(0.0, runtime.clone(), "crossfade rotation"),
            dots: vec![PageDots::start(page, runtime.clone())],
            spin_effect: KeyedEffect::new(),
            runtime,
            page,
        };
        tab.launch_spin();
        tab
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn pages(&self) -> &AnimatedContent<Page> {
        &self.pages
    }

    pub fn rotation(&self) -> f32 {
        self.rotation.value()
    }

    /// Dot count of the current page.
    pub fn dots(&self) -> u32 {
        self.dots_of(self.page)
    }

    /// Dot count of `page`, zero once it has left the screen.
    pub fn dots_of(&self, page: Page) -> u32 {
        self.dots
            .iter()
            .find(|dots| dots.page == page)
            .map_or(0, |dots| dots.count.value())
    }

    /// "Animating" followed by the current page's dots.
    pub fn status_text(&self) -> String {
        status_text(self.dots())
    }

    pub fn after_frame(&mut self) {
        for page in self.pages.prune() {
            debug!("dropping dots of {}", page.title());
            self.dots.retain(|dots| dots.page != page);
        }
    }

    pub fn toggle(&mut self) {
        self.page = self.page.toggled();
        self.pages.set_target(self.page);
        let page = self.page;
        self.dots.retain(|dots| dots.page != page);
        self.dots.push(PageDots::start(page, self.runtime.clone()));
        self.launch_spin();
    }

    /// Restarts the spin for the current page.
    fn launch_spin(&mut self) {
        let rotation = self.rotation.clone();
        let page = self.page;
        self.spin_effect.run_if_changed(&self.runtime, &page, move |scope| {
            rotation.snap_to(0.0);
            scope.launch(async move {
                let spin = AnimationSpec::tween(1200, Easing::EaseOutBack);
                let reason = rotation.animate_to_async(360.0, spin).await;
                debug!("page {} spin ended: {reason:?}", page.title());
            });
        });
    }

    pub fn render(&self, scene: &mut Scene, bounds: Rect) {
        let center_x = bounds.center().x;
        scene.push_text(
            SceneText::new(
                "crossfade.title",
                "Crossfade Animation",
                Point::new(center_x, bounds.y + 40.0),
                Color::WHITE,
            )
            .sized(22.0),
        );

        let rotation = self.rotation();
        let wobble = (rotation * 0.05).sin() * 2.0;
        let card = Rect::centered(
            Point::new(center_x, bounds.y + bounds.height * 0.45),
            CARD_SIZE,
            CARD_SIZE,
        );
        scene.with_layer(GraphicsLayer::default().with_rotation_y(rotation), |scene| {
            for item in self.pages.items() {
                let page = item.state;
                let layer = GraphicsLayer::default()
                    .with_alpha(item.frame.alpha)
                    .with_rotation_z(wobble);
                scene.with_layer(layer, |scene| {
                    scene.push_shape(
                        SceneShape::rect(
                            "crossfade.card",
                            card,
                            Brush::linear_gradient(page.gradient()),
                        )
                        .rounded(16.0)
                        .bordered(2.0, Brush::solid(page.border()))
                        .elevated(8.0),
                    );
                    scene.push_text(
                        SceneText::new(
                            "crossfade.page",
                            page.title(),
                            Point::new(card.center().x, card.center().y - 16.0),
                            Color::WHITE,
                        )
                        .sized(32.0),
                    );
                    scene.push_text(SceneText::new(
                        "crossfade.dots",
                        status_text(self.dots_of(page)),
                        Point::new(card.center().x, card.center().y + 28.0),
                        Color::WHITE.with_alpha(0.8),
                    ));
                });
            }
        });

        let label = format!("Switch to {}", self.page.toggled().title());
        let button_bounds = Rect::new(
            center_x - 90.0,
            bounds.y + bounds.height * 0.8,
            180.0,
            48.0,
        );
        button(
            scene,
            "crossfade.button",
            &label,
            button_bounds,
            ACCENT,
            Action::TogglePage,
        );
    }
}
