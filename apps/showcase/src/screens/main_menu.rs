use motion_ui_graphics::{Brush, Color, Point, Rect, Size};

use crate::navigation::{Screen, ScreenId};
use crate::scene::{Action, Scene, SceneShape, SceneText};
use crate::screens::{button, centered_x};

const GRADIENT_TOP: Color = Color::from_argb(0xFF67_E6DC);
const GRADIENT_BOTTOM: Color = Color::from_argb(0xFF7D_5FFF);
const BUTTON_COLOR: Color = Color::from_argb(0xFF67_50A4);
const BUTTON_WIDTH: f32 = 260.0;
const BUTTON_HEIGHT: f32 = 48.0;
const BUTTON_SPACING: f32 = 16.0;

/// Destinations in menu order.
pub const DESTINATIONS: [ScreenId; 4] = [
    ScreenId::AnimatedContent,
    ScreenId::ValueDemo1,
    ScreenId::ValueDemo2,
    ScreenId::Gesture,
];

pub struct MainMenuScreen {
    viewport: Size,
}

impl MainMenuScreen {
    pub fn new(viewport: Size) -> Self {
        Self { viewport }
    }

    fn button_bounds(&self, index: usize) -> Rect {
        let stack = DESTINATIONS.len() as f32 * (BUTTON_HEIGHT + BUTTON_SPACING);
        let top = (self.viewport.height - stack) / 2.0 + 48.0;
        centered_x(
            self.viewport,
            top + index as f32 * (BUTTON_HEIGHT + BUTTON_SPACING),
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }
}

impl Screen for MainMenuScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Main
    }

    fn render(&self, scene: &mut Scene) {
        scene.push_shape(SceneShape::rect(
            "main.background",
            Rect::from_size(self.viewport),
            Brush::vertical_gradient(vec![GRADIENT_TOP, GRADIENT_BOTTOM]),
        ));

        let heading_y = self.button_bounds(0).y - 72.0;
        let center_x = self.viewport.width / 2.0;
        scene.push_text(
            SceneText::new(
                "main.title",
                "Motion Showcase",
                Point::new(center_x, heading_y),
                Color::BLACK,
            )
            .sized(28.0),
        );
        scene.push_text(
            SceneText::new(
                "main.subtitle",
                "Pick a demo",
                Point::new(center_x, heading_y + 36.0),
                Color::BLACK.with_alpha(0.7),
            )
            .sized(20.0),
        );

        for (index, id) in DESTINATIONS.into_iter().enumerate() {
            button(
                scene,
                "main.button",
                id.label(),
                self.button_bounds(index),
                BUTTON_COLOR,
                Action::Navigate(id),
            );
        }
    }

    fn on_action(&mut self, _action: Action, _point: Point) {}
}
