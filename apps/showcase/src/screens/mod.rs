//! The showcase screens and the widgets they share.

pub mod animated_content;
pub mod gesture;
pub mod main_menu;
pub mod value_demo1;
pub mod value_demo2;

use motion_core::RuntimeHandle;
use motion_ui_graphics::{Brush, Color, Point, Rect, Size};

use crate::navigation::{Screen, ScreenId};
use crate::scene::{Action, Scene, SceneShape, SceneText};

/// Accent shared by buttons and the selected tab.
pub const ACCENT: Color = Color::from_argb(0xFF5D_5FEF);

/// Builds a fresh instance of `id`.
pub fn mount(id: ScreenId, runtime: &RuntimeHandle, viewport: Size) -> Box<dyn Screen> {
    match id {
        ScreenId::Main => Box::new(main_menu::MainMenuScreen::new(viewport)),
        ScreenId::AnimatedContent => Box::new(animated_content::AnimatedContentScreen::new(
            runtime.clone(),
            viewport,
        )),
        ScreenId::ValueDemo1 => Box::new(value_demo1::ValueDemo1Screen::new(
            runtime.clone(),
            viewport,
        )),
        ScreenId::ValueDemo2 => Box::new(value_demo2::ValueDemo2Screen::new(
            runtime.clone(),
            viewport,
        )),
        ScreenId::Gesture => Box::new(gesture::GestureScreen::new(runtime.clone(), viewport)),
    }
}

/// Rounded button with a centered label that triggers `action`.
pub(crate) fn button(
    scene: &mut Scene,
    tag: &'static str,
    label: &str,
    bounds: Rect,
    color: Color,
    action: Action,
) {
    scene.push_shape(
        SceneShape::rect(tag, bounds, Brush::solid(color))
            .rounded(bounds.height / 2.0)
            .elevated(2.0),
    );
    scene.push_text(SceneText::new(tag, label, bounds.center(), Color::WHITE));
    scene.push_hit(label, bounds, action);
}

/// Host back affordance in the top-left corner.
pub(crate) fn back_button(scene: &mut Scene) {
    let bounds = Rect::new(8.0, 8.0, 72.0, 36.0);
    button(
        scene,
        "back",
        "Back",
        bounds,
        Color::BLACK.with_alpha(0.4),
        Action::Back,
    );
}

pub(crate) fn centered_x(viewport: Size, y: f32, width: f32, height: f32) -> Rect {
    Rect::new((viewport.width - width) / 2.0, y, width, height)
}

pub(crate) fn offset(point: Point, dx: f32, dy: f32) -> Point {
    Point::new(point.x + dx, point.y + dy)
}
