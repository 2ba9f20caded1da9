//! Declarative per-frame output of a screen.
//!
//! Screens describe what is visible this frame as a flat list of shapes,
//! texts and hit regions. Nested graphics layers are folded into every
//! element at push time, so consumers never deal with a layer stack.

use std::fmt::Write as _;

use motion_ui_graphics::{Brush, Color, GraphicsLayer, Point, Rect, Size};

use crate::navigation::ScreenId;
use crate::screens::animated_content::AnimationTab;

/// What a hit region does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Navigate(ScreenId),
    Back,
    SelectTab(AnimationTab),
    Increment,
    Decrement,
    ToggleExpanded,
    TogglePage,
    ToggleSelected,
    /// Touch-down at the pressed point.
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Rect { corner_radius: f32 },
    Circle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub brush: Brush,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneShape {
    /// Stable identifier used by tests and scene dumps.
    pub tag: &'static str,
    pub kind: ShapeKind,
    pub bounds: Rect,
    pub brush: Brush,
    pub border: Option<Border>,
    pub elevation: f32,
    pub layer: GraphicsLayer,
}

impl SceneShape {
    pub fn rect(tag: &'static str, bounds: Rect, brush: Brush) -> Self {
        Self {
            tag,
            kind: ShapeKind::Rect { corner_radius: 0.0 },
            bounds,
            brush,
            border: None,
            elevation: 0.0,
            layer: GraphicsLayer::default(),
        }
    }

    pub fn circle(tag: &'static str, bounds: Rect, brush: Brush) -> Self {
        Self {
            kind: ShapeKind::Circle,
            ..Self::rect(tag, bounds, brush)
        }
    }

    pub fn rounded(mut self, corner_radius: f32) -> Self {
        self.kind = ShapeKind::Rect { corner_radius };
        self
    }

    pub fn bordered(mut self, width: f32, brush: Brush) -> Self {
        self.border = Some(Border { width, brush });
        self
    }

    pub fn elevated(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_layer(mut self, layer: GraphicsLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn corner_radius(&self) -> f32 {
        match self.kind {
            ShapeKind::Rect { corner_radius } => corner_radius,
            ShapeKind::Circle => self.bounds.width.min(self.bounds.height) / 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneText {
    pub tag: &'static str,
    pub text: String,
    /// Center of the text run.
    pub center: Point,
    pub color: Color,
    pub font_size: f32,
    pub layer: GraphicsLayer,
}

impl SceneText {
    pub fn new(tag: &'static str, text: impl Into<String>, center: Point, color: Color) -> Self {
        Self {
            tag,
            text: text.into(),
            center,
            color,
            font_size: 16.0,
            layer: GraphicsLayer::default(),
        }
    }

    pub fn sized(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_layer(mut self, layer: GraphicsLayer) -> Self {
        self.layer = layer;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HitRegion {
    pub label: String,
    pub bounds: Rect,
    pub action: Action,
}

pub struct Scene {
    viewport: Size,
    shapes: Vec<SceneShape>,
    texts: Vec<SceneText>,
    hits: Vec<HitRegion>,
    layers: Vec<GraphicsLayer>,
    inert_depth: usize,
}

impl Scene {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            shapes: Vec::new(),
            texts: Vec::new(),
            hits: Vec::new(),
            layers: Vec::new(),
            inert_depth: 0,
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    fn current_layer(&self) -> GraphicsLayer {
        self.layers.last().copied().unwrap_or_default()
    }

    pub fn push_shape(&mut self, mut shape: SceneShape) {
        shape.layer = self.current_layer().then(shape.layer);
        self.shapes.push(shape);
    }

    pub fn push_text(&mut self, mut text: SceneText) {
        text.layer = self.current_layer().then(text.layer);
        self.texts.push(text);
    }

    /// Adds a pressable region; ignored inside [`Scene::inert`] content.
    ///
    /// Only the translation of enclosing layers moves the region.
    pub fn push_hit(&mut self, label: impl Into<String>, bounds: Rect, action: Action) {
        if self.inert_depth > 0 {
            return;
        }
        let layer = self.current_layer();
        self.hits.push(HitRegion {
            label: label.into(),
            bounds: bounds.translate(layer.translation_x, layer.translation_y),
            action,
        });
    }

    /// Runs `content` with `layer` stacked on the current layers.
    pub fn with_layer(&mut self, layer: GraphicsLayer, content: impl FnOnce(&mut Scene)) {
        let combined = self.current_layer().then(layer);
        self.layers.push(combined);
        content(self);
        self.layers.pop();
    }

    /// Runs `content` without registering its hit regions.
    pub fn inert(&mut self, content: impl FnOnce(&mut Scene)) {
        self.inert_depth += 1;
        content(self);
        self.inert_depth -= 1;
    }

    pub fn shapes(&self) -> &[SceneShape] {
        &self.shapes
    }

    pub fn texts(&self) -> &[SceneText] {
        &self.texts
    }

    pub fn hits(&self) -> &[HitRegion] {
        &self.hits
    }

    pub fn shape(&self, tag: &str) -> Option<&SceneShape> {
        self.shapes.iter().find(|shape| shape.tag == tag)
    }

    pub fn shapes_tagged(&self, tag: &str) -> Vec<&SceneShape> {
        self.shapes.iter().filter(|shape| shape.tag == tag).collect()
    }

    pub fn text(&self, tag: &str) -> Option<&SceneText> {
        self.texts.iter().find(|text| text.tag == tag)
    }

    pub fn texts_tagged(&self, tag: &str) -> Vec<&SceneText> {
        self.texts.iter().filter(|text| text.tag == tag).collect()
    }

    pub fn text_strings(&self) -> Vec<String> {
        self.texts.iter().map(|text| text.text.clone()).collect()
    }

    /// Topmost hit region containing `point`.
    pub fn hit_at(&self, point: Point) -> Option<&HitRegion> {
        self.hits
            .iter()
            .rev()
            .find(|hit| hit.bounds.contains(point.x, point.y))
    }

    pub fn hit_by_label(&self, label: &str) -> Option<&HitRegion> {
        self.hits.iter().rev().find(|hit| hit.label == label)
    }

    /// One-line description for logs.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{} shapes, {} hits, texts:",
            self.shapes.len(),
            self.hits.len()
        );
        for text in &self.texts {
            if text.layer.alpha > 0.01 {
                let _ = write!(out, " {:?}", text.text);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "tests/scene_tests.rs"]
mod tests;
