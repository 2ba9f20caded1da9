//! Brush definitions for painting (solid colors, gradients)

use crate::color::Color;
use crate::geometry::Point;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Gradient along the horizontal axis of the painted shape.
    HorizontalGradient(Vec<Color>),
    /// Gradient along the vertical axis of the painted shape.
    VerticalGradient(Vec<Color>),
    /// Gradient from the top-left to the bottom-right corner.
    LinearGradient(Vec<Color>),
    RadialGradient {
        colors: Vec<Color>,
        center: Point,
        radius: f32,
    },
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn horizontal_gradient(colors: Vec<Color>) -> Self {
        Brush::HorizontalGradient(colors)
    }

    pub fn vertical_gradient(colors: Vec<Color>) -> Self {
        Brush::VerticalGradient(colors)
    }

    pub fn linear_gradient(colors: Vec<Color>) -> Self {
        Brush::LinearGradient(colors)
    }

    pub fn radial_gradient(colors: Vec<Color>, center: Point, radius: f32) -> Self {
        Brush::RadialGradient {
            colors,
            center,
            radius,
        }
    }

    /// Colors painted by this brush, in gradient order.
    pub fn colors(&self) -> &[Color] {
        match self {
            Brush::Solid(color) => std::slice::from_ref(color),
            Brush::HorizontalGradient(colors)
            | Brush::VerticalGradient(colors)
            | Brush::LinearGradient(colors) => colors,
            Brush::RadialGradient { colors, .. } => colors,
        }
    }
}
