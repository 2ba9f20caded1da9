//! Pure math/data for drawing
//!
//! Geometry primitives, color definitions, brushes and the graphics layer
//! used by animated scenes.

mod brush;
mod color;
mod geometry;

pub use brush::*;
pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::geometry::{GraphicsLayer, Point, Rect, Size};
}

#[cfg(test)]
#[path = "tests/graphics_tests.rs"]
mod tests;
