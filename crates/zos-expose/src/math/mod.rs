//! Geometry primitives shared by layout, animation and hit testing

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
