use crate::core::color::Color;
use glam::Vec2;

/// Backend-neutral drawing instruction emitted by a sketch tick.
///
/// Coordinates are CSS pixels with the origin at the canvas top-left; the
/// transform commands affect everything after them until the matching
/// `Restore`.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole canvas, ignoring the current transform.
    Background(Color),
    /// Soft glow applied to subsequent strokes/fills.
    Shadow { blur: f32, color: Color },
    NoShadow,
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        weight: f32,
    },
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    /// Axis-aligned rectangle centred on `center` in the current transform.
    FillRect { center: Vec2, size: Vec2, color: Color },
}
