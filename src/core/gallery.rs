use crate::core::color::Color;
use crate::core::config::GalleryConfig;
use crate::core::draw::DrawCommand;
use glam::Vec2;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryVariant {
    /// Fixed-size canvas, never resized.
    Artwork,
    /// Tracks its container's size; the square scales with it.
    Placeholder,
}

impl GalleryVariant {
    /// Parse a `data-variant` attribute value; anything unknown is `Artwork`.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("placeholder") => GalleryVariant::Placeholder,
            _ => GalleryVariant::Artwork,
        }
    }

    #[inline]
    pub fn is_resize_adaptive(self) -> bool {
        matches!(self, GalleryVariant::Placeholder)
    }
}

/// One rotating-square slot. Instances share nothing.
#[derive(Clone, Debug)]
pub struct GalleryInstance {
    pub id: u32,
    pub container_id: String,
    pub variant: GalleryVariant,
    pub background: Color,
    /// Radians; grows every frame and is never reset. Wrapped only when drawn.
    pub angle: f64,
    cfg: GalleryConfig,
}

impl GalleryInstance {
    pub fn new(
        id: u32,
        container_id: impl Into<String>,
        variant: GalleryVariant,
        cfg: GalleryConfig,
    ) -> Self {
        Self {
            id,
            container_id: container_id.into(),
            variant,
            background: cfg.background_for(id),
            angle: 0.0,
            cfg,
        }
    }

    /// Canvas size for setup: fixed for artwork, the container's for placeholders.
    /// A placeholder container without its own height takes the artwork aspect
    /// ratio from its width, since its height otherwise comes from the canvas.
    pub fn canvas_size(&self, container: (f32, f32)) -> (f32, f32) {
        match self.variant {
            GalleryVariant::Artwork => self.cfg.artwork_size,
            GalleryVariant::Placeholder => {
                let (w, h) = container;
                if h > 0.0 {
                    (w, h)
                } else {
                    let (art_w, art_h) = self.cfg.artwork_size;
                    (w, w.max(0.0) * art_h / art_w)
                }
            }
        }
    }

    pub fn square_side(&self, width: f32, height: f32) -> f32 {
        match self.variant {
            GalleryVariant::Artwork => self.cfg.square_side,
            GalleryVariant::Placeholder => {
                let (_, art_h) = self.cfg.artwork_size;
                width.min(height).max(0.0) * self.cfg.square_side / art_h
            }
        }
    }

    /// Draw the current frame at `angle`, then advance the rotation.
    pub fn tick(&mut self, width: f32, height: f32, out: &mut Vec<DrawCommand>) {
        let side = self.square_side(width, height);
        out.push(DrawCommand::Background(self.background));
        out.push(DrawCommand::Save);
        out.push(DrawCommand::Translate(Vec2::new(width / 2.0, height / 2.0)));
        out.push(DrawCommand::Rotate(self.angle.rem_euclid(TAU) as f32));
        out.push(DrawCommand::FillRect {
            center: Vec2::ZERO,
            size: Vec2::splat(side),
            color: self.cfg.square_fill,
        });
        out.push(DrawCommand::Restore);
        self.angle += self.cfg.rotation_step;
    }
}
