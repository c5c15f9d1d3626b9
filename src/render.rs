use crate::constants::LINE_CAP;
use crate::core::{Color, DrawCommand};
use web_sys as web;

/// Replays sketch draw commands onto a 2D canvas context.
///
/// Sketches draw in CSS pixels; the base transform scales them up to the
/// devicePixelRatio backing store.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
    // stroke color currently set on the context
    last_stroke: Option<Color>,
}

impl CanvasRenderer {
    pub fn new(ctx: web::CanvasRenderingContext2d, dpr: f64) -> Self {
        ctx.set_line_cap(LINE_CAP);
        Self {
            ctx,
            dpr,
            last_stroke: None,
        }
    }

    pub fn set_dpr(&mut self, dpr: f64) {
        self.dpr = dpr;
    }

    pub fn render(&mut self, commands: &[DrawCommand]) {
        let ctx = &self.ctx;
        _ = ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        self.last_stroke = None;
        for cmd in commands {
            match cmd {
                DrawCommand::Background(color) => {
                    ctx.save();
                    _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
                    ctx.set_shadow_blur(0.0);
                    ctx.set_fill_style_str(&color.to_css());
                    if let Some(canvas) = ctx.canvas() {
                        ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
                    }
                    ctx.restore();
                }
                DrawCommand::Shadow { blur, color } => {
                    // device pixels; the transform does not scale shadows
                    ctx.set_shadow_blur(*blur as f64);
                    ctx.set_shadow_color(&color.to_css());
                }
                DrawCommand::NoShadow => {
                    ctx.set_shadow_blur(0.0);
                    ctx.set_shadow_color("rgba(0,0,0,0)");
                }
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    weight,
                } => {
                    if self.last_stroke != Some(*color) {
                        ctx.set_stroke_style_str(&color.to_css());
                        self.last_stroke = Some(*color);
                    }
                    ctx.set_line_width(*weight as f64);
                    ctx.begin_path();
                    ctx.move_to(from.x as f64, from.y as f64);
                    ctx.line_to(to.x as f64, to.y as f64);
                    ctx.stroke();
                }
                DrawCommand::Save => ctx.save(),
                DrawCommand::Restore => {
                    ctx.restore();
                    self.last_stroke = None;
                }
                DrawCommand::Translate(v) => {
                    _ = ctx.translate(v.x as f64, v.y as f64);
                }
                DrawCommand::Rotate(angle) => {
                    _ = ctx.rotate(*angle as f64);
                }
                DrawCommand::FillRect {
                    center,
                    size,
                    color,
                } => {
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill_rect(
                        (center.x - size.x / 2.0) as f64,
                        (center.y - size.y / 2.0) as f64,
                        size.x as f64,
                        size.y as f64,
                    );
                }
            }
        }
    }
}
