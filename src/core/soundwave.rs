use crate::core::clock::FrameInfo;
use crate::core::color::{Color, Palette};
use crate::core::config::SoundwaveConfig;
use crate::core::constants::{IMPULSE_EPSILON, IMPULSE_MAX, STROKE_WEIGHT};
use crate::core::draw::DrawCommand;
use crate::core::layout::{map_range, symmetric_index, BarLayout};
use crate::core::noise::NoiseField;
use glam::Vec2;

/// Everything the host supplies for one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub frame: FrameInfo,
    /// Pointer in canvas CSS pixels; `None` until the pointer has been seen.
    pub pointer: Option<Vec2>,
    pub width: f32,
    pub height: f32,
}

/// Per-canvas interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// Click-triggered wobble amplitude, always in `[0, 1]`.
    pub impulse: f32,
    pub pointer_in_bounds: bool,
}

impl AnimationState {
    /// Kick the wobble if the pointer was over the canvas on the last frame.
    /// Returns whether the click registered.
    pub fn click(&mut self) -> bool {
        if self.pointer_in_bounds {
            self.impulse = IMPULSE_MAX;
        }
        self.pointer_in_bounds
    }

    pub fn update_pointer(&mut self, pointer: Option<Vec2>, width: f32, height: f32) {
        self.pointer_in_bounds = pointer.is_some_and(|p| in_bounds(p, width, height));
    }

    pub fn decay(&mut self, step: f32) {
        let next = (self.impulse - step).max(0.0);
        self.impulse = if next < IMPULSE_EPSILON { 0.0 } else { next };
    }
}

/// Strict interior test: points on the canvas edge count as outside.
#[inline]
pub fn in_bounds(p: Vec2, width: f32, height: f32) -> bool {
    p.x > 0.0 && p.x < width && p.y > 0.0 && p.y < height
}

/// Bar height before wobble for noise value `noise`.
#[inline]
pub fn base_height(noise: f32, canvas_height: f32, cfg: &SoundwaveConfig) -> f32 {
    map_range(
        noise,
        cfg.noise_range,
        (
            canvas_height * cfg.height_fraction.0,
            canvas_height * cfg.height_fraction.1,
        ),
    )
}

/// Height after the click ripple; equals `base` whenever `impulse` is 0.
#[inline]
pub fn wobble_height(
    base: f32,
    impulse: f32,
    index: usize,
    frame_count: u64,
    cfg: &SoundwaveConfig,
) -> f32 {
    if impulse == 0.0 {
        return base;
    }
    let phase = index as f64 * cfg.wobble_index_phase as f64
        + frame_count as f64 * cfg.wobble_frame_phase as f64;
    base * (1.0 + impulse * phase.sin() as f32)
}

/// The animated bar row for one canvas.
#[derive(Clone, Debug, Default)]
pub struct Soundwave {
    pub cfg: SoundwaveConfig,
    pub state: AnimationState,
}

impl Soundwave {
    pub fn new(cfg: SoundwaveConfig) -> Self {
        Self {
            cfg,
            state: AnimationState::default(),
        }
    }

    pub fn click(&mut self) -> bool {
        self.state.click()
    }

    /// Advance one frame and append its drawing to `out`.
    pub fn tick<N: NoiseField>(
        &mut self,
        input: &FrameInput,
        noise: &N,
        out: &mut Vec<DrawCommand>,
    ) {
        let cfg = &self.cfg;
        out.push(DrawCommand::Background(cfg.background));

        self.state.update_pointer(input.pointer, input.width, input.height);
        self.state.decay(cfg.impulse_decay);

        let palette = cfg.palette(self.state.pointer_in_bounds);
        let t = input.frame.elapsed_ms / cfg.noise_time_divisor_ms;
        let layout = BarLayout::compute(input.width, cfg.bar_count, cfg.bar_width_divisor);
        let mid_y = input.height / 2.0;

        for (i, x) in layout.left_edges().into_iter().enumerate() {
            let symm = symmetric_index(i, layout.count);
            let n = noise.sample(symm as f64 * cfg.noise_index_scale as f64, t);
            let h = base_height(n, input.height, cfg);
            let h = wobble_height(h, self.state.impulse, i, input.frame.frame_count, cfg);
            draw_bar(out, cfg, palette, Vec2::new(x, mid_y), layout.bar_width, h);
        }
    }
}

/// Shaded "tube": one stroke per horizontal unit, brightest at the centre.
pub fn draw_bar(
    out: &mut Vec<DrawCommand>,
    cfg: &SoundwaveConfig,
    palette: Palette,
    origin: Vec2,
    width: f32,
    height: f32,
) {
    out.push(DrawCommand::Shadow {
        blur: cfg.glow_blur,
        color: Color::Hsb {
            h: palette.hue,
            s: palette.saturation,
            b: cfg.glow_brightness,
            a: cfg.glow_alpha,
        },
    });

    let half_w = width / 2.0;
    let half_h = height / 2.0;
    let mut k = 0.0f32;
    while k < width {
        let edge = ((k - half_w) / half_w).abs();
        let brightness = map_range(
            edge,
            (0.0, 1.0),
            (palette.brightness, palette.brightness - cfg.edge_darken),
        );
        let x = origin.x + k;
        out.push(DrawCommand::Line {
            from: Vec2::new(x, origin.y - half_h),
            to: Vec2::new(x, origin.y + half_h),
            color: palette.with_brightness(brightness),
            weight: STROKE_WEIGHT,
        });
        k += 1.0;
    }
    out.push(DrawCommand::NoShadow);
}
