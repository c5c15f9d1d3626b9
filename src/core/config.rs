use crate::core::color::{Color, Palette};
use crate::core::constants::*;
use crate::core::noise::ValueNoise;

/// Tunables for one soundwave canvas. `Default` reproduces the stock look.
#[derive(Clone, Debug)]
pub struct SoundwaveConfig {
    pub bar_count: usize,
    pub bar_width_divisor: f32,
    pub impulse_decay: f32,
    pub noise_octaves: u32,
    pub noise_falloff: f32,
    pub noise_index_scale: f32,
    pub noise_time_divisor_ms: f64,
    /// Noise values mapped onto `height_fraction`; values outside extrapolate.
    pub noise_range: (f32, f32),
    pub height_fraction: (f32, f32),
    pub wobble_index_phase: f32,
    pub wobble_frame_phase: f32,
    pub edge_darken: f32,
    pub glow_blur: f32,
    pub glow_brightness: f32,
    pub glow_alpha: f32,
    pub default_palette: Palette,
    pub hover_palette: Palette,
    pub background: Color,
}

impl Default for SoundwaveConfig {
    fn default() -> Self {
        Self {
            bar_count: BAR_COUNT,
            bar_width_divisor: BAR_WIDTH_DIVISOR,
            impulse_decay: IMPULSE_DECAY_PER_FRAME,
            noise_octaves: NOISE_OCTAVES,
            noise_falloff: NOISE_FALLOFF,
            noise_index_scale: NOISE_INDEX_SCALE,
            noise_time_divisor_ms: NOISE_TIME_DIVISOR_MS,
            noise_range: NOISE_SOURCE_RANGE,
            height_fraction: HEIGHT_TARGET_FRACTION,
            wobble_index_phase: WOBBLE_INDEX_PHASE,
            wobble_frame_phase: WOBBLE_FRAME_PHASE,
            edge_darken: EDGE_DARKEN,
            glow_blur: GLOW_BLUR,
            glow_brightness: GLOW_BRIGHTNESS,
            glow_alpha: GLOW_ALPHA,
            default_palette: Palette::from_array(DEFAULT_PALETTE),
            hover_palette: Palette::from_array(HOVER_PALETTE),
            background: Color::rgb(
                SOUNDWAVE_BACKGROUND[0],
                SOUNDWAVE_BACKGROUND[1],
                SOUNDWAVE_BACKGROUND[2],
            ),
        }
    }
}

impl SoundwaveConfig {
    /// Noise field with this config's octave detail.
    pub fn noise(&self, seed: u64) -> ValueNoise {
        ValueNoise::new(seed).with_detail(self.noise_octaves, self.noise_falloff)
    }

    #[inline]
    pub fn palette(&self, hovering: bool) -> Palette {
        if hovering {
            self.hover_palette
        } else {
            self.default_palette
        }
    }
}

/// Tunables shared by gallery instances.
#[derive(Clone, Debug)]
pub struct GalleryConfig {
    pub artwork_size: (f32, f32),
    pub square_side: f32,
    pub rotation_step: f64,
    pub square_fill: Color,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            artwork_size: ARTWORK_SIZE,
            square_side: ARTWORK_SQUARE_SIDE,
            rotation_step: ROTATION_STEP_RAD,
            square_fill: Color::Rgba {
                r: SQUARE_FILL[0],
                g: SQUARE_FILL[1],
                b: SQUARE_FILL[2],
                a: SQUARE_FILL[3],
            },
        }
    }
}

impl GalleryConfig {
    /// Background for gallery slot `id`: red cycles with the id, green/blue fixed.
    pub fn background_for(&self, id: u32) -> Color {
        let r = (id.wrapping_mul(GALLERY_HUE_STEP) % 255) as u8;
        Color::rgb(r, GALLERY_GREEN, GALLERY_BLUE)
    }
}
