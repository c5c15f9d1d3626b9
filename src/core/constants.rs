// Animation tuning constants shared by the soundwave and gallery sketches.

// Soundwave layout
pub const BAR_COUNT: usize = 19;
pub const BAR_WIDTH_DIVISOR: f32 = 1.5; // barWidth = W / (N * 1.5)

// Click impulse
pub const IMPULSE_MAX: f32 = 1.0;
pub const IMPULSE_DECAY_PER_FRAME: f32 = 0.05; // linear, ~20 frames to idle
pub const IMPULSE_EPSILON: f32 = 1e-4; // residue below this snaps to 0

// Noise sampling
pub const NOISE_OCTAVES: u32 = 4;
pub const NOISE_FALLOFF: f32 = 0.5;
pub const NOISE_INDEX_SCALE: f32 = 0.2; // x step between neighbouring bars
pub const NOISE_TIME_DIVISOR_MS: f64 = 15_000.0; // 4 BPM tempo
pub const NOISE_SOURCE_RANGE: (f32, f32) = (0.2, 0.8);
pub const HEIGHT_TARGET_FRACTION: (f32, f32) = (0.1, 0.8);

// Wobble
pub const WOBBLE_INDEX_PHASE: f32 = 0.8;
pub const WOBBLE_FRAME_PHASE: f32 = 0.2;

// Bar shading
pub const EDGE_DARKEN: f32 = 40.0; // brightness drop from centre to edge
pub const GLOW_BLUR: f32 = 32.0;
pub const GLOW_BRIGHTNESS: f32 = 80.0;
pub const GLOW_ALPHA: f32 = 50.0;
pub const STROKE_WEIGHT: f32 = 1.0;

// Palettes (hue 0..360, saturation/brightness 0..100)
pub const DEFAULT_PALETTE: [f32; 3] = [250.0, 50.0, 100.0];
pub const HOVER_PALETTE: [f32; 3] = [270.0, 80.0, 100.0]; // purple
pub const SOUNDWAVE_BACKGROUND: [u8; 3] = [0x21, 0x21, 0x21];

// Gallery
pub const ARTWORK_SIZE: (f32, f32) = (1920.0, 1080.0);
pub const ARTWORK_SQUARE_SIDE: f32 = 400.0;
pub const ROTATION_STEP_RAD: f64 = 0.01;
pub const GALLERY_HUE_STEP: u32 = 60; // red channel = (id * 60) % 255
pub const GALLERY_GREEN: u8 = 100;
pub const GALLERY_BLUE: u8 = 150;
pub const SQUARE_FILL: [u8; 4] = [255, 255, 255, 150];
