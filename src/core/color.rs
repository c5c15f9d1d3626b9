// Color values used by the draw command list.
//
// Sketches think in HSB (hue 0..360, saturation/brightness/alpha 0..100) or
// plain 8-bit RGBA; the canvas backend only understands CSS color strings.

/// Hue/saturation/brightness triple selected by interaction state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Palette {
    pub const fn from_array(hsb: [f32; 3]) -> Self {
        Self {
            hue: hsb[0],
            saturation: hsb[1],
            brightness: hsb[2],
        }
    }

    #[inline]
    pub fn with_brightness(&self, brightness: f32) -> Color {
        Color::Hsb {
            h: self.hue,
            s: self.saturation,
            b: brightness,
            a: 100.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Hsb { h: f32, s: f32, b: f32, a: f32 },
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba { r, g, b, a: 255 }
    }

    /// Resolve to 8-bit RGBA.
    pub fn to_rgba(self) -> [u8; 4] {
        match self {
            Color::Rgba { r, g, b, a } => [r, g, b, a],
            Color::Hsb { h, s, b, a } => {
                let [r, g, bl] = hsb_to_rgb(h, s / 100.0, b / 100.0);
                [r, g, bl, unit_to_u8(a / 100.0)]
            }
        }
    }

    pub fn to_css(self) -> String {
        let [r, g, b, a] = self.to_rgba();
        if a == 255 {
            format!("rgb({r},{g},{b})")
        } else {
            format!("rgba({r},{g},{b},{:.3})", a as f32 / 255.0)
        }
    }
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// HSB/HSV to RGB. Hue in degrees (wrapped), `s` and `v` in 0..1 (clamped).
pub fn hsb_to_rgb(hue_deg: f32, s: f32, v: f32) -> [u8; 3] {
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);
    let h = hue_deg.rem_euclid(360.0) / 60.0;
    let i = h.floor() as i32;
    let f = h - i as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    let (r, g, b) = match i.rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    [unit_to_u8(r), unit_to_u8(g), unit_to_u8(b)]
}
