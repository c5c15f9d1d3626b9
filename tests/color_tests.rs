// Host-side tests for color conversion.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod clock {
        include!("../src/core/clock.rs");
    }
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod draw {
        include!("../src/core/draw.rs");
    }
    pub mod gallery {
        include!("../src/core/gallery.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod noise {
        include!("../src/core/noise.rs");
    }
    pub mod soundwave {
        include!("../src/core/soundwave.rs");
    }
}

use crate::core::color::*;

#[test]
fn primaries_convert_exactly() {
    assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), [255, 0, 0]);
    assert_eq!(hsb_to_rgb(120.0, 1.0, 1.0), [0, 255, 0]);
    assert_eq!(hsb_to_rgb(240.0, 1.0, 1.0), [0, 0, 255]);
    assert_eq!(hsb_to_rgb(360.0, 1.0, 1.0), [255, 0, 0]);
    assert_eq!(hsb_to_rgb(-120.0, 1.0, 1.0), [0, 0, 255]);
}

#[test]
fn zero_saturation_is_grey() {
    for hue in [0.0, 77.0, 250.0] {
        assert_eq!(hsb_to_rgb(hue, 0.0, 0.5), [128, 128, 128]);
        assert_eq!(hsb_to_rgb(hue, 0.0, 0.0), [0, 0, 0]);
        assert_eq!(hsb_to_rgb(hue, 0.0, 1.0), [255, 255, 255]);
    }
}

#[test]
fn out_of_range_inputs_clamp() {
    assert_eq!(hsb_to_rgb(0.0, 2.0, 1.5), [255, 0, 0]);
    assert_eq!(hsb_to_rgb(0.0, 1.0, -0.2), [0, 0, 0]);
}

#[test]
fn default_palette_is_a_light_violet() {
    let [r, g, b, a] = Palette::from_array([250.0, 50.0, 100.0])
        .with_brightness(100.0)
        .to_rgba();
    assert_eq!(a, 255);
    assert_eq!(b, 255);
    assert!(r > g && r < b);
}

#[test]
fn css_strings() {
    assert_eq!(Color::rgb(0x21, 0x21, 0x21).to_css(), "rgb(33,33,33)");
    assert_eq!(
        Color::Rgba {
            r: 255,
            g: 255,
            b: 255,
            a: 150
        }
        .to_css(),
        "rgba(255,255,255,0.588)"
    );
    let glow = Color::Hsb {
        h: 0.0,
        s: 100.0,
        b: 80.0,
        a: 50.0,
    };
    assert_eq!(glow.to_rgba(), [204, 0, 0, 128]);
    assert_eq!(glow.to_css(), "rgba(204,0,0,0.502)");
}
