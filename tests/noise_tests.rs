// Host-side tests for the value-noise field.
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

use crate::core::noise::{NoiseField, ValueNoise};

fn grid() -> impl Iterator<Item = (f64, f64)> {
    (0..40).flat_map(|i| (0..40).map(move |j| (i as f64 * 0.173, j as f64 * 0.291)))
}

#[test]
fn same_seed_same_field() {
    let a = ValueNoise::new(42);
    let b = ValueNoise::new(42);
    for (x, y) in grid() {
        assert_eq!(a.sample(x, y), b.sample(x, y));
    }
}

#[test]
fn different_seeds_differ() {
    let a = ValueNoise::new(1);
    let b = ValueNoise::new(2);
    assert!(grid().any(|(x, y)| a.sample(x, y) != b.sample(x, y)));
}

#[test]
fn output_stays_in_unit_interval() {
    let n = ValueNoise::new(9);
    for (x, y) in grid() {
        let v = n.sample(x, y);
        assert!((0.0..1.0).contains(&v), "({x},{y}) -> {v}");
    }
}

#[test]
fn single_octave_halves_the_ceiling() {
    let n = ValueNoise::new(9).with_detail(1, 0.5);
    for (x, y) in grid() {
        assert!(n.sample(x, y) < 0.5);
    }
}

#[test]
fn small_time_steps_change_little() {
    let n = ValueNoise::new(3);
    for i in 0..10 {
        let x = i as f64 * 0.2;
        let mut t = 0.0f64;
        while t < 3.0 {
            let d = (n.sample(x, t + 1e-3) - n.sample(x, t)).abs();
            assert!(d < 0.01, "jump {d} at x={x} t={t}");
            t += 0.05;
        }
    }
}

#[test]
fn late_time_axis_still_moves_smoothly() {
    // five days of elapsed time at 15 s per unit
    let n = ValueNoise::new(11);
    let t0 = 5.0 * 86_400.0 / 15.0;
    let frame = 1000.0 / 60.0 / 15_000.0;
    let mut changed = 0;
    for k in 0..120 {
        let a = n.sample(1.2, t0 + k as f64 * frame);
        let b = n.sample(1.2, t0 + (k + 1) as f64 * frame);
        assert!((a - b).abs() < 0.01);
        if a != b {
            changed += 1;
        }
    }
    assert!(changed > 60, "only {changed} of 120 frames moved");
}

#[test]
fn config_detail_reaches_the_field() {
    let mut cfg = crate::core::config::SoundwaveConfig::default();
    cfg.noise_octaves = 1;
    let n = cfg.noise(9);
    assert!(grid().all(|(x, y)| n.sample(x, y) < 0.5));
    let full = crate::core::config::SoundwaveConfig::default().noise(9);
    assert!(grid().any(|(x, y)| full.sample(x, y) != n.sample(x, y)));
}

#[test]
fn negative_coordinates_mirror() {
    let n = ValueNoise::new(5);
    for (x, y) in grid() {
        assert_eq!(n.sample(-x, y), n.sample(x, y));
        assert_eq!(n.sample(x, -y), n.sample(x, y));
    }
}

#[test]
fn closures_act_as_fields() {
    let f = |x: f64, y: f64| (x + y).fract() as f32;
    assert_eq!(f.sample(0.25, 0.5), 0.75);
}
