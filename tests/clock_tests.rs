// Host-side tests for the per-canvas frame clock.
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

use crate::core::clock::*;
use instant::Instant;
use std::time::Duration;

#[test]
fn first_frame_is_one() {
    let start = Instant::now();
    let mut clock = FrameClock::new(start);
    let f = clock.tick(start);
    assert_eq!(f.frame_count, 1);
    assert_eq!(f.elapsed_ms, 0.0);
}

#[test]
fn elapsed_tracks_wall_time() {
    let start = Instant::now();
    let mut clock = FrameClock::new(start);
    let f = clock.tick(start + Duration::from_millis(1500));
    assert!((f.elapsed_ms - 1500.0).abs() < 1e-6);
    let g = clock.tick(start + Duration::from_millis(15_000));
    assert_eq!(g.frame_count, 2);
    // one full noise-time unit
    assert!((g.elapsed_ms / 15_000.0 - 1.0).abs() < 1e-9);
}

#[test]
fn time_before_start_reads_as_zero() {
    let now = Instant::now();
    let mut clock = FrameClock::new(now + Duration::from_secs(1));
    assert_eq!(clock.tick(now).elapsed_ms, 0.0);
}

#[test]
fn clocks_are_independent() {
    let start = Instant::now();
    let mut a = FrameClock::new(start);
    let mut b = FrameClock::new(start);
    for _ in 0..4 {
        a.tick(start);
    }
    assert_eq!(b.tick(start).frame_count, 1);
    assert_eq!(a.tick(start).frame_count, 5);
}
