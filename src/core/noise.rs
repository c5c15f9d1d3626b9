use rand::prelude::*;
use std::f32::consts::PI;

const TABLE_MASK: usize = 4095; // table holds TABLE_MASK + 1 entries
const Y_WRAP_BITS: u32 = 4;
const Y_WRAP: usize = 1 << Y_WRAP_BITS;
const DEFAULT_OCTAVES: u32 = 4;
const DEFAULT_FALLOFF: f32 = 0.5;

/// A smooth 2D scalar field with values in `[0, 1]`.
///
/// Coordinates are f64 so a time axis that has run for days still advances
/// smoothly; only the lattice fractions drop to f32.
pub trait NoiseField {
    fn sample(&self, x: f64, y: f64) -> f32;
}

impl<F: Fn(f64, f64) -> f32> NoiseField for F {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f32 {
        self(x, y)
    }
}

/// Multi-octave lattice value noise over a seeded random table.
///
/// Each octave cosine-interpolates between table values at integer lattice
/// points; octaves double in frequency and are weighted by `falloff^k`.
/// With the default 4 octaves at 0.5 falloff the output stays in `[0, 0.9375)`.
/// Negative coordinates are mirrored to positive ones.
#[derive(Clone, Debug)]
pub struct ValueNoise {
    table: Vec<f32>,
    octaves: u32,
    falloff: f32,
}

impl ValueNoise {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let table = (0..=TABLE_MASK).map(|_| rng.gen::<f32>()).collect();
        Self {
            table,
            octaves: DEFAULT_OCTAVES,
            falloff: DEFAULT_FALLOFF,
        }
    }

    /// Adjust octave count (at least 1) and per-octave amplitude falloff (clamped to 0..1).
    pub fn with_detail(mut self, octaves: u32, falloff: f32) -> Self {
        self.octaves = octaves.max(1);
        self.falloff = falloff.clamp(0.0, 1.0);
        self
    }

    #[inline]
    fn at(&self, offset: usize) -> f32 {
        self.table[offset & TABLE_MASK]
    }
}

#[inline]
fn scaled_cosine(t: f32) -> f32 {
    0.5 * (1.0 - (t * PI).cos())
}

impl NoiseField for ValueNoise {
    fn sample(&self, x: f64, y: f64) -> f32 {
        let (x, y) = (x.abs(), y.abs());
        let mut xi = x.floor() as usize;
        let mut yi = y.floor() as usize;
        let mut xf = (x - x.floor()) as f32;
        let mut yf = (y - y.floor()) as f32;

        let mut r = 0.0;
        let mut amp = 0.5;
        for _ in 0..self.octaves {
            let of = xi.wrapping_add(yi << Y_WRAP_BITS);
            let rx = scaled_cosine(xf);
            let ry = scaled_cosine(yf);

            let mut n1 = self.at(of);
            n1 += rx * (self.at(of.wrapping_add(1)) - n1);
            let mut n2 = self.at(of.wrapping_add(Y_WRAP));
            n2 += rx * (self.at(of.wrapping_add(Y_WRAP + 1)) - n2);
            n1 += ry * (n2 - n1);

            r += n1 * amp;
            amp *= self.falloff;

            xi <<= 1;
            xf *= 2.0;
            yi <<= 1;
            yf *= 2.0;
            if xf >= 1.0 {
                xi += 1;
                xf -= 1.0;
            }
            if yf >= 1.0 {
                yi += 1;
                yf -= 1.0;
            }
        }
        r
    }
}
