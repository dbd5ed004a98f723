//! Smooth value noise for the blob outline
//!
//! The scene builder only sees the `Noise` trait, so tests can swap in a flat
//! field and get a perfect circle back.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A smooth scalar field in [0, 1]
pub trait Noise {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32;
}

/// Noise that is the same everywhere
#[derive(Debug, Clone, Copy)]
pub struct FlatNoise(pub f32);

impl Noise for FlatNoise {
    fn sample(&self, _x: f32, _y: f32, _z: f32) -> f32 {
        self.0
    }
}

const TABLE_SIZE: usize = 256;
const OCTAVES: u32 = 4;
const FALLOFF: f32 = 0.5;

/// Seeded lattice value noise, summed over a few octaves
#[derive(Debug, Clone)]
pub struct ValueNoise {
    perm: [u8; TABLE_SIZE],
    values: [f32; TABLE_SIZE],
}

impl ValueNoise {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut perm = [0u8; TABLE_SIZE];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = i as u8;
        }
        perm.shuffle(&mut rng);

        let mut values = [0.0f32; TABLE_SIZE];
        for v in values.iter_mut() {
            *v = rng.random::<f32>();
        }

        Self { perm, values }
    }

    #[inline]
    fn hash(&self, x: i32) -> usize {
        self.perm[(x & 0xff) as usize] as usize
    }

    #[inline]
    fn lattice(&self, x: i32, y: i32, z: i32) -> f32 {
        let h = self.hash(self.hash(self.hash(x) as i32 + y) as i32 + z);
        self.values[h]
    }

    /// Single octave, trilinear blend with smoothstep easing
    fn octave(&self, x: f32, y: f32, z: f32) -> f32 {
        let (x0, y0, z0) = (x.floor(), y.floor(), z.floor());
        let (ix, iy, iz) = (x0 as i32, y0 as i32, z0 as i32);
        let (fx, fy, fz) = (smooth(x - x0), smooth(y - y0), smooth(z - z0));

        let c000 = self.lattice(ix, iy, iz);
        let c100 = self.lattice(ix + 1, iy, iz);
        let c010 = self.lattice(ix, iy + 1, iz);
        let c110 = self.lattice(ix + 1, iy + 1, iz);
        let c001 = self.lattice(ix, iy, iz + 1);
        let c101 = self.lattice(ix + 1, iy, iz + 1);
        let c011 = self.lattice(ix, iy + 1, iz + 1);
        let c111 = self.lattice(ix + 1, iy + 1, iz + 1);

        let x00 = crate::lerp(c000, c100, fx);
        let x10 = crate::lerp(c010, c110, fx);
        let x01 = crate::lerp(c001, c101, fx);
        let x11 = crate::lerp(c011, c111, fx);

        let y0 = crate::lerp(x00, x10, fy);
        let y1 = crate::lerp(x01, x11, fy);

        crate::lerp(y0, y1, fz)
    }
}

#[inline]
fn smooth(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

impl Noise for ValueNoise {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        let mut sum = 0.0;
        let mut amp = 1.0;
        let mut norm = 0.0;
        let mut freq = 1.0;
        for _ in 0..OCTAVES {
            sum += self.octave(x * freq, y * freq, z * freq) * amp;
            norm += amp;
            amp *= FALLOFF;
            freq *= 2.0;
        }
        (sum / norm).clamp(0.0, 1.0)
    }
}
