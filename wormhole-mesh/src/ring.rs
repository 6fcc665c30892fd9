//! Single ring generation
//!
//! A ring is one circular cross-section of the tunnel: `subdivs` vertices
//! evenly spaced by angle around the Z axis at a fixed `z`.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

use crate::error::{WormholeError, WormholeResult};
use crate::params::MIN_RING_SUBDIVS;

/// Vertex positions and normals of one ring, in angular order
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
}

impl Ring {
    /// Number of vertices in the ring
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Generate one ring of the tunnel
///
/// # Arguments
/// * `diameter` - Nominal ring diameter (> 0.0)
/// * `variance` - Radial jitter half-range; each vertex radius is drawn from
///   `[diameter / 2 - variance, diameter / 2 + variance)`
/// * `subdivs` - Vertices in the ring (min 3)
/// * `z` - Axial position of the ring
/// * `rng` - Source of jitter; one draw per vertex, even when `variance` is 0
///
/// Normals are the raw `(cos, sin, z)` vectors and are not renormalized.
pub fn generate_ring<R: Rng + ?Sized>(
    diameter: f32,
    variance: f32,
    subdivs: u32,
    z: f32,
    rng: &mut R,
) -> WormholeResult<Ring> {
    if subdivs < MIN_RING_SUBDIVS {
        return Err(WormholeError::invalid(format!(
            "generate_ring: subdivs must be at least {}, got {}",
            MIN_RING_SUBDIVS, subdivs
        )));
    }
    if !diameter.is_finite() || diameter <= 0.0 {
        return Err(WormholeError::invalid(format!(
            "generate_ring: diameter must be finite and > 0, got {}",
            diameter
        )));
    }
    if !variance.is_finite() || variance < 0.0 {
        return Err(WormholeError::invalid(format!(
            "generate_ring: variance must be finite and >= 0, got {}",
            variance
        )));
    }
    if !z.is_finite() {
        return Err(WormholeError::invalid("generate_ring: z must be finite"));
    }

    let mut positions = Vec::with_capacity(subdivs as usize);
    let mut normals = Vec::with_capacity(subdivs as usize);
    let half = diameter / 2.0;

    for j in 0..subdivs {
        let jitter = 2.0 * variance * rng.random::<f32>() - variance;
        let radius = half + jitter;

        let angle = 2.0 * PI * j as f32 / subdivs as f32;
        let x = angle.cos();
        let y = angle.sin();

        positions.push(Vec3::new(x * radius, y * radius, z));
        normals.push(Vec3::new(x, y, z));
    }

    Ok(Ring { positions, normals })
}
