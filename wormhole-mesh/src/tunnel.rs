//! Tunnel assembly
//!
//! Stacks rings along +Z, interpolating the diameter linearly from
//! `start_diameter` at ring 0 to `end_diameter` at the last ring.

use rand::Rng;
use tracing::debug;

use crate::error::WormholeResult;
use crate::params::TunnelParams;
use crate::ring::{Ring, generate_ring};

/// Every ring of a tunnel, ordered from ring 0 (z = 0) to the far end
#[derive(Debug, Clone, PartialEq)]
pub struct Tunnel {
    pub rings: Vec<Ring>,
}

impl Tunnel {
    /// Number of rings (`tunnel_subdivs + 1`)
    #[inline]
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Total vertices across all rings
    pub fn vertex_count(&self) -> usize {
        self.rings.iter().map(Ring::len).sum()
    }
}

/// Axial position and diameter of ring `i`
///
/// `tunnel_subdivs` must be non-zero; [`assemble_tunnel`] checks this
/// before calling.
#[inline]
pub fn ring_placement(params: &TunnelParams, i: u32) -> (f32, f32) {
    let bands = params.tunnel_subdivs as f32;
    let delta_z = params.length / bands;
    let delta_diameter = (params.end_diameter - params.start_diameter) / bands;

    let z = i as f32 * delta_z;
    let diameter = params.start_diameter + i as f32 * delta_diameter;
    (z, diameter)
}

/// Build every ring of the tunnel
///
/// Rejects invalid parameters (including `tunnel_subdivs == 0`) before any
/// ring is generated, so no division by zero can reach the output.
pub fn assemble_tunnel<R: Rng + ?Sized>(
    params: &TunnelParams,
    rng: &mut R,
) -> WormholeResult<Tunnel> {
    params.validate()?;

    let mut rings = Vec::with_capacity(params.ring_count());
    for i in 0..=params.tunnel_subdivs {
        let (z, diameter) = ring_placement(params, i);
        rings.push(generate_ring(
            diameter,
            params.variance,
            params.ring_subdivs,
            z,
            rng,
        )?);
    }

    debug!(
        "assemble_tunnel: {} rings x {} vertices, length {}",
        rings.len(),
        params.ring_subdivs,
        params.length
    );

    Ok(Tunnel { rings })
}
