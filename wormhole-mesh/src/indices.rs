//! Triangle topology connecting adjacent rings
//!
//! Each band between ring `l` and ring `l + 1` is tessellated into quads,
//! two triangles each. The last quad of a band wraps back to the first
//! vertex of the same ring, closing the tube. The ends are left open.
//!
//! ```text
//! a---b    ring l
//! | / |
//! c---d    ring l + 1
//! ```
//!
//! Triangles are emitted as `(b, c, a)` then `(d, c, b)`. The winding is
//! fixed; renderers cull back faces based on it.

use crate::error::{WormholeError, WormholeResult};
use crate::params::{MIN_RING_SUBDIVS, MIN_TUNNEL_SUBDIVS};

/// Build the index buffer for a tunnel
///
/// # Arguments
/// * `tunnel_subdivs` - Bands along the tunnel (min 1)
/// * `ring_subdivs` - Vertices per ring (min 3)
///
/// # Returns
/// `6 * tunnel_subdivs * ring_subdivs` indices, every one below
/// `(tunnel_subdivs + 1) * ring_subdivs`
pub fn build_indices(tunnel_subdivs: u32, ring_subdivs: u32) -> WormholeResult<Vec<u32>> {
    if ring_subdivs < MIN_RING_SUBDIVS {
        return Err(WormholeError::invalid(format!(
            "build_indices: ring_subdivs must be at least {}, got {}",
            MIN_RING_SUBDIVS, ring_subdivs
        )));
    }
    if tunnel_subdivs < MIN_TUNNEL_SUBDIVS {
        return Err(WormholeError::invalid(format!(
            "build_indices: tunnel_subdivs must be at least {}, got {}",
            MIN_TUNNEL_SUBDIVS, tunnel_subdivs
        )));
    }

    let vertex_count = (u64::from(tunnel_subdivs) + 1) * u64::from(ring_subdivs);
    if vertex_count > u64::from(u32::MAX) {
        return Err(WormholeError::invalid(format!(
            "build_indices: {} vertices do not fit a u32 index buffer",
            vertex_count
        )));
    }

    let rs = ring_subdivs;
    let mut indices = Vec::with_capacity(6 * tunnel_subdivs as usize * rs as usize);

    for l in 0..tunnel_subdivs {
        for r in 0..rs {
            let a = rs * l + r;
            let b = if r == rs - 1 { a - (rs - 1) } else { a + 1 };
            let c = a + rs;
            let d = b + rs;

            indices.extend_from_slice(&[b, c, a]);
            indices.extend_from_slice(&[d, c, b]);
        }
    }

    Ok(indices)
}
