//! Banded color gradient along the tunnel
//!
//! Colors vary only along the tunnel axis: each ring gets one color, shared
//! by all of its vertices. The gradient walks the color stops pairwise,
//! giving each pair `tunnel_subdivs / (stops - 1)` rings ("divs per color").
//!
//! When divs per color is not a whole number the segments end up with
//! unequal ring counts and the last ring may stop short of the final color
//! stop. That drift is part of the look and is left as-is.

use crate::color::Rgb;
use crate::error::{WormholeError, WormholeResult};

/// One color per ring, ring 0 first
pub type ColorTable = Vec<Rgb>;

/// Compute the color of every ring
///
/// # Arguments
/// * `stops` - Ordered color stops (at least one)
/// * `tunnel_subdivs` - Bands along the tunnel (at least one); the table has
///   `tunnel_subdivs + 1` entries
///
/// # Returns
/// The per-ring color table. With two stops, ring 0 is the first stop and
/// the last ring is the second.
pub fn compute_colors(stops: &[Rgb], tunnel_subdivs: u32) -> WormholeResult<ColorTable> {
    if stops.is_empty() {
        return Err(WormholeError::invalid(
            "compute_colors: at least one color stop is required",
        ));
    }
    if tunnel_subdivs == 0 {
        return Err(WormholeError::invalid(
            "compute_colors: tunnel_subdivs must be at least 1",
        ));
    }

    let ring_count = tunnel_subdivs as usize + 1;

    if stops.len() == 1 {
        return Ok(vec![stops[0]; ring_count]);
    }

    // Work in f64 so long tunnels don't accumulate drift in the deltas
    let segments = stops.len() - 1;
    let divs_per_color = f64::from(tunnel_subdivs) / segments as f64;

    // Per-channel change per ring for each pair of stops
    let deltas: Vec<[f64; 3]> = stops
        .windows(2)
        .map(|pair| {
            let (from, to) = (channels(pair[0]), channels(pair[1]));
            [
                (from[0] - to[0]) / divs_per_color,
                (from[1] - to[1]) / divs_per_color,
                (from[2] - to[2]) / divs_per_color,
            ]
        })
        .collect();

    let mut table = Vec::with_capacity(ring_count);
    let mut cur_color = 0usize;
    let mut color_divs_used = 0u32;

    for _ in 0..ring_count {
        let base = channels(stops[cur_color]);
        let delta = deltas[cur_color];
        let used = f64::from(color_divs_used);

        table.push(Rgb::new(
            channel(base[0] - delta[0] * used),
            channel(base[1] - delta[1] * used),
            channel(base[2] - delta[2] * used),
        ));

        // Advance to the next pair once this one has used its share of rings.
        // The last pair keeps going if rings remain.
        if f64::from(color_divs_used + 1) > divs_per_color && cur_color + 1 < segments {
            cur_color += 1;
            color_divs_used = 0;
        } else {
            color_divs_used += 1;
        }
    }

    Ok(table)
}

#[inline]
fn channels(color: Rgb) -> [f64; 3] {
    [f64::from(color.r), f64::from(color.g), f64::from(color.b)]
}

#[inline]
fn channel(value: f64) -> f32 {
    (value as f32).clamp(0.0, 1.0)
}
