//! Tunnel generation parameters
//!
//! [`TunnelParams`] is the immutable record every generation call takes.
//! Generation never adjusts parameters itself: invalid values are rejected
//! by [`TunnelParams::validate`]. Front ends that want the forgiving
//! behavior of an interactive editor can call [`TunnelParams::clamped`] first.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::Rgb;
use crate::error::{WormholeError, WormholeResult};

/// Smallest ring that still forms a polygon
pub const MIN_RING_SUBDIVS: u32 = 3;

/// Smallest tunnel (one band between two rings)
pub const MIN_TUNNEL_SUBDIVS: u32 = 1;

/// Default gradient: magenta fading to black
pub const DEFAULT_COLORS: [u32; 2] = [0xff00ff, 0x000000];

/// Parameters for one tunnel generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunnelParams {
    /// Distance between the first and last ring along +Z
    pub length: f32,
    /// Diameter of ring 0
    pub start_diameter: f32,
    /// Diameter of the last ring
    pub end_diameter: f32,
    /// Half-range of the per-vertex radial jitter
    pub variance: f32,
    /// Vertices per ring
    pub ring_subdivs: u32,
    /// Bands along the tunnel (ring count is one more)
    pub tunnel_subdivs: u32,
    /// Ordered color stops, interpolated along the tunnel
    pub colors: Vec<Rgb>,
}

impl Default for TunnelParams {
    fn default() -> Self {
        Self {
            length: 200.0,
            start_diameter: 40.0,
            end_diameter: 40.0,
            variance: 0.1,
            ring_subdivs: 200,
            tunnel_subdivs: 200,
            colors: DEFAULT_COLORS.iter().copied().map(Rgb::from_hex).collect(),
        }
    }
}

impl TunnelParams {
    /// Number of rings along the tunnel
    #[inline]
    pub fn ring_count(&self) -> usize {
        self.tunnel_subdivs as usize + 1
    }

    /// Total vertex count of the generated mesh
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.ring_count() * self.ring_subdivs as usize
    }

    /// Total index count of the generated mesh (6 per band segment)
    #[inline]
    pub fn index_count(&self) -> usize {
        6 * self.tunnel_subdivs as usize * self.ring_subdivs as usize
    }

    /// Check every parameter against the generator's requirements.
    ///
    /// Returns [`WormholeError::InvalidParameter`] naming the first bad field.
    pub fn validate(&self) -> WormholeResult<()> {
        require_positive("length", self.length)?;
        require_positive("start_diameter", self.start_diameter)?;
        require_positive("end_diameter", self.end_diameter)?;

        if !self.variance.is_finite() || self.variance < 0.0 {
            return Err(WormholeError::invalid(format!(
                "variance must be finite and >= 0, got {}",
                self.variance
            )));
        }

        if self.ring_subdivs < MIN_RING_SUBDIVS {
            return Err(WormholeError::invalid(format!(
                "ring_subdivs must be at least {}, got {}",
                MIN_RING_SUBDIVS, self.ring_subdivs
            )));
        }

        if self.tunnel_subdivs < MIN_TUNNEL_SUBDIVS {
            return Err(WormholeError::invalid(format!(
                "tunnel_subdivs must be at least {}, got {}",
                MIN_TUNNEL_SUBDIVS, self.tunnel_subdivs
            )));
        }

        if self.colors.is_empty() {
            return Err(WormholeError::invalid("colors must contain at least one stop"));
        }

        if let Some(i) = self.colors.iter().position(|c| !c.is_normalized()) {
            return Err(WormholeError::invalid(format!(
                "color stop {} has a channel outside [0, 1]",
                i
            )));
        }

        if u32::try_from(self.vertex_count()).is_err() {
            return Err(WormholeError::invalid(format!(
                "{} vertices do not fit a u32 index buffer",
                self.vertex_count()
            )));
        }

        Ok(())
    }

    /// Return a copy with every field pulled into its usable range.
    ///
    /// Follows the limits an interactive editor enforces: length and both
    /// diameters at least 1, variance between 0 and half the start diameter,
    /// at least 3 vertices per ring and 1 band. An empty color list falls
    /// back to [`DEFAULT_COLORS`]. Each adjustment is logged.
    pub fn clamped(&self) -> Self {
        let mut params = self.clone();

        params.length = clamp_min("length", params.length, 1.0);
        params.start_diameter = clamp_min("start_diameter", params.start_diameter, 1.0);
        params.end_diameter = clamp_min("end_diameter", params.end_diameter, 1.0);

        let max_variance = params.start_diameter / 2.0;
        if !params.variance.is_finite() || params.variance < 0.0 {
            warn!("clamped: variance must be >= 0.0, clamping to 0.0");
            params.variance = 0.0;
        } else if params.variance > max_variance {
            warn!(
                "clamped: variance {} exceeds start_diameter / 2, clamping to {}",
                params.variance, max_variance
            );
            params.variance = max_variance;
        }

        if params.ring_subdivs < MIN_RING_SUBDIVS {
            warn!(
                "clamped: ring_subdivs must be >= {}, clamping",
                MIN_RING_SUBDIVS
            );
            params.ring_subdivs = MIN_RING_SUBDIVS;
        }

        if params.tunnel_subdivs < MIN_TUNNEL_SUBDIVS {
            warn!(
                "clamped: tunnel_subdivs must be >= {}, clamping",
                MIN_TUNNEL_SUBDIVS
            );
            params.tunnel_subdivs = MIN_TUNNEL_SUBDIVS;
        }

        if params.colors.is_empty() {
            warn!("clamped: no color stops given, using defaults");
            params.colors = DEFAULT_COLORS.iter().copied().map(Rgb::from_hex).collect();
        }

        params
    }
}

fn require_positive(name: &str, value: f32) -> WormholeResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WormholeError::invalid(format!(
            "{} must be finite and > 0, got {}",
            name, value
        )))
    }
}

fn clamp_min(name: &str, value: f32, min: f32) -> f32 {
    if value.is_finite() && value >= min {
        value
    } else {
        warn!("clamped: {} must be >= {}, clamping to {}", name, min, min);
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid(result: WormholeResult<()>) -> bool {
        matches!(result, Err(WormholeError::InvalidParameter(_)))
    }

    #[test]
    fn test_default_is_valid() {
        let params = TunnelParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.ring_count(), 201);
        assert_eq!(params.vertex_count(), 201 * 200);
        assert_eq!(params.index_count(), 6 * 200 * 200);
    }

    #[test]
    fn test_rejects_degenerate_subdivisions() {
        let params = TunnelParams {
            tunnel_subdivs: 0,
            ..Default::default()
        };
        assert!(is_invalid(params.validate()));

        let params = TunnelParams {
            ring_subdivs: 2,
            ..Default::default()
        };
        assert!(is_invalid(params.validate()));
    }

    #[test]
    fn test_rejects_vertex_count_over_u32() {
        let params = TunnelParams {
            ring_subdivs: u32::MAX,
            tunnel_subdivs: 1,
            ..Default::default()
        };
        assert!(is_invalid(params.validate()));
    }

    #[test]
    fn test_rejects_empty_colors() {
        let params = TunnelParams {
            colors: Vec::new(),
            ..Default::default()
        };
        assert!(is_invalid(params.validate()));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        for (length, start, end, variance) in [
            (0.0, 10.0, 10.0, 0.0),
            (-5.0, 10.0, 10.0, 0.0),
            (10.0, 0.0, 10.0, 0.0),
            (10.0, 10.0, -1.0, 0.0),
            (10.0, 10.0, 10.0, -0.5),
            (f32::NAN, 10.0, 10.0, 0.0),
            (10.0, f32::INFINITY, 10.0, 0.0),
        ] {
            let params = TunnelParams {
                length,
                start_diameter: start,
                end_diameter: end,
                variance,
                ..Default::default()
            };
            assert!(
                is_invalid(params.validate()),
                "accepted length={} start={} end={} variance={}",
                length,
                start,
                end,
                variance
            );
        }
    }

    #[test]
    fn test_rejects_out_of_range_color() {
        let params = TunnelParams {
            colors: vec![Rgb::new(0.0, 1.2, 0.0)],
            ..Default::default()
        };
        assert!(is_invalid(params.validate()));
    }

    #[test]
    fn test_clamped_fixes_everything() {
        let params = TunnelParams {
            length: 0.0,
            start_diameter: -4.0,
            end_diameter: 0.5,
            variance: 10.0,
            ring_subdivs: 1,
            tunnel_subdivs: 0,
            colors: Vec::new(),
        };

        let clamped = params.clamped();
        assert!(clamped.validate().is_ok());
        assert_eq!(clamped.length, 1.0);
        assert_eq!(clamped.start_diameter, 1.0);
        assert_eq!(clamped.end_diameter, 1.0);
        assert_eq!(clamped.variance, 0.5);
        assert_eq!(clamped.ring_subdivs, 3);
        assert_eq!(clamped.tunnel_subdivs, 1);
        assert_eq!(clamped.colors.len(), 2);
    }

    #[test]
    fn test_clamped_keeps_valid_params() {
        let params = TunnelParams::default();
        assert_eq!(params.clamped(), params);
    }
}
