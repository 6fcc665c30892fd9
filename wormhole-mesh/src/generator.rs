//! Generation pipeline and regeneration commands
//!
//! [`generate`] runs the whole pipeline once and returns fresh buffers.
//! [`TunnelGenerator`] keeps the last result around so that a change to the
//! color stops alone only recomputes the color buffer.

use rand::Rng;
use tracing::debug;

use crate::buffers::{MeshBuffers, flatten_colors, flatten_normals, flatten_positions};
use crate::color::Rgb;
use crate::error::{WormholeError, WormholeResult};
use crate::gradient::compute_colors;
use crate::indices::build_indices;
use crate::params::TunnelParams;
use crate::tunnel::assemble_tunnel;

/// What to rebuild
#[derive(Debug, Clone, PartialEq)]
pub enum Regenerate {
    /// Rebuild geometry, topology and colors from new parameters
    All(TunnelParams),
    /// Replace the color stops and rebuild only the color buffer
    ColorsOnly(Vec<Rgb>),
}

/// Run the full pipeline: rings, colors, indices, flat buffers
///
/// Either returns complete buffers or fails before producing any.
pub fn generate<R: Rng + ?Sized>(
    params: &TunnelParams,
    rng: &mut R,
) -> WormholeResult<MeshBuffers> {
    let tunnel = assemble_tunnel(params, rng)?;
    let table = compute_colors(&params.colors, params.tunnel_subdivs)?;
    let indices = build_indices(params.tunnel_subdivs, params.ring_subdivs)?;

    let buffers = MeshBuffers {
        positions: flatten_positions(&tunnel),
        normals: flatten_normals(&tunnel),
        colors: flatten_colors(&table, params.ring_subdivs),
        indices,
    };

    debug!(
        "generate: {} vertices, {} triangles",
        buffers.vertex_count(),
        buffers.triangle_count()
    );

    Ok(buffers)
}

/// Run only the color stage for `params`
pub fn generate_colors(params: &TunnelParams) -> WormholeResult<Vec<f32>> {
    let table = compute_colors(&params.colors, params.tunnel_subdivs)?;
    Ok(flatten_colors(&table, params.ring_subdivs))
}

/// Holds the current parameters, jitter source and last generated mesh
pub struct TunnelGenerator<R: Rng> {
    params: TunnelParams,
    rng: R,
    buffers: MeshBuffers,
}

impl<R: Rng> TunnelGenerator<R> {
    /// Create a generator and perform the initial full build
    pub fn new(params: TunnelParams, mut rng: R) -> WormholeResult<Self> {
        let buffers = generate(&params, &mut rng)?;
        Ok(Self {
            params,
            rng,
            buffers,
        })
    }

    /// Parameters of the current mesh
    pub fn params(&self) -> &TunnelParams {
        &self.params
    }

    /// Most recently generated buffers
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// Hand the current buffers to the caller
    pub fn into_buffers(self) -> MeshBuffers {
        self.buffers
    }

    /// Apply a regeneration command
    ///
    /// On error the generator keeps its previous parameters and buffers.
    pub fn apply(&mut self, command: Regenerate) -> WormholeResult<&MeshBuffers> {
        match command {
            Regenerate::All(params) => {
                let buffers = generate(&params, &mut self.rng)?;
                self.params = params;
                self.buffers = buffers;
            }
            Regenerate::ColorsOnly(colors) => {
                if colors.is_empty() {
                    return Err(WormholeError::invalid(
                        "colors must contain at least one stop",
                    ));
                }
                let params = TunnelParams {
                    colors,
                    ..self.params.clone()
                };
                params.validate()?;

                self.buffers.colors = generate_colors(&params)?;
                self.params = params;
                debug!("apply: rebuilt colors only");
            }
        }

        Ok(&self.buffers)
    }
}
