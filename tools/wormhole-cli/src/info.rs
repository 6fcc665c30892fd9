//! Info command - report mesh statistics without generating

use anyhow::{Context, Result};
use clap::Args;
use wormhole_mesh::TunnelParams;
use wormhole_mesh::buffers::COMPONENTS;

use crate::args::TunnelArgs;

/// Arguments for the info command
#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub tunnel: TunnelArgs,
}

/// Buffer sizes implied by a parameter set
#[derive(Debug, PartialEq, Eq)]
pub struct MeshStats {
    pub rings: usize,
    pub vertices: usize,
    pub triangles: usize,
    pub indices: usize,
    /// Bytes in each of the position, normal and color buffers
    pub attribute_bytes: usize,
    pub index_bytes: usize,
}

impl MeshStats {
    pub fn from_params(params: &TunnelParams) -> Self {
        let vertices = params.vertex_count();
        let indices = params.index_count();
        Self {
            rings: params.ring_count(),
            vertices,
            triangles: indices / 3,
            indices,
            attribute_bytes: vertices * COMPONENTS * size_of::<f32>(),
            index_bytes: indices * size_of::<u32>(),
        }
    }
}

/// Execute the info command
pub fn execute(args: InfoArgs) -> Result<()> {
    let resolved = args.tunnel.resolve()?;
    resolved
        .params
        .validate()
        .context("Invalid tunnel parameters")?;

    let params = &resolved.params;
    let stats = MeshStats::from_params(params);

    println!("Tunnel:");
    println!("  Length:     {}", params.length);
    println!("  Diameter:   {} -> {}", params.start_diameter, params.end_diameter);
    println!("  Variance:   {}", params.variance);
    println!("  Colors:     {}", params.colors.len());
    match resolved.seed {
        Some(seed) => println!("  Seed:       {}", seed),
        None => println!("  Seed:       (random)"),
    }
    println!();
    println!("Mesh:");
    println!("  Rings:      {}", stats.rings);
    println!("  Vertices:   {}", stats.vertices);
    println!("  Triangles:  {}", stats.triangles);
    println!("  Positions:  {} bytes", stats.attribute_bytes);
    println!("  Normals:    {} bytes", stats.attribute_bytes);
    println!("  Colors:     {} bytes", stats.attribute_bytes);
    println!("  Indices:    {} bytes", stats.index_bytes);
    Ok(())
}
