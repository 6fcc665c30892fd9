//! Procedural wormhole tunnel meshes
//!
//! Turns a handful of scalar parameters into flat position, normal, color
//! and index buffers for an indexed triangle mesh shaped like an open tube.
//!
//! # Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Ring generation | [`ring`] | One ring's positions and normals |
//! | Tunnel assembly | [`tunnel`] | `tunnel_subdivs + 1` rings along +Z |
//! | Color gradient | [`gradient`] | One color per ring |
//! | Index building | [`indices`] | Triangle list, `6 * L * R` indices |
//! | Buffer packing | [`buffers`] | Flat `f32`/`u32` buffers |
//!
//! Every stage is a pure function of its inputs plus an injected `rand::Rng`
//! for radial jitter.
//!
//! # Example
//! ```
//! use wormhole_mesh::{TunnelParams, generate, seeded_rng};
//!
//! let params = TunnelParams {
//!     ring_subdivs: 16,
//!     tunnel_subdivs: 8,
//!     ..Default::default()
//! };
//!
//! let mesh = generate(&params, &mut seeded_rng(42))?;
//! assert_eq!(mesh.vertex_count(), 9 * 16);
//! assert_eq!(mesh.indices.len(), 6 * 8 * 16);
//! # Ok::<(), wormhole_mesh::WormholeError>(())
//! ```
//!
//! # Regeneration
//!
//! [`TunnelGenerator`] keeps the last mesh so a color change can skip the
//! geometry stages:
//!
//! ```
//! use wormhole_mesh::{Regenerate, Rgb, TunnelGenerator, TunnelParams, seeded_rng};
//!
//! let mut generator = TunnelGenerator::new(TunnelParams::default(), seeded_rng(1))?;
//! generator.apply(Regenerate::ColorsOnly(vec![Rgb::from_hex(0x00ffcc)]))?;
//! # Ok::<(), wormhole_mesh::WormholeError>(())
//! ```

pub mod buffers;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod gradient;
pub mod indices;
pub mod params;
pub mod ring;
pub mod rng;
pub mod tunnel;

pub use buffers::{MeshBuffers, flatten, flatten_colors};
pub use color::{Rgb, parse_color_list};
pub use config::TunnelConfig;
pub use error::{WormholeError, WormholeResult};
pub use export::{ExportFormat, save, write_json, write_obj, write_raw};
pub use generator::{Regenerate, TunnelGenerator, generate, generate_colors};
pub use gradient::{ColorTable, compute_colors};
pub use indices::build_indices;
pub use params::TunnelParams;
pub use ring::{Ring, generate_ring};
pub use rng::{entropy_rng, seeded_rng};
pub use tunnel::{Tunnel, assemble_tunnel};
