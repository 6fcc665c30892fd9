//! Generate command - build a tunnel mesh and export it

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use wormhole_mesh::{ExportFormat, MeshBuffers, entropy_rng, generate, save, seeded_rng};

use crate::args::TunnelArgs;

/// Output format flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Wavefront OBJ with vertex colors
    Obj,
    /// JSON object with the four buffers
    Json,
    /// Directory of raw little-endian buffer files
    Raw,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Obj => ExportFormat::Obj,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Raw => ExportFormat::Raw,
        }
    }
}

/// Arguments for the generate command
#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub tunnel: TunnelArgs,

    /// Output file (.obj / .json) or directory (raw)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format (defaults to the output path's extension)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs) -> Result<()> {
    let mesh = build(&args.tunnel)?;

    let format = args
        .format
        .map(ExportFormat::from)
        .unwrap_or_else(|| ExportFormat::from_path(&args.output));

    save(&mesh, &args.output, format)
        .with_context(|| format!("Failed to export mesh to {}", args.output.display()))?;

    println!(
        "Wrote {} vertices, {} triangles to {}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        args.output.display()
    );
    Ok(())
}

/// Resolve parameters and run the generator
fn build(tunnel: &TunnelArgs) -> Result<MeshBuffers> {
    let resolved = tunnel.resolve()?;

    let (mut rng, seed) = match resolved.seed {
        Some(seed) => (seeded_rng(seed), seed),
        None => entropy_rng(),
    };
    info!("Generating tunnel (seed {})", seed);

    let mesh = generate(&resolved.params, &mut rng).context("Failed to generate tunnel")?;
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tunnel_args(seed: u64) -> TunnelArgs {
        TunnelArgs {
            ring_subdivs: Some(5),
            tunnel_subdivs: Some(3),
            seed: Some(seed),
            config: Some(PathBuf::from("/nonexistent/wormhole.toml")),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        assert!(build(&tunnel_args(1)).is_err());
    }

    #[test]
    fn test_generate_writes_obj() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("wormhole.toml");
        std::fs::write(&config, "[tunnel]\nvariance = 0.5\n").unwrap();
        let output = dir.path().join("tunnel.obj");

        execute(GenerateArgs {
            tunnel: TunnelArgs {
                config: Some(config),
                ..tunnel_args(4)
            },
            output: output.clone(),
            format: None,
        })
        .unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 20);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 30);
    }

    #[test]
    fn test_format_flag_overrides_extension() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("wormhole.toml");
        std::fs::write(&config, "").unwrap();
        let output = dir.path().join("tunnel.obj");

        execute(GenerateArgs {
            tunnel: TunnelArgs {
                config: Some(config),
                ..tunnel_args(2)
            },
            output: output.clone(),
            format: Some(FormatArg::Json),
        })
        .unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.trim_start().starts_with('{'));
        assert!(text.contains("\"positions\""));
        assert!(!text.lines().any(|l| l.starts_with("v ")));
    }

    #[test]
    fn test_same_seed_same_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("wormhole.toml");
        std::fs::write(&config, "[tunnel]\nvariance = 2.0\n").unwrap();

        let args = |seed| TunnelArgs {
            config: Some(config.clone()),
            ..tunnel_args(seed)
        };
        assert_eq!(build(&args(10)).unwrap(), build(&args(10)).unwrap());
        assert_ne!(
            build(&args(10)).unwrap().positions,
            build(&args(11)).unwrap().positions
        );
    }

    #[test]
    fn test_invalid_params_fail() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("wormhole.toml");
        std::fs::write(&config, "").unwrap();

        let args = TunnelArgs {
            config: Some(config),
            ring_subdivs: Some(2),
            ..tunnel_args(1)
        };
        assert!(build(&args).is_err());
    }
}
