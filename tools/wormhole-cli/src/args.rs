//! Tunnel parameter arguments shared by `generate` and `info`
//!
//! Parameters come from a wormhole.toml config (if any) with individual
//! command-line flags layered on top.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};
use wormhole_mesh::config::DEFAULT_CONFIG_FILE;
use wormhole_mesh::{TunnelConfig, TunnelParams, parse_color_list};

/// Config file and per-field overrides
#[derive(Args, Debug, Default)]
pub struct TunnelArgs {
    /// Path to config file (defaults to ./wormhole.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tunnel length along +Z
    #[arg(long)]
    pub length: Option<f32>,

    /// Diameter of the first ring
    #[arg(long)]
    pub start_diameter: Option<f32>,

    /// Diameter of the last ring
    #[arg(long)]
    pub end_diameter: Option<f32>,

    /// Radial jitter half-range
    #[arg(long)]
    pub variance: Option<f32>,

    /// Vertices per ring (min 3)
    #[arg(long)]
    pub ring_subdivs: Option<u32>,

    /// Bands along the tunnel (min 1)
    #[arg(long)]
    pub tunnel_subdivs: Option<u32>,

    /// Color stops as 0xRRGGBB tokens, e.g. "0xff00ff, 0x000000"
    #[arg(long)]
    pub colors: Option<String>,

    /// Jitter seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pull out-of-range values into range instead of failing
    #[arg(long)]
    pub clamp: bool,
}

/// Parameters after merging config and flags
#[derive(Debug)]
pub struct Resolved {
    pub params: TunnelParams,
    pub seed: Option<u64>,
}

impl TunnelArgs {
    /// Merge the config file (if any) with command-line overrides
    pub fn resolve(&self) -> Result<Resolved> {
        let config = match self.config_path() {
            Some(path) => {
                info!("Using config {}", path.display());
                TunnelConfig::load(&path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?
            }
            None => TunnelConfig::default(),
        };

        let mut params = config.tunnel;
        if let Some(length) = self.length {
            params.length = length;
        }
        if let Some(diameter) = self.start_diameter {
            params.start_diameter = diameter;
        }
        if let Some(diameter) = self.end_diameter {
            params.end_diameter = diameter;
        }
        if let Some(variance) = self.variance {
            params.variance = variance;
        }
        if let Some(subdivs) = self.ring_subdivs {
            params.ring_subdivs = subdivs;
        }
        if let Some(subdivs) = self.tunnel_subdivs {
            params.tunnel_subdivs = subdivs;
        }
        if let Some(text) = &self.colors {
            let colors = parse_color_list(text);
            if colors.is_empty() {
                warn!("No 0xRRGGBB colors found in {:?}, keeping previous colors", text);
            } else {
                params.colors = colors;
            }
        }

        if self.clamp {
            params = params.clamped();
        }

        Ok(Resolved {
            params,
            seed: self.seed.or(config.seed),
        })
    }

    fn config_path(&self) -> Option<PathBuf> {
        match &self.config {
            Some(path) => Some(path.clone()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;
    use wormhole_mesh::Rgb;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        tunnel: TunnelArgs,
    }

    fn parse(args: &[&str]) -> TunnelArgs {
        TestCli::try_parse_from(std::iter::once("wormhole").chain(args.iter().copied()))
            .unwrap()
            .tunnel
    }

    fn write_config(dir: &Path, text: &str) -> PathBuf {
        let path = dir.join("tunnel.toml");
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "seed = 3\n[tunnel]\nlength = 50.0\nring_subdivs = 10\n",
        );

        let args = parse(&[
            "--config",
            path.to_str().unwrap(),
            "--ring-subdivs",
            "6",
            "--colors",
            "0x0000ff",
        ]);
        let resolved = args.resolve().unwrap();

        assert_eq!(resolved.params.length, 50.0);
        assert_eq!(resolved.params.ring_subdivs, 6);
        assert_eq!(resolved.params.colors, vec![Rgb::new(0.0, 0.0, 1.0)]);
        assert_eq!(resolved.seed, Some(3));
    }

    #[test]
    fn test_seed_flag_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "seed = 3\n");
        let args = parse(&["-c", path.to_str().unwrap(), "--seed", "9"]);
        assert_eq!(args.resolve().unwrap().seed, Some(9));
    }

    #[test]
    fn test_unparseable_colors_keep_previous() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[tunnel]\ncolors = [0x123456]\n");
        let args = parse(&["-c", path.to_str().unwrap(), "--colors", "red"]);
        let resolved = args.resolve().unwrap();
        assert_eq!(resolved.params.colors, vec![Rgb::from_hex(0x123456)]);
    }

    #[test]
    fn test_clamp_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let args = parse(&[
            "-c",
            path.to_str().unwrap(),
            "--tunnel-subdivs",
            "0",
            "--clamp",
        ]);
        let resolved = args.resolve().unwrap();
        assert_eq!(resolved.params.tunnel_subdivs, 1);
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let args = parse(&["-c", missing.to_str().unwrap()]);
        assert!(args.resolve().is_err());
    }
}
