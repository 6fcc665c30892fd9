//! Init command - write a default wormhole.toml

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;
use wormhole_mesh::TunnelConfig;
use wormhole_mesh::config::DEFAULT_CONFIG_FILE;

/// Arguments for the init command
#[derive(Args)]
pub struct InitArgs {
    /// Where to write the config
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,

    /// Fixed jitter seed to record in the config
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Execute the init command
pub fn execute(args: InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let config = TunnelConfig {
        seed: args.seed,
        ..Default::default()
    };
    config
        .save(&args.output)
        .with_context(|| format!("Failed to write config: {}", args.output.display()))?;

    info!("Created {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join(DEFAULT_CONFIG_FILE);

        execute(InitArgs {
            output: output.clone(),
            force: false,
            seed: Some(77),
        })
        .unwrap();

        let config = TunnelConfig::load(&output).unwrap();
        assert_eq!(config.seed, Some(77));
        assert!(config.tunnel.validate().is_ok());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&output, "seed = 1\n").unwrap();

        let args = InitArgs {
            output: output.clone(),
            force: false,
            seed: None,
        };
        assert!(execute(args).is_err());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "seed = 1\n");

        let args = InitArgs {
            output: output.clone(),
            force: true,
            seed: None,
        };
        assert!(execute(args).is_ok());
    }
}
