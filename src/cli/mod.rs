// src/cli/mod.rs
pub mod args;

pub use args::Cli;

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use anyhow::Result;

/// Merges CLI flags over the loaded config and runs a generation pass.
///
/// # Errors
/// Returns error only on conditions the run itself cannot recover
/// (currently none; per-file problems surface as diagnostics).
pub fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load();
    config.files = cli.files;
    config.app_dir = cli.app_dir;
    if cli.src_dir.is_some() {
        config.src_dir = cli.src_dir;
    }
    config.force = config.force || cli.force;
    config.skip_barrels = cli.skip_barrels;
    config.refresh_barrels = cli.refresh_barrels;
    config.verbose = cli.verbose;

    let mut diags = Diagnostics::new(config.verbose);
    crate::run(&config, &mut diags)?;
    Ok(())
}
