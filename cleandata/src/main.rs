use cookdata::{prelude::Result, Config};

use log::info;
use std::env;

/// Rewrites `cook_items.json` and `names.json` in sorted, column-aligned form.
///
/// The data directory defaults to `./src`; a single argument overrides it and
/// any further argument is an error.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Config::from_args(env::args_os().skip(1))?;
    info!("Cleaning {} and {}", cfg.items.display(), cfg.names.display());
    cookdata::run(&cfg)?;
    Ok(())
}
