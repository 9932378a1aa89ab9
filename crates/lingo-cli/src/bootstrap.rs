use anyhow::Context;
use lingo_config::LingoConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LingoConfig> {
    let mut config =
        LingoConfig::load_with_dotenv().context("failed to load lingo configuration")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut LingoConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
}
