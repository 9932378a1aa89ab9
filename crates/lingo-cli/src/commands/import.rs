use std::path::Path;

use anyhow::Context;
use lingo_core::bundle::ContentBundle;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lingo import <bundle.json>`.
pub async fn handle(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let bundle = read_bundle(&args.file)?;
    let summary = ctx
        .service
        .import_bundle(&bundle)
        .await
        .with_context(|| format!("failed to import {}", args.file.display()))?;
    output(&summary, flags.format)
}

fn read_bundle(path: &Path) -> anyhow::Result<ContentBundle> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read bundle file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid content bundle in {}", path.display()))
}
