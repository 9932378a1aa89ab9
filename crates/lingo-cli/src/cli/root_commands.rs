use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List all languages, ordered by code.
    Languages,
    /// List situations offering a target language.
    Situations(SituationsArgs),
    /// Resolve the localized content tree of one situation.
    Situation(SituationArgs),
    /// Import a content bundle (JSON) in one transaction.
    Import(ImportArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SituationsArgs {
    /// Target language code (e.g. spa).
    pub lang: String,
}

/// Both languages are optional at parse time so that a missing one is
/// reported the same way as an empty one.
#[derive(Clone, Debug, Args)]
pub struct SituationArgs {
    /// Situation id.
    pub id: i64,
    /// Language being learned.
    #[arg(long = "target-lang")]
    pub target_lang: Option<String>,
    /// Language for descriptions.
    #[arg(long = "native-lang")]
    pub native_lang: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Path to the bundle file.
    pub file: PathBuf,
}
