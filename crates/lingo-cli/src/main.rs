use clap::Parser;
use lingo_core::errors::ContentError;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    if let Err(error) = run(cli).await {
        report(&error, &flags);
        std::process::exit(exit_code(&error));
    }
}

async fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;

    let config = bootstrap::load_config(&flags)?;
    context::warn_unconfigured(&config);

    let ctx = context::AppContext::init(config).await?;
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LINGO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Find the content error anywhere in the context chain.
fn content_error(error: &anyhow::Error) -> Option<&ContentError> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ContentError>())
}

/// Exit codes mirror HTTP status classes: 2 (400), 4 (404), 5 (5xx).
fn exit_code(error: &anyhow::Error) -> i32 {
    match content_error(error) {
        Some(ContentError::MissingParameter(_)) => 2,
        Some(ContentError::NotFound(_)) => 4,
        Some(ContentError::TransientStoreFailure(_)) => 5,
        None => 1,
    }
}

fn report(error: &anyhow::Error, flags: &cli::GlobalFlags) {
    let detail = match content_error(error) {
        Some(content) => {
            match content {
                ContentError::TransientStoreFailure(source) => {
                    tracing::error!(error = ?source, "content store failure");
                }
                ContentError::NotFound(_) => tracing::info!(%content, "not found"),
                ContentError::MissingParameter(_) => {}
            }
            content.to_string()
        }
        None => format!("{error:#}"),
    };
    output::output_error(detail, flags.format);
}

#[cfg(test)]
mod tests {
    use lingo_core::errors::{ContentError, NotFound};

    use super::exit_code;

    #[test]
    fn exit_codes_follow_status_classes() {
        let missing = anyhow::Error::new(ContentError::MissingParameter(vec!["target_lang"]));
        let not_found = anyhow::Error::new(ContentError::from(NotFound::Situation { id: 1 }));
        let transient = anyhow::Error::new(ContentError::TransientStoreFailure(
            anyhow::anyhow!("database is locked"),
        ));
        let other = anyhow::anyhow!("failed to read bundle file");

        assert_eq!(exit_code(&missing), 2);
        assert_eq!(exit_code(&not_found), 4);
        assert_eq!(exit_code(&transient), 5);
        assert_eq!(exit_code(&other), 1);
    }

    #[test]
    fn exit_code_sees_through_context() {
        let error = anyhow::Error::new(ContentError::from(NotFound::Situation { id: 9 }))
            .context("while resolving");
        assert_eq!(exit_code(&error), 4);
    }
}
