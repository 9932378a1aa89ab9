use lingo_core::resolve::{DetailRequest, resolve_situation};
use lingo_core::responses::SituationDocument;
use lingo_db::retry::{is_retryable_content_error, with_retry};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SituationArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lingo situation <id> --target-lang <code> --native-lang <code>`.
pub async fn handle(
    args: &SituationArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = DetailRequest::from_params(
        args.id,
        args.target_lang.as_deref(),
        args.native_lang.as_deref(),
    )?;

    let resolved = with_retry(&ctx.config.retry, is_retryable_content_error, || {
        resolve_situation(&ctx.service, &request)
    })
    .await?;

    output(&SituationDocument::from(resolved), flags.format)
}
