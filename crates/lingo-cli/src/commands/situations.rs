use lingo_core::catalog::list_situations;
use lingo_db::retry::{is_retryable_content_error, with_retry};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SituationsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lingo situations <lang>`.
pub async fn handle(
    args: &SituationsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let summaries = with_retry(&ctx.config.retry, is_retryable_content_error, || {
        list_situations(&ctx.service, &args.lang)
    })
    .await?;
    output(&summaries, flags.format)
}
