use lingo_core::catalog::list_languages;
use lingo_db::retry::{is_retryable_content_error, with_retry};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lingo languages`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let languages = with_retry(&ctx.config.retry, is_retryable_content_error, || {
        list_languages(&ctx.service)
    })
    .await?;
    output(&languages, flags.format)
}
