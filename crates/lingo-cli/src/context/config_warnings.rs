use lingo_config::LingoConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &LingoConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LingoConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.database.is_remote() && has_single_underscore(&env_keys, "LINGO_DATABASE") {
        warnings.push(
            "Database config appears local while LINGO_DATABASE_* env vars exist. Use double underscores (example: LINGO_DATABASE__URL)."
                .to_string(),
        );
    }

    if has_single_underscore(&env_keys, "LINGO_RETRY") {
        warnings.push(
            "LINGO_RETRY_* env vars are ignored. Use double underscores (example: LINGO_RETRY__MAX_ATTEMPTS)."
                .to_string(),
        );
    }

    warnings
}

/// Whether any key is `<section>_X` rather than `<section>__X`.
fn has_single_underscore(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
