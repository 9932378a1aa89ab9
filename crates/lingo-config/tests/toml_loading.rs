//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use lingo_config::{ConfigError, LingoConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "./content.db"
url = "libsql://content.turso.io"
auth_token = "turso-token"
read_your_writes = false
"#,
        )?;

        let config: LingoConfig = Figment::from(Serialized::defaults(LingoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "./content.db");
        assert_eq!(config.database.url, "libsql://content.turso.io");
        assert_eq!(config.database.auth_token, "turso-token");
        assert!(!config.database.read_your_writes);
        assert!(config.database.is_remote());
        Ok(())
    });
}

#[test]
fn loads_retry_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[retry]
max_attempts = 2
base_delay_ms = 50
max_delay_ms = 400
"#,
        )?;

        let config: LingoConfig = Figment::from(Serialized::defaults(LingoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.retry.max_attempts, 2);
        assert_eq!(config.retry.base_delay_ms, 50);
        assert_eq!(config.retry.max_delay_ms, 400);
        assert_eq!(config.database.path, "lingo.db");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lingo")?;
        jail.create_file(
            ".lingo/config.toml",
            r#"
[database]
path = "project.db"
"#,
        )?;

        let config = LingoConfig::load().expect("config loads");
        assert_eq!(config.database.path, "project.db");
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("LINGO_DATABASE__PATH", "from-env.db");
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "from-toml.db"
"#,
        )?;

        let config: LingoConfig = Figment::from(Serialized::defaults(LingoConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LINGO_").split("__"))
            .extract()?;

        assert_eq!(config.database.path, "from-env.db");
        Ok(())
    });
}

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("LINGO_RETRY__MAX_ATTEMPTS", "7");

        let config = LingoConfig::load().expect("config loads");
        assert_eq!(config.retry.max_attempts, 7);
        Ok(())
    });
}

#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("LINGO_DATABASE__PATHH", "typo.db");

        let config = LingoConfig::load().expect("config loads");
        assert_eq!(config.database.path, "lingo.db");
        Ok(())
    });
}

#[test]
fn invalid_retry_policy_fails_load() {
    Jail::expect_with(|jail| {
        jail.set_env("LINGO_RETRY__MAX_ATTEMPTS", "0");

        let err = LingoConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn non_numeric_env_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("LINGO_RETRY__MAX_ATTEMPTS", "lots");

        let err = LingoConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
