use anyhow::{Context, Result};

use super::{
    config_model::{Database, DotEnvyConfig, Payex, Server},
    stage::Stage,
};

const DEFAULT_CALLBACK_PATH: &str = "/payex/callback";

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    load_from(|key| std::env::var(key).ok())
}

/// Builds the configuration from `lookup`, which returns the value of an
/// environment variable when it is set.
pub fn load_from<F>(lookup: F) -> Result<DotEnvyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |key: &str| lookup(key).with_context(|| format!("{} is invalid", key));

    let server = Server {
        port: required("SERVER_PORT")?
            .parse()
            .context("SERVER_PORT is invalid")?,
        body_limit: required("SERVER_BODY_LIMIT")?
            .parse()
            .context("SERVER_BODY_LIMIT is invalid")?,
        timeout: required("SERVER_TIMEOUT")?
            .parse()
            .context("SERVER_TIMEOUT is invalid")?,
    };
    server.body_limit_bytes()?;
    if server.timeout == 0 {
        anyhow::bail!("SERVER_TIMEOUT must be at least one second");
    }

    let database = Database {
        url: required("DATABASE_URL")?,
    };

    let in_production = match lookup("PAYEX_IN_PRODUCTION") {
        Some(flag) => parse_flag(&flag).context("PAYEX_IN_PRODUCTION is invalid")?,
        None => false,
    };

    let base_url = if in_production {
        required("PAYEX_PRODUCTION_BASE_URL")?
    } else {
        required("PAYEX_TEST_BASE_URL")?
    };

    let callback_path = lookup("PAYEX_CALLBACK_PATH")
        .map(|path| path.trim().to_string())
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| DEFAULT_CALLBACK_PATH.to_string());
    let callback_path = if callback_path.starts_with('/') {
        callback_path
    } else {
        format!("/{}", callback_path)
    };

    let payex = Payex {
        merchant_number: required("PAYEX_MERCHANT_NUMBER")?,
        encryption_key: required("PAYEX_ENCRYPTION_KEY")?,
        in_production,
        base_url: base_url.trim_end_matches('/').to_string(),
        callback_path,
    };

    let stage = match lookup("STAGE") {
        Some(stage) if !stage.trim().is_empty() => Stage::try_from(stage.trim())?,
        _ => Stage::default(),
    };

    Ok(DotEnvyConfig {
        server,
        database,
        payex,
        stage,
    })
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => anyhow::bail!("expected a boolean, got `{}`", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn base() -> Vec<(&'static str, &'static str)> {
        vec![
            ("SERVER_PORT", "8080"),
            ("SERVER_BODY_LIMIT", "10"),
            ("SERVER_TIMEOUT", "30"),
            ("DATABASE_URL", "postgres://localhost/payex"),
            ("PAYEX_MERCHANT_NUMBER", "60019118"),
            ("PAYEX_ENCRYPTION_KEY", "secret"),
            ("PAYEX_TEST_BASE_URL", "http://payex-test.internal/"),
            ("PAYEX_PRODUCTION_BASE_URL", "http://payex.internal"),
        ]
    }

    #[test]
    fn defaults_are_applied() {
        let config = load_from(env(&base())).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.body_limit, 10);
        assert_eq!(config.server.timeout, 30);
        assert!(!config.payex.in_production);
        assert_eq!(config.payex.base_url, "http://payex-test.internal");
        assert_eq!(config.payex.callback_path, "/payex/callback");
        assert_eq!(config.stage, Stage::Local);
    }

    #[test]
    fn production_flag_selects_production_endpoint() {
        let mut vars = base();
        vars.push(("PAYEX_IN_PRODUCTION", "True"));
        vars.push(("PAYEX_CALLBACK_PATH", "hooks/payex"));
        vars.push(("STAGE", "production"));

        let config = load_from(env(&vars)).unwrap();

        assert!(config.payex.in_production);
        assert_eq!(config.payex.base_url, "http://payex.internal");
        assert_eq!(config.payex.callback_path, "/hooks/payex");
        assert_eq!(config.stage, Stage::Production);
    }

    #[test]
    fn missing_required_variable_is_reported() {
        let vars: Vec<_> = base()
            .into_iter()
            .filter(|(key, _)| *key != "PAYEX_MERCHANT_NUMBER")
            .collect();

        let err = load_from(env(&vars)).unwrap_err();
        assert!(err.to_string().contains("PAYEX_MERCHANT_NUMBER"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut vars = base();
        vars.retain(|(key, _)| *key != "SERVER_PORT");
        vars.push(("SERVER_PORT", "eighty"));
        assert!(load_from(env(&vars)).is_err());

        let mut vars = base();
        vars.push(("PAYEX_IN_PRODUCTION", "maybe"));
        assert!(load_from(env(&vars)).is_err());
    }

    #[test]
    fn absurd_server_limits_are_rejected() {
        let mut vars = base();
        vars.retain(|(key, _)| *key != "SERVER_BODY_LIMIT");
        vars.push(("SERVER_BODY_LIMIT", "18446744073709551615"));
        let err = load_from(env(&vars)).unwrap_err();
        assert!(err.to_string().contains("SERVER_BODY_LIMIT"));

        let mut vars = base();
        vars.retain(|(key, _)| *key != "SERVER_TIMEOUT");
        vars.push(("SERVER_TIMEOUT", "0"));
        assert!(load_from(env(&vars)).is_err());
    }
}
