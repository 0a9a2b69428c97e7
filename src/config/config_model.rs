use std::time::Duration;

use anyhow::{Context, Result};

use super::stage::Stage;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub database: Database,
    pub payex: Payex,
    pub stage: Stage,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    /// MiB
    pub body_limit: u64,
    /// Seconds
    pub timeout: u64,
}

impl Server {
    pub fn body_limit_bytes(&self) -> Result<usize> {
        self.body_limit
            .checked_mul(1024 * 1024)
            .and_then(|bytes| usize::try_from(bytes).ok())
            .context("SERVER_BODY_LIMIT is too large")
    }

    /// Budget for one gateway round trip. It stays below the request timeout
    /// so a slow gateway still gets a `FAILURE` answer.
    pub fn gateway_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout.saturating_mul(800))
    }
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Payex {
    pub merchant_number: String,
    pub encryption_key: String,
    pub in_production: bool,
    /// Gateway client endpoint for the environment picked by `in_production`.
    pub base_url: String,
    pub callback_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(body_limit: u64, timeout: u64) -> Server {
        Server {
            port: 8080,
            body_limit,
            timeout,
        }
    }

    #[test]
    fn body_limit_is_converted_to_bytes() {
        assert_eq!(server(10, 30).body_limit_bytes().unwrap(), 10 * 1024 * 1024);
    }

    #[test]
    fn oversized_body_limit_is_an_error() {
        let err = server(u64::MAX, 30).body_limit_bytes().unwrap_err();
        assert!(err.to_string().contains("SERVER_BODY_LIMIT"));
    }

    #[test]
    fn gateway_timeout_is_below_request_timeout() {
        assert_eq!(server(10, 1).gateway_timeout(), Duration::from_millis(800));
        assert!(server(10, 30).gateway_timeout() < Duration::from_secs(30));
    }
}
