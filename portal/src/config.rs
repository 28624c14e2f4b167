//! Command line and environment configuration

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use url::Url;

use shared::SharedError;
use crate::error::{PortalError, PortalResult};
use crate::services::RetryPolicy;

/// Admissions portal serving the UI from the REST data store
#[derive(Parser, Debug, Clone)]
#[command(name = "portal")]
#[command(about = "Admissions portal API in front of the admissions data store")]
pub struct Args {
    /// Port for HTTP server
    #[arg(long, env = "PORTAL_PORT", default_value = "8080")]
    pub port: u16,

    /// Interface to bind
    #[arg(long, env = "PORTAL_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    /// Base URL of the admissions data store
    #[arg(long, env = "STORE_URL", default_value = "http://localhost:3001")]
    pub store_url: String,

    /// Store request timeout in milliseconds (transport default if unset)
    #[arg(long, env = "STORE_TIMEOUT_MS")]
    pub store_timeout_ms: Option<u64>,

    /// Retries while a student's profile is not yet visible
    #[arg(long, env = "PROFILE_RETRIES", default_value = "3")]
    pub profile_retries: u32,

    /// Delay between profile retries in milliseconds
    #[arg(long, env = "PROFILE_RETRY_DELAY_MS", default_value = "1000")]
    pub profile_retry_delay_ms: u64,

    /// Tracing endpoint URL (if set, traces will be sent here)
    #[arg(long, env = "TRACE_EP")]
    pub trace_ep: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub bind_address: SocketAddr,
    pub store_url: Url,
    pub store_timeout: Option<Duration>,
    pub retry: RetryPolicy,
}

impl PortalConfig {
    pub fn from_args(args: &Args) -> PortalResult<Self> {
        let bind_address: SocketAddr = format!("{}:{}", args.bind, args.port).parse().map_err(|_| {
            SharedError::InvalidConfig {
                field: "bind".to_string(),
                value: args.bind.clone(),
            }
        })?;

        let store_url = Url::parse(&args.store_url).map_err(|_| PortalError::InvalidStoreUrl {
            url: args.store_url.clone(),
        })?;
        if !matches!(store_url.scheme(), "http" | "https") {
            return Err(PortalError::InvalidStoreUrl {
                url: args.store_url.clone(),
            });
        }

        let store_timeout = match args.store_timeout_ms {
            Some(0) => {
                return Err(SharedError::InvalidConfig {
                    field: "store_timeout_ms".to_string(),
                    value: "0".to_string(),
                }
                .into());
            }
            other => other.map(Duration::from_millis),
        };

        Ok(Self {
            bind_address,
            store_url,
            store_timeout,
            retry: RetryPolicy {
                max_retries: args.profile_retries,
                delay: Duration::from_millis(args.profile_retry_delay_ms),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["portal"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_explicit_arguments() {
        let args = parse(&[
            "--port",
            "9000",
            "--bind",
            "0.0.0.0",
            "--store-url",
            "http://store.internal:3001/api",
            "--store-timeout-ms",
            "2500",
            "--profile-retries",
            "5",
            "--profile-retry-delay-ms",
            "200",
        ]);

        let config = PortalConfig::from_args(&args).unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.store_url.as_str(), "http://store.internal:3001/api");
        assert_eq!(config.store_timeout, Some(Duration::from_millis(2500)));
        assert_eq!(config.retry.max_retries, 5);
        assert_eq!(config.retry.delay, Duration::from_millis(200));
    }

    #[test]
    fn test_invalid_bind_address() {
        let args = parse(&["--bind", "not an address", "--store-url", "http://localhost:3001"]);

        let error = PortalConfig::from_args(&args).unwrap_err();

        assert!(matches!(error, PortalError::SharedError(SharedError::InvalidConfig { .. })));
    }

    #[test]
    fn test_store_url_must_be_http() {
        let args = parse(&["--bind", "127.0.0.1", "--store-url", "ftp://files.local"]);

        assert!(matches!(
            PortalConfig::from_args(&args),
            Err(PortalError::InvalidStoreUrl { .. })
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let args = parse(&[
            "--bind",
            "127.0.0.1",
            "--store-url",
            "http://localhost:3001",
            "--store-timeout-ms",
            "0",
        ]);

        assert!(PortalConfig::from_args(&args).is_err());
    }
}
