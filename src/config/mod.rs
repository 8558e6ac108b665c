//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `TRUSTLENS_*` environment
//! variables; the judge credential is read from `OPENAI_API_KEY`.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::time::Duration;

use crate::judge::JudgeConfig;
use crate::scoring::MergeStrategy;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Strategy applied when a request does not pick one. Default: `blended`.
    pub merge_strategy: MergeStrategy,

    /// Remote judge settings, credential included.
    pub judge: JudgeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            merge_strategy: MergeStrategy::default(),
            judge: JudgeConfig::default(),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "TRUSTLENS_PORT";
    const ENV_BIND_ADDR: &'static str = "TRUSTLENS_BIND_ADDR";
    const ENV_MERGE_STRATEGY: &'static str = "TRUSTLENS_MERGE_STRATEGY";
    const ENV_JUDGE_ENDPOINT: &'static str = "TRUSTLENS_JUDGE_ENDPOINT";
    const ENV_JUDGE_MODEL: &'static str = "TRUSTLENS_JUDGE_MODEL";
    const ENV_JUDGE_TIMEOUT_SECS: &'static str = "TRUSTLENS_JUDGE_TIMEOUT_SECS";
    const ENV_API_KEY: &'static str = "OPENAI_API_KEY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let merge_strategy = Self::parse_strategy_from_env(defaults.merge_strategy)?;

        let endpoint =
            Self::parse_string_from_env(Self::ENV_JUDGE_ENDPOINT, defaults.judge.endpoint);
        let model = Self::parse_string_from_env(Self::ENV_JUDGE_MODEL, defaults.judge.model);
        let api_key = Self::parse_optional_string_from_env(Self::ENV_API_KEY);
        let timeout = Self::parse_timeout_from_env(defaults.judge.timeout)?;

        let judge = JudgeConfig {
            endpoint,
            model,
            api_key,
            timeout,
        };

        Ok(Self {
            port,
            bind_addr,
            merge_strategy,
            judge,
        })
    }

    /// Checks invariants that parsing alone cannot catch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.judge.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint {
                value: self.judge.endpoint.clone(),
            });
        }

        if self.judge.model.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_JUDGE_MODEL,
            });
        }

        if self.judge.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: "0".to_string(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_strategy_from_env(default: MergeStrategy) -> Result<MergeStrategy, ConfigError> {
        match env::var(Self::ENV_MERGE_STRATEGY) {
            Ok(value) => value.parse().map_err(ConfigError::from),
            Err(_) => Ok(default),
        }
    }

    fn parse_timeout_from_env(default: Duration) -> Result<Duration, ConfigError> {
        match env::var(Self::ENV_JUDGE_TIMEOUT_SECS) {
            Ok(value) => {
                let secs: u64 = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout {
                        value: value.clone(),
                    })?;

                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout { value });
                }

                Ok(Duration::from_secs(secs))
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
