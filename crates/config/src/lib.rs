//! Configuration structures mapping the TOML configuration file.

#![deny(missing_docs)]

mod loader;
mod rate_limit;

use std::path::Path;

pub use rate_limit::RateLimitConfig;
use serde::Deserialize;

/// Main configuration structure for the application.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rate limiting configuration.
    #[serde(default)]
    pub rate_limits: RateLimitConfig,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
        loader::load(path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn parses_rate_limits_section() {
        let toml = indoc! {r#"
            [rate_limits]
            interval = "10s"
            unique_token_per_interval = 100
        "#};

        let config: Config = toml::from_str(toml).unwrap();
        insta::assert_debug_snapshot!(config, @r#"
        Config {
            rate_limits: RateLimitConfig {
                interval: 10s,
                unique_token_per_interval: 100,
            },
        }
        "#);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        insta::assert_debug_snapshot!(config, @r#"
        Config {
            rate_limits: RateLimitConfig {
                interval: 60s,
                unique_token_per_interval: 500,
            },
        }
        "#);
    }
}
