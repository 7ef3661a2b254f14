//! Rate limiting configuration structures.

use std::time::Duration;

use duration_str::deserialize_duration;
use serde::Deserialize;

/// Configuration for a sliding window rate limiting policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateLimitConfig {
    /// Sliding window length. Requests older than this no longer count
    /// against the limit.
    #[serde(default = "default_interval", deserialize_with = "deserialize_duration")]
    pub interval: Duration,
    /// Maximum number of distinct tokens tracked at once. Once exceeded,
    /// the least recently used token's record is evicted.
    #[serde(default = "default_unique_token_per_interval")]
    pub unique_token_per_interval: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            unique_token_per_interval: default_unique_token_per_interval(),
        }
    }
}

fn default_interval() -> Duration {
    Duration::from_secs(60)
}

fn default_unique_token_per_interval() -> u64 {
    500
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn default_rate_limit_config() {
        let config = RateLimitConfig::default();
        insta::assert_debug_snapshot!(config, @r#"
        RateLimitConfig {
            interval: 60s,
            unique_token_per_interval: 500,
        }
        "#);
    }

    #[test]
    fn deserialize_with_duration_string() {
        let toml = indoc! {r#"
            interval = "250ms"
            unique_token_per_interval = 50
        "#};

        let config: RateLimitConfig = toml::from_str(toml).unwrap();
        insta::assert_debug_snapshot!(config, @r#"
        RateLimitConfig {
            interval: 250ms,
            unique_token_per_interval: 50,
        }
        "#);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let toml = r#"
            interval = "1m"
        "#;

        let config: RateLimitConfig = toml::from_str(toml).unwrap();
        insta::assert_debug_snapshot!(config, @r#"
        RateLimitConfig {
            interval: 60s,
            unique_token_per_interval: 500,
        }
        "#);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let toml = r#"
            uniqueTokenPerInterval = 10
        "#;

        let error = toml::from_str::<RateLimitConfig>(toml).unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }
}
