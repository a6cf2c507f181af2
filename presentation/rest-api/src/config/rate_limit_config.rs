use std::env;

/// Admission limits for incoming requests, shared by every route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Tokens added back to the bucket each second.
    pub per_second: u32,
    /// Bucket capacity, i.e. how many requests may arrive back to back.
    pub burst: u32,
}

impl RateLimitConfig {
    /// Load rate limits from environment variables
    ///
    /// Environment variables:
    /// - RATE_LIMIT_PER_SECOND: refill rate (default: 1)
    /// - RATE_LIMIT_BURST: bucket capacity (default: 3)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
            env::var("RATE_LIMIT_BURST").ok().as_deref(),
        )
    }

    fn from_values(per_second: Option<&str>, burst: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            per_second: per_second
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.per_second),
            burst: burst
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.burst),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 1,
            burst: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_one_per_second_with_burst_of_three() {
        assert_eq!(
            RateLimitConfig::from_values(None, None),
            RateLimitConfig {
                per_second: 1,
                burst: 3
            }
        );
    }

    #[test]
    fn should_read_configured_values() {
        let config = RateLimitConfig::from_values(Some("20"), Some("50"));

        assert_eq!(config.per_second, 20);
        assert_eq!(config.burst, 50);
    }

    #[test]
    fn should_fall_back_on_unparseable_values() {
        let config = RateLimitConfig::from_values(Some("fast"), Some("-1"));

        assert_eq!(config, RateLimitConfig::default());
    }
}
