use super::{
    cors_config, log_config::LogConfig, rate_limit_config::RateLimitConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub rate_limit: RateLimitConfig,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            rate_limit: RateLimitConfig::from_env(),
            log: LogConfig::from_env(),
        }
    }
}
