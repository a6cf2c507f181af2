pub mod app_config;
pub mod cors_config;
pub mod log_config;
pub mod rate_limit_config;
pub mod server_config;
