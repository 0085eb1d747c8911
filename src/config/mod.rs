//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, DEFAULT_MAX_FILE_BYTES, LogFormat, LoggingConfig, ServerConfig, UploadConfig,
};
