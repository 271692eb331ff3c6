//! 配置模块

pub mod config;
pub mod loader;

pub use config::{AnalysisConfig, AppConfig, ClassifierConfig, LoggingConfig, ServerConfig};
pub use loader::{ConfigLoader, ConfigValidationError};
