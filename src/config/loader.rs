use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use std::path::PathBuf;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 搜索路径：
    /// 1. ./config.toml
    /// 2. 环境变量（LIMBIC_ 前缀）
    pub fn load() -> Result<AppConfig, figment::Error> {
        let figment = Figment::new()
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LIMBIC_").split("_").global());

        figment.extract()
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("LIMBIC_").split("_").global());

        figment.extract()
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        let threshold = config.analysis.detection_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigValidationError::InvalidThreshold(threshold));
        }

        match config.classifier.backend.as_str() {
            "remote" | "lexicon" => {}
            other => return Err(ConfigValidationError::UnknownBackend(other.to_string())),
        }

        if config.classifier.backend == "remote" && config.classifier.endpoint_url.is_empty() {
            return Err(ConfigValidationError::MissingEndpointUrl);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("检测阈值无效，必须位于 [0,1] 区间: {0}")]
    InvalidThreshold(f64),

    #[error("未知的分类后端: {0}")]
    UnknownBackend(String),

    #[error("远程分类后端需要配置 endpoint_url")]
    MissingEndpointUrl,
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}

/// 检查配置文件是否存在
pub fn config_exists() -> bool {
    default_config_path().exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_development_config() {
        let config = AppConfig::development();
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let mut config = AppConfig::development();
        config.analysis.detection_threshold = 1.5;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_backend() {
        let mut config = AppConfig::development();
        config.classifier.backend = "onnx".into();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::UnknownBackend(_))
        ));
    }

    #[test]
    fn test_validate_requires_endpoint_for_remote() {
        let mut config = AppConfig::development();
        config.classifier.backend = "remote".into();
        config.classifier.endpoint_url = String::new();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::MissingEndpointUrl)
        ));
    }
}
