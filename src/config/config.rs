use serde::{Deserialize, Serialize};

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
    /// 请求超时（秒）
    pub request_timeout: u64,
}

/// 分析配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// 检测阈值：得分低于该值的标签不计入"检测到"的情绪
    pub detection_threshold: f64,
    /// 展示的情绪数量上限（0 表示不限制）
    pub top_k: usize,
}

/// 分类模型配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    /// 分类后端类型: "remote" 或 "lexicon"
    pub backend: String,
    /// 远程推理服务地址
    pub endpoint_url: String,
    /// 模型名称
    pub model_name: String,
    /// 远程请求超时（秒）
    pub timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 分析配置
    pub analysis: AnalysisConfig,
    /// 分类模型配置
    pub classifier: ClassifierConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8080,
                request_timeout: 30,
            },
            analysis: AnalysisConfig {
                detection_threshold: 0.1,
                top_k: 3,
            },
            classifier: ClassifierConfig {
                backend: "lexicon".into(),
                endpoint_url: "http://localhost:8501".into(),
                model_name: "j-hartmann/emotion-english-distilroberta-base".into(),
                timeout_secs: 60,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: true,
            },
            app_name: "limbic".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.classifier.backend = "remote".into();
        config
    }

    /// 是否为开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_defaults() {
        let config = AppConfig::development();
        assert_eq!(config.analysis.detection_threshold, 0.1);
        assert_eq!(config.classifier.backend, "lexicon");
        assert!(config.is_development());
    }

    #[test]
    fn test_production_overrides() {
        let config = AppConfig::production();
        assert_eq!(config.environment, "production");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.classifier.backend, "remote");
        assert!(!config.is_development());
    }
}
