//! 情绪分类模型服务
//!
//! 外部分类模型的统一抽象。模型进程内只加载一次，所有会话只读复用；
//! 分类操作无状态，对同一输入可重复调用。

pub mod lexicon;
pub mod remote;

use async_trait::async_trait;

use crate::config::config::ClassifierConfig;
use crate::error::Result;
use crate::models::score::ScoredLabel;

pub use lexicon::LexiconClassifier;
pub use remote::RemoteClassifier;

/// 情绪分类模型 trait
///
/// `classify` 对非空文本返回覆盖整个标签词表的 (标签, 得分) 集合，
/// 返回顺序不作保证。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Vec<ScoredLabel>>;

    /// 模型名称（用于日志与版本信息）
    fn model_name(&self) -> &str;
}

/// 按配置创建分类后端
pub fn create_classifier(config: &ClassifierConfig) -> Result<Box<dyn EmotionClassifier>> {
    match config.backend.as_str() {
        "remote" => {
            let model = RemoteClassifier::new(
                &config.endpoint_url,
                &config.model_name,
                config.timeout_secs,
            )?;
            Ok(Box::new(model))
        }
        "lexicon" | _ => {
            let model = LexiconClassifier::new();
            Ok(Box::new(model))
        }
    }
}
