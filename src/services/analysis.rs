//! 分析编排服务
//!
//! 单次 analyze 调用的完整流程：输入校验、调用分类模型、
//! 排序与阈值过滤、必要时追加日记条目。所有失败都在本次
//! 调用边界内处理，日记只在成功路径被触碰。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::classifier::EmotionClassifier;
use crate::error::{AppError, Result};
use crate::models::diary::DiaryEntry;
use crate::models::score::RankedResult;
use crate::services::diary::DiaryService;
use crate::services::ranker;

/// 单次分析的结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    /// 检测到情绪，已写入日记
    Detected {
        entry: DiaryEntry,
        result: RankedResult,
    },
    /// 所有得分低于阈值，日记不变（正常结果，非错误）
    NoStrongEmotion { result: RankedResult },
}

/// 分析服务 trait
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// 分析一段文本
    async fn analyze(&self, session_id: &str, text: &str) -> Result<AnalysisOutcome>;
}

/// 分析服务实现
pub struct AnalysisServiceImpl {
    classifier: Arc<dyn EmotionClassifier>,
    diary: Arc<dyn DiaryService>,
    threshold: f64,
    /// 开发环境下分类结果契约违反保持原样上抛；
    /// 生产环境降级为普通分类错误。
    strict_contract: bool,
}

impl AnalysisServiceImpl {
    /// 创建新的服务实例
    pub fn new(
        classifier: Arc<dyn EmotionClassifier>,
        diary: Arc<dyn DiaryService>,
        threshold: f64,
        strict_contract: bool,
    ) -> Self {
        Self {
            classifier,
            diary,
            threshold,
            strict_contract,
        }
    }
}

#[async_trait]
impl AnalysisService for AnalysisServiceImpl {
    async fn analyze(&self, session_id: &str, text: &str) -> Result<AnalysisOutcome> {
        let text = text.trim();
        if text.is_empty() {
            // 空输入不触发模型调用
            return Err(AppError::EmptyInput);
        }

        debug!("Classifying text for session {}", session_id);
        let raw = self.classifier.classify(text).await?;

        let ranked = match ranker::rank(raw, self.threshold) {
            Ok(ranked) => ranked,
            Err(AppError::MalformedScoreSet(msg)) if !self.strict_contract => {
                return Err(AppError::Classification(msg));
            }
            Err(e) => return Err(e),
        };

        if !ranked.has_detection() {
            debug!("No emotion above threshold {}", self.threshold);
            return Ok(AnalysisOutcome::NoStrongEmotion { result: ranked });
        }

        let entry = self.diary.append(session_id, text, &ranked).await?;
        debug!(
            "Diary entry {} appended for session {}: {}",
            entry.index, session_id, entry.top_label
        );

        Ok(AnalysisOutcome::Detected {
            entry,
            result: ranked,
        })
    }
}

/// 创建分析服务
pub fn create_analysis_service(
    classifier: Arc<dyn EmotionClassifier>,
    diary: Arc<dyn DiaryService>,
    threshold: f64,
    strict_contract: bool,
) -> Box<dyn AnalysisService> {
    Box::new(AnalysisServiceImpl::new(
        classifier,
        diary,
        threshold,
        strict_contract,
    ))
}
