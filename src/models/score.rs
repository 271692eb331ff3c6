//! 分类得分模型
//!
//! 单次分类产生的逐标签得分，以及排序、阈值过滤后的视图。

use serde::{Deserialize, Serialize};

use crate::models::label::EmotionLabel;

/// 带分值的标签
///
/// 外部分类模型对某一输入给出的 (标签, 得分) 对，得分位于 [0,1]。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLabel {
    /// 情绪标签
    pub label: EmotionLabel,
    /// 模型置信度
    pub score: f64,
}

impl ScoredLabel {
    /// 创建新的带分值标签
    pub fn new(label: &str, score: f64) -> Self {
        Self {
            label: EmotionLabel::new(label),
            score,
        }
    }
}

/// 排序后的分类结果
///
/// 按得分降序排列，同分按标签名升序。`detected` 为经过检测阈值
/// 过滤后的前缀；阈值过滤不改变排序，所以 `detected` 的首元素
/// 即整体排名最高的情绪。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    /// 全量排序结果
    pub ranked: Vec<ScoredLabel>,
    /// 达到检测阈值的子集
    pub detected: Vec<ScoredLabel>,
    /// 生效的检测阈值
    pub threshold: f64,
}

impl RankedResult {
    /// 排名最高的情绪（若有标签达到阈值）
    pub fn top(&self) -> Option<&ScoredLabel> {
        self.detected.first()
    }

    /// 是否有任何标签达到阈值
    pub fn has_detection(&self) -> bool {
        !self.detected.is_empty()
    }
}
