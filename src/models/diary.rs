//! 心情日记模型
//!
//! 会话级的只追加日记。条目创建后不再修改或单独删除，
//! 仅支持整本重置。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::label::EmotionLabel;
use crate::models::score::{RankedResult, ScoredLabel};

/// 日记条目
///
/// 一次被接受的分析的持久记录。创建时同时留存当时的检测分布，
/// 便于后续按得分重新聚合而无需重新分类。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// 条目唯一标识
    pub id: String,

    /// 序号（从 1 开始，按插入顺序递增）
    pub index: u64,

    /// 原始输入文本
    pub text: String,

    /// 排名最高的情绪标签
    pub top_label: EmotionLabel,

    /// 最高情绪的得分
    pub top_score: f64,

    /// 创建时刻的检测分布（达到阈值的标签，按排名排列）
    pub distribution: Vec<ScoredLabel>,

    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl DiaryEntry {
    /// 由排序结果创建条目
    ///
    /// 调用方保证 `ranked.detected` 非空。
    pub fn new(session_id: &str, index: u64, text: &str, ranked: &RankedResult) -> Option<Self> {
        let top = ranked.top()?;
        Some(Self {
            id: format!("entry_{}_{}", session_id, Uuid::new_v4()),
            index,
            text: text.to_string(),
            top_label: top.label.clone(),
            top_score: top.score,
            distribution: ranked.detected.clone(),
            created_at: Utc::now(),
        })
    }
}

/// 心情日记
///
/// 按插入顺序排列的条目序列，会话生命周期内有效。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoodDiary {
    entries: Vec<DiaryEntry>,
    next_index: u64,
}

impl MoodDiary {
    /// 创建空日记
    pub fn new() -> Self {
        Self::default()
    }

    /// 下一个条目序号
    pub fn next_index(&self) -> u64 {
        self.next_index + 1
    }

    /// 追加条目，返回追加后的条目引用
    ///
    /// 序号由日记分配，严格递增且连续。
    pub fn push(&mut self, session_id: &str, text: &str, ranked: &RankedResult) -> Option<&DiaryEntry> {
        let entry = DiaryEntry::new(session_id, self.next_index(), text, ranked)?;
        self.next_index += 1;
        self.entries.push(entry);
        self.entries.last()
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 插入顺序视图
    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    /// 逆序视图（最近的在前）
    pub fn entries_reversed(&self) -> Vec<DiaryEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    /// 清空日记并重置序号计数器，幂等
    pub fn reset(&mut self) {
        self.entries.clear();
        self.next_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(label: &str, score: f64) -> RankedResult {
        let scored = ScoredLabel::new(label, score);
        RankedResult {
            ranked: vec![scored.clone()],
            detected: vec![scored],
            threshold: 0.1,
        }
    }

    #[test]
    fn test_indices_contiguous_from_one() {
        let mut diary = MoodDiary::new();
        diary.push("s1", "I am happy", &ranked("joy", 0.9)).unwrap();
        diary.push("s1", "so sad", &ranked("sadness", 0.8)).unwrap();
        diary.push("s1", "furious", &ranked("anger", 0.7)).unwrap();

        let indices: Vec<u64> = diary.entries().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_push_increments_len_by_one() {
        let mut diary = MoodDiary::new();
        assert_eq!(diary.len(), 0);
        diary.push("s1", "hello", &ranked("joy", 0.9)).unwrap();
        assert_eq!(diary.len(), 1);
        diary.push("s1", "world", &ranked("joy", 0.9)).unwrap();
        assert_eq!(diary.len(), 2);
    }

    #[test]
    fn test_push_without_detection_is_rejected() {
        let mut diary = MoodDiary::new();
        let empty = RankedResult {
            ranked: vec![ScoredLabel::new("neutral", 0.05)],
            detected: vec![],
            threshold: 0.1,
        };
        assert!(diary.push("s1", "meh", &empty).is_none());
        assert!(diary.is_empty());
    }

    #[test]
    fn test_reversed_view_is_most_recent_first() {
        let mut diary = MoodDiary::new();
        diary.push("s1", "first", &ranked("joy", 0.9)).unwrap();
        diary.push("s1", "second", &ranked("fear", 0.6)).unwrap();

        let reversed = diary.entries_reversed();
        assert_eq!(reversed[0].text, "second");
        assert_eq!(reversed[1].text, "first");
    }

    #[test]
    fn test_reset_is_idempotent_and_restarts_numbering() {
        let mut diary = MoodDiary::new();
        diary.push("s1", "hello", &ranked("joy", 0.9)).unwrap();
        diary.reset();
        assert!(diary.is_empty());
        diary.reset();
        assert!(diary.is_empty());

        let entry = diary.push("s1", "again", &ranked("love", 0.5)).unwrap();
        assert_eq!(entry.index, 1);
    }

    #[test]
    fn test_entry_keeps_distribution_snapshot() {
        let scored = vec![
            ScoredLabel::new("joy", 0.82),
            ScoredLabel::new("surprise", 0.12),
        ];
        let ranked = RankedResult {
            ranked: scored.clone(),
            detected: scored,
            threshold: 0.1,
        };
        let entry = DiaryEntry::new("s1", 1, "wow", &ranked).unwrap();
        assert_eq!(entry.top_label.as_str(), "joy");
        assert_eq!(entry.top_score, 0.82);
        assert_eq!(entry.distribution.len(), 2);
    }
}
