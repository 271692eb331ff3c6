//! 日记服务
//!
//! 提供会话级心情日记的追加、读取与重置。存储为进程内
//! 按会话分片的内存表，不做会话生命周期之外的持久化。

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::diary::{DiaryEntry, MoodDiary};
use crate::models::score::RankedResult;

/// 条目读取顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryOrder {
    /// 插入顺序
    #[default]
    Asc,
    /// 逆序（最近的在前）
    Desc,
}

/// 会话日记存储
///
/// 每个会话独立一本日记，首次追加时惰性创建。
/// 会话内追加严格串行，由单一用户操作驱动。
#[derive(Clone, Default)]
pub struct DiaryStore {
    diaries: Arc<DashMap<String, MoodDiary>>,
}

impl DiaryStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前会话数量
    pub fn session_count(&self) -> usize {
        self.diaries.len()
    }
}

/// 日记服务 trait
#[async_trait]
pub trait DiaryService: Send + Sync {
    /// 追加条目
    ///
    /// 仅在排序结果存在达到阈值的情绪时可调用；空白文本返回 `EmptyInput`。
    async fn append(
        &self,
        session_id: &str,
        text: &str,
        ranked: &RankedResult,
    ) -> Result<DiaryEntry>;

    /// 读取条目
    async fn entries(&self, session_id: &str, order: EntryOrder) -> Result<Vec<DiaryEntry>>;

    /// 条目数量
    async fn count(&self, session_id: &str) -> Result<u64>;

    /// 清空会话日记，幂等（未知会话为空操作）
    async fn reset(&self, session_id: &str) -> Result<()>;
}

/// 日记服务实现
pub struct DiaryServiceImpl {
    store: DiaryStore,
}

impl DiaryServiceImpl {
    /// 创建新的服务实例
    pub fn new(store: DiaryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DiaryService for DiaryServiceImpl {
    async fn append(
        &self,
        session_id: &str,
        text: &str,
        ranked: &RankedResult,
    ) -> Result<DiaryEntry> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::EmptyInput);
        }

        let mut diary = self.store.diaries.entry(session_id.to_string()).or_default();
        diary
            .push(session_id, text, ranked)
            .cloned()
            .ok_or_else(|| {
                AppError::Internal("append called without a detected emotion".to_string())
            })
    }

    async fn entries(&self, session_id: &str, order: EntryOrder) -> Result<Vec<DiaryEntry>> {
        let entries = match self.store.diaries.get(session_id) {
            Some(diary) => match order {
                EntryOrder::Asc => diary.entries().to_vec(),
                EntryOrder::Desc => diary.entries_reversed(),
            },
            None => Vec::new(),
        };
        Ok(entries)
    }

    async fn count(&self, session_id: &str) -> Result<u64> {
        Ok(self
            .store
            .diaries
            .get(session_id)
            .map(|d| d.len() as u64)
            .unwrap_or(0))
    }

    async fn reset(&self, session_id: &str) -> Result<()> {
        if let Some(mut diary) = self.store.diaries.get_mut(session_id) {
            diary.reset();
        }
        Ok(())
    }
}

/// 创建日记服务
pub fn create_diary_service(store: DiaryStore) -> Box<dyn DiaryService> {
    Box::new(DiaryServiceImpl::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::score::ScoredLabel;

    fn ranked(label: &str, score: f64) -> RankedResult {
        let scored = ScoredLabel::new(label, score);
        RankedResult {
            ranked: vec![scored.clone()],
            detected: vec![scored],
            threshold: 0.1,
        }
    }

    #[tokio::test]
    async fn test_append_assigns_sequential_indices() {
        let service = DiaryServiceImpl::new(DiaryStore::new());
        let first = service.append("s1", "I am happy", &ranked("joy", 0.9)).await.unwrap();
        let second = service.append("s1", "so sad", &ranked("sadness", 0.8)).await.unwrap();

        assert_eq!(first.index, 1);
        assert_eq!(second.index, 2);
        assert_eq!(service.count("s1").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_append_rejects_blank_text() {
        let service = DiaryServiceImpl::new(DiaryStore::new());
        let err = service.append("s1", "   ", &ranked("joy", 0.9)).await.unwrap_err();
        assert!(matches!(err, AppError::EmptyInput));
        assert_eq!(service.count("s1").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let service = DiaryServiceImpl::new(DiaryStore::new());
        service.append("s1", "happy", &ranked("joy", 0.9)).await.unwrap();
        service.append("s2", "sad", &ranked("sadness", 0.7)).await.unwrap();

        assert_eq!(service.count("s1").await.unwrap(), 1);
        assert_eq!(service.count("s2").await.unwrap(), 1);
        let s1 = service.entries("s1", EntryOrder::Asc).await.unwrap();
        assert_eq!(s1[0].top_label.as_str(), "joy");
    }

    #[tokio::test]
    async fn test_entries_desc_is_most_recent_first() {
        let service = DiaryServiceImpl::new(DiaryStore::new());
        service.append("s1", "first", &ranked("joy", 0.9)).await.unwrap();
        service.append("s1", "second", &ranked("fear", 0.6)).await.unwrap();

        let desc = service.entries("s1", EntryOrder::Desc).await.unwrap();
        assert_eq!(desc[0].text, "second");
        assert_eq!(desc[1].text, "first");
    }

    #[tokio::test]
    async fn test_reset_clears_and_restarts_numbering() {
        let service = DiaryServiceImpl::new(DiaryStore::new());
        service.append("s1", "hello", &ranked("joy", 0.9)).await.unwrap();
        service.reset("s1").await.unwrap();

        assert!(service.entries("s1", EntryOrder::Asc).await.unwrap().is_empty());
        let entry = service.append("s1", "again", &ranked("love", 0.5)).await.unwrap();
        assert_eq!(entry.index, 1);
    }

    #[tokio::test]
    async fn test_reset_unknown_session_is_noop() {
        let service = DiaryServiceImpl::new(DiaryStore::new());
        assert!(service.reset("missing").await.is_ok());
        assert!(service.entries("missing", EntryOrder::Asc).await.unwrap().is_empty());
    }
}
