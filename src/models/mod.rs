//! 数据模型模块

pub mod diary;
pub mod label;
pub mod score;

pub use diary::{DiaryEntry, MoodDiary};
pub use label::{EmotionLabel, LabelStyle, builtin_labels, label_style};
pub use score::{RankedResult, ScoredLabel};
