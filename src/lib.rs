//! Limbic - 情绪日记服务
//!
//! 接收用户提交的自由文本，调用外部情绪分类模型获得逐标签得分分布，
//! 对结果排序、应用检测阈值、选出代表情绪，并将历次分析累积为
//! 会话级的"心情日记"与实时分布统计。

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
