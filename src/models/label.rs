//! 情绪标签注册表
//!
//! 固定的内置标签集合及其展示元数据。模型返回未知标签时不拒绝，
//! 按默认元数据处理。

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 情绪标签
///
/// 小写规范化的标签名。注册表成员在运行期不变。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionLabel(String);

impl EmotionLabel {
    /// 创建标签（小写规范化）
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// 标签名
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 是否为内置标签
    pub fn is_builtin(&self) -> bool {
        STYLES.contains_key(self.0.as_str())
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmotionLabel {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// 标签展示元数据
#[derive(Debug, Clone, Serialize)]
pub struct LabelStyle {
    /// 表情符号
    pub emoji: &'static str,
    /// 背景色
    pub color: &'static str,
    /// 反应 GIF 地址
    pub gif_url: Option<&'static str>,
}

static STYLES: Lazy<HashMap<&'static str, LabelStyle>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "joy",
        LabelStyle {
            emoji: "😄",
            color: "#fff9c4",
            gif_url: Some("https://media3.giphy.com/media/5tkQ2D8oxYBVKwWNMV/giphy.gif"),
        },
    );
    m.insert(
        "sadness",
        LabelStyle {
            emoji: "😢",
            color: "#bbdefb",
            gif_url: Some("https://media1.giphy.com/media/mpy4YrE8nw6K3FCfz0/giphy.gif"),
        },
    );
    m.insert(
        "anger",
        LabelStyle {
            emoji: "😠",
            color: "#ffcdd2",
            gif_url: Some("https://media2.giphy.com/media/69Egkd3vBh3AXuA5SC/giphy.gif"),
        },
    );
    m.insert(
        "fear",
        LabelStyle {
            emoji: "😱",
            color: "#d1c4e9",
            gif_url: Some("https://media3.giphy.com/media/DHw6uxU2WbJ3a/giphy.gif"),
        },
    );
    m.insert(
        "surprise",
        LabelStyle {
            emoji: "😲",
            color: "#e1bee7",
            gif_url: Some("https://media1.giphy.com/media/E9bnFb6MvQgdTTS0CF/giphy.gif"),
        },
    );
    m.insert(
        "love",
        LabelStyle {
            emoji: "❤️",
            color: "#f8bbd0",
            gif_url: Some("https://media.giphy.com/media/l0HlOvJ7yaacpuSas/giphy.gif"),
        },
    );
    m.insert(
        "neutral",
        LabelStyle {
            emoji: "😐",
            color: "#cfd8dc",
            gif_url: Some("https://media.giphy.com/media/xT9IgIc0lryrxvqVGM/giphy.gif"),
        },
    );
    m.insert(
        "disgust",
        LabelStyle {
            emoji: "🤢",
            color: "#dcedc8",
            gif_url: Some("https://media.giphy.com/media/3o6Zt481isNVuQI1l6/giphy.gif"),
        },
    );
    m
});

/// 未知标签的默认元数据
const DEFAULT_STYLE: LabelStyle = LabelStyle {
    emoji: "❓",
    color: "#eee",
    gif_url: None,
};

/// 内置标签集合（按名称排序）
pub fn builtin_labels() -> Vec<EmotionLabel> {
    let mut names: Vec<&str> = STYLES.keys().copied().collect();
    names.sort_unstable();
    names.into_iter().map(EmotionLabel::new).collect()
}

/// 查询标签展示元数据，未知标签返回默认值
pub fn label_style(label: &EmotionLabel) -> LabelStyle {
    STYLES
        .get(label.as_str())
        .cloned()
        .unwrap_or(DEFAULT_STYLE)
}
