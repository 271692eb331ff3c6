//! 内置词表分类器
//!
//! 基于关键词命中的确定性打分器，用于开发环境与测试，
//! 不依赖任何外部服务。始终覆盖全部内置标签。

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::classifier::EmotionClassifier;
use crate::error::Result;
use crate::models::label::builtin_labels;
use crate::models::score::ScoredLabel;

static KEYWORDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let entries: [(&str, &str); 24] = [
        ("happy", "joy"),
        ("glad", "joy"),
        ("great", "joy"),
        ("wonderful", "joy"),
        ("sad", "sadness"),
        ("unhappy", "sadness"),
        ("cry", "sadness"),
        ("miserable", "sadness"),
        ("angry", "anger"),
        ("furious", "anger"),
        ("hate", "anger"),
        ("annoyed", "anger"),
        ("afraid", "fear"),
        ("scared", "fear"),
        ("terrified", "fear"),
        ("worried", "fear"),
        ("wow", "surprise"),
        ("unexpected", "surprise"),
        ("amazing", "surprise"),
        ("love", "love"),
        ("adore", "love"),
        ("okay", "neutral"),
        ("fine", "neutral"),
        ("disgusting", "disgust"),
    ];
    entries.into_iter().collect()
});

/// 词表分类器
pub struct LexiconClassifier {
    model_name: String,
}

impl LexiconClassifier {
    pub fn new() -> Self {
        Self {
            model_name: "builtin-lexicon".to_string(),
        }
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmotionClassifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<ScoredLabel>> {
        let words: Vec<String> = text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(|w| w.to_string())
            .collect();

        let mut hits: HashMap<&str, usize> = HashMap::new();
        for word in &words {
            if let Some(&label) = KEYWORDS.get(word.as_str()) {
                *hits.entry(label).or_insert(0) += 1;
            }
        }

        let total = words.len().max(1) as f64;
        Ok(builtin_labels()
            .into_iter()
            .map(|label| {
                let count = hits.get(label.as_str()).copied().unwrap_or(0) as f64;
                ScoredLabel {
                    score: (count / total).min(1.0),
                    label,
                }
            })
            .collect())
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
