//! 分类结果排序器
//!
//! 将模型返回的无序 (标签, 得分) 集合转换为确定性排序、
//! 经阈值过滤的视图。纯函数，无副作用。

use std::collections::HashSet;

use crate::error::{AppError, Result};
use crate::models::score::{RankedResult, ScoredLabel};

/// 排序并应用检测阈值
///
/// 排序规则：得分降序，同分按标签名升序，保证相同得分集合
/// 的输出与模型返回顺序无关。重复标签或越界得分视为模型
/// 契约违反，返回 `MalformedScoreSet`。
pub fn rank(raw: Vec<ScoredLabel>, threshold: f64) -> Result<RankedResult> {
    validate(&raw)?;

    let mut ranked = raw;
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.label.cmp(&b.label))
    });

    let detected: Vec<ScoredLabel> = ranked
        .iter()
        .filter(|s| s.score >= threshold)
        .cloned()
        .collect();

    Ok(RankedResult {
        ranked,
        detected,
        threshold,
    })
}

fn validate(raw: &[ScoredLabel]) -> Result<()> {
    let mut seen = HashSet::new();
    for scored in raw {
        if !(0.0..=1.0).contains(&scored.score) {
            return Err(AppError::MalformedScoreSet(format!(
                "score out of range for label '{}': {}",
                scored.label, scored.score
            )));
        }
        if !seen.insert(scored.label.clone()) {
            return Err(AppError::MalformedScoreSet(format!(
                "duplicate label in score set: '{}'",
                scored.label
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn scores(pairs: &[(&str, f64)]) -> Vec<ScoredLabel> {
        pairs.iter().map(|(l, s)| ScoredLabel::new(l, *s)).collect()
    }

    #[test]
    fn test_sorted_by_descending_score() {
        let result = rank(
            scores(&[("sadness", 0.05), ("joy", 0.82), ("anger", 0.3)]),
            0.1,
        )
        .unwrap();

        let names: Vec<&str> = result.ranked.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(names, vec!["joy", "anger", "sadness"]);
        for pair in result.ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_broken_by_ascending_label_name() {
        let result = rank(
            scores(&[("surprise", 0.4), ("anger", 0.4), ("joy", 0.4)]),
            0.1,
        )
        .unwrap();

        let names: Vec<&str> = result.ranked.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(names, vec!["anger", "joy", "surprise"]);
    }

    #[test]
    fn test_deterministic_regardless_of_input_order() {
        let a = rank(scores(&[("joy", 0.5), ("love", 0.5), ("fear", 0.2)]), 0.1).unwrap();
        let b = rank(scores(&[("fear", 0.2), ("love", 0.5), ("joy", 0.5)]), 0.1).unwrap();
        assert_eq!(a.ranked, b.ranked);
        assert_eq!(a.detected, b.detected);
    }

    #[test]
    fn test_threshold_filters_detected_set() {
        // 只有 joy 达到 0.1 阈值
        let result = rank(
            scores(&[
                ("joy", 0.82),
                ("sadness", 0.05),
                ("anger", 0.02),
                ("neutral", 0.04),
                ("fear", 0.01),
                ("surprise", 0.03),
                ("love", 0.02),
                ("disgust", 0.01),
            ]),
            0.1,
        )
        .unwrap();

        assert_eq!(result.detected.len(), 1);
        assert_eq!(result.top().unwrap().label.as_str(), "joy");
        assert_eq!(result.top().unwrap().score, 0.82);
    }

    #[test]
    fn test_all_below_threshold_yields_empty_detection() {
        let result = rank(scores(&[("joy", 0.09), ("sadness", 0.05)]), 0.1).unwrap();
        assert!(!result.has_detection());
        assert!(result.top().is_none());
        // 全量排序结果依然可用
        assert_eq!(result.ranked.len(), 2);
    }

    #[test]
    fn test_score_equal_to_threshold_is_detected() {
        let result = rank(scores(&[("joy", 0.1)]), 0.1).unwrap();
        assert!(result.has_detection());
    }

    #[test]
    fn test_duplicate_labels_are_malformed() {
        let err = rank(scores(&[("joy", 0.5), ("joy", 0.4)]), 0.1).unwrap_err();
        assert!(matches!(err, AppError::MalformedScoreSet(_)));
    }

    #[rstest]
    #[case(-0.01)]
    #[case(1.01)]
    #[case(f64::NAN)]
    fn test_out_of_range_scores_are_malformed(#[case] score: f64) {
        let err = rank(scores(&[("joy", score)]), 0.1).unwrap_err();
        assert!(matches!(err, AppError::MalformedScoreSet(_)));
    }

    #[test]
    fn test_missing_labels_are_tolerated() {
        // 模型漏掉部分词表标签时按缺席处理
        let result = rank(scores(&[("joy", 0.6)]), 0.1).unwrap();
        assert_eq!(result.ranked.len(), 1);
        assert_eq!(result.detected.len(), 1);
    }

    #[test]
    fn test_empty_score_set_is_no_detection() {
        let result = rank(vec![], 0.1).unwrap();
        assert!(!result.has_detection());
    }
}
