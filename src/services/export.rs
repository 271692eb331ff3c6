//! 导出格式化器
//!
//! 将日记快照渲染为行式纯文本报告。纯函数，
//! 渲染结果不受日记后续变化影响。

use crate::models::diary::DiaryEntry;

/// 报告头
const HEADER: &str = "Mood Diary - Emotion Detector";

/// 渲染日记报告
///
/// 头部一行标题加 40 个短横线分隔，正文每条目一行：
/// `<序号>. <文本> --> <top 标签>`，按插入顺序排列。
pub fn render_report(entries: &[DiaryEntry]) -> String {
    let mut report = String::new();
    report.push_str(HEADER);
    report.push('\n');
    report.push_str(&"-".repeat(40));
    report.push('\n');

    for entry in entries {
        report.push_str(&format!(
            "{}. {} --> {}\n",
            entry.index, entry.text, entry.top_label
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::score::{RankedResult, ScoredLabel};

    fn entry(index: u64, text: &str, label: &str) -> DiaryEntry {
        let scored = ScoredLabel::new(label, 0.9);
        let ranked = RankedResult {
            ranked: vec![scored.clone()],
            detected: vec![scored],
            threshold: 0.1,
        };
        DiaryEntry::new("s1", index, text, &ranked).unwrap()
    }

    #[test]
    fn test_report_body_lines_match_expected_format() {
        let entries = vec![entry(1, "I am happy", "joy"), entry(2, "so sad", "sadness")];
        let report = render_report(&entries);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Mood Diary - Emotion Detector");
        assert_eq!(lines[1], "-".repeat(40));
        assert_eq!(lines[2], "1. I am happy --> joy");
        assert_eq!(lines[3], "2. so sad --> sadness");
    }

    #[test]
    fn test_empty_diary_renders_header_only() {
        let report = render_report(&[]);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_report_is_a_snapshot() {
        let mut entries = vec![entry(1, "first", "joy")];
        let before = render_report(&entries);
        entries.push(entry(2, "second", "fear"));
        let after = render_report(&entries);

        assert_ne!(before, after);
        assert!(after.starts_with(&before));
    }
}
