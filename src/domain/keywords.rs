//! Heuristic keyword table and placeholder text
//!
//! Classification is a flat rule table: each section owns a handful of trigger
//! substrings, checked in [`Section::ALL`] order.

use crate::domain::models::Section;

/// Trigger substrings per section, in priority order
pub const SECTION_KEYWORDS: [(Section, &[&str]); 4] = [
    (Section::Purpose, &["目的", "ゴール", "狙い", "目標"]),
    (Section::Decisions, &["決定", "合意", "決めた", "承認"]),
    (
        Section::ActionItems,
        &["宿題", "アクション", "TODO", "タスク", "対応"],
    ),
    (
        Section::Digest,
        &["概要", "要旨", "サマリ", "まとめ", "ポイント"],
    ),
];

/// Returns the first section whose keywords occur in the line
///
/// Matching is a case-insensitive substring test. Full-width colons are
/// normalized before matching.
pub fn match_section(line: &str) -> Option<Section> {
    let lowered = normalize_colon(line).to_lowercase();
    SECTION_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|keyword| lowered.contains(&keyword.to_lowercase()))
        })
        .map(|(section, _)| *section)
}

/// Replaces full-width colons with ASCII ones
pub fn normalize_colon(line: &str) -> String {
    line.replace('：', ":")
}

/// Text after the first colon (either width), trimmed
///
/// Returns `None` when the line has no colon at all.
pub fn after_colon(line: &str) -> Option<&str> {
    line.split_once([':', '：']).map(|(_, rest)| rest.trim())
}

/// Strips a leading bullet marker
///
/// Recognized markers are `-`, `*`, `・` and a digit run closed by `.` or `)`.
/// Returns `None` when the line does not start with a marker.
pub fn strip_bullet(line: &str) -> Option<&str> {
    let rest = if let Some(rest) = line.strip_prefix(['-', '*', '・']) {
        rest
    } else {
        let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        line[digits..].strip_prefix(['.', ')'])?
    };
    Some(rest.trim_start())
}

/// Placeholder text used when a section cannot be inferred
pub struct FallbackText;

impl FallbackText {
    /// Purpose placeholder built from the meeting title
    pub fn purpose(title: &str) -> String {
        if title.is_empty() {
            "会議の目的を要約".to_string()
        } else {
            format!("{}に関する会議の目的を確認", title)
        }
    }

    pub fn decisions() -> &'static str {
        "決定事項は会議内の合意内容に基づきます"
    }

    pub fn action_items() -> &'static str {
        "宿題は会議参加者に共有済みのタスクを参照してください"
    }
}
