//! Version differ
//!
//! Line-level diffs between adjacent version snapshots. Each diff line is
//! prefixed with `"  "` (unchanged), `"- "` (removed) or `"+ "` (added).

use crate::domain::models::{FieldDiff, HistoryEntry, Section, VersionSnapshot};
use crate::domain::text::split_lines;

/// Line operations from an LCS alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineOp<'a> {
    Equal(&'a str),
    Delete(&'a str),
    Insert(&'a str),
}

/// Aligns two line sequences by longest common subsequence
///
/// Within a changed block deletions come before insertions.
fn align<'a>(old: &[&'a str], new: &[&'a str]) -> Vec<LineOp<'a>> {
    let (old_len, new_len) = (old.len(), new.len());

    // suffix table: dp[i][j] = LCS length of old[i..] and new[j..]
    let mut dp = vec![vec![0u32; new_len + 1]; old_len + 1];
    for i in (0..old_len).rev() {
        for j in (0..new_len).rev() {
            dp[i][j] = if old[i] == new[j] {
                dp[i + 1][j + 1] + 1
            } else {
                dp[i + 1][j].max(dp[i][j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(old_len + new_len);
    let (mut i, mut j) = (0, 0);
    while i < old_len || j < new_len {
        if i < old_len && j < new_len && old[i] == new[j] {
            ops.push(LineOp::Equal(old[i]));
            i += 1;
            j += 1;
        } else if i < old_len && (j == new_len || dp[i + 1][j] >= dp[i][j + 1]) {
            ops.push(LineOp::Delete(old[i]));
            i += 1;
        } else {
            ops.push(LineOp::Insert(new[j]));
            j += 1;
        }
    }
    ops
}

/// Renders a marker-prefixed line diff; identical texts yield an empty string
pub fn diff_lines(previous: &str, current: &str) -> String {
    if previous == current {
        return String::new();
    }
    let old = split_lines(previous);
    let new = split_lines(current);

    align(&old, &new)
        .into_iter()
        .map(|op| match op {
            LineOp::Equal(line) => format!("  {}", line),
            LineOp::Delete(line) => format!("- {}", line),
            LineOp::Insert(line) => format!("+ {}", line),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Diffs of the first snapshot: everything is new, shown verbatim
pub fn initial_diffs(current: &VersionSnapshot) -> Vec<FieldDiff> {
    Section::ALL
        .iter()
        .map(|&field| {
            let text = current.sections.get(field).to_string();
            FieldDiff {
                field,
                previous: String::new(),
                current: text.clone(),
                diff: text,
            }
        })
        .collect()
}

/// Per-field diffs between two snapshots, in section order
pub fn compute_diffs(previous: &VersionSnapshot, current: &VersionSnapshot) -> Vec<FieldDiff> {
    Section::ALL
        .iter()
        .map(|&field| {
            let prev_value = previous.sections.get(field);
            let curr_value = current.sections.get(field);
            FieldDiff {
                field,
                previous: prev_value.to_string(),
                current: curr_value.to_string(),
                diff: diff_lines(prev_value, curr_value),
            }
        })
        .collect()
}

/// Change history, oldest snapshot first
///
/// Snapshots are ordered by `created_at`, then by id. The first entry diffs
/// against nothing.
pub fn list_history(snapshots: &[VersionSnapshot]) -> Vec<HistoryEntry> {
    let mut ordered: Vec<&VersionSnapshot> = snapshots.iter().collect();
    ordered.sort_by_key(|snapshot| (snapshot.created_at, snapshot.id));

    let mut history = Vec::with_capacity(ordered.len());
    let mut previous: Option<&VersionSnapshot> = None;
    for current in ordered {
        let diffs = match previous {
            Some(previous) => compute_diffs(previous, current),
            None => initial_diffs(current),
        };
        history.push(HistoryEntry {
            version: current.clone(),
            diffs,
        });
        previous = Some(current);
    }

    log::debug!("Built history with {} entries", history.len());
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SummarySections;
    use chrono::{Duration, TimeZone, Utc};

    fn snapshot(id: u64, minute: i64, sections: SummarySections) -> VersionSnapshot {
        VersionSnapshot {
            id,
            sections,
            editor: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap() + Duration::minutes(minute),
        }
    }

    #[test]
    fn test_diff_identical_is_empty() {
        assert_eq!(diff_lines("a\nb", "a\nb"), "");
    }

    #[test]
    fn test_diff_marks_changes() {
        let diff = diff_lines("A案を採用\n予算据え置き", "B案を採用\n予算据え置き\n来月再検討");
        assert_eq!(
            diff,
            "- A案を採用\n+ B案を採用\n  予算据え置き\n+ 来月再検討"
        );
    }

    #[test]
    fn test_diff_from_empty_and_to_empty() {
        assert_eq!(diff_lines("", "x\ny"), "+ x\n+ y");
        assert_eq!(diff_lines("x", ""), "- x");
    }

    #[test]
    fn test_diff_carriage_return_lines() {
        assert_eq!(diff_lines("A案\r予算", "A案\r予算\r日程"), "  A案\n  予算\n+ 日程");
        assert_eq!(diff_lines("a\r\nb", "a\rc"), "  a\n- b\n+ c");
    }

    #[test]
    fn test_diff_is_deterministic() {
        let old = "a\nb\nc\nb";
        let new = "b\na\nc\nd";
        assert_eq!(diff_lines(old, new), diff_lines(old, new));
    }

    #[test]
    fn test_initial_diffs_equal_current() {
        let first = snapshot(1, 0, SummarySections::new("p", "d", "a", "g"));
        let diffs = initial_diffs(&first);
        assert_eq!(diffs.len(), 4);
        for diff in &diffs {
            assert!(diff.previous.is_empty());
            assert_eq!(diff.diff, diff.current);
            assert_eq!(diff.current, first.sections.get(diff.field));
        }
    }

    #[test]
    fn test_compute_diffs_field_order() {
        let a = snapshot(1, 0, SummarySections::new("p", "d", "a", "g"));
        let b = snapshot(2, 1, SummarySections::new("p", "d2", "a", "g"));
        let diffs = compute_diffs(&a, &b);
        let fields: Vec<Section> = diffs.iter().map(|d| d.field).collect();
        assert_eq!(fields, Section::ALL.to_vec());
        assert_eq!(diffs[1].diff, "- d\n+ d2");
        assert_eq!(diffs[0].diff, "");
    }

    #[test]
    fn test_history_sorted_by_time_then_id() {
        let late = snapshot(1, 10, SummarySections::new("late", "", "", ""));
        let tie_b = snapshot(3, 0, SummarySections::new("b", "", "", ""));
        let tie_a = snapshot(2, 0, SummarySections::new("a", "", "", ""));
        let history = list_history(&[late, tie_b, tie_a]);

        let order: Vec<u64> = history.iter().map(|e| e.version.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(history[0].diffs[0].diff, "a");
        assert_eq!(history[1].diffs[0].diff, "- a\n+ b");
    }

    #[test]
    fn test_empty_history() {
        assert!(list_history(&[]).is_empty());
    }
}
