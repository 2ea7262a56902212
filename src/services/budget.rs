//! Character budget enforcement
//!
//! Two separate policies shrink the four sections to fit the budget:
//! [`truncate_sections`] keeps proportional shares when a summary is first
//! generated, [`enforce_limits`] shaves trailing characters round-robin before
//! a create or update is stored. Lengths are counted in characters.

use crate::config::SummaryConfig;
use crate::domain::models::{MinutesDraft, Section, SummarySections};

/// First `count` characters of `text`
fn take_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Proportional truncation with the default budget
pub fn truncate_sections(sections: &SummarySections) -> SummarySections {
    truncate_sections_with(sections, &SummaryConfig::default())
}

/// Proportional truncation used for freshly generated summaries
///
/// When the total exceeds the limit each non-empty field keeps
/// `max(limit * len / total, floor)` leading characters, with trailing
/// whitespace stripped. This is a single pass; the result can exceed the limit
/// by up to the per-field floor when several fields are small.
pub fn truncate_sections_with(
    sections: &SummarySections,
    config: &SummaryConfig,
) -> SummarySections {
    let limit = config.max_characters;
    let total = sections.total_characters();
    if total <= limit {
        return sections.clone();
    }

    let floor = config.section_floor();
    let mut truncated = SummarySections::default();
    for section in Section::ALL {
        let value = sections.get(section);
        if value.is_empty() {
            continue;
        }
        let share = (limit * value.chars().count() / total).max(floor);
        *truncated.get_mut(section) = take_chars(value, share).trim_end().to_string();
    }

    log::info!(
        "Truncated summary from {} to {} characters (limit {})",
        total,
        truncated.total_characters(),
        limit
    );
    truncated
}

/// Round-robin limit enforcement with the default budget
pub fn enforce_limits(sections: SummarySections) -> SummarySections {
    enforce_limits_with(sections, &SummaryConfig::default())
}

/// Round-robin limit enforcement applied before persisting edits
///
/// Each field is first capped at the limit on its own. While the combined
/// length still exceeds the limit, one trailing character is removed from each
/// non-empty field in turn, starting over from `purpose` on every pass.
pub fn enforce_limits_with(
    mut sections: SummarySections,
    config: &SummaryConfig,
) -> SummarySections {
    let limit = config.max_characters;
    for section in Section::ALL {
        let value = sections.get_mut(section);
        let capped_len = take_chars(value, limit).len();
        value.truncate(capped_len);
    }

    let total = sections.total_characters();
    if total <= limit {
        return sections;
    }

    let mut excess = total - limit;
    log::info!(
        "Sections exceed limit by {} characters; trimming round-robin",
        excess
    );
    while excess > 0 {
        for section in Section::ALL {
            if sections.get_mut(section).pop().is_none() {
                continue;
            }
            excess -= 1;
            if excess == 0 {
                break;
            }
        }
    }
    sections
}

impl MinutesDraft {
    /// Applies [`enforce_limits_with`] to the draft's sections
    pub fn enforce_limits(mut self, config: &SummaryConfig) -> Self {
        self.sections = enforce_limits_with(std::mem::take(&mut self.sections), config);
        self
    }
}
