//! Line classifier
//!
//! Splits raw notes into trimmed lines and sorts each line into a section
//! bucket or the remainder.

use crate::domain::keywords::{after_colon, match_section, strip_bullet};
use crate::domain::models::{InputMode, ParsedSections, Section};
use crate::domain::text::split_lines;

/// Classifies raw notes into section buckets
///
/// A header line (one containing a section keyword) switches the current
/// section; following lines inherit it until the next header. Lines before any
/// header go to `remainder`, except bullet lines in bullet mode, which go to
/// `digest` with the marker stripped.
pub fn classify(text: &str, input_mode: InputMode) -> ParsedSections {
    let mut parsed = ParsedSections::default();
    let mut current: Option<Section> = None;

    for line in split_lines(text).into_iter().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(section) = match_section(line) {
            current = Some(section);
            let content = after_colon(line).unwrap_or(line);
            parsed.lines_mut(section).push(content.to_string());
            continue;
        }

        match current {
            Some(section) => parsed.lines_mut(section).push(line.to_string()),
            None => match (input_mode, strip_bullet(line)) {
                (InputMode::Bullet, Some(stripped)) => parsed.digest.push(stripped.to_string()),
                _ => parsed.remainder.push(line.to_string()),
            },
        }
    }

    log::debug!(
        "Classified lines: purpose={}, decisions={}, action_items={}, digest={}, remainder={}",
        parsed.purpose.len(),
        parsed.decisions.len(),
        parsed.action_items.len(),
        parsed.digest.len(),
        parsed.remainder.len()
    );

    parsed
}
