//! Section assembly and fallback inference
//!
//! Joins classified buckets into section text and fills absent sections from
//! the remainder, the other buckets, or placeholder text.

use crate::domain::keywords::FallbackText;
use crate::domain::models::{ParsedSections, RawInput, Section, SummarySections};

/// Joins trimmed, non-empty lines with newlines
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lines used for the digest section
///
/// The digest bucket when non-empty, else up to three remainder lines, else up
/// to three lines from the decisions bucket (or purpose when decisions is empty).
pub fn fallback_digest(parsed: &ParsedSections) -> Vec<String> {
    let digest = parsed.lines(Section::Digest);
    if !digest.is_empty() {
        return digest.to_vec();
    }
    let decisions = parsed.lines(Section::Decisions);
    let source = if !parsed.remainder.is_empty() {
        &parsed.remainder[..]
    } else if !decisions.is_empty() {
        decisions
    } else {
        parsed.lines(Section::Purpose)
    };
    source.iter().take(3).cloned().collect()
}

/// Builds pre-budget section text from classified buckets
pub fn assemble(parsed: &ParsedSections, request: &RawInput) -> SummarySections {
    let purpose = non_empty(join_lines(parsed.lines(Section::Purpose)))
        .unwrap_or_else(|| infer_purpose(request, parsed));
    let decisions = non_empty(join_lines(parsed.lines(Section::Decisions)))
        .unwrap_or_else(|| infer_decisions(parsed));
    let action_items = non_empty(join_lines(parsed.lines(Section::ActionItems)))
        .unwrap_or_else(|| infer_action_items(parsed));
    let digest =
        non_empty(join_lines(&fallback_digest(parsed))).unwrap_or_else(|| purpose.clone());

    SummarySections {
        purpose,
        decisions,
        action_items,
        digest,
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn infer_purpose(request: &RawInput, parsed: &ParsedSections) -> String {
    log::debug!("No purpose lines; inferring from remainder or title");
    match parsed.remainder.first() {
        Some(line) => line.clone(),
        None => FallbackText::purpose(&request.title),
    }
}

fn infer_decisions(parsed: &ParsedSections) -> String {
    log::debug!("No decision lines; inferring from remainder");
    if parsed.remainder.is_empty() {
        return FallbackText::decisions().to_string();
    }
    parsed
        .remainder
        .iter()
        .skip(1)
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn infer_action_items(parsed: &ParsedSections) -> String {
    log::debug!("No action item lines; inferring from decisions");
    let decisions = parsed.lines(Section::Decisions);
    if decisions.is_empty() {
        return FallbackText::action_items().to_string();
    }
    let start = decisions.len().saturating_sub(2);
    decisions[start..].join("\n")
}
