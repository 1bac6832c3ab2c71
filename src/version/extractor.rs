//! Version token extraction from unstructured page text
//!
//! Every dot-separated numeric token is a candidate. Candidates are scored by
//! the text around them so that a token labelled as the VLC release beats
//! dates and unrelated numbers on the same page.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::version::compare::{Component, parse_version};

/// Characters of context taken on each side of a candidate
const CONTEXT_CHARS: usize = 40;

// ASCII digits only: Unicode decimal digits such as "٣" are not version text.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]+\.[0-9]+(?:\.[0-9]+){0,2})\b").expect("version pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate<'a> {
    score: u32,
    components: Vec<Component>,
    literal: &'a str,
}

/// Return the most plausible VLC version found in `text`.
///
/// HTML entities are decoded first, including legacy ones written without a
/// trailing semicolon such as `&nbsp`. The literal matched text is returned, not
/// a normalized form, so "03.0.21" stays "03.0.21".
pub fn extract_version(text: &str) -> Option<String> {
    let decoded = htmlize::unescape(text);
    let candidates = rank_candidates(&decoded);

    debug!("Found {} version candidates", candidates.len());

    candidates.first().map(|c| c.literal.to_string())
}

/// Score for a lowercased context window.
fn score_context(context: &str) -> u32 {
    let mut score = 1;
    if context.contains("vlc") {
        score += 2;
    }
    if context.contains("media player") || context.contains("release") {
        score += 1;
    }
    score
}

/// All candidates, best first. Ties on score and version keep page order.
fn rank_candidates(text: &str) -> Vec<Candidate<'_>> {
    let mut candidates: Vec<Candidate<'_>> = VERSION_PATTERN
        .find_iter(text)
        .filter_map(|m| {
            let literal = m.as_str();
            let components = parse_version(literal).ok()?;
            let context = context_window(text, m.start(), m.end()).to_lowercase();
            Some(Candidate {
                score: score_context(&context),
                components,
                literal,
            })
        })
        .collect();

    candidates.sort_by(|a, b| (b.score, &b.components).cmp(&(a.score, &a.components)));
    candidates
}

/// Up to `CONTEXT_CHARS` characters before `start` through `CONTEXT_CHARS`
/// characters after `end`. Offsets are byte positions on char boundaries.
fn context_window(text: &str, start: usize, end: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_CHARS - 1)
        .map_or(0, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map_or(text.len(), |(i, _)| end + i);
    &text[from..to]
}
