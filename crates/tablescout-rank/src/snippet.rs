//! Review excerpt cleanup for snippet enrichment.

/// Longest snippet returned to the caller, in characters.
pub const MAX_SNIPPET_CHARS: usize = 160;
/// Characters kept before the ellipsis when truncating.
const TRUNCATED_CHARS: usize = 157;

/// Collapses whitespace runs to single spaces, trims, and truncates long
/// text to 157 characters plus an ellipsis.
#[must_use]
pub fn clean_excerpt(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > MAX_SNIPPET_CHARS {
        let mut truncated: String = collapsed.chars().take(TRUNCATED_CHARS).collect();
        truncated.push('…');
        truncated
    } else {
        collapsed
    }
}
