//! String utilities for the domain layer.

/// Truncate to at most `max_chars` characters, appending `...` when cut.
///
/// Counts characters rather than bytes so `₹` or accented party names never
/// split mid-codepoint.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let head: String = s.chars().take(keep).collect();
    format!("{}...", head)
}
