//! Text helpers for list rendering

/// Truncate a string to `max_chars` characters, appending an ellipsis when
/// content was cut. Counts chars, not bytes, so multi-byte content is safe.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Collapse newlines into spaces so a post body fits a single list row.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
