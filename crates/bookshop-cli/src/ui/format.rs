//! Text shaping for table cells and line-oriented output.

/// Replace line breaks and tabs with spaces so a value stays on one line.
pub fn single_line(s: &str) -> String {
    s.replace(['\n', '\r', '\t'], " ")
}

/// One-line cell text of at most `max_chars` characters, ending in "..." when clipped.
pub fn cell_text(s: &str, max_chars: usize) -> String {
    let flat = single_line(s);
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let keep = max_chars.saturating_sub(3);
    let mut clipped: String = flat.chars().take(keep).collect();
    clipped.push_str(&"..."[..max_chars.min(3)]);
    clipped
}
