//! String formatting utilities for UI rendering.

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

/// Compact number for tables: whole numbers without decimals, others to one place.
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Number of filled cells for `value` on a bar scaled so `max` fills `width`.
///
/// Any positive value gets at least one cell.
pub fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if value <= 0.0 || max <= 0.0 || width == 0 {
        return 0;
    }
    let cells = ((value / max) * width as f64).round() as usize;
    cells.clamp(1, width)
}
