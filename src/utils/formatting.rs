//! Small display helpers shared by `status` and `list`.

/// Render a working-hours value the way the archive stores it: two decimals
/// at most, trailing zeros trimmed ("9.5 h", "1.42 h", "0 h").
pub fn hours_label(hours: f64) -> String {
    let s = format!("{:.2}", hours);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{} h", s)
}

pub fn separator(width: usize) -> String {
    "-".repeat(width)
}
