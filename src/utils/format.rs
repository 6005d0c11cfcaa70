use chrono::NaiveTime;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Zero-pad to at least two digits
pub fn pad2(n: i64) -> String {
    format!("{:02}", n)
}

/// Format a NaiveTime to "HH:MM"
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Jummah times as a bulleted line: "• 13:00  • 14:00"
pub fn format_jummah(times: &[String]) -> String {
    times
        .iter()
        .map(|t| format!("• {}", t))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Cut `s` to at most `max` terminal columns, ending with "…" when cut.
pub fn truncate_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Right-pad `s` with spaces to `width` terminal columns.
pub fn pad_width(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}
