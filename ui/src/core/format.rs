//! Formatting helpers for presenting figures.

/// Render `value` with `,` thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_count(value: u64, grouped: bool, suffix: &str) -> String {
    if grouped {
        format!("{}{suffix}", group_thousands(value))
    } else {
        format!("{value}{suffix}")
    }
}
