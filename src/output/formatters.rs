//! Formatting utilities for terminal output

/// Group digits in thousands, e.g. `12972` as `12,972`
#[must_use]
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Horizontal rule for section headers
#[must_use]
pub fn rule(width: usize) -> String {
    "═".repeat(width)
}
