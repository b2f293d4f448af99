//! Digit-only input filtering.

/// Keep only ASCII `0-9`, in their original order.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Filtered value, or `None` when the input already holds only digits and
/// nothing needs writing back.
pub fn filter_numeric(value: &str) -> Option<String> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        None
    } else {
        Some(digits_only(value))
    }
}
