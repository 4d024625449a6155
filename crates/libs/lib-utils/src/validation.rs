//! # Validation Utilities
//!
//! Input validation helpers for amount fields.

/// Sanitize what the user typed into an amount field.
///
/// Commas are read as decimal points. The result must be digits with at most
/// one `.` (leading or trailing point allowed, the user is still typing).
/// Returns `None` when the input should be rejected and the field left as is.
///
/// # Examples
///
/// ```rust
/// use lib_utils::validation::sanitize_numeric_input;
///
/// assert_eq!(sanitize_numeric_input("12,5").as_deref(), Some("12.5"));
/// assert_eq!(sanitize_numeric_input("").as_deref(), Some(""));
/// assert_eq!(sanitize_numeric_input("1.2.3"), None);
/// ```
pub fn sanitize_numeric_input(raw: &str) -> Option<String> {
    let value = raw.replace(',', ".");

    let mut seen_point = false;
    for ch in value.chars() {
        match ch {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return None,
        }
    }

    Some(value)
}
