//! Utilities for records output format

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

/// Render a float field with fixed precision so records diff cleanly
pub fn fixed(value: f64) -> String {
    format!("{:.4}", value)
}
