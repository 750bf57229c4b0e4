//! Helpers for the protobuf text format read by the model server.

/// Escape a value for use inside a double-quoted text-format string
///
/// Only backslash, double quote and the control characters that would break
/// the line-oriented layout are escaped; everything else passes through, so
/// ordinary paths render unchanged.
pub fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
