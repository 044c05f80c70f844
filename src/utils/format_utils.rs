//! Number formatting utilities
//!
//! Helpers for writing coordinates as text.

/// Format a number with the shortest text that parses back to the same value
///
/// Rust's `Display` for `f64` never uses exponent notation and is
/// round-trip exact. Negative zero is written as `0`.
pub fn format_exact(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
