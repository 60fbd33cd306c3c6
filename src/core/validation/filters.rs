//! Reusable field filters
//!
//! These filters normalize field values before validation

use serde_json::Value;
use std::sync::Arc;

/// A transformation applied to a field value before its validators run
pub type FieldFilter = Arc<dyn Fn(&str, Value) -> Value + Send + Sync>;

/// Filter: trim whitespace from string
pub fn trim() -> FieldFilter {
    Arc::new(|_: &str, value: Value| match value.as_str() {
        Some(s) => Value::String(s.trim().to_string()),
        None => value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === trim() ===

    #[test]
    fn test_trim_removes_whitespace() {
        let f = trim();
        assert_eq!(f("fullName", json!("  Alice  ")), json!("Alice"));
    }

    #[test]
    fn test_trim_whitespace_only_becomes_empty() {
        let f = trim();
        assert_eq!(f("fullName", json!("   ")), json!(""));
    }

    #[test]
    fn test_trim_non_string_passthrough() {
        let f = trim();
        assert_eq!(f("toppings", json!(["1"])), json!(["1"]));
        assert_eq!(f("fullName", json!(null)), json!(null));
    }
}
