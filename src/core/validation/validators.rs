//! Reusable field validators
//!
//! Each validator receives the field name and its (already filtered) JSON value.
//! Values of an unexpected JSON type pass through; the typed draft guarantees
//! the shapes before validation runs.

use serde_json::Value;
use std::sync::Arc;

/// A single declarative rule over one field value
pub type FieldValidator = Arc<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Validator: field must hold a value (not null, not an empty string)
pub fn required(message: impl Into<String>) -> FieldValidator {
    let message = message.into();
    Arc::new(move |_: &str, value: &Value| match value {
        Value::Null => Err(message.clone()),
        Value::String(s) if s.is_empty() => Err(message.clone()),
        _ => Ok(()),
    })
}

/// Validator: string length, counted in characters, must be within range
pub fn char_length(
    min: usize,
    max: usize,
    too_short: impl Into<String>,
    too_long: impl Into<String>,
) -> FieldValidator {
    let too_short = too_short.into();
    let too_long = too_long.into();
    Arc::new(move |_: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            let len = s.chars().count();
            if len < min {
                Err(too_short.clone())
            } else if len > max {
                Err(too_long.clone())
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    })
}

/// Validator: value must be in allowed list
pub fn one_of(allowed: Vec<String>, message: impl Into<String>) -> FieldValidator {
    let message = message.into();
    Arc::new(move |_: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if allowed.iter().any(|a| a == s) {
                Ok(())
            } else {
                Err(message.clone())
            }
        } else {
            Ok(())
        }
    })
}

/// Validator: every element of an array must be in allowed list
pub fn each_one_of(allowed: Vec<String>, message: impl Into<String>) -> FieldValidator {
    let message = message.into();
    Arc::new(move |_: &str, value: &Value| {
        let Some(items) = value.as_array() else {
            return Ok(());
        };
        let all_allowed = items.iter().all(|item| {
            item.as_str()
                .map(|s| allowed.iter().any(|a| a == s))
                .unwrap_or(false)
        });
        if all_allowed {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

/// Validator: array must have at least `min` elements
pub fn min_items(min: usize, message: impl Into<String>) -> FieldValidator {
    let message = message.into();
    Arc::new(move |_: &str, value: &Value| match value {
        Value::Array(items) if items.len() < min => Err(message.clone()),
        Value::Null if min > 0 => Err(message.clone()),
        _ => Ok(()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === required() ===

    #[test]
    fn test_required_null_value_returns_error() {
        let v = required("Full name is required");
        assert_eq!(
            v("fullName", &json!(null)).unwrap_err(),
            "Full name is required"
        );
    }

    #[test]
    fn test_required_empty_string_returns_error() {
        let v = required("missing");
        assert!(v("fullName", &json!("")).is_err());
    }

    #[test]
    fn test_required_string_value_returns_ok() {
        let v = required("missing");
        assert!(v("fullName", &json!("Alice")).is_ok());
    }

    #[test]
    fn test_required_empty_array_returns_ok() {
        let v = required("missing");
        assert!(v("toppings", &json!([])).is_ok());
    }

    // === char_length() ===

    #[test]
    fn test_char_length_too_short_returns_error() {
        let v = char_length(3, 20, "short", "long");
        assert_eq!(v("fullName", &json!("Al")).unwrap_err(), "short");
    }

    #[test]
    fn test_char_length_too_long_returns_error() {
        let v = char_length(3, 5, "short", "long");
        assert_eq!(v("fullName", &json!("abcdef")).unwrap_err(), "long");
    }

    #[test]
    fn test_char_length_bounds_are_inclusive() {
        let v = char_length(3, 5, "short", "long");
        assert!(v("fullName", &json!("abc")).is_ok());
        assert!(v("fullName", &json!("abcde")).is_ok());
    }

    #[test]
    fn test_char_length_counts_characters_not_bytes() {
        let v = char_length(3, 3, "short", "long");
        assert!(v("fullName", &json!("Zoë")).is_ok());
    }

    #[test]
    fn test_char_length_non_string_passthrough() {
        let v = char_length(3, 5, "short", "long");
        assert!(v("fullName", &json!(42)).is_ok());
    }

    // === one_of() ===

    #[test]
    fn test_one_of_value_in_list_returns_ok() {
        let v = one_of(vec!["S".into(), "M".into(), "L".into()], "bad size");
        assert!(v("size", &json!("M")).is_ok());
    }

    #[test]
    fn test_one_of_value_not_in_list_returns_error() {
        let v = one_of(vec!["S".into(), "M".into(), "L".into()], "bad size");
        assert_eq!(v("size", &json!("XL")).unwrap_err(), "bad size");
    }

    #[test]
    fn test_one_of_is_case_sensitive() {
        let v = one_of(vec!["S".into()], "bad size");
        assert!(v("size", &json!("s")).is_err());
    }

    // === each_one_of() ===

    #[test]
    fn test_each_one_of_all_allowed() {
        let v = each_one_of(vec!["1".into(), "2".into()], "Invalid topping");
        assert!(v("toppings", &json!(["1", "2"])).is_ok());
        assert!(v("toppings", &json!([])).is_ok());
    }

    #[test]
    fn test_each_one_of_rejects_unknown_element() {
        let v = each_one_of(vec!["1".into(), "2".into()], "Invalid topping");
        assert_eq!(
            v("toppings", &json!(["1", "7"])).unwrap_err(),
            "Invalid topping"
        );
    }

    #[test]
    fn test_each_one_of_rejects_non_string_element() {
        let v = each_one_of(vec!["1".into()], "Invalid topping");
        assert!(v("toppings", &json!([1])).is_err());
    }

    // === min_items() ===

    #[test]
    fn test_min_items_empty_array_returns_error() {
        let v = min_items(1, "pick one");
        assert_eq!(v("toppings", &json!([])).unwrap_err(), "pick one");
    }

    #[test]
    fn test_min_items_enough_returns_ok() {
        let v = min_items(1, "pick one");
        assert!(v("toppings", &json!(["1"])).is_ok());
    }

    #[test]
    fn test_min_items_zero_accepts_empty() {
        let v = min_items(0, "never");
        assert!(v("toppings", &json!([])).is_ok());
        assert!(v("toppings", &json!(null)).is_ok());
    }
}
