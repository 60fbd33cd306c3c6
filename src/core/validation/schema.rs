//! The order schema: declarative per-field rules
//!
//! The same rules back single-field checks (live feedback while typing) and
//! whole-draft checks (submit time), so both always agree.

use super::filters::{self, FieldFilter};
use super::result::ValidationResult;
use super::validators::{self, FieldValidator};
use crate::config::FormConfig;
use crate::core::catalog::{Size, ToppingCatalog};
use crate::core::draft::{Field, OrderDraft};
use serde_json::Value;

/// Filters and validators attached to one field
#[derive(Clone)]
pub struct FieldRules {
    pub field: Field,
    filters: Vec<FieldFilter>,
    validators: Vec<FieldValidator>,
}

impl FieldRules {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            filters: Vec::new(),
            validators: Vec::new(),
        }
    }

    pub fn filter(mut self, filter: FieldFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn validate(mut self, validator: FieldValidator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Run filters, then validators in order; the first failure wins
    pub fn check(&self, value: Value) -> Option<String> {
        let name = self.field.name();
        let value = self
            .filters
            .iter()
            .fold(value, |value, filter| filter(name, value));
        self.validators
            .iter()
            .find_map(|validator| validator(name, &value).err())
    }
}

impl std::fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRules")
            .field("field", &self.field)
            .field("filters", &self.filters.len())
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Fixed set of validation rules for an order draft
#[derive(Debug, Clone)]
pub struct OrderSchema {
    rules: Vec<FieldRules>,
}

impl OrderSchema {
    /// Build the schema from explicit rules
    pub fn from_rules(rules: Vec<FieldRules>) -> Self {
        Self { rules }
    }

    /// Standard order rules over `catalog`
    ///
    /// `toppings_required` selects whether an empty topping set is rejected.
    pub fn standard(catalog: &ToppingCatalog, toppings_required: bool) -> Self {
        let full_name = FieldRules::new(Field::FullName)
            .filter(filters::trim())
            .validate(validators::required("Full name is required"))
            .validate(validators::char_length(
                3,
                20,
                "Full name must be at least 3 characters",
                "Full name must be 20 characters or less",
            ));

        let size = FieldRules::new(Field::Size)
            .filter(filters::trim())
            .validate(validators::required("Please select a size"))
            .validate(validators::one_of(Size::codes(), "Size must be S, M, or L"));

        let mut toppings = FieldRules::new(Field::Toppings)
            .validate(validators::each_one_of(catalog.ids(), "Invalid topping"));
        if toppings_required {
            toppings = toppings.validate(validators::min_items(1, "Select at least one topping"));
        }

        Self::from_rules(vec![full_name, size, toppings])
    }

    /// Schema described by a form configuration
    pub fn from_config(config: &FormConfig) -> Self {
        Self::standard(&ToppingCatalog::standard(), config.toppings_required)
    }

    fn rules_for(&self, field: Field) -> Option<&FieldRules> {
        self.rules.iter().find(|r| r.field == field)
    }

    /// Check a single field of `draft` in isolation
    pub fn validate_field(&self, field: Field, draft: &OrderDraft) -> Option<String> {
        self.rules_for(field)
            .and_then(|rules| rules.check(field_value(draft, field)))
    }

    /// Check every field of `draft`
    pub fn validate(&self, draft: &OrderDraft) -> ValidationResult {
        let mut result = ValidationResult::new();
        for rules in &self.rules {
            result.set(rules.field, rules.check(field_value(draft, rules.field)));
        }
        result
    }

    pub fn is_valid(&self, draft: &OrderDraft) -> bool {
        self.validate(draft).is_valid()
    }

    /// Copy of `draft` with text fields passed through their filters
    pub fn normalize(&self, draft: &OrderDraft) -> OrderDraft {
        let mut normalized = draft.clone();
        for field in [Field::FullName, Field::Size] {
            let Some(rules) = self.rules_for(field) else {
                continue;
            };
            let value = rules
                .filters
                .iter()
                .fold(field_value(draft, field), |v, f| f(field.name(), v));
            if let Value::String(s) = value {
                match field {
                    Field::FullName => normalized.full_name = s,
                    Field::Size => normalized.size = s,
                    Field::Toppings => {}
                }
            }
        }
        normalized
    }
}

impl Default for OrderSchema {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}

fn field_value(draft: &OrderDraft, field: Field) -> Value {
    match field {
        Field::FullName => Value::String(draft.full_name.clone()),
        Field::Size => Value::String(draft.size.clone()),
        Field::Toppings => Value::Array(
            draft
                .toppings
                .iter()
                .cloned()
                .map(Value::String)
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> OrderSchema {
        OrderSchema::standard(&ToppingCatalog::standard(), false)
    }

    #[test]
    fn test_short_name_reports_only_name_error() {
        let draft = OrderDraft::with_values("Al", "M", Vec::<String>::new());
        let result = schema().validate(&draft);

        assert_eq!(
            result.get(Field::FullName),
            Some("Full name must be at least 3 characters")
        );
        assert!(!result.has_error(Field::Size));
        assert!(!result.has_error(Field::Toppings));
    }

    #[test]
    fn test_name_length_bounds_after_trim() {
        let schema = schema();
        for len in 0..30 {
            let name = format!("  {}  ", "a".repeat(len));
            let draft = OrderDraft::with_values(name, "S", ["1"]);
            let has_error = schema.validate_field(Field::FullName, &draft).is_some();
            assert_eq!(has_error, !(3..=20).contains(&len), "length {}", len);
        }
    }

    #[test]
    fn test_empty_name_is_required_error() {
        let draft = OrderDraft::with_values("   ", "S", ["1"]);
        assert_eq!(
            schema().validate_field(Field::FullName, &draft).as_deref(),
            Some("Full name is required")
        );
    }

    #[test]
    fn test_long_name_error() {
        let draft = OrderDraft::with_values("a".repeat(21), "S", ["1"]);
        assert_eq!(
            schema().validate_field(Field::FullName, &draft).as_deref(),
            Some("Full name must be 20 characters or less")
        );
    }

    #[test]
    fn test_size_membership() {
        let schema = schema();
        for code in ["S", "M", "L"] {
            let draft = OrderDraft::with_values("Alice", code, Vec::<String>::new());
            assert_eq!(schema.validate_field(Field::Size, &draft), None);
        }
        for code in ["XL", "s", "Large", "0"] {
            let draft = OrderDraft::with_values("Alice", code, Vec::<String>::new());
            assert_eq!(
                schema.validate_field(Field::Size, &draft).as_deref(),
                Some("Size must be S, M, or L")
            );
        }
    }

    #[test]
    fn test_missing_size_asks_for_selection() {
        let draft = OrderDraft::with_values("Alice", "", Vec::<String>::new());
        assert_eq!(
            schema().validate_field(Field::Size, &draft).as_deref(),
            Some("Please select a size")
        );
    }

    #[test]
    fn test_toppings_optional_by_default() {
        let draft = OrderDraft::with_values("Alice", "L", Vec::<String>::new());
        assert!(schema().is_valid(&draft));
    }

    #[test]
    fn test_toppings_required_variant() {
        let schema = OrderSchema::standard(&ToppingCatalog::standard(), true);
        let empty = OrderDraft::with_values("Alice", "L", Vec::<String>::new());
        assert_eq!(
            schema.validate(&empty).get(Field::Toppings),
            Some("Select at least one topping")
        );
        let one = OrderDraft::with_values("Alice", "L", ["2"]);
        assert!(schema.is_valid(&one));
    }

    #[test]
    fn test_unknown_topping_rejected() {
        let draft = OrderDraft::with_values("Alice", "L", ["1", "42"]);
        assert_eq!(
            schema().validate(&draft).get(Field::Toppings),
            Some("Invalid topping")
        );
    }

    #[test]
    fn test_field_and_whole_validation_agree() {
        let schema = schema();
        let drafts = [
            OrderDraft::new(),
            OrderDraft::with_values("Al", "XL", ["9"]),
            OrderDraft::with_values("Alice Smith", "L", ["1", "3"]),
        ];
        for draft in &drafts {
            let whole = schema.validate(draft);
            for field in Field::ALL {
                assert_eq!(
                    schema.validate_field(field, draft).as_deref(),
                    whole.get(field)
                );
            }
        }
    }

    #[test]
    fn test_normalize_trims_text_fields() {
        let draft = OrderDraft::with_values("  Alice  ", " M ", ["1"]);
        let normalized = schema().normalize(&draft);
        assert_eq!(normalized.full_name, "Alice");
        assert_eq!(normalized.size, "M");
        assert_eq!(normalized.toppings, draft.toppings);
    }
}
