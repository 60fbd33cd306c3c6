//! The in-progress order and single-field edits applied to it

use super::catalog::{Size, ToppingCatalog};
use super::error::FormError;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Form fields, named as they appear on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "fullName")]
    FullName,
    #[serde(rename = "size")]
    Size,
    #[serde(rename = "toppings")]
    Toppings,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::FullName, Field::Size, Field::Toppings];

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Size => "size",
            Field::Toppings => "toppings",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField {
                name: s.to_string(),
            })
    }
}

/// A single user edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// Replace the full name text
    FullName(String),
    /// Replace the selected size code (empty means nothing selected)
    Size(String),
    /// Check or uncheck one topping
    Topping { id: String, checked: bool },
}

impl FieldChange {
    /// Build an edit from a raw input event: field name, input value and,
    /// for topping checkboxes, the checked flag
    pub fn from_input(name: &str, value: impl Into<String>, checked: bool) -> Result<Self, FormError> {
        let value = value.into();
        Ok(match name.parse::<Field>()? {
            Field::FullName => FieldChange::FullName(value),
            Field::Size => FieldChange::Size(value),
            Field::Toppings => FieldChange::Topping { id: value, checked },
        })
    }

    /// Field this edit targets
    pub fn field(&self) -> Field {
        match self {
            FieldChange::FullName(_) => Field::FullName,
            FieldChange::Size(_) => Field::Size,
            FieldChange::Topping { .. } => Field::Toppings,
        }
    }
}

/// Mutable order form state
///
/// `size` keeps the raw selected code so that membership is checked by the
/// schema rather than rejected at edit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub size: String,

    #[serde(default)]
    pub toppings: IndexSet<String>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a draft from already-known values
    pub fn with_values<I, S>(full_name: impl Into<String>, size: impl Into<String>, toppings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            full_name: full_name.into(),
            size: size.into(),
            toppings: toppings.into_iter().map(Into::into).collect(),
        }
    }

    /// Selected size, when it is one of the offered sizes
    pub fn size(&self) -> Option<Size> {
        self.size.parse().ok()
    }

    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }

    /// True when no field holds a value
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty() && self.size.is_empty() && self.toppings.is_empty()
    }

    /// Merge one edit into the draft
    ///
    /// Toppings are toggled by id: checking a present id or unchecking an
    /// absent one leaves the set as it was. Ids outside `catalog` are ignored
    /// so the draft only ever holds catalog toppings.
    pub fn update_field(&mut self, change: FieldChange, catalog: &ToppingCatalog) {
        match change {
            FieldChange::FullName(value) => self.full_name = value,
            FieldChange::Size(value) => self.size = value,
            FieldChange::Topping { id, checked } => {
                if !catalog.contains(&id) {
                    tracing::warn!(topping = %id, "Ignoring topping outside the catalog");
                    return;
                }
                if checked {
                    self.toppings.insert(id);
                } else {
                    self.toppings.shift_remove(&id);
                }
            }
        }
    }

    /// Consuming variant of [`update_field`](Self::update_field)
    pub fn with_change(mut self, change: FieldChange, catalog: &ToppingCatalog) -> Self {
        self.update_field(change, catalog);
        self
    }
}
