//! Pizza sizes and the fixed topping catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pizza size, serialized with its single-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl Size {
    /// All sizes, in the order they are offered
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Wire code ("S", "M", "L")
    pub fn code(&self) -> &'static str {
        match self {
            Size::Small => "S",
            Size::Medium => "M",
            Size::Large => "L",
        }
    }

    /// Name shown in the size selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }

    /// Lowercase name used in confirmation sentences
    pub fn spoken_name(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    /// Codes accepted by the size rule
    pub fn codes() -> Vec<String> {
        Self::ALL.iter().map(|s| s.code().to_string()).collect()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "S" => Ok(Size::Small),
            "M" => Ok(Size::Medium),
            "L" => Ok(Size::Large),
            other => Err(format!("unknown size '{}'", other)),
        }
    }
}

/// A single catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topping {
    pub id: &'static str,
    pub name: &'static str,
}

/// Fixed, ordered list of topping choices
#[derive(Debug, Clone, Copy)]
pub struct ToppingCatalog {
    entries: &'static [Topping],
}

const TOPPINGS: &[Topping] = &[
    Topping {
        id: "1",
        name: "Pepperoni",
    },
    Topping {
        id: "2",
        name: "Green Peppers",
    },
    Topping {
        id: "3",
        name: "Pineapple",
    },
    Topping {
        id: "4",
        name: "Mushrooms",
    },
    Topping {
        id: "5",
        name: "Ham",
    },
];

impl ToppingCatalog {
    /// The catalog offered by the order form
    pub const fn standard() -> Self {
        Self { entries: TOPPINGS }
    }

    pub fn entries(&self) -> &'static [Topping] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|t| t.id == id)
    }

    /// Display name for an id, if it is in the catalog
    pub fn name_of(&self, id: &str) -> Option<&'static str> {
        self.entries.iter().find(|t| t.id == id).map(|t| t.name)
    }

    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|t| t.id.to_string()).collect()
    }
}

impl Default for ToppingCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
