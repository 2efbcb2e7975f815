//! Category model
//!
//! A category is a named bucket that classifies every transaction as either
//! income or expense. Seeded categories are not editable by the user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::CategoryId;
use crate::error::ValidationError;

/// Whether money flows in or out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    Income,
    Expense,
}

impl FlowType {
    /// Map the `is_income` flag onto a flow type
    pub fn from_is_income(is_income: bool) -> Self {
        if is_income {
            Self::Income
        } else {
            Self::Expense
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowType {
    type Err = ValidationError;

    /// Only the exact lowercase words are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(ValidationError::InvalidType {
                value: other.to_string(),
            }),
        }
    }
}

/// A transaction category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier, decimal integer in string form
    #[serde(default)]
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: FlowType,

    /// Redundant with `kind`, kept in the file format
    pub is_income: bool,

    /// Whether the user may modify this category
    #[serde(rename = "edit", default)]
    pub editable: bool,
}

impl Category {
    /// Create a new user-editable category
    pub fn new(id: CategoryId, name: impl Into<String>, kind: FlowType) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            is_income: kind.is_income(),
            editable: true,
        }
    }

    /// Create a non-editable system category
    pub fn system(id: CategoryId, name: impl Into<String>, kind: FlowType) -> Self {
        Self {
            editable: false,
            ..Self::new(id, name, kind)
        }
    }

    /// Case-insensitive name comparison, ignoring surrounding whitespace
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyCategoryName);
        }

        if self.is_income != self.kind.is_income() {
            return Err(ValidationError::InconsistentCategory {
                name: self.name.clone(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The categories every fresh installation starts with
///
/// Four expense categories followed by three income categories, IDs "1".."7",
/// none of them editable.
pub fn default_categories() -> Vec<Category> {
    let expense = ["Продукты", "Транспорт", "Жилье", "Развлечения"];
    let income = ["Зарплата", "Подарки", "Прочие доходы"];

    expense
        .iter()
        .map(|name| (name, FlowType::Expense))
        .chain(income.iter().map(|name| (name, FlowType::Income)))
        .enumerate()
        .map(|(i, (name, kind))| {
            Category::system(CategoryId::from_number(i as u64 + 1), *name, kind)
        })
        .collect()
}
