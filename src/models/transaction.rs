//! Transaction model
//!
//! A transaction records a single income or expense event. Once stored it is
//! never modified; the category is referenced by name, not by ID.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::FlowType;
use super::ids::TransactionId;
use super::money::Money;
use crate::error::ValidationError;

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Always positive; direction comes from `kind`
    pub amount: Money,

    /// Name of the category, as stored on the category itself
    pub category: String,

    pub description: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: FlowType,

    /// When the transaction was recorded
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with a fresh ID, stamped with the current time
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        kind: FlowType,
    ) -> Self {
        Self {
            id: TransactionId::generate(),
            amount,
            category: category.into(),
            description: description.into(),
            kind,
            date: Utc::now(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    /// Amount with sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        if self.is_income() {
            self.amount
        } else {
            -self.amount
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.amount.is_positive() {
            return Err(ValidationError::InvalidAmount {
                amount: self.amount,
            });
        }

        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%d.%m.%Y %H:%M"),
            self.signed_amount(),
            self.category,
            self.description
        )
    }
}
