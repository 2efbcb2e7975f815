//! Transaction service
//!
//! Enforces the admission rules for new transactions and records the ones
//! that pass. Checks run in a fixed order and every one of them completes
//! before the store is touched, so a rejected transaction never changes the
//! transaction file.

use tracing::{debug, info};

use super::category::CategoryService;
use crate::error::{FintrackError, FintrackResult, ValidationError};
use crate::models::{Category, FlowType, Money, Transaction};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Sum totals over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

impl Totals {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let (income, expense) = transactions.iter().fold(
            (Money::zero(), Money::zero()),
            |(income, expense), txn| match txn.kind {
                FlowType::Income => (income + txn.amount, expense),
                FlowType::Expense => (income, expense + txn.amount),
            },
        );

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and record a new transaction
    ///
    /// `transaction_type` must be exactly `"income"` or `"expense"` and must
    /// agree with the type of the named category; it is never inferred.
    pub fn add_transaction(
        &self,
        amount: Money,
        category: &str,
        description: &str,
        transaction_type: &str,
    ) -> FintrackResult<Transaction> {
        let requested = check_input(amount, category, description, transaction_type)
            .inspect_err(|e| debug!(error = %e, "transaction rejected"))?;

        let candidates = CategoryService::new(self.storage).find_by_name(category)?;
        let matched = match_category(candidates, category, requested)
            .inspect_err(|e| debug!(error = %e, "transaction rejected"))?;

        let txn = Transaction::new(amount, matched.name, description.trim(), requested);
        txn.validate()?;

        self.storage.transactions.append(txn.clone())?;

        info!(
            id = %txn.id,
            amount = %txn.amount,
            category = %txn.category,
            kind = %txn.kind,
            "transaction recorded"
        );
        Ok(txn)
    }

    /// List every recorded transaction in the order it was recorded
    pub fn get_all_transactions(&self) -> FintrackResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Income, expense and balance over all recorded transactions
    pub fn totals(&self) -> FintrackResult<Totals> {
        let transactions = self.storage.transactions.get_all()?;
        Ok(Totals::from_transactions(&transactions))
    }
}

/// Shape checks that need no stored data
fn check_input(
    amount: Money,
    category: &str,
    description: &str,
    transaction_type: &str,
) -> Result<FlowType, ValidationError> {
    if !amount.is_positive() {
        return Err(ValidationError::InvalidAmount { amount });
    }

    if category.trim().is_empty() {
        return Err(ValidationError::EmptyCategory);
    }

    if description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    transaction_type.parse()
}

/// Pick the category a transaction refers to
///
/// When the name exists under both types, the one matching the requested
/// type wins; otherwise the first match decides the mismatch error.
fn match_category(
    candidates: Vec<Category>,
    name: &str,
    requested: FlowType,
) -> FintrackResult<Category> {
    let mut candidates = candidates.into_iter();

    let first = candidates
        .next()
        .ok_or_else(|| FintrackError::category_not_found(name.trim()))?;

    if first.kind == requested {
        return Ok(first);
    }

    if let Some(same_type) = candidates.find(|c| c.kind == requested) {
        return Ok(same_type);
    }

    Err(FintrackError::TypeMismatch {
        category: first.name,
        category_type: first.kind,
        requested,
    })
}
