//! Validated creation of transaction records.

use chrono::NaiveDate;

use fintrack_domain::{
    EntryKind, ExpenseCategory, IncomeCategory, Transaction, TransactionKind,
};

use crate::CoreError;

/// Pending input for a new transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub kind: TransactionKind,
    pub amount: Option<f64>,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl TransactionForm {
    /// Blank form: expense, no amount, no category, dated `today`.
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            kind: TransactionKind::Expense,
            amount: None,
            category: String::new(),
            description: String::new(),
            date: today,
        }
    }

    /// Restores the form to its blank state for `today`.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = TransactionForm::defaults(today);
    }
}

/// Validated transaction creation.
pub struct TransactionService;

impl TransactionService {
    /// Validates the form and builds a transaction with a fresh identifier.
    ///
    /// Either the whole record is produced or nothing happens: rejection
    /// leaves the caller's collections and the form untouched.
    pub fn create(form: &TransactionForm) -> Result<Transaction, CoreError> {
        let amount = form
            .amount
            .ok_or_else(|| CoreError::Validation("amount is required".into()))?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(CoreError::Validation(
                "amount must be a non-negative number".into(),
            ));
        }
        if form.category.is_empty() {
            return Err(CoreError::Validation("category is required".into()));
        }
        let kind = match form.kind {
            TransactionKind::Income => EntryKind::Income(
                form.category
                    .parse::<IncomeCategory>()
                    .map_err(|err| CoreError::Validation(err.to_string()))?,
            ),
            TransactionKind::Expense => EntryKind::Expense(
                form.category
                    .parse::<ExpenseCategory>()
                    .map_err(|err| CoreError::Validation(err.to_string()))?,
            ),
        };
        Ok(Transaction::new(
            kind,
            amount,
            form.description.clone(),
            form.date,
        ))
    }
}
