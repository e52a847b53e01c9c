//! Domain model for the transaction log.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::{ExpenseCategory, IncomeCategory};
use crate::common::{Displayable, Identifiable};

/// Direction of a transaction, before a category is chosen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Direction plus vocabulary-checked category.
///
/// Adjacent tagging keeps the persisted shape flat: the record carries a
/// `type` of `income`/`expense` and a `category` from the matching
/// vocabulary. A category outside its type's vocabulary is unrepresentable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "category", rename_all = "lowercase")]
pub enum EntryKind {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl EntryKind {
    pub fn kind(self) -> TransactionKind {
        match self {
            EntryKind::Income(_) => TransactionKind::Income,
            EntryKind::Expense(_) => TransactionKind::Expense,
        }
    }

    pub fn is_income(self) -> bool {
        matches!(self, EntryKind::Income(_))
    }

    pub fn is_expense(self) -> bool {
        matches!(self, EntryKind::Expense(_))
    }

    pub fn category_label(self) -> &'static str {
        match self {
            EntryKind::Income(category) => category.label(),
            EntryKind::Expense(category) => category.label(),
        }
    }
}

/// A single income or expense record. Immutable once created: the log only
/// grows, and the amount never carries a sign (direction lives in `kind`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(flatten)]
    pub kind: EntryKind,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        kind: EntryKind,
        amount: f64,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            description: description.into(),
            date,
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        if self.description.is_empty() {
            self.kind.category_label().to_string()
        } else {
            self.description.clone()
        }
    }
}
