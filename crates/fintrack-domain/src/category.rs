//! Closed category vocabularies for transactions and savings goals.
//!
//! Each vocabulary is a fixed enum: a record carrying a category outside
//! its vocabulary cannot be constructed or deserialized.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Raised when a wire name does not belong to the target vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// Categories available to income transactions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IncomeCategory {
    Salary,
    Freelance,
    Investment,
    Other,
}

impl IncomeCategory {
    /// Vocabulary in presentation order.
    pub const ALL: [IncomeCategory; 4] = [
        IncomeCategory::Salary,
        IncomeCategory::Freelance,
        IncomeCategory::Investment,
        IncomeCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IncomeCategory::Salary => "Salary",
            IncomeCategory::Freelance => "Freelance",
            IncomeCategory::Investment => "Investment",
            IncomeCategory::Other => "Other",
        }
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IncomeCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "salary" => Ok(IncomeCategory::Salary),
            "freelance" => Ok(IncomeCategory::Freelance),
            "investment" => Ok(IncomeCategory::Investment),
            "other" => Ok(IncomeCategory::Other),
            _ => Err(UnknownCategory(value.to_string())),
        }
    }
}

/// Categories available to expense transactions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Housing,
    Entertainment,
    Health,
    Shopping,
    Other,
}

impl ExpenseCategory {
    /// Vocabulary in presentation order; the category breakdown iterates
    /// this ordering.
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Housing,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Health,
        ExpenseCategory::Shopping,
        ExpenseCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(ExpenseCategory::Food),
            "transport" => Ok(ExpenseCategory::Transport),
            "housing" => Ok(ExpenseCategory::Housing),
            "entertainment" => Ok(ExpenseCategory::Entertainment),
            "health" => Ok(ExpenseCategory::Health),
            "shopping" => Ok(ExpenseCategory::Shopping),
            "other" => Ok(ExpenseCategory::Other),
            _ => Err(UnknownCategory(value.to_string())),
        }
    }
}

/// Categories available to savings goals. Unrelated to the transaction
/// vocabularies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Travel,
    Home,
    Car,
    Education,
    Emergency,
    #[default]
    Other,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 6] = [
        GoalCategory::Travel,
        GoalCategory::Home,
        GoalCategory::Car,
        GoalCategory::Education,
        GoalCategory::Emergency,
        GoalCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GoalCategory::Travel => "Travel",
            GoalCategory::Home => "Home",
            GoalCategory::Car => "Car",
            GoalCategory::Education => "Education",
            GoalCategory::Emergency => "Emergency",
            GoalCategory::Other => "Other",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GoalCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "travel" => Ok(GoalCategory::Travel),
            "home" => Ok(GoalCategory::Home),
            "car" => Ok(GoalCategory::Car),
            "education" => Ok(GoalCategory::Education),
            "emergency" => Ok(GoalCategory::Emergency),
            "other" => Ok(GoalCategory::Other),
            _ => Err(UnknownCategory(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for category in ExpenseCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            let back: ExpenseCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn from_str_accepts_labels_case_insensitively() {
        assert_eq!("Salary".parse::<IncomeCategory>(), Ok(IncomeCategory::Salary));
        assert_eq!("  food ".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Food));
    }

    #[test]
    fn from_str_rejects_foreign_vocabulary() {
        assert!("food".parse::<IncomeCategory>().is_err());
        assert!("salary".parse::<ExpenseCategory>().is_err());
    }
}
