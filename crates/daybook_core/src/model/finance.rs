//! Transactions and saving goals.
//!
//! # Invariants
//! - Transaction amounts are strictly positive; `kind` carries the sign.
//! - Category names are stored trimmed and lowercase.
//! - Goal `current_amount` never goes negative.

use super::{new_id, now_epoch_ms, require_positive, require_text, Amount, EntityId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Amount,
    pub category: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: Amount,
    pub category: String,
    pub date: NaiveDate,
    pub description: Option<String>,
}

impl NewTransaction {
    pub fn expense(amount: Amount, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            kind: TransactionKind::Expense,
            amount,
            category: category.into(),
            date,
            description: None,
        }
    }

    pub fn income(amount: Amount, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            kind: TransactionKind::Income,
            ..Self::expense(amount, category, date)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub kind: Option<TransactionKind>,
    pub amount: Option<Amount>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<Option<String>>,
}

impl Transaction {
    pub fn from_new(input: NewTransaction) -> Self {
        Self {
            id: new_id(),
            kind: input.kind,
            amount: input.amount,
            category: normalize_category(&input.category),
            date: input.date,
            description: input.description,
            created_at: now_epoch_ms(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_positive("amount", self.amount)?;
        require_text("category", &self.category)
    }

    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = normalize_category(&category);
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }

    /// Amount with the sign implied by `kind`.
    pub fn signed_amount(&self) -> Amount {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingGoal {
    pub id: EntityId,
    pub name: String,
    pub target_amount: Amount,
    pub current_amount: Amount,
    pub deadline: Option<NaiveDate>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSavingGoal {
    pub name: String,
    pub target_amount: Amount,
    pub current_amount: Amount,
    pub deadline: Option<NaiveDate>,
}

impl SavingGoal {
    pub fn from_new(input: NewSavingGoal) -> Self {
        Self {
            id: new_id(),
            name: input.name.trim().to_string(),
            target_amount: input.target_amount,
            current_amount: input.current_amount,
            deadline: input.deadline,
            created_at: now_epoch_ms(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_positive("target_amount", self.target_amount)?;
        if self.current_amount < 0 {
            return Err(ValidationError::NegativeAmount {
                field: "current_amount",
                value: self.current_amount,
            });
        }
        Ok(())
    }

    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

/// Trims and lowercases a category name.
pub fn normalize_category(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{NewTransaction, Transaction};
    use chrono::NaiveDate;

    #[test]
    fn signed_amount_follows_kind() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let income = Transaction::from_new(NewTransaction::income(1_500, " Salary ", date));
        let expense = Transaction::from_new(NewTransaction::expense(400, "food", date));
        assert_eq!(income.signed_amount(), 1_500);
        assert_eq!(expense.signed_amount(), -400);
        assert_eq!(income.category, "salary");
    }
}
