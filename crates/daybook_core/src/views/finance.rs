//! Finance projections: totals, category breakdown, goal progress.
//!
//! # Invariants
//! - `balance == income - expense` for any transaction set.
//! - Sums saturate at `Amount::MAX` instead of overflowing.
//! - Breakdown percentages sum to 100 (within rounding) unless the total is
//!   zero, in which case the breakdown is empty.

use crate::model::finance::{SavingGoal, Transaction, TransactionKind};
use crate::model::profile::Currency;
use crate::model::Amount;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

pub const TOP_CATEGORY_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinanceTotals {
    pub income: Amount,
    pub expense: Amount,
    pub balance: Amount,
}

pub fn totals<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> FinanceTotals {
    let mut totals = transactions
        .into_iter()
        .fold(FinanceTotals::default(), |mut acc, transaction| {
            match transaction.kind {
                TransactionKind::Income => {
                    acc.income = acc.income.saturating_add(transaction.amount)
                }
                TransactionKind::Expense => {
                    acc.expense = acc.expense.saturating_add(transaction.amount)
                }
            }
            acc
        });
    totals.balance = totals.income.saturating_sub(totals.expense);
    totals
}

/// Transactions dated inside `year`/`month`, newest first.
pub fn transactions_in_month<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    year: i32,
    month: u32,
) -> Vec<&'a Transaction> {
    let mut selected = transactions
        .into_iter()
        .filter(|transaction| transaction.date.year() == year && transaction.date.month() == month)
        .collect::<Vec<_>>();
    sort_newest_first(&mut selected);
    selected
}

/// Most recent transactions, newest first.
pub fn recent_transactions<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    limit: usize,
) -> Vec<&'a Transaction> {
    let mut all = transactions.into_iter().collect::<Vec<_>>();
    sort_newest_first(&mut all);
    all.truncate(limit);
    all
}

fn sort_newest_first(transactions: &mut [&Transaction]) {
    transactions.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then(b.created_at.cmp(&a.created_at))
            .then(a.id.cmp(&b.id))
    });
}

/// One category's share of a transaction kind.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Amount,
    /// 0.0 to 100.0.
    pub percent: f64,
}

/// Sums `kind` transactions per category, largest first (ties by name).
pub fn category_breakdown<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    kind: TransactionKind,
) -> Vec<CategoryShare> {
    let mut sums: HashMap<&str, Amount> = HashMap::new();
    for transaction in transactions.into_iter().filter(|t| t.kind == kind) {
        let sum = sums.entry(transaction.category.as_str()).or_default();
        *sum = sum.saturating_add(transaction.amount);
    }

    let total = sums
        .values()
        .fold(0 as Amount, |acc, amount| acc.saturating_add(*amount));
    if total == 0 {
        return Vec::new();
    }

    let mut shares = sums
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            category: category.to_string(),
            amount,
            percent: amount as f64 * 100.0 / total as f64,
        })
        .collect::<Vec<_>>();
    shares.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));
    shares
}

/// First `count` shares of a breakdown.
pub fn top_categories(breakdown: &[CategoryShare], count: usize) -> &[CategoryShare] {
    &breakdown[..breakdown.len().min(count)]
}

/// Saved fraction of the target, clamped to `[0, 1]`.
pub fn goal_progress(goal: &SavingGoal) -> f64 {
    if goal.target_amount <= 0 {
        return 0.0;
    }
    (goal.current_amount as f64 / goal.target_amount as f64).clamp(0.0, 1.0)
}

/// Amount still needed to reach the goal; zero once reached.
pub fn goal_remaining(goal: &SavingGoal) -> Amount {
    (goal.target_amount - goal.current_amount).max(0)
}

/// Days left until the goal deadline; negative once it has passed.
pub fn goal_days_left(goal: &SavingGoal, today: NaiveDate) -> Option<i64> {
    goal.deadline.map(|deadline| (deadline - today).num_days())
}

/// Formats minor units with space-grouped thousands and the currency symbol.
///
/// `format_amount(1_250_000, Currency::Uzs)` is `1 250 000 so'm`;
/// `format_amount(-123456, Currency::Usd)` is `-$1 234.56`.
pub fn format_amount(amount: Amount, currency: Currency) -> String {
    let minor = currency.minor_units();
    let sign = if amount < 0 { "-" } else { "" };
    let magnitude = amount.unsigned_abs();
    let whole = group_thousands(magnitude / minor.unsigned_abs());
    let number = if minor > 1 {
        format!("{whole}.{:02}", magnitude % minor.unsigned_abs())
    } else {
        whole
    };
    match currency {
        Currency::Usd => format!("{sign}{}{number}", currency.symbol()),
        _ => format!("{sign}{number} {}", currency.symbol()),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{
        category_breakdown, format_amount, goal_days_left, goal_progress, goal_remaining,
        recent_transactions, top_categories, totals,
    };
    use crate::model::finance::{
        NewSavingGoal, NewTransaction, SavingGoal, Transaction, TransactionKind,
    };
    use crate::model::profile::Currency;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn expense(amount: i64, category: &str) -> Transaction {
        Transaction::from_new(NewTransaction::expense(amount, category, day()))
    }

    #[test]
    fn totals_compute_balance() {
        let transactions = vec![
            Transaction::from_new(NewTransaction::income(300_000, "salary", day())),
            expense(50_000, "food"),
            expense(25_000, "transport"),
        ];
        let totals = totals(&transactions);
        assert_eq!(totals.income, 300_000);
        assert_eq!(totals.expense, 75_000);
        assert_eq!(totals.balance, 225_000);
    }

    #[test]
    fn breakdown_sorts_desc_and_percentages_sum_to_hundred() {
        let transactions = vec![
            expense(10_000, "fun"),
            expense(30_000, "Food"),
            expense(30_000, "food "),
            expense(20_000, "bills"),
            expense(10_000, "gifts"),
        ];
        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);
        let names = breakdown
            .iter()
            .map(|share| share.category.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["food", "bills", "fun", "gifts"]);
        assert_eq!(breakdown[0].amount, 60_000);

        let sum: f64 = breakdown.iter().map(|share| share.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(top_categories(&breakdown, 2).len(), 2);
        assert_eq!(top_categories(&breakdown, 10).len(), 4);
    }

    #[test]
    fn breakdown_of_empty_or_income_only_is_empty() {
        assert!(category_breakdown(std::iter::empty(), TransactionKind::Expense).is_empty());
        let income = vec![Transaction::from_new(NewTransaction::income(
            1, "salary", day(),
        ))];
        assert!(category_breakdown(&income, TransactionKind::Expense).is_empty());
    }

    #[test]
    fn sums_saturate_on_huge_amounts() {
        let transactions = vec![
            Transaction::from_new(NewTransaction::income(i64::MAX, "salary", day())),
            Transaction::from_new(NewTransaction::income(1, "bonus", day())),
            expense(i64::MAX, "rent"),
            expense(5, "rent"),
        ];
        let totals = totals(&transactions);
        assert_eq!(totals.income, i64::MAX);
        assert_eq!(totals.expense, i64::MAX);
        assert_eq!(totals.balance, 0);

        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].amount, i64::MAX);
        assert_eq!(breakdown[0].percent, 100.0);
    }

    #[test]
    fn recent_transactions_are_newest_first_and_limited() {
        let older = Transaction::from_new(NewTransaction::expense(
            100,
            "food",
            day().pred_opt().unwrap(),
        ));
        let newer = expense(200, "food");
        let oldest = Transaction::from_new(NewTransaction::income(
            300,
            "salary",
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        ));
        let transactions = vec![older, oldest, newer];
        let recent = recent_transactions(&transactions, 2)
            .into_iter()
            .map(|transaction| transaction.amount)
            .collect::<Vec<_>>();
        assert_eq!(recent, vec![200, 100]);
        assert!(recent_transactions(&transactions, 0).is_empty());
    }

    #[test]
    fn goal_remaining_and_days_left() {
        let mut goal = SavingGoal::from_new(NewSavingGoal {
            name: "trip".to_string(),
            target_amount: 1_000,
            current_amount: 400,
            deadline: NaiveDate::from_ymd_opt(2026, 10, 29),
        });
        assert_eq!(goal_remaining(&goal), 600);
        assert_eq!(goal_days_left(&goal, day()), Some(10));
        assert_eq!(
            goal_days_left(&goal, NaiveDate::from_ymd_opt(2026, 11, 1).unwrap()),
            Some(-3)
        );

        goal.current_amount = 1_500;
        assert_eq!(goal_remaining(&goal), 0);
        goal.deadline = None;
        assert_eq!(goal_days_left(&goal, day()), None);
    }

    #[test]
    fn goal_progress_is_clamped() {
        let mut goal = SavingGoal::from_new(NewSavingGoal {
            name: "laptop".to_string(),
            target_amount: 1_000,
            current_amount: 250,
            deadline: None,
        });
        assert_eq!(goal_progress(&goal), 0.25);
        goal.current_amount = 5_000;
        assert_eq!(goal_progress(&goal), 1.0);
    }

    #[test]
    fn amounts_format_with_grouping_and_symbol() {
        assert_eq!(format_amount(1_250_000, Currency::Uzs), "1 250 000 so'm");
        assert_eq!(format_amount(-123_456, Currency::Usd), "-$1 234.56");
        assert_eq!(format_amount(5, Currency::Eur), "0.05 €");
        assert_eq!(format_amount(0, Currency::Uzs), "0 so'm");
    }
}
