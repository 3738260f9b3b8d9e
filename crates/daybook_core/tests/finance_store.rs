use chrono::NaiveDate;
use daybook_core::db::open_db_in_memory;
use daybook_core::model::finance::{
    NewSavingGoal, NewTransaction, TransactionKind, TransactionPatch,
};
use daybook_core::model::ValidationError;
use daybook_core::views::finance::{
    category_breakdown, goal_progress, top_categories, totals, transactions_in_month,
    TOP_CATEGORY_COUNT,
};
use daybook_core::{FinanceStore, SqliteStateStorage, StoreError};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn food_total(store: &FinanceStore<SqliteStateStorage<'_>>) -> i64 {
    category_breakdown(store.transactions(), TransactionKind::Expense)
        .into_iter()
        .find(|share| share.category == "food")
        .map_or(0, |share| share.amount)
}

#[test]
fn food_expense_moves_category_and_balance_by_exact_amount() {
    let conn = open_db_in_memory().unwrap();
    let mut store = FinanceStore::open(SqliteStateStorage::new(&conn));
    store
        .add_transaction(NewTransaction::income(1_000_000, "salary", today()))
        .unwrap();
    store
        .add_transaction(NewTransaction::expense(20_000, "food", today()))
        .unwrap();

    let food_before = food_total(&store);
    let balance_before = totals(store.transactions()).balance;

    store
        .add_transaction(NewTransaction::expense(50_000, "food", today()))
        .unwrap();

    assert_eq!(food_total(&store) - food_before, 50_000);
    assert_eq!(balance_before - totals(store.transactions()).balance, 50_000);
}

#[test]
fn empty_finance_state_yields_zero_totals_and_no_categories() {
    let conn = open_db_in_memory().unwrap();
    let store = FinanceStore::open(SqliteStateStorage::new(&conn));
    let totals = totals(store.transactions());
    assert_eq!((totals.income, totals.expense, totals.balance), (0, 0, 0));
    assert!(category_breakdown(store.transactions(), TransactionKind::Expense).is_empty());
}

#[test]
fn top_five_categories_cover_largest_spends() {
    let conn = open_db_in_memory().unwrap();
    let mut store = FinanceStore::open(SqliteStateStorage::new(&conn));
    for (index, category) in ["a", "b", "c", "d", "e", "f", "g"].iter().enumerate() {
        let amount = (index as i64 + 1) * 1_000;
        store
            .add_transaction(NewTransaction::expense(amount, *category, today()))
            .unwrap();
    }
    let breakdown = category_breakdown(store.transactions(), TransactionKind::Expense);
    let top = top_categories(&breakdown, TOP_CATEGORY_COUNT);
    let names = top
        .iter()
        .map(|share| share.category.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["g", "f", "e", "d", "c"]);
    let sum: f64 = breakdown.iter().map(|share| share.percent).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn invalid_amounts_are_rejected_and_updates_validate() {
    let conn = open_db_in_memory().unwrap();
    let mut store = FinanceStore::open(SqliteStateStorage::new(&conn));
    let err = store
        .add_transaction(NewTransaction::expense(0, "food", today()))
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::NonPositiveAmount { .. })
    ));

    let transaction = store
        .add_transaction(NewTransaction::expense(10, "food", today()))
        .unwrap();
    let err = store
        .update_transaction(
            transaction.id,
            TransactionPatch {
                amount: Some(-5),
                ..TransactionPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.transaction(transaction.id).unwrap().amount, 10);

    let moved = store
        .update_transaction(
            transaction.id,
            TransactionPatch {
                date: NaiveDate::from_ymd_opt(2026, 9, 30),
                ..TransactionPatch::default()
            },
        )
        .unwrap();
    assert!(transactions_in_month(store.transactions(), 2026, 10).is_empty());
    assert_eq!(transactions_in_month(store.transactions(), 2026, 9)[0].id, moved.id);
}

#[test]
fn goal_contributions_accumulate() {
    let conn = open_db_in_memory().unwrap();
    let mut store = FinanceStore::open(SqliteStateStorage::new(&conn));
    let goal = store
        .add_goal(NewSavingGoal {
            name: "vacation".to_string(),
            target_amount: 4_000_000,
            current_amount: 0,
            deadline: None,
        })
        .unwrap();
    store.contribute_to_goal(goal.id, 1_000_000).unwrap();
    let goal = store.contribute_to_goal(goal.id, 1_000_000).unwrap();
    assert_eq!(goal.current_amount, 2_000_000);
    assert_eq!(goal_progress(&goal), 0.5);
    assert!(store.contribute_to_goal(goal.id, 0).is_err());

    store.delete_goal(goal.id).unwrap();
    assert_eq!(
        store.delete_goal(goal.id).unwrap_err(),
        StoreError::NotFound(goal.id)
    );
}

#[test]
fn huge_amounts_saturate_instead_of_overflowing() {
    let conn = open_db_in_memory().unwrap();
    let mut store = FinanceStore::open(SqliteStateStorage::new(&conn));
    store
        .add_transaction(NewTransaction::income(i64::MAX, "salary", today()))
        .unwrap();
    store
        .add_transaction(NewTransaction::income(1, "salary", today()))
        .unwrap();
    store
        .add_transaction(NewTransaction::expense(i64::MAX, "food", today()))
        .unwrap();
    store
        .add_transaction(NewTransaction::expense(1, "food", today()))
        .unwrap();

    let totals = totals(store.transactions());
    assert_eq!(totals.income, i64::MAX);
    assert_eq!(totals.expense, i64::MAX);
    assert_eq!(totals.balance, 0);
    assert_eq!(food_total(&store), i64::MAX);
}
