//! Finance store: transactions and saving goals.

use super::{find_mut, PersistedStore, StoreError, StoreResult, StoreState};
use crate::model::finance::{
    NewSavingGoal, NewTransaction, SavingGoal, Transaction, TransactionPatch,
};
use crate::model::{require_positive, Amount, EntityId};
use crate::persist::StateStorage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceState {
    pub transactions: BTreeMap<EntityId, Transaction>,
    pub goals: BTreeMap<EntityId, SavingGoal>,
}

impl StoreState for FinanceState {
    const NAME: &'static str = "finance";
}

pub struct FinanceStore<B: StateStorage> {
    inner: PersistedStore<FinanceState, B>,
}

impl<B: StateStorage> FinanceStore<B> {
    pub fn open(storage: B) -> Self {
        Self {
            inner: PersistedStore::open(storage),
        }
    }

    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.inner.state().transactions.values()
    }

    pub fn goals(&self) -> impl Iterator<Item = &SavingGoal> {
        self.inner.state().goals.values()
    }

    pub fn transaction(&self, id: EntityId) -> Option<&Transaction> {
        self.inner.state().transactions.get(&id)
    }

    pub fn goal(&self, id: EntityId) -> Option<&SavingGoal> {
        self.inner.state().goals.get(&id)
    }

    pub fn add_transaction(&mut self, input: NewTransaction) -> StoreResult<Transaction> {
        let transaction = Transaction::from_new(input);
        transaction.validate()?;
        self.inner.mutate(|state| {
            state
                .transactions
                .insert(transaction.id, transaction.clone());
            Ok(transaction)
        })
    }

    pub fn update_transaction(
        &mut self,
        id: EntityId,
        patch: TransactionPatch,
    ) -> StoreResult<Transaction> {
        self.inner.mutate(|state| {
            let transaction = find_mut(&mut state.transactions, id)?;
            let mut updated = transaction.clone();
            updated.apply(patch);
            updated.validate()?;
            *transaction = updated.clone();
            Ok(updated)
        })
    }

    pub fn delete_transaction(&mut self, id: EntityId) -> StoreResult<Transaction> {
        self.inner.mutate(|state| {
            state
                .transactions
                .remove(&id)
                .ok_or(StoreError::NotFound(id))
        })
    }

    pub fn add_goal(&mut self, input: NewSavingGoal) -> StoreResult<SavingGoal> {
        let goal = SavingGoal::from_new(input);
        goal.validate()?;
        self.inner.mutate(|state| {
            state.goals.insert(goal.id, goal.clone());
            Ok(goal)
        })
    }

    /// Adds `amount` to the goal's saved total.
    ///
    /// Contributions may overshoot the target; progress views clamp.
    pub fn contribute_to_goal(&mut self, id: EntityId, amount: Amount) -> StoreResult<SavingGoal> {
        require_positive("amount", amount)?;
        self.inner.mutate(|state| {
            let goal = find_mut(&mut state.goals, id)?;
            goal.current_amount = goal.current_amount.saturating_add(amount);
            Ok(goal.clone())
        })
    }

    pub fn delete_goal(&mut self, id: EntityId) -> StoreResult<SavingGoal> {
        self.inner
            .mutate(|state| state.goals.remove(&id).ok_or(StoreError::NotFound(id)))
    }
}
