//! Habit store: habits and their day logs.

use super::{find_mut, PersistedStore, StoreError, StoreResult, StoreState};
use crate::model::habit::{Habit, HabitLog, NewHabit};
use crate::model::{require_text, EntityId};
use crate::persist::StateStorage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitState {
    pub habits: BTreeMap<EntityId, Habit>,
    pub logs: Vec<HabitLog>,
}

impl StoreState for HabitState {
    const NAME: &'static str = "habits";
}

pub struct HabitStore<B: StateStorage> {
    inner: PersistedStore<HabitState, B>,
}

impl<B: StateStorage> HabitStore<B> {
    pub fn open(storage: B) -> Self {
        Self {
            inner: PersistedStore::open(storage),
        }
    }

    pub fn habits(&self) -> impl Iterator<Item = &Habit> {
        self.inner.state().habits.values()
    }

    pub fn habit(&self, id: EntityId) -> Option<&Habit> {
        self.inner.state().habits.get(&id)
    }

    pub fn logs(&self) -> &[HabitLog] {
        &self.inner.state().logs
    }

    pub fn add_habit(&mut self, input: NewHabit) -> StoreResult<Habit> {
        let habit = Habit::from_new(input);
        habit.validate()?;
        self.inner.mutate(|state| {
            state.habits.insert(habit.id, habit.clone());
            Ok(habit)
        })
    }

    pub fn rename_habit(&mut self, id: EntityId, name: &str) -> StoreResult<Habit> {
        require_text("name", name)?;
        self.inner.mutate(|state| {
            let habit = find_mut(&mut state.habits, id)?;
            habit.name = name.trim().to_string();
            Ok(habit.clone())
        })
    }

    /// Removes the habit together with its logs.
    pub fn delete_habit(&mut self, id: EntityId) -> StoreResult<Habit> {
        self.inner.mutate(|state| {
            let habit = state.habits.remove(&id).ok_or(StoreError::NotFound(id))?;
            state.logs.retain(|log| log.habit_id != id);
            Ok(habit)
        })
    }

    /// Flips completion for `date`, creating the day's log on first check.
    pub fn toggle_habit(&mut self, id: EntityId, date: NaiveDate) -> StoreResult<HabitLog> {
        self.inner.mutate(|state| {
            if !state.habits.contains_key(&id) {
                return Err(StoreError::NotFound(id));
            }
            if let Some(log) = state
                .logs
                .iter_mut()
                .find(|log| log.habit_id == id && log.date == date)
            {
                log.completed = !log.completed;
                return Ok(log.clone());
            }
            let log = HabitLog {
                habit_id: id,
                date,
                completed: true,
            };
            state.logs.push(log.clone());
            Ok(log)
        })
    }
}
