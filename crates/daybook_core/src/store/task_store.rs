//! Task store: tasks with nested subtasks.

use super::{find_mut, PersistedStore, StoreError, StoreResult, StoreState};
use crate::model::task::{NewTask, Subtask, Task, TaskPatch};
use crate::model::{require_text, EntityId};
use crate::persist::StateStorage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskState {
    pub tasks: BTreeMap<EntityId, Task>,
}

impl StoreState for TaskState {
    const NAME: &'static str = "tasks";
}

pub struct TaskStore<B: StateStorage> {
    inner: PersistedStore<TaskState, B>,
}

impl<B: StateStorage> TaskStore<B> {
    pub fn open(storage: B) -> Self {
        Self {
            inner: PersistedStore::open(storage),
        }
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.inner.state().tasks.values()
    }

    pub fn get(&self, id: EntityId) -> Option<&Task> {
        self.inner.state().tasks.get(&id)
    }

    pub fn len(&self) -> usize {
        self.inner.state().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.state().tasks.is_empty()
    }

    pub fn add_task(&mut self, input: NewTask) -> StoreResult<Task> {
        let task = Task::from_new(input);
        task.validate()?;
        self.inner.mutate(|state| {
            state.tasks.insert(task.id, task.clone());
            Ok(task)
        })
    }

    pub fn update_task(&mut self, id: EntityId, patch: TaskPatch) -> StoreResult<Task> {
        self.inner.mutate(|state| {
            let task = find_mut(&mut state.tasks, id)?;
            let mut updated = task.clone();
            updated.apply(patch);
            updated.validate()?;
            *task = updated.clone();
            Ok(updated)
        })
    }

    /// Flips the task between pending and completed.
    pub fn toggle_task(&mut self, id: EntityId) -> StoreResult<Task> {
        self.inner.mutate(|state| {
            let task = find_mut(&mut state.tasks, id)?;
            task.toggle();
            Ok(task.clone())
        })
    }

    pub fn delete_task(&mut self, id: EntityId) -> StoreResult<Task> {
        self.inner
            .mutate(|state| state.tasks.remove(&id).ok_or(StoreError::NotFound(id)))
    }

    pub fn add_subtask(&mut self, task_id: EntityId, title: &str) -> StoreResult<Subtask> {
        let subtask = Subtask::new(title);
        require_text("subtask.title", &subtask.title)?;
        self.inner.mutate(|state| {
            let task = find_mut(&mut state.tasks, task_id)?;
            task.subtasks.push(subtask.clone());
            Ok(subtask)
        })
    }

    pub fn toggle_subtask(
        &mut self,
        task_id: EntityId,
        subtask_id: EntityId,
    ) -> StoreResult<Subtask> {
        self.inner.mutate(|state| {
            let task = find_mut(&mut state.tasks, task_id)?;
            let subtask = task
                .subtasks
                .iter_mut()
                .find(|subtask| subtask.id == subtask_id)
                .ok_or(StoreError::NotFound(subtask_id))?;
            subtask.completed = !subtask.completed;
            Ok(subtask.clone())
        })
    }

    pub fn delete_subtask(&mut self, task_id: EntityId, subtask_id: EntityId) -> StoreResult<()> {
        self.inner.mutate(|state| {
            let task = find_mut(&mut state.tasks, task_id)?;
            let before = task.subtasks.len();
            task.subtasks.retain(|subtask| subtask.id != subtask_id);
            if task.subtasks.len() == before {
                return Err(StoreError::NotFound(subtask_id));
            }
            Ok(())
        })
    }

    /// Removes all completed tasks and returns how many were dropped.
    pub fn clear_completed(&mut self) -> usize {
        self.inner.update(|state| {
            let before = state.tasks.len();
            state.tasks.retain(|_, task| !task.is_completed());
            before - state.tasks.len()
        })
    }
}
