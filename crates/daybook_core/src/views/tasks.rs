//! Task list projections.
//!
//! # Invariants
//! - Every task lands in exactly one bucket.
//! - Completed tasks only ever land in `completed`.
//! - Bucket order is priority (high first), then due date, then creation.

use crate::model::task::{Task, TaskCategory, TaskPriority};
use chrono::NaiveDate;
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskBucket {
    Overdue,
    Today,
    Tomorrow,
    Upcoming,
    NoDate,
    Completed,
}

/// Tasks grouped by due date relative to `today`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBuckets<'a> {
    pub overdue: Vec<&'a Task>,
    pub today: Vec<&'a Task>,
    pub tomorrow: Vec<&'a Task>,
    pub upcoming: Vec<&'a Task>,
    pub no_date: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
}

impl<'a> TaskBuckets<'a> {
    pub fn get(&self, bucket: TaskBucket) -> &[&'a Task] {
        match bucket {
            TaskBucket::Overdue => &self.overdue,
            TaskBucket::Today => &self.today,
            TaskBucket::Tomorrow => &self.tomorrow,
            TaskBucket::Upcoming => &self.upcoming,
            TaskBucket::NoDate => &self.no_date,
            TaskBucket::Completed => &self.completed,
        }
    }

    /// Number of tasks still to do.
    pub fn pending_count(&self) -> usize {
        self.overdue.len()
            + self.today.len()
            + self.tomorrow.len()
            + self.upcoming.len()
            + self.no_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending_count() == 0 && self.completed.is_empty()
    }

    fn bucket_mut(&mut self, bucket: TaskBucket) -> &mut Vec<&'a Task> {
        match bucket {
            TaskBucket::Overdue => &mut self.overdue,
            TaskBucket::Today => &mut self.today,
            TaskBucket::Tomorrow => &mut self.tomorrow,
            TaskBucket::Upcoming => &mut self.upcoming,
            TaskBucket::NoDate => &mut self.no_date,
            TaskBucket::Completed => &mut self.completed,
        }
    }
}

/// Classifies one task relative to `today`.
pub fn bucket_of(task: &Task, today: NaiveDate) -> TaskBucket {
    if task.is_completed() {
        return TaskBucket::Completed;
    }
    let Some(due) = task.due_date else {
        return TaskBucket::NoDate;
    };
    match (due - today).num_days() {
        days if days < 0 => TaskBucket::Overdue,
        0 => TaskBucket::Today,
        1 => TaskBucket::Tomorrow,
        _ => TaskBucket::Upcoming,
    }
}

pub fn bucket_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, today: NaiveDate) -> TaskBuckets<'a> {
    let mut buckets = TaskBuckets::default();
    for task in tasks {
        buckets.bucket_mut(bucket_of(task, today)).push(task);
    }
    for bucket in [
        &mut buckets.overdue,
        &mut buckets.today,
        &mut buckets.tomorrow,
        &mut buckets.upcoming,
        &mut buckets.no_date,
    ] {
        bucket.sort_by_key(|task| pending_order(task));
    }
    buckets
        .completed
        .sort_by_key(|task| (Reverse(task.completed_at), task.created_at, task.id));
    buckets
}

fn pending_order(task: &Task) -> (Reverse<TaskPriority>, Option<NaiveDate>, i64, uuid::Uuid) {
    (Reverse(task.priority), task.due_date, task.created_at, task.id)
}

/// Optional filters applied before bucketing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub category: Option<TaskCategory>,
    pub priority: Option<TaskPriority>,
    /// Case-insensitive match on title, description or subtask titles.
    pub search: Option<String>,
}

pub fn filter_tasks<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    filter: &TaskFilter,
) -> Vec<&'a Task> {
    let needle = filter
        .search
        .as_deref()
        .map(|text| text.trim().to_lowercase())
        .filter(|text| !text.is_empty());

    tasks
        .into_iter()
        .filter(|task| filter.category.map_or(true, |category| task.category == category))
        .filter(|task| filter.priority.map_or(true, |priority| task.priority == priority))
        .filter(|task| match needle.as_deref() {
            None => true,
            Some(needle) => task_matches(task, needle),
        })
        .collect()
}

fn task_matches(task: &Task, needle: &str) -> bool {
    task.title.to_lowercase().contains(needle)
        || task
            .description
            .as_deref()
            .is_some_and(|text| text.to_lowercase().contains(needle))
        || task
            .subtasks
            .iter()
            .any(|subtask| subtask.title.to_lowercase().contains(needle))
}

/// Completed subtasks over total; `None` when there are no subtasks.
pub fn task_progress(task: &Task) -> Option<f64> {
    if task.subtasks.is_empty() {
        return None;
    }
    let done = task.subtasks.iter().filter(|subtask| subtask.completed).count();
    Some(done as f64 / task.subtasks.len() as f64)
}

/// Pending tasks due on `date`, in bucket order.
pub fn tasks_due_on<'a>(tasks: impl IntoIterator<Item = &'a Task>, date: NaiveDate) -> Vec<&'a Task> {
    let mut due = tasks
        .into_iter()
        .filter(|task| !task.is_completed() && task.due_date == Some(date))
        .collect::<Vec<_>>();
    due.sort_by_key(|task| pending_order(task));
    due
}
