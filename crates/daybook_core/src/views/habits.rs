//! Habit streaks and completion summaries.
//!
//! # Invariants
//! - Streak walks are bounded to `MAX_STREAK_DAYS` iterations.
//! - An unchecked `today` does not break a streak; the day is still open.

use crate::model::habit::HabitLog;
use crate::model::EntityId;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

pub const MAX_STREAK_DAYS: u32 = 365;

fn completed_days(habit_id: EntityId, logs: &[HabitLog]) -> BTreeSet<NaiveDate> {
    logs.iter()
        .filter(|log| log.habit_id == habit_id && log.completed)
        .map(|log| log.date)
        .collect()
}

pub fn is_done_on(habit_id: EntityId, logs: &[HabitLog], date: NaiveDate) -> bool {
    logs.iter()
        .any(|log| log.habit_id == habit_id && log.date == date && log.completed)
}

/// Consecutive completed days ending today (or yesterday if today is open).
pub fn habit_streak(habit_id: EntityId, logs: &[HabitLog], today: NaiveDate) -> u32 {
    let done = completed_days(habit_id, logs);
    let mut streak = 0;
    let mut day = today;
    for offset in 0..MAX_STREAK_DAYS {
        if done.contains(&day) {
            streak += 1;
        } else if offset > 0 {
            break;
        }
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

/// Longest run of consecutive completed days anywhere in the log.
pub fn best_streak(habit_id: EntityId, logs: &[HabitLog]) -> u32 {
    let mut best = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;
    for day in completed_days(habit_id, logs) {
        current = match previous {
            Some(prev) if day - prev == Duration::days(1) => current + 1,
            _ => 1,
        };
        best = best.max(current);
        previous = Some(day);
    }
    best
}

/// Completion flags for the seven days ending `today`, oldest first.
pub fn week_completion(habit_id: EntityId, logs: &[HabitLog], today: NaiveDate) -> [bool; 7] {
    let done = completed_days(habit_id, logs);
    let mut week = [false; 7];
    for (index, slot) in week.iter_mut().enumerate() {
        let back = 6 - index as i64;
        *slot = today
            .checked_sub_signed(Duration::days(back))
            .is_some_and(|day| done.contains(&day));
    }
    week
}

/// Share of `habit_ids` checked on `date`; `None` when there are no habits.
pub fn daily_completion(habit_ids: &[EntityId], logs: &[HabitLog], date: NaiveDate) -> Option<f64> {
    if habit_ids.is_empty() {
        return None;
    }
    let done = habit_ids
        .iter()
        .filter(|id| is_done_on(**id, logs, date))
        .count();
    Some(done as f64 / habit_ids.len() as f64)
}
