//! Derived views computed from store state on every render.
//!
//! # Invariants
//! - Views are pure: same input and `today` give the same output.
//! - Empty collections produce empty results, never errors.

pub mod calendar;
pub mod contacts;
pub mod finance;
pub mod habits;
pub mod lists;
pub mod notes;
pub mod tasks;
