//! This crate computes the upcoming trash and recycling collection day for the fixed
//! pickup schedule behind <https://trashdays.com> and renders the static artifacts
//! published there.
//!
//! Trash goes out every Tuesday and recycling every other Tuesday; a pickup landing
//! on an observed holiday shifts one day later.

pub use chrono;
pub use chrono_tz;

pub mod render;
pub mod schedule;
