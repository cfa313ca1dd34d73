//! Time grid: periods and week configuration.
//!
//! A school week is a dense grid of `days_per_week × periods_per_day`
//! meeting slots. A [`Period`] is one concrete cell of that grid.
//! Occupancy tables throughout the engine are plain sets of periods;
//! only equality matters, never ordering.

use serde::{Deserialize, Serialize};

/// A concrete meeting instance: one slot on one day.
///
/// `day` is in `[0, days_per_week)`, `slot` in `[0, periods_per_day)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    /// Day of the week (0-indexed).
    pub day: u32,
    /// Period of the day (0-indexed).
    pub slot: u32,
}

impl Period {
    /// Creates a period.
    pub fn new(day: u32, slot: u32) -> Self {
        Self { day, slot }
    }

    /// Canonical key, rendered as `"day-slot"`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.day, self.slot)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.day, self.slot)
    }
}

/// Dimensions of the weekly time grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Number of teaching periods per day.
    pub periods_per_day: u32,
    /// Number of school days per week.
    pub days_per_week: u32,
}

impl TimeConfig {
    /// Creates a time configuration.
    pub fn new(periods_per_day: u32, days_per_week: u32) -> Self {
        Self {
            periods_per_day,
            days_per_week,
        }
    }

    /// Total number of periods in one week.
    pub fn week_periods(&self) -> u32 {
        self.periods_per_day * self.days_per_week
    }

    /// Whether a period lies inside the grid.
    pub fn contains(&self, period: Period) -> bool {
        period.day < self.days_per_week && period.slot < self.periods_per_day
    }

    /// All periods of the week at a fixed slot, one per day, in day order.
    pub fn slot_across_week(&self, slot: u32) -> Vec<Period> {
        (0..self.days_per_week)
            .map(|day| Period::new(day, slot))
            .collect()
    }
}

impl Default for TimeConfig {
    /// A common secondary-school grid: 7 periods over a 5-day week.
    fn default() -> Self {
        Self {
            periods_per_day: 7,
            days_per_week: 5,
        }
    }
}
