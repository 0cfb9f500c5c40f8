//! Data models for plans and their periodized structure.
//!
//! A [`Plan`] owns an ordered list of [`Phase`]s (mesocycles), each phase
//! owns its [`Week`]s (microcycles) and each week owns seven [`Day`]s. The
//! structure is produced by [`crate::generator`] and read by
//! [`crate::resolver`], which packages a [`TrainingContext`] for a date.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that presentation stays out of the data
//! definitions.
//!
//! # Examples
//!
//! ```rust
//! use periodize_core::models::{FocusProfile, PeriodizationStrategy, Plan};
//! use jiff::{civil::date, Timestamp};
//!
//! let plan = Plan {
//!     id: 0,
//!     name: "Spring block".to_string(),
//!     user_id: None,
//!     client_id: None,
//!     start_date: date(2025, 3, 3),
//!     end_date: date(2025, 5, 25),
//!     strategy: PeriodizationStrategy::Linear,
//!     primary_focus: FocusProfile::Strength,
//!     secondary_focus: None,
//!     days_per_week: 3,
//!     training_days: vec![],
//!     is_active: true,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//!     phases: vec![],
//! };
//! assert_eq!(plan.duration_weeks(), 12);
//! assert_eq!(plan.effective_training_days(), vec![1, 3, 5]);
//! ```

pub mod context;
pub mod day;
pub mod filters;
pub mod kinds;
pub mod phase;
pub mod plan;
pub mod requests;
pub mod summary;
pub mod week;

#[cfg(test)]
mod tests;

pub use context::TrainingContext;
pub use day::Day;
pub use filters::{OwnerFilter, PlanFilter};
pub use kinds::{FocusProfile, LoadLevel, PeriodizationStrategy, PhaseType};
pub use phase::Phase;
pub use plan::Plan;
pub use requests::UpdateDayRequest;
pub use summary::PlanSummary;
pub use week::Week;
