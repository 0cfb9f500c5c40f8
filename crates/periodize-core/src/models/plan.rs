//! Plan model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{FocusProfile, OwnerFilter, PeriodizationStrategy, Phase};
use crate::calendar;

/// A periodized training program over a fixed date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan (0 until persisted)
    pub id: u64,

    /// Display name of the plan
    pub name: String,

    /// Owning user, when the plan belongs to a trainee
    pub user_id: Option<String>,

    /// Owning client, when the plan is managed for a coaching client
    pub client_id: Option<String>,

    /// First day of the plan
    pub start_date: Date,

    /// Last day of the plan
    pub end_date: Date,

    /// Phase layout strategy
    #[serde(default)]
    pub strategy: PeriodizationStrategy,

    /// Dominant focus of the plan
    #[serde(default)]
    pub primary_focus: FocusProfile,

    /// Alternate focus used by block periodization
    pub secondary_focus: Option<FocusProfile>,

    /// Number of training sessions per week
    pub days_per_week: u8,

    /// ISO weekday indices (Monday = 1) the trainee trains on; empty means
    /// the default pattern for `days_per_week`
    #[serde(default)]
    pub training_days: Vec<u8>,

    /// Whether the plan takes part in context resolution
    pub is_active: bool,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,

    /// Generated phases, in order
    #[serde(default)]
    pub phases: Vec<Phase>,
}

impl Plan {
    /// Number of weeks spanned by `[start_date, end_date]`, rounded up.
    ///
    /// Both ends count, so a plan starting and ending on the same day lasts
    /// one week. Returns 0 when the interval is empty or cannot be measured.
    pub fn duration_weeks(&self) -> u32 {
        calendar::days_between(self.start_date, self.end_date)
            .map(|days| calendar::weeks_covering(days + 1))
            .unwrap_or(0)
    }

    /// Whether phases have already been generated for this plan.
    pub fn has_structure(&self) -> bool {
        !self.phases.is_empty()
    }

    /// Whether `date` falls within the plan (inclusive both ends).
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Weekdays that are training days: the configured set, or the default
    /// pattern for the weekly frequency.
    pub fn effective_training_days(&self) -> Vec<u8> {
        if self.training_days.is_empty() {
            calendar::default_training_days(self.days_per_week).to_vec()
        } else {
            self.training_days.clone()
        }
    }

    /// Whether the plan belongs to the owner described by `filter`.
    ///
    /// A filter with neither identity set matches every plan.
    pub fn is_owned_by(&self, filter: &OwnerFilter) -> bool {
        if filter.is_empty() {
            return true;
        }
        let user_match = filter
            .user_id
            .as_deref()
            .is_some_and(|id| self.user_id.as_deref() == Some(id));
        let client_match = filter
            .client_id
            .as_deref()
            .is_some_and(|id| self.client_id.as_deref() == Some(id));
        user_match || client_match
    }

    /// Total weeks across all generated phases.
    pub fn generated_weeks(&self) -> usize {
        self.phases.iter().map(|phase| phase.weeks.len()).sum()
    }
}
