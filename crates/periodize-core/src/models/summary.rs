//! Plan summary types and functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{PeriodizationStrategy, Plan};

/// Summary information about a plan with structure statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Plan name
    pub name: String,
    pub user_id: Option<String>,
    pub client_id: Option<String>,
    pub strategy: PeriodizationStrategy,
    pub start_date: Date,
    pub end_date: Date,
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Number of generated phases
    pub phase_count: u32,
    /// Number of generated weeks
    pub week_count: u32,
    /// Number of scheduled training days
    pub training_day_count: u32,
    /// Number of training days marked completed
    pub completed_day_count: u32,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let days = plan
            .phases
            .iter()
            .flat_map(|phase| &phase.weeks)
            .flat_map(|week| week.training_days());
        let (training_day_count, completed_day_count) =
            days.fold((0, 0), |(total, done), day| {
                (total + 1, done + u32::from(day.is_completed))
            });

        Self {
            id: plan.id,
            name: plan.name.clone(),
            user_id: plan.user_id.clone(),
            client_id: plan.client_id.clone(),
            strategy: plan.strategy,
            start_date: plan.start_date,
            end_date: plan.end_date,
            is_active: plan.is_active,
            created_at: plan.created_at,
            phase_count: plan.phases.len() as u32,
            week_count: plan.generated_weeks() as u32,
            training_day_count,
            completed_day_count,
        }
    }
}
