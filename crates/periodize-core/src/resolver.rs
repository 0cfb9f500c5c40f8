//! Training context resolver.
//!
//! Finds, for a calendar date and an optional owner, the active plan and the
//! phase, week and day the date falls in. Plans are read through an injected
//! [`PlanRepository`]; the resolver holds no other state.
//!
//! Every lookup miss is a normal outcome and yields `Ok(None)`: no active
//! plan, a plan without a phase or week covering the date (a malformed
//! plan), or a date after the program ended. Only repository failures are
//! errors.
//!
//! Phases and weeks share boundary dates with their successors, so a
//! boundary date is contained by two units. The unit that starts on that
//! date wins, which keeps the date inside the week that actually holds its
//! day.

use jiff::civil::Date;
use log::debug;

use crate::{
    error::Result,
    models::{OwnerFilter, Plan, TrainingContext},
    progression::{self, LoadPrescription},
};

/// Read access to stored plans.
pub trait PlanRepository {
    /// Active plans whose `[start_date, end_date]` contains `date`, with
    /// their full structure, most recently started first.
    fn active_plans_on(&self, date: Date) -> Result<Vec<Plan>>;
}

impl<T: PlanRepository + ?Sized> PlanRepository for &T {
    fn active_plans_on(&self, date: Date) -> Result<Vec<Plan>> {
        (**self).active_plans_on(date)
    }
}

/// A repository over plans held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlans {
    plans: Vec<Plan>,
}

impl InMemoryPlans {
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    pub fn push(&mut self, plan: Plan) {
        self.plans.push(plan);
    }
}

impl PlanRepository for InMemoryPlans {
    fn active_plans_on(&self, date: Date) -> Result<Vec<Plan>> {
        let mut plans: Vec<Plan> = self
            .plans
            .iter()
            .filter(|plan| plan.is_active && plan.contains(date))
            .cloned()
            .collect();
        plans.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(plans)
    }
}

/// Resolves training contexts against a plan repository.
#[derive(Debug, Clone)]
pub struct ContextResolver<R> {
    repository: R,
}

impl<R: PlanRepository> ContextResolver<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// The training context for `date`, or `None` when no active plan of
    /// `owner` covers it.
    ///
    /// The first matching plan in repository order is used, not the best
    /// match.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub fn current_context(
        &self,
        date: Date,
        owner: &OwnerFilter,
    ) -> Result<Option<TrainingContext>> {
        let plans = self.repository.active_plans_on(date)?;
        let Some(plan) = plans.into_iter().find(|plan| plan.is_owned_by(owner)) else {
            debug!("No active plan on {date} for {owner:?}");
            return Ok(None);
        };
        Ok(resolve_in_plan(plan, date))
    }

    /// Load prescription for `base_percentage` of 1RM under `context`.
    pub fn modulated_load(
        &self,
        base_percentage: f64,
        context: &TrainingContext,
        one_rep_max: Option<f64>,
    ) -> LoadPrescription {
        modulated_load(base_percentage, context, one_rep_max)
    }
}

/// Load prescription for `base_percentage` of 1RM in the week of `context`.
pub fn modulated_load(
    base_percentage: f64,
    context: &TrainingContext,
    one_rep_max: Option<f64>,
) -> LoadPrescription {
    progression::progressive_load_as_percentage_of_1rm(base_percentage, context.week(), one_rep_max)
}

/// Locates the phase, week and day of `plan` containing `date`.
///
/// Returns `None` when no phase or no week of that phase contains the date.
/// A missing day still yields a context.
pub fn resolve_in_plan(plan: Plan, date: Date) -> Option<TrainingContext> {
    let Some(phase_index) = plan.phases.iter().rposition(|phase| phase.contains(date)) else {
        debug!("Plan {} has no phase containing {date}", plan.id);
        return None;
    };
    let phase = &plan.phases[phase_index];

    let Some(week_index) = phase.weeks.iter().rposition(|week| week.contains(date)) else {
        debug!("Phase {} of plan {} has no week containing {date}", phase.order, plan.id);
        return None;
    };
    let week = &phase.weeks[week_index];

    let day_index = week.days.iter().position(|day| day.date == date);

    TrainingContext::new(date, plan, phase_index, week_index, day_index)
}
