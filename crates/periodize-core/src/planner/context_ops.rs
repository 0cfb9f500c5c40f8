//! Context resolution, load prescriptions and day tracking for the Planner.

use log::debug;

use super::Planner;
use crate::{
    display::LoadResult,
    error::{EngineError, Result},
    models::{Day, TrainingContext},
    params::{ModulatedLoad, PlanPosition, ResolveContext, UpdateDay},
    progression,
    resolver::{self, ContextResolver},
};

impl Planner {
    /// Resolves the training context for a date among active plans.
    ///
    /// Returns `None` when no active plan of the requested owner covers the
    /// date.
    pub async fn current_context(
        &self,
        params: &ResolveContext,
    ) -> Result<Option<TrainingContext>> {
        let date = params.date()?;
        let owner = params.owner();

        self.with_database(move |db| {
            let resolver = ContextResolver::new(&*db);
            resolver.current_context(date, &owner)
        })
        .await
    }

    /// Locates a date inside one plan, active or not.
    ///
    /// # Errors
    ///
    /// `PlanNotFound` for an unknown plan. A date outside the plan yields
    /// `Ok(None)`.
    pub async fn plan_position(&self, params: &PlanPosition) -> Result<Option<TrainingContext>> {
        let date = crate::params::date_or_today("date", params.date.as_deref())?;
        let plan_id = params.id;

        self.with_database(move |db| {
            let plan = db
                .get_plan(plan_id)?
                .ok_or(EngineError::PlanNotFound { id: plan_id })?;
            if !plan.contains(date) {
                debug!("{date} is outside plan {plan_id}");
                return Ok(None);
            }
            Ok(resolver::resolve_in_plan(plan, date))
        })
        .await
    }

    /// Load prescription for a base percentage of 1RM on the resolved date,
    /// with sets and reps scaled to the week's volume and, given a 1RM, the
    /// estimate after the current phase.
    ///
    /// Returns `None` when no context resolves, i.e. nothing is prescribed.
    pub async fn modulated_load(&self, params: &ModulatedLoad) -> Result<Option<LoadResult>> {
        params.validate()?;

        let Some(context) = self.current_context(&params.context).await? else {
            return Ok(None);
        };

        let mut prescription =
            resolver::modulated_load(params.base_percentage, &context, params.one_rep_max);
        if let Some(increment) = params.round_to {
            prescription.kg = prescription
                .kg
                .map(|kg| progression::round_to_increment(kg, increment));
        }

        let week = context.week();
        let sets = params.sets.map(|sets| progression::modulated_sets(sets, week));
        let reps = params.reps.map(|reps| progression::modulated_reps(reps, week));
        let within_safe_increment = progression::is_progression_safe(
            params.base_percentage,
            prescription.percentage,
            progression::DEFAULT_MAX_INCREMENT,
        )?;
        let predicted_one_rep_max = params
            .one_rep_max
            .map(|max| progression::predicted_new_1rm(max, context.phase()));

        Ok(Some(LoadResult {
            base_percentage: params.base_percentage,
            prescription,
            sets,
            reps,
            within_safe_increment,
            predicted_one_rep_max,
            context,
        }))
    }

    /// Records completion, notes or a workout assignment on a day.
    pub async fn update_day(&self, params: &UpdateDay) -> Result<Day> {
        let request = params.to_request()?;
        let day_id = params.id;

        self.with_database(move |db| db.update_day(day_id, &request))
            .await
    }
}
