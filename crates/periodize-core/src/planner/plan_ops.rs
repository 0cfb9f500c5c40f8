//! Plan lifecycle operations for the Planner.

use jiff::Timestamp;
use log::{debug, warn};

use super::Planner;
use crate::{
    display::PlanSummaries,
    error::{EngineError, Result},
    generator::{GeneratedPlan, StructureGenerator},
    models::{Plan, PlanFilter},
    params::{CreatePlan, DeletePlan, Id, ListPlans, RegeneratePlan, SetPlanActive},
};

impl Planner {
    fn generator_for(&self, phase_weeks: Option<u32>) -> Result<StructureGenerator> {
        match phase_weeks {
            Some(weeks) => StructureGenerator::new(weeks),
            None => Ok(self.generator),
        }
    }

    /// Validates the parameters, generates the plan's structure and stores
    /// both.
    ///
    /// The returned plan carries database ids. Units the generator had to
    /// skip are listed in [`GeneratedPlan::skipped`]; the rest of the
    /// structure is still stored.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for malformed parameters, `Database` on store
    /// failures.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<GeneratedPlan> {
        let plan = params.to_plan(Timestamp::now())?;
        let generator = self.generator_for(params.phase_weeks)?;

        let generated = generator.generate(plan)?;
        if !generated.is_complete() {
            warn!(
                "Plan '{}' generated with {} skipped units",
                generated.plan.name,
                generated.skipped.len()
            );
        }

        let GeneratedPlan { plan, skipped } = generated;
        let stored = self.with_database(move |db| db.insert_plan(&plan)).await?;
        debug!("Created plan {} '{}'", stored.id, stored.name);

        Ok(GeneratedPlan {
            plan: stored,
            skipped,
        })
    }

    /// Retrieves a plan with its full structure, or `None` if it doesn't
    /// exist.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let plan_id = params.id;
        self.with_database(move |db| db.get_plan(plan_id)).await
    }

    /// Lists plan summaries, most recently started first.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<PlanSummaries> {
        let filter = PlanFilter::from(params);
        let summaries = self
            .with_database(move |db| db.list_plans(Some(&filter)))
            .await?;
        Ok(PlanSummaries(summaries))
    }

    /// Activates or deactivates a plan. Only active plans take part in
    /// context resolution.
    pub async fn set_plan_active(&self, params: &SetPlanActive) -> Result<()> {
        let (id, active) = (params.id, params.active);
        self.with_database(move |db| db.set_plan_active(id, active))
            .await
    }

    /// Removes a plan's phases, weeks and days so that it can be
    /// regenerated. Returns the number of phases removed.
    pub async fn clear_structure(&self, params: &Id) -> Result<usize> {
        let plan_id = params.id;
        self.with_database(move |db| db.clear_structure(plan_id))
            .await
    }

    /// Generates and stores structure for a plan that has none.
    ///
    /// # Errors
    ///
    /// `PlanNotFound` for an unknown plan and `StructureExists` when the
    /// plan still has its structure; call [`Planner::clear_structure`]
    /// first.
    pub async fn regenerate_plan(&self, params: &RegeneratePlan) -> Result<GeneratedPlan> {
        let plan_id = params.id;
        let generator = self.generator_for(params.phase_weeks)?;

        self.with_database(move |db| {
            let plan = db
                .get_plan(plan_id)?
                .ok_or(EngineError::PlanNotFound { id: plan_id })?;

            let GeneratedPlan { mut plan, skipped } = generator.generate(plan)?;
            db.insert_structure(plan_id, &mut plan.phases)?;
            debug!(
                "Regenerated plan {plan_id} with {} phases",
                plan.phases.len()
            );
            Ok(GeneratedPlan { plan, skipped })
        })
        .await
    }

    /// Permanently deletes a plan and its structure, returning what was
    /// deleted, or `None` if the plan didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if `confirmed` is false.
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<Option<Plan>> {
        if !params.confirmed {
            return Err(EngineError::invalid_input("confirmed").with_reason(
                "Plan deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let plan_id = params.id;
        self.with_database(move |db| {
            let plan = db.get_plan(plan_id)?;
            if plan.is_some() {
                db.delete_plan(plan_id)?;
            }
            Ok(plan)
        })
        .await
    }
}
