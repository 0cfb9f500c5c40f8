//! Command handlers for the `pz` binary.
//!
//! Each handler converts clap arguments into core parameters, calls the
//! planner and renders the result's markdown `Display` output, the same
//! text the MCP server returns.

use anyhow::{bail, Context, Result};
use log::debug;
use periodize_core::{
    display::{
        describe_day_changes, CreateResult, DeleteResult, GenerateResult, OperationStatus,
        UpdateResult,
    },
    params::{
        CreatePlan, DeletePlan, Id, ListPlans, ModulatedLoad, PlanPosition, RegeneratePlan,
        ResolveContext, SetPlanActive, UpdateDay,
    },
    Planner,
};

use crate::{
    args::{DayCommands, PlanCommands},
    renderer::TerminalRenderer,
};

/// Runs CLI commands against a planner and prints their results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => self.create_plan(&args.into()).await,
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
            PlanCommands::Position(args) => self.plan_position(&args.into()).await,
            PlanCommands::Activate(args) => self.set_plan_active(args.id, true).await,
            PlanCommands::Deactivate(args) => self.set_plan_active(args.id, false).await,
            PlanCommands::Clear(args) => self.clear_structure(&args.into()).await,
            PlanCommands::Generate(args) => self.generate_plan(&args.into()).await,
            PlanCommands::Delete(args) => self.delete_plan(&args.into()).await,
        }
    }

    pub async fn handle_day_command(&self, command: DayCommands) -> Result<()> {
        match command {
            DayCommands::Update(args) => self.update_day(&args.into()).await,
        }
    }

    async fn create_plan(&self, params: &CreatePlan) -> Result<()> {
        let generated = self
            .planner
            .create_plan(params)
            .await
            .context("Failed to create plan")?;
        self.renderer.render(&CreateResult::new(generated).to_string())
    }

    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let summaries = self
            .planner
            .list_plans(params)
            .await
            .context("Failed to list plans")?;

        let title = if params.include_inactive {
            "All Plans"
        } else {
            "Active Plans"
        };
        self.renderer.render(&format!("# {title}\n\n{summaries}"))
    }

    async fn show_plan(&self, params: &Id) -> Result<()> {
        let Some(plan) = self
            .planner
            .get_plan(params)
            .await
            .context("Failed to get plan")?
        else {
            bail!("Plan with ID {} not found", params.id);
        };
        self.renderer.render(&plan.to_string())
    }

    async fn plan_position(&self, params: &PlanPosition) -> Result<()> {
        let position = self
            .planner
            .plan_position(params)
            .await
            .with_context(|| format!("Failed to locate date in plan {}", params.id))?;

        match position {
            Some(context) => self.renderer.render(&context.to_string()),
            None => self.renderer.render(
                &OperationStatus::failure(format!(
                    "{} is outside plan {}",
                    date_label(params.date.as_deref()),
                    params.id
                ))
                .to_string(),
            ),
        }
    }

    async fn set_plan_active(&self, id: u64, active: bool) -> Result<()> {
        self.planner
            .set_plan_active(&SetPlanActive { id, active })
            .await
            .with_context(|| format!("Failed to update plan {id}"))?;
        self.renderer
            .render(&OperationStatus::plan_activation(id, active).to_string())
    }

    async fn clear_structure(&self, params: &Id) -> Result<()> {
        let phases = self
            .planner
            .clear_structure(params)
            .await
            .with_context(|| format!("Failed to clear plan {}", params.id))?;
        self.renderer
            .render(&OperationStatus::structure_cleared(params.id, phases).to_string())
    }

    async fn generate_plan(&self, params: &RegeneratePlan) -> Result<()> {
        let generated = self
            .planner
            .regenerate_plan(params)
            .await
            .with_context(|| format!("Failed to generate plan {}", params.id))?;
        self.renderer
            .render(&GenerateResult(generated).to_string())
    }

    async fn delete_plan(&self, params: &DeletePlan) -> Result<()> {
        if !params.confirmed {
            bail!(
                "Deleting plan {} removes its whole structure; re-run with --confirm to proceed",
                params.id
            );
        }

        let Some(plan) = self
            .planner
            .delete_plan(params)
            .await
            .context("Failed to delete plan")?
        else {
            bail!("Plan with ID {} not found", params.id);
        };
        self.renderer.render(&DeleteResult::new(plan).to_string())
    }

    pub async fn show_context(&self, params: &ResolveContext) -> Result<()> {
        debug!("Resolving context for {:?}", params.date);

        let context = self
            .planner
            .current_context(params)
            .await
            .context("Failed to resolve training context")?;

        match context {
            Some(context) => self.renderer.render(&context.to_string()),
            None => self.renderer.render(&no_active_plan(params)),
        }
    }

    pub async fn show_load(&self, params: &ModulatedLoad) -> Result<()> {
        let load = self
            .planner
            .modulated_load(params)
            .await
            .context("Failed to compute load")?;

        match load {
            Some(load) => self.renderer.render(&load.to_string()),
            None => self.renderer.render(&no_active_plan(&params.context)),
        }
    }

    async fn update_day(&self, params: &UpdateDay) -> Result<()> {
        let request = params.to_request()?;
        let day = self
            .planner
            .update_day(params)
            .await
            .with_context(|| format!("Failed to update day {}", params.id))?;

        let result = UpdateResult::with_changes(day, describe_day_changes(&request));
        self.renderer.render(&result.to_string())
    }
}

fn date_label(date: Option<&str>) -> &str {
    date.unwrap_or("Today")
}

fn no_active_plan(params: &ResolveContext) -> String {
    OperationStatus::failure(format!(
        "No active plan covers {}",
        date_label(params.date.as_deref()).to_lowercase()
    ))
    .to_string()
}
