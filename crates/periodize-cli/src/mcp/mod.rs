//! MCP server implementation for Periodize
//!
//! Exposes plan management, context resolution and load modulation as
//! Model Context Protocol tools so that AI assistants can build and follow
//! training plans.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use periodize_core::Planner;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{
    CreatePlan, DeletePlan, Id, ListPlans, McpResult, ModulatedLoad, PlanPosition,
    RegeneratePlan, ResolveContext, SetActive, UpdateDay,
};

const INSTRUCTIONS: &str = r#"Periodize builds periodized strength-training plans and tells you where any date falls inside them.

## Core Concepts
- **Plan**: a date range with a strategy (linear, block, undulating), a primary focus and optional secondary focus, and the weekdays trained
- **Phase**: a block of weeks with a type (accumulation, intensification, transformation) and a focus; its last week is a deload
- **Week**: load level (low/medium/high), intensity and volume factors, and a cumulative load progression
- **Day**: a calendar date marked as training or rest, with completion tracking

## Workflow
1. `create_plan` with a name, start_date and either end_date or weeks; the structure is generated immediately
2. `current_context` for a date (today by default) to get the plan, phase, week and day that apply
3. `modulated_load` turns a base percentage of 1RM into this week's percentage, and kg when one_rep_max is given
4. `update_day` records completion, notes or a workout id for a day from the context

## Maintenance
- `list_plans` and `show_plan` to inspect plans
- `set_plan_active` to exclude a plan from context resolution without deleting it
- `clear_structure` then `regenerate_plan` to rebuild phases, e.g. with a different phase_weeks
- `delete_plan` with confirmed=true removes a plan permanently

Dates use the YYYY-MM-DD format and weekdays are numbered 1 (Monday) to 7 (Sunday)."#;

/// MCP server for Periodize
#[derive(Clone)]
pub struct PeriodizeMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PeriodizeMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "create_plan",
        description = "Create a training plan and generate its phases, weeks and days. Requires name and start_date (YYYY-MM-DD) plus exactly one of end_date or weeks. Optional: strategy (linear, block, undulating), primary_focus and secondary_focus (strength, hypertrophy, power, endurance, general), days_per_week (1-7) or explicit training_days (1=Mon..7=Sun), phase_weeks, user_id and client_id."
    )]
    async fn create_plan(&self, params: Parameters<CreatePlan>) -> McpResult {
        self.handlers().create_plan(params).await
    }

    #[tool(
        name = "list_plans",
        description = "List training plans with phase, week and completion counts. Active plans only unless include_inactive=true; filter by user_id or client_id."
    )]
    async fn list_plans(&self, params: Parameters<ListPlans>) -> McpResult {
        self.handlers().list_plans(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Show a plan with every phase and week: dates, load level, intensity and volume factors, progression, and day IDs."
    )]
    async fn show_plan(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "set_plan_active",
        description = "Activate or deactivate a plan. Inactive plans are kept but ignored by current_context and modulated_load."
    )]
    async fn set_plan_active(&self, params: Parameters<SetActive>) -> McpResult {
        self.handlers().set_plan_active(params).await
    }

    #[tool(
        name = "clear_structure",
        description = "Remove all phases, weeks and days of a plan, including completion tracking, so that it can be regenerated."
    )]
    async fn clear_structure(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().clear_structure(params).await
    }

    #[tool(
        name = "regenerate_plan",
        description = "Generate phases, weeks and days for a plan whose structure was cleared. Optionally set phase_weeks. Fails if the plan still has a structure."
    )]
    async fn regenerate_plan(&self, params: Parameters<RegeneratePlan>) -> McpResult {
        self.handlers().regenerate_plan(params).await
    }

    #[tool(
        name = "delete_plan",
        description = "Permanently delete a plan with its whole structure. Requires confirmed=true. This cannot be undone; consider set_plan_active instead."
    )]
    async fn delete_plan(&self, params: Parameters<DeletePlan>) -> McpResult {
        self.handlers().delete_plan(params).await
    }

    #[tool(
        name = "current_context",
        description = "Resolve the plan, phase, week and day that apply on a date (today by default) across active plans, optionally restricted to a user_id or client_id. The most recently started plan wins when several overlap."
    )]
    async fn current_context(&self, params: Parameters<ResolveContext>) -> McpResult {
        self.handlers().current_context(params).await
    }

    #[tool(
        name = "plan_position",
        description = "Locate a date (today by default) inside one specific plan, whether active or not."
    )]
    async fn plan_position(&self, params: Parameters<PlanPosition>) -> McpResult {
        self.handlers().plan_position(params).await
    }

    #[tool(
        name = "modulated_load",
        description = "Adjust base_percentage (of 1RM, 0-100] to the week that applies on a date: cumulative progression times the week's intensity factor, capped at 100%. Give one_rep_max to get kg and the estimated 1RM after the current phase, and round_to (e.g. 2.5) to round it. Optional sets and reps are scaled by the week's volume factor. Warns when the result is more than 10% above the base."
    )]
    async fn modulated_load(&self, params: Parameters<ModulatedLoad>) -> McpResult {
        self.handlers().modulated_load(params).await
    }

    #[tool(
        name = "update_day",
        description = "Update a training day by ID: completed (true/false), notes, and workout_id. At least one field is required."
    )]
    async fn update_day(&self, params: Parameters<UpdateDay>) -> McpResult {
        self.handlers().update_day(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for PeriodizeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "periodize".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport until the client disconnects or
/// the process receives SIGINT/SIGTERM.
pub async fn run_stdio_server(server: PeriodizeMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Periodize MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
