//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use periodize_core::{
    display::{
        describe_day_changes, CreateResult, DeleteResult, GenerateResult, OperationStatus,
        UpdateResult,
    },
    params as core, Planner,
};
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::{not_found, to_mcp_error};

/// Transparent serde wrapper that lets core parameter types be used as MCP
/// tool arguments without the core crate knowing about rmcp.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreatePlan = McpParams<core::CreatePlan>;
pub type ListPlans = McpParams<core::ListPlans>;
pub type DeletePlan = McpParams<core::DeletePlan>;
pub type SetActive = McpParams<core::SetPlanActive>;
pub type RegeneratePlan = McpParams<core::RegeneratePlan>;
pub type ResolveContext = McpParams<core::ResolveContext>;
pub type PlanPosition = McpParams<core::PlanPosition>;
pub type ModulatedLoad = McpParams<core::ModulatedLoad>;
pub type UpdateDay = McpParams<core::UpdateDay>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn no_context_message(date: Option<&str>) -> String {
    match date {
        Some(date) => format!("No active plan covers {date}."),
        None => "No active plan covers today.".to_string(),
    }
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<Planner>>) -> Self {
        Self { planner }
    }

    pub async fn create_plan(&self, Parameters(params): Parameters<CreatePlan>) -> McpResult {
        debug!("create_plan: {:?}", params);

        let generated = self
            .planner
            .lock()
            .await
            .create_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create plan", &e))?;

        text_result(CreateResult::new(generated).to_string())
    }

    pub async fn list_plans(&self, Parameters(params): Parameters<ListPlans>) -> McpResult {
        debug!("list_plans: {:?}", params);

        let inner_params = params.as_ref();
        let summaries = self
            .planner
            .lock()
            .await
            .list_plans(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to list plans", &e))?;

        let title = if inner_params.include_inactive {
            "All Plans"
        } else {
            "Active Plans"
        };
        text_result(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_plan: {:?}", params);

        let plan = self
            .planner
            .lock()
            .await
            .get_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get plan", &e))?
            .ok_or_else(|| not_found("Plan", params.as_ref().id))?;

        text_result(plan.to_string())
    }

    pub async fn set_plan_active(&self, Parameters(params): Parameters<SetActive>) -> McpResult {
        debug!("set_plan_active: {:?}", params);

        let inner_params = params.as_ref();
        self.planner
            .lock()
            .await
            .set_plan_active(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to update plan", &e))?;

        text_result(
            OperationStatus::plan_activation(inner_params.id, inner_params.active).to_string(),
        )
    }

    pub async fn clear_structure(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("clear_structure: {:?}", params);

        let plan_id = params.as_ref().id;
        let phases = self
            .planner
            .lock()
            .await
            .clear_structure(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to clear plan structure", &e))?;

        text_result(OperationStatus::structure_cleared(plan_id, phases).to_string())
    }

    pub async fn regenerate_plan(
        &self,
        Parameters(params): Parameters<RegeneratePlan>,
    ) -> McpResult {
        debug!("regenerate_plan: {:?}", params);

        let generated = self
            .planner
            .lock()
            .await
            .regenerate_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to regenerate plan", &e))?;

        text_result(GenerateResult(generated).to_string())
    }

    pub async fn delete_plan(&self, Parameters(params): Parameters<DeletePlan>) -> McpResult {
        debug!("delete_plan: {:?}", params);

        let deleted = self
            .planner
            .lock()
            .await
            .delete_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete plan", &e))?
            .ok_or_else(|| not_found("Plan", params.as_ref().id))?;

        text_result(DeleteResult::new(deleted).to_string())
    }

    pub async fn current_context(
        &self,
        Parameters(params): Parameters<ResolveContext>,
    ) -> McpResult {
        debug!("current_context: {:?}", params);

        let context = self
            .planner
            .lock()
            .await
            .current_context(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to resolve training context", &e))?;

        match context {
            Some(context) => text_result(context.to_string()),
            None => text_result(no_context_message(params.as_ref().date.as_deref())),
        }
    }

    pub async fn plan_position(&self, Parameters(params): Parameters<PlanPosition>) -> McpResult {
        debug!("plan_position: {:?}", params);

        let inner_params = params.as_ref();
        let position = self
            .planner
            .lock()
            .await
            .plan_position(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to locate date in plan", &e))?;

        match position {
            Some(context) => text_result(context.to_string()),
            None => text_result(format!(
                "{} is outside plan {}.",
                inner_params.date.as_deref().unwrap_or("Today"),
                inner_params.id
            )),
        }
    }

    pub async fn modulated_load(
        &self,
        Parameters(params): Parameters<ModulatedLoad>,
    ) -> McpResult {
        debug!("modulated_load: {:?}", params);

        let load = self
            .planner
            .lock()
            .await
            .modulated_load(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to compute load", &e))?;

        match load {
            Some(load) => text_result(load.to_string()),
            None => text_result(no_context_message(
                params.as_ref().context.date.as_deref(),
            )),
        }
    }

    pub async fn update_day(&self, Parameters(params): Parameters<UpdateDay>) -> McpResult {
        debug!("update_day: {:?}", params);

        let inner_params = params.as_ref();
        let request = inner_params
            .to_request()
            .map_err(|e| to_mcp_error("Failed to update day", &e))?;
        let day = self
            .planner
            .lock()
            .await
            .update_day(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to update day", &e))?;

        text_result(UpdateResult::with_changes(day, describe_day_changes(&request)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_deserialize_transparently() {
        let params: ModulatedLoad = serde_json::from_value(serde_json::json!({
            "base_percentage": 80.0,
            "one_rep_max": 150.0,
            "date": "2025-02-05"
        }))
        .unwrap();
        assert_eq!(params.as_ref().base_percentage, 80.0);
        assert_eq!(params.as_ref().context.date.as_deref(), Some("2025-02-05"));
    }

    #[test]
    fn test_no_context_message() {
        assert_eq!(
            no_context_message(Some("2025-05-01")),
            "No active plan covers 2025-05-01."
        );
        assert_eq!(no_context_message(None), "No active plan covers today.");
    }
}
