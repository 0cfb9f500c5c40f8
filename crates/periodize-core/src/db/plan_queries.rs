//! Plan CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::{conversion_error, id_column, parse_optional_text, parse_text};
use crate::{
    error::{DatabaseResultExt, EngineError, Result},
    models::{Plan, PlanFilter, PlanSummary},
    resolver::PlanRepository,
};

const PLAN_COLUMNS: &str = "id, name, user_id, client_id, start_date, end_date, strategy, primary_focus, secondary_focus, days_per_week, training_days, is_active, created_at, updated_at";
const INSERT_PLAN_SQL: &str = "INSERT INTO plans (name, user_id, client_id, start_date, end_date, strategy, primary_focus, secondary_focus, days_per_week, training_days, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const UPDATE_PLAN_ACTIVE_SQL: &str =
    "UPDATE plans SET is_active = ?1, updated_at = ?2 WHERE id = ?3";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

const SUMMARY_COLUMNS: &str = "id, name, user_id, client_id, strategy, start_date, end_date, is_active, created_at, phase_count, week_count, training_day_count, completed_day_count";

impl super::Database {
    /// Builds a plan without structure from a row selected with
    /// `PLAN_COLUMNS`.
    fn build_plan_from_row(row: &Row<'_>) -> rusqlite::Result<Plan> {
        let training_days_json: String = row.get(10)?;
        let training_days: Vec<u8> = serde_json::from_str(&training_days_json)
            .map_err(|e| conversion_error(10, format!("Invalid training days: {e}")))?;

        Ok(Plan {
            id: id_column(row, 0)?,
            name: row.get(1)?,
            user_id: row.get(2)?,
            client_id: row.get(3)?,
            start_date: parse_text(row, 4)?,
            end_date: parse_text(row, 5)?,
            strategy: parse_text(row, 6)?,
            primary_focus: parse_text(row, 7)?,
            secondary_focus: parse_optional_text(row, 8)?,
            days_per_week: row.get(9)?,
            training_days,
            is_active: row.get(11)?,
            created_at: parse_text(row, 12)?,
            updated_at: parse_text(row, 13)?,
            phases: Vec::new(),
        })
    }

    /// Persists a plan together with its generated structure in one
    /// transaction and returns it with database ids filled in.
    pub fn insert_plan(&mut self, plan: &Plan) -> Result<Plan> {
        if plan.end_date < plan.start_date {
            return Err(EngineError::invalid_input("end_date")
                .with_reason("end date must not be before start date"));
        }

        let training_days = serde_json::to_string(&plan.training_days)?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                plan.name,
                plan.user_id,
                plan.client_id,
                plan.start_date.to_string(),
                plan.end_date.to_string(),
                plan.strategy.as_str(),
                plan.primary_focus.as_str(),
                plan.secondary_focus.map(|f| f.as_str()),
                plan.days_per_week,
                training_days,
                plan.is_active,
                plan.created_at.to_string(),
                plan.updated_at.to_string(),
            ],
        )
        .db_context("Failed to insert plan")?;

        let mut stored = plan.clone();
        stored.id = tx.last_insert_rowid() as u64;
        Self::write_structure(&tx, stored.id, &mut stored.phases)?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!(
            "Stored plan {} with {} phases",
            stored.id,
            stored.phases.len()
        );
        Ok(stored)
    }

    /// Retrieves a plan by its ID with its full structure.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let query = format!("SELECT {PLAN_COLUMNS} FROM plans WHERE id = ?1");
        let mut plan = self
            .connection
            .query_row(&query, params![id as i64], Self::build_plan_from_row)
            .optional()
            .db_context("Failed to query plan")?;

        // Eagerly load structure if plan exists
        if let Some(ref mut plan) = plan {
            plan.phases = self.load_structure(plan.id)?;
        }

        Ok(plan)
    }

    /// Lists plan summaries, most recently started first.
    pub fn list_plans(&self, filter: Option<&PlanFilter>) -> Result<Vec<PlanSummary>> {
        let mut query = format!("SELECT {SUMMARY_COLUMNS} FROM plan_summaries");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            // Same rule as `Plan::is_owned_by`: either identity matching is
            // enough.
            match (&f.owner.user_id, &f.owner.client_id) {
                (Some(user_id), Some(client_id)) => {
                    conditions.push("(user_id = ? OR client_id = ?)");
                    params_vec.push(Box::new(user_id.clone()));
                    params_vec.push(Box::new(client_id.clone()));
                }
                (Some(user_id), None) => {
                    conditions.push("user_id = ?");
                    params_vec.push(Box::new(user_id.clone()));
                }
                (None, Some(client_id)) => {
                    conditions.push("client_id = ?");
                    params_vec.push(Box::new(client_id.clone()));
                }
                (None, None) => {}
            }

            if let Some(ref name) = f.name_contains {
                conditions.push("name LIKE ?");
                params_vec.push(Box::new(format!("%{name}%")));
            }

            if !f.include_inactive {
                conditions.push("is_active = 1");
            }
        } else {
            conditions.push("is_active = 1");
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY start_date DESC, id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let summaries = stmt
            .query_map(&params_refs[..], |row| {
                Ok(PlanSummary {
                    id: id_column(row, 0)?,
                    name: row.get(1)?,
                    user_id: row.get(2)?,
                    client_id: row.get(3)?,
                    strategy: parse_text(row, 4)?,
                    start_date: parse_text(row, 5)?,
                    end_date: parse_text(row, 6)?,
                    is_active: row.get(7)?,
                    created_at: parse_text(row, 8)?,
                    phase_count: row.get(9)?,
                    week_count: row.get(10)?,
                    training_day_count: row.get(11)?,
                    completed_day_count: row.get(12)?,
                })
            })
            .db_context("Failed to query plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect plans")?;

        Ok(summaries)
    }

    /// Active plans containing `date`, with structure, newest start first.
    pub fn active_plans_on(&self, date: Date) -> Result<Vec<Plan>> {
        let query = format!(
            "SELECT {PLAN_COLUMNS} FROM plans WHERE is_active = 1 AND start_date <= ?1 AND end_date >= ?1 ORDER BY start_date DESC, id DESC"
        );
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let mut plans = stmt
            .query_map(params![date.to_string()], Self::build_plan_from_row)
            .db_context("Failed to query active plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect active plans")?;

        for plan in &mut plans {
            plan.phases = self.load_structure(plan.id)?;
        }

        Ok(plans)
    }

    /// Activates or deactivates a plan for context resolution.
    pub fn set_plan_active(&mut self, id: u64, active: bool) -> Result<()> {
        let now = Timestamp::now().to_string();
        let updated = self
            .connection
            .execute(UPDATE_PLAN_ACTIVE_SQL, params![active, now, id as i64])
            .db_context("Failed to update plan")?;

        if updated == 0 {
            return Err(EngineError::PlanNotFound { id });
        }
        Ok(())
    }

    /// Permanently deletes a plan; its structure goes with it.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_PLAN_SQL, params![id as i64])
            .db_context("Failed to delete plan")?;

        if deleted == 0 {
            return Err(EngineError::PlanNotFound { id });
        }
        Ok(())
    }

    /// Whether a plan with `id` exists.
    pub(crate) fn plan_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_PLAN_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check plan existence")
    }
}

impl PlanRepository for super::Database {
    fn active_plans_on(&self, date: Date) -> Result<Vec<Plan>> {
        super::Database::active_plans_on(self, date)
    }
}
