//! Parameter structures for planner operations.
//!
//! These structures are shared by every interface (CLI, MCP) and carry only
//! serde derives plus an optional JSON schema derive behind the `schema`
//! feature. Interface layers wrap them with their own framework derives and
//! convert into them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Dates travel as ISO `YYYY-MM-DD` strings and are parsed here, so every
//! interface reports malformed input the same way.

use jiff::{civil::Date, Timestamp, Zoned};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    calendar,
    error::{EngineError, Result},
    models::{FocusProfile, OwnerFilter, PeriodizationStrategy, Plan, UpdateDayRequest},
};

/// Parse an ISO date supplied for `field`.
pub fn parse_date(field: &str, value: &str) -> Result<Date> {
    value.trim().parse::<Date>().map_err(|e| {
        EngineError::invalid_input(field)
            .with_reason(format!("'{value}' is not a YYYY-MM-DD date: {e}"))
    })
}

/// Parse an optional ISO date, falling back to today in the system time zone.
pub fn date_or_today(field: &str, value: Option<&str>) -> Result<Date> {
    match value {
        Some(value) => parse_date(field, value),
        None => Ok(Zoned::now().date()),
    }
}

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

fn default_days_per_week() -> u8 {
    3
}

/// Parameters for creating a plan and generating its structure.
///
/// The plan length is given either as an explicit `end_date` or as a number
/// of `weeks` from the start date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreatePlan {
    /// Name of the plan (required)
    pub name: String,
    /// Owning user
    #[serde(default)]
    pub user_id: Option<String>,
    /// Client the plan is managed for
    #[serde(default)]
    pub client_id: Option<String>,
    /// First day of the plan (YYYY-MM-DD)
    pub start_date: String,
    /// Last day of the plan (YYYY-MM-DD); exclusive with `weeks`
    #[serde(default)]
    pub end_date: Option<String>,
    /// Plan length in weeks; exclusive with `end_date`
    #[serde(default)]
    pub weeks: Option<u32>,
    /// Periodization strategy: linear, block or undulating
    #[serde(default)]
    pub strategy: PeriodizationStrategy,
    /// Primary training focus
    #[serde(default)]
    pub primary_focus: FocusProfile,
    /// Secondary focus, alternated with the primary one by block plans
    #[serde(default)]
    pub secondary_focus: Option<FocusProfile>,
    /// Training sessions per week (1-7)
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u8,
    /// Explicit training weekdays, Monday = 1 through Sunday = 7
    #[serde(default)]
    pub training_days: Vec<u8>,
    /// Override for the phase length in weeks
    #[serde(default)]
    pub phase_weeks: Option<u32>,
}

impl Default for CreatePlan {
    fn default() -> Self {
        Self {
            name: String::new(),
            user_id: None,
            client_id: None,
            start_date: String::new(),
            end_date: None,
            weeks: None,
            strategy: PeriodizationStrategy::default(),
            primary_focus: FocusProfile::default(),
            secondary_focus: None,
            days_per_week: default_days_per_week(),
            training_days: Vec::new(),
            phase_weeks: None,
        }
    }
}

impl CreatePlan {
    /// Validate the parameters and build an unstructured, unsaved plan.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an empty name, malformed or reversed dates, a
    /// missing or doubly specified length, or weekday values outside 1-7.
    pub fn to_plan(&self, now: Timestamp) -> Result<Plan> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EngineError::invalid_input("name").with_reason("must not be empty"));
        }

        let start_date = parse_date("start_date", &self.start_date)?;
        let end_date = match (&self.end_date, self.weeks) {
            (Some(_), Some(_)) => {
                return Err(EngineError::invalid_input("weeks")
                    .with_reason("give either end_date or weeks, not both"));
            }
            (None, None) => {
                return Err(EngineError::invalid_input("end_date")
                    .with_reason("either end_date or weeks is required"));
            }
            (Some(end), None) => parse_date("end_date", end)?,
            (None, Some(weeks)) => {
                if weeks == 0 {
                    return Err(
                        EngineError::invalid_input("weeks").with_reason("must be at least 1")
                    );
                }
                calendar::last_day_of_weeks(start_date, i64::from(weeks)).ok_or_else(|| {
                    EngineError::invalid_input("weeks")
                        .with_reason("plan would end past the supported calendar range")
                })?
            }
        };

        if end_date < start_date {
            return Err(EngineError::invalid_input("end_date").with_reason(format!(
                "{end_date} is before the start date {start_date}"
            )));
        }

        if !(1..=7).contains(&self.days_per_week) {
            return Err(EngineError::invalid_input("days_per_week")
                .with_reason(format!("must be between 1 and 7, got {}", self.days_per_week)));
        }

        let mut training_days = self.training_days.clone();
        if let Some(bad) = training_days
            .iter()
            .find(|d| !(calendar::MONDAY..=calendar::SUNDAY).contains(*d))
        {
            return Err(EngineError::invalid_input("training_days")
                .with_reason(format!("weekday {bad} is outside 1-7")));
        }
        training_days.sort_unstable();
        training_days.dedup();

        let days_per_week = if training_days.is_empty() {
            self.days_per_week
        } else {
            training_days.len() as u8
        };

        Ok(Plan {
            id: 0,
            name: name.to_string(),
            user_id: self.user_id.clone(),
            client_id: self.client_id.clone(),
            start_date,
            end_date,
            strategy: self.strategy,
            primary_focus: self.primary_focus,
            secondary_focus: self.secondary_focus,
            days_per_week,
            training_days,
            is_active: true,
            created_at: now,
            updated_at: now,
            phases: Vec::new(),
        })
    }
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListPlans {
    /// Include deactivated plans
    #[serde(default)]
    pub include_inactive: bool,
    /// Only plans of this user
    #[serde(default)]
    pub user_id: Option<String>,
    /// Only plans of this client
    #[serde(default)]
    pub client_id: Option<String>,
}

/// Parameters for permanently deleting a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeletePlan {
    /// The ID of the plan to delete
    pub id: u64,
    /// Must be true; deletion removes the whole structure
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for activating or deactivating a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetPlanActive {
    pub id: u64,
    pub active: bool,
}

/// Parameters for generating structure for a plan whose structure was
/// cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RegeneratePlan {
    pub id: u64,
    /// Override for the phase length in weeks
    #[serde(default)]
    pub phase_weeks: Option<u32>,
}

/// Parameters for resolving the training context of a date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResolveContext {
    /// Date to resolve (YYYY-MM-DD), today when omitted
    #[serde(default)]
    pub date: Option<String>,
    /// Resolve among plans of this user
    #[serde(default)]
    pub user_id: Option<String>,
    /// Resolve among plans of this client
    #[serde(default)]
    pub client_id: Option<String>,
}

impl ResolveContext {
    /// The date to resolve.
    pub fn date(&self) -> Result<Date> {
        date_or_today("date", self.date.as_deref())
    }

    /// Owner restriction for plan selection.
    pub fn owner(&self) -> OwnerFilter {
        OwnerFilter {
            user_id: self.user_id.clone(),
            client_id: self.client_id.clone(),
        }
    }
}

/// Parameters for computing the load prescribed on a date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ModulatedLoad {
    /// Base prescription as a percentage of 1RM (0-100]
    pub base_percentage: f64,
    /// Trainee's 1RM in kg, to also get an absolute load
    #[serde(default)]
    pub one_rep_max: Option<f64>,
    /// Round the absolute load to this increment in kg (e.g. 2.5)
    #[serde(default)]
    pub round_to: Option<f64>,
    /// Base number of sets, scaled by the week's volume factor
    #[serde(default)]
    pub sets: Option<u32>,
    /// Base number of reps per set, scaled by the week's volume factor
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(flatten)]
    pub context: ResolveContext,
}

impl ModulatedLoad {
    /// Check the numeric inputs.
    pub fn validate(&self) -> Result<()> {
        let pct = self.base_percentage;
        if !pct.is_finite() || pct <= 0.0 || pct > 100.0 {
            return Err(EngineError::invalid_input("base_percentage")
                .with_reason(format!("must be within (0, 100], got {pct}")));
        }
        if let Some(max) = self.one_rep_max {
            if !max.is_finite() || max <= 0.0 {
                return Err(EngineError::invalid_input("one_rep_max")
                    .with_reason(format!("must be a positive number, got {max}")));
            }
        }
        if let Some(increment) = self.round_to {
            if !increment.is_finite() || increment <= 0.0 {
                return Err(EngineError::invalid_input("round_to")
                    .with_reason(format!("must be a positive number, got {increment}")));
            }
        }
        for (field, value) in [("sets", self.sets), ("reps", self.reps)] {
            if value == Some(0) {
                return Err(EngineError::invalid_input(field).with_reason("must be at least 1"));
            }
        }
        Ok(())
    }
}

/// Parameters for locating a date inside one specific plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanPosition {
    pub id: u64,
    /// Date to locate (YYYY-MM-DD), today when omitted
    #[serde(default)]
    pub date: Option<String>,
}

/// Parameters for tracking a training day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateDay {
    /// Day ID to update
    pub id: u64,
    /// Mark the day completed (true) or not completed (false)
    #[serde(default)]
    pub completed: Option<bool>,
    /// Replace the day's notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Assign a workout definition
    #[serde(default)]
    pub workout_id: Option<u64>,
}

impl UpdateDay {
    /// Convert into a store request, rejecting updates that change nothing.
    pub fn to_request(&self) -> Result<UpdateDayRequest> {
        let request = UpdateDayRequest {
            is_completed: self.completed,
            notes: self.notes.clone(),
            workout_id: self.workout_id,
        };
        if request.is_empty() {
            return Err(EngineError::invalid_input("update")
                .with_reason("nothing to change; set completed, notes or workout_id"));
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn base_params() -> CreatePlan {
        CreatePlan {
            name: "Spring block".to_string(),
            start_date: "2025-01-06".to_string(),
            weeks: Some(12),
            ..Default::default()
        }
    }

    fn invalid_field(err: EngineError) -> String {
        match err {
            EngineError::InvalidInput { field, .. } => field,
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_plan_from_weeks() {
        let plan = base_params().to_plan(Timestamp::UNIX_EPOCH).unwrap();
        assert_eq!(plan.start_date, date(2025, 1, 6));
        assert_eq!(plan.end_date, date(2025, 3, 30));
        assert_eq!(plan.duration_weeks(), 12);
        assert_eq!(plan.days_per_week, 3);
        assert!(plan.is_active);
        assert!(plan.phases.is_empty());
    }

    #[test]
    fn test_create_plan_from_end_date() {
        let params = CreatePlan {
            weeks: None,
            end_date: Some("2025-02-02".to_string()),
            ..base_params()
        };
        let plan = params.to_plan(Timestamp::UNIX_EPOCH).unwrap();
        assert_eq!(plan.duration_weeks(), 4);
    }

    #[test]
    fn test_create_one_day_plan() {
        let params = CreatePlan {
            weeks: None,
            end_date: Some("2025-01-06".to_string()),
            ..base_params()
        };
        let plan = params.to_plan(Timestamp::UNIX_EPOCH).unwrap();
        assert_eq!(plan.end_date, plan.start_date);
        assert_eq!(plan.duration_weeks(), 1);
    }

    #[test]
    fn test_create_plan_rejects_reversed_dates() {
        let params = CreatePlan {
            weeks: None,
            end_date: Some("2025-01-01".to_string()),
            ..base_params()
        };
        let err = params.to_plan(Timestamp::UNIX_EPOCH).unwrap_err();
        assert_eq!(invalid_field(err), "end_date");
    }

    #[test]
    fn test_create_plan_requires_exactly_one_length() {
        let neither = CreatePlan {
            weeks: None,
            ..base_params()
        };
        assert_eq!(
            invalid_field(neither.to_plan(Timestamp::UNIX_EPOCH).unwrap_err()),
            "end_date"
        );

        let both = CreatePlan {
            end_date: Some("2025-03-31".to_string()),
            ..base_params()
        };
        assert_eq!(
            invalid_field(both.to_plan(Timestamp::UNIX_EPOCH).unwrap_err()),
            "weeks"
        );
    }

    #[test]
    fn test_create_plan_validates_fields() {
        let cases = [
            (
                CreatePlan {
                    name: "  ".to_string(),
                    ..base_params()
                },
                "name",
            ),
            (
                CreatePlan {
                    start_date: "06/01/2025".to_string(),
                    ..base_params()
                },
                "start_date",
            ),
            (
                CreatePlan {
                    days_per_week: 0,
                    ..base_params()
                },
                "days_per_week",
            ),
            (
                CreatePlan {
                    training_days: vec![1, 8],
                    ..base_params()
                },
                "training_days",
            ),
        ];
        for (params, field) in cases {
            let err = params.to_plan(Timestamp::UNIX_EPOCH).unwrap_err();
            assert_eq!(invalid_field(err), field);
        }
    }

    #[test]
    fn test_training_days_are_normalized() {
        let params = CreatePlan {
            training_days: vec![5, 1, 3, 1],
            days_per_week: 6,
            ..base_params()
        };
        let plan = params.to_plan(Timestamp::UNIX_EPOCH).unwrap();
        assert_eq!(plan.training_days, vec![1, 3, 5]);
        assert_eq!(plan.days_per_week, 3);
    }

    #[test]
    fn test_create_plan_deserializes_with_defaults() {
        let params: CreatePlan = serde_json::from_str(
            r#"{"name": "Base", "start_date": "2025-01-06", "weeks": 8, "strategy": "block"}"#,
        )
        .unwrap();
        assert_eq!(params.strategy, PeriodizationStrategy::Block);
        assert_eq!(params.primary_focus, FocusProfile::Strength);
        assert_eq!(params.days_per_week, 3);
        assert!(params.training_days.is_empty());
    }

    #[test]
    fn test_resolve_context_date_and_owner() {
        let params = ResolveContext {
            date: Some("2025-02-05".to_string()),
            user_id: Some("ana".to_string()),
            client_id: None,
        };
        assert_eq!(params.date().unwrap(), date(2025, 2, 5));
        assert_eq!(params.owner(), OwnerFilter::user("ana"));

        let bad = ResolveContext {
            date: Some("tomorrow".to_string()),
            ..Default::default()
        };
        assert_eq!(invalid_field(bad.date().unwrap_err()), "date");
    }

    #[test]
    fn test_modulated_load_validation() {
        let ok = ModulatedLoad {
            base_percentage: 80.0,
            one_rep_max: Some(150.0),
            round_to: Some(2.5),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        for pct in [0.0, -10.0, 120.0, f64::NAN] {
            let params = ModulatedLoad {
                base_percentage: pct,
                ..Default::default()
            };
            assert_eq!(invalid_field(params.validate().unwrap_err()), "base_percentage");
        }

        let bad_max = ModulatedLoad {
            base_percentage: 80.0,
            one_rep_max: Some(0.0),
            ..Default::default()
        };
        assert_eq!(invalid_field(bad_max.validate().unwrap_err()), "one_rep_max");

        let no_sets = ModulatedLoad {
            base_percentage: 80.0,
            sets: Some(0),
            reps: Some(5),
            ..Default::default()
        };
        assert_eq!(invalid_field(no_sets.validate().unwrap_err()), "sets");
    }

    #[test]
    fn test_update_day_requires_a_change() {
        let empty = UpdateDay {
            id: 3,
            ..Default::default()
        };
        assert_eq!(invalid_field(empty.to_request().unwrap_err()), "update");

        let done = UpdateDay {
            id: 3,
            completed: Some(true),
            ..Default::default()
        };
        let request = done.to_request().unwrap();
        assert_eq!(request.is_completed, Some(true));
        assert_eq!(request.notes, None);
    }
}
