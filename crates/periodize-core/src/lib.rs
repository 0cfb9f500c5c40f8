//! Core library of the Periodize training periodization engine.
//!
//! The crate turns a training plan definition (dates, strategy, focus,
//! weekly frequency) into a Phase → Week → Day structure, computes
//! load and volume progressions for any week, and resolves the training
//! context for a calendar date.
//!
//! - [`generator`]: the structure generator and its phase strategies
//! - [`progression`]: pure load, volume and 1RM calculations
//! - [`resolver`]: date → plan/phase/week/day resolution over a
//!   [`PlanRepository`]
//! - [`db`]: SQLite persistence, itself a [`PlanRepository`]
//! - [`planner`]: the async facade used by the CLI and MCP server
//! - [`display`]: markdown formatting of models and results
//!
//! # Quick Start
//!
//! ```rust
//! use periodize_core::{
//!     models::{FocusProfile, OwnerFilter, PeriodizationStrategy, Plan},
//!     ContextResolver, InMemoryPlans, StructureGenerator,
//! };
//! use jiff::{civil::date, Timestamp};
//!
//! let plan = Plan {
//!     id: 1,
//!     name: "Spring block".to_string(),
//!     user_id: None,
//!     client_id: None,
//!     start_date: date(2025, 1, 6),
//!     end_date: date(2025, 3, 30),
//!     strategy: PeriodizationStrategy::Linear,
//!     primary_focus: FocusProfile::Strength,
//!     secondary_focus: None,
//!     days_per_week: 3,
//!     training_days: vec![],
//!     is_active: true,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//!     phases: vec![],
//! };
//!
//! let generated = StructureGenerator::default().generate(plan)?;
//! assert_eq!(generated.plan.phases.len(), 3);
//!
//! let resolver = ContextResolver::new(InMemoryPlans::new(vec![generated.plan]));
//! let context = resolver
//!     .current_context(date(2025, 2, 5), &OwnerFilter::default())?
//!     .expect("date is inside the plan");
//! assert_eq!(context.week().week_number, 5);
//!
//! let load = resolver.modulated_load(80.0, &context, Some(150.0));
//! assert!(load.percentage <= 100.0);
//! # Ok::<(), periodize_core::EngineError>(())
//! ```

pub mod calendar;
pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod planner;
pub mod progression;
pub mod resolver;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, GenerateResult, LoadResult, OperationStatus, PlanSummaries,
    UpdateResult,
};
pub use error::{EngineError, Result};
pub use generator::{GeneratedPlan, SkippedUnit, StructureGenerator};
pub use models::{
    Day, FocusProfile, LoadLevel, OwnerFilter, PeriodizationStrategy, Phase, PhaseType, Plan,
    PlanFilter, PlanSummary, TrainingContext, UpdateDayRequest, Week,
};
pub use params::{
    CreatePlan, DeletePlan, Id, ListPlans, ModulatedLoad, PlanPosition, RegeneratePlan,
    ResolveContext, SetPlanActive, UpdateDay,
};
pub use planner::{Planner, PlannerBuilder};
pub use progression::LoadPrescription;
pub use resolver::{ContextResolver, InMemoryPlans, PlanRepository};
