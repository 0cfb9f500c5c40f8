//! High-level planner API over the plan store and the engine.
//!
//! The [`Planner`] is the entry point used by the CLI and the MCP server. It
//! validates parameters, runs the structure generator and the context
//! resolver, and persists through [`crate::db::Database`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Interfaces     │    │    Planner      │    │    Database     │
//! │  (CLI, MCP)     │───▶│ (plan_ops,      │───▶│   (via db/)     │
//! │                 │    │  context_ops)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every operation is async and runs its SQLite work on a blocking task with
//! a connection of its own, so the planner can be shared across tasks.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Planner`] instances with configuration
//! - [`plan_ops`]: Plan lifecycle: create, list, show, activate, clear,
//!   regenerate, delete
//! - [`context_ops`]: Context resolution, load prescriptions and day tracking
//!
//! # Usage
//!
//! ```rust,no_run
//! use periodize_core::{params::{CreatePlan, ResolveContext}, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/periodize.db"))
//!     .build()
//!     .await?;
//!
//! let created = planner
//!     .create_plan(&CreatePlan {
//!         name: "Spring block".to_string(),
//!         start_date: "2025-03-03".to_string(),
//!         weeks: Some(12),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{} phases", created.plan.phases.len());
//!
//! let context = planner
//!     .current_context(&ResolveContext {
//!         date: Some("2025-03-19".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{EngineError, Result},
    generator::StructureGenerator,
};

pub mod builder;
pub mod context_ops;
pub mod plan_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for managing plans and resolving contexts.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) generator: StructureGenerator,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf, generator: StructureGenerator) -> Self {
        Self { db_path, generator }
    }

    /// Path of the SQLite database backing this planner.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(EngineError::join)?
    }
}
