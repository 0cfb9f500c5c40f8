//! Display formatting for models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes get newtype or wrapper types so the
//! same data can be shown differently in lists, creation results and
//! confirmations. Every formatter produces markdown, rendered by the CLI's
//! terminal renderer or passed through verbatim to MCP clients.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │  (Plan, Week)   │───▶│ Result Types    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: [`PlanSummaries`]
//! - [`results`]: creation, generation, update, delete and load results
//! - [`status`]: [`OperationStatus`] confirmations
//! - [`datetime`]: timestamp and date formatting
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use periodize_core::display::OperationStatus;
//!
//! let status = OperationStatus::plan_activation(3, true);
//! assert_eq!(status.to_string(), "Success: Plan 3 activated\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::PlanSummaries;
pub use datetime::{DateSpan, DayLabel, LocalDateTime};
pub use results::{
    describe_day_changes, CreateResult, DeleteResult, GenerateResult, LoadResult, UpdateResult,
};
pub use status::OperationStatus;
