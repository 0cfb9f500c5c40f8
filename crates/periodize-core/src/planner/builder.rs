//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{EngineError, Result},
    generator::StructureGenerator,
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    phase_duration_weeks: Option<u32>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/periodize/periodize.db` or
    /// `~/.local/share/periodize/periodize.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the default phase length used when generating structure.
    /// Defaults to 4 weeks.
    pub fn with_phase_duration_weeks(mut self, weeks: u32) -> Self {
        self.phase_duration_weeks = Some(weeks);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` for a zero phase length,
    /// `EngineError::FileSystem` if the database directory cannot be created
    /// and `EngineError::Database` if database initialization fails
    pub async fn build(self) -> Result<Planner> {
        let generator = match self.phase_duration_weeks {
            Some(weeks) => StructureGenerator::new(weeks)?,
            None => StructureGenerator::default(),
        };

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| EngineError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), EngineError>(())
        })
        .await
        .map_err(EngineError::join)??;

        debug!("Using database at {}", db_path.display());
        Ok(Planner::new(db_path, generator))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("periodize")
            .place_data_file("periodize.db")
            .map_err(|e| EngineError::XdgDirectory(e.to_string()))
    }
}
