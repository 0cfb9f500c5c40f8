//! Status messages for operations that return no resource.

use std::fmt;

/// A one-line confirmation or failure message.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Confirmation for a plan being switched on or off.
    pub fn plan_activation(id: u64, active: bool) -> Self {
        let state = if active { "activated" } else { "deactivated" };
        Self::success(format!("Plan {id} {state}"))
    }

    /// Confirmation for a cleared plan structure.
    pub fn structure_cleared(id: u64, phases: usize) -> Self {
        Self::success(format!(
            "Removed {phases} phases from plan {id}; run 'plan generate {id}' to rebuild"
        ))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}
