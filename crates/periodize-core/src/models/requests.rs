//! Request types for modifying tracked days.

/// Changes to apply to a training day. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDayRequest {
    /// Mark the day completed or not completed
    pub is_completed: Option<bool>,

    /// Replace the day's notes
    pub notes: Option<String>,

    /// Assign a workout definition
    pub workout_id: Option<u64>,
}

impl UpdateDayRequest {
    /// True when the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.is_completed.is_none() && self.notes.is_none() && self.workout_id.is_none()
    }
}
