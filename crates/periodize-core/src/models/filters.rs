//! Filter types for querying plans.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Owner identity used to pick a plan during context resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct OwnerFilter {
    /// Match plans owned by this user
    pub user_id: Option<String>,

    /// Match plans managed for this client
    pub client_id: Option<String>,
}

impl OwnerFilter {
    /// Filter matching plans owned by a user.
    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            client_id: None,
        }
    }

    /// Filter matching plans managed for a client.
    pub fn client(client_id: impl Into<String>) -> Self {
        Self {
            user_id: None,
            client_id: Some(client_id.into()),
        }
    }

    /// True when no identity is set, i.e. every plan matches.
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.client_id.is_none()
    }
}

/// Filter options for listing plans.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Restrict to plans of this owner
    pub owner: OwnerFilter,

    /// Filter by plan name (case-insensitive partial match)
    pub name_contains: Option<String>,

    /// Include inactive plans
    pub include_inactive: bool,
}

impl From<&crate::params::ListPlans> for PlanFilter {
    /// Convert ListPlans parameters to a PlanFilter for plan queries.
    fn from(params: &crate::params::ListPlans) -> Self {
        Self {
            owner: OwnerFilter {
                user_id: params.user_id.clone(),
                client_id: params.client_id.clone(),
            },
            name_contains: None,
            include_inactive: params.include_inactive,
        }
    }
}
