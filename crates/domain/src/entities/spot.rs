//! Spot entity - a place or post that shifts are rostered against
//!
//! Spots are owned by a tenant. The server assigns `id` and `version`; a spot
//! built locally has neither until a create round trip returns the persisted
//! copy.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{DomainError, Skill, SpotId, TenantId};

/// Longest name the server accepts
pub const MAX_SPOT_NAME_LEN: usize = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    pub tenant_id: TenantId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SpotId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub required_skill_set: Vec<Skill>,
    /// Attributes this client does not model, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Spot {
    pub fn new(tenant_id: TenantId, name: impl Into<String>) -> Self {
        Self {
            tenant_id,
            id: None,
            version: None,
            name: name.into(),
            required_skill_set: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_id(mut self, id: SpotId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_required_skill(mut self, skill: Skill) -> Self {
        self.required_skill_set.push(skill);
        self
    }

    /// Whether the server has assigned this spot an identifier
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Check the name constraints the server enforces, so obviously bad input
    /// can be rejected before a round trip.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("Spot name cannot be empty"));
        }
        if self.name.chars().count() > MAX_SPOT_NAME_LEN {
            return Err(DomainError::validation(format!(
                "Spot name cannot exceed {MAX_SPOT_NAME_LEN} characters"
            )));
        }
        if self.name.trim() != self.name {
            return Err(DomainError::validation(
                "Spot name cannot start or end with whitespace",
            ));
        }
        Ok(())
    }
}
