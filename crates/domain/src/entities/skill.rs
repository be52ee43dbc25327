//! Skill entity - a qualification a spot can require

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{SkillId, TenantId};

/// A skill defined within a tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub tenant_id: TenantId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SkillId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    pub name: String,
    /// Attributes this client does not model, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Skill {
    pub fn new(tenant_id: TenantId, name: impl Into<String>) -> Self {
        Self {
            tenant_id,
            id: None,
            version: None,
            name: name.into(),
            extra: Map::new(),
        }
    }

    pub fn with_id(mut self, id: SkillId) -> Self {
        self.id = Some(id);
        self
    }
}
