//! Rostering domain types.
//!
//! Entities here mirror the server's wire shape; the client never invents
//! identifiers or versions.

pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{Skill, Spot, MAX_SPOT_NAME_LEN};
pub use error::DomainError;
pub use ids::{SkillId, SpotId, TenantId};
