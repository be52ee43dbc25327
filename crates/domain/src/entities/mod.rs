//! Domain entities

mod skill;
mod spot;

pub use skill::Skill;
pub use spot::{Spot, MAX_SPOT_NAME_LEN};
