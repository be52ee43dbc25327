//! Command-line surface

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use rostering_domain::{Skill, Spot, SpotId, TenantId};

#[derive(Debug, Parser)]
#[command(name = "rostering-client", about = "Manage the Spots of a rostering tenant")]
pub struct Cli {
    /// REST root of the rostering server (overrides ROSTERING_API_URL)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Tenant to operate on (overrides ROSTERING_TENANT_ID)
    #[arg(long, value_name = "ID")]
    pub tenant: Option<TenantId>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch every Spot of the tenant
    List,
    /// Create a Spot
    Add {
        #[arg(long)]
        name: String,
        /// Name of a required skill; repeat for several
        #[arg(long = "skill", value_name = "NAME")]
        skills: Vec<String>,
    },
    /// Rename an existing Spot, keeping its skills and other attributes
    Update {
        #[arg(long)]
        id: SpotId,
        #[arg(long)]
        name: String,
        /// Version the edit is based on
        #[arg(long)]
        version: Option<i64>,
    },
    /// Delete a Spot
    Remove {
        #[arg(long)]
        id: SpotId,
        /// Display name used in messages
        #[arg(long, default_value = "")]
        name: String,
    },
}

pub fn new_spot(tenant_id: TenantId, name: String, skills: Vec<String>) -> Result<Spot> {
    let spot = skills
        .into_iter()
        .fold(Spot::new(tenant_id, name), |spot, skill| {
            spot.with_required_skill(Skill::new(tenant_id, skill))
        });
    spot.validate()?;
    Ok(spot)
}

/// Apply a rename to the server's copy of a spot.
pub fn renamed_spot(stored: &Spot, name: String, version: Option<i64>) -> Result<Spot> {
    let mut spot = stored.clone();
    spot.name = name;
    if version.is_some() {
        spot.version = version;
    }
    spot.validate()?;
    Ok(spot)
}

pub fn existing_spot(
    tenant_id: TenantId,
    id: SpotId,
    name: String,
    version: Option<i64>,
) -> Spot {
    let name = if name.is_empty() { id.to_string() } else { name };
    let mut spot = Spot::new(tenant_id, name).with_id(id);
    spot.version = version;
    spot
}

/// What a command prints on success
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Output {
    Spots(Vec<Spot>),
    Spot(Spot),
    Removed { id: SpotId, deleted: bool },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_repeated_skills() {
        let cli = Cli::try_parse_from([
            "rostering-client",
            "--tenant",
            "3",
            "add",
            "--name",
            "Front Desk",
            "--skill",
            "Reception",
            "--skill",
            "First Aid",
        ])
        .unwrap();

        assert_eq!(cli.tenant, Some(TenantId::new(3)));
        let Command::Add { name, skills } = cli.command else {
            panic!("expected add");
        };
        let spot = new_spot(TenantId::new(3), name, skills).unwrap();
        assert_eq!(spot.required_skill_set.len(), 2);
        assert!(!spot.is_persisted());
    }

    #[test]
    fn add_rejects_invalid_names() {
        assert!(new_spot(TenantId::new(1), " ".into(), Vec::new()).is_err());
    }

    #[test]
    fn remove_without_name_falls_back_to_the_id() {
        let spot = existing_spot(TenantId::new(1), SpotId::new(5), String::new(), None);
        assert_eq!(spot.name, "5");
        assert_eq!(spot.id, Some(SpotId::new(5)));
    }

    fn stored_front_desk() -> Spot {
        let mut spot = Spot::new(TenantId::new(1), "Front Desk")
            .with_id(SpotId::new(5))
            .with_version(3)
            .with_required_skill(Skill::new(TenantId::new(1), "Reception"));
        spot.extra.insert("color".into(), serde_json::json!("#00ff00"));
        spot
    }

    #[test]
    fn rename_keeps_skills_and_extra_attributes() {
        let stored = stored_front_desk();

        let spot = renamed_spot(&stored, "Reception Desk".into(), None).unwrap();

        assert_eq!(spot.name, "Reception Desk");
        assert_eq!(spot.id, stored.id);
        assert_eq!(spot.version, Some(3));
        assert_eq!(spot.required_skill_set, stored.required_skill_set);
        assert_eq!(spot.extra, stored.extra);
    }

    #[test]
    fn rename_can_pin_the_version() {
        let spot = renamed_spot(&stored_front_desk(), "Lobby".into(), Some(7)).unwrap();
        assert_eq!(spot.version, Some(7));
    }

    #[test]
    fn rename_rejects_invalid_names() {
        assert!(renamed_spot(&stored_front_desk(), " Lobby".into(), None).is_err());
        assert!(renamed_spot(&stored_front_desk(), String::new(), None).is_err());
    }

    #[test]
    fn removal_prints_the_outcome() {
        let output = Output::Removed {
            id: SpotId::new(5),
            deleted: false,
        };
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            serde_json::json!({ "id": 5, "deleted": false })
        );
    }
}
