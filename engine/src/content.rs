use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::creature::CreatureDraft;

/// Two rosters of creature attributes, as written in a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterFile {
    pub team_a: Vec<CreatureDraft>,
    pub team_b: Vec<CreatureDraft>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Yaml,
}

impl RosterFormat {
    /// `.yaml`/`.yml` files are YAML, anything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                RosterFormat::Yaml
            }
            _ => RosterFormat::Json,
        }
    }
}

impl RosterFile {
    pub fn parse(text: &str, format: RosterFormat) -> Result<Self> {
        match format {
            RosterFormat::Json => serde_json::from_str(text).context("failed to parse roster JSON"),
            RosterFormat::Yaml => serde_yaml::from_str(text).context("failed to parse roster YAML"),
        }
    }
}

pub fn builtin_rosters() -> HashMap<&'static str, (&'static str, RosterFormat)> {
    HashMap::from([
        (
            "starter",
            (
                include_str!("../content/rosters/starter.json"),
                RosterFormat::Json,
            ),
        ),
        (
            "glass_duel",
            (
                include_str!("../content/rosters/glass_duel.yaml"),
                RosterFormat::Yaml,
            ),
        ),
    ])
}

pub fn builtin_roster(name: &str) -> Result<RosterFile> {
    let rosters = builtin_rosters();
    let (text, format) = rosters
        .get(name)
        .ok_or_else(|| anyhow!("unknown built-in roster '{}'", name))?;
    RosterFile::parse(text, *format).with_context(|| format!("built-in roster '{}'", name))
}
