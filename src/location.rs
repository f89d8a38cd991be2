use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod world;

pub use world::WorldData;

const FALLBACK_STYLE: &str = "cinematic";
const FALLBACK_LIGHTING: &str = "soft light";

/// Global settings shared by every location (`world.json`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub default_style: Option<String>,
    pub lighting: Option<String>,
}

/// Per-location settings (one environment JSON file each).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSettings {
    /// Lookup key override; the loader falls back to the file stem.
    pub name: Option<String>,
    pub description: Option<String>,
    pub style: Option<String>,
    pub lighting: Option<String>,
}

/// Formats the location clause of a panel prompt from world and environment data.
///
/// Both lookups are read-only after construction. Environment keys are compared lower-cased.
#[derive(Clone, Debug, Default)]
pub struct LocationPromptBuilder {
    world: WorldSettings,
    environments: BTreeMap<String, EnvironmentSettings>,
}

impl LocationPromptBuilder {
    pub fn new<I, K>(world: WorldSettings, environments: I) -> Self
    where
        I: IntoIterator<Item = (K, EnvironmentSettings)>,
        K: AsRef<str>,
    {
        let environments = environments
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v))
            .collect();
        Self {
            world,
            environments,
        }
    }

    pub fn from_world_data(data: WorldData) -> Self {
        Self::new(data.world, data.environments)
    }

    pub fn world(&self) -> &WorldSettings {
        &self.world
    }

    pub fn environment(&self, location_name: &str) -> Option<&EnvironmentSettings> {
        self.environments.get(&location_name.to_lowercase())
    }

    /// Build the location prompt, e.g. `"Old Temple, mossy ruins, style: cinematic, lighting:
    /// soft light, set during dusk"`.
    ///
    /// Unknown locations come back unchanged. Empty parts are dropped from the join.
    pub fn build(&self, location_name: &str, time_of_day: Option<&str>) -> String {
        let Some(env) = self.environment(location_name) else {
            return location_name.to_string();
        };

        let style = non_empty(&env.style)
            .or_else(|| non_empty(&self.world.default_style))
            .unwrap_or(FALLBACK_STYLE);
        let lighting = non_empty(&env.lighting)
            .or_else(|| non_empty(&self.world.lighting))
            .unwrap_or(FALLBACK_LIGHTING);

        let mut parts: Vec<String> = Vec::with_capacity(5);
        if !location_name.is_empty() {
            parts.push(location_name.to_string());
        }
        if let Some(desc) = non_empty(&env.description) {
            parts.push(desc.to_string());
        }
        parts.push(format!("style: {style}"));
        parts.push(format!("lighting: {lighting}"));
        if let Some(t) = time_of_day.filter(|t| !t.is_empty()) {
            parts.push(format!("set during {t}"));
        }

        parts.join(", ")
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}
