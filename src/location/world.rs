use std::collections::BTreeMap;
use std::path::Path;

use crate::foundation::error::YumeResult;
use crate::io;
use crate::location::{EnvironmentSettings, WorldSettings};

/// World settings plus every environment file found next to them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldData {
    pub world: WorldSettings,
    /// Keyed by lower-cased location name.
    pub environments: BTreeMap<String, EnvironmentSettings>,
}

impl WorldData {
    /// Read `world_path` and each `*.json` directly under `environments_dir`.
    ///
    /// An environment is keyed by its `name` field, or by the file stem when the field is
    /// absent. Files are read in path order; when two resolve to the same key the later one
    /// replaces the earlier. A missing environments directory is treated as empty.
    pub fn load(
        world_path: impl AsRef<Path>,
        environments_dir: impl AsRef<Path>,
    ) -> YumeResult<Self> {
        let world: WorldSettings = io::read_json(world_path)?;

        let mut environments = BTreeMap::new();
        for path in io::list_files(environments_dir, Some(&[".json"][..]), false)? {
            let env: EnvironmentSettings = io::read_json(&path)?;
            let key = env
                .name
                .clone()
                .unwrap_or_else(|| io::file_stem(&path))
                .to_lowercase();
            tracing::debug!(location = %key, path = %path.display(), "environment loaded");
            if environments.insert(key.clone(), env).is_some() {
                tracing::warn!(
                    location = %key,
                    path = %path.display(),
                    "environment key defined twice, later file wins"
                );
            }
        }

        Ok(Self {
            world,
            environments,
        })
    }
}
