use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::error::YumeResult;
use crate::io;
use crate::location::{LocationPromptBuilder, WorldData};

/// Environment variable holding the `tracing` filter directive for the binary.
pub const LOG_ENV: &str = "YUME_LOG";
pub const DEFAULT_LOG_FILTER: &str = "yume=info";

/// On-disk settings for the `yume` binary.
///
/// Read from YAML when the file ends in `.yaml`/`.yml`, JSON otherwise. Missing keys take their
/// defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YumeConfig {
    /// Global world settings (`world.json`).
    pub world: PathBuf,
    /// Directory of per-location environment JSON files.
    pub environments: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for YumeConfig {
    fn default() -> Self {
        Self {
            world: PathBuf::from("data/world.json"),
            environments: PathBuf::from("data/environments"),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl YumeConfig {
    pub fn from_path(path: impl AsRef<Path>) -> YumeResult<Self> {
        let path = path.as_ref();
        match io::file_extension(path).as_str() {
            ".yaml" | ".yml" => io::read_yaml(path),
            _ => io::read_json(path),
        }
    }

    /// Resolve relative paths against `base`, typically the config file's directory.
    pub fn rebase(mut self, base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        for p in [&mut self.world, &mut self.environments, &mut self.output_dir] {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
        self
    }

    pub fn load_world(&self) -> YumeResult<WorldData> {
        WorldData::load(&self.world, &self.environments)
    }

    pub fn location_builder(&self) -> YumeResult<LocationPromptBuilder> {
        Ok(LocationPromptBuilder::from_world_data(self.load_world()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let cfg: YumeConfig = serde_json::from_str(r#"{"output_dir": "boards"}"#).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("boards"));
        assert_eq!(cfg.world, PathBuf::from("data/world.json"));
    }

    #[test]
    fn rebase_only_touches_relative_paths() {
        let cfg = YumeConfig {
            world: PathBuf::from("/abs/world.json"),
            ..YumeConfig::default()
        }
        .rebase("project");
        assert_eq!(cfg.world, PathBuf::from("/abs/world.json"));
        assert_eq!(cfg.environments, Path::new("project").join("data/environments"));
    }
}
