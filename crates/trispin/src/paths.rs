use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories_next::ProjectDirs;

/// Overrides the configuration directory; also keeps the CLI tests hermetic.
pub const ENV_CONFIG_DIR: &str = "TRISPIN_CONFIG_DIR";

const QUALIFIER: &str = "dev";
const ORGANISATION: &str = "trispin";
const APPLICATION: &str = "trispin";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> Result<Self> {
        if let Some(dir) = env::var_os(ENV_CONFIG_DIR) {
            if dir.is_empty() {
                return Err(anyhow!("{ENV_CONFIG_DIR} must not be empty"));
            }
            return Ok(Self {
                config_dir: PathBuf::from(dir),
            });
        }

        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANISATION, APPLICATION)
            .ok_or_else(|| anyhow!("failed to determine user directories"))?;

        Ok(Self {
            config_dir: project_dirs.config_dir().to_path_buf(),
        })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_file_lives_in_the_config_dir() {
        let paths = AppPaths {
            config_dir: PathBuf::from("/tmp/trispin-test"),
        };
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/trispin-test/settings.toml")
        );
    }
}
