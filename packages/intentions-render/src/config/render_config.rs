//! Render configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::shared::constants::defaults;

/// Settings for discovery, test detection and output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Function name prefix marking a test
    pub test_prefix: String,

    /// File name prefix of test modules
    pub file_prefix: String,

    /// Extension of test modules, without the dot
    pub file_extension: String,

    /// Directory names never entered during discovery
    pub exclude_dirs: Vec<String>,

    pub output_dir: PathBuf,
    pub output_file: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            test_prefix: defaults::TEST_PREFIX.to_string(),
            file_prefix: defaults::FILE_PREFIX.to_string(),
            file_extension: defaults::FILE_EXTENSION.to_string(),
            exclude_dirs: defaults::EXCLUDE_DIRS.iter().map(|d| d.to_string()).collect(),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            output_file: defaults::OUTPUT_FILE.to_string(),
        }
    }
}

impl RenderConfig {
    /// Where the report is written
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// Whether `file_name` names a test module
    pub fn is_test_file(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.file_prefix)
            && Path::new(file_name).extension().and_then(|e| e.to_str())
                == Some(self.file_extension.as_str())
    }

    pub fn is_excluded_dir(&self, dir_name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == dir_name)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("test_prefix", &self.test_prefix),
            ("file_prefix", &self.file_prefix),
            ("file_extension", &self.file_extension),
            ("output_file", &self.output_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(field, "must not be empty"));
            }
        }

        if self.file_extension.contains('.') {
            return Err(ConfigError::invalid(
                "file_extension",
                format!("'{}' must not contain '.'", self.file_extension),
            ));
        }
        if self.output_file.contains(['/', '\\']) {
            return Err(ConfigError::invalid(
                "output_file",
                format!(
                    "'{}' must be a file name; put directories in output_dir",
                    self.output_file
                ),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::invalid("output_dir", "must not be empty"));
        }

        Ok(())
    }
}
