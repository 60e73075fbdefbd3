//! User settings for CheckMyGrade
//!
//! Manages the header-repair policy, audit logging and the password
//! obfuscation key.

use serde::{Deserialize, Serialize};

use super::paths::GradePaths;
use crate::crypto::cipher::DEFAULT_KEY;
use crate::error::GradeError;

/// What to do when a data file's header row lacks an expected column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchemaPolicy {
    /// Rewrite the file with only the expected header. Existing rows are lost.
    #[default]
    Repair,
    /// Refuse to touch the file and report a schema error
    Strict,
}

/// User settings for CheckMyGrade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Header mismatch handling
    #[serde(default)]
    pub schema_policy: SchemaPolicy,

    /// Whether mutations are recorded in audit.log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Key used to obfuscate stored passwords
    #[serde(default = "default_cipher_key")]
    pub cipher_key: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

fn default_cipher_key() -> String {
    DEFAULT_KEY.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            schema_policy: SchemaPolicy::default(),
            audit_enabled: default_audit_enabled(),
            cipher_key: default_cipher_key(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &GradePaths) -> Result<Self, GradeError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                GradeError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                GradeError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.cipher_key.is_empty() {
                return Err(GradeError::Config("cipher_key must not be empty".into()));
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GradePaths) -> Result<(), GradeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GradeError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| GradeError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
