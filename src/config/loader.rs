//! Configuration loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading an accrual
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::AccrualPolicy;

/// Loads and provides access to the accrual policy.
///
/// The `PolicyLoader` reads a `policy.yaml` file from a configuration
/// directory. Fields omitted from the file fall back to the statutory
/// defaults of [`AccrualPolicy::default`].
///
/// # Directory Structure
///
/// ```text
/// config/leave/
/// └── policy.yaml   # Accrual schedule and expiration windows
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/leave").unwrap();
/// println!("First grant after {} months", loader.policy().initial_service_months);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: AccrualPolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/leave")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if:
    /// - The `policy.yaml` file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let policy = Self::load_yaml::<AccrualPolicy>(&policy_path)?;

        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded accrual policy.
    pub fn policy(&self) -> &AccrualPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/leave"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = PolicyLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().initial_service_months, 6);
        assert_eq!(loader.policy().initial_days, 10);
        assert_eq!(loader.policy().expiry_months, 24);
        assert_eq!(loader.policy().expiring_soon_window_days, 30);
    }

    #[test]
    fn test_loaded_policy_matches_statutory_defaults() {
        let loader = PolicyLoader::load(config_path()).unwrap();
        assert_eq!(*loader.policy(), AccrualPolicy::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = PolicyLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_parse_error_reports_path() {
        use std::io::Write;

        let dir = std::env::temp_dir().join("leave_engine_bad_config");
        fs::create_dir_all(&dir).unwrap();
        let mut file = fs::File::create(dir.join("policy.yaml")).unwrap();
        writeln!(file, "initial_days: [not, a, number]").unwrap();

        let result = PolicyLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
