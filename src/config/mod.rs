//! Service configuration.
//!
//! Loaded from an optional YAML file; every field has a default so an empty
//! or absent file yields a working config. CLI flags override file values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NodeGraphError, Result};

/// Root configuration for the NodeGraph service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            db_path: default_db_path(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_db_path() -> String {
    "nodegraph.db".to_string()
}

/// Load the config from `path`, or return defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig> {
    let Some(path) = path else {
        return Ok(ServiceConfig::default());
    };
    let raw = std::fs::read_to_string(path).map_err(|e| {
        NodeGraphError::Config(format!("cannot read {}: {e}", path.display()))
    })?;
    serde_yaml::from_str(&raw)
        .map_err(|e| NodeGraphError::Config(format!("cannot parse {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.db_path, "nodegraph.db");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "bind_addr: 0.0.0.0:9090\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9090");
        assert_eq!(config.db_path, "nodegraph.db");
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = load_config(Some(Path::new("/nonexistent/config.yaml"))).unwrap_err();
        assert!(matches!(err, NodeGraphError::Config(_)));
    }
}
