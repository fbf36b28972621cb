//! Pager configuration
//!
//! Page size and traversal order shared by every table, loaded from a
//! YAML or JSON file.
//!
//! ```yaml
//! page_size: 25
//! order: descending
//! ```

use crate::error::{Error, Result};
use crate::pagination::PageSize;
use crate::types::TraversalOrder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Pager Config
// ============================================================================

/// Process-wide pagination settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PagerConfig {
    /// Items per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Traversal order of the underlying sequence
    #[serde(default)]
    pub order: TraversalOrder,
}

fn default_page_size() -> u32 {
    PageSize::DEFAULT.get()
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            order: TraversalOrder::default(),
        }
    }
}

impl PagerConfig {
    /// Override the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Validated page size
    pub fn page_size(&self) -> Result<PageSize> {
        PageSize::new(self.page_size)
    }

    /// Check the configuration for values the calculator cannot work with
    pub fn validate(&self) -> Result<()> {
        self.page_size()?;
        Ok(())
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a pager configuration from a file
///
/// Files ending in `.json` are parsed as JSON, anything else as YAML.
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config: PagerConfig = if is_json {
        serde_json::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config JSON '{}': {e}",
                path.display()
            ))
        })?
    } else {
        serde_yaml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config YAML '{}': {e}",
                path.display()
            ))
        })?
    };
    config.validate()?;

    tracing::debug!(
        "Loaded pager config from {}: page_size={}, order={}",
        path.display(),
        config.page_size,
        config.order
    );
    Ok(config)
}

/// Load a pager configuration from a YAML (or JSON) string
pub fn load_config_from_str(yaml: &str) -> Result<PagerConfig> {
    let config: PagerConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PagerConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.order, TraversalOrder::Descending);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r"
page_size: 25
order: descending
";
        let config = load_config_from_str(yaml).unwrap();
        assert_eq!(
            config,
            PagerConfig {
                page_size: 25,
                order: TraversalOrder::Descending,
            }
        );
    }

    #[test]
    fn test_parse_empty_mapping_uses_defaults() {
        let config = load_config_from_str("{}").unwrap();
        assert_eq!(config, PagerConfig::default());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = load_config_from_str("page_size: 0").unwrap_err();
        assert!(matches!(err, Error::InvalidPageSize { value: 0 }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = load_config_from_str("page_size: 10\nper_page: 5").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_unknown_order_rejected() {
        assert!(load_config_from_str("order: ascending").is_err());
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "page_size: 50").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.page_size().unwrap().get(), 50);
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"page_size": 20, "order": "descending"}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_malformed_json_file_is_config_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "page_size: 20").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { ref message } if message.contains("JSON")));
        assert!(!err.is_data_contract_violation());
    }

    #[test]
    fn test_malformed_yaml_file_is_config_error() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "page_size: [").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { ref message } if message.contains("YAML")));
        assert!(!err.is_data_contract_violation());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
