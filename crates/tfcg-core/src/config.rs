use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level project configuration loaded from `.tfcg.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TfcgConfig {
    pub input: String,
    pub output: String,
    pub generate: GenerateOptions,
}

impl Default for TfcgConfig {
    fn default() -> Self {
        Self {
            input: "provider_code_spec.json".to_string(),
            output: "internal/provider".to_string(),
            generate: GenerateOptions::default(),
        }
    }
}

/// What each generated resource file contains.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Go package clause of the generated files.
    pub package: String,
    /// Emit the `<Name>Model` struct.
    pub model: bool,
    /// Emit `To<Ext>`/`From<Ext>` functions for associated external types.
    pub to_from: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            package: "provider".to_string(),
            model: true,
            to_from: true,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".tfcg.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<TfcgConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: TfcgConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# tfcg configuration
input: provider_code_spec.json
output: internal/provider

generate:
  package: provider
  model: true          # <Name>Model struct
  to_from: true        # conversions for associated external types
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TfcgConfig::default();
        assert_eq!(config.input, "provider_code_spec.json");
        assert_eq!(config.output, "internal/provider");
        assert_eq!(config.generate.package, "provider");
        assert!(config.generate.model);
        assert!(config.generate.to_from);
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: spec.yaml
output: out
generate:
  package: example
  to_from: false
"#;
        let config: TfcgConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "spec.yaml");
        assert_eq!(config.output, "out");
        assert_eq!(config.generate.package, "example");
        assert!(!config.generate.to_from);
        // Defaults applied
        assert!(config.generate.model);
    }

    #[test]
    fn test_default_config_content_parses() {
        let config: TfcgConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.generate, GenerateOptions::default());
    }

    #[test]
    fn test_missing_config_file() {
        let loaded = load_config(Path::new("does-not-exist/.tfcg.yaml")).unwrap();
        assert!(loaded.is_none());
    }
}
