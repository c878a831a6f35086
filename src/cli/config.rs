// FILE: src/cli/config.rs

use crate::error::{CssfError, Result};
use crate::lexicon::LexiconOverrides;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub inputs: Option<Vec<String>>,
    pub output: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub recursive: Option<bool>,
    pub canonical_order: Option<bool>,
    pub max_recursion_depth: Option<usize>,
    pub viewport_width: Option<u32>,
    pub viewport_height: Option<u32>,
    #[serde(default)]
    pub lexicon: LexiconOverrides,
}

impl ConfigFile {
    pub fn viewport(&self) -> Option<(u32, u32)> {
        Some((self.viewport_width?, self.viewport_height?))
    }
}

pub fn load(config_path: &str) -> Result<ConfigFile> {
    let config_content = fs::read_to_string(config_path).map_err(|e| CssfError::FileNotFound {
        path: format!("Config file {}: {}", config_path, e),
    })?;

    let config: ConfigFile = if config_path.ends_with(".json") {
        serde_json::from_str(&config_content).map_err(|e| CssfError::InvalidFormat {
            message: format!("Invalid JSON config: {}", e),
        })?
    } else if config_path.ends_with(".toml") {
        toml::from_str(&config_content).map_err(|e| CssfError::InvalidFormat {
            message: format!("Invalid TOML config: {}", e),
        })?
    } else {
        return Err(CssfError::InvalidFormat {
            message: "Config file must be .json or .toml format".to_string(),
        });
    };

    if config.max_recursion_depth == Some(0) {
        return Err(CssfError::config("max_recursion_depth must be at least 1"));
    }

    log::info!("Loaded configuration from {}", config_path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::AliasTarget;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_load_toml_with_lexicon() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "cssf.toml",
            r#"
inputs = ["site"]
output = "public/cssf.css"
recursive = true
viewport_width = 1440
viewport_height = 900

[lexicon.aliases]
sz = ["width", "height"]

[lexicon.templates]
card = "cssf--p16--brad_8px"
"#,
        );
        let config = load(&path).unwrap();
        assert_eq!(config.inputs, Some(vec!["site".to_string()]));
        assert_eq!(config.recursive, Some(true));
        assert_eq!(config.viewport(), Some((1440, 900)));
        assert_eq!(
            config.lexicon.aliases["sz"],
            AliasTarget::Many(vec!["width".to_string(), "height".to_string()])
        );
        assert!(config.lexicon.templates.contains_key("card"));
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "cssf.json",
            r#"{ "canonical_order": true, "extensions": ["html"], "viewport_width": 800 }"#,
        );
        let config = load(&path).unwrap();
        assert_eq!(config.canonical_order, Some(true));
        assert_eq!(config.viewport(), None);
        assert!(config.lexicon.is_empty());
    }

    #[test]
    fn test_rejects_unknown_extension_and_zero_depth() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "cssf.yaml", "inputs: []");
        assert!(matches!(load(&path), Err(CssfError::InvalidFormat { .. })));

        let path = write(&dir, "cssf.toml", "max_recursion_depth = 0");
        assert!(matches!(load(&path), Err(CssfError::Config { .. })));
    }

    #[test]
    fn test_missing_config() {
        assert!(matches!(
            load("/no/such/cssf.toml"),
            Err(CssfError::FileNotFound { .. })
        ));
    }
}
