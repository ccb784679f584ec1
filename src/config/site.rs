//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    /// Route of the table-of-contents page. The page at this route never
    /// displays hierarchical numbering.
    pub contents_path: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Quire".to_string(),
            description: String::new(),
            author: String::new(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),

            contents_path: "/contents".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Quire");
        assert_eq!(config.contents_path, "/contents");
        assert_eq!(config.source_dir, "source");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Handbook
author: Test User
url: https://docs.example.com
contents_path: /toc
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Handbook");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.contents_path, "/toc");
        // Unspecified fields keep their defaults
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let yaml = r#"
title: Site
analytics_id: UA-12345
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.extra.contains_key("analytics_id"));
    }
}
