//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,
    pub root: String,

    // Content source
    #[serde(default)]
    pub cms: CmsConfig,

    // Listing
    pub per_page: usize,
    pub pagination_radius: usize,
    pub description_length: usize,

    // Date format (Moment.js tokens)
    pub date_format: String,

    // Assets
    pub placeholder_image: String,
    pub public_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "記事一覧".to_string(),
            language: "ja".to_string(),
            root: "/".to_string(),

            cms: CmsConfig::default(),

            per_page: 9,
            pagination_radius: 2,
            description_length: 100,

            date_format: "YYYY-MM-DD".to_string(),

            placeholder_image: "/placeholder.svg".to_string(),
            public_dir: "public".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        if config.per_page == 0 {
            anyhow::bail!("per_page must be at least 1");
        }
        Ok(config)
    }
}

/// Headless CMS connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    /// Articles endpoint; single articles live at `{endpoint}/{id}`
    pub endpoint: String,
    pub api_key_header: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Ask the CMS for one page at a time instead of the whole collection
    pub server_side_pagination: bool,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://gift-tech.microcms.io/api/v1/articles".to_string(),
            api_key_header: "X-MICROCMS-API-KEY".to_string(),
            api_key_env: "NEXT_PUBLIC_MICROCMS_API_KEY".to_string(),
            server_side_pagination: false,
        }
    }
}

impl CmsConfig {
    /// Read the API key from the environment. An unset variable yields an
    /// empty key; the CMS then rejects the request upstream.
    pub fn api_key(&self) -> String {
        std::env::var(&self.api_key_env).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "記事一覧");
        assert_eq!(config.per_page, 9);
        assert_eq!(config.pagination_radius, 2);
        assert_eq!(config.cms.api_key_header, "X-MICROCMS-API-KEY");
        assert!(!config.cms.server_side_pagination);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Tech Notes
language: en
per_page: 12
cms:
  endpoint: http://localhost:9000/api/v1/articles
  server_side_pagination: true
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Tech Notes");
        assert_eq!(config.language, "en");
        assert_eq!(config.per_page, 12);
        assert_eq!(config.pagination_radius, 2);
        assert_eq!(config.cms.endpoint, "http://localhost:9000/api/v1/articles");
        assert_eq!(config.cms.api_key_env, "NEXT_PUBLIC_MICROCMS_API_KEY");
        assert!(config.cms.server_side_pagination);
    }

    #[test]
    fn test_load_rejects_zero_per_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "per_page: 0\n").unwrap();
        assert!(SiteConfig::load(&path).is_err());
    }

    #[test]
    fn test_missing_api_key_is_empty() {
        let cms = CmsConfig {
            api_key_env: "CMS_BLOG_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..CmsConfig::default()
        };
        assert_eq!(cms.api_key(), "");
    }
}
