//! cms-blog: an article site served from a headless CMS
//!
//! Articles are fetched from the CMS on every page view and rendered with
//! Tera templates embedded in the binary: a paginated list of summary
//! cards and a detail page per article.

pub mod cms;
pub mod commands;
pub mod config;
pub mod helpers;
pub mod i18n;
pub mod server;
pub mod templates;
pub mod views;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The site: configuration plus the directories it reads from
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Static files served alongside the pages
    pub public_dir: PathBuf,
    /// Label overrides (`<lang>.yml`)
    pub languages_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            config::SiteConfig::default()
        };

        Ok(Self::from_config(base_dir, config))
    }

    /// Create a site from an already loaded configuration
    pub fn from_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let public_dir = base_dir.join(&config.public_dir);
        let languages_dir = base_dir.join("languages");

        Self {
            config,
            base_dir,
            public_dir,
            languages_dir,
        }
    }

    /// CMS client for the configured endpoint
    pub fn client(&self) -> Result<cms::CmsClient> {
        Ok(cms::CmsClient::new(&self.config.cms)?)
    }

    /// UI labels for the configured language
    pub fn i18n(&self) -> Result<i18n::I18n> {
        let mut i18n = i18n::I18n::new(&self.config.language)?;
        i18n.load_languages(&self.languages_dir)?;
        Ok(i18n)
    }

    /// Template renderer with this site's labels
    pub fn renderer(&self) -> Result<templates::TemplateRenderer> {
        templates::TemplateRenderer::new(&self.config, &self.i18n()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_site_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.per_page, 9);
        assert_eq!(site.public_dir, dir.path().join("public"));
    }

    #[test]
    fn test_site_reads_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "title: Gift Tech\npublic_dir: static\nlanguage: en\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.title, "Gift Tech");
        assert_eq!(site.public_dir, dir.path().join("static"));
        assert_eq!(site.i18n().unwrap().get("article.back"), "Back to list");
    }

    #[test]
    fn test_site_language_overrides() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("languages")).unwrap();
        fs::write(
            dir.path().join("languages/ja.yml"),
            "article:\n  back: トップへ\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        let i18n = site.i18n().unwrap();
        assert_eq!(i18n.get("article.back"), "トップへ");
        assert_eq!(i18n.get("article.not_found"), "記事がありません。");
    }
}
