//! Article detail view

use serde::Serialize;

use crate::cms::{Article, CmsClient};
use crate::config::SiteConfig;
use crate::helpers::{asset_url, format_published};

/// A single article shaped for the detail template
#[derive(Debug, Clone, Serialize)]
pub struct ArticleView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    /// Cover image; unlike list cards there is no placeholder
    pub image: Option<String>,
    /// Raw HTML from the CMS, emitted unescaped
    pub body: String,
}

impl ArticleView {
    pub fn new(config: &SiteConfig, article: Article) -> Self {
        let image = article.image_url().map(|url| asset_url(config, url));
        let date = format_published(&article.published_at, &config.date_format);

        Self {
            id: article.id,
            title: article.title,
            description: article.description,
            date,
            image,
            body: article.body,
        }
    }
}

/// Fetch one article; `None` when the id does not resolve
pub async fn load_article(client: &CmsClient, config: &SiteConfig, id: &str) -> Option<ArticleView> {
    let article = client.fetch_article_by_id(id).await?;
    Some(ArticleView::new(config, article))
}
