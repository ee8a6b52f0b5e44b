//! Article data as served by the CMS

use serde::{Deserialize, Serialize};

/// One article. Read-only mirror of the CMS record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,

    pub title: String,

    /// Short summary shown on list cards
    #[serde(default)]
    pub description: String,

    /// Rich-text body as HTML. Trusted; rendered unescaped.
    #[serde(default)]
    pub body: String,

    /// ISO-8601 publication timestamp
    #[serde(default)]
    pub published_at: String,

    /// Cover image
    #[serde(default)]
    pub image: Option<Image>,
}

impl Article {
    /// URL of the cover image, if the article has one
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_ref()
            .map(|image| image.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

/// Image reference attached to an article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Response of the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCollection {
    pub contents: Vec<Article>,
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub limit: usize,
}

/// Window requested from the list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub offset: usize,
    pub limit: usize,
}
