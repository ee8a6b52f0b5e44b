//! Read-only HTTP client for the articles API

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};
use std::fmt;

use super::error::{CmsError, Result};
use super::models::{Article, ArticleCollection, ListQuery};
use crate::config::CmsConfig;

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Client for the CMS articles endpoint
#[derive(Clone)]
pub struct CmsClient {
    client: Client,
    endpoint: String,
    api_key_header: HeaderName,
    config: CmsConfig,
}

impl fmt::Debug for CmsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CmsClient")
            .field("client", &"<reqwest::Client>")
            .field("endpoint", &self.endpoint)
            .field("api_key_header", &self.api_key_header)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl CmsClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &CmsConfig) -> Result<Self> {
        let api_key_header = HeaderName::from_bytes(config.api_key_header.as_bytes())
            .map_err(|e| CmsError::InvalidHeader(format!("{}: {}", config.api_key_header, e)))?;
        let client = Client::builder()
            .user_agent(concat!("cms-blog/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key_header,
            config: config.clone(),
        })
    }

    /// Fetch the article collection in the CMS's default window.
    ///
    /// Any non-success status fails with "Failed to fetch articles".
    pub async fn fetch_articles(&self) -> Result<ArticleCollection> {
        let request = self.get(&self.endpoint)?;
        self.send_list(request).await
    }

    /// Fetch one window of the collection with `offset`/`limit`
    pub async fn fetch_articles_page(&self, query: ListQuery) -> Result<ArticleCollection> {
        let request = self
            .get(&self.endpoint)?
            .query(&[("offset", query.offset), ("limit", query.limit)]);
        self.send_list(request).await
    }

    /// Fetch a single article.
    ///
    /// Never fails: a non-success status, a transport error or an
    /// undecodable body all yield `None`.
    pub async fn fetch_article_by_id(&self, id: &str) -> Option<Article> {
        match self.try_fetch_article(id).await {
            Ok(article) => article,
            Err(e) => {
                tracing::warn!("Failed to fetch article {}: {}", id, e);
                None
            }
        }
    }

    async fn try_fetch_article(&self, id: &str) -> Result<Option<Article>> {
        let url = self.article_url(id);
        let response = self.get(&url)?.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Article {} not available (status {})", id, status);
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn send_list(&self, request: RequestBuilder) -> Result<ArticleCollection> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Article list request returned status {}", status);
            return Err(CmsError::Status(status));
        }

        let bytes = response.bytes().await?;
        let collection: ArticleCollection = serde_json::from_slice(&bytes)?;
        tracing::debug!("Fetched articles: {}", String::from_utf8_lossy(&bytes));
        Ok(collection)
    }

    fn get(&self, url: &str) -> Result<RequestBuilder> {
        let api_key = HeaderValue::from_str(&self.config.api_key())
            .map_err(|e| CmsError::InvalidHeader(format!("{}: {}", self.api_key_header, e)))?;
        Ok(self
            .client
            .get(url)
            .header(self.api_key_header.clone(), api_key))
    }

    fn article_url(&self, id: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint,
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use crate::cms::testing::{fake_article, spawn_cms, test_config};

    #[tokio::test]
    async fn test_fetch_articles() {
        let articles: Vec<_> = (1..=3).map(fake_article).collect();
        let endpoint = spawn_cms(articles).await;
        let client = CmsClient::new(&test_config(&endpoint)).unwrap();

        let collection = client.fetch_articles().await.unwrap();
        assert_eq!(collection.contents.len(), 3);
        assert_eq!(collection.total_count, 3);
        assert_eq!(collection.contents[0].id, "article-1");
    }

    #[tokio::test]
    async fn test_fetch_articles_page() {
        let articles: Vec<_> = (1..=20).map(fake_article).collect();
        let endpoint = spawn_cms(articles).await;
        let client = CmsClient::new(&test_config(&endpoint)).unwrap();

        let collection = client
            .fetch_articles_page(ListQuery {
                offset: 18,
                limit: 9,
            })
            .await
            .unwrap();
        assert_eq!(collection.total_count, 20);
        assert_eq!(collection.offset, 18);
        let ids: Vec<_> = collection.contents.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["article-19", "article-20"]);
    }

    #[tokio::test]
    async fn test_fetch_articles_without_key_fails() {
        let endpoint = spawn_cms(vec![fake_article(1)]).await;
        let mut config = test_config(&endpoint);
        config.api_key_env = "CMS_BLOG_UNSET_KEY_FOR_TESTS".to_string();
        let client = CmsClient::new(&config).unwrap();

        let err = client.fetch_articles().await.unwrap_err();
        assert!(matches!(err, CmsError::Status(status) if status == StatusCode::UNAUTHORIZED));
        assert_eq!(err.to_string(), "Failed to fetch articles");
    }

    #[tokio::test]
    async fn test_fetch_article_by_id() {
        let endpoint = spawn_cms(vec![fake_article(1), fake_article(2)]).await;
        let client = CmsClient::new(&test_config(&endpoint)).unwrap();

        let article = client.fetch_article_by_id("article-2").await.unwrap();
        assert_eq!(article.title, "Article 2");
    }

    #[tokio::test]
    async fn test_fetch_missing_article_is_absent() {
        let endpoint = spawn_cms(vec![fake_article(1)]).await;
        let client = CmsClient::new(&test_config(&endpoint)).unwrap();

        assert!(client.fetch_article_by_id("nope").await.is_none());
        assert!(client.fetch_article_by_id("../../etc").await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_cms() {
        let client = CmsClient::new(&test_config("http://127.0.0.1:1/api/v1/articles")).unwrap();

        assert!(matches!(
            client.fetch_articles().await,
            Err(CmsError::Transport(_))
        ));
        assert!(client.fetch_article_by_id("article-1").await.is_none());
    }

    #[test]
    fn test_article_url_escapes_id() {
        let client = CmsClient::new(&test_config("http://cms.test/api/v1/articles/")).unwrap();
        assert_eq!(
            client.article_url("a b/c"),
            "http://cms.test/api/v1/articles/a%20b%2Fc"
        );
        assert_eq!(
            client.article_url("x-1_y.z"),
            "http://cms.test/api/v1/articles/x-1_y.z"
        );
    }

    #[test]
    fn test_invalid_header_name() {
        let mut config = test_config("http://cms.test/api/v1/articles");
        config.api_key_header = "bad header".to_string();
        assert!(matches!(
            CmsClient::new(&config),
            Err(CmsError::InvalidHeader(_))
        ));
    }
}
