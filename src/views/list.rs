//! Article list view: fetch, paginate, shape cards and pager

use serde::Serialize;

use crate::cms::{Article, CmsClient, ListQuery};
use crate::config::SiteConfig;
use crate::helpers::{
    article_url, asset_url, format_published, page_slice, page_url, truncate, PageItem,
    PageWindow,
};

/// Summary card for one article
#[derive(Debug, Clone, Serialize)]
pub struct ArticleCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub image: String,
    pub url: String,
}

impl ArticleCard {
    pub fn new(config: &SiteConfig, article: &Article) -> Self {
        let image = article
            .image_url()
            .unwrap_or(config.placeholder_image.as_str());

        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            description: truncate(&article.description, config.description_length, None),
            date: format_published(&article.published_at, &config.date_format),
            image: asset_url(config, image),
            url: article_url(config, &article.id),
        }
    }
}

/// One pager entry; `number == None` marks a gap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerLink {
    pub number: Option<usize>,
    pub url: Option<String>,
    pub current: bool,
}

/// Pager controls under the card grid
#[derive(Debug, Clone, Serialize)]
pub struct Pager {
    pub current: usize,
    pub total_pages: usize,
    pub prev_url: String,
    pub next_url: String,
    pub has_prev: bool,
    pub has_next: bool,
    pub links: Vec<PagerLink>,
}

impl Pager {
    fn new(config: &SiteConfig, window: &PageWindow) -> Self {
        let links = window
            .items
            .iter()
            .map(|item| match *item {
                PageItem::Page(number) => PagerLink {
                    number: Some(number),
                    url: Some(page_url(config, number)),
                    current: number == window.current,
                },
                PageItem::Gap => PagerLink {
                    number: None,
                    url: None,
                    current: false,
                },
            })
            .collect();

        Self {
            current: window.current,
            total_pages: window.total_pages,
            prev_url: page_url(config, window.prev),
            next_url: page_url(config, window.next),
            has_prev: window.has_prev,
            has_next: window.has_next,
            links,
        }
    }
}

/// Everything the list template needs
#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    pub cards: Vec<ArticleCard>,
    pub pager: Pager,
    #[serde(skip)]
    pub window: PageWindow,
}

impl ListPage {
    /// Shape one page. `articles` are the articles shown on `page`;
    /// `total_items` is the size of the whole collection.
    pub fn build(config: &SiteConfig, page: usize, articles: &[Article], total_items: usize) -> Self {
        let window = PageWindow::new(page, total_items, config.per_page, config.pagination_radius);
        let cards = articles
            .iter()
            .map(|article| ArticleCard::new(config, article))
            .collect();

        Self {
            cards,
            pager: Pager::new(config, &window),
            window,
        }
    }
}

/// Read the `page` query parameter. Anything that is not an integer
/// of at least 1 means page 1.
pub fn parse_page(param: Option<&str>) -> usize {
    param
        .and_then(|p| p.trim().parse::<usize>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}

/// Fetch the articles and build `page` of the list.
///
/// A failed fetch is logged and rendered as an empty list.
pub async fn load_list(client: &CmsClient, config: &SiteConfig, page: usize) -> ListPage {
    let per_page = config.per_page;

    if config.cms.server_side_pagination {
        let query = ListQuery {
            offset: page.saturating_sub(1).saturating_mul(per_page),
            limit: per_page,
        };
        return match client.fetch_articles_page(query).await {
            Ok(collection) => {
                ListPage::build(config, page, &collection.contents, collection.total_count)
            }
            Err(e) => {
                tracing::warn!("Failed to load article page {}: {}", page, e);
                ListPage::build(config, page, &[], 0)
            }
        };
    }

    let articles = match client.fetch_articles().await {
        Ok(collection) => collection.contents,
        Err(e) => {
            tracing::warn!("Failed to load articles: {}", e);
            Vec::new()
        }
    };

    ListPage::build(
        config,
        page,
        page_slice(&articles, page, per_page),
        articles.len(),
    )
}
