//! URL helper functions

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/placeholder.svg") // -> "/blog/placeholder.svg"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Link to page `page` of the article list
pub fn page_url(config: &SiteConfig, page: usize) -> String {
    format!("{}?page={}", url_for(config, ""), page)
}

/// Link to an article's detail page
pub fn article_url(config: &SiteConfig, id: &str) -> String {
    url_for(config, &format!("articles/{}", encode_url(id)))
}

/// Image source: absolute URLs pass through, site paths get the root
pub fn asset_url(config: &SiteConfig, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        path.to_string()
    } else {
        url_for(config, path)
    }
}

/// Encode a URL path segment
pub fn encode_url(path: &str) -> String {
    utf8_percent_encode(path, NON_ALPHANUMERIC).to_string()
}
