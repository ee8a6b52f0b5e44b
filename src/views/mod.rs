//! Views - turn CMS data into template-ready models
//!
//! Both views issue exactly one CMS request and degrade to an empty state
//! on failure: the list renders no cards, the detail view reports the
//! article as absent.

mod detail;
mod list;

pub use detail::{load_article, ArticleView};
pub use list::{load_list, parse_page, ArticleCard, ListPage, Pager, PagerLink};
