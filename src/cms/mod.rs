//! CMS module - read-only access to the hosted articles API

mod client;
mod error;
mod models;

pub use client::CmsClient;
pub use error::{CmsError, Result};
pub use models::{Article, ArticleCollection, Image, ListQuery};
