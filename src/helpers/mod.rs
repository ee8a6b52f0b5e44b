//! Helper functions shared by the views and templates
//!
//! Pagination windowing, date formatting, text truncation and link
//! building.

mod date;
mod pagination;
mod text;
mod url;

pub use date::*;
pub use pagination::*;
pub use text::*;
pub use url::*;
