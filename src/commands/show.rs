//! Show a single article

use anyhow::Result;
use std::io::Write;

use crate::views;
use crate::Site;

/// Print an article's title, date and body, or the "no article" label
pub async fn run<W: Write>(site: &Site, id: &str, out: &mut W) -> Result<()> {
    let client = site.client()?;

    match views::load_article(&client, &site.config, id).await {
        Some(article) => {
            writeln!(out, "{}", article.title)?;
            writeln!(out, "{}", article.date)?;
            writeln!(out)?;
            writeln!(out, "{}", article.body)?;
        }
        None => {
            writeln!(out, "{}", site.i18n()?.get("article.not_found"))?;
        }
    }

    Ok(())
}
