//! List articles from the CMS

use anyhow::Result;
use std::io::Write;

use crate::helpers::PageItem;
use crate::views;
use crate::Site;

/// Print one page of the article list
pub async fn run<W: Write>(site: &Site, page: usize, out: &mut W) -> Result<()> {
    let client = site.client()?;
    let list = views::load_list(&client, &site.config, page).await;

    writeln!(
        out,
        "Articles (page {} of {}):",
        list.window.current, list.window.total_pages
    )?;
    for card in &list.cards {
        writeln!(out, "  {} - {} [{}]", card.date, card.title, card.id)?;
    }

    let pages: Vec<String> = list
        .window
        .items
        .iter()
        .map(|item| match item {
            PageItem::Page(n) if *n == list.window.current => format!("[{}]", n),
            PageItem::Page(n) => n.to_string(),
            PageItem::Gap => "...".to_string(),
        })
        .collect();
    if !pages.is_empty() {
        writeln!(out, "Pages: {}", pages.join(" "))?;
    }

    Ok(())
}
