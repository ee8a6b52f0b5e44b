//! Built-in site templates using the Tera template engine
//!
//! All templates are embedded directly in the binary.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::helpers::{html_escape, url_for};
use crate::i18n::I18n;
use crate::views::{ArticleView, ListPage};

/// Image shown on cards whose article has no cover
pub const PLACEHOLDER_SVG: &str = include_str!("site/placeholder.svg");

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
    site: SiteData,
    translations: HashMap<String, String>,
    labels: serde_json::Value,
}

/// Site-wide values available to every template as `site`
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub language: String,
    pub home_url: String,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new(config: &SiteConfig, i18n: &I18n) -> Result<Self> {
        let translations = i18n.get_all_translations();
        let mut tera = Tera::default();

        // URLs and paths are built by us and must not be escaped; CMS text
        // is escaped explicitly in the templates
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("list.html", include_str!("site/list.html")),
            ("article.html", include_str!("site/article.html")),
            ("not_found.html", include_str!("site/not_found.html")),
            // Partials
            (
                "partials/pager.html",
                include_str!("site/partials/pager.html"),
            ),
            ("partials/back.html", include_str!("site/partials/back.html")),
        ])?;

        tera.register_filter("escape_html", escape_html_filter);

        Ok(Self {
            tera,
            site: SiteData {
                title: config.title.clone(),
                language: i18n.language().to_string(),
                home_url: url_for(config, ""),
            },
            labels: nest_labels(&translations),
            translations,
        })
    }

    /// Render the article list
    pub fn render_list(&self, list: &ListPage) -> Result<String> {
        let mut context = self.base_context();
        context.insert("list", list);
        self.render("list.html", &context)
    }

    /// Render a single article
    pub fn render_article(&self, article: &ArticleView) -> Result<String> {
        let mut context = self.base_context();
        context.insert("article", article);
        self.render("article.html", &context)
    }

    /// Render the "no article" page
    pub fn render_not_found(&self) -> Result<String> {
        let mut context = self.base_context();
        context.insert("message", &self.label("article.not_found"));
        self.render("not_found.html", &context)
    }

    /// Look up a UI label
    pub fn label(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site);
        context.insert("t", &self.labels);
        context
    }
}

/// Turn dot-notation label keys back into nested objects so templates
/// can write `t.article.back`
fn nest_labels(flat: &HashMap<String, String>) -> serde_json::Value {
    let mut root = serde_json::Map::new();
    for (key, value) in flat {
        let path: Vec<&str> = key.split('.').collect();
        insert_label(&mut root, &path, value);
    }
    serde_json::Value::Object(root)
}

fn insert_label(node: &mut serde_json::Map<String, serde_json::Value>, path: &[&str], value: &str) {
    match path {
        [] => {}
        [leaf] => {
            node.insert(leaf.to_string(), serde_json::Value::String(value.to_string()));
        }
        [head, rest @ ..] => {
            let entry = node
                .entry(head.to_string())
                .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
            if !entry.is_object() {
                *entry = serde_json::Value::Object(serde_json::Map::new());
            }
            if let serde_json::Value::Object(child) = entry {
                insert_label(child, rest, value);
            }
        }
    }
}

/// Tera filter: escape text for HTML content and attributes
fn escape_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("escape_html", "value", String, value);
    Ok(tera::Value::String(html_escape(&s)))
}
