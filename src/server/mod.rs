//! HTTP server for the article list and detail pages

use anyhow::Result;
use axum::{
    body::Body,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{header, Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::cms::CmsClient;
use crate::config::SiteConfig;
use crate::templates::{TemplateRenderer, PLACEHOLDER_SVG};
use crate::views;
use crate::Site;

/// Server state shared by all requests
pub struct ServerState {
    config: SiteConfig,
    client: CmsClient,
    renderer: TemplateRenderer,
    public_dir: PathBuf,
}

impl ServerState {
    pub fn new(site: &Site) -> Result<Self> {
        Ok(Self {
            config: site.config.clone(),
            client: site.client()?,
            renderer: site.renderer()?,
            public_dir: site.public_dir.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ListParams {
    page: Option<String>,
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(list_handler))
        .route("/articles/:id", get(article_handler))
        .route("/placeholder.svg", get(placeholder_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16, open: bool) -> Result<()> {
    let state = Arc::new(ServerState::new(site)?);
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Article list. Each request runs its own fetch; dropping the request
/// (client gone) drops the in-flight CMS call with it.
async fn list_handler(
    State(state): State<Arc<ServerState>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Response {
    // A query string that does not deserialize falls back to page 1
    let page = match params {
        Ok(Query(params)) => views::parse_page(params.page.as_deref()),
        Err(e) => {
            tracing::debug!("Ignoring malformed list query: {}", e);
            1
        }
    };
    let list = views::load_list(&state.client, &state.config, page).await;
    tracing::debug!(
        "Rendering list page {} ({} articles)",
        page,
        list.cards.len()
    );

    match state.renderer.render_list(&list) {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_failure(&state, e),
    }
}

/// Article detail, or the "no article" page with 404
async fn article_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Response {
    match views::load_article(&state.client, &state.config, &id).await {
        Some(article) => match state.renderer.render_article(&article) {
            Ok(html) => Html(html).into_response(),
            Err(e) => render_failure(&state, e),
        },
        None => not_found(&state),
    }
}

async fn placeholder_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], PLACEHOLDER_SVG)
}

/// Serve static files from the public directory
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let mut service = ServeDir::new(&state.public_dir);
    match service.try_call(request).await {
        Ok(response) if response.status() != StatusCode::NOT_FOUND => response.into_response(),
        Ok(_) => not_found(&state),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}

fn not_found(state: &ServerState) -> Response {
    match state.renderer.render_not_found() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => render_failure(state, e),
    }
}

fn render_failure(state: &ServerState, error: anyhow::Error) -> Response {
    tracing::error!("Template rendering failed: {:#}", error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        state.renderer.label("error.render"),
    )
        .into_response()
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
