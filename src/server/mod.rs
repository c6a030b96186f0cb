//! Preview server with on-demand post generation
//!
//! Serves the generated site and, for post routes that have not been
//! rendered yet, fetches the document from the content API, writes the page
//! into the public directory and serves it in the same request.

use anyhow::Result;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    Router,
};
use percent_encoding::percent_decode_str;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::api::ApiClient;
use crate::content::Post;
use crate::error::ApiError;
use crate::generator::Generator;
use crate::Orbit;

/// Server state
struct ServerState {
    orbit: Orbit,
    public_dir: PathBuf,
    client: ApiClient,
    generator: Generator,
}

impl ServerState {
    /// Resolve a request path to the file the static site would serve
    fn resolve_file(&self, path: &str) -> PathBuf {
        if path == "/" {
            return self.public_dir.join("index.html");
        }

        let clean_path = path.trim_start_matches('/');
        let candidate = self.public_dir.join(clean_path);

        if candidate.is_dir() {
            candidate.join("index.html")
        } else {
            candidate
        }
    }

    /// Extract the post slug from a `/<post_dir>/<slug>/` route
    fn post_slug(&self, path: &str) -> Option<String> {
        let mut parts = path.trim_matches('/').split('/');
        let dir = parts.next()?;
        let slug = parts.next()?;
        if parts.next().is_some() || dir != self.orbit.config.post_dir || slug.is_empty() {
            return None;
        }
        Some(percent_decode_str(slug).decode_utf8_lossy().to_string())
    }
}

/// Start the preview server
pub async fn start(orbit: &Orbit, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState {
        orbit: orbit.clone(),
        public_dir: orbit.public_dir.clone(),
        client: orbit.client()?,
        generator: Generator::new(orbit)?,
    });

    let app = Router::new().fallback(fallback_handler).with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Fallback handler: serve generated files, generating post pages on demand
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let path = request.uri().path().to_string();

    if !state.resolve_file(&path).exists() {
        if let Some(slug) = state.post_slug(&path) {
            return generate_on_demand(&state, &slug).await;
        }
    }

    // Serve static files using tower-http
    let mut service = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);
    match service.try_call(request).await {
        Ok(response) => response.into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}

/// Fetch, render and persist a post page that has not been generated yet
async fn generate_on_demand(state: &ServerState, slug: &str) -> Response {
    tracing::info!("Generating on demand: {}", slug);

    let document_type = &state.orbit.config.api.document_type;
    match state.client.get_by_uid(document_type, slug).await {
        Ok(doc) => {
            let post = Post::from_document(&doc);
            match state.generator.write_post_page(&post) {
                Ok((_, html)) => Html(html).into_response(),
                Err(e) => {
                    tracing::error!("Failed to render {}: {}", slug, e);
                    (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
                }
            }
        }
        Err(ApiError::DocumentNotFound(_)) => match state.generator.render_not_found() {
            Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
            Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        },
        Err(e) => {
            tracing::error!("Content API error for {}: {}", slug, e);
            (StatusCode::BAD_GATEWAY, "Content API error").into_response()
        }
    }
}
