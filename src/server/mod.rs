//! Preview server for the rendered feed and post pages

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ViewConfig;
use crate::content::PostStore;
use crate::helpers::{html_escape, wrap_page};
use crate::render::{render_post_detail, render_post_list};
use crate::surface::MemorySurface;

/// Server state
struct ServerState {
    store: PostStore,
    config: ViewConfig,
    viewer: String,
}

/// Query parameters of the post pages
#[derive(Deserialize)]
struct PostQuery {
    id: Option<String>,
}

/// Start the preview server
pub async fn start(
    store: PostStore,
    config: ViewConfig,
    viewer: &str,
    ip: &str,
    port: u16,
) -> Result<()> {
    let state = Arc::new(ServerState {
        store,
        config,
        viewer: viewer.to_string(),
    });

    let app = Router::new()
        .route("/", get(feed_handler))
        .route("/post/", get(post_handler))
        .route("/post/edit/", get(edit_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Serve the feed page
async fn feed_handler(State(state): State<Arc<ServerState>>) -> Response {
    let mut surface = MemorySurface::new();
    let container = surface.add_container(&state.config.list_container);

    match render_post_list(&mut surface, state.store.posts(), &state.viewer, &state.config) {
        Ok(()) => Html(wrap_page(
            &state.config,
            &state.config.title,
            &surface.to_html(container),
        ))
        .into_response(),
        Err(e) => {
            tracing::error!("Feed render failed: {}", e);
            (StatusCode::UNPROCESSABLE_ENTITY, "Feed cannot be rendered").into_response()
        }
    }
}

/// Serve a single post page for `?id=`
async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<PostQuery>,
) -> Response {
    let Some(id) = query.id else {
        return (StatusCode::BAD_REQUEST, "Missing id parameter").into_response();
    };

    let Some(post) = state.store.find(&id) else {
        return (StatusCode::NOT_FOUND, "Post not found").into_response();
    };

    let mut surface = MemorySurface::new();
    let container = surface.add_container(&state.config.detail_container);

    match render_post_detail(&mut surface, post, &state.config) {
        Ok(()) => Html(wrap_page(
            &state.config,
            &post.title,
            &surface.to_html(container),
        ))
        .into_response(),
        Err(e) => {
            tracing::error!("Post render failed: {}", e);
            (StatusCode::UNPROCESSABLE_ENTITY, "Post cannot be rendered").into_response()
        }
    }
}

/// Placeholder for the edit page, which the full client owns
async fn edit_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<PostQuery>,
) -> Response {
    let Some(id) = query.id else {
        return (StatusCode::BAD_REQUEST, "Missing id parameter").into_response();
    };

    if state.store.find(&id).is_none() {
        return (StatusCode::NOT_FOUND, "Post not found").into_response();
    }

    let body = format!(
        "<p>Editing post {} is handled by the full client.</p>",
        html_escape(&id)
    );
    Html(wrap_page(&state.config, "Edit post", &body)).into_response()
}
