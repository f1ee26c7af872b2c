//! HTML page handlers: post list, post detail, about, create.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::info;

use newsdesk_store::PostRepo;

use crate::errors::AppError;
use crate::server::AppState;
use crate::views;

/// GET / — all posts in insertion order.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let conn = state.store.conn()?;
    let posts = PostRepo::list(&conn)?;
    Ok(views::index_page(&views::IndexPage { posts: &posts }))
}

/// GET /{id} — one post, or the not-found page.
///
/// The path segment is parsed here rather than typed in the route so a
/// non-numeric or negative segment resolves to the same 404 page a
/// missing row does.
pub async fn post_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let Some(id) = raw_id.parse::<i64>().ok().filter(|id| *id >= 0) else {
        info!(path = %raw_id, "path is not a post id, rendering 404");
        return Ok(not_found());
    };

    let conn = state.store.conn()?;
    match PostRepo::get(&conn, id)? {
        Some(post) => {
            info!(title = %post.title, "accessed existing post");
            Ok(views::post_page(&views::PostPage { post: &post }).into_response())
        }
        None => {
            info!(id, "post not found, rendering 404");
            Ok(not_found())
        }
    }
}

/// GET /about.
pub async fn about() -> Html<String> {
    info!("about page viewed");
    views::about_page()
}

/// GET /create — the empty creation form.
pub async fn create_form() -> Html<String> {
    views::create_page(&views::CreatePage { notice: None })
}

/// Form fields for POST /create. Missing fields deserialize to empty
/// strings so an absent title takes the validation branch.
#[derive(Debug, Deserialize)]
pub struct CreateForm {
    /// Post title. Required; empty re-renders the form with a notice.
    #[serde(default)]
    pub title: String,
    /// Optional body.
    #[serde(default)]
    pub content: String,
}

/// POST /create — insert a post and redirect home.
///
/// An empty title re-renders the form with a notice (200) and inserts
/// nothing. Success answers a literal 302 back to the front page.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateForm>,
) -> Result<Response, AppError> {
    if form.title.is_empty() {
        return Ok(views::create_page(&views::CreatePage {
            notice: Some("Title is required!"),
        })
        .into_response());
    }

    let conn = state.store.conn()?;
    let content = (!form.content.is_empty()).then_some(form.content.as_str());
    let post = PostRepo::create(&conn, &form.title, content)?;
    info!(title = %post.title, "new post created");

    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response())
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, views::not_found_page()).into_response()
}
