//! HTML view rendering.
//!
//! One plain function per page, each invoked with a named-field payload
//! and returning rendered [`Html`]. All dynamic text passes through
//! [`escape`] before reaching the document. Handlers decide status codes;
//! views only produce markup.

use axum::response::Html;

use newsdesk_store::PostRow;

/// Payload for the post list page.
pub struct IndexPage<'a> {
    /// Posts in insertion order.
    pub posts: &'a [PostRow],
}

/// Payload for the single-post page.
pub struct PostPage<'a> {
    /// The post to display.
    pub post: &'a PostRow,
}

/// Payload for the creation form page.
pub struct CreatePage<'a> {
    /// Validation notice shown above the form, if any.
    pub notice: Option<&'a str>,
}

/// Render the post list page.
pub fn index_page(page: &IndexPage<'_>) -> Html<String> {
    let mut items = String::new();
    for post in page.posts {
        items.push_str(&format!(
            "    <li><a href=\"/{id}\">{title}</a> <small>{created}</small></li>\n",
            id = post.id,
            title = escape(&post.title),
            created = escape(&post.created_at),
        ));
    }
    let body = if page.posts.is_empty() {
        "  <h2>Latest Posts</h2>\n  <p>No posts yet.</p>\n".to_string()
    } else {
        format!("  <h2>Latest Posts</h2>\n  <ul>\n{items}  </ul>\n")
    };
    layout("Newsdesk", &body)
}

/// Render the single-post page.
pub fn post_page(page: &PostPage<'_>) -> Html<String> {
    let post = page.post;
    let body = format!(
        "  <article>\n    <h2>{title}</h2>\n    <small>{created}</small>\n    <p>{content}</p>\n  </article>\n",
        title = escape(&post.title),
        created = escape(&post.created_at),
        content = escape(post.content.as_deref().unwrap_or("")),
    );
    layout(&post.title, &body)
}

/// Render the static about page.
pub fn about_page() -> Html<String> {
    layout(
        "About Newsdesk",
        "  <h2>About Newsdesk</h2>\n  <p>Newsdesk is a small bulletin board for short articles.\n  Anyone can read the latest posts or submit a new one.</p>\n",
    )
}

/// Render the creation form, with an optional validation notice.
pub fn create_page(page: &CreatePage<'_>) -> Html<String> {
    let notice = match page.notice {
        Some(text) => format!("  <p class=\"notice\">{}</p>\n", escape(text)),
        None => String::new(),
    };
    let body = format!(
        "  <h2>New Post</h2>\n{notice}  <form method=\"post\" action=\"/create\">\n    <label for=\"title\">Title</label>\n    <input type=\"text\" name=\"title\" id=\"title\">\n    <label for=\"content\">Content</label>\n    <textarea name=\"content\" id=\"content\"></textarea>\n    <button type=\"submit\">Submit</button>\n  </form>\n"
    );
    layout("New Post", &body)
}

/// Render the not-found page.
pub fn not_found_page() -> Html<String> {
    layout(
        "Not Found",
        "  <h2>404 Not Found</h2>\n  <p>That post does not exist. <a href=\"/\">Back to the front page.</a></p>\n",
    )
}

/// Shared document shell around every page body.
fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>{title}</title>\n</head>\n<body>\n  <nav>\n    <a href=\"/\">Newsdesk</a>\n    <a href=\"/create\">New Post</a>\n    <a href=\"/about\">About</a>\n  </nav>\n{body}</body>\n</html>\n",
        title = escape(title),
    ))
}

/// Escape text for safe interpolation into HTML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
