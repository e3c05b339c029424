//! Directory listings.
//!
//! Used as the file service's fallback: a request that names a directory
//! under the root with no `index.html` gets an HTML index of its entries.
//! Anything else that reaches here is a plain `404`.
//!
//! The request path is resolved independently of the file service, since
//! the fallback also sees paths the file service rejected.

use std::convert::Infallible;
use std::future::Future;
use std::path::{Component, Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use askama::Template;
use axum::{
    http::{header, Request, StatusCode},
    response::{Html, IntoResponse, Response},
};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tower::Service;

/// Characters left unescaped in an entry's link.
const LINK_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Template)]
#[template(path = "listing.html")]
struct ListingPage<'a> {
    display_path: &'a str,
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    name: String,
    href: String,
}

/// Fallback service that lists directories under `root`.
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    root: Arc<PathBuf>,
}

impl DirectoryListing {
    pub fn new(root: &Path) -> Self {
        Self {
            root: Arc::new(root.to_path_buf()),
        }
    }
}

impl<B> Service<Request<B>> for DirectoryListing {
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let root = self.root.clone();
        let uri_path = request.uri().path().to_owned();
        Box::pin(async move { Ok(respond(&root, &uri_path).await) })
    }
}

async fn respond(root: &Path, uri_path: &str) -> Response {
    let Some((dir, display_path)) = resolve(root, uri_path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let is_dir = tokio::fs::metadata(&dir)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return StatusCode::NOT_FOUND.into_response();
    }

    let entries = match read_entries(&dir, uri_path).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(path = %dir.display(), error = %e, "Cannot list directory");
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    let page = ListingPage {
        display_path: &display_path,
        entries,
    };
    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render directory listing");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                "failed to render directory listing",
            )
                .into_response()
        }
    }
}

/// Map a request path onto the filesystem under `root`.
///
/// Returns `None` for anything that could step outside the root: `..`,
/// absolute components, or invalid UTF-8 after percent-decoding.
fn resolve(root: &Path, uri_path: &str) -> Option<(PathBuf, String)> {
    let decoded = percent_decode_str(uri_path).decode_utf8().ok()?;

    let mut path = root.to_path_buf();
    for component in Path::new(decoded.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some((path, decoded.into_owned()))
}

/// Entries sorted case-insensitively, directories marked with a trailing `/`.
async fn read_entries(dir: &Path, uri_path: &str) -> std::io::Result<Vec<Entry>> {
    let base = if uri_path.ends_with('/') {
        uri_path.to_owned()
    } else {
        format!("{uri_path}/")
    };

    let mut entries = Vec::new();
    let mut read_dir = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        let mut href = format!("{base}{}", utf8_percent_encode(&name, LINK_SAFE));
        if entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false) {
            name.push('/');
            href.push('/');
        }
        entries.push(Entry { name, href });
    }

    entries.sort_by_key(|entry| entry.name.to_lowercase());
    Ok(entries)
}
