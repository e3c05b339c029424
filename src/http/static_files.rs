//! Static file service for the served root.
//!
//! # Responsibilities
//! - Resolve request paths under the root, rejecting `..` components
//! - Serve `index.html` for directory requests, a listing when it is absent
//! - Guess the content type from the file extension
//!
//! Missing files come back as `404`, methods other than `GET`/`HEAD` as
//! `405`. Both are left as the file service produces them.

use std::path::Path;

use tower_http::services::ServeDir;

use crate::http::listing::DirectoryListing;

/// File service rooted at `root`.
pub fn serve_root(root: &Path) -> ServeDir<DirectoryListing> {
    ServeDir::new(root)
        .append_index_html_on_directories(true)
        .fallback(DirectoryListing::new(root))
}
