//! Static front-end files

use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};

const INDEX: &str = "index.html";

/// Map a request path onto a file under `root`
///
/// The query string is ignored, percent escapes are decoded and directory
/// paths resolve to their `index.html`. Paths that would escape `root`, or
/// that do not decode to UTF-8, are refused.
#[must_use]
pub fn resolve(root: &Path, url_path: &str) -> Option<PathBuf> {
    let raw = url_path.split(['?', '#']).next().unwrap_or_default();
    let path = percent_decode_str(raw).decode_utf8().ok()?;
    let relative = Path::new(path.trim_start_matches('/'));

    if path.contains('\\')
        || !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return None;
    }

    let mut full = root.join(relative);
    if path.is_empty() || path.ends_with('/') || full.is_dir() {
        full.push(INDEX);
    }
    full.is_file().then_some(full)
}

/// `Content-Type` for a file, by extension
#[must_use]
pub fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("app.js"), "// app").unwrap();
        fs::write(dir.path().join("my file.css"), "body {}").unwrap();
        fs::create_dir(dir.path().join("img")).unwrap();
        fs::write(dir.path().join("img").join("index.html"), "img").unwrap();
        dir
    }

    #[test]
    fn root_serves_index() {
        let dir = site();
        let root = dir.path();
        assert_eq!(resolve(root, "/"), Some(root.join("index.html")));
        assert_eq!(resolve(root, ""), Some(root.join("index.html")));
        assert_eq!(resolve(root, "/?v=2"), Some(root.join("index.html")));
        assert_eq!(resolve(root, "/img"), Some(root.join("img").join("index.html")));
    }

    #[test]
    fn files_resolve_inside_root() {
        let dir = site();
        let root = dir.path();
        assert_eq!(resolve(root, "/app.js"), Some(root.join("app.js")));
        assert_eq!(resolve(root, "/app.js?cache=1"), Some(root.join("app.js")));
        assert_eq!(resolve(root, "/missing.css"), None);
    }

    #[test]
    fn percent_escapes_are_decoded() {
        let dir = site();
        let root = dir.path();
        assert_eq!(resolve(root, "/my%20file.css"), Some(root.join("my file.css")));
        assert_eq!(resolve(root, "/app%2Ejs"), Some(root.join("app.js")));
        assert_eq!(resolve(root, "/%ff.css"), None);
    }

    #[test]
    fn traversal_is_refused() {
        let dir = site();
        let root = dir.path().join("img");
        assert_eq!(resolve(&root, "/../app.js"), None);
        assert_eq!(resolve(&root, "/./../index.html"), None);
        assert_eq!(resolve(&root, "/..\\app.js"), None);
        assert_eq!(resolve(&root, "/%2e%2e/app.js"), None);
        assert_eq!(resolve(&root, "/..%5capp.js"), None);
    }

    #[test]
    fn content_types() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("APP.JS")), "text/javascript; charset=utf-8");
        assert_eq!(content_type(Path::new("style.css")), "text/css; charset=utf-8");
        assert_eq!(content_type(Path::new("blob")), "application/octet-stream");
    }
}
