//! Static file serving module
//!
//! Maps a request path onto the root directory and loads the file at the
//! resulting target path.

use crate::config::{ServerConfig, INDEX_FILES};
use crate::error::ServerError;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve the file the request path maps to under the configured root
pub async fn serve(config: &ServerConfig, path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let root = match resolve_root(&config.root_dir) {
        Ok(root) => root,
        Err(e) => {
            logger::log_error(&e.to_string());
            return http::build_500_response();
        }
    };

    match load_file(&root, path).await {
        Some((content, content_type)) => {
            http::response::build_file_response(Bytes::from(content), content_type, is_head)
        }
        None => http::build_404_response(),
    }
}

/// Resolve the configured root to an absolute path.
///
/// Recomputed on every request: if the working directory disappears mid-run
/// this degrades to per-request 500s instead of serving stale paths.
fn resolve_root(root_dir: &Path) -> Result<PathBuf, ServerError> {
    std::path::absolute(root_dir).map_err(|source| ServerError::RootResolve {
        root: root_dir.display().to_string(),
        source,
    })
}

/// Load the target file, with index file fallback for directories.
///
/// Returns `None` for anything that should answer 404: missing files,
/// directories without an index file, unreadable files, undecodable or
/// NUL-carrying paths, and paths that escape the root after
/// canonicalization.
async fn load_file(root: &Path, request_path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Percent-decode before mapping onto the filesystem, so /hello%20world.txt
    // reaches "hello world.txt". Decoded ".." segments are caught by the
    // canonicalize check below.
    let decoded = match urlencoding::decode(request_path) {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!("Undecodable request path '{request_path}': {e}"));
            return None;
        }
    };
    if decoded.contains('\0') {
        logger::log_warning(&format!("Request path contains NUL byte: {request_path}"));
        return None;
    }

    let relative = decoded.trim_start_matches('/');
    let mut file_path = root.join(relative);

    // Directory requests fall back to index files
    if file_path.is_dir() || relative.is_empty() || relative.ends_with('/') {
        for index_file in INDEX_FILES {
            let index_path = file_path.join(index_file);
            if index_path.is_file() {
                file_path = index_path;
                break;
            }
        }
    }

    let root_canonical = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Root directory not found or inaccessible '{}': {e}",
                root.display()
            ));
            return None;
        }
    };

    // File not found is common (404), no need to log at warning level
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {request_path} -> {}",
            file_path_canonical.display()
        ));
        return None;
    }
    if !file_path_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&file_path_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path_canonical.display(),
                e
            ));
            return None;
        }
    };

    // Determine content type from extension
    let content_type =
        mime::get_content_type(file_path_canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn temp_root(name: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "staticserve-unit-{}-{name}-{id}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn serves_existing_file() {
        let root = temp_root("hit");
        std::fs::write(root.join("hello.txt"), "hi").unwrap();

        let (content, content_type) = load_file(&root, "/hello.txt").await.unwrap();
        assert_eq!(content, b"hi");
        assert_eq!(content_type, "text/plain; charset=utf-8");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let root = temp_root("miss");
        assert!(load_file(&root, "/missing.txt").await.is_none());
    }

    #[tokio::test]
    async fn directory_falls_back_to_index() {
        let root = temp_root("index");
        std::fs::write(root.join("index.html"), "<html></html>").unwrap();

        let (content, content_type) = load_file(&root, "/").await.unwrap();
        assert_eq!(content, b"<html></html>");
        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn directory_without_index_is_not_found() {
        let root = temp_root("noindex");
        std::fs::create_dir_all(root.join("sub")).unwrap();
        assert!(load_file(&root, "/sub").await.is_none());
    }

    #[tokio::test]
    async fn serves_percent_encoded_path() {
        let root = temp_root("encoded");
        std::fs::write(root.join("hello world.txt"), "hi").unwrap();

        let (content, content_type) = load_file(&root, "/hello%20world.txt").await.unwrap();
        assert_eq!(content, b"hi");
        assert_eq!(content_type, "text/plain; charset=utf-8");
    }

    #[tokio::test]
    async fn encoded_nul_is_rejected() {
        let root = temp_root("nul");
        std::fs::write(root.join("hello.txt"), "hi").unwrap();

        assert!(load_file(&root, "/hello.txt%00").await.is_none());
    }

    #[tokio::test]
    async fn traversal_outside_root_is_blocked() {
        let parent = temp_root("traversal");
        let root = parent.join("root");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(parent.join("secret.txt"), "secret").unwrap();

        assert!(load_file(&root, "/../secret.txt").await.is_none());
        assert!(load_file(&root, "/%2e%2e/secret.txt").await.is_none());
    }

    #[tokio::test]
    async fn unresolvable_root_answers_500() {
        use http_body_util::BodyExt;

        // An empty root cannot be resolved to an absolute path
        let config = ServerConfig {
            root_dir: PathBuf::new(),
            addr: "127.0.0.1:0".parse().unwrap(),
        };

        let response = serve(&config, "/hello.txt", false).await;
        assert_eq!(response.status(), 500);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Internal server error");
    }

    #[test]
    fn resolve_root_produces_absolute_path() {
        let resolved = resolve_root(Path::new("./")).unwrap();
        assert!(resolved.is_absolute());
    }
}
