//! URL utilities for servable asset paths.

/// Join URL segments onto an http root.
///
/// Every non-empty segment is preceded by exactly one `/`; empty segments
/// (e.g. a disabled compiled folder) are skipped. Backslashes are turned
/// into `/`. No percent-encoding is applied.
///
/// # Examples
/// ```ignore
/// join_url("", &["css", "test1.css"])                   -> "/css/test1.css"
/// join_url("/static", &["js", "", "app.js"])            -> "/static/js/app.js"
/// join_url("https://cdn.example.com", &["css", "a.css"]) -> "https://cdn.example.com/css/a.css"
/// ```
pub fn join_url(root: &str, segments: &[&str]) -> String {
    let mut url = String::from(root);
    for segment in segments.iter().filter(|s| !s.is_empty()) {
        url.push('/');
        url.push_str(&segment.replace('\\', "/"));
    }
    url
}
