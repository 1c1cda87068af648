//! URL path normalization.
//!
//! Maps a request path to the lookup key stored in a filemap event's `d`
//! tag: directory paths resolve to their `index.html`, and the leading
//! slash is dropped. Total over all inputs.

/// Normalize a URL path into a filemap lookup key.
pub fn lookup_key(path: &str) -> String {
    let mut key = path.to_owned();

    if key.ends_with('/') {
        key.push_str("index.html");
    }

    match key.strip_prefix('/') {
        Some(stripped) => stripped.to_owned(),
        None => key,
    }
}
