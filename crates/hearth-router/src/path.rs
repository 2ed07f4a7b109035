/// Request path cleanup and URL splitting
///
/// The pattern table only ever sees canonical paths; builders only ever emit
/// them. Everything here is pure.

use std::borrow::Cow;

use url::Url;

/// Whether `path` is canonical: rooted, no empty segments, no backslashes,
/// and no trailing slash unless it is `/` itself
///
/// Every path produced by a builder satisfies this.
///
/// # Examples
///
/// ```
/// use hearth_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/forums/code/t/42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("forums"));
/// assert!(!is_valid_path("/forums/"));
/// assert!(!is_valid_path("/forums//code"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    match path.strip_prefix('/') {
        Some("") => true,
        Some(rest) => !rest.contains('\\') && rest.split('/').all(|segment| !segment.is_empty()),
        None => false,
    }
}

/// Normalize a request path to canonical form before matching
///
/// Returns `Cow::Borrowed` when the input is already canonical.
///
/// - Trailing slashes: `/blog/` → `/blog`
/// - Double slashes: `/forums//code` → `/forums/code`
/// - Backslashes: `\forums\code` → `/forums/code`
/// - Empty path: `` → `/`
///
/// # Examples
///
/// ```
/// use hearth_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/about"), Cow::Borrowed("/about")));
/// assert_eq!(normalize_path("/blog/"), "/blog");
/// assert_eq!(normalize_path("/forums//code///t/1"), "/forums/code/t/1");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let mut canonical = String::with_capacity(path.len() + 1);
    for segment in path.split(['/', '\\']).filter(|s| !s.is_empty()) {
        canonical.push('/');
        canonical.push_str(segment);
    }

    if canonical.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(canonical)
    }
}

/// Extracts the path component of an absolute URL
///
/// Returns `None` for relative or unparsable input.
///
/// ```
/// use hearth_router::path::path_of;
///
/// assert_eq!(path_of("http://hero.example.test/forums/t/1?x=1#p2").as_deref(), Some("/forums/t/1"));
/// assert_eq!(path_of("not a url"), None);
/// ```
pub fn path_of(url: &str) -> Option<String> {
    Url::parse(url).ok().map(|u| u.path().to_string())
}

/// Host (with port, if any) of an absolute URL
pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
