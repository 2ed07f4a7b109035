//! Builder functions, one per [`RouteName`](crate::RouteName)
//!
//! Every builder is a method on [`SiteUrls`](crate::SiteUrls) returning a
//! fully qualified URL whose path is matched by its paired route. Builders
//! that take only validated ids cannot fail; builders that take free-form
//! text return `Result<String, UrlError>`.

use crate::slug::path_safe_title;
use crate::{Page, UrlError};

mod blog;
mod forums;
mod library;
mod podcast;
mod projects;
mod site;

pub use forums::MarkRead;
pub use site::AtomFeedKind;

/// Percent-encodes a free-form value into one path segment
pub(crate) fn encoded_segment(what: &'static str, value: &str) -> Result<String, UrlError> {
    if value.trim().is_empty() {
        return Err(UrlError::invalid(what, "must not be blank"));
    }
    Ok(urlencoding::encode(value).into_owned())
}

/// `/forums` followed by one segment per subforum slug
///
/// Slugs are used verbatim, so they are limited to ASCII letters, `-` and
/// `_`. Digits are out because the forum routes tell slugs from thread ids
/// and page numbers by that alone, and a lone `t` would be read as the start
/// of a thread path.
pub(crate) fn subforum_path<S: AsRef<str>>(subforums: &[S]) -> Result<String, UrlError> {
    let mut path = String::from("/forums");

    for slug in subforums {
        let slug = slug.as_ref();
        if slug.trim().is_empty() {
            return Err(UrlError::invalid("subforum slug", "must not be blank"));
        }
        if slug == "t" {
            return Err(UrlError::invalid("subforum slug", "`t` is reserved for thread paths"));
        }
        if let Some(c) = slug.chars().find(|&c| !is_subforum_slug_char(c)) {
            return Err(UrlError::invalid(
                "subforum slug",
                format!("`{}` contains {:?}; only ASCII letters, '-' and '_' are allowed", slug, c),
            ));
        }
        path.push('/');
        path.push_str(slug);
    }

    Ok(path)
}

fn is_subforum_slug_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-' || c == '_'
}

pub(crate) fn push_title(path: &mut String, title: &str) {
    let title = path_safe_title(title);
    if !title.is_empty() {
        path.push('-');
        path.push_str(&title);
    }
}

pub(crate) fn push_page(path: &mut String, page: Page) {
    if !page.is_first() {
        path.push('/');
        path.push_str(&page.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subforum_path() {
        let none: [&str; 0] = [];
        assert_eq!(subforum_path(&none).unwrap(), "/forums");
        assert_eq!(subforum_path(&["code"]).unwrap(), "/forums/code");
        assert_eq!(subforum_path(&["code", "engine"]).unwrap(), "/forums/code/engine");
    }

    #[test]
    fn test_subforum_path_rejects_bad_slugs() {
        assert!(subforum_path(&["a/b"]).is_err());
        assert!(subforum_path(&["  "]).is_err());
        assert!(subforum_path(&["win32"]).is_err());
        assert!(subforum_path(&["two words"]).is_err());
    }

    #[test]
    fn test_subforum_path_rejects_route_syntax() {
        assert!(subforum_path(&["t"]).is_err());
        assert!(subforum_path(&["code", "t"]).is_err());
        assert!(subforum_path(&["c#"]).is_err());
        assert!(subforum_path(&["a?b"]).is_err());
        assert!(subforum_path(&["café"]).is_err());
        assert_eq!(subforum_path(&["tools", "T"]).unwrap(), "/forums/tools/T");
        assert_eq!(subforum_path(&["game_dev", "off-topic"]).unwrap(), "/forums/game_dev/off-topic");
    }

    #[test]
    fn test_push_title_skips_empty() {
        let mut path = String::from("/t/1");
        push_title(&mut path, "(())");
        assert_eq!(path, "/t/1");
        push_title(&mut path, "Hi There");
        assert_eq!(path, "/t/1-hi_there");
    }

    #[test]
    fn test_encoded_segment() {
        assert_eq!(encoded_segment("username", "a b/c").unwrap(), "a%20b%2Fc");
        assert!(encoded_segment("username", " ").is_err());
    }
}
