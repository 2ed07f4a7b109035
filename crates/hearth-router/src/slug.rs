/// Slug sanitization for display names and thread titles
///
/// Both functions are **pure**: no side effects, deterministic output, and
/// neither can fail. Either may return an empty string when nothing of the
/// input survives.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]+").unwrap());

static TITLE_SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[\s:/\\]+"#).unwrap());

static TITLE_BLOCKLIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[$&`<>{}()\[\]"+#%@;=?^|~\x{2018}\x{2019}]"#).unwrap());

/// Turns a display name into a URL slug
///
/// Every run of characters outside `[A-Za-z0-9]` becomes a single hyphen,
/// leading and trailing hyphens are trimmed and the result is lower-cased.
/// Applying it twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use hearth_router::slug::sanitize;
///
/// assert_eq!(sanitize("Godspeed You! Black Emperor"), "godspeed-you-black-emperor");
/// assert_eq!(sanitize("  Foo  Bar  "), "foo-bar");
/// assert_eq!(sanitize("!@#$%^&"), "");
/// ```
pub fn sanitize(text: &str) -> String {
    NON_SLUG_RUN
        .replace_all(text, "-")
        .trim_matches('-')
        .to_ascii_lowercase()
}

/// Turns a thread title into a single path segment
///
/// Lower-cases, folds runs of whitespace, `:`, `/` and `\` into one `_`,
/// drops characters that are awkward in URLs and percent-encodes whatever
/// else remains outside the unreserved set.
///
/// # Examples
///
/// ```
/// use hearth_router::slug::path_safe_title;
///
/// assert_eq!(path_safe_title("My Thread"), "my_thread");
/// assert_eq!(path_safe_title("C++ & Rust: a/b"), "c_rust_a_b");
/// ```
pub fn path_safe_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    let folded = TITLE_SEPARATOR_RUN.replace_all(&lowered, "_");
    let stripped = TITLE_BLOCKLIST.replace_all(&folded, "");
    let collapsed = collapse_underscores(&stripped);

    urlencoding::encode(&collapsed).into_owned()
}

// Stripping blocklisted characters can leave separators adjacent ("a & b" -> "a__b")
fn collapse_underscores(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("Godspeed You! Black Emperor", "godspeed-you-black-emperor")]
    #[case("!@#$%^&", "")]
    #[case("-- Foo Bar --", "foo-bar")]
    #[case("--foo-bar", "foo-bar")]
    #[case("foo--bar", "foo-bar")]
    #[case("foo-bar--", "foo-bar")]
    #[case("  Foo  Bar  ", "foo-bar")]
    #[case("20,000 Leagues Under the Sea", "20-000-leagues-under-the-sea")]
    fn test_sanitize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize(input), expected);
    }

    #[rstest]
    #[case("My Thread", "my_thread")]
    #[case("Hello:World", "hello_world")]
    #[case("back\\slash / forward", "back_slash_forward")]
    #[case("What's up?", "what%27s_up")]
    #[case("\u{2018}quoted\u{2019}", "quoted")]
    #[case("(($$))", "")]
    #[case("Ünïcode", "%C3%BCn%C3%AFcode")]
    fn test_path_safe_title(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(path_safe_title(input), expected);
    }

    #[test]
    fn test_path_safe_title_is_single_segment() {
        let title = path_safe_title("a/b/c d\\e");
        assert!(!title.contains('/'));
        assert_eq!(title, "a_b_c_d_e");
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(text in ".*") {
            let once = sanitize(&text);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn sanitize_output_is_slug_charset(text in ".*") {
            let slug = sanitize(&text);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn path_safe_title_never_contains_slash(text in ".*") {
            prop_assert!(!path_safe_title(&text).contains('/'));
        }
    }
}
