/// Compiled route patterns
///
/// A pattern is a chain of anchored regexes. Each regex consumes a prefix of
/// the path and hands the remainder to the next one, which is how project
/// routes are shared between official hosts (bare pattern) and personal
/// projects (`/p/{id}/{slug}` prefix + bare pattern).

use std::collections::HashMap;

use regex::Regex;

use crate::RouteError;

#[derive(Debug, Clone)]
pub struct RoutePattern {
    chain: Vec<Regex>,
}

impl RoutePattern {
    /// Compiles a single-regex pattern
    ///
    /// The regex must begin with `^`.
    ///
    /// ```
    /// use hearth_router::RoutePattern;
    ///
    /// let pattern = RoutePattern::new(r"^/snippet/(?P<snippetid>\d+)$").unwrap();
    /// let params = pattern.captures("/snippet/12").unwrap();
    /// assert_eq!(params["snippetid"], "12");
    ///
    /// assert!(RoutePattern::new(r"/snippet$").is_err());
    /// ```
    pub fn new(pattern: &str) -> Result<Self, RouteError> {
        Ok(RoutePattern {
            chain: vec![compile(pattern)?],
        })
    }

    /// Compiles a chain of regexes, outermost prefix first
    pub fn chain<I, S>(patterns: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let chain = patterns
            .into_iter()
            .map(|p| compile(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RoutePattern { chain })
    }

    /// Puts another prefix regex in front of this pattern
    pub fn with_prefix(mut self, prefix: &str) -> Result<Self, RouteError> {
        self.chain.insert(0, compile(prefix)?);
        Ok(self)
    }

    pub fn sources(&self) -> Vec<&str> {
        self.chain.iter().map(Regex::as_str).collect()
    }

    /// Matches `path` and returns the named captures that took part
    ///
    /// A prefix must end on a segment boundary, and an empty remainder is
    /// matched as `/`. When two regexes in the chain capture the same name the
    /// later one wins.
    pub fn captures(&self, path: &str) -> Option<HashMap<String, String>> {
        let mut params = HashMap::new();
        let mut rest = path;
        let last = self.chain.len().checked_sub(1)?;

        for (i, regex) in self.chain.iter().enumerate() {
            let subject = if rest.is_empty() { "/" } else { rest };
            let caps = regex.captures(subject)?;

            for name in regex.capture_names().flatten() {
                let Some(value) = caps.name(name) else {
                    continue;
                };
                if let Some(previous) = params.insert(name.to_string(), value.as_str().to_string()) {
                    tracing::warn!(
                        param = name,
                        previous = %previous,
                        current = value.as_str(),
                        "duplicate route parameter, last one wins"
                    );
                }
            }

            if i < last {
                let end = caps.get(0).map_or(0, |m| m.end());
                rest = &subject[end..];
                if !(rest.is_empty() || rest.starts_with('/')) {
                    return None;
                }
            }
        }

        Some(params)
    }
}

fn compile(pattern: &str) -> Result<Regex, RouteError> {
    if !pattern.starts_with('^') {
        return Err(RouteError::Unanchored(pattern.to_string()));
    }

    Regex::new(pattern).map_err(|source| RouteError::Invalid {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PERSONAL_PREFIX_PATTERN;

    fn personal(pattern: &str) -> RoutePattern {
        RoutePattern::chain([PERSONAL_PREFIX_PATTERN, pattern]).unwrap()
    }

    #[test]
    fn test_rejects_unanchored() {
        assert!(matches!(RoutePattern::new("/blog$"), Err(RouteError::Unanchored(_))));
        assert!(matches!(RoutePattern::new("^/blog("), Err(RouteError::Invalid { .. })));
    }

    #[test]
    fn test_chain_consumes_prefix() {
        let pattern = personal(r"^/blog/p/(?P<threadid>\d+)$");
        let params = pattern.captures("/p/5/my-thing/blog/p/9").unwrap();

        assert_eq!(params["projectid"], "5");
        assert_eq!(params["projectslug"], "my-thing");
        assert_eq!(params["threadid"], "9");
    }

    #[test]
    fn test_empty_remainder_matches_root() {
        let pattern = personal(r"^/$");
        assert!(pattern.captures("/p/5/my-thing").is_some());
        assert!(pattern.captures("/p/5").is_some());
    }

    #[test]
    fn test_prefix_must_end_on_segment() {
        let pattern = personal(r"^.*$");
        assert!(pattern.captures("/p/5x").is_none());
    }

    #[test]
    fn test_non_participating_groups_are_absent() {
        let pattern = RoutePattern::new(r"^/blog(/(?P<page>\d+))?$").unwrap();
        assert!(pattern.captures("/blog").unwrap().get("page").is_none());
        assert_eq!(pattern.captures("/blog/3").unwrap()["page"], "3");
    }

    #[test]
    fn test_duplicate_capture_last_wins() {
        let pattern = RoutePattern::chain([r"^/(?P<x>a)", r"^/(?P<x>b)$"]).unwrap();
        assert_eq!(pattern.captures("/a/b").unwrap()["x"], "b");
    }

    #[test]
    fn test_with_prefix() {
        let pattern = RoutePattern::new(r"^/forums$")
            .unwrap()
            .with_prefix(PERSONAL_PREFIX_PATTERN)
            .unwrap();
        assert_eq!(pattern.sources().len(), 2);
        assert!(pattern.captures("/p/1/x/forums").is_some());
        assert!(pattern.captures("/forums").is_none());
    }
}
