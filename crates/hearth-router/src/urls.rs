/// URL assembly shared by all builders
///
/// `SiteUrls` carries the only configuration builders need: the base URL and
/// the cache-bust token for static assets. Each builder is a method on it, so a
/// test can construct its own `SiteUrls` instead of mutating process globals.

use url::form_urlencoded;
use url::Url;

use crate::context::personal_prefix_len;
use crate::{ProjectContext, UrlError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrls {
    scheme: String,
    host: String,
    cache_bust: String,
}

impl SiteUrls {
    /// Parses the base URL the site is served from
    ///
    /// Only scheme, host and port are kept; any path on the base URL is
    /// ignored.
    ///
    /// ```
    /// use hearth_router::SiteUrls;
    ///
    /// let urls = SiteUrls::new("http://handmade.test:9001").unwrap();
    /// assert_eq!(urls.base_host(), "handmade.test:9001");
    /// assert!(SiteUrls::new("handmade.test").is_err());
    /// ```
    pub fn new(base_url: &str) -> Result<Self, UrlError> {
        let parsed = Url::parse(base_url).map_err(|_| UrlError::InvalidBaseUrl(base_url.to_string()))?;
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| UrlError::InvalidBaseUrl(base_url.to_string()))?;

        let host = match parsed.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        Ok(SiteUrls {
            scheme: parsed.scheme().to_string(),
            host,
            cache_bust: String::new(),
        })
    }

    /// Sets the token appended as `?v=` to cache-busted asset URLs
    pub fn with_cache_bust(mut self, token: impl Into<String>) -> Self {
        self.cache_bust = token.into();
        self
    }

    pub fn base_host(&self) -> &str {
        &self.host
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn cache_bust(&self) -> &str {
        &self.cache_bust
    }

    /// Host a context's URLs are served from
    pub fn host_for(&self, ctx: &ProjectContext) -> String {
        match ctx {
            ProjectContext::Official { slug } if !slug.is_empty() => format!("{}.{}", slug, self.host),
            _ => self.host.clone(),
        }
    }

    /// URL on the root project's host, outside any project
    pub(crate) fn site_url(&self, path: &str, query: &[(&str, &str)]) -> String {
        self.project_url(&ProjectContext::root(), path, query, None)
    }

    /// URL of `path` inside a project
    ///
    /// `path` is relative to the project root; a leading slash is optional.
    pub(crate) fn project_url(
        &self,
        ctx: &ProjectContext,
        path: &str,
        query: &[(&str, &str)],
        fragment: Option<&str>,
    ) -> String {
        let relative = path.trim_start_matches('/');
        let full_path = match ctx.path_prefix() {
            Some(prefix) if relative.is_empty() => prefix,
            Some(prefix) => format!("{}/{}", prefix, relative),
            None => format!("/{}", relative),
        };

        let mut url = format!("{}://{}{}", self.scheme, self.host_for(ctx), full_path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&encode_query(query));
        }
        if let Some(fragment) = fragment.filter(|f| !f.is_empty()) {
            url.push('#');
            url.push_str(&urlencoding::encode(fragment));
        }
        url
    }

    /// Rebuilds a request path under `ctx`
    ///
    /// Any personal project prefix on `request_path` is stripped first, so
    /// this converts between personal and official forms of the same page and
    /// repairs a stale personal slug. `raw_query` is appended verbatim.
    ///
    /// ```
    /// use hearth_router::{ProjectContext, ProjectId, SiteUrls};
    ///
    /// let urls = SiteUrls::new("http://handmade.test").unwrap();
    /// let ctx = ProjectContext::personal(ProjectId::new(5).unwrap(), "New Name");
    /// assert_eq!(
    ///     urls.rewrite_project_url(&ctx, "/p/5/old-name/forums/t/1", Some("a=b")),
    ///     "http://handmade.test/p/5/new-name/forums/t/1?a=b",
    /// );
    /// assert_eq!(
    ///     urls.rewrite_project_url(&ProjectContext::official("hero"), "/p/5/old-name/blog", None),
    ///     "http://hero.handmade.test/blog",
    /// );
    /// ```
    pub fn rewrite_project_url(&self, ctx: &ProjectContext, request_path: &str, raw_query: Option<&str>) -> String {
        let rest = match personal_prefix_len(request_path) {
            Some(len) => &request_path[len..],
            None => request_path,
        };

        let mut url = self.project_url(ctx, rest, &[], None);
        if let Some(query) = raw_query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }
        url
    }
}

/// Form-encodes query pairs, sorted by key
///
/// Pairs with equal keys keep their relative order.
///
/// ```
/// use hearth_router::encode_query;
///
/// assert_eq!(
///     encode_query(&[("zig??", "zig & zag!!"), ("bar", "baz")]),
///     "bar=baz&zig%3F%3F=zig+%26+zag%21%21",
/// );
/// ```
pub fn encode_query(pairs: &[(&str, &str)]) -> String {
    let mut sorted = pairs.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(sorted)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Page, ProjectId};
    use pretty_assertions::assert_eq;

    fn urls() -> SiteUrls {
        SiteUrls::new("http://handmade.test").unwrap()
    }

    #[test]
    fn test_base_url_requires_host() {
        assert!(SiteUrls::new("").is_err());
        assert!(SiteUrls::new("/relative").is_err());
        assert_eq!(
            SiteUrls::new("https://example.com/ignored/path").unwrap().base_host(),
            "example.com"
        );
    }

    #[test]
    fn test_project_url_forms() {
        let urls = urls();
        let personal = ProjectContext::personal(ProjectId::new(5).unwrap(), "My Project");

        assert_eq!(urls.project_url(&ProjectContext::root(), "/", &[], None), "http://handmade.test/");
        assert_eq!(
            urls.project_url(&ProjectContext::official("hero"), "/forums", &[], None),
            "http://hero.handmade.test/forums"
        );
        assert_eq!(urls.project_url(&personal, "/", &[], None), "http://handmade.test/p/5/my-project");
        assert_eq!(
            urls.project_url(&personal, "/blog", &[], None),
            "http://handmade.test/p/5/my-project/blog"
        );
    }

    #[test]
    fn test_query_and_fragment() {
        let url = urls().project_url(
            &ProjectContext::root(),
            "/login",
            &[("redirect", "/forums/t/1")],
            Some("top"),
        );
        assert_eq!(url, "http://handmade.test/login?redirect=%2Fforums%2Ft%2F1#top");
    }

    #[test]
    fn test_encode_query_stable_for_equal_keys() {
        assert_eq!(encode_query(&[("b", "2"), ("a", "x"), ("b", "1")]), "a=x&b=2&b=1");
        assert_eq!(encode_query(&[]), "");
    }

    #[test]
    fn test_rewrite_project_url_official_to_personal() {
        let ctx = ProjectContext::personal(ProjectId::new(12).unwrap(), "Tiny Engine");
        assert_eq!(
            urls().rewrite_project_url(&ctx, "/forums", None),
            "http://handmade.test/p/12/tiny-engine/forums"
        );
        assert_eq!(urls().rewrite_project_url(&ctx, "/p/12", None), "http://handmade.test/p/12/tiny-engine");
    }

    #[test]
    fn test_bare_personal_context_keeps_a_slug_segment() {
        let ctx = ProjectContext::personal_with_slug(ProjectId::new(5).unwrap(), "");
        assert_eq!(urls().blog(&ctx, Page::FIRST), "http://handmade.test/p/5/project/blog");
        assert_eq!(urls().homepage(&ctx), "http://handmade.test/p/5/project");
    }
}
