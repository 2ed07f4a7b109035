use std::collections::HashSet;

use crate::context::{personal_prefix_len, PERSONAL_PREFIX};
use crate::{ProjectContext, ProjectId, SiteUrls};

/// Determines the project identity of an incoming request
///
/// Official projects are recognised by subdomain, personal projects by the
/// `/p/{id}/{slug}` path prefix. Anything else belongs to the root project.
#[derive(Debug, Clone, Default)]
pub struct ProjectResolver {
    base_host: String,
    official_slugs: HashSet<String>,
}

impl ProjectResolver {
    pub fn new(base_host: impl Into<String>) -> Self {
        ProjectResolver {
            base_host: base_host.into().to_ascii_lowercase(),
            official_slugs: HashSet::new(),
        }
    }

    /// Resolver for the host a [`SiteUrls`] builds links for
    pub fn for_site(urls: &SiteUrls) -> Self {
        Self::new(urls.base_host())
    }

    /// Adds a slug that may be served from its own subdomain
    pub fn with_official_slug(mut self, slug: impl Into<String>) -> Self {
        self.official_slugs.insert(slug.into().to_ascii_lowercase());
        self
    }

    pub fn with_official_slugs<I, S>(self, slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        slugs.into_iter().fold(self, |r, slug| r.with_official_slug(slug))
    }

    pub fn is_official(&self, slug: &str) -> bool {
        self.official_slugs.contains(&slug.to_ascii_lowercase())
    }

    /// Resolves `host` (as sent in the `Host` header) and `path`
    ///
    /// A personal context carries the slug found in the path, which may be
    /// stale or empty; the dispatcher compares it against the project's
    /// display name with [`ProjectContext::canonicalize`].
    ///
    /// # Examples
    ///
    /// ```
    /// use hearth_router::{ProjectContext, ProjectResolver};
    ///
    /// let resolver = ProjectResolver::new("handmade.test").with_official_slug("hero");
    ///
    /// assert_eq!(resolver.resolve("hero.handmade.test", "/forums"), ProjectContext::official("hero"));
    /// assert!(resolver.resolve("handmade.test", "/p/5/my-thing/blog").is_personal());
    /// assert!(resolver.resolve("handmade.test", "/forums").is_root());
    /// assert!(resolver.resolve("unknown.handmade.test", "/").is_root());
    /// ```
    pub fn resolve(&self, host: &str, path: &str) -> ProjectContext {
        if let Some(slug) = self.official_subdomain(host) {
            return ProjectContext::official(slug);
        }

        self.personal_from_path(path)
            .unwrap_or_else(ProjectContext::root)
    }

    fn official_subdomain(&self, host: &str) -> Option<String> {
        let host = host.to_ascii_lowercase();
        let label = host.strip_suffix(&self.base_host)?.strip_suffix('.')?;

        if label.is_empty() || label.contains('.') {
            return None;
        }

        if self.official_slugs.contains(label) {
            Some(label.to_string())
        } else {
            tracing::debug!(subdomain = label, "unknown project subdomain, using root project");
            None
        }
    }

    fn personal_from_path(&self, path: &str) -> Option<ProjectContext> {
        personal_prefix_len(path)?;
        let caps = PERSONAL_PREFIX.captures(path)?;
        let id: ProjectId = caps.name("projectid")?.as_str().parse().ok()?;
        let slug = caps.name("projectslug").map_or("", |m| m.as_str());

        Some(ProjectContext::personal_with_slug(id, slug))
    }
}
