/// Project identity of a request or of a link being built
///
/// Official projects live on their own subdomain (`hero.example.com/forums`);
/// personal projects live under the base host with a path prefix
/// (`example.com/p/5/my-project/forums`). The root project is the official
/// project with an empty slug and renders on the bare base host.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::slug::sanitize;
use crate::ProjectId;

/// Prefix every personal project path starts with.
pub(crate) const PERSONAL_PREFIX_PATTERN: &str =
    r"^/p/(?P<projectid>[0-9]+)(/(?P<projectslug>[a-zA-Z0-9-]+))?";

pub(crate) static PERSONAL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PERSONAL_PREFIX_PATTERN).unwrap());

/// Slug used when a display name sanitizes to nothing. Without it the next
/// path segment would be read back as the project slug.
pub const FALLBACK_PERSONAL_SLUG: &str = "project";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectContext {
    /// Rendered as `{slug}.{base host}`; an empty slug is the root project
    Official { slug: String },
    /// Rendered as `/p/{id}/{slug}` under the base host
    Personal { id: ProjectId, slug: String },
}

impl ProjectContext {
    /// The root project on the bare base host
    pub fn root() -> Self {
        ProjectContext::Official {
            slug: String::new(),
        }
    }

    pub fn official(slug: impl Into<String>) -> Self {
        ProjectContext::Official { slug: slug.into() }
    }

    /// Personal context whose slug is derived from the project's display name
    ///
    /// ```
    /// use hearth_router::{ProjectContext, ProjectId};
    ///
    /// let ctx = ProjectContext::personal(ProjectId::new(5).unwrap(), "Godspeed You! Black Emperor");
    /// assert_eq!(ctx.slug(), "godspeed-you-black-emperor");
    /// ```
    pub fn personal(id: ProjectId, display_name: &str) -> Self {
        ProjectContext::Personal {
            id,
            slug: personal_slug(display_name),
        }
    }

    /// Personal context carrying whatever slug a request path supplied
    ///
    /// The slug is advisory: it has not been checked against the project's
    /// display name. See [`ProjectContext::canonicalize`].
    pub fn personal_with_slug(id: ProjectId, slug: impl Into<String>) -> Self {
        ProjectContext::Personal {
            id,
            slug: slug.into(),
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            ProjectContext::Official { slug } | ProjectContext::Personal { slug, .. } => slug,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, ProjectContext::Official { slug } if slug.is_empty())
    }

    pub fn is_personal(&self) -> bool {
        matches!(self, ProjectContext::Personal { .. })
    }

    pub fn personal_id(&self) -> Option<ProjectId> {
        match self {
            ProjectContext::Personal { id, .. } => Some(*id),
            ProjectContext::Official { .. } => None,
        }
    }

    /// Returns the canonical context when this personal context's slug does
    /// not match the one derived from `display_name`
    ///
    /// `None` means the context is already canonical (official contexts
    /// always are). The dispatcher redirects when this returns `Some`.
    pub fn canonicalize(&self, display_name: &str) -> Option<ProjectContext> {
        match self {
            ProjectContext::Personal { id, slug } => {
                let canonical = personal_slug(display_name);
                (*slug != canonical).then(|| ProjectContext::Personal {
                    id: *id,
                    slug: canonical,
                })
            }
            ProjectContext::Official { .. } => None,
        }
    }

    /// Path prefix of a personal project, `None` for official projects
    ///
    /// A blank slug (as in a bare `/p/5` request) renders as
    /// [`FALLBACK_PERSONAL_SLUG`] so the next segment is never read back as
    /// the slug.
    pub(crate) fn path_prefix(&self) -> Option<String> {
        match self {
            ProjectContext::Personal { id, slug } if slug.is_empty() => {
                Some(format!("/p/{}/{}", id, FALLBACK_PERSONAL_SLUG))
            }
            ProjectContext::Personal { id, slug } => Some(format!("/p/{}/{}", id, slug)),
            ProjectContext::Official { .. } => None,
        }
    }
}

impl fmt::Display for ProjectContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectContext::Official { slug } if slug.is_empty() => write!(f, "root"),
            ProjectContext::Official { slug } => write!(f, "official:{}", slug),
            ProjectContext::Personal { id, slug } => write!(f, "personal:{}/{}", id, slug),
        }
    }
}

fn personal_slug(display_name: &str) -> String {
    let slug = sanitize(display_name);
    if slug.is_empty() {
        FALLBACK_PERSONAL_SLUG.to_string()
    } else {
        slug
    }
}

/// Length of the personal project prefix at the start of `path`, if any
///
/// The prefix must end at a segment boundary: `/p/5x` has none.
pub(crate) fn personal_prefix_len(path: &str) -> Option<usize> {
    let m = PERSONAL_PREFIX.find(path)?;
    let rest = &path[m.end()..];
    (rest.is_empty() || rest.starts_with('/')).then_some(m.end())
}
