/// Breadcrumb trails for project, forum and blog pages
///
/// Links are built with the router's builders; the inputs all come from
/// stored rows, so a builder rejection is logged and degrades to an empty
/// link instead of failing the page.

use hearth_router::{Page, ProjectContext, SiteUrls, SubforumId, ThreadId, UrlResultExt};
use serde::Serialize;

use crate::{LineageBuilder, LineageError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Breadcrumb {
            name: name.into(),
            url: url.into(),
        }
    }
}

pub fn project_breadcrumb(urls: &SiteUrls, ctx: &ProjectContext, project_name: &str) -> Breadcrumb {
    Breadcrumb::new(project_name, urls.homepage(ctx))
}

pub fn forum_breadcrumb(urls: &SiteUrls, ctx: &ProjectContext) -> Breadcrumb {
    let empty: [&str; 0] = [];
    Breadcrumb::new("Forums", urls.forum(ctx, &empty, Page::FIRST).or_log())
}

/// Project, forums, then one crumb per subforum below the root
///
/// The project's root forum is represented by the "Forums" crumb, so a
/// subforum directly under it yields three crumbs.
pub fn subforum_breadcrumbs(
    urls: &SiteUrls,
    ctx: &ProjectContext,
    project_name: &str,
    lineages: &mut LineageBuilder<'_>,
    subforum: SubforumId,
) -> Result<Vec<Breadcrumb>, LineageError> {
    let nodes = lineages.lineage_excluding_root(subforum)?;
    let slugs = lineages.subforum_slug_lineage(subforum)?;

    let mut crumbs = Vec::with_capacity(nodes.len() + 2);
    crumbs.push(project_breadcrumb(urls, ctx, project_name));
    crumbs.push(forum_breadcrumb(urls, ctx));
    for (i, node) in nodes.iter().enumerate() {
        let url = urls.forum(ctx, &slugs[..=i], Page::FIRST).or_log();
        crumbs.push(Breadcrumb::new(node.name.as_str(), url));
    }
    Ok(crumbs)
}

/// Subforum trail followed by the thread itself
pub fn forum_thread_breadcrumbs(
    urls: &SiteUrls,
    ctx: &ProjectContext,
    project_name: &str,
    lineages: &mut LineageBuilder<'_>,
    subforum: SubforumId,
    thread: ThreadId,
    title: &str,
) -> Result<Vec<Breadcrumb>, LineageError> {
    let mut crumbs = subforum_breadcrumbs(urls, ctx, project_name, lineages, subforum)?;
    let slugs = lineages.subforum_slug_lineage(subforum)?;
    let url = urls.forum_thread(ctx, &slugs[..], thread, title, Page::FIRST).or_log();
    crumbs.push(Breadcrumb::new(title, url));
    Ok(crumbs)
}

pub fn blog_breadcrumb(urls: &SiteUrls, ctx: &ProjectContext) -> Breadcrumb {
    Breadcrumb::new("Blog", urls.blog(ctx, Page::FIRST))
}

pub fn blog_thread_breadcrumbs(
    urls: &SiteUrls,
    ctx: &ProjectContext,
    project_name: &str,
    thread: ThreadId,
    title: &str,
) -> Vec<Breadcrumb> {
    vec![
        project_breadcrumb(urls, ctx, project_name),
        blog_breadcrumb(urls, ctx),
        Breadcrumb::new(title, urls.blog_thread(ctx, thread, title)),
    ]
}
