use std::collections::HashMap;

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, Uri},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use hearth_forums::{blog_breadcrumb, project_breadcrumb, subforum_breadcrumbs, Breadcrumb, LineageBuilder};
use hearth_router::{
    Page, PostId, ProjectContext, ProjectId, ResourceId, RouteMatch, RouteName, RouteScope, SnippetId, SubforumId,
    ThreadId, TopicId, UrlError,
};
use serde::Serialize;
use tracing::debug;

use crate::{AppError, AppState};

/// The project a request resolved to
#[derive(Debug, Clone)]
struct Project {
    id: ProjectId,
    name: String,
}

#[derive(Serialize)]
struct Dispatched<'a> {
    route: &'static str,
    mode: &'static str,
    context: String,
    project: &'a str,
    params: &'a HashMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    breadcrumbs: Vec<Breadcrumb>,
}

/// Fallback handler: resolve the project, redirect stale personal slugs,
/// match the route and describe it
pub(crate) async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_else(|| state.urls.base_host());
    let path = uri.path();
    let ctx = state.resolver.resolve(host, path);
    let project = project_for(&state, &ctx)?;

    if let Some(canonical) = ctx.canonicalize(&project.name) {
        let target = state.urls.rewrite_project_url(&canonical, path, uri.query());
        debug!(from = %path, to = %target, "Redirecting to canonical project slug");
        return Ok(Redirect::permanent(&target).into_response());
    }

    let matched = state
        .table
        .find(&method, path, &ctx)
        .ok_or_else(|| AppError::not_found(format!("No route for {} {}", method, path)))?;
    check_numeric_params(&matched)?;

    let breadcrumbs = breadcrumbs_for(&state, &ctx, &project, &matched).await?;

    let body = Dispatched {
        route: matched.name.as_str(),
        mode: matched.mode.as_str(),
        context: ctx.to_string(),
        project: &project.name,
        params: &matched.params,
        breadcrumbs,
    };
    Ok(Json(body).into_response())
}

fn project_for(state: &AppState, ctx: &ProjectContext) -> Result<Project, AppError> {
    let site = &state.site;
    match ctx {
        ProjectContext::Official { slug } if slug.is_empty() => Ok(Project {
            id: site.root_project_id,
            name: site.name.clone(),
        }),
        ProjectContext::Official { slug } => site
            .official_project(slug)
            .map(|p| Project {
                id: p.id,
                name: p.name.clone(),
            })
            .ok_or_else(|| AppError::not_found(format!("Unknown project `{}`", slug))),
        ProjectContext::Personal { id, .. } => site
            .personal_project(*id)
            .map(|p| Project {
                id: p.id,
                name: p.name.clone(),
            })
            .ok_or_else(|| AppError::not_found(format!("Unknown project {}", id))),
    }
}

/// Numeric captures must parse into their id types; zero and overflow are 400s
fn check_numeric_params(matched: &RouteMatch) -> Result<(), AppError> {
    for (key, value) in &matched.params {
        let checked: Result<(), UrlError> = match key.as_str() {
            "threadid" => value.parse::<ThreadId>().map(drop),
            "postid" => value.parse::<PostId>().map(drop),
            "page" => value.parse::<Page>().map(drop),
            "snippetid" => value.parse::<SnippetId>().map(drop),
            "topicid" => value.parse::<TopicId>().map(drop),
            "resourceid" => value.parse::<ResourceId>().map(drop),
            // Zero marks every subforum as read
            "sfid" if value.bytes().all(|b| b == b'0') => Ok(()),
            "sfid" => value.parse::<SubforumId>().map(drop),
            _ => Ok(()),
        };
        checked.map_err(AppError::bad_request)?;
    }
    Ok(())
}

fn is_forum_route(name: RouteName) -> bool {
    matches!(
        name,
        RouteName::Forum
            | RouteName::ForumNewThread
            | RouteName::ForumNewThreadSubmit
            | RouteName::ForumThread
            | RouteName::ForumPost
            | RouteName::ForumPostDelete
            | RouteName::ForumPostEdit
            | RouteName::ForumPostReply
    )
}

fn is_blog_route(name: RouteName) -> bool {
    matches!(
        name,
        RouteName::Blog
            | RouteName::BlogNewThread
            | RouteName::BlogThread
            | RouteName::BlogPost
            | RouteName::BlogPostDelete
            | RouteName::BlogPostEdit
            | RouteName::BlogPostReply
    )
}

async fn breadcrumbs_for(
    state: &AppState,
    ctx: &ProjectContext,
    project: &Project,
    matched: &RouteMatch,
) -> Result<Vec<Breadcrumb>, AppError> {
    if matched.name.scope() == RouteScope::Site {
        return Ok(Vec::new());
    }

    if is_forum_route(matched.name) {
        let tree = state.forums.tree().await?;
        let mut lineages = LineageBuilder::new(&tree);
        let slugs = matched.subforum_slugs();
        let subforum = lineages
            .resolve_slug_path(project.id, &slugs[..])
            .ok_or_else(|| AppError::not_found(format!("Unknown subforum `{}`", slugs.join("/"))))?;
        return Ok(subforum_breadcrumbs(&state.urls, ctx, &project.name, &mut lineages, subforum)?);
    }

    let mut crumbs = vec![project_breadcrumb(&state.urls, ctx, &project.name)];
    if is_blog_route(matched.name) {
        crumbs.push(blog_breadcrumb(&state.urls, ctx));
    }
    Ok(crumbs)
}
