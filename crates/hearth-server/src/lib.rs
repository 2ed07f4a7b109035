//! # Hearth Server
//!
//! Reference dispatcher wiring the pattern table, the project resolver and the
//! subforum tree into one axum fallback handler. Every request is answered
//! with the route it resolved to, as JSON; unknown routes are 404s and
//! personal project URLs with a stale slug are redirected to the canonical one.

mod config;
mod dispatch;
mod error;
mod forums_cache;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use hearth_router::{PatternTable, ProjectResolver, SiteUrls};

pub use config::{Config, ForumsConfig, OfficialProject, PersonalProject, ServerConfig, SiteConfig, CONFIG_ENV};
pub use error::AppError;
pub use forums_cache::{load_tree, ForumsCache};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
    pub urls: Arc<SiteUrls>,
    pub table: Arc<PatternTable>,
    pub resolver: Arc<ProjectResolver>,
    pub forums: Arc<ForumsCache>,
}

impl AppState {
    /// Builds the state for `config`, reading subforums from its rows file
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let forums = ForumsCache::from_file(
            &config.forums.subforums_file,
            Duration::from_secs(config.forums.refresh_secs),
        );
        Self::with_forums(config.site.clone(), forums)
    }

    pub fn with_forums(site: SiteConfig, forums: ForumsCache) -> anyhow::Result<Self> {
        let urls = SiteUrls::new(&site.base_url)
            .with_context(|| format!("Invalid site.base_url: {:?}", site.base_url))?
            .with_cache_bust(site.cache_bust_token());
        let table = PatternTable::standard().context("Failed to compile the route table")?;
        let resolver = ProjectResolver::for_site(&urls)
            .with_official_slugs(site.official_projects.iter().map(|p| p.slug.clone()));

        Ok(AppState {
            site: Arc::new(site),
            urls: Arc::new(urls),
            table: Arc::new(table),
            resolver: Arc::new(resolver),
            forums: Arc::new(forums),
        })
    }
}

/// Router answering every path through the dispatcher
pub fn app(state: AppState) -> Router {
    Router::new().fallback(dispatch::dispatch).with_state(state)
}
