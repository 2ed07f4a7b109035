//! # Hearth Router
//!
//! URL resolution for a community site made of forums, blogs, podcasts,
//! user profiles and projects:
//! - an ordered **pattern table** of regex routes, matched first-to-last
//! - a **builder** method for every route, producing URLs the table matches
//! - a **project context** deciding whether links live on an official
//!   project's subdomain or under a personal project's `/p/{id}/{slug}` prefix
//! - the **slug sanitizer** shared by personal project slugs and thread titles
//!
//! Everything here is pure and synchronous. The table is built once and
//! shared; builders are methods on a [`SiteUrls`] carrying the base URL.
//!
//! ## Example
//!
//! ```
//! use hearth_router::{Page, PatternTable, ProjectContext, ProjectResolver, RouteName, SiteUrls, ThreadId};
//! use hearth_router::path::{host_of, path_of};
//! use http::Method;
//!
//! let urls = SiteUrls::new("http://handmade.test").unwrap();
//! let table = PatternTable::standard().unwrap();
//! let resolver = ProjectResolver::for_site(&urls).with_official_slug("hero");
//!
//! let ctx = ProjectContext::official("hero");
//! let url = urls
//!     .forum_thread(&ctx, &["code", "engine"], ThreadId::new(42).unwrap(), "My Thread", Page::FIRST)
//!     .unwrap();
//! assert_eq!(url, "http://hero.handmade.test/forums/code/engine/t/42-my_thread");
//!
//! let (host, path) = (host_of(&url).unwrap(), path_of(&url).unwrap());
//! let request_ctx = resolver.resolve(&host, &path);
//! let m = table.find(&Method::GET, &path, &request_ctx).unwrap();
//! assert_eq!(m.name, RouteName::ForumThread);
//! assert_eq!(m.param("subforums"), Some("code/engine"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod builders;
mod context;
mod error;
mod ids;
pub mod path;
mod resolve;
pub mod route;
pub mod slug;
mod urls;

pub use builders::{AtomFeedKind, MarkRead};
pub use context::{ProjectContext, FALLBACK_PERSONAL_SLUG};
pub use error::{RouteError, UrlError, UrlResultExt};
pub use ids::{Page, PageInfo, PostId, ProjectId, ResourceId, SnippetId, SubforumId, ThreadId, TopicId};
pub use resolve::ProjectResolver;
pub use route::{
    PatternTable, PatternTableBuilder, RouteDefinition, RouteMatch, RouteMethod, RouteMode, RouteName,
    RoutePattern, RouteScope,
};
pub use urls::{encode_query, SiteUrls};
