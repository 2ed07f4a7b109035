use http::Method;

use super::{RouteDefinition, RouteMatch, RouteMode, RouteName, RoutePattern};
use crate::context::PERSONAL_PREFIX_PATTERN;
use crate::path::normalize_path;
use crate::{ProjectContext, RouteError};

/// Ordered, immutable list of route definitions
///
/// Built once at startup and shared by reference; lookups never mutate it.
/// The first entry whose method and pattern match wins, so registration order
/// is part of the routing contract.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    routes: Vec<RouteDefinition>,
}

/// Builder for [`PatternTable`]
#[derive(Debug, Default)]
pub struct PatternTableBuilder {
    routes: Vec<RouteDefinition>,
}

impl RouteDefinition {
    /// Catalogue entry for `name` in `mode`
    ///
    /// Personal entries get the `/p/{id}/{slug}` prefix in front of the route
    /// regex.
    pub fn for_mode(name: RouteName, mode: RouteMode) -> Result<Self, RouteError> {
        let pattern = RoutePattern::new(name.pattern())?;
        let pattern = match mode {
            RouteMode::Personal => pattern.with_prefix(PERSONAL_PREFIX_PATTERN)?,
            RouteMode::Site | RouteMode::Official => pattern,
        };

        Ok(RouteDefinition {
            name,
            mode,
            method: name.method(),
            pattern,
        })
    }
}

impl PatternTableBuilder {
    pub fn with_definition(mut self, definition: RouteDefinition) -> Self {
        self.routes.push(definition);
        self
    }

    /// Registers every mode of a catalogue route
    pub fn with_route(self, name: RouteName) -> Result<Self, RouteError> {
        name.modes().iter().try_fold(self, |builder, &mode| {
            Ok(builder.with_definition(RouteDefinition::for_mode(name, mode)?))
        })
    }

    pub fn build(self) -> PatternTable {
        PatternTable { routes: self.routes }
    }
}

impl PatternTable {
    pub fn builder() -> PatternTableBuilder {
        PatternTableBuilder::default()
    }

    /// The full route catalogue in registration order
    ///
    /// ```
    /// use hearth_router::{PatternTable, ProjectContext, RouteName};
    /// use http::Method;
    ///
    /// let table = PatternTable::standard().unwrap();
    /// let m = table.find(&Method::GET, "/forums/t/42", &ProjectContext::root()).unwrap();
    /// assert_eq!(m.name, RouteName::ForumThread);
    /// ```
    pub fn standard() -> Result<Self, RouteError> {
        let builder = RouteName::ALL
            .iter()
            .try_fold(Self::builder(), |builder, &name| builder.with_route(name))?;

        Ok(builder.build())
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// First entry registered for `name` in `mode`
    pub fn definition(&self, name: RouteName, mode: RouteMode) -> Option<&RouteDefinition> {
        self.routes.iter().find(|r| r.name == name && r.mode == mode)
    }

    /// Finds the first route serving `method` and `path` for a request in `ctx`
    ///
    /// Personal requests only see personal entries. Official subdomains see
    /// official entries, and the root host sees site and official entries but
    /// never the `/p/{id}` ones. The path is normalized first. `None` means the dispatcher's not-found handler runs.
    pub fn find(&self, method: &Method, path: &str, ctx: &ProjectContext) -> Option<RouteMatch> {
        let path = normalize_path(path);

        let found = self
            .routes
            .iter()
            .filter(|route| serves(ctx, route.mode) && route.method.accepts(method))
            .find_map(|route| {
                route.matches(&path).map(|params| RouteMatch {
                    name: route.name,
                    mode: route.mode,
                    params,
                })
            });

        match &found {
            Some(m) => tracing::debug!(%method, path = %path, route = %m.name, "matched route"),
            None => tracing::debug!(%method, path = %path, "no route matched"),
        }

        found
    }
}

fn serves(ctx: &ProjectContext, mode: RouteMode) -> bool {
    match ctx {
        ProjectContext::Official { slug } if slug.is_empty() => mode != RouteMode::Personal,
        ProjectContext::Official { .. } => mode == RouteMode::Official,
        ProjectContext::Personal { .. } => mode == RouteMode::Personal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProjectId;
    use pretty_assertions::assert_eq;

    fn table() -> PatternTable {
        PatternTable::standard().unwrap()
    }

    fn personal() -> ProjectContext {
        ProjectContext::personal_with_slug(ProjectId::new(5).unwrap(), "thing")
    }

    #[test]
    fn test_project_routes_registered_twice() {
        let table = table();
        let site = RouteName::ALL.iter().filter(|n| n.modes().len() == 1).count();
        let project = RouteName::ALL.len() - site;
        assert_eq!(table.len(), site + 2 * project);

        let official = table.definition(RouteName::Blog, RouteMode::Official).unwrap();
        let personal = table.definition(RouteName::Blog, RouteMode::Personal).unwrap();
        assert_eq!(official.pattern.sources().len(), 1);
        assert_eq!(personal.pattern.sources().len(), 2);
    }

    #[test]
    fn test_thread_wins_over_forum_index() {
        let m = table().find(&Method::GET, "/forums/t/42", &ProjectContext::root()).unwrap();
        assert_eq!(m.name, RouteName::ForumThread);
        assert_eq!(m.param("threadid"), Some("42"));
    }

    #[test]
    fn test_new_thread_wins_over_forum_index() {
        let m = table().find(&Method::GET, "/forums/code/t/new", &ProjectContext::root()).unwrap();
        assert_eq!(m.name, RouteName::ForumNewThread);
        assert_eq!(m.param("subforums"), Some("code"));
    }

    #[test]
    fn test_method_selects_entry() {
        let table = table();
        let root = ProjectContext::root();
        assert_eq!(table.find(&Method::GET, "/login", &root).unwrap().name, RouteName::LoginPage);
        assert_eq!(table.find(&Method::HEAD, "/login", &root).unwrap().name, RouteName::LoginPage);
        assert_eq!(table.find(&Method::POST, "/login", &root).unwrap().name, RouteName::LoginAction);
        assert!(table.find(&Method::GET, "/_discord_unlink", &root).is_none());
    }

    #[test]
    fn test_subdomain_only_sees_project_routes() {
        let table = table();
        let hero = ProjectContext::official("hero");
        assert_eq!(table.find(&Method::GET, "/forums", &hero).unwrap().mode, RouteMode::Official);
        assert!(table.find(&Method::GET, "/feed", &hero).is_none());
        assert!(table.find(&Method::GET, "/feed", &ProjectContext::root()).is_some());
    }

    #[test]
    fn test_personal_context_uses_prefixed_entries() {
        let m = table().find(&Method::GET, "/p/5/thing/blog/p/3", &personal()).unwrap();
        assert_eq!(m.name, RouteName::BlogThread);
        assert_eq!(m.mode, RouteMode::Personal);
        assert_eq!(m.param("projectid"), Some("5"));
        assert_eq!(m.param("threadid"), Some("3"));

        assert!(table().find(&Method::GET, "/blog", &personal()).is_none());
    }

    #[test]
    fn test_root_never_sees_personal_entries() {
        let table = table();
        let root = ProjectContext::root();
        assert!(table.find(&Method::GET, "/p/0/x/blog", &root).is_none());
        assert!(table.find(&Method::GET, "/p/99999999999/x/forums", &root).is_none());
        assert!(table.find(&Method::GET, "/p/5/thing", &root).is_none());
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let m = table().find(&Method::GET, "/blog/", &ProjectContext::root()).unwrap();
        assert_eq!(m.name, RouteName::Blog);
    }

    #[test]
    fn test_unknown_path_has_no_match() {
        assert!(table().find(&Method::GET, "/nope/nothing", &ProjectContext::root()).is_none());
    }

    #[test]
    fn test_custom_table_keeps_order() {
        let table = PatternTable::builder()
            .with_route(RouteName::Forum)
            .unwrap()
            .with_route(RouteName::ForumThread)
            .unwrap()
            .build();

        // Registered in the wrong order, the index shadows the thread
        let m = table.find(&Method::GET, "/forums/t/42", &ProjectContext::root()).unwrap();
        assert_eq!(m.name, RouteName::Forum);
        assert_eq!(m.param("page"), Some("42"));
    }
}
