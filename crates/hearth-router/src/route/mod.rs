/// Route catalogue, definitions and match results
///
/// Every builder in this crate is paired with exactly one [`RouteName`]. The
/// catalogue below is the single place a route's regex, method and scope are
/// declared; its order is the registration order of the standard table.

use std::collections::HashMap;
use std::fmt;

use http::Method;

pub mod pattern;
pub mod table;

pub use pattern::RoutePattern;
pub use table::{PatternTable, PatternTableBuilder};

// ============================================================================
// Catalogue
// ============================================================================

/// Whether a route exists once for the site or once per project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteScope {
    /// Served only on the root project's host
    Site,
    /// Served for every project: bare on official hosts, under `/p/{id}/{slug}` for personal ones
    Project,
}

/// Which project form a table entry serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteMode {
    Site,
    Official,
    Personal,
}

impl RouteMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteMode::Site => "site",
            RouteMode::Official => "official",
            RouteMode::Personal => "personal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteMethod {
    Any,
    Get,
    Post,
}

impl RouteMethod {
    /// `HEAD` is accepted wherever `GET` is
    pub fn accepts(self, method: &Method) -> bool {
        match self {
            RouteMethod::Any => true,
            RouteMethod::Get => *method == Method::GET || *method == Method::HEAD,
            RouteMethod::Post => *method == Method::POST,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteMethod::Any => "*",
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
        }
    }
}

macro_rules! route_catalog {
    ($( $name:ident => $scope:ident, $method:ident, $pattern:literal; )*) => {
        /// Name of a route, shared by its table entries and its builder
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum RouteName {
            $($name,)*
        }

        impl RouteName {
            /// All routes in registration order
            pub const ALL: &'static [RouteName] = &[$(RouteName::$name,)*];

            /// Regex matched against the path relative to the project root
            pub fn pattern(self) -> &'static str {
                match self {
                    $(RouteName::$name => $pattern,)*
                }
            }

            pub fn scope(self) -> RouteScope {
                match self {
                    $(RouteName::$name => RouteScope::$scope,)*
                }
            }

            pub fn method(self) -> RouteMethod {
                match self {
                    $(RouteName::$name => RouteMethod::$method,)*
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $(RouteName::$name => stringify!($name),)*
                }
            }
        }
    };
}

// More specific routes come before the general ones that would shadow them:
// `/forums/t/42` also matches the forum index regex (subforum `t`, page 42),
// `/podcast/ep/new` matches the episode regex.
route_catalog! {
    Showcase => Site, Get, r"^/showcase$";
    Streams => Site, Get, r"^/streams$";
    WhenIsIt => Site, Get, r"^/whenisit$";
    JamIndex => Site, Get, r"^/jam$";
    LoginAction => Site, Post, r"^/login$";
    LoginPage => Site, Get, r"^/login$";
    LogoutAction => Site, Any, r"^/logout$";
    Register => Site, Any, r"^/register$";
    RegistrationSuccess => Site, Get, r"^/registered_successfully$";
    EmailConfirmation => Site, Any, r"^/email_confirmation/(?P<username>[^/]+)/(?P<token>[^/]+)$";
    RequestPasswordReset => Site, Any, r"^/password_reset$";
    PasswordResetSent => Site, Get, r"^/password_reset/sent$";
    DoPasswordReset => Site, Any, r"^/password_reset/(?P<username>[^/]+)/(?P<token>[^/]+)$";
    Manifesto => Site, Get, r"^/manifesto$";
    About => Site, Get, r"^/about$";
    CodeOfConduct => Site, Get, r"^/code-of-conduct$";
    CommunicationGuidelines => Site, Get, r"^/communication-guidelines$";
    ContactPage => Site, Get, r"^/contact$";
    MonthlyUpdatePolicy => Site, Get, r"^/monthly-update-policy$";
    ProjectSubmissionGuidelines => Site, Get, r"^/project-guidelines$";
    UserProfile => Site, Get, r"^/m/(?P<username>[^/]+)$";
    UserSettings => Site, Any, r"^/settings$";
    AdminAtomFeed => Site, Get, r"^/admin/atom$";
    AdminApprovalQueue => Site, Any, r"^/admin/approvals$";
    Snippet => Site, Get, r"^/snippet/(?P<snippetid>\d+)$";
    Feed => Site, Get, r"^/feed(/(?P<page>\d+))?$";
    AtomFeed => Site, Get, r"^/atom(/(?P<feedtype>[^/]+))?(/new)?$";
    ProjectNew => Site, Any, r"^/projects/new$";
    ProjectIndex => Site, Get, r"^/projects(/(?P<page>\d+))?$";
    Podcast => Site, Get, r"^/podcast$";
    PodcastEdit => Site, Any, r"^/podcast/edit$";
    PodcastEpisodeNew => Site, Any, r"^/podcast/ep/new$";
    PodcastEpisodeEdit => Site, Any, r"^/podcast/ep/(?P<episodeid>[^/]+)/edit$";
    PodcastEpisode => Site, Get, r"^/podcast/ep/(?P<episodeid>[^/]+)$";
    PodcastRss => Site, Get, r"^/podcast/podcast\.xml$";
    Library => Site, Get, r"^/library$";
    LibraryAll => Site, Get, r"^/library/all$";
    LibraryTopic => Site, Get, r"^/library/topic/(?P<topicid>\d+)$";
    LibraryResource => Site, Get, r"^/library/resource/(?P<resourceid>\d+)$";
    DiscordOAuthCallback => Site, Get, r"^/_discord_callback$";
    DiscordUnlink => Site, Post, r"^/_discord_unlink$";
    DiscordShowcaseBacklog => Site, Post, r"^/discord_showcase_backlog$";
    ProjectCss => Site, Get, r"^/assets/project\.css$";
    EditorPreviewsJs => Site, Get, r"^/assets/editorpreviews\.js$";
    Public => Site, Get, r"^/public/.+$";

    Homepage => Project, Get, r"^/$";
    ProjectEdit => Project, Any, r"^/edit$";
    AssetUpload => Project, Post, r"^/upload_asset$";
    ForumNewThread => Project, Get, r"^/forums(/(?P<subforums>[^\d/]+(/[^\d]+)*))?/t/new$";
    ForumNewThreadSubmit => Project, Post, r"^/forums(/(?P<subforums>[^\d/]+(/[^\d]+)*))?/t/new/submit$";
    ForumThread => Project, Get, r"^/forums(/(?P<subforums>[^\d/]+(/[^\d]+)*))?/t/(?P<threadid>\d+)(-([^/]+))?(/(?P<page>\d+))?$";
    ForumPost => Project, Get, r"^/forums(/(?P<subforums>[^\d/]+(/[^\d]+)*))?/t/(?P<threadid>\d+)/p/(?P<postid>\d+)$";
    ForumPostDelete => Project, Any, r"^/forums(/(?P<subforums>[^\d/]+(/[^\d]+)*))?/t/(?P<threadid>\d+)/p/(?P<postid>\d+)/delete$";
    ForumPostEdit => Project, Any, r"^/forums(/(?P<subforums>[^\d/]+(/[^\d]+)*))?/t/(?P<threadid>\d+)/p/(?P<postid>\d+)/edit$";
    ForumPostReply => Project, Any, r"^/forums(/(?P<subforums>[^\d/]+(/[^\d]+)*))?/t/(?P<threadid>\d+)/p/(?P<postid>\d+)/reply$";
    Forum => Project, Get, r"^/forums(/(?P<subforums>[^\d/]+(/[^\d]+)*))?(/(?P<page>\d+))?$";
    ForumMarkRead => Project, Post, r"^/markread/(?P<sfid>\d+)$";
    BlogNewThread => Project, Any, r"^/blog/new$";
    BlogThread => Project, Get, r"^/blog/p/(?P<threadid>\d+)(-([^/]+))?$";
    BlogPost => Project, Get, r"^/blog/p/(?P<threadid>\d+)/e/(?P<postid>\d+)$";
    BlogPostDelete => Project, Any, r"^/blog/p/(?P<threadid>\d+)/e/(?P<postid>\d+)/delete$";
    BlogPostEdit => Project, Any, r"^/blog/p/(?P<threadid>\d+)/e/(?P<postid>\d+)/edit$";
    BlogPostReply => Project, Any, r"^/blog/p/(?P<threadid>\d+)/e/(?P<postid>\d+)/reply$";
    Blog => Project, Get, r"^/blog(/(?P<page>\d+))?$";
    EpisodeList => Project, Get, r"^/episode(/(?P<topic>[^/]+))?$";
    Episode => Project, Get, r"^/episode/(?P<topic>[^/]+)/(?P<episode>[^/]+)$";
    CineraIndex => Project, Get, r"^/(?P<topic>[^/]+)\.index$";
}

impl RouteName {
    /// Table modes this route is registered under
    pub fn modes(self) -> &'static [RouteMode] {
        match self.scope() {
            RouteScope::Site => &[RouteMode::Site],
            RouteScope::Project => &[RouteMode::Official, RouteMode::Personal],
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Definitions and matches
// ============================================================================

/// One entry of the pattern table
#[derive(Debug, Clone)]
pub struct RouteDefinition {
    pub name: RouteName,
    pub mode: RouteMode,
    pub method: RouteMethod,
    pub pattern: RoutePattern,
}

impl RouteDefinition {
    /// Matches `path` against this entry's pattern, ignoring the method
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        self.pattern.captures(path)
    }
}

/// Result of dispatching a request against the pattern table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: RouteName,
    pub mode: RouteMode,
    /// Named captures that took part in the match
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Subforum slugs captured by a forum route, outermost first
    ///
    /// ```
    /// use hearth_router::{PatternTable, ProjectContext};
    /// use http::Method;
    ///
    /// let table = PatternTable::standard().unwrap();
    /// let m = table.find(&Method::GET, "/forums/code/engine/t/42", &ProjectContext::root()).unwrap();
    /// assert_eq!(m.subforum_slugs(), vec!["code", "engine"]);
    /// ```
    pub fn subforum_slugs(&self) -> Vec<&str> {
        self.param("subforums")
            .map(|s| s.split('/').filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default()
    }
}
