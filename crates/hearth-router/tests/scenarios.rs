use hearth_router::path::path_of;
use hearth_router::slug::sanitize;
use hearth_router::*;
use pretty_assertions::assert_eq;

fn urls() -> SiteUrls {
    SiteUrls::new("http://handmade.test").unwrap()
}

fn table() -> PatternTable {
    PatternTable::standard().unwrap()
}

#[test]
fn test_sanitize_display_name() {
    assert_eq!(sanitize("Godspeed You! Black Emperor"), "godspeed-you-black-emperor");
}

#[test]
fn test_forum_thread_first_page() {
    let url = urls()
        .forum_thread(
            &ProjectContext::root(),
            &["code", "engine"],
            ThreadId::new(42).unwrap(),
            "My Thread",
            Page::FIRST,
        )
        .unwrap();
    let path = path_of(&url).unwrap();

    let segments: Vec<&str> = path.rsplit('/').take(2).collect();
    assert_eq!(segments, vec!["42-my_thread", "t"]);

    let table = table();
    let params = table
        .definition(RouteName::ForumThread, RouteMode::Official)
        .unwrap()
        .matches(&path)
        .unwrap();
    assert_eq!(params["subforums"], "code/engine");
    assert_eq!(params["threadid"], "42");
    assert!(params.get("page").is_none());
}

#[test]
fn test_forum_thread_second_page() {
    let url = urls()
        .forum_thread(
            &ProjectContext::root(),
            &["code", "engine"],
            ThreadId::new(42).unwrap(),
            "My Thread",
            Page::new(2).unwrap(),
        )
        .unwrap();
    let path = path_of(&url).unwrap();
    assert!(path.ends_with("/t/42-my_thread/2"), "{}", path);

    let table = table();
    let params = table
        .definition(RouteName::ForumThread, RouteMode::Official)
        .unwrap()
        .matches(&path)
        .unwrap();
    assert_eq!(params["page"], "2");
    assert_eq!(params["subforums"], "code/engine");
}

#[test]
fn test_homepage_in_both_modes() {
    let urls = urls();
    let table = table();

    let official = urls.homepage(&ProjectContext::root());
    let personal = urls.homepage(&ProjectContext::personal(ProjectId::new(5).unwrap(), "Tiny Engine"));
    assert_ne!(official, personal);
    assert_eq!(official, "http://handmade.test/");
    assert_eq!(personal, "http://handmade.test/p/5/tiny-engine");

    let official_def = table.definition(RouteName::Homepage, RouteMode::Official).unwrap();
    let personal_def = table.definition(RouteName::Homepage, RouteMode::Personal).unwrap();

    let official_path = path_of(&official).unwrap();
    let personal_path = path_of(&personal).unwrap();
    assert!(official_def.matches(&official_path).is_some());
    assert!(personal_def.matches(&personal_path).is_some());

    // Each form only matches its own entry
    assert!(official_def.matches(&personal_path).is_none());
    assert!(personal_def.matches(&official_path).is_none());
}

#[test]
fn test_canonical_slug_redirect_target() {
    let urls = urls();
    let resolver = ProjectResolver::for_site(&urls);

    let requested = resolver.resolve("handmade.test", "/p/5/old-name/blog/p/3");
    let canonical = requested.canonicalize("Tiny Engine").unwrap();
    assert_eq!(
        urls.rewrite_project_url(&canonical, "/p/5/old-name/blog/p/3", None),
        "http://handmade.test/p/5/tiny-engine/blog/p/3"
    );
}

#[test]
fn test_trusted_call_site_degrades() {
    let url = urls()
        .forum(&ProjectContext::root(), &["bad/slug"], Page::FIRST)
        .or_log();
    assert_eq!(url, "");
}
