use super::encoded_segment;
use crate::{Page, ProjectContext, SiteUrls, SnippetId, UrlError};

/// Which Atom feed to link to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomFeedKind {
    All,
    Projects,
    Showcase,
}

impl SiteUrls {
    // ========================================================================
    // Homepage and site sections
    // ========================================================================

    /// Landing page of a project; the root project's is the site homepage
    pub fn homepage(&self, ctx: &ProjectContext) -> String {
        self.project_url(ctx, "/", &[], None)
    }

    pub fn showcase(&self) -> String {
        self.site_url("/showcase", &[])
    }

    pub fn streams(&self) -> String {
        self.site_url("/streams", &[])
    }

    pub fn when_is_it(&self) -> String {
        self.site_url("/whenisit", &[])
    }

    pub fn jam_index(&self) -> String {
        self.site_url("/jam", &[])
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Form target for logging in; `redirect_to` is where to go afterwards
    pub fn login_action(&self, redirect_to: &str) -> String {
        self.site_url("/login", &redirect_query(redirect_to))
    }

    pub fn login_page(&self, redirect_to: &str) -> String {
        self.site_url("/login", &redirect_query(redirect_to))
    }

    /// Logging out always redirects somewhere; the homepage when unspecified
    pub fn logout_action(&self, redirect_to: &str) -> String {
        let redirect_to = if redirect_to.is_empty() { "/" } else { redirect_to };
        self.site_url("/logout", &[("redirect", redirect_to)])
    }

    pub fn register(&self) -> String {
        self.site_url("/register", &[])
    }

    pub fn registration_success(&self) -> String {
        self.site_url("/registered_successfully", &[])
    }

    pub fn email_confirmation(&self, username: &str, token: &str) -> Result<String, UrlError> {
        let path = format!(
            "/email_confirmation/{}/{}",
            encoded_segment("username", username)?,
            encoded_segment("token", token)?
        );
        Ok(self.site_url(&path, &[]))
    }

    pub fn request_password_reset(&self) -> String {
        self.site_url("/password_reset", &[])
    }

    pub fn password_reset_sent(&self) -> String {
        self.site_url("/password_reset/sent", &[])
    }

    pub fn do_password_reset(&self, username: &str, token: &str) -> Result<String, UrlError> {
        let path = format!(
            "/password_reset/{}/{}",
            encoded_segment("username", username)?,
            encoded_segment("token", token)?
        );
        Ok(self.site_url(&path, &[]))
    }

    // ========================================================================
    // Static pages
    // ========================================================================

    pub fn manifesto(&self) -> String {
        self.site_url("/manifesto", &[])
    }

    pub fn about(&self) -> String {
        self.site_url("/about", &[])
    }

    pub fn code_of_conduct(&self) -> String {
        self.site_url("/code-of-conduct", &[])
    }

    pub fn communication_guidelines(&self) -> String {
        self.site_url("/communication-guidelines", &[])
    }

    pub fn contact_page(&self) -> String {
        self.site_url("/contact", &[])
    }

    pub fn monthly_update_policy(&self) -> String {
        self.site_url("/monthly-update-policy", &[])
    }

    pub fn project_submission_guidelines(&self) -> String {
        self.site_url("/project-guidelines", &[])
    }

    // ========================================================================
    // Users and admin
    // ========================================================================

    /// Public profile page
    ///
    /// ```
    /// use hearth_router::SiteUrls;
    ///
    /// let urls = SiteUrls::new("http://handmade.test").unwrap();
    /// assert_eq!(urls.user_profile("Ben").unwrap(), "http://handmade.test/m/Ben");
    /// assert!(urls.user_profile("").is_err());
    /// ```
    pub fn user_profile(&self, username: &str) -> Result<String, UrlError> {
        let path = format!("/m/{}", encoded_segment("username", username)?);
        Ok(self.site_url(&path, &[]))
    }

    /// Settings page, scrolled to `section` when it is non-empty
    pub fn user_settings(&self, section: &str) -> String {
        self.project_url(&ProjectContext::root(), "/settings", &[], Some(section))
    }

    pub fn admin_atom_feed(&self) -> String {
        self.site_url("/admin/atom", &[])
    }

    pub fn admin_approval_queue(&self) -> String {
        self.site_url("/admin/approvals", &[])
    }

    // ========================================================================
    // Feeds and snippets
    // ========================================================================

    pub fn snippet(&self, snippet: SnippetId) -> String {
        self.site_url(&format!("/snippet/{}", snippet), &[])
    }

    pub fn feed(&self, page: Page) -> String {
        if page.is_first() {
            self.site_url("/feed", &[])
        } else {
            self.site_url(&format!("/feed/{}", page), &[])
        }
    }

    pub fn atom_feed(&self, kind: AtomFeedKind) -> String {
        let path = match kind {
            AtomFeedKind::All => "/atom",
            AtomFeedKind::Projects => "/atom/projects",
            AtomFeedKind::Showcase => "/atom/showcase",
        };
        self.site_url(path, &[])
    }

    // ========================================================================
    // Discord
    // ========================================================================

    pub fn discord_oauth_callback(&self) -> String {
        self.site_url("/_discord_callback", &[])
    }

    pub fn discord_unlink(&self) -> String {
        self.site_url("/_discord_unlink", &[])
    }

    pub fn discord_showcase_backlog(&self) -> String {
        self.site_url("/discord_showcase_backlog", &[])
    }
}

fn redirect_query(redirect_to: &str) -> Vec<(&str, &str)> {
    if redirect_to.is_empty() {
        Vec::new()
    } else {
        vec![("redirect", redirect_to)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn urls() -> SiteUrls {
        SiteUrls::new("http://handmade.test").unwrap()
    }

    #[test]
    fn test_logout_defaults_to_homepage() {
        assert_eq!(urls().logout_action(""), "http://handmade.test/logout?redirect=%2F");
        assert_eq!(
            urls().logout_action("/forums"),
            "http://handmade.test/logout?redirect=%2Fforums"
        );
    }

    #[test]
    fn test_login_without_redirect_has_no_query() {
        assert_eq!(urls().login_page(""), "http://handmade.test/login");
    }

    #[test]
    fn test_feed_page_one_is_bare() {
        assert_eq!(urls().feed(Page::FIRST), "http://handmade.test/feed");
        assert_eq!(urls().feed(Page::new(3).unwrap()), "http://handmade.test/feed/3");
    }

    #[test]
    fn test_user_settings_fragment() {
        assert_eq!(urls().user_settings("discord"), "http://handmade.test/settings#discord");
        assert_eq!(urls().user_settings(""), "http://handmade.test/settings");
    }

    #[test]
    fn test_password_reset_rejects_blank_token() {
        assert!(urls().do_password_reset("ben", "").is_err());
        assert!(urls().email_confirmation("", "tok").is_err());
    }
}
