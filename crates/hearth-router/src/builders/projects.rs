use crate::{Page, ProjectContext, ProjectId, SiteUrls, UrlError};

impl SiteUrls {
    pub fn project_index(&self, page: Page) -> String {
        if page.is_first() {
            self.site_url("/projects", &[])
        } else {
            self.site_url(&format!("/projects/{}", page), &[])
        }
    }

    pub fn project_new(&self) -> String {
        self.site_url("/projects/new", &[])
    }

    /// Homepage of a personal project, with the slug derived from its name
    pub fn personal_project(&self, id: ProjectId, display_name: &str) -> String {
        self.homepage(&ProjectContext::personal(id, display_name))
    }

    pub fn project_edit(&self, ctx: &ProjectContext, section: &str) -> String {
        self.project_url(ctx, "/edit", &[], Some(section))
    }

    /// Upload endpoint on the project's own host, so uploads stay same-origin
    pub fn asset_upload(&self, ctx: &ProjectContext) -> String {
        self.project_url(ctx, "/upload_asset", &[], None)
    }

    pub fn project_css(&self, color: &str) -> String {
        self.site_url("/assets/project.css", &[("color", color)])
    }

    pub fn editor_previews_js(&self) -> String {
        self.site_url("/assets/editorpreviews.js", &[])
    }

    // ========================================================================
    // Static files
    // ========================================================================

    /// File under `/public`, optionally with the cache-bust token as `?v=`
    ///
    /// Surrounding slashes are ignored. Empty paths, blank segments and
    /// embedded query strings are rejected.
    ///
    /// ```
    /// use hearth_router::SiteUrls;
    ///
    /// let urls = SiteUrls::new("http://handmade.test").unwrap().with_cache_bust("123");
    /// assert_eq!(urls.public("/style.css", true).unwrap(), "http://handmade.test/public/style.css?v=123");
    /// assert!(urls.public("a//b", false).is_err());
    /// ```
    pub fn public(&self, filepath: &str, cache_bust: bool) -> Result<String, UrlError> {
        let filepath = filepath.trim_matches('/');
        if filepath.trim().is_empty() {
            return Err(UrlError::invalid("public path", "must not be empty"));
        }
        if filepath.contains('?') {
            return Err(UrlError::invalid("public path", "must not contain query params"));
        }

        let mut path = String::from("/public");
        for part in filepath.split('/') {
            let part = part.trim();
            if part.is_empty() {
                return Err(UrlError::invalid(
                    "public path",
                    format!("`{}` has blank segments", filepath),
                ));
            }
            path.push('/');
            path.push_str(part);
        }

        if cache_bust {
            Ok(self.site_url(&path, &[("v", self.cache_bust())]))
        } else {
            Ok(self.site_url(&path, &[]))
        }
    }

    pub fn theme(&self, filepath: &str, theme: &str, cache_bust: bool) -> Result<String, UrlError> {
        if theme.is_empty() {
            return Err(UrlError::invalid("theme", "must not be blank"));
        }
        self.public(&format!("themes/{}/{}", theme, filepath.trim_matches('/')), cache_bust)
    }

    /// User-uploaded media served from `/public/media`
    pub fn user_file(&self, filepath: &str) -> Result<String, UrlError> {
        self.public(&format!("media/{}", filepath.trim_matches('/')), false)
    }
}
