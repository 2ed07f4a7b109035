use super::{push_page, push_title, subforum_path};
use crate::{Page, PostId, ProjectContext, SiteUrls, SubforumId, ThreadId, UrlError};

/// What a mark-read request covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkRead {
    /// Every subforum of the project; written as subforum id 0
    All,
    Subforum(SubforumId),
}

impl SiteUrls {
    /// Forum index, or a subforum when `subforums` is non-empty
    ///
    /// ```
    /// use hearth_router::{Page, ProjectContext, SiteUrls};
    ///
    /// let urls = SiteUrls::new("http://handmade.test").unwrap();
    /// let root = ProjectContext::root();
    /// let none: [&str; 0] = [];
    ///
    /// assert_eq!(urls.forum(&root, &none, Page::FIRST).unwrap(), "http://handmade.test/forums");
    /// assert_eq!(
    ///     urls.forum(&root, &["code", "engine"], Page::new(2).unwrap()).unwrap(),
    ///     "http://handmade.test/forums/code/engine/2",
    /// );
    /// ```
    pub fn forum<S: AsRef<str>>(&self, ctx: &ProjectContext, subforums: &[S], page: Page) -> Result<String, UrlError> {
        let mut path = subforum_path(subforums)?;
        push_page(&mut path, page);
        Ok(self.project_url(ctx, &path, &[], None))
    }

    /// New-thread form, or its submit target
    pub fn forum_new_thread<S: AsRef<str>>(
        &self,
        ctx: &ProjectContext,
        subforums: &[S],
        submit: bool,
    ) -> Result<String, UrlError> {
        let mut path = subforum_path(subforums)?;
        path.push_str("/t/new");
        if submit {
            path.push_str("/submit");
        }
        Ok(self.project_url(ctx, &path, &[], None))
    }

    pub fn forum_thread<S: AsRef<str>>(
        &self,
        ctx: &ProjectContext,
        subforums: &[S],
        thread: ThreadId,
        title: &str,
        page: Page,
    ) -> Result<String, UrlError> {
        let path = thread_path(subforums, thread, title, page)?;
        Ok(self.project_url(ctx, &path, &[], None))
    }

    /// Thread page scrolled to one of its posts
    pub fn forum_thread_with_post_hash<S: AsRef<str>>(
        &self,
        ctx: &ProjectContext,
        subforums: &[S],
        thread: ThreadId,
        title: &str,
        page: Page,
        post: PostId,
    ) -> Result<String, UrlError> {
        let path = thread_path(subforums, thread, title, page)?;
        Ok(self.project_url(ctx, &path, &[], Some(&post.to_string())))
    }

    pub fn forum_post<S: AsRef<str>>(
        &self,
        ctx: &ProjectContext,
        subforums: &[S],
        thread: ThreadId,
        post: PostId,
    ) -> Result<String, UrlError> {
        self.forum_post_action(ctx, subforums, thread, post, "")
    }

    pub fn forum_post_delete<S: AsRef<str>>(
        &self,
        ctx: &ProjectContext,
        subforums: &[S],
        thread: ThreadId,
        post: PostId,
    ) -> Result<String, UrlError> {
        self.forum_post_action(ctx, subforums, thread, post, "/delete")
    }

    pub fn forum_post_edit<S: AsRef<str>>(
        &self,
        ctx: &ProjectContext,
        subforums: &[S],
        thread: ThreadId,
        post: PostId,
    ) -> Result<String, UrlError> {
        self.forum_post_action(ctx, subforums, thread, post, "/edit")
    }

    pub fn forum_post_reply<S: AsRef<str>>(
        &self,
        ctx: &ProjectContext,
        subforums: &[S],
        thread: ThreadId,
        post: PostId,
    ) -> Result<String, UrlError> {
        self.forum_post_action(ctx, subforums, thread, post, "/reply")
    }

    pub fn forum_mark_read(&self, ctx: &ProjectContext, target: MarkRead) -> String {
        let id = match target {
            MarkRead::All => 0,
            MarkRead::Subforum(id) => id.get(),
        };
        self.project_url(ctx, &format!("/markread/{}", id), &[], None)
    }

    fn forum_post_action<S: AsRef<str>>(
        &self,
        ctx: &ProjectContext,
        subforums: &[S],
        thread: ThreadId,
        post: PostId,
        action: &str,
    ) -> Result<String, UrlError> {
        let path = format!("{}/t/{}/p/{}{}", subforum_path(subforums)?, thread, post, action);
        Ok(self.project_url(ctx, &path, &[], None))
    }
}

fn thread_path<S: AsRef<str>>(subforums: &[S], thread: ThreadId, title: &str, page: Page) -> Result<String, UrlError> {
    let mut path = format!("{}/t/{}", subforum_path(subforums)?, thread);
    push_title(&mut path, title);
    push_page(&mut path, page);
    Ok(path)
}
