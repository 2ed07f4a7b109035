use super::{push_page, push_title};
use crate::{Page, PostId, ProjectContext, SiteUrls, ThreadId};

impl SiteUrls {
    pub fn blog(&self, ctx: &ProjectContext, page: Page) -> String {
        let mut path = String::from("/blog");
        push_page(&mut path, page);
        self.project_url(ctx, &path, &[], None)
    }

    pub fn blog_thread(&self, ctx: &ProjectContext, thread: ThreadId, title: &str) -> String {
        self.project_url(ctx, &blog_thread_path(thread, title), &[], None)
    }

    pub fn blog_thread_with_post_hash(&self, ctx: &ProjectContext, thread: ThreadId, title: &str, post: PostId) -> String {
        self.project_url(ctx, &blog_thread_path(thread, title), &[], Some(&post.to_string()))
    }

    pub fn blog_new_thread(&self, ctx: &ProjectContext) -> String {
        self.project_url(ctx, "/blog/new", &[], None)
    }

    pub fn blog_post(&self, ctx: &ProjectContext, thread: ThreadId, post: PostId) -> String {
        self.project_url(ctx, &blog_post_path(thread, post, ""), &[], None)
    }

    pub fn blog_post_delete(&self, ctx: &ProjectContext, thread: ThreadId, post: PostId) -> String {
        self.project_url(ctx, &blog_post_path(thread, post, "/delete"), &[], None)
    }

    pub fn blog_post_edit(&self, ctx: &ProjectContext, thread: ThreadId, post: PostId) -> String {
        self.project_url(ctx, &blog_post_path(thread, post, "/edit"), &[], None)
    }

    pub fn blog_post_reply(&self, ctx: &ProjectContext, thread: ThreadId, post: PostId) -> String {
        self.project_url(ctx, &blog_post_path(thread, post, "/reply"), &[], None)
    }
}

fn blog_thread_path(thread: ThreadId, title: &str) -> String {
    let mut path = format!("/blog/p/{}", thread);
    push_title(&mut path, title);
    path
}

fn blog_post_path(thread: ThreadId, post: PostId, action: &str) -> String {
    format!("/blog/p/{}/e/{}{}", thread, post, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_thread_title() {
        let urls = SiteUrls::new("http://handmade.test").unwrap();
        let thread = ThreadId::new(3).unwrap();
        assert_eq!(
            urls.blog_thread(&ProjectContext::official("hero"), thread, "Devlog #1"),
            "http://hero.handmade.test/blog/p/3-devlog_1"
        );
        assert_eq!(urls.blog_thread(&ProjectContext::root(), thread, ""), "http://handmade.test/blog/p/3");
    }
}
