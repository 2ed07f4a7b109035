use super::encoded_segment;
use crate::{SiteUrls, UrlError};

impl SiteUrls {
    pub fn podcast(&self) -> String {
        self.site_url("/podcast", &[])
    }

    pub fn podcast_edit(&self) -> String {
        self.site_url("/podcast/edit", &[])
    }

    /// Episode page; `new` is reserved for the new-episode form
    pub fn podcast_episode(&self, episode_guid: &str) -> Result<String, UrlError> {
        let guid = episode_segment(episode_guid)?;
        Ok(self.site_url(&format!("/podcast/ep/{}", guid), &[]))
    }

    pub fn podcast_episode_new(&self) -> String {
        self.site_url("/podcast/ep/new", &[])
    }

    pub fn podcast_episode_edit(&self, episode_guid: &str) -> Result<String, UrlError> {
        let guid = episode_segment(episode_guid)?;
        Ok(self.site_url(&format!("/podcast/ep/{}/edit", guid), &[]))
    }

    pub fn podcast_rss(&self) -> String {
        self.site_url("/podcast/podcast.xml", &[])
    }

    pub fn podcast_episode_file(&self, filename: &str) -> Result<String, UrlError> {
        self.user_file(&format!("podcast/{}", filename))
    }
}

fn episode_segment(guid: &str) -> Result<String, UrlError> {
    if guid == "new" {
        return Err(UrlError::invalid("podcast episode", "`new` is reserved"));
    }
    encoded_segment("podcast episode", guid)
}
