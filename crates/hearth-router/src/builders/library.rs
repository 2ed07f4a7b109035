use super::encoded_segment;
use crate::{ProjectContext, ResourceId, SiteUrls, TopicId, UrlError};

impl SiteUrls {
    // ========================================================================
    // Library
    // ========================================================================

    pub fn library(&self) -> String {
        self.site_url("/library", &[])
    }

    pub fn library_all(&self) -> String {
        self.site_url("/library/all", &[])
    }

    pub fn library_topic(&self, topic: TopicId) -> String {
        self.site_url(&format!("/library/topic/{}", topic), &[])
    }

    pub fn library_resource(&self, resource: ResourceId) -> String {
        self.site_url(&format!("/library/resource/{}", resource), &[])
    }

    // ========================================================================
    // Episode guide
    // ========================================================================

    /// Episode list of a project, narrowed to one topic when given
    pub fn episode_list(&self, ctx: &ProjectContext, topic: Option<&str>) -> Result<String, UrlError> {
        let path = match topic {
            Some(topic) => format!("/episode/{}", encoded_segment("episode topic", topic)?),
            None => String::from("/episode"),
        };
        Ok(self.project_url(ctx, &path, &[], None))
    }

    pub fn episode(&self, ctx: &ProjectContext, topic: &str, episode: &str) -> Result<String, UrlError> {
        let path = format!(
            "/episode/{}/{}",
            encoded_segment("episode topic", topic)?,
            encoded_segment("episode", episode)?
        );
        Ok(self.project_url(ctx, &path, &[], None))
    }

    pub fn cinera_index(&self, ctx: &ProjectContext, topic: &str) -> Result<String, UrlError> {
        let path = format!("/{}.index", encoded_segment("episode topic", topic)?);
        Ok(self.project_url(ctx, &path, &[], None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_list_topic_optional() {
        let urls = SiteUrls::new("http://handmade.test").unwrap();
        let hero = ProjectContext::official("hero");
        assert_eq!(urls.episode_list(&hero, None).unwrap(), "http://hero.handmade.test/episode");
        assert_eq!(
            urls.episode_list(&hero, Some("code")).unwrap(),
            "http://hero.handmade.test/episode/code"
        );
        assert!(urls.episode_list(&hero, Some("")).is_err());
    }
}
