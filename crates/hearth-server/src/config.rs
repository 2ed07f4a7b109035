// File: src/config.rs
// Purpose: Configuration parsing from hearth.toml

use anyhow::{Context, Result};
use hearth_router::ProjectId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "HEARTH_CONFIG";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub forums: ForumsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Site identity and the project directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Display name of the root project
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Scheme and host every link is built on (e.g. "http://handmade.test")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Token appended to public file URLs; defaults to the start time
    #[serde(default)]
    pub cache_bust: Option<String>,

    /// Project id owning the root project's forums
    #[serde(default = "default_root_project_id")]
    pub root_project_id: ProjectId,

    #[serde(default)]
    pub official_projects: Vec<OfficialProject>,

    #[serde(default)]
    pub personal_projects: Vec<PersonalProject>,
}

/// Project served from its own subdomain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialProject {
    pub id: ProjectId,
    pub slug: String,
    pub name: String,
}

/// Project served under `/p/{id}/{slug}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalProject {
    pub id: ProjectId,
    pub name: String,
}

/// Subforum data source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumsConfig {
    /// JSON array of subforum rows
    #[serde(default = "default_subforums_file")]
    pub subforums_file: String,

    /// Seconds a loaded tree is served before the file is read again
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

// Default values
fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_site_name() -> String {
    "Hearth".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_root_project_id() -> ProjectId {
    ProjectId::MIN
}

fn default_subforums_file() -> String {
    "subforums.json".to_string()
}

fn default_refresh_secs() -> u64 {
    60
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
            cache_bust: None,
            root_project_id: default_root_project_id(),
            official_projects: Vec::new(),
            personal_projects: Vec::new(),
        }
    }
}

impl Default for ForumsConfig {
    fn default() -> Self {
        Self {
            subforums_file: default_subforums_file(),
            refresh_secs: default_refresh_secs(),
        }
    }
}

impl SiteConfig {
    pub fn official_project(&self, slug: &str) -> Option<&OfficialProject> {
        self.official_projects
            .iter()
            .find(|p| p.slug.eq_ignore_ascii_case(slug))
    }

    pub fn personal_project(&self, id: ProjectId) -> Option<&PersonalProject> {
        self.personal_projects.iter().find(|p| p.id == id)
    }

    /// Configured token, or seconds since the epoch at startup
    pub fn cache_bust_token(&self) -> String {
        self.cache_bust.clone().unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
                .to_string()
        })
    }
}

impl Config {
    /// Load configuration from hearth.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load from `$HEARTH_CONFIG`, or ./hearth.toml, then apply `$PORT`
    pub fn load_default() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| "hearth.toml".to_string());
        let mut config = Self::load(path)?;

        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {:?}", port))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.site.base_url, "http://localhost:3000");
        assert_eq!(config.forums.subforums_file, "subforums.json");
        assert_eq!(config.forums.refresh_secs, 60);
        assert!(config.site.official_projects.is_empty());
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site.name, "Hearth");
    }

    #[test]
    fn test_project_directory() {
        let toml = r#"
            [site]
            base_url = "http://handmade.test"
            cache_bust = "abc"

            [[site.official_projects]]
            id = 2
            slug = "hero"
            name = "Handmade Hero"

            [[site.personal_projects]]
            id = 5
            name = "Tiny Engine"
        "#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.site.cache_bust_token(), "abc");
        assert_eq!(config.site.official_project("HERO").unwrap().name, "Handmade Hero");
        assert!(config.site.official_project("4coder").is_none());

        let tiny = config.site.personal_project(ProjectId::new(5).unwrap()).unwrap();
        assert_eq!(tiny.name, "Tiny Engine");
        assert!(config.site.personal_project(ProjectId::new(6).unwrap()).is_none());
    }

    #[test]
    fn test_zero_project_id_rejected() {
        let toml = r#"
            [[site.personal_projects]]
            id = 0
            name = "Nothing"
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load("does/not/exist/hearth.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
