use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("imathiatour.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub catalog: Option<Catalog>,
    pub webserver: Option<WebServer>,
    pub auth: Option<Auth>,
    pub knowledge_base: Option<KnowledgeBase>,
    pub gallery: Option<Gallery>,
    pub about: Option<About>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Catalog {
    pub seed_file: PathBuf,
}

impl Default for Catalog {
    fn default() -> Self {
        Config::default().catalog.expect("Catalog configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Auth {
    pub token_secret: Option<String>,
    #[serde(deserialize_with = "deserialize_duration")]
    pub access_token_ttl: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub refresh_token_ttl: Duration,
    pub demo_email: String,
    pub demo_password: String,
}

impl Default for Auth {
    fn default() -> Self {
        Config::default().auth.expect("Auth configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct KnowledgeBase {
    pub api_url: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Config::default()
            .knowledge_base
            .expect("Knowledge base configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gallery {
    pub extra_images: Vec<String>,
}

impl Default for Gallery {
    fn default() -> Self {
        Config::default().gallery.expect("Gallery configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct About {
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Member {
    pub full_name: String,
    pub member_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.catalog.is_some());
        assert!(cfg.webserver.is_some());
        assert!(cfg.auth.is_some());
        assert!(cfg.knowledge_base.is_some());
        assert!(cfg.gallery.is_some());
        assert!(cfg.about.is_none());
    }

    #[test]
    fn default_auth_config() {
        let cfg = Auth::default();
        assert!(cfg.token_secret.is_none());
        assert_eq!(cfg.access_token_ttl, Duration::from_secs(15 * 60));
        assert_eq!(cfg.refresh_token_ttl, Duration::from_secs(7 * 24 * 60 * 60));
        assert_eq!(cfg.demo_email, "demo@demo.com");
    }

    #[test]
    fn default_gallery_has_three_placeholders() {
        assert_eq!(Gallery::default().extra_images.len(), 3);
    }
}
