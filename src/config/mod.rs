use anyhow::{anyhow, Context, Result};
use imt_core::entities::EmailAddress;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};
use url::Url;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "imathiatour.toml";

const ENV_NAME_TOKEN_SECRET: &str = "JWT_SECRET";

pub struct Config {
    pub catalog: Catalog,
    pub webserver: WebServer,
    pub auth: Auth,
    pub knowledge_base: KnowledgeBase,
    pub gallery: Gallery,
    pub about: About,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(secret) = env::var(ENV_NAME_TOKEN_SECRET) {
            cfg.auth.token_secret = Some(secret);
        }
        Ok(cfg)
    }
}

pub struct Catalog {
    /// JSON seed file the in-memory catalog is built from.
    pub seed_file: PathBuf,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Auth {
    pub token_secret: Option<String>,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    pub demo_email: EmailAddress,
    pub demo_password: String,
}

pub struct KnowledgeBase {
    pub api_url: String,
    pub timeout: Duration,
}

pub struct Gallery {
    pub extra_images: Vec<Url>,
}

pub struct About {
    pub members: Vec<Member>,
}

pub struct Member {
    pub full_name: String,
    pub member_id: String,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;

    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            catalog,
            webserver,
            auth,
            knowledge_base,
            gallery,
            about,
        } = from;

        let catalog = Catalog {
            seed_file: catalog.unwrap_or_default().seed_file,
        };
        let webserver = WebServer {
            enable_cors: webserver.unwrap_or_default().cors,
        };

        let raw_auth = auth.unwrap_or_default();
        let auth = Auth {
            token_secret: raw_auth.token_secret,
            access_token_ttl: raw_auth.access_token_ttl,
            refresh_token_ttl: raw_auth.refresh_token_ttl,
            demo_email: raw_auth
                .demo_email
                .parse()
                .map_err(|_| anyhow!("Invalid demo e-mail address"))?,
            demo_password: raw_auth.demo_password,
        };

        let raw_kb = knowledge_base.unwrap_or_default();
        let knowledge_base = KnowledgeBase {
            api_url: raw_kb.api_url,
            timeout: raw_kb.timeout,
        };

        let gallery = Gallery {
            extra_images: gallery
                .unwrap_or_default()
                .extra_images
                .iter()
                .map(|url| {
                    url.parse()
                        .with_context(|| format!("Invalid gallery image URL: {url}"))
                })
                .collect::<Result<_>>()?,
        };

        let about = About {
            members: about
                .unwrap_or_default()
                .members
                .into_iter()
                .map(|member| Member {
                    full_name: member.full_name,
                    member_id: member.member_id,
                })
                .collect(),
        };

        Ok(Self {
            catalog,
            webserver,
            auth,
            knowledge_base,
            gallery,
            about,
        })
    }
}
