use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{config::Config, users::ConfiguredCredentials};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "imathiatour", about = "ImathiaTour API server", version)]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub async fn run(args: Args) -> Result<()> {
    let cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;

    let catalog = imt_catalog::Catalog::try_load_from_file(&cfg.catalog.seed_file)?;
    let entities = imt_gateways::WikidataGateway::new(
        cfg.knowledge_base.api_url.clone(),
        cfg.knowledge_base.timeout,
    )?;
    let credentials =
        ConfiguredCredentials::new(cfg.auth.demo_email.clone(), cfg.auth.demo_password.clone());

    let web_cfg = imt_webserver::Cfg {
        token_secret: cfg.auth.token_secret.clone(),
        access_token_ttl: cfg.auth.access_token_ttl.try_into()?,
        refresh_token_ttl: cfg.auth.refresh_token_ttl.try_into()?,
        extra_images: cfg.gallery.extra_images.clone(),
        team: cfg
            .about
            .members
            .iter()
            .map(|member| imt_webserver::TeamMember {
                full_name: member.full_name.clone(),
                member_id: member.member_id.clone(),
            })
            .collect(),
    };

    imt_webserver::run(
        catalog,
        Box::new(credentials),
        Box::new(entities),
        cfg.webserver.enable_cors,
        web_cfg,
        VERSION,
    )
    .await;
    Ok(())
}
