use imt_core::{
    entities::url::Url,
    gateways::{credentials::CredentialStore, entity::EntityGateway},
};
use rocket::{config::Config as RocketCfg, Build, Rocket, Route};
use time::Duration;

pub mod api;
mod guards;
pub mod jwt;


/// A team member listed by the `/about` endpoint.
#[derive(Debug, Clone)]
pub struct TeamMember {
    pub full_name: String,
    pub member_id: String,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Signing secret for issued tokens. A random secret is generated
    /// when none is configured.
    pub token_secret: Option<String>,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    /// Placeholder images appended to every POI detail view.
    pub extra_images: Vec<Url>,
    pub team: Vec<TeamMember>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    credentials: Box<dyn CredentialStore + Send + Sync>,
    entities: Box<dyn EntityGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    catalog: imt_catalog::Catalog,
    gateways: Gateways,
) -> Rocket<Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways {
        credentials,
        entities,
    } = gateways;

    info!(
        "Serving {} categories with {} POIs",
        catalog.category_count(),
        catalog.poi_count()
    );

    let jwt_state = jwt::JwtState::new(
        cfg.token_secret.as_deref(),
        cfg.access_token_ttl,
        cfg.refresh_token_ttl,
    );

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(catalog)
        .manage(guards::Credentials(credentials))
        .manage(guards::Entities(entities))
        .manage(jwt_state)
        .manage(cfg)
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    catalog: imt_catalog::Catalog,
    credentials: Box<dyn CredentialStore + Send + Sync>,
    entities: Box<dyn EntityGateway + Send + Sync>,
    enable_cors: bool,
    cfg: Cfg,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let gateways = Gateways {
        credentials,
        entities,
    };

    let instance = rocket_instance(options, catalog, gateways);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
