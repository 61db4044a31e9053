use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use animaqu_common::environment::get_env_var_or;
use animaqu_common::environment::variables::{WEB_HOST, WEB_PORT};
use animaqu_common::AccountRoles;
use animaqu_content_api::{HttpAnimeApi, HttpComicApi};
use animaqu_db::DbPool;
use animaqu_web::{
    admin_config, anime_config, comic_config, community_config, json_config, AnimaquRootSpan,
    SnapshotHub,
};
use anyhow::{Context, Result};
use tracing_actix_web::TracingLogger;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Bind the HTTP server. The returned [Server] runs until Actix-Web receives a shutdown signal.
pub fn initialize_web_server(
    pool: DbPool,
    roles: AccountRoles,
    anime_api: HttpAnimeApi,
    comic_api: HttpComicApi,
) -> Result<Server> {
    let address = get_address()?;

    // Shared by every worker so a publish reaches subscribers on all of them.
    let hub = web::Data::new(SnapshotHub::new());
    let roles = web::Data::new(roles);

    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::<AnimaquRootSpan>::new())
            .app_data(json_config())
            .app_data(web::Data::new(pool.clone()))
            .app_data(hub.clone())
            .app_data(roles.clone())
            .app_data(web::Data::new(anime_api.clone()))
            .app_data(web::Data::new(comic_api.clone()))
            .configure(anime_config::<HttpAnimeApi>)
            .configure(comic_config::<HttpComicApi>)
            .configure(community_config)
            .configure(admin_config)
    })
    .bind(&address)
    .with_context(|| format!("Failed to bind the web server to {}.", address))?
    .run();
    Ok(http_server)
}

fn get_address() -> Result<String> {
    let host: String = get_env_var_or(WEB_HOST, String::from(DEFAULT_HOST))?;
    let port: u16 = get_env_var_or(WEB_PORT, DEFAULT_PORT)?;
    Ok(format!("{}:{}", host, port))
}
