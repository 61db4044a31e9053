mod web_initialization;

extern crate dotenv;

use crate::web_initialization::initialize_web_server;
use animaqu_common::environment::{
    get_env_var,
    variables::{LOG_DIR, LOG_FILTER},
};
use animaqu_common::AccountRoles;
use animaqu_content_api::{ContentApiSettings, HttpAnimeApi, HttpComicApi};
use animaqu_db::{build_pool, migrate};
use anyhow::{Context, Result};
use dotenv::dotenv;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    // The guard flushes the log file on shutdown, so it has to live as long as main.
    let _log_guard = initialize_logging();

    info!("Initializing Animaqu...");

    info!("Initializing database connection pool...");
    let pool = build_pool()?;
    let connection = pool
        .get()
        .context("Could not retrieve a connection from the connection pool.")?;
    info!("Migrating the database...");
    migrate(connection)?;

    let roles = AccountRoles::from_environment()?;
    info!("{} account(s) have an administrative role.", roles.len());

    info!("Preparing the content API clients...");
    let settings = ContentApiSettings::from_environment()?;
    let anime_api = HttpAnimeApi::new(&settings)?;
    let comic_api = HttpComicApi::new(&settings)?;

    info!("Starting up web server...");
    let http_server = initialize_web_server(pool, roles, anime_api, comic_api)?;

    info!("Animaqu started!");
    http_server.await?;

    info!("Shutting Animaqu down.");
    Ok(())
}

/// Set up the logging framework, reading filter configuration from the environment variable or
/// defaulting to warning logs and above globally if the filter isn't specified. Logs go to a
/// daily rolling file when a log directory is configured, and to stdout otherwise.
fn initialize_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_env(LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::WARN.into()));

    match get_env_var(LOG_DIR) {
        Ok(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "animaqu.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        Err(_) => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
    }
}
