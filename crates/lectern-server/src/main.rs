#[macro_use]
extern crate diesel_migrations;

use crate::db::migration;
use crate::opt::{Commands, Db, Run};
use anyhow::{Context, Result};
use axum::serve;
use clap::Parser;
use lectern_config::catalog::Catalog;
use lectern_db::sea_orm::{ConnectOptions, Database};
use lectern_utils::loader::Loader;
use lectern_utils::net::create_listener;
use lectern_utils::tracing::TracingConfig;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use url::Url;

mod app;
mod auth;
mod data;
mod db;
mod opt;
mod permissions;
mod routes;
mod user;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

async fn load_catalog(url: Option<&Url>) -> Result<Catalog> {
    let Some(url) = url else {
        tracing::info!("no catalog url given, using bundled catalog");
        return Ok(Catalog::bundled()?);
    };
    let loader = Loader::from_url(url)?;
    lectern_config::catalog::load(loader)
        .await
        .with_context(|| format!("failed to load catalog from {url}"))
}

async fn run(o: Run) -> Result<()> {
    let _guard = lectern_utils::tracing::setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(o.sentry_dsn.clone())
            .env(o.env.clone())
            .build(),
    )?;

    let db_url: Url = env::var("DATABASE_URL")
        .context("DATABASE_URL is not set")?
        .parse()
        .context("DATABASE_URL is not a valid url")?;

    let migrations = migration(&db_url)?;
    tracing::info!(applied = migrations.len(), "database migrated");

    let catalog = load_catalog(o.catalog.as_ref()).await?;

    let seaorm_pool = Database::connect(build_connect_options(&o.db, db_url)).await?;
    data::catalog::seed(&seaorm_pool, &catalog).await?;

    let app = app::create_app(o.auth, seaorm_pool)?;

    let listener = create_listener((o.host, o.port), (DEFAULT_HOST, DEFAULT_PORT)).await?;
    tracing::info!(address = %listener.local_addr()?, "listening");
    serve(listener, app).await?;
    Ok(())
}

fn build_connect_options(db_options: &Db, db_url: Url) -> ConnectOptions {
    let mut seaorm_pool_options = ConnectOptions::new(db_url);
    if let Some(min_connections) = db_options.db_min_connections {
        seaorm_pool_options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        seaorm_pool_options.max_connections(max_connections);
    }
    seaorm_pool_options.sqlx_logging_level(log::LevelFilter::Debug);
    seaorm_pool_options
}

fn main() -> Result<()> {
    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
