use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "lectern", about = "Serve the course marketplace")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Db {
    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct Auth {
    #[arg(long, env = "LECTERN_JWT_SECRET", help = "Shared secret of the identity provider (HS256)")]
    pub(crate) jwt_secret: String,

    #[arg(long = "aud", value_delimiter = ',', required = true)]
    pub(crate) audience: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub(crate) origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[command(flatten)]
    pub(crate) auth: Auth,

    #[arg(
        short,
        long,
        help = "The url where the catalog files are stored, the bundled catalog is used if missing"
    )]
    pub(crate) catalog: Option<Url>,

    #[arg(long = "sentry-dsn", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(
        long,
        default_value = "dev",
        help = "Set the environment used by sentry and prometheus"
    )]
    pub(crate) env: String,

    #[command(flatten)]
    pub(crate) db: Db,
}
