use std::net::IpAddr;

use clap::{Args, Parser, Subcommand};
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "daybook", about = "Goals, todos and a daily journal behind a JSON api")]
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
    #[arg(long, env = "DAYBOOK_SECRET_KEY", hide_env_values = true, help = "Secret used to sign tokens")]
    pub(crate) secret_key: String,

    #[arg(
        long,
        default_value_t = 300,
        value_parser = clap::value_parser!(i64).range(1..),
        help = "Lifetime of access tokens in seconds"
    )]
    pub(crate) access_token_lifetime: i64,

    #[arg(
        long,
        default_value_t = 86400,
        value_parser = clap::value_parser!(i64).range(1..),
        help = "Lifetime of refresh tokens in seconds"
    )]
    pub(crate) refresh_token_lifetime: i64,

    #[arg(long, value_delimiter = ',', help = "Origins allowed to call the api")]
    pub(crate) origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[arg(long, env = "DAYBOOK_DATABASE_URL", help = "sqlite:// or postgresql:// url")]
    pub(crate) database_url: Url,

    #[command(flatten)]
    pub(crate) db: Db,

    #[command(flatten)]
    pub(crate) auth: Auth,

    #[arg(long, help = "If set it is possible to delete a user and all their data")]
    pub(crate) deletable: bool,

    #[arg(long = "sentry-dsn", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(long, default_value = "dev", help = "Set the environment used by sentry")]
    pub(crate) env: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from([
            "daybook",
            "run",
            "--database-url",
            "sqlite://daybook.sqlite?mode=rwc",
            "--secret-key",
            "secret",
            "--origins",
            "http://localhost:5173,https://daybook.example.com",
            "--deletable",
        ])
        .unwrap();
        let Commands::Run(run) = cli.command;
        assert_eq!(run.auth.access_token_lifetime, 300);
        assert_eq!(run.auth.refresh_token_lifetime, 86400);
        assert_eq!(run.auth.origins.len(), 2);
        assert!(run.deletable);
        assert_eq!(run.env, "dev");
        assert_eq!(run.database_url.scheme(), "sqlite");
    }

    #[test]
    fn test_lifetime_must_be_positive() {
        let res = Cli::try_parse_from([
            "daybook",
            "run",
            "--database-url",
            "sqlite::memory:",
            "--secret-key",
            "secret",
            "--access-token-lifetime",
            "0",
        ]);
        assert!(res.is_err());
    }
}
