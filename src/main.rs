use std::process::ExitCode;

use tracing::{Level, error};

mod config;
mod core;
mod error;
mod fqdn;
mod providers;
mod reconcile;

use config::{Config, USAGE};
use providers::cloudflare::client::{CloudflareClient, CloudflareConfig, DEFAULT_API_URL};
use reconcile::Outcome;

/// Fixed source tag carried on every log line.
pub const LOG_TARGET: &str = "cloudflare-ddns";

/// Exit statuses consumed by the invoking scheduler, which branches on
/// each of them.
#[derive(Debug, Clone, Copy)]
enum AgentExitCode {
    /// The record was replaced and the write was verified.
    Updated = 0,
    /// Any lookup, transport, or verification failure.
    Failed = 1,
    /// The record already matched the candidate address.
    NotNeeded = 2,
    /// Bad invocation; usage was printed.
    InvalidArguments = 3,
}

impl From<AgentExitCode> for ExitCode {
    fn from(code: AgentExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            return AgentExitCode::InvalidArguments.into();
        }
    };

    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    // Transport is pinned to the same IP family as the record type, so an
    // AAAA run reaches the API over IPv6 and an A run over IPv4.
    let client = match CloudflareClient::new(CloudflareConfig {
        api_url: DEFAULT_API_URL.to_string(),
        api_token: config.api_token.clone(),
        bind_family: Some(config.family),
    }) {
        Ok(client) => client,
        Err(e) => {
            error!(target: LOG_TARGET, "failed to build API client: {e}");
            return AgentExitCode::Failed.into();
        }
    };

    match reconcile::run(&client, &config).await {
        Ok(Outcome::Updated) => AgentExitCode::Updated.into(),
        Ok(Outcome::NotNeeded) => AgentExitCode::NotNeeded.into(),
        Err(e) => {
            error!(target: LOG_TARGET, "{e}");
            AgentExitCode::Failed.into()
        }
    }
}
