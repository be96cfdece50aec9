// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! OpenAPI CLI - command-line access to the cloud-management OpenAPI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use openapi_client::config::DEFAULT_API_VERSION;
use openapi_client::{AuthContext, Client, ClientConfig};
use tracing_subscriber::EnvFilter;
use url::Url;

mod commands;
mod output;

use commands::{AuditCommand, EdgeGatewayCommand, IpSpaceCommand, RawCommand};

#[derive(Parser)]
#[command(
    name = "openapi",
    version,
    about = "Cloud-management OpenAPI CLI",
    long_about = "Read and manage OpenAPI entities from the command line"
)]
struct Cli {
    /// Base URL of the API endpoint
    #[arg(short = 'U', long, global = true, env = "OPENAPI_URL")]
    url: Option<String>,

    /// Bearer token
    #[arg(short, long, global = true, env = "OPENAPI_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// API version sent in the Accept header
    #[arg(long, global = true, env = "OPENAPI_API_VERSION", default_value = DEFAULT_API_VERSION)]
    api_version: String,

    /// Items per page for collection reads (0 leaves it to the server)
    #[arg(long, global = true, env = "OPENAPI_PAGE_SIZE")]
    page_size: Option<u32>,

    /// Skip TLS certificate verification
    #[arg(short = 'k', long, global = true, env = "OPENAPI_INSECURE")]
    insecure: bool,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generic access to any OpenAPI endpoint
    Raw {
        #[command(subcommand)]
        command: RawCommand,
    },

    /// Manage IP Spaces
    #[command(alias = "ipspace")]
    IpSpace {
        #[command(subcommand)]
        command: IpSpaceCommand,
    },

    /// Manage edge gateways and their firewall groups
    #[command(alias = "gw")]
    EdgeGateway {
        #[command(subcommand)]
        command: EdgeGatewayCommand,
    },

    /// Query the audit trail
    Audit(AuditCommand),
}

impl Cli {
    fn build_client(&self) -> Result<Client> {
        let url = self
            .url
            .as_deref()
            .context("No endpoint configured. Use --url or set OPENAPI_URL")?;
        let token = self
            .token
            .as_deref()
            .context("No token configured. Use --token or set OPENAPI_TOKEN")?;
        let base_url = Url::parse(url).with_context(|| format!("invalid URL: {}", url))?;

        let mut config = ClientConfig::new(base_url, AuthContext::bearer(token))
            .with_api_version(self.api_version.clone())
            .with_insecure(self.insecure);
        if let Some(page_size) = self.page_size {
            config = config.with_page_size((page_size > 0).then_some(page_size));
        }

        tracing::debug!(url = %url, api_version = %self.api_version, "Using endpoint");
        Ok(Client::new(config)?)
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("openapi_cli=debug,openapi_client=debug,openapi_pagination=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("openapi_cli=info,openapi_client=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let client = cli.build_client()?;
    match &cli.command {
        Commands::Raw { command } => command.run(&client).await,
        Commands::IpSpace { command } => command.run(&client, cli.json).await,
        Commands::EdgeGateway { command } => command.run(&client, cli.json).await,
        Commands::Audit(command) => command.run(&client, cli.json).await,
    }
}
