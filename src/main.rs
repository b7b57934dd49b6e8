use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use prk_suggest::client::FallbackSuggester;
use prk_suggest::config::{self, Config};
use prk_suggest::server::{serve, suggest_router};
use prk_suggest::{CatalogStore, SuggestionService};

/// Fuzzy drug catalog suggestions for prescription autocomplete
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Configuration file (defaults to ~/.config/prk-suggest/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON catalog file (overrides [catalog] path; embedded sample when unset)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP suggestion server
    Serve {
        /// Address to listen on (overrides [server] bind)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print suggestions for a query as JSON
    Search {
        query: String,

        /// Suggestion server to ask first (overrides [client] endpoint)
        #[arg(long)]
        remote: Option<String>,

        /// Maximum number of suggestions (overrides [search] limit)
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    init_logging(match args.command {
        Command::Serve { .. } => "info",
        Command::Search { .. } => "warn",
    });

    let config_result = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    if let Some(warning) = &config_result.warning {
        log::warn!("{}, using defaults", warning);
    }

    let mut config = config_result.config;
    if let Some(path) = args.catalog {
        config.catalog.path = Some(path);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match args.command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            runtime.block_on(run_server(&config))
        }
        Command::Search {
            query,
            remote,
            limit,
        } => {
            if let Some(remote) = remote {
                config.client.endpoint = Some(remote);
            }
            if let Some(limit) = limit {
                config.search.limit = limit;
            }
            runtime.block_on(run_search(&config, &query))
        }
    }
}

/// Log to stderr; RUST_LOG overrides the default level
fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            let datetime = chrono::Local::now();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn build_service(config: &Config) -> SuggestionService {
    let store = CatalogStore::from_config(&config.catalog);
    SuggestionService::new(Arc::new(store), &config.search)
}

async fn run_server(config: &Config) -> Result<()> {
    let service = build_service(config);

    // Warm the catalog so a broken source shows up in the log at startup;
    // requests keep retrying the load until it succeeds
    if let Err(e) = service.store().snapshot() {
        log::warn!("Starting without a catalog: {}", e);
    }

    let listener = TcpListener::bind(&config.server.bind)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", config.server.bind))?;

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(shutdown.clone()));

    serve(listener, suggest_router(service, &config.server), shutdown).await?;
    Ok(())
}

async fn cancel_on_ctrl_c(token: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            log::info!("Shutdown requested");
            token.cancel();
        }
        Err(e) => log::error!("Failed to listen for Ctrl+C: {}", e),
    }
}

async fn run_search(config: &Config, query: &str) -> Result<()> {
    let suggester = FallbackSuggester::from_config(&config.client, build_service(config))?;
    let suggestions = suggester.suggest(query).await?;

    println!("{}", serde_json::to_string_pretty(&suggestions)?);
    Ok(())
}
