use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use moviesearch::config::{Config, ConfigStore};
use moviesearch::gateway::HttpGateway;
use moviesearch::logging::init_tracing;
use moviesearch::proxy::ProxyServer;
use moviesearch::query::{MovieQuery, RetryPolicy};
use moviesearch::ui::{MovieList, SearchBar, SearchStore};

const EMPTY_PROMPT: &str = "Search for the movie title!";

#[derive(Debug, Parser)]
#[command(name = "moviesearch", version, about = "Search the OMDb movie database by title")]
struct Cli {
    /// Config file (default: ~/.config/moviesearch/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the search endpoint (GET /api/movies?title=)
    Serve {
        /// Bind address, overrides server.bind_addr
        #[arg(long)]
        bind: Option<String>,
    },
    /// Search through a running endpoint and print the results
    Search {
        title: String,
        /// Endpoint base URL, overrides server.base_url
        #[arg(long)]
        server: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path).context("loading configuration")?;

    match cli.command {
        Command::Serve { bind } => serve(config, path, bind).await,
        Command::Search { title, server } => search(config, title, server).await,
    }
}

async fn serve(mut config: Config, path: PathBuf, bind: Option<String>) -> anyhow::Result<()> {
    if let Some(bind) = bind {
        config.server.bind_addr = bind;
    }

    let store = ConfigStore::new(config, path);
    let mut server = ProxyServer::new(store.clone())?;
    let (addr, base_url) = server.try_bind(&store).await?;
    tracing::info!(%addr, %base_url, "Serving movie search");

    server.run().await?;
    Ok(())
}

async fn search(config: Config, title: String, server: Option<String>) -> anyhow::Result<()> {
    let base_url = server.unwrap_or_else(|| config.server.base_url.clone());
    let gateway = HttpGateway::new(base_url, &config.defaults)?;

    let store = SearchStore::new();
    let query = MovieQuery::new(
        Arc::new(gateway),
        store.clone(),
        RetryPolicy::from(&config.defaults),
    );

    let bar = SearchBar::new(store.clone());
    bar.on_input(title);
    bar.on_submit();

    let result = query.settled().await;
    let message = store.select(|s| s.message.clone());

    match MovieList::from_query(&result, &message) {
        MovieList::Movies(items) => {
            for item in items {
                println!("{} ({})", item.title, item.year);
                println!("  details: {}", item.detail_href());
                if item.has_poster() {
                    println!("  poster:  {}", item.poster.src);
                }
            }
        }
        MovieList::Message(message) => println!("{}", message),
        MovieList::Empty => println!("{}", EMPTY_PROMPT),
    }

    Ok(())
}
