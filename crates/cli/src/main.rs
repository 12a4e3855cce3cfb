//! Command Line Interface for the Ref Finance pool fetcher.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use ref_pools_domain::{DEFAULT_PAGE_LIMIT, PoolIdent};
use ref_pools_protocols::{NearRpcClient, Network, PoolFetcher, RefPoolFetcher, RpcConfig};
use serde::Serialize;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ref-pools")]
#[command(about = "Fetch liquidity pools from the Ref Finance exchange", long_about = None)]
struct Cli {
    /// NEAR network (mainnet or testnet)
    #[arg(long, global = true, default_value = "mainnet")]
    network: Network,

    /// JSON-RPC endpoint, overrides REF_RPC_URL
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Exchange contract account, overrides REF_CONTRACT_ID
    #[arg(long, global = true)]
    contract_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every pool and group them by kind
    All,
    /// Fetch one page of pools
    Page {
        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: u64,

        /// Pools per page
        #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
        per_page: u64,
    },
    /// Fetch a single pool
    Pool {
        /// Pool id
        #[arg(long)]
        id: String,
    },
    /// Fetch stable-swap pools by id
    Stable {
        /// Comma-separated pool ids
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,
    },
    /// Fetch rated-swap pools by id
    Rated {
        /// Comma-separated pool ids
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,
    },
    /// Print the number of pools on the exchange
    Count,
}

/// Resolves the RPC configuration: flags, then environment, then network defaults.
fn resolve_rpc_config(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> RpcConfig {
    let mut config = RpcConfig::for_network(cli.network);
    if let Some(url) = cli.rpc_url.clone().or_else(|| lookup("REF_RPC_URL")) {
        config.rpc_url = url;
    }
    if let Some(contract_id) = cli.contract_id.clone().or_else(|| lookup("REF_CONTRACT_ID")) {
        config.contract_id = contract_id;
    }
    config
}

fn pool_idents(ids: &[String]) -> Vec<PoolIdent> {
    ids.iter().map(|id| PoolIdent::from(id.as_str())).collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_rpc_config(&cli, |key| env::var(key).ok());
    info!(
        network = %cli.network,
        rpc_url = %config.rpc_url,
        contract = %config.contract_id,
        "Using exchange contract"
    );

    let client = NearRpcClient::new(config).context("failed to build RPC client")?;
    let fetcher = RefPoolFetcher::new(client);

    match &cli.command {
        Commands::All => {
            let pools = fetcher
                .fetch_all_ref_pools()
                .await
                .context("failed to fetch all pools")?;
            print_json(&pools)?;
        }
        Commands::Page { page, per_page } => {
            let pools = fetcher
                .get_ref_pools(*page, *per_page)
                .await
                .with_context(|| format!("failed to fetch page {page}"))?;
            print_json(&pools)?;
        }
        Commands::Pool { id } => {
            let pool = fetcher
                .get_pool(&PoolIdent::from(id.as_str()))
                .await
                .with_context(|| format!("failed to fetch pool {id}"))?;
            print_json(&pool)?;
        }
        Commands::Stable { ids } => {
            let pools = fetcher
                .get_stable_pools(&pool_idents(ids))
                .await
                .context("failed to fetch stable pools")?;
            print_json(&pools)?;
        }
        Commands::Rated { ids } => {
            let pools = fetcher
                .get_rated_pools(&pool_idents(ids))
                .await
                .context("failed to fetch rated pools")?;
            print_json(&pools)?;
        }
        Commands::Count => {
            let total = fetcher
                .get_total_pools()
                .await
                .context("failed to fetch pool count")?;
            println!("{total}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ref-pools").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_config_defaults_to_network() {
        let cli = parse(&["--network", "testnet", "count"]);
        let config = resolve_rpc_config(&cli, |_| None);

        assert_eq!(config.rpc_url, "https://rpc.testnet.near.org");
        assert_eq!(config.contract_id, "ref-finance-101.testnet");
    }

    #[test]
    fn test_flags_override_environment() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("REF_RPC_URL", "https://env.example"),
            ("REF_CONTRACT_ID", "env.near"),
        ]);
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let cli = parse(&["count"]);
        let config = resolve_rpc_config(&cli, lookup);
        assert_eq!(config.rpc_url, "https://env.example");
        assert_eq!(config.contract_id, "env.near");

        let cli = parse(&["count", "--rpc-url", "https://flag.example"]);
        let config = resolve_rpc_config(&cli, lookup);
        assert_eq!(config.rpc_url, "https://flag.example");
        assert_eq!(config.contract_id, "env.near");
    }

    #[test]
    fn test_ids_are_comma_separated() {
        let cli = parse(&["stable", "--ids", "1910,79"]);
        match cli.command {
            Commands::Stable { ids } => {
                assert_eq!(
                    pool_idents(&ids),
                    vec![PoolIdent::from("1910"), PoolIdent::from("79")]
                );
            }
            _ => panic!("expected stable command"),
        }
    }

    #[test]
    fn test_page_defaults() {
        let cli = parse(&["page"]);
        match cli.command {
            Commands::Page { page, per_page } => {
                assert_eq!(page, 1);
                assert_eq!(per_page, DEFAULT_PAGE_LIMIT);
            }
            _ => panic!("expected page command"),
        }
    }
}
