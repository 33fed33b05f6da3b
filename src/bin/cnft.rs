use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cnft_client::{
    config::{load_config_from_path, FileConfig},
    BurnParams, ClientConfig, CompressedNftClient, CreateMerkleTreeParams, DepthSizePair,
    MintParams, Network, Nft, ReadAllParams, ReadParams, TransferManyParams, TransferParams,
};
use serde::Serialize;
use term_table::row::Row;
use term_table::table_cell::{Alignment as CellAlignment, TableCell};
use term_table::{Table, TableStyle};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compressed NFT CLI - manage Merkle trees and compressed NFTs over the service API
#[derive(Parser, Debug)]
#[command(name = "cnft")]
#[command(about = "Compressed NFT CLI", long_about = None)]
struct Cli {
    /// API key sent with every request
    #[arg(long, env = "CNFT_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Default network for commands that do not pass --network
    #[arg(long, env = "CNFT_NETWORK")]
    network: Option<Network>,

    /// Path to a TOML config file (network and transport settings)
    #[arg(long = "config", env = "CNFT_CONFIG_PATH")]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a Merkle tree account for compressed NFTs
    CreateTree {
        #[arg(long)]
        wallet_address: String,
        #[arg(long)]
        max_depth: u32,
        #[arg(long)]
        max_buffer_size: u32,
        #[arg(long)]
        canopy_depth: u32,
        #[arg(long)]
        fee_payer: Option<String>,
    },

    /// Mint a compressed NFT into an existing tree
    Mint {
        #[arg(long)]
        creator_wallet: String,
        #[arg(long)]
        merkle_tree: String,
        #[arg(long)]
        metadata_uri: String,
        /// Make the creator a delegate authority of the tree
        #[arg(long)]
        delegate_authority: bool,
        #[arg(long)]
        collection_address: Option<String>,
        #[arg(long)]
        max_supply: Option<u64>,
        #[arg(long)]
        primary_sale_happened: bool,
        #[arg(long)]
        mutable: bool,
        #[arg(long)]
        receiver: Option<String>,
        #[arg(long)]
        fee_payer: Option<String>,
    },

    /// Transfer one compressed NFT
    Transfer {
        #[arg(long)]
        mint: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },

    /// Transfer several compressed NFTs to the same receiver in one request
    TransferMany {
        /// Repeat for every NFT in the batch
        #[arg(long = "mint", required = true)]
        mints: Vec<String>,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },

    /// Burn a compressed NFT
    Burn {
        #[arg(long)]
        wallet_address: String,
        #[arg(long)]
        mint: String,
    },

    /// Read a single compressed NFT
    Read {
        #[arg(long)]
        mint: String,
    },

    /// List every compressed NFT held by a wallet
    ReadAll {
        #[arg(long)]
        wallet_address: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(network = %config.network, base_url = %config.transport.base_url, "Configuration loaded");

    let client = CompressedNftClient::new(config).context("Creating HTTP client")?;
    run(&client, cli.command).await
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy()
        .add_directive("cnft_client=info".parse()?)
        .add_directive("cnft=info".parse()?);

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}

/// Resolve configuration with priority: CLI/env -> config file -> defaults
fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let file = match &cli.config_path {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Loading config file {path}"))?,
        None => FileConfig::default(),
    };

    let mut config = ClientConfig::from_file(cli.api_key.clone(), file);
    if let Some(network) = cli.network {
        config.network = network;
    }
    Ok(config)
}

async fn run(client: &CompressedNftClient, command: Commands) -> Result<()> {
    match command {
        Commands::CreateTree {
            wallet_address,
            max_depth,
            max_buffer_size,
            canopy_depth,
            fee_payer,
        } => {
            let response = client
                .create_merkle_tree(CreateMerkleTreeParams {
                    network: None,
                    wallet_address,
                    max_depth_size_pair: DepthSizePair::new(max_depth, max_buffer_size),
                    canopy_depth,
                    fee_payer,
                })
                .await?;
            print_json(&response)
        }
        Commands::Mint {
            creator_wallet,
            merkle_tree,
            metadata_uri,
            delegate_authority,
            collection_address,
            max_supply,
            primary_sale_happened,
            mutable,
            receiver,
            fee_payer,
        } => {
            // Flags are only ever sent as `true`; absent flags use the service defaults.
            let response = client
                .mint(MintParams {
                    network: None,
                    creator_wallet,
                    merkle_tree,
                    metadata_uri,
                    is_delegate_authority: delegate_authority.then_some(true),
                    collection_address,
                    max_supply,
                    primary_sale_happened: primary_sale_happened.then_some(true),
                    is_mutable: mutable.then_some(true),
                    receiver,
                    fee_payer,
                })
                .await?;
            print_json(&response)
        }
        Commands::Transfer { mint, from, to } => {
            let response = client
                .transfer(TransferParams {
                    network: None,
                    mint,
                    from_address: from,
                    to_address: to,
                })
                .await?;
            print_json(&response)
        }
        Commands::TransferMany { mints, from, to } => {
            let response = client
                .transfer_many(TransferManyParams {
                    network: None,
                    mints,
                    from_address: from,
                    to_address: to,
                })
                .await?;
            print_json(&response)
        }
        Commands::Burn {
            wallet_address,
            mint,
        } => {
            let response = client
                .burn(BurnParams {
                    network: None,
                    wallet_address,
                    mint,
                })
                .await?;
            print_json(&response)
        }
        Commands::Read { mint } => {
            let nft = client.read(ReadParams { network: None, mint }).await?;
            print_json(&nft)
        }
        Commands::ReadAll { wallet_address } => {
            let nfts = client
                .read_all(ReadAllParams {
                    network: None,
                    wallet_address: wallet_address.clone(),
                })
                .await?;
            println!("{}", render_nft_table(&wallet_address, &nfts));
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_nft_table(wallet_address: &str, nfts: &[Nft]) -> String {
    let mut table = Table::new();
    table.style = TableStyle::extended();

    table.add_row(Row::new(vec![TableCell::builder(format!(
        "{} compressed NFTs held by {}",
        nfts.len(),
        wallet_address
    ))
    .col_span(3)
    .alignment(CellAlignment::Center)
    .build()]));

    table.add_row(Row::new(vec![
        TableCell::builder("Mint").build(),
        TableCell::builder("Name").build(),
        TableCell::builder("Merkle Tree").build(),
    ]));

    for nft in nfts {
        table.add_row(Row::new(vec![
            TableCell::builder(nft.mint.clone()).build(),
            TableCell::builder(nft.name.clone()).build(),
            TableCell::builder(nft.merkle_tree.clone().unwrap_or_else(|| "-".to_string())).build(),
        ]));
    }

    table.render()
}
