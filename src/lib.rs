//! Typed client for a remote compressed NFT service.
//!
//! [`CompressedNftClient`] turns strongly-typed parameters into the service's
//! snake_case wire bodies, dispatches one HTTP call per operation and unwraps
//! the `{ "result": ... }` envelope.

pub mod case;
pub mod client;
pub mod config;
pub mod depth_size;
pub mod dispatch;
pub mod error;
pub mod retry;
pub mod types;
pub mod wire;

pub use client::{
    BurnParams, CompressedNftClient, CreateMerkleTreeParams, MintParams, ReadAllParams,
    ReadParams, TransferManyParams, TransferParams,
};
pub use config::{ClientConfig, TransportConfig};
pub use dispatch::{ApiRequest, HttpDispatcher, HttpMethod, RequestDispatcher};
pub use error::{ClientError, TransportError};
pub use types::{DepthSizePair, Network, Nft};
