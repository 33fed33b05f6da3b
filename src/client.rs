use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use crate::case::to_snake_case_keys;
use crate::config::consts::{
    PATH_BURN, PATH_CREATE_TREE, PATH_MINT, PATH_READ, PATH_READ_ALL, PATH_TRANSFER,
    PATH_TRANSFER_MANY,
};
use crate::config::ClientConfig;
use crate::depth_size::is_valid_depth_size_pair;
use crate::dispatch::{ApiRequest, HttpDispatcher, HttpMethod, RequestDispatcher};
use crate::error::{ClientError, TransportError};
use crate::types::{
    BurnResponse, CreateMerkleTreeResponse, DepthSizePair, MintResponse, Network, Nft,
    TransferManyResponse, TransferResponse,
};
use crate::wire::{Inclusion, WireBody};

/// Where the typed payload sits inside the response envelope.
const RESULT: &str = "/result";
const RESULT_NFTS: &str = "/result/nfts";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateMerkleTreeParams {
    pub network: Option<Network>,
    pub wallet_address: String,
    pub max_depth_size_pair: DepthSizePair,
    pub canopy_depth: u32,
    pub fee_payer: Option<String>,
}

/// Mint parameters. The optional fields are sent only when truthy, so
/// `Some(false)`, `Some(0)` and `Some("")` produce the same request as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MintParams {
    pub network: Option<Network>,
    pub creator_wallet: String,
    pub merkle_tree: String,
    pub metadata_uri: String,
    pub is_delegate_authority: Option<bool>,
    pub collection_address: Option<String>,
    pub max_supply: Option<u64>,
    pub primary_sale_happened: Option<bool>,
    pub is_mutable: Option<bool>,
    pub receiver: Option<String>,
    pub fee_payer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferParams {
    pub network: Option<Network>,
    pub mint: String,
    pub from_address: String,
    pub to_address: String,
}

/// Moves every mint in `mints` from `from_address` to `to_address` in one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferManyParams {
    pub network: Option<Network>,
    pub mints: Vec<String>,
    pub from_address: String,
    pub to_address: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BurnParams {
    pub network: Option<Network>,
    pub wallet_address: String,
    pub mint: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadParams {
    pub network: Option<Network>,
    pub mint: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadAllParams {
    pub network: Option<Network>,
    pub wallet_address: String,
}

/// Client for the compressed NFT endpoints.
///
/// Every operation is one stateless request: validate (tree creation only),
/// build the wire body, dispatch, unwrap the envelope. Dispatcher errors are
/// returned unchanged inside [`ClientError::Transport`].
#[derive(Debug, Clone)]
pub struct CompressedNftClient<D = HttpDispatcher> {
    config: ClientConfig,
    dispatcher: D,
}

impl CompressedNftClient<HttpDispatcher> {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let dispatcher = HttpDispatcher::new(&config.transport)?;
        Ok(Self { config, dispatcher })
    }
}

impl<D: RequestDispatcher> CompressedNftClient<D> {
    pub fn with_dispatcher(config: ClientConfig, dispatcher: D) -> Self {
        Self { config, dispatcher }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn network(&self, network: Option<Network>) -> Network {
        network.unwrap_or(self.config.network)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &'static str,
        body: WireBody,
        pointer: &str,
    ) -> Result<T, ClientError> {
        let request = ApiRequest::new(method, path, body.into_map());
        let mut envelope = self.dispatcher.dispatch(&self.config.api_key, request).await?;

        let payload = envelope
            .pointer_mut(pointer)
            .map(Value::take)
            .ok_or_else(|| TransportError::MalformedEnvelope(pointer.to_string()))?;
        let result = serde_json::from_value::<T>(payload)
            .map_err(|e| TransportError::Decode(format!("{path}: {e}")))?;
        Ok(result)
    }

    /// Create a Merkle tree account able to hold compressed NFTs.
    ///
    /// Fails with [`ClientError::InvalidConfiguration`] before any request is
    /// built when the depth/size pair is not a supported tree shape.
    pub async fn create_merkle_tree(
        &self,
        params: CreateMerkleTreeParams,
    ) -> Result<CreateMerkleTreeResponse, ClientError> {
        let pair = params.max_depth_size_pair;
        if !is_valid_depth_size_pair(&pair) {
            debug!(%pair, "rejecting unsupported tree shape");
            return Err(ClientError::InvalidConfiguration(pair));
        }

        let pair_value = json!({
            "maxDepth": pair.max_depth,
            "maxBufferSize": pair.max_buffer_size,
        });
        let body = WireBody::new(self.network(params.network))
            .field("wallet_address", params.wallet_address)
            .field("max_depth_size_pair", to_snake_case_keys(&pair_value))
            .field("canopy_depth", params.canopy_depth)
            .field_with("fee_payer", params.fee_payer, Inclusion::IfTruthy);

        self.call(HttpMethod::Post, PATH_CREATE_TREE, body, RESULT)
            .await
    }

    pub async fn mint(&self, params: MintParams) -> Result<MintResponse, ClientError> {
        use Inclusion::IfTruthy;

        // `primary_sale_happend` is the service's spelling.
        let body = WireBody::new(self.network(params.network))
            .field("creator_wallet", params.creator_wallet)
            .field("merkle_tree", params.merkle_tree)
            .field("metadata_uri", params.metadata_uri)
            .field_with("is_delegate_authority", params.is_delegate_authority, IfTruthy)
            .field_with("collection_address", params.collection_address, IfTruthy)
            .field_with("max_supply", params.max_supply, IfTruthy)
            .field_with("primary_sale_happend", params.primary_sale_happened, IfTruthy)
            .field_with("is_mutable", params.is_mutable, IfTruthy)
            .field_with("receiver", params.receiver, IfTruthy)
            .field_with("fee_payer", params.fee_payer, IfTruthy);

        self.call(HttpMethod::Post, PATH_MINT, body, RESULT).await
    }

    pub async fn transfer(&self, params: TransferParams) -> Result<TransferResponse, ClientError> {
        let body = WireBody::new(self.network(params.network))
            .field("nft_address", params.mint)
            .field("sender", params.from_address)
            .field("receiver", params.to_address);

        self.call(HttpMethod::Post, PATH_TRANSFER, body, RESULT)
            .await
    }

    /// Transfer a batch of NFTs in a single request. The batch is never split.
    pub async fn transfer_many(
        &self,
        params: TransferManyParams,
    ) -> Result<TransferManyResponse, ClientError> {
        let body = WireBody::new(self.network(params.network))
            .field("nft_addresses", params.mints)
            .field("from_address", params.from_address)
            .field("to_address", params.to_address);

        self.call(HttpMethod::Post, PATH_TRANSFER_MANY, body, RESULT)
            .await
    }

    pub async fn burn(&self, params: BurnParams) -> Result<BurnResponse, ClientError> {
        let body = WireBody::new(self.network(params.network))
            .field("wallet_address", params.wallet_address)
            .field("nft_address", params.mint);

        self.call(HttpMethod::Delete, PATH_BURN, body, RESULT).await
    }

    pub async fn read(&self, params: ReadParams) -> Result<Nft, ClientError> {
        let query = WireBody::new(self.network(params.network)).field("nft_address", params.mint);

        self.call(HttpMethod::Get, PATH_READ, query, RESULT).await
    }

    /// All compressed NFTs held by a wallet, in service order.
    pub async fn read_all(&self, params: ReadAllParams) -> Result<Vec<Nft>, ClientError> {
        let query = WireBody::new(self.network(params.network))
            .field("wallet_address", params.wallet_address);

        self.call(HttpMethod::Get, PATH_READ_ALL, query, RESULT_NFTS)
            .await
    }
}
