use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Cluster a request is executed against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    #[serde(rename = "mainnet-beta")]
    Mainnet,
    #[default]
    #[serde(rename = "devnet")]
    Devnet,
    #[serde(rename = "testnet")]
    Testnet,
}

impl Network {
    /// Identifier the service expects on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet-beta",
            Network::Devnet => "devnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet-beta" | "mainnet" => Ok(Network::Mainnet),
            "devnet" => Ok(Network::Devnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(format!(
                "unknown network '{other}', expected one of mainnet-beta, devnet, testnet"
            )),
        }
    }
}

/// Merkle tree capacity: maximum depth and the size of the concurrent change buffer.
///
/// Serializes with the client naming convention (`maxDepth`, `maxBufferSize`);
/// the wire form is produced by [`crate::case::to_snake_case_keys`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthSizePair {
    pub max_depth: u32,
    pub max_buffer_size: u32,
}

impl DepthSizePair {
    pub const fn new(max_depth: u32, max_buffer_size: u32) -> Self {
        Self {
            max_depth,
            max_buffer_size,
        }
    }
}

impl fmt::Display for DepthSizePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(max_depth={}, max_buffer_size={})",
            self.max_depth, self.max_buffer_size
        )
    }
}

// Response payloads. The service is authoritative for these shapes, so every
// field defaults, explicit nulls read as the default and unknown fields are
// ignored.

/// Deserialize `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateMerkleTreeResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub encoded_transaction: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub signers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MintResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub encoded_transaction: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub signers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub encoded_transaction: String,
    #[serde(deserialize_with = "null_as_default")]
    pub signers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferManyResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub encoded_transactions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub signers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurnResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub encoded_transaction: String,
    #[serde(deserialize_with = "null_as_default")]
    pub signers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftCreator {
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub share: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftCollection {
    pub address: Option<String>,
    pub name: Option<String>,
    pub family: Option<String>,
    pub verified: Option<bool>,
}

/// A compressed NFT record as returned by the read endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nft {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub owner: String,
    #[serde(deserialize_with = "null_as_default")]
    pub update_authority: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata_uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_uri: String,
    pub cached_image_uri: Option<String>,
    pub animation_url: Option<String>,
    pub external_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub royalty: f64,
    /// Free-form trait map; its shape differs between collections.
    pub attributes: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub creators: Vec<NftCreator>,
    #[serde(deserialize_with = "null_as_default")]
    pub collection: NftCollection,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_sale_happened: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_mutable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_compressed: bool,
    pub merkle_tree: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_network_wire_identifiers() {
        assert_eq!(json!(Network::Mainnet), json!("mainnet-beta"));
        assert_eq!(json!(Network::Devnet), json!("devnet"));
        assert_eq!(Network::Testnet.to_string(), "testnet");
        assert_eq!("mainnet".parse::<Network>(), Ok(Network::Mainnet));
        assert!("localnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_depth_size_pair_uses_client_naming() {
        let pair = DepthSizePair::new(14, 64);
        assert_eq!(json!(pair), json!({ "maxDepth": 14, "maxBufferSize": 64 }));
    }

    #[test]
    fn test_nft_tolerates_partial_payload() {
        let nft: Nft = serde_json::from_value(json!({
            "name": "Bird #1",
            "mint": "Mint111",
            "is_compressed": true,
            "unexpected": [1, 2, 3]
        }))
        .unwrap();

        assert_eq!(nft.name, "Bird #1");
        assert!(nft.is_compressed);
        assert!(nft.creators.is_empty());
        assert_eq!(nft.attributes, Value::Null);
    }

    #[test]
    fn test_nft_tolerates_null_fields() {
        let nft: Nft = serde_json::from_value(json!({
            "name": "Bird #2",
            "description": null,
            "owner": null,
            "royalty": null,
            "creators": null,
            "collection": null,
            "is_mutable": null,
            "attributes": null,
            "merkle_tree": null
        }))
        .unwrap();

        assert_eq!(nft.name, "Bird #2");
        assert_eq!(nft.description, "");
        assert_eq!(nft.owner, "");
        assert_eq!(nft.royalty, 0.0);
        assert!(nft.creators.is_empty());
        assert_eq!(nft.collection, NftCollection::default());
        assert!(!nft.is_mutable);
        assert_eq!(nft.merkle_tree, None);
    }

    #[test]
    fn test_responses_tolerate_null_fields() {
        let response: TransferManyResponse = serde_json::from_value(json!({
            "encoded_transactions": null,
            "signers": ["A"]
        }))
        .unwrap();
        assert!(response.encoded_transactions.is_empty());

        let creator: NftCreator =
            serde_json::from_value(json!({ "address": "C1", "share": null, "verified": null }))
                .unwrap();
        assert_eq!(creator.share, 0);
        assert!(!creator.verified);
    }
}
