//! Centralized constants for the client and the `cnft` binary.

// =============================================================================
// Transport Defaults
// =============================================================================

/// Base URL of the compressed NFT service
pub const DEFAULT_BASE_URL: &str = "https://api.shyft.to/sol/v1";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "x-api-key";

/// Total request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Attempts per request. 1 sends every request exactly once.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1;

/// Fixed delay between attempts when retries are enabled
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;

// =============================================================================
// Endpoints
// =============================================================================

pub const PATH_CREATE_TREE: &str = "nft/compressed/create_tree";
pub const PATH_MINT: &str = "nft/compressed/mint";
pub const PATH_TRANSFER: &str = "nft/compressed/transfer";
pub const PATH_TRANSFER_MANY: &str = "nft/compressed/transfer_many";
pub const PATH_BURN: &str = "nft/compressed/burn";
pub const PATH_READ: &str = "nft/compressed/read";
pub const PATH_READ_ALL: &str = "nft/compressed/read_all";
