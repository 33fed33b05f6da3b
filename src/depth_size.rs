//! Tree shapes accepted by the compressed NFT service.
//!
//! The set is irregular: not every buffer size is supported at every depth, so
//! membership is an exact lookup rather than a range check.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::types::DepthSizePair;

/// Every (max_depth, max_buffer_size) combination the service can allocate.
pub const VALID_DEPTH_SIZE_PAIRS: [DepthSizePair; 26] = [
    DepthSizePair::new(3, 8),
    DepthSizePair::new(5, 8),
    DepthSizePair::new(14, 64),
    DepthSizePair::new(14, 256),
    DepthSizePair::new(14, 1024),
    DepthSizePair::new(14, 2048),
    DepthSizePair::new(15, 64),
    DepthSizePair::new(16, 64),
    DepthSizePair::new(17, 64),
    DepthSizePair::new(18, 64),
    DepthSizePair::new(19, 64),
    DepthSizePair::new(20, 64),
    DepthSizePair::new(20, 256),
    DepthSizePair::new(20, 1024),
    DepthSizePair::new(20, 2048),
    DepthSizePair::new(24, 64),
    DepthSizePair::new(24, 256),
    DepthSizePair::new(24, 512),
    DepthSizePair::new(24, 1024),
    DepthSizePair::new(24, 2048),
    DepthSizePair::new(26, 512),
    DepthSizePair::new(26, 1024),
    DepthSizePair::new(26, 2048),
    DepthSizePair::new(30, 512),
    DepthSizePair::new(30, 1024),
    DepthSizePair::new(30, 2048),
];

static VALID_PAIRS: LazyLock<HashSet<DepthSizePair>> =
    LazyLock::new(|| VALID_DEPTH_SIZE_PAIRS.into_iter().collect());

/// Returns true if the service supports a tree with this depth and buffer size.
pub fn is_valid_depth_size_pair(pair: &DepthSizePair) -> bool {
    VALID_PAIRS.contains(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_listed_pairs_are_valid() {
        for pair in VALID_DEPTH_SIZE_PAIRS {
            assert!(is_valid_depth_size_pair(&pair), "{pair} should be valid");
        }
        assert_eq!(VALID_PAIRS.len(), 26, "table must not contain duplicates");
    }

    #[test]
    fn test_unlisted_pairs_are_rejected() {
        let rejected = [
            DepthSizePair::new(3, 9),
            DepthSizePair::new(14, 128),
            DepthSizePair::new(27, 512),
            DepthSizePair::new(26, 64),
            DepthSizePair::new(30, 256),
            DepthSizePair::new(0, 0),
            DepthSizePair::new(8, 3),
        ];

        for pair in rejected {
            assert!(!is_valid_depth_size_pair(&pair), "{pair} should be rejected");
        }
    }
}
