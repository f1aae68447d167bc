//! Application configuration.
//!
//! Centralized configuration for the minter frontend.
//! Everything is hardcoded; the page has no environment to read from.

use std::time::Duration;

use crate::types::Network;

/// Backend API base URL.
///
/// The verification and transaction-building service.
pub const BACKEND_URL: &str = "http://localhost:5001";

/// Application name, shown in the page title and header.
pub const APP_NAME: &str = "Authentic Image NFT Minter";

/// Delay before the gallery is refreshed after a successful submission.
///
/// This is a fixed wait, not a confirmation check.
pub const NFT_REFRESH_DELAY: Duration = Duration::from_secs(30);

/// `accept` hint for the file picker. Not enforced.
pub const ACCEPTED_IMAGE_TYPES: &str = "image/*";

/// Maximum activity log entries kept in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Network the backend builds transactions for.
pub const EXPECTED_NETWORK: Network = Network::Testnet;

/// Block explorer page for a transaction hash.
pub const EXPLORER_TX_URL: &str = "https://preprod.cardanoscan.io/transaction";
