//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - Backend request/response structures
//! - **Wallet Types** - CIP-30 wallet info
//! - **Status Types** - Mint workflow status and activity log
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// API Types
// =============================================================================

/// A token previously minted through the service.
///
/// Returned as a list by `/get-user-nfts/{address}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MintedNft {
    /// Display name (the uploaded file name)
    pub name: String,
    /// HTTP gateway URL of the image
    pub image_url: String,
}

/// Successful response from `/verify-and-mint`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintResponse {
    /// Unsigned transaction, hex-encoded CBOR
    pub tx_cbor: String,
    /// Optional human-readable note from the backend
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned by the backend on non-success statuses.
#[derive(Clone, Debug, Deserialize)]
pub struct BackendError {
    pub error: String,
}

// =============================================================================
// Wallet Types
// =============================================================================

/// A CIP-30 wallet extension found in the browser.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InstalledWallet {
    /// Extension key under `window.cardano`
    pub name: String,
    /// Data URL of the extension icon
    #[serde(default)]
    pub icon: Option<String>,
}

/// Result of enabling a wallet extension.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSession {
    /// Extension key the session was opened with
    pub name: String,
    /// Bech32 address used for gallery lookups
    pub address: String,
    /// CIP-30 network id
    pub network_id: u8,
}

/// Cardano network a wallet is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Testnet,
    Mainnet,
}

impl Network {
    /// Map a CIP-30 network id. Only `1` is mainnet.
    pub fn from_id(id: u8) -> Self {
        if id == 1 {
            Network::Mainnet
        } else {
            Network::Testnet
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Network::Testnet => "Preprod",
            Network::Mainnet => "Mainnet",
        }
    }
}

/// Shorten a long address for the header, e.g. `addr_t...tkw`.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

// =============================================================================
// Status Types
// =============================================================================

/// Log severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
    /// Warning message
    Warning,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Error => "log-error",
            LogLevel::Warning => "log-warning",
        }
    }
}

/// A single entry of the in-page activity log.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

/// Status line of the page.
///
/// Covers the gallery fetch and every step of the mint workflow.
/// `Display` produces the exact text shown to the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum MintStatus {
    #[default]
    Idle,
    FetchingNfts,
    NftsLoaded,
    NoFileSelected,
    WalletNotConnected,
    Preparing,
    Verifying,
    AwaitingSignature,
    Submitting,
    Minted { tx_hash: String },
    Failed(String),
}

impl MintStatus {
    /// Severity used for the activity log.
    pub fn level(&self) -> LogLevel {
        match self {
            MintStatus::NftsLoaded | MintStatus::Minted { .. } => LogLevel::Success,
            MintStatus::NoFileSelected | MintStatus::WalletNotConnected => LogLevel::Warning,
            MintStatus::Failed(_) => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}

impl fmt::Display for MintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MintStatus::Idle => Ok(()),
            MintStatus::FetchingNfts => write!(f, "Fetching your minted NFTs..."),
            MintStatus::NftsLoaded => write!(f, "NFTs loaded."),
            MintStatus::NoFileSelected => write!(f, "Please select an image file first."),
            MintStatus::WalletNotConnected => write!(f, "Please connect your wallet first."),
            MintStatus::Preparing => write!(f, "Step 1/4: Preparing data..."),
            MintStatus::Verifying => {
                write!(f, "Step 2/4: Verifying image & building transaction...")
            }
            MintStatus::AwaitingSignature => {
                write!(f, "Step 3/4: Please sign the transaction in your wallet...")
            }
            MintStatus::Submitting => {
                write!(f, "Step 4/4: Submitting transaction to the blockchain...")
            }
            MintStatus::Minted { tx_hash } => write!(
                f,
                "Minting successful! TxHash: {}. Your new NFT will appear shortly.",
                tx_hash
            ),
            MintStatus::Failed(message) => write!(f, "Error: {}", message),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// `Display` is the bare message: the status line adds the `Error: ` prefix.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Backend answered with a non-success status.
    Backend(String),
    /// The HTTP request itself failed.
    Network(String),
    /// A success response could not be understood.
    Decode(String),
    /// Wallet extension rejected or failed.
    Wallet(String),
    /// The wallet connection changed while the task was running.
    Cancelled,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Backend(msg)
            | AppError::Network(msg)
            | AppError::Decode(msg)
            | AppError::Wallet(msg) => write!(f, "{}", msg),
            AppError::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_success_message() {
        let status = MintStatus::Minted { tx_hash: "a1b2c3...".to_string() };
        assert_eq!(
            status.to_string(),
            "Minting successful! TxHash: a1b2c3.... Your new NFT will appear shortly."
        );
        assert_eq!(status.level(), LogLevel::Success);
    }

    #[test]
    fn test_failed_status_prefixes_error() {
        let err = AppError::Backend("image failed verification".to_string());
        let status = MintStatus::Failed(err.to_string());
        assert_eq!(status.to_string(), "Error: image failed verification");
        assert_eq!(MintStatus::Idle.to_string(), "");
    }

    #[test]
    fn test_nft_list_deserialization() {
        let json = r#"[
            {"name": "cat.png", "image_url": "https://gateway.pinata.cloud/ipfs/QmCat"},
            {"name": "dog.png", "image_url": "https://gateway.pinata.cloud/ipfs/QmDog"}
        ]"#;

        let nfts: Vec<MintedNft> = serde_json::from_str(json).unwrap();
        assert_eq!(nfts.len(), 2);
        assert_eq!(nfts[0].name, "cat.png");
        assert_eq!(nfts[1].image_url, "https://gateway.pinata.cloud/ipfs/QmDog");
    }

    #[test]
    fn test_mint_response_message_is_optional() {
        let response: MintResponse = serde_json::from_str(r#"{"txCbor": "84a3"}"#).unwrap();
        assert_eq!(response.tx_cbor, "84a3");
        assert!(response.message.is_none());
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("addr_test1vzpwq95z3xyum8vqndgdd9mdnmafh3djcxnc6jemlgdmswcve6tkw"),
            "addr_tes...6tkw"
        );
        assert_eq!(short_address("addr1"), "addr1");
    }

    #[test]
    fn test_network_from_id() {
        assert_eq!(Network::from_id(0), Network::Testnet);
        assert_eq!(Network::from_id(1), Network::Mainnet);
        assert_eq!(Network::Mainnet.label(), "Mainnet");
    }
}
