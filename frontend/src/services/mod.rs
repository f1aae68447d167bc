//! Backend and wallet services.
//!
//! # Services
//!
//! - [`backend`] - HTTP calls to the verification/minting backend
//! - [`wallet`] - CIP-30 wallet extension integration (Eternl, Nami, Lace, etc.)
//! - [`workflow`] - Gallery loading and the mint workflow, written against
//!   the two traits above
//!
//! # JavaScript Bindings
//!
//! The wallet service uses `src/js/wallet.js`, a thin layer over Mesh's
//! `BrowserWallet`.

pub mod backend;
pub mod wallet;
pub mod workflow;

pub use backend::*;
pub use wallet::*;
pub use workflow::*;
