//! UI Components for the minter application.
//!
//! # Layout Components
//! - [`Header`] - Title bar with the wallet connector
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`MintPage`] - Owns page state, wires the workflow to signals
//! - [`MintForm`] - Image picker and mint button
//! - [`StatusPanel`] - Status line and activity log
//! - [`Gallery`] - Previously minted tokens

mod header;
mod hero;
mod page;
mod mint_form;
mod status;
mod gallery;
mod footer;

pub use header::*;
pub use hero::*;
pub use page::*;
pub use mint_form::*;
pub use status::*;
pub use gallery::*;
pub use footer::*;
