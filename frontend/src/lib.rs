//! Authentic Image NFT Minter - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that connects a Cardano wallet, sends an image to
//! the verification backend, and signs and submits the mint transaction the
//! backend builds.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (owns WalletContext)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (wallet connector)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero                                                        │
//! │  MintPage                                                    │
//! │  ├── MintForm (image picker, mint button)                   │
//! │  ├── StatusPanel (status line, activity log)                │
//! │  └── Gallery (minted tokens)                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (MintedNft, MintStatus, AppError, etc.)
//! - [`context`] - Wallet connection state
//! - [`components`] - UI components
//! - [`services`] - Backend, wallet, and the mint workflow

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod context;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    MintedNft, MintResponse,
    // Wallet
    InstalledWallet, Network, WalletSession,
    // Status
    LogEntry, LogLevel, MintStatus,
    // Errors
    AppError, AppResult,
};

pub use context::WalletContext;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Passed down explicitly; nothing reads it from context
    let wallet = WalletContext::new();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Routes>
                <Route path="/" view=move || view! { <MainContent wallet=wallet/> }/>
            </Routes>
        </Router>
    }
}

#[component]
fn MainContent(wallet: WalletContext) -> impl IntoView {
    view! {
        <Header wallet=wallet/>

        <div class="container">
            <Hero/>
            <MintPage wallet=wallet/>
        </div>

        <Footer/>
    }
}
