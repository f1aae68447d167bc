//! Wallet connection state shared by the header and the page.
//!
//! Created once by [`crate::App`] and handed to components as a prop.

use leptos::*;

use crate::config::EXPECTED_NETWORK;
use crate::services::wallet::BrowserWallet;
use crate::types::{InstalledWallet, Network, WalletSession};

#[derive(Clone, Copy)]
pub struct WalletContext {
    session: RwSignal<Option<WalletSession>>,
    installed: RwSignal<Vec<InstalledWallet>>,
    connecting: RwSignal<bool>,
}

impl WalletContext {
    pub fn new() -> Self {
        let installed = BrowserWallet::installed();
        log::info!("🔍 Found {} Cardano wallet extension(s)", installed.len());

        Self {
            session: create_rw_signal(None),
            installed: create_rw_signal(installed),
            connecting: create_rw_signal(false),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting.get()
    }

    /// Bech32 address of the connected wallet.
    pub fn address(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.address.clone()))
    }

    pub fn address_untracked(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.as_ref().map(|s| s.address.clone()))
    }

    pub fn network(&self) -> Option<Network> {
        self.session
            .with(|s| s.as_ref().map(|s| Network::from_id(s.network_id)))
    }

    pub fn installed(&self) -> Vec<InstalledWallet> {
        self.installed.get()
    }

    /// Handle for wallet calls, `None` while disconnected.
    pub fn wallet(&self) -> Option<BrowserWallet> {
        self.session.with_untracked(|s| {
            s.as_ref().map(|s| BrowserWallet {
                name: s.name.clone(),
            })
        })
    }

    pub fn connect(&self, name: String) {
        if self.connecting.get_untracked() {
            return;
        }
        self.connecting.set(true);

        let ctx = *self;
        spawn_local(async move {
            match BrowserWallet::enable(&name).await {
                Ok(session) => {
                    let network = Network::from_id(session.network_id);
                    if network != EXPECTED_NETWORK {
                        log::warn!(
                            "⚠️  {} is on {}, transactions are built for {}",
                            session.name,
                            network.label(),
                            EXPECTED_NETWORK.label()
                        );
                    }
                    ctx.session.set(Some(session));
                }
                Err(e) => {
                    log::error!("❌ Wallet connection failed: {}", e);
                }
            }
            ctx.connecting.set(false);
        });
    }

    pub fn disconnect(&self) {
        BrowserWallet::disconnect();
        self.session.set(None);
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}
