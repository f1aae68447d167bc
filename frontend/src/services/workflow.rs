//! Gallery loading and the verify → sign → submit mint workflow.
//!
//! The functions here only talk to the outside world through
//! [`MintBackend`] and [`Cip30Wallet`], and only write page state through
//! [`PageView`], so the page component stays a thin layer of signals.
//!
//! Every wallet connection gets its own [`CancellationToken`]. A connection
//! change cancels it: tasks started under it stop at their next await and
//! their pending writes are dropped.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{select, Either};
use futures::pin_mut;
use tokio_util::sync::CancellationToken;

use crate::services::backend::MintBackend;
use crate::services::wallet::Cip30Wallet;
use crate::types::{AppError, AppResult, MintStatus, MintedNft};

/// Write side of the page state.
pub trait PageView {
    fn set_status(&self, status: MintStatus);
    fn set_nfts(&self, nfts: Vec<MintedNft>);
    fn set_loading(&self, loading: bool);
}

/// A [`PageView`] that drops writes once its connection is cancelled.
#[derive(Clone, Debug)]
pub struct Guarded<V> {
    inner: V,
    token: CancellationToken,
}

impl<V: PageView> Guarded<V> {
    pub fn new(inner: V, token: CancellationToken) -> Self {
        Self { inner, token }
    }
}

impl<V: PageView> PageView for Guarded<V> {
    fn set_status(&self, status: MintStatus) {
        if self.token.is_cancelled() {
            log::debug!("Dropping stale status: {}", status);
        } else {
            self.inner.set_status(status);
        }
    }

    fn set_nfts(&self, nfts: Vec<MintedNft>) {
        if self.token.is_cancelled() {
            log::debug!("Dropping stale NFT list ({} items)", nfts.len());
        } else {
            self.inner.set_nfts(nfts);
        }
    }

    fn set_loading(&self, loading: bool) {
        if !self.token.is_cancelled() {
            self.inner.set_loading(loading);
        }
    }
}

/// Token of the current wallet connection.
#[derive(Clone, Debug, Default)]
pub struct ConnectionScope {
    token: Rc<RefCell<CancellationToken>>,
}

impl ConnectionScope {
    /// Cancel the current connection's token and start a new one.
    pub fn renew(&self) -> CancellationToken {
        let fresh = CancellationToken::new();
        self.token.replace(fresh.clone()).cancel();
        fresh
    }

    pub fn current(&self) -> CancellationToken {
        self.token.borrow().clone()
    }
}

/// Resolve `fut`, or `Err(AppError::Cancelled)` if `token` fires first.
///
/// Cancellation wins when both are ready.
async fn until_cancelled<F: Future>(token: &CancellationToken, fut: F) -> AppResult<F::Output> {
    let cancelled = token.cancelled();
    pin_mut!(cancelled, fut);

    match select(cancelled, fut).await {
        Either::Left(_) => Err(AppError::Cancelled),
        Either::Right((output, _)) => Ok(output),
    }
}

/// Start a new connection and return the gallery sync for it.
///
/// Tasks of the previous connection are cancelled before this returns.
pub fn connection_changed<B, V>(
    scope: &ConnectionScope,
    backend: B,
    view: V,
    connected: bool,
    address: Option<String>,
) -> impl Future<Output = ()>
where
    B: MintBackend,
    V: PageView,
{
    let token = scope.renew();
    let view = Guarded::new(view, token.clone());

    async move {
        sync_gallery(&backend, &view, connected, address.as_deref(), &token).await;
    }
}

/// React to a connection transition.
///
/// Connected with an address: one fetch. Anything else: the gallery is cleared
/// without touching the network.
pub async fn sync_gallery<B, V>(
    backend: &B,
    view: &V,
    connected: bool,
    address: Option<&str>,
    token: &CancellationToken,
) where
    B: MintBackend,
    V: PageView,
{
    match (connected, address) {
        (true, Some(address)) => load_nfts(backend, view, address, token).await,
        _ => {
            view.set_loading(false);
            view.set_nfts(Vec::new());
        }
    }
}

/// Fetch the gallery for `address`.
///
/// On failure the previous list is left in place.
pub async fn load_nfts<B, V>(backend: &B, view: &V, address: &str, token: &CancellationToken)
where
    B: MintBackend,
    V: PageView,
{
    view.set_loading(true);
    view.set_status(MintStatus::FetchingNfts);

    match until_cancelled(token, backend.user_nfts(address)).await {
        Ok(Ok(nfts)) => {
            log::info!("🖼️  Loaded {} NFTs for {}", nfts.len(), address);
            view.set_nfts(nfts);
            view.set_status(MintStatus::NftsLoaded);
        }
        Ok(Err(e)) => {
            log::error!("❌ Failed to fetch NFTs: {:?}", e);
            view.set_status(MintStatus::Failed(e.to_string()));
        }
        Err(_) => {
            log::debug!("NFT fetch for {} abandoned: connection changed", address);
            return;
        }
    }

    view.set_loading(false);
}

/// Run the mint workflow. Returns the transaction hash on success.
///
/// `wallet` is `None` while disconnected. Missing preconditions are reported
/// through the status line before any call is made.
pub async fn mint<W, B, V>(
    wallet: Option<&W>,
    backend: &B,
    view: &V,
    image: Option<&B::Image>,
    token: &CancellationToken,
) -> Option<String>
where
    W: Cip30Wallet,
    B: MintBackend,
    V: PageView,
{
    let Some(image) = image else {
        view.set_status(MintStatus::NoFileSelected);
        return None;
    };
    let Some(wallet) = wallet else {
        view.set_status(MintStatus::WalletNotConnected);
        return None;
    };

    match run_mint(wallet, backend, view, image, token).await {
        Ok(tx_hash) => {
            log::info!("✅ Mint submitted: {}", tx_hash);
            view.set_status(MintStatus::Minted {
                tx_hash: tx_hash.clone(),
            });
            Some(tx_hash)
        }
        Err(AppError::Cancelled) => {
            log::warn!("⚠️  Mint abandoned: wallet connection changed");
            None
        }
        Err(e) => {
            log::error!("❌ Mint failed: {:?}", e);
            view.set_status(MintStatus::Failed(e.to_string()));
            None
        }
    }
}

async fn run_mint<W, B, V>(
    wallet: &W,
    backend: &B,
    view: &V,
    image: &B::Image,
    token: &CancellationToken,
) -> AppResult<String>
where
    W: Cip30Wallet,
    B: MintBackend,
    V: PageView,
{
    view.set_status(MintStatus::Preparing);
    let address = until_cancelled(token, wallet.change_address_hex()).await??;

    view.set_status(MintStatus::Verifying);
    let response = until_cancelled(token, backend.verify_and_mint(image, &address)).await??;
    if let Some(message) = &response.message {
        log::info!("{}", message);
    }

    view.set_status(MintStatus::AwaitingSignature);
    let signed = until_cancelled(token, wallet.sign_tx(&response.tx_cbor)).await??;

    view.set_status(MintStatus::Submitting);
    until_cancelled(token, wallet.submit_tx(&signed)).await?
}

/// Wait `delay`, then overwrite the gallery once for whatever address is
/// connected at that point.
///
/// This does not wait for confirmation; the new token may not be visible yet.
pub async fn refresh_after_mint<B, V, A, S, F>(
    backend: &B,
    view: &V,
    token: &CancellationToken,
    current_address: A,
    delay: Duration,
    sleep: S,
) where
    B: MintBackend,
    V: PageView,
    A: FnOnce() -> Option<String>,
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    if until_cancelled(token, sleep(delay)).await.is_err() {
        log::info!("Skipping post-mint refresh: wallet connection changed");
        return;
    }
    let Some(address) = current_address() else {
        log::info!("Skipping post-mint refresh: no wallet connected");
        return;
    };

    match until_cancelled(token, backend.user_nfts(&address)).await {
        Ok(Ok(nfts)) => view.set_nfts(nfts),
        Ok(Err(e)) => log::warn!("Post-mint refresh failed: {}", e),
        Err(_) => log::info!("Post-mint refresh abandoned: wallet connection changed"),
    }
}

/// Milliseconds for a browser timer, saturating at `u32::MAX`.
pub fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
