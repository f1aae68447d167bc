//! The minting page.
//!
//! Owns all page state. Gallery loading and the mint workflow live in
//! [`crate::services::workflow`]; this component wires them to signals.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use web_sys::File;

use super::{push_log, Gallery, MintForm, StatusPanel};
use crate::config::{MAX_LOG_ENTRIES, NFT_REFRESH_DELAY};
use crate::context::WalletContext;
use crate::services::{
    connection_changed, mint, refresh_after_mint, timer_millis, ConnectionScope, Guarded, HttpBackend,
    PageView,
};
use crate::types::{LogEntry, MintStatus, MintedNft};

/// Page state as seen by the workflow.
#[derive(Clone, Copy)]
struct PageSignals {
    status: WriteSignal<MintStatus>,
    nfts: WriteSignal<Vec<MintedNft>>,
    loading: WriteSignal<bool>,
    logs: WriteSignal<Vec<LogEntry>>,
}

impl PageView for PageSignals {
    fn set_status(&self, status: MintStatus) {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        self.logs
            .update(|logs| push_log(logs, &status, timestamp, MAX_LOG_ENTRIES));
        self.status.set(status);
    }

    fn set_nfts(&self, nfts: Vec<MintedNft>) {
        self.nfts.set(nfts);
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }
}

#[component]
pub fn MintPage(wallet: WalletContext) -> impl IntoView {
    let (status, set_status) = create_signal(MintStatus::Idle);
    let (file, set_file) = create_signal(None::<File>);
    let (nfts, set_nfts) = create_signal(Vec::<MintedNft>::new());
    let (loading, set_loading) = create_signal(false);
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());

    let page = PageSignals {
        status: set_status,
        nfts: set_nfts,
        loading: set_loading,
        logs: set_logs,
    };
    let scope = store_value(ConnectionScope::default());

    // One run per connection transition
    create_effect(move |_| {
        let connected = wallet.is_connected();
        let address = wallet.address();

        spawn_local(connection_changed(
            &scope.get_value(),
            HttpBackend::default(),
            page,
            connected,
            address,
        ));
    });

    let on_mint = Callback::new(move |_: ()| {
        let image = file.get_untracked();
        let session = wallet.wallet();
        let token = scope.get_value().current();
        let view = Guarded::new(page, token.clone());

        spawn_local(async move {
            let backend = HttpBackend::default();
            if mint(session.as_ref(), &backend, &view, image.as_ref(), &token)
                .await
                .is_none()
            {
                return;
            }
            refresh_after_mint(
                &backend,
                &view,
                &token,
                move || wallet.address_untracked(),
                NFT_REFRESH_DELAY,
                |delay| TimeoutFuture::new(timer_millis(delay)),
            )
            .await;
        });
    });

    view! {
        <Show
            when=move || wallet.is_connected()
            fallback=|| view! { <ConnectPrompt/> }
        >
            <main>
                <MintForm file=file set_file=set_file on_mint=on_mint/>
                <StatusPanel status=status logs=logs set_logs=set_logs/>
                <Gallery nfts=nfts loading=loading/>
            </main>
        </Show>
    }
}

#[component]
fn ConnectPrompt() -> impl IntoView {
    view! {
        <div class="connect-prompt">
            <h2>"Please connect your wallet to begin."</h2>
        </div>
    }
}
