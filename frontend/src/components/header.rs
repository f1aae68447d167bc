use leptos::*;

use crate::config::{APP_NAME, EXPECTED_NETWORK};
use crate::context::WalletContext;
use crate::types::short_address;

#[component]
pub fn Header(wallet: WalletContext) -> impl IntoView {
    let wrong_network = move || wallet.network().is_some_and(|n| n != EXPECTED_NETWORK);

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{APP_NAME}</a>
                <span class="badge" class:warning=wrong_network>
                    {move || wallet.network().map(|n| n.label()).unwrap_or("--")}
                </span>
            </div>
            <div class="header-right">
                <Show
                    when=move || wallet.is_connected()
                    fallback=move || view! { <WalletPicker wallet=wallet/> }
                >
                    <div class="wallet-status connected">
                        <span class="wallet-dot connected"></span>
                        <span id="walletText">
                            {move || wallet.address().map(|a| short_address(&a)).unwrap_or_default()}
                        </span>
                        <button class="btn btn-secondary" on:click=move |_| wallet.disconnect()>
                            "Disconnect"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}

/// One button per installed CIP-30 extension.
#[component]
fn WalletPicker(wallet: WalletContext) -> impl IntoView {
    view! {
        <div class="wallet-picker">
            <Show
                when=move || !wallet.installed().is_empty()
                fallback=|| view! { <span class="wallet-hint">"No Cardano wallet extension found"</span> }
            >
                <For
                    each=move || wallet.installed()
                    key=|w| w.name.clone()
                    children=move |w| {
                        let name = w.name.clone();
                        view! {
                            <button
                                class="wallet-option"
                                disabled=move || wallet.is_connecting()
                                on:click=move |_| wallet.connect(name.clone())
                            >
                                {w.icon.clone().map(|icon| view! { <img src=icon alt="" class="wallet-icon"/> })}
                                {w.name.clone()}
                            </button>
                        }
                    }
                />
            </Show>
        </div>
    }
}
