//! Hero section component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME} " 🖼️"</h1>
            <p class="subtitle">
                "Mint NFTs on the Cardano Preprod Testnet after AI verification."
            </p>
        </div>
    }
}
