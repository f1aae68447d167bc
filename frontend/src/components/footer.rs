//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="https://docs.cardano.org/cardano-testnets/tools/faucet" class="footer-link" target="_blank">
                    "Testnet faucet"
                </a>
                <a href="https://preprod.cardanoscan.io" class="footer-link" target="_blank">
                    "Explorer"
                </a>
            </div>
        </footer>
    }
}
