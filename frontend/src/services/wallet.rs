//! Wrapper around CIP-30 Cardano wallet extensions (Eternl, Nami, Lace, etc.)

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::types::{AppError, AppResult, InstalledWallet, WalletSession};

/// Wallet operations used by the mint workflow.
#[allow(async_fn_in_trait)]
pub trait Cip30Wallet {
    /// Change address in the wallet's native hex encoding.
    async fn change_address_hex(&self) -> AppResult<String>;

    /// Ask the user to sign `unsigned_tx`. Suspends until they answer.
    async fn sign_tx(&self, unsigned_tx: &str) -> AppResult<String>;

    /// Submit a signed transaction and return its hash.
    async fn submit_tx(&self, signed_tx: &str) -> AppResult<String>;
}

/// Handle on the extension enabled through `wallet.js`.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserWallet {
    pub name: String,
}

impl BrowserWallet {
    /// Extensions registered under `window.cardano`.
    pub fn installed() -> Vec<InstalledWallet> {
        let wallets: Result<Vec<InstalledWallet>, String> = list_wallets()
            .map_err(|e| js_error_message(&e))
            .and_then(|value| serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string()));

        match wallets {
            Ok(wallets) => wallets,
            Err(e) => {
                log::warn!("⚠️  Could not list wallet extensions: {}", e);
                Vec::new()
            }
        }
    }

    /// Enable the extension called `name`. The user may be prompted.
    pub async fn enable(name: &str) -> AppResult<WalletSession> {
        log::info!("🔌 Connecting to {}...", name);

        let result = JsFuture::from(connect_wallet(name))
            .await
            .map_err(|e| AppError::Wallet(js_error_message(&e)))?;

        let session: WalletSession = serde_wasm_bindgen::from_value(result)
            .map_err(|e| AppError::Wallet(format!("Unexpected wallet response: {}", e)))?;

        log::info!("✅ Connected to {}: {}", session.name, session.address);
        Ok(session)
    }

    /// Forget the enabled extension.
    pub fn disconnect() {
        disconnect_wallet();
        log::info!("🔌 Wallet disconnected");
    }
}

impl Cip30Wallet for BrowserWallet {
    async fn change_address_hex(&self) -> AppResult<String> {
        let value = call(get_change_address_hex()).await?;
        let address = value
            .as_string()
            .ok_or_else(|| AppError::Wallet("Change address is not a string".to_string()))?;
        normalize_hex_address(&address)
    }

    async fn sign_tx(&self, unsigned_tx: &str) -> AppResult<String> {
        call(sign_tx(unsigned_tx))
            .await?
            .as_string()
            .ok_or_else(|| AppError::Wallet("Signed transaction is not a string".to_string()))
    }

    async fn submit_tx(&self, signed_tx: &str) -> AppResult<String> {
        call(submit_tx(signed_tx))
            .await?
            .as_string()
            .ok_or_else(|| AppError::Wallet("Transaction hash is not a string".to_string()))
    }
}

async fn call(promise: js_sys::Promise) -> AppResult<JsValue> {
    JsFuture::from(promise)
        .await
        .map_err(|e| AppError::Wallet(js_error_message(&e)))
}

/// Message of a JS rejection: `error.message`, the value itself, or a placeholder.
pub(crate) fn js_error_message(error: &JsValue) -> String {
    js_sys::Reflect::get(error, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| error.as_string())
        .unwrap_or_else(|| "Unknown wallet error".to_string())
}

/// Check that the wallet handed back raw address bytes in hex and lowercase them.
pub(crate) fn normalize_hex_address(address: &str) -> AppResult<String> {
    let bytes = hex::decode(address.trim()).map_err(|e| {
        AppError::Wallet(format!("Wallet returned an address that is not hex: {}", e))
    })?;
    if bytes.is_empty() {
        return Err(AppError::Wallet("Wallet returned an empty address".to_string()));
    }
    Ok(hex::encode(bytes))
}

/// JavaScript functions from wallet.js
#[wasm_bindgen(module = "/src/js/wallet.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = "listWallets")]
    fn list_wallets() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "connectWallet")]
    fn connect_wallet(name: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "disconnectWallet")]
    fn disconnect_wallet();

    #[wasm_bindgen(js_name = "getChangeAddressHex")]
    fn get_change_address_hex() -> js_sys::Promise;

    #[wasm_bindgen(js_name = "signTx")]
    fn sign_tx(unsigned_tx: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "submitTx")]
    fn submit_tx(signed_tx: &str) -> js_sys::Promise;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hex_address() {
        let address = "00A1B2C3D4";
        assert_eq!(normalize_hex_address(address).unwrap(), "00a1b2c3d4");
    }

    #[test]
    fn test_bech32_address_is_rejected() {
        let result = normalize_hex_address("addr_test1vzpwq95z3xyum8vqndgdd9mdnmafh3djcxnc6jemlgdmswcve6tkw");
        assert!(matches!(result, Err(AppError::Wallet(_))));
        assert!(normalize_hex_address("").is_err());
    }
}
