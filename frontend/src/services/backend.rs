//! HTTP client for the verification/minting backend.

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::config::BACKEND_URL;
use crate::types::{AppError, AppResult, BackendError, MintResponse, MintedNft};

/// Shown when a gallery fetch fails without a usable error body.
pub const NFTS_FALLBACK_ERROR: &str = "Failed to fetch NFTs";

/// Shown when `/verify-and-mint` fails without a usable error body.
pub const MINT_FALLBACK_ERROR: &str = "An error occurred at the backend.";

/// Operations the page needs from the backend.
///
/// `Image` is the uploaded payload: a browser `File` in production.
#[allow(async_fn_in_trait)]
pub trait MintBackend {
    type Image;

    /// Tokens minted through the service and owned by `address`.
    async fn user_nfts(&self, address: &str) -> AppResult<Vec<MintedNft>>;

    /// Upload `image` for verification and get an unsigned mint transaction back.
    async fn verify_and_mint(
        &self,
        image: &Self::Image,
        user_address_hex: &str,
    ) -> AppResult<MintResponse>;
}

/// Backend reached over `fetch`.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn nfts_url(&self, address: &str) -> String {
        format!("{}/get-user-nfts/{}", self.base_url, address)
    }

    fn mint_url(&self) -> String {
        format!("{}/verify-and-mint", self.base_url)
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl MintBackend for HttpBackend {
    type Image = File;

    async fn user_nfts(&self, address: &str) -> AppResult<Vec<MintedNft>> {
        let response = Request::get(&self.nfts_url(address))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let body = read_body(&response, NFTS_FALLBACK_ERROR).await?;
        parse_nfts(&body)
    }

    async fn verify_and_mint(&self, image: &File, user_address_hex: &str) -> AppResult<MintResponse> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob("file", image)
            .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;
        form_data
            .append_with_str("userAddress", user_address_hex)
            .map_err(|e| AppError::Network(format!("Failed to append address: {:?}", e)))?;

        log::info!("📤 Uploading {} ({} bytes) for verification", image.name(), image.size());

        let response = Request::post(&self.mint_url())
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let body = read_body(&response, MINT_FALLBACK_ERROR).await?;
        parse_mint_response(&body)
    }
}

/// Read the body, turning a non-success status into [`AppError::Backend`].
async fn read_body(response: &Response, fallback: &str) -> AppResult<String> {
    let body = response.text().await;

    if !response.ok() {
        let message = body
            .map(|text| error_message(&text, fallback))
            .unwrap_or_else(|_| fallback.to_string());
        log::warn!("Backend returned {}: {}", response.status(), message);
        return Err(AppError::Backend(message));
    }

    body.map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))
}

/// The backend's `error` field, or `fallback` when the body has none.
pub(crate) fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<BackendError>(body)
        .ok()
        .map(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

pub(crate) fn parse_nfts(body: &str) -> AppResult<Vec<MintedNft>> {
    serde_json::from_str(body).map_err(|e| AppError::Decode(format!("Failed to parse NFT list: {}", e)))
}

pub(crate) fn parse_mint_response(body: &str) -> AppResult<MintResponse> {
    let response: MintResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Decode(format!("Failed to parse mint response: {}", e)))?;

    if response.tx_cbor.is_empty() {
        return Err(AppError::Decode("Backend returned an empty transaction".to_string()));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_uses_backend_text() {
        let body = r#"{"error": "AI-generated image detected. Minting rejected."}"#;
        assert_eq!(
            error_message(body, MINT_FALLBACK_ERROR),
            "AI-generated image detected. Minting rejected."
        );
    }

    #[test]
    fn test_error_message_falls_back() {
        assert_eq!(error_message("<html>502</html>", MINT_FALLBACK_ERROR), MINT_FALLBACK_ERROR);
        assert_eq!(error_message(r#"{"error": ""}"#, NFTS_FALLBACK_ERROR), NFTS_FALLBACK_ERROR);
        assert_eq!(error_message(r#"{"detail": "x"}"#, NFTS_FALLBACK_ERROR), NFTS_FALLBACK_ERROR);
    }

    #[test]
    fn test_parse_mint_response() {
        let body = r#"{
            "message": "Verification successful! Please sign the transaction.",
            "txCbor": "84a300818258204f"
        }"#;
        let response = parse_mint_response(body).unwrap();
        assert_eq!(response.tx_cbor, "84a300818258204f");
        assert!(response.message.is_some());
    }

    #[test]
    fn test_parse_mint_response_without_transaction() {
        assert!(matches!(parse_mint_response(r#"{"message": "ok"}"#), Err(AppError::Decode(_))));
        assert!(matches!(parse_mint_response(r#"{"txCbor": ""}"#), Err(AppError::Decode(_))));
    }

    #[test]
    fn test_parse_empty_nft_list() {
        assert_eq!(parse_nfts("[]").unwrap(), Vec::new());
        assert!(parse_nfts(r#"{"error": "nope"}"#).is_err());
    }

    #[test]
    fn test_urls() {
        let backend = HttpBackend::new("http://localhost:5001");
        assert_eq!(
            backend.nfts_url("addr_test1abc"),
            "http://localhost:5001/get-user-nfts/addr_test1abc"
        );
        assert_eq!(backend.mint_url(), "http://localhost:5001/verify-and-mint");
    }
}
