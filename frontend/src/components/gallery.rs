//! Grid of tokens minted through the service.

use leptos::*;

use crate::types::MintedNft;

/// What the gallery shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryState {
    Loading,
    Empty,
    Tokens,
}

impl GalleryState {
    pub fn of(loading: bool, count: usize) -> Self {
        if loading {
            GalleryState::Loading
        } else if count == 0 {
            GalleryState::Empty
        } else {
            GalleryState::Tokens
        }
    }
}

#[component]
pub fn Gallery(nfts: ReadSignal<Vec<MintedNft>>, loading: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div class="gallery-section card">
            <h2>"My Minted NFTs"</h2>
            {move || match GalleryState::of(loading.get(), nfts.with(Vec::len)) {
                GalleryState::Loading => view! { <p>"Loading NFTs..."</p> }.into_view(),
                GalleryState::Empty => view! {
                    <p>"You haven't minted any NFTs with this service yet."</p>
                }.into_view(),
                GalleryState::Tokens => view! {
                    <div class="nft-grid">
                        <For
                            each=move || nfts.get().into_iter().enumerate()
                            key=|(i, nft)| (*i, nft.image_url.clone())
                            children=|(_, nft)| {
                                view! {
                                    <div class="nft-card">
                                        <img src=nft.image_url.clone() alt=nft.name.clone()/>
                                        <p>{nft.name}</p>
                                    </div>
                                }
                            }
                        />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_state() {
        assert_eq!(GalleryState::of(true, 3), GalleryState::Loading);
        assert_eq!(GalleryState::of(false, 0), GalleryState::Empty);
        assert_eq!(GalleryState::of(false, 2), GalleryState::Tokens);
    }
}
