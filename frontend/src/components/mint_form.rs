//! Image picker and mint trigger.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement};

use crate::config::ACCEPTED_IMAGE_TYPES;

#[component]
pub fn MintForm(
    file: ReadSignal<Option<File>>,
    set_file: WriteSignal<Option<File>>,
    #[prop(into)] on_mint: Callback<()>,
) -> impl IntoView {
    // Keeps the previous selection when the picker is dismissed
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(selected) = input.files().and_then(|files| files.get(0)) {
            log::info!("🖼️  Selected {} ({} bytes)", selected.name(), selected.size());
            set_file.set(Some(selected));
        }
    };

    let open_picker = move |_| {
        let input = gloo_utils::document()
            .get_element_by_id("imageInput")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        if let Some(input) = input {
            input.click();
        }
    };

    view! {
        <div class="mint-section card">
            <h2>"Mint a New NFT"</h2>
            <input
                type="file"
                id="imageInput"
                accept=ACCEPTED_IMAGE_TYPES
                style="display:none"
                on:change=on_file_change
            />
            <button class="btn btn-secondary" on:click=open_picker>
                {move || file.with(|f| f.as_ref().map(File::name)).unwrap_or_else(|| "Choose an image".to_string())}
            </button>
            <button class="btn btn-primary" on:click=move |_| on_mint.call(())>
                "Verify & Mint NFT"
            </button>
        </div>
    }
}
