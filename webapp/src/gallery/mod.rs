use dioxus::prelude::*;

use tracing::error;

use crate::common::modal::{ModalBox, ModalState};
use api::listing::default_source;

mod grid;
use grid::MediaGrid;

// the render-side consumer of the listing result: a failed fetch degrades
// to an empty gallery with a console diagnostic, never a user-facing error
pub fn files_or_empty(result: &anyhow::Result<Vec<String>>) -> Vec<String> {
    match result {
        Ok(files) => files.clone(),
        Err(err) => {
            error!("error fetching media files: {err}");
            Vec::new()
        }
    }
}

#[component]
pub fn Gallery() -> Element {
    // the overlay state, constructed once and handed to the tiles and the
    // modal box below
    let modal_signal = use_signal(ModalState::default);

    // the single network call of the page; nothing renders until it settles
    let listing = use_resource(move || async move { default_source().resolve().await });

    let files = match &*listing.read() {
        Some(result) => files_or_empty(result),
        None => Vec::new(),
    };

    rsx! {
        ModalBox { modal_signal: modal_signal }
        div { class: "media-list",
            MediaGrid { modal_signal: modal_signal, files: files }
        }
    }
}
