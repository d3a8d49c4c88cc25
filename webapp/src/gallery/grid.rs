use dioxus::prelude::*;

use crate::common::{modal::ModalState, stream::media_link};
use api::media::{classify, renderable, MediaKind};

#[derive(Clone, PartialEq, Props)]
struct MediaTileProps {
    modal_signal: Signal<ModalState>,
    file_name: String,
}

#[component]
fn MediaTile(props: MediaTileProps) -> Element {
    let mut modal_signal = props.modal_signal;
    let file_name = props.file_name;

    let link = media_link(&file_name);
    let open_name = file_name.clone();

    rsx! {
        div {
            class: "media-tile",
            onclick: move |_| { modal_signal.with_mut(|m| m.open(open_name.clone())) },
            match classify(&file_name) {
                MediaKind::Image => rsx! {
                    img { src: "{link}", alt: "{file_name}" }
                },
                MediaKind::Video => rsx! {
                    video { src: "{link}", controls: true }
                },
                MediaKind::Unrecognized => rsx! {},
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct MediaGridProps {
    modal_signal: Signal<ModalState>,
    files: Vec<String>,
}

#[component]
pub fn MediaGrid(props: MediaGridProps) -> Element {
    rsx! {
        div { class: "media-grid",
            // unrecognized names are dropped here, so every tile renders
            for file_name in renderable(&props.files) {
                MediaTile { modal_signal: props.modal_signal, file_name: file_name }
            }
        }
    }
}
