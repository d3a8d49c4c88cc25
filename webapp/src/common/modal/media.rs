use dioxus::prelude::*;

use crate::common::stream::media_link;
use api::media::{classify, MediaKind};

#[derive(Clone, PartialEq, Props)]
pub struct ShowMediaBoxProps {
    media: String,
}

// the full-size element inside the overlay, built with the same
// classification policy as the grid tiles
#[component]
pub fn ShowMediaBox(props: ShowMediaBoxProps) -> Element {
    let media = props.media;

    let link = media_link(&media);

    match classify(&media) {
        MediaKind::Image => rsx! {
            img { class: "modal-media", src: "{link}", alt: "{media}" }
        },
        MediaKind::Video => rsx! {
            video { class: "modal-media", src: "{link}", controls: true }
        },
        MediaKind::Unrecognized => rsx! {},
    }
}
