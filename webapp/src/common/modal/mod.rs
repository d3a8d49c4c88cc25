use dioxus::prelude::*;

mod media;
use media::ShowMediaBox;

// ModalState
//
// the overlay state machine: either closed or showing a single media file.
// closing only hides the overlay -- the populated content stays behind it
// until the next open replaces it, so reopening never sees stale nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    media: Option<String>,
    visible: bool,
}

impl ModalState {
    pub fn open(&mut self, media: String) {
        self.media = Some(media);
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&str> {
        self.media.as_deref()
    }
}

// ModalBox
//
// the single overlay element.  it renders nothing until the first open,
// and afterwards toggles between flex and none so that close keeps the
// content in place.  the close control is the only way to dismiss it.
#[derive(Clone, PartialEq, Props)]
pub struct ModalBoxProps {
    modal_signal: Signal<ModalState>,
}

#[component]
pub fn ModalBox(props: ModalBoxProps) -> Element {
    let mut modal_signal = props.modal_signal;

    let state = modal_signal.read();

    let media = match state.content() {
        Some(val) => val.to_string(),
        None => return rsx! {},
    };

    let display = if state.is_open() { "flex" } else { "none" };

    rsx! {
        div { class: "modal", style: "display: {display};",
            div { class: "modal-content",
                div { class: "modal-header",
                    span {
                        class: "close",
                        onclick: move |_| {
                            modal_signal.with_mut(|m| m.close());
                        },
                        "X"
                    }
                }
                div { class: "modal-body",
                    ShowMediaBox { media: media }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ModalState;

    #[test]
    fn open_populates_and_shows() {
        let mut state = ModalState::default();
        assert!(!state.is_open());
        assert_eq!(state.content(), None);

        state.open(String::from("z.jpg"));

        assert!(state.is_open());
        assert_eq!(state.content(), Some("z.jpg"));
    }

    #[test]
    fn close_hides_but_keeps_content() {
        let mut state = ModalState::default();
        state.open(String::from("z.jpg"));

        state.close();

        assert!(!state.is_open());
        assert_eq!(state.content(), Some("z.jpg"));
    }

    #[test]
    fn reopen_replaces_content() {
        let mut state = ModalState::default();
        state.open(String::from("z.jpg"));
        state.open(String::from("clip.mp4"));

        assert!(state.is_open());
        assert_eq!(state.content(), Some("clip.mp4"));
    }

    #[test]
    fn open_after_close_shows_the_new_media() {
        let mut state = ModalState::default();
        state.open(String::from("z.jpg"));
        state.close();

        state.open(String::from("y.png"));

        assert!(state.is_open());
        assert_eq!(state.content(), Some("y.png"));
    }
}
