#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod gallery;
use gallery::Gallery;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
enum Route {
    #[route("/")]
    Gallery {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::GALLERY_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
