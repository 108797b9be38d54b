#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

mod common;

mod playground;
use playground::Playground;

// the footer only emits utility class names, so the host has to bring a
// stylesheet that understands them
const UTILITY_CSS: &str = "https://cdn.tailwindcss.com";

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Script { src: UTILITY_CSS }
        Playground {}
    }
}
