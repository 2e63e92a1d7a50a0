//! CodeAayu Creatives サイトのインタラクション (Leptos + WASM)

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod controllers;
pub mod dom;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let config = config::load();
    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
