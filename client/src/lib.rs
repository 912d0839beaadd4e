//! # explorer-client
//!
//! Leptos + WASM frontend for the Rick and Morty catalog explorer.
//!
//! This crate contains pages, components, page state machines, the proxy API
//! client, and the browser storage/theme utilities. Everything outside the
//! `csr` feature builds natively so the state layer is tested with plain
//! `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::{App, AppServices};

    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);

    let services = AppServices::browser();
    leptos::mount::mount_to_body(move || view! { <App services/> });
}
