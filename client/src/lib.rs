//! # loandesk-client
//!
//! Leptos browser front-end for the loan desk: a sign-in page, a
//! loan-application page and a notice stack. Form state, validation and the
//! submit flow come from `forms`; this crate supplies the browser adapters
//! (`gloo-net` transport, `localStorage` token store, router navigation,
//! reactive notice board) and the views.
//!
//! Browser-only code is gated on the `csr` feature. Without it the adapters
//! compile to inert stubs so the pure helpers can be unit tested natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: install panic and console logging hooks, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("loandesk client starting");
    leptos::mount::mount_to_body(app::App);
}
