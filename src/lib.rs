//! Valentine Ask core crate.
//!
//! A single-session, three-screen Valentine's proposal page compiled to WASM:
//! love letter -> invitation with a cursor-dodging "No" button -> celebration.
//! The interactive core (geometry solver, evasion state machine, page flow) is
//! plain Rust with no browser dependencies so it runs under native `cargo
//! test`; only the `web` module touches the DOM.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod decor;
pub mod evasion;
pub mod flow;
pub mod geometry;
mod web;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Build the page, apply the theme and wire all event handlers. Called once
/// from the host page's JS after the module loads.
#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    web::start_app()
}
