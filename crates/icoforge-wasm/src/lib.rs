//! icoforge WASM - WebAssembly bindings for icoforge
//!
//! This crate exposes the icoforge-core conversion pipeline to
//! JavaScript/TypeScript so a web or desktop-web shell can turn a picked
//! image into an `.ico` file without a server round trip.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types and option parsing
//! - `convert` - Conversion and inspection bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { convert_to_ico } from '@icoforge/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const ico = convert_to_ico(bytes);
//! ```

use wasm_bindgen::prelude::*;

mod convert;
mod types;

pub use convert::{convert_pixels_to_ico, convert_to_ico, default_sizes, inspect_ico};
pub use types::JsSourceImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&JsValue::from_str(&format!(
        "icoforge-wasm {} ready",
        version()
    )));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
