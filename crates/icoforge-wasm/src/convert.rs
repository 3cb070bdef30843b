//! Conversion WASM bindings.
//!
//! # Functions
//!
//! - [`convert_to_ico`] - Convert encoded image bytes to an ICO file
//! - [`convert_pixels_to_ico`] - Convert RGBA pixels to an ICO file
//! - [`inspect_ico`] - Read back the directory of an ICO file
//! - [`default_sizes`] - The standard icon sizes
//!
//! # Example
//!
//! ```typescript
//! import { convert_to_ico, inspect_ico } from '@icoforge/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const ico = convert_to_ico(bytes, { sizes: [16, 32, 48], filter: 'lanczos3' });
//! console.log(inspect_ico(ico).entries.length); // 3
//! ```

use crate::types::{js_error, options_from_js, JsSourceImage};
use icoforge_core::{IconDirectory, IconSize};
use wasm_bindgen::prelude::*;

/// Convert an image file (JPEG, PNG, GIF or BMP bytes) into an ICO file.
///
/// # Arguments
///
/// * `bytes` - The raw file bytes as a `Uint8Array`
/// * `options` - `undefined` or `{ sizes?: number[], filter?: 'nearest' | 'bilinear' | 'lanczos3', applyOrientation?: boolean }`
///
/// # Returns
///
/// A `Uint8Array` holding the complete ICO file.
///
/// # Example
///
/// ```typescript
/// const ico = convert_to_ico(bytes);
/// const blob = new Blob([ico], { type: 'image/x-icon' });
/// ```
#[wasm_bindgen]
pub fn convert_to_ico(bytes: &[u8], options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options = options_from_js(options)?;
    icoforge_core::convert(bytes, &options).map_err(|e| js_error(e.to_string()))
}

/// Convert decoded RGBA pixels into an ICO file.
///
/// Use this with pixels from a canvas; no image decoding takes place, so
/// `applyOrientation` is ignored.
#[wasm_bindgen]
pub fn convert_pixels_to_ico(
    image: &JsSourceImage,
    options: JsValue,
) -> Result<Vec<u8>, JsValue> {
    let options = options_from_js(options)?;
    let source = image.to_source().map_err(js_error)?;
    icoforge_core::convert_image(&source, &options).map_err(|e| js_error(e.to_string()))
}

/// Parse the directory of an ICO file.
///
/// Returns `{ count, entries: [{ width, height, colorCount, colorPlanes, bitsPerPixel, size, offset }] }`.
#[wasm_bindgen]
pub fn inspect_ico(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let directory = IconDirectory::parse(bytes).map_err(|e| js_error(e.to_string()))?;
    serde_wasm_bindgen::to_value(&directory).map_err(|e| js_error(e.to_string()))
}

/// The standard icon sizes used when no `sizes` option is given.
#[wasm_bindgen]
pub fn default_sizes() -> Vec<u32> {
    IconSize::DEFAULT_SET.iter().map(|s| s.side()).collect()
}
