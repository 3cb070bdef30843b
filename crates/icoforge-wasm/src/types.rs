//! WASM-compatible wrapper types for image data.
//!
//! Converts between JavaScript-side values and the core icoforge types.

use icoforge_core::{ConvertOptions, SourceImage};
use wasm_bindgen::prelude::*;

/// Decoded RGBA image handed over from JavaScript.
///
/// Use this when the page already has pixels, e.g. from
/// `CanvasRenderingContext2D.getImageData()`.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` copies it back to
/// JavaScript as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsSourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Create an image from dimensions and RGBA pixel data (4 bytes per pixel, row-major).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsSourceImage {
        JsSourceImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsSourceImage {
    /// Validate and convert into the core type.
    pub(crate) fn to_source(&self) -> Result<SourceImage, String> {
        SourceImage::from_raw(self.width, self.height, self.pixels.clone()).map_err(|e| e.to_string())
    }
}

/// Build a JavaScript `Error` carrying `message`.
pub(crate) fn js_error(message: impl AsRef<str>) -> JsValue {
    js_sys::Error::new(message.as_ref()).into()
}

/// Read options from a plain JavaScript object.
///
/// `undefined` and `null` give the defaults; missing fields take their defaults.
pub(crate) fn options_from_js(value: JsValue) -> Result<ConvertOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ConvertOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(e.to_string()))
}
