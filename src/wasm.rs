use wasm_bindgen::prelude::*;

use crate::image_loader::ImageLoader;

/// Build a voucher from JSON in the browser.
///
/// There is no network fetcher on wasm, so only inline (`data:` or base64)
/// images are embedded; other references fall back to placeholders.
#[wasm_bindgen]
pub fn build_reservation_pdf(reservation_json: &str, agency_json: &str) -> Result<Vec<u8>, JsValue> {
    let reservation = crate::parse_reservation(reservation_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let agency = crate::parse_agency(agency_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    crate::build_with(&reservation, &agency, &ImageLoader::offline())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
