//! JavaScript bindings.
//!
//! Lets a JavaScript CI action hand its inputs straight to the planners.

use wasm_bindgen::prelude::*;

use crate::request::{MatrixRequest, PlanOptions};

/// Plans a [`MatrixRequest`] and returns the matrix as a JS object.
///
/// `options` may be `undefined` or `null` to use the defaults; missing
/// fields of a given object also take their defaults.
#[wasm_bindgen(js_name = planMatrix)]
pub fn plan_matrix(request: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let request: MatrixRequest = serde_wasm_bindgen::from_value(request)?;
    let options: PlanOptions = if options.is_undefined() || options.is_null() {
        PlanOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };

    let matrix = request
        .plan(&options)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(serde_wasm_bindgen::to_value(&matrix)?)
}
