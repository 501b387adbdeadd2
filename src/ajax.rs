//! JavaScript interop for the host page's AJAX helpers.
//! Provides Rust bindings to the submit functions defined in
//! ajax_helpers.js; the helpers own the request and the response swap.

use log::warn;
use mediabrowser_ui::query::FilterQuery;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/ajax_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = submitFilterQuery)]
    fn submit_filter_query_js(query: JsValue);

    #[wasm_bindgen(js_name = submitStarRating)]
    pub fn submit_star_rating(submitter: &str);
}

/// Hand the current filter query to the host page, which refreshes the
/// film list with the response.
pub fn submit_filter_query(query: &FilterQuery) {
    match serde_wasm_bindgen::to_value(query) {
        Ok(value) => submit_filter_query_js(value),
        Err(e) => warn!("failed to serialize filter query: {}", e),
    }
}
