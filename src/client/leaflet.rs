//! Bindings to the Leaflet map widget.
//!
//! The widget itself ships from index.html; these externs only cover the
//! calls the map view makes: create a map, attach the tile layer, drop
//! markers with popups, and surface click coordinates.

use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn leaflet_map(container_id: &str) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = on)]
    pub fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(coords: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to_map(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, html: &str) -> Marker;
}

pub fn lat_lng(latitude: f64, longitude: f64) -> Array {
    Array::of2(&latitude.into(), &longitude.into())
}

/// Extracts the clicked coordinate pair from a Leaflet mouse event.
pub fn click_coordinates(event: &JsValue) -> Option<(f64, f64)> {
    let latlng = Reflect::get(event, &"latlng".into()).ok()?;
    let lat = Reflect::get(&latlng, &"lat".into()).ok()?.as_f64()?;
    let lng = Reflect::get(&latlng, &"lng".into()).ok()?.as_f64()?;
    Some((lat, lng))
}
