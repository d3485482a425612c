//! Bindings to the global `L` object of Leaflet, loaded by `index.html`.
//!
//! Only the handful of calls the map screen makes are bound. Option
//! objects are plain serde structs turned into JS objects.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn new_map(container: &Element, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = flyTo)]
    fn fly_to(this: &LeafletMap, center: &JsValue, zoom: f64, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn once(this: &LeafletMap, event: &str, handler: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap) -> LeafletMap;

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn new_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[derive(Clone)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn new_marker(position: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &Element) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    pub fn open_popup(this: &Marker) -> Marker;

    #[wasm_bindgen(method)]
    fn on(this: &Marker, event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Marker;

    #[wasm_bindgen(method)]
    fn remove(this: &Marker) -> Marker;
}

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayerOptions {
    attribution: &'static str,
    max_zoom: u8,
}

#[derive(Serialize)]
struct FlyToOptions {
    duration: f64,
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        log::error!("Failed to convert Leaflet options: {}", e);
        JsValue::UNDEFINED
    })
}

fn lat_lng(lat: f64, lon: f64) -> JsValue {
    to_js(&[lat, lon])
}

impl LeafletMap {
    /// Mounts a map with OpenStreetMap tiles into `container`.
    pub fn mount(container: &Element, lat: f64, lon: f64, zoom: f64) -> LeafletMap {
        let map = new_map(container, &JsValue::UNDEFINED);
        map.set_view(&lat_lng(lat, lon), zoom);

        let options = TileLayerOptions {
            attribution: TILE_ATTRIBUTION,
            max_zoom: 19,
        };
        new_tile_layer(TILE_URL, &to_js(&options)).add_to(&map);
        map
    }

    /// Animated pan/zoom; `then` runs once the movement has ended.
    pub fn fly_to_then(&self, lat: f64, lon: f64, zoom: f64, duration_secs: f64, then: impl FnOnce() + 'static) {
        self.once("moveend", &Closure::once_into_js(then));
        self.fly_to(&lat_lng(lat, lon), zoom, &to_js(&FlyToOptions { duration: duration_secs }));
    }

    pub fn destroy(&self) {
        self.remove();
    }
}

/// A marker plus the click listener that must live as long as it does
pub struct StationMarker {
    pub marker: Marker,
    _on_click: Closure<dyn FnMut(JsValue)>,
}

impl StationMarker {
    /// Places a marker whose popup shows `popup_content`.
    pub fn place(map: &LeafletMap, lat: f64, lon: f64, popup_content: &Element, on_click: impl FnMut() + 'static) -> Self {
        let mut on_click = on_click;
        let on_click = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| on_click());

        let marker = new_marker(&lat_lng(lat, lon));
        marker.add_to(map);
        marker.bind_popup(popup_content);
        marker.on("click", &on_click);

        Self { marker, _on_click: on_click }
    }
}

impl Drop for StationMarker {
    fn drop(&mut self) {
        self.marker.remove();
    }
}
