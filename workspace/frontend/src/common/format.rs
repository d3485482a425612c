use js_sys::Date;
use wasm_bindgen::JsValue;

/// Renders an epoch-millisecond timestamp in the browser's locale and zone.
pub fn local_time_from_millis(millis: i64) -> String {
    to_locale_string(&Date::new(&JsValue::from_f64(millis as f64)))
}

/// Renders an ISO-8601 timestamp in the browser's locale and zone, or the
/// input unchanged when the browser cannot parse it.
pub fn local_time_from_iso(iso: &str) -> String {
    let date = Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_string();
    }
    to_locale_string(&date)
}

fn to_locale_string(date: &Date) -> String {
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}
