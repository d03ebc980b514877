use js_sys::{Object, Reflect};
use serde::Serialize;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

/// Serialize to plain JS objects and arrays (no `Map`s).
pub fn to_js<T: Serialize + ?Sized>(v: &T) -> JsValue {
    let ser = serde_wasm_bindgen::Serializer::json_compatible();
    v.serialize(&ser).unwrap_or(JsValue::NULL)
}

/// Read an arbitrary host value as a JSON document.
pub fn from_js(v: JsValue) -> Result<serde_json::Value, String> {
    serde_wasm_bindgen::from_value(v).map_err(|e| e.to_string())
}
