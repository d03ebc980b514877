use interactive_graph::{ActionError, GraphRange, InitError};
use wasm_bindgen::prelude::*;

use crate::interop::{new_obj, set_kv, to_js};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn json_parse(what: &str, reason: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "input", &JsValue::from_str(what));
    err("json_parse", format!("could not read {}: {}", what, reason), Some(d.into()))
}

#[inline]
pub fn unknown_graph_type(tag: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "type", &JsValue::from_str(tag));
    err("unknown_graph_type", format!("unknown graph type '{}'", tag), Some(d.into()))
}

#[inline]
pub fn invalid_range(range: &GraphRange) -> JsValue {
    let d = new_obj(); set_kv(&d, "range", &to_js(range));
    err("invalid_range", "each range axis needs finite bounds with min < max", Some(d.into()))
}

#[inline]
pub fn unknown_action(tag: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "type", &JsValue::from_str(tag));
    err("unknown_action", format!("unknown action type '{}'", tag), Some(d.into()))
}

pub fn from_init(e: &InitError) -> JsValue {
    match e {
        InitError::UnknownGraphType { tag } => unknown_graph_type(tag),
        InitError::InvalidRange { range } => invalid_range(range),
        InitError::MissingGraphType => err("missing_graph_type", e.to_string(), None),
        InitError::InvalidProps { .. } => err("invalid_props", e.to_string(), None),
    }
}

pub fn from_action(e: &ActionError) -> JsValue {
    match e {
        ActionError::UnknownAction { tag } => unknown_action(tag),
        ActionError::MissingActionType => err("missing_action_type", e.to_string(), None),
        ActionError::Malformed { action, .. } => {
            let d = new_obj(); set_kv(&d, "type", &JsValue::from_str(action));
            err("invalid_action", e.to_string(), Some(d.into()))
        }
        ActionError::Props(inner) => from_init(inner),
    }
}
