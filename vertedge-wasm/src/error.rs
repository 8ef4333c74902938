use js_sys::{Object, Reflect};
use vertedge::GraphError;
use wasm_bindgen::prelude::*;

fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

fn new_obj() -> Object { Object::new() }

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
    if let Some(d) = data {
        set_kv(&e, "data", &d);
    }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn out_of_range(param: &str, min: f64, max: f64, got: f64) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "min", &JsValue::from_f64(min));
    set_kv(&d, "max", &JsValue::from_f64(max));
    set_kv(&d, "got", &JsValue::from_f64(got));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

#[inline]
pub fn invalid_tool(id: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "id", &JsValue::from_str(id));
    err("invalid_tool", format!("unknown tool '{}'", id), Some(d.into()))
}

#[inline]
pub fn invalid_shape(got: u8) -> JsValue {
    let d = new_obj();
    set_kv(&d, "got", &JsValue::from_f64(got as f64));
    err("invalid_shape", "shape must be 0:Circle, 1:Square, 2:Diamond", Some(d.into()))
}

#[inline]
pub fn empty_selection() -> JsValue { err("empty_selection", "nothing is selected", None) }

/// Maps a core error onto its stable code, with the structured fields as data.
pub fn from_graph_error(e: &GraphError) -> JsValue {
    let d = new_obj();
    match e {
        GraphError::Parse(inner) => {
            set_kv(&d, "line", &JsValue::from_f64(inner.line() as f64));
            set_kv(&d, "column", &JsValue::from_f64(inner.column() as f64));
        }
        GraphError::CapsExceeded { what, count, limit } => {
            set_kv(&d, "what", &JsValue::from_str(what));
            set_kv(&d, "count", &JsValue::from_f64(*count as f64));
            set_kv(&d, "limit", &JsValue::from_f64(*limit as f64));
        }
        GraphError::OutOfBounds { item, field } => {
            set_kv(&d, "item", &JsValue::from_str(item));
            set_kv(&d, "field", &JsValue::from_str(field));
        }
        GraphError::DanglingVertex { edge, index } => {
            set_kv(&d, "edge", &JsValue::from_f64(*edge as f64));
            set_kv(&d, "index", &JsValue::from_f64(*index as f64));
        }
        GraphError::InvalidId { kind, id } => {
            set_kv(&d, "kind", &JsValue::from_str(kind));
            set_kv(&d, "id", &JsValue::from_f64(*id as f64));
        }
        GraphError::StaleLoad { token } => {
            set_kv(&d, "token", &JsValue::from_f64(*token as f64));
        }
    }
    err(e.code(), e.to_string(), Some(d.into()))
}
