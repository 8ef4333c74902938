use js_sys::{Float64Array, Object, Reflect, Uint32Array};
use vertedge::Rect;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}
pub fn arr_u32(slice: &[u32]) -> Uint32Array {
    let arr = Uint32Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn arr_f64(slice: &[f64]) -> Float64Array {
    let arr = Float64Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn rect_obj(r: &Rect) -> JsValue {
    let o = new_obj();
    set_kv(&o, "x", &JsValue::from_f64(r.x));
    set_kv(&o, "y", &JsValue::from_f64(r.y));
    set_kv(&o, "w", &JsValue::from_f64(r.w));
    set_kv(&o, "h", &JsValue::from_f64(r.h));
    o.into()
}
