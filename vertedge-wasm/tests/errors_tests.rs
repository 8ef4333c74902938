use js_sys::Reflect;
use vertedge_wasm::Editor;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

fn is_ok(v: &JsValue) -> bool {
    Reflect::get(v, &JsValue::from_str("ok")).ok().and_then(|x| x.as_bool()).unwrap_or(false)
}

#[wasm_bindgen_test]
fn tool_and_view_validation() {
    let mut ed = Editor::new(JsValue::UNDEFINED);
    assert!(is_err(&ed.set_tool_res("lasso"), "invalid_tool"));
    assert!(is_ok(&ed.set_tool_res("move")));
    assert!(is_err(&ed.set_zoom_res(f64::NAN), "non_finite"));
    assert!(is_err(&ed.set_zoom_res(0.0), "out_of_range"));
    assert_eq!(ed.zoom(), 1.0);
    assert!(is_err(&ed.resize_res(f64::INFINITY, 10.0, 1.0), "non_finite"));
    assert!(is_err(&ed.resize_res(10.0, 10.0, -2.0), "out_of_range"));
}

#[wasm_bindgen_test]
fn style_validation_does_not_mutate() {
    let mut ed = Editor::new(JsValue::UNDEFINED);
    assert!(is_err(&ed.set_radius_res(5.0), "empty_selection"));
    ed.load_json(r#"{"vertices":[{"x":0,"y":0}]}"#);
    ed.select_all();
    let ver = ed.version();
    assert!(is_err(&ed.set_radius_res(f64::NAN), "non_finite"));
    assert!(is_err(&ed.set_line_width_res(-1.0), "out_of_range"));
    assert!(is_err(&ed.set_shape_res(9), "invalid_shape"));
    assert_eq!(ed.version(), ver, "state mutated on error");
    assert!(is_ok(&ed.set_shape_res(2)));
}

#[wasm_bindgen_test]
fn document_errors_carry_core_codes() {
    let mut ed = Editor::new(JsValue::UNDEFINED);
    assert!(is_err(&ed.load_json_res("{"), "json_parse"));
    assert!(is_err(&ed.load_json_res(r#"{"vertices":[{"x":0,"y":0}],"edges":[{"v1":0,"v2":4}]}"#), "dangling_vertex"));
    assert!(is_err(&ed.load_json_res(r#"{"vertices":[{"x":0,"y":0,"shape":7}]}"#), "out_of_bounds"));
    assert_eq!(ed.vertex_count(), 0);

    let stale = ed.begin_load();
    let fresh = ed.begin_load();
    assert!(is_err(&ed.finish_load_res(stale, "{}"), "stale_load"));
    assert!(is_ok(&ed.finish_load_res(fresh, r#"{"vertices":[{"x":1,"y":1}]}"#)));
    assert_eq!(ed.vertex_count(), 1);
}

#[wasm_bindgen_test]
fn data_editor_rejects_quietly() {
    let mut ed = Editor::new(JsValue::UNDEFINED);
    assert!(!ed.edit_json("{\"vertices\":"));
    assert!(ed.edit_json(""));
    assert_eq!(ed.title(), "Untitled Graph");
}
