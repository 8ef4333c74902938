use js_sys::{Float64Array, Object, Reflect, Uint32Array};
use vertedge_wasm::Editor;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn editor() -> Editor {
    let mut ed = Editor::new(JsValue::UNDEFINED);
    ed.resize(400.0, 400.0, 1.0);
    ed
}

#[wasm_bindgen_test]
fn draw_gesture_adds_vertices_and_edge() {
    let mut ed = editor();
    assert!(ed.set_tool("draw"));
    assert_eq!(ed.tool(), "draw");
    assert!(ed.pointer_down(100.0, 100.0, 0, 1, false, false, false));
    ed.pointer_move(300.0, 300.0, 1, false, false, false);
    assert!(ed.pointer_up(300.0, 300.0, 0, 0, false, false, false));
    assert_eq!(ed.vertex_count(), 2);
    assert_eq!(ed.edge_count(), 1);
    assert_eq!(ed.selection_count(), 1);

    let data = ed.get_vertex_data();
    let ids = Uint32Array::new(&Reflect::get(&data, &JsValue::from_str("ids")).unwrap());
    let pos = Float64Array::new(&Reflect::get(&data, &JsValue::from_str("positions")).unwrap());
    assert_eq!(ids.length(), 2);
    assert_eq!(pos.to_vec(), vec![-100.0, -100.0, 100.0, 100.0]);
}

#[wasm_bindgen_test]
fn render_needs_a_canvas() {
    let mut ed = editor();
    assert!(!ed.render());
}

#[wasm_bindgen_test]
fn partial_config_object() {
    let cfg = Object::new();
    Reflect::set(&cfg, &JsValue::from_str("default_title"), &JsValue::from_str("Sketch")).unwrap();
    let ed = Editor::new(cfg.into());
    assert_eq!(ed.title(), "Sketch");
    // a bad config falls back to defaults
    let ed = Editor::new(JsValue::from_str("nonsense"));
    assert_eq!(ed.title(), "Untitled Graph");
}

#[wasm_bindgen_test]
fn load_centres_view_and_keys_edit() {
    let mut ed = editor();
    assert!(ed.load_json(r#"{"title":"Pair","vertices":[{"x":0,"y":0},{"x":100,"y":40}],"edges":[{"v1":0,"v2":1}]}"#));
    assert_eq!(ed.title(), "Pair");
    let c: Vec<f64> = serde_wasm_bindgen::from_value(ed.center()).unwrap();
    assert_eq!(c, vec![50.0, 20.0]);

    assert!(ed.key_down("a", false, true, false));
    assert_eq!(ed.selection_count(), 3);
    assert!(ed.set_radius(4.0));
    assert!(ed.key_down("Delete", false, false, false));
    assert_eq!(ed.vertex_count(), 0);
    assert!(ed.to_json().contains("\"vertices\":[]"));
}

#[wasm_bindgen_test]
fn capture_tool_exposes_box() {
    let mut ed = editor();
    ed.load_json(r#"{"vertices":[{"x":0,"y":0}]}"#);
    assert!(ed.capture_area().is_null());
    ed.set_tool("capture");
    let area = ed.capture_area();
    let w = Reflect::get(&area, &JsValue::from_str("w")).unwrap().as_f64();
    assert_eq!(w, Some(24.0));
}

#[wasm_bindgen_test]
fn toolbar_lists_shortcuts() {
    let ed = editor();
    let tools = ed.tools();
    assert_eq!(tools.length(), 11);
    let style = tools.get(4);
    assert_eq!(Reflect::get(&style, &JsValue::from_str("id")).unwrap().as_string().as_deref(), Some("style"));
    assert_eq!(Reflect::get(&style, &JsValue::from_str("ctrl")).unwrap().as_bool(), Some(true));
}
