use wasm_bindgen::prelude::*;
mod api;
mod canvas;
mod error;
mod interop;
mod logger;

use canvas::Surface;

#[wasm_bindgen]
pub struct Editor {
    pub(crate) inner: vertedge::editor::Editor,
    pub(crate) surface: Surface,
}

impl Editor {
    pub fn rs_new(config: vertedge::editor::config::EditorConfig) -> Editor {
        Editor { inner: vertedge::editor::Editor::new(config), surface: Surface::headless(1.0) }
    }
    pub fn rs_version(&self) -> u64 { self.inner.graph.version() }
}
