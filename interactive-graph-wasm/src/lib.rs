use interactive_graph::StatefulGraph;
use wasm_bindgen::prelude::*;

mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct InteractiveGraph { pub(crate) inner: StatefulGraph }

impl InteractiveGraph {
    pub fn rs_new(inner: StatefulGraph) -> InteractiveGraph { InteractiveGraph { inner } }
}
