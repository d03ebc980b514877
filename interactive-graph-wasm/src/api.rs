use crate::InteractiveGraph;
use interactive_graph::{json, Action, GraphProps, StatefulGraph};
use wasm_bindgen::prelude::*;
use crate::error;
use crate::interop::{from_js, to_js};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn read_props(props: JsValue) -> Result<GraphProps, JsValue> {
    let v = from_js(props).map_err(|e| error::json_parse("props", &e))?;
    json::props_from_value(v).map_err(|e| error::from_init(&e))
}

fn read_action(action: JsValue) -> Result<Action, JsValue> {
    let v = from_js(action).map_err(|e| error::json_parse("action", &e))?;
    json::action_from_value(v).map_err(|e| error::from_action(&e))
}

fn warn(msg: &str, detail: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(msg), detail);
}

#[wasm_bindgen]
impl InteractiveGraph {
    #[wasm_bindgen(constructor)]
    pub fn new(props: JsValue) -> Result<InteractiveGraph, JsValue> {
        let props = read_props(props)?;
        StatefulGraph::new(props).map(InteractiveGraph::rs_new).map_err(|e| error::from_init(&e))
    }
    pub fn create_res(props: JsValue) -> JsValue {
        match InteractiveGraph::new(props) {
            Ok(g) => error::ok(g.into()),
            Err(e) => e,
        }
    }

    // Actions
    pub fn dispatch(&mut self, action: JsValue) -> bool {
        match read_action(action) {
            Ok(a) => self.inner.dispatch(&a),
            Err(e) => {
                warn("interactive-graph: ignored action", &e);
                false
            }
        }
    }
    pub fn dispatch_res(&mut self, action: JsValue) -> JsValue {
        match read_action(action) {
            Ok(a) => error::ok(JsValue::from_bool(self.inner.dispatch(&a))),
            Err(e) => e,
        }
    }

    // Props
    pub fn update_props(&mut self, props: JsValue) -> bool {
        let res = read_props(props)
            .and_then(|p| self.inner.update_props(p).map_err(|e| error::from_init(&e)));
        match res {
            Ok(actions) => !actions.is_empty(),
            Err(e) => {
                warn("interactive-graph: ignored props", &e);
                false
            }
        }
    }
    pub fn update_props_res(&mut self, props: JsValue) -> JsValue {
        let props = match read_props(props) {
            Ok(p) => p,
            Err(e) => return e,
        };
        match self.inner.update_props(props) {
            Ok(actions) => {
                let names: Vec<&str> = actions.iter().map(Action::name).collect();
                error::ok(to_js(&names))
            }
            Err(e) => error::from_init(&e),
        }
    }

    // Reads
    pub fn get_user_input(&self) -> JsValue { to_js(&self.inner.get_user_input()) }
    pub fn get_state(&self) -> JsValue { to_js(self.inner.state()) }
    pub fn get_props(&self) -> JsValue { to_js(self.inner.props()) }
    pub fn graph_type(&self) -> String { self.inner.state().graph_type().as_str().to_string() }
    pub fn has_been_interacted_with(&self) -> bool { self.inner.has_been_interacted_with() }

    /// Register `f(state)`, called after every dispatch that changed the
    /// state. Pass `undefined` to clear. `f` must not call back into this
    /// graph synchronously.
    pub fn set_on_change(&mut self, f: Option<js_sys::Function>) {
        match f {
            Some(f) => self.inner.set_on_change(move |snap| {
                if let Err(e) = f.call1(&JsValue::NULL, &to_js(snap)) {
                    warn("interactive-graph: onChange threw", &e);
                }
            }),
            None => self.inner.clear_on_change(),
        }
    }
}
