// Vista de test: guarda cada estado pintado

use std::cell::RefCell;

use wasm_bindgen::JsValue;

use super::View;

pub struct RecordingView<S> {
    frames: RefCell<Vec<S>>,
}

impl<S: Clone> RecordingView<S> {
    pub fn new() -> Self {
        Self {
            frames: RefCell::new(Vec::new()),
        }
    }

    pub fn frames(&self) -> Vec<S> {
        self.frames.borrow().clone()
    }
}

impl<S: Clone> View<S> for RecordingView<S> {
    fn render(&self, state: &S) -> Result<(), JsValue> {
        self.frames.borrow_mut().push(state.clone());
        Ok(())
    }
}
