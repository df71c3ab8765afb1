// ============================================================================
// MENU VIEW - Clase "active" en el botón hamburguesa y la lista de links
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::Element;

use super::View;
use crate::dom::set_class;
use crate::utils::constants::ACTIVE_CLASS;
use crate::viewmodels::MenuState;

pub struct DomMenuView {
    control: Element,
    links: Element,
}

impl DomMenuView {
    pub fn new(control: Element, links: Element) -> Self {
        Self { control, links }
    }
}

impl View<MenuState> for DomMenuView {
    fn render(&self, state: &MenuState) -> Result<(), JsValue> {
        set_class(&self.control, ACTIVE_CLASS, state.open)?;
        set_class(&self.links, ACTIVE_CLASS, state.open)
    }
}
