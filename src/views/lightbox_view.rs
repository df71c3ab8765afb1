// ============================================================================
// LIGHTBOX VIEW - Overlay, imagen y bloqueo de scroll del body
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, HtmlImageElement};

use super::View;
use crate::dom::set_class;
use crate::utils::constants::ACTIVE_CLASS;
use crate::viewmodels::LightboxState;

/// `overflow` del body: bloqueado mientras el overlay está abierto
pub fn body_overflow(open: bool) -> &'static str {
    if open {
        "hidden"
    } else {
        "auto"
    }
}

pub struct DomLightboxView {
    container: Element,
    image: HtmlImageElement,
    body: HtmlElement,
}

impl DomLightboxView {
    pub fn new(container: Element, image: HtmlImageElement, body: HtmlElement) -> Self {
        Self {
            container,
            image,
            body,
        }
    }
}

impl View<LightboxState> for DomLightboxView {
    fn render(&self, state: &LightboxState) -> Result<(), JsValue> {
        if let Some(src) = &state.image_src {
            if self.image.src() != *src {
                self.image.set_src(src);
            }
        }

        set_class(&self.container, ACTIVE_CLASS, state.open)?;
        self.body
            .style()
            .set_property("overflow", body_overflow(state.open))
    }
}
