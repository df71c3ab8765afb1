// ============================================================================
// FILTER VIEW - Botones de filtro y visibilidad/animación de las cards
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::Element;

use super::View;
use crate::dom::{set_class, set_style};
use crate::utils::constants::{ACTIVE_CLASS, HIDDEN_CLASS};
use crate::viewmodels::{CardAnimation, FilterState};

pub struct DomFilterView {
    controls: Vec<Element>,
    cards: Vec<Element>,
    /// Valor CSS de la animación de entrada, p.ej. `fadeIn 0.3s ease-in`
    fade_animation: String,
}

impl DomFilterView {
    pub fn new(controls: Vec<Element>, cards: Vec<Element>, fade_animation: String) -> Self {
        Self {
            controls,
            cards,
            fade_animation,
        }
    }
}

impl View<FilterState> for DomFilterView {
    fn render(&self, state: &FilterState) -> Result<(), JsValue> {
        for (idx, control) in self.controls.iter().enumerate() {
            set_class(control, ACTIVE_CLASS, state.active_control == Some(idx))?;
        }

        for (card, card_state) in self.cards.iter().zip(state.cards.iter()) {
            set_class(card, HIDDEN_CLASS, !card_state.visible)?;
            match card_state.animation {
                CardAnimation::Untouched => {}
                CardAnimation::Reset => set_style(card, "animation", "none")?,
                CardAnimation::FadeIn => set_style(card, "animation", &self.fade_animation)?,
            }
        }
        Ok(())
    }
}
