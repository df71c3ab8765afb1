// ============================================================================
// VIEWS - Superficies DOM que pintan el estado de cada viewmodel
// ============================================================================

pub mod menu_view;
pub mod scroll_view;
pub mod filter_view;
pub mod lightbox_view;
pub mod contact_view;
pub mod styles;

#[cfg(test)]
pub(crate) mod recording;

pub use menu_view::DomMenuView;
pub use scroll_view::smooth_scroll_to;
pub use filter_view::DomFilterView;
pub use lightbox_view::DomLightboxView;
pub use contact_view::DomContactView;
pub use styles::inject_fade_keyframes;

use wasm_bindgen::JsValue;

/// Superficie de render de un componente
pub trait View<S> {
    fn render(&self, state: &S) -> Result<(), JsValue>;
}
