// ============================================================================
// VIEWMODELS - Estado + lógica de cada comportamiento (sin DOM)
// ============================================================================
// Cada viewmodel recibe eventos y devuelve comandos (timers) a ejecutar;
// las vistas solo pintan el estado resultante.
// ============================================================================

pub mod validation;
pub mod menu_viewmodel;
pub mod scroll_viewmodel;
pub mod filter_viewmodel;
pub mod lightbox_viewmodel;
pub mod contact_viewmodel;

pub use validation::{is_valid_email, validate_field, validate_form, ValidationReport};
pub use menu_viewmodel::{MenuEvent, MenuState, MenuViewModel};
pub use scroll_viewmodel::{plan_anchor_scroll, ScrollPlan};
pub use filter_viewmodel::{CardAnimation, CardState, FilterEvent, FilterState, FilterViewModel};
pub use lightbox_viewmodel::{LightboxEvent, LightboxState, LightboxViewModel};
pub use contact_viewmodel::{ContactEvent, ContactState, ContactViewModel, SubmitControl};

/// Efecto diferido que pide un viewmodel: reinyectar `event` pasados `delay_ms`
#[derive(Clone, Debug, PartialEq)]
pub enum Command<E> {
    After { delay_ms: u32, event: E },
}

/// Componente de UI: `on_event(event) -> state'` + comandos
pub trait Component: 'static {
    type Event: 'static;
    /// Clone + PartialEq: el store solo re-pinta si el estado cambió
    type State: Clone + PartialEq + 'static;

    fn state(&self) -> &Self::State;

    fn on_event(&mut self, event: Self::Event) -> Vec<Command<Self::Event>>;
}
