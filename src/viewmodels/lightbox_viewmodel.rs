// ============================================================================
// LIGHTBOX VIEWMODEL - Overlay con la imagen a tamaño completo
// ============================================================================

use super::{Command, Component};

pub const ESCAPE_KEY: &str = "Escape";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    pub open: bool,
    /// Última imagen mostrada (se conserva al cerrar)
    pub image_src: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LightboxEvent {
    Open { src: String },
    CloseButton,
    /// Click dentro del overlay; `on_backdrop` es true si el target es el propio fondo
    OverlayClicked { on_backdrop: bool },
    KeyDown { key: String },
}

#[derive(Default)]
pub struct LightboxViewModel {
    state: LightboxState,
}

impl LightboxViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    fn close(&mut self) {
        if self.state.open {
            log::debug!("🖼️ [LIGHTBOX] Cerrado");
        }
        self.state.open = false;
    }
}

impl Component for LightboxViewModel {
    type Event = LightboxEvent;
    type State = LightboxState;

    fn state(&self) -> &LightboxState {
        &self.state
    }

    fn on_event(&mut self, event: LightboxEvent) -> Vec<Command<LightboxEvent>> {
        match event {
            LightboxEvent::Open { src } => {
                log::debug!("🖼️ [LIGHTBOX] Abriendo {}", src);
                self.state.image_src = Some(src);
                self.state.open = true;
            }
            LightboxEvent::CloseButton => self.close(),
            LightboxEvent::OverlayClicked { on_backdrop } => {
                if on_backdrop {
                    self.close();
                }
            }
            LightboxEvent::KeyDown { key } => {
                if key == ESCAPE_KEY && self.state.open {
                    self.close();
                }
            }
        }
        Vec::new()
    }
}
