// ============================================================================
// MENU VIEWMODEL - Menú hamburguesa (abierto/cerrado)
// ============================================================================

use super::{Command, Component};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Click en el botón hamburguesa
    Toggle,
    /// Click en cualquier link de navegación: siempre cierra
    LinkActivated,
}

#[derive(Default)]
pub struct MenuViewModel {
    state: MenuState,
}

impl MenuViewModel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for MenuViewModel {
    type Event = MenuEvent;
    type State = MenuState;

    fn state(&self) -> &MenuState {
        &self.state
    }

    fn on_event(&mut self, event: MenuEvent) -> Vec<Command<MenuEvent>> {
        match event {
            MenuEvent::Toggle => {
                self.state.open = !self.state.open;
                log::debug!("🍔 [MENU] Toggle -> open={}", self.state.open);
            }
            MenuEvent::LinkActivated => {
                self.state.open = false;
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut vm = MenuViewModel::new();
        assert!(!vm.state().open);
        vm.on_event(MenuEvent::Toggle);
        assert!(vm.state().open);
        vm.on_event(MenuEvent::Toggle);
        assert!(!vm.state().open);
    }

    #[test]
    fn test_link_always_closes() {
        let mut vm = MenuViewModel::new();
        vm.on_event(MenuEvent::Toggle);
        assert!(vm.on_event(MenuEvent::LinkActivated).is_empty());
        assert!(!vm.state().open);

        // Cerrado + link: sigue cerrado (no hace toggle)
        vm.on_event(MenuEvent::LinkActivated);
        assert!(!vm.state().open);
    }
}
