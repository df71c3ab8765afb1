// ============================================================================
// FILTER VIEWMODEL - Filtro de proyectos por categoría
// ============================================================================
// Mostrar una card re-dispara la animación fadeIn: primero `animation: none`
// y, pasados unos milisegundos, la animación real.
// ============================================================================

use super::{Command, Component};
use crate::models::{CategoryFilter, ProjectCard};

/// Estado de la animación de una card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardAnimation {
    /// Nunca se ha filtrado: no se toca el estilo
    #[default]
    Untouched,
    /// `animation: none` aplicado, esperando el re-trigger
    Reset,
    FadeIn,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardState {
    pub category: Option<String>,
    pub visible: bool,
    pub animation: CardAnimation,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// Tag de cada botón de filtro (`data-filter`), en orden del DOM
    pub controls: Vec<CategoryFilter>,
    pub active_control: Option<usize>,
    pub active: CategoryFilter,
    pub cards: Vec<CardState>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterEvent {
    /// Click en el botón de filtro `control`
    Select { control: usize },
    /// Timer del re-trigger de animación de la card `card`
    RestartAnimation { card: usize },
}

pub struct FilterViewModel {
    state: FilterState,
    restart_delay_ms: u32,
}

impl FilterViewModel {
    pub fn new(controls: Vec<CategoryFilter>, cards: &[ProjectCard], restart_delay_ms: u32) -> Self {
        // Al cargar: filtro "all", todas visibles
        let active_control = controls.iter().position(|c| *c == CategoryFilter::All);
        let cards = cards
            .iter()
            .map(|card| CardState {
                category: card.category.clone(),
                visible: true,
                animation: CardAnimation::Untouched,
            })
            .collect();

        Self {
            state: FilterState {
                controls,
                active_control,
                active: CategoryFilter::All,
                cards,
            },
            restart_delay_ms,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.state.cards.iter().filter(|card| card.visible).count()
    }

    fn apply(&mut self, filter: CategoryFilter) -> Vec<Command<FilterEvent>> {
        let mut commands = Vec::new();

        for (idx, card) in self.state.cards.iter_mut().enumerate() {
            card.visible = filter.matches(card.category.as_deref());
            if card.visible {
                card.animation = CardAnimation::Reset;
                commands.push(Command::After {
                    delay_ms: self.restart_delay_ms,
                    event: FilterEvent::RestartAnimation { card: idx },
                });
            }
        }

        self.state.active = filter;
        commands
    }
}

impl Component for FilterViewModel {
    type Event = FilterEvent;
    type State = FilterState;

    fn state(&self) -> &FilterState {
        &self.state
    }

    fn on_event(&mut self, event: FilterEvent) -> Vec<Command<FilterEvent>> {
        match event {
            FilterEvent::Select { control } => {
                let Some(filter) = self.state.controls.get(control).cloned() else {
                    log::warn!("⚠️ [FILTER] Botón de filtro {} desconocido", control);
                    return Vec::new();
                };
                self.state.active_control = Some(control);
                let commands = self.apply(filter);
                log::debug!(
                    "🔎 [FILTER] '{}' -> {} de {} cards visibles",
                    self.state.active.as_str(),
                    self.visible_count(),
                    self.state.cards.len()
                );
                commands
            }
            FilterEvent::RestartAnimation { card } => {
                if let Some(card) = self.state.cards.get_mut(card) {
                    if card.animation == CardAnimation::Reset {
                        card.animation = CardAnimation::FadeIn;
                    }
                }
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> FilterViewModel {
        let controls = ["all", "web", "mobile"]
            .iter()
            .map(|tag| CategoryFilter::parse(tag))
            .collect();
        let cards = [Some("web"), Some("mobile"), Some("web"), None]
            .iter()
            .map(|category| ProjectCard::new(*category))
            .collect::<Vec<_>>();
        FilterViewModel::new(controls, &cards, 10)
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let vm = setup();
        assert_eq!(vm.state().active, CategoryFilter::All);
        assert_eq!(vm.state().active_control, Some(0));
        assert_eq!(vm.visible_count(), 4);
        assert!(vm
            .state()
            .cards
            .iter()
            .all(|card| card.animation == CardAnimation::Untouched));
    }

    #[test]
    fn test_select_category_hides_others() {
        let mut vm = setup();
        let commands = vm.on_event(FilterEvent::Select { control: 1 });

        let visible: Vec<bool> = vm.state().cards.iter().map(|c| c.visible).collect();
        assert_eq!(visible, vec![true, false, true, false]);
        assert_eq!(vm.state().active_control, Some(1));

        // Un re-trigger por card visible
        assert_eq!(
            commands,
            vec![
                Command::After { delay_ms: 10, event: FilterEvent::RestartAnimation { card: 0 } },
                Command::After { delay_ms: 10, event: FilterEvent::RestartAnimation { card: 2 } },
            ]
        );
        assert_eq!(vm.state().cards[0].animation, CardAnimation::Reset);
        assert_eq!(vm.state().cards[1].animation, CardAnimation::Untouched);
    }

    #[test]
    fn test_all_shows_every_card() {
        let mut vm = setup();
        vm.on_event(FilterEvent::Select { control: 2 });
        assert_eq!(vm.visible_count(), 1);

        let commands = vm.on_event(FilterEvent::Select { control: 0 });
        assert_eq!(vm.visible_count(), 4);
        assert_eq!(commands.len(), 4);
    }

    #[test]
    fn test_restart_animation_after_reset() {
        let mut vm = setup();
        vm.on_event(FilterEvent::Select { control: 1 });
        vm.on_event(FilterEvent::RestartAnimation { card: 0 });
        assert_eq!(vm.state().cards[0].animation, CardAnimation::FadeIn);

        // Card que nunca se reseteó: no cambia
        vm.on_event(FilterEvent::RestartAnimation { card: 1 });
        assert_eq!(vm.state().cards[1].animation, CardAnimation::Untouched);
    }

    #[test]
    fn test_unknown_control_is_ignored() {
        let mut vm = setup();
        let before = vm.state().clone();
        assert!(vm.on_event(FilterEvent::Select { control: 9 }).is_empty());
        assert_eq!(*vm.state(), before);
    }
}
