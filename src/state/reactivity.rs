// ============================================================================
// REACTIVITY - Store por componente con notificaciones a las vistas
// ============================================================================
// dispatch(event) -> on_event del viewmodel -> notificar subscribers (render)
// solo si el estado cambió -> programar los comandos diferidos en el Scheduler.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::{Scheduler, TaskHandle};
use crate::viewmodels::{Command, Component};
use crate::views::View;

type Callback<S> = Box<dyn Fn(&S)>;

struct StoreInner<C: Component> {
    component: RefCell<C>,
    subscribers: RefCell<Vec<Callback<C::State>>>,
    scheduler: Rc<dyn Scheduler>,
    tasks: RefCell<Vec<TaskHandle>>,
}

/// Estado reactivo de un componente, compartible (Rc) entre listeners y timers
pub struct ComponentStore<C: Component> {
    inner: Rc<StoreInner<C>>,
}

impl<C: Component> Clone for ComponentStore<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C: Component> ComponentStore<C> {
    pub fn new(component: C, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                component: RefCell::new(component),
                subscribers: RefCell::new(Vec::new()),
                scheduler,
                tasks: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&C::State) + 'static,
    {
        self.inner.subscribers.borrow_mut().push(Box::new(callback));
    }

    /// Conectar una vista: se re-pinta tras cada cambio de estado
    pub fn attach_view(&self, view: Rc<dyn View<C::State>>) {
        self.subscribe(move |state| {
            if let Err(e) = view.render(state) {
                log::error!("❌ [RENDER] Error pintando la vista: {:?}", e);
            }
        });
    }

    /// Procesar un evento
    pub fn dispatch(&self, event: C::Event) {
        // El borrow mutable se suelta antes de notificar
        let (commands, changed) = {
            let mut component = self.inner.component.borrow_mut();
            let before = component.state().clone();
            let commands = component.on_event(event);
            let changed = *component.state() != before;
            (commands, changed)
        };
        if changed {
            self.notify();
        }

        let mut tasks = self.inner.tasks.borrow_mut();
        tasks.retain(|task| !task.is_finished());
        for command in commands {
            match command {
                Command::After { delay_ms, event } => {
                    let store = self.clone();
                    let handle = self
                        .inner
                        .scheduler
                        .schedule(delay_ms, Box::new(move || store.dispatch(event)));
                    tasks.push(handle);
                }
            }
        }
    }

    /// Leer el estado actual
    pub fn with_state<R, F>(&self, reader: F) -> R
    where
        F: FnOnce(&C::State) -> R,
    {
        reader(self.inner.component.borrow().state())
    }

    /// Tareas diferidas todavía pendientes
    pub fn pending_tasks(&self) -> usize {
        self.inner
            .tasks
            .borrow()
            .iter()
            .filter(|task| !task.is_finished())
            .count()
    }

    /// Cancelar todos los timers pendientes (desmontaje)
    pub fn cancel_pending(&self) {
        for task in self.inner.tasks.borrow_mut().drain(..) {
            task.cancel();
        }
    }

    fn notify(&self) {
        let component = self.inner.component.borrow();
        for callback in self.inner.subscribers.borrow().iter() {
            callback(component.state());
        }
    }
}
