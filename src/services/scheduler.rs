// ============================================================================
// SCHEDULER - Tareas diferidas cancelables
// ============================================================================
// `BrowserScheduler` usa gloo_timers (setTimeout real).
// `VirtualScheduler` mantiene un reloj virtual: los tests avanzan el tiempo
// con `advance()` en lugar de esperar delays reales.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;

/// Estado de una tarea programada
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed,
    Cancelled,
}

/// Handle de una tarea: señal de finalización + cancelación.
/// Soltar el handle NO cancela la tarea.
pub struct TaskHandle {
    status: Rc<Cell<TaskStatus>>,
    canceller: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl TaskHandle {
    fn new(status: Rc<Cell<TaskStatus>>, canceller: Option<Box<dyn FnOnce()>>) -> Self {
        Self {
            status,
            canceller: RefCell::new(canceller),
        }
    }

    pub fn status(&self) -> TaskStatus {
        self.status.get()
    }

    pub fn is_finished(&self) -> bool {
        self.status.get() != TaskStatus::Pending
    }

    /// Cancelar la tarea si sigue pendiente (no-op si ya terminó)
    pub fn cancel(&self) {
        if self.status.get() != TaskStatus::Pending {
            return;
        }
        self.status.set(TaskStatus::Cancelled);
        if let Some(canceller) = self.canceller.borrow_mut().take() {
            canceller();
        }
    }
}

/// Envuelve la tarea para que respete el estado del handle
fn guarded(status: Rc<Cell<TaskStatus>>, task: Box<dyn FnOnce()>) -> impl FnOnce() {
    move || {
        if status.get() == TaskStatus::Pending {
            task();
            status.set(TaskStatus::Completed);
        }
    }
}

pub trait Scheduler {
    /// Programar `task` para dentro de `delay_ms` milisegundos
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;
}

/// Scheduler real del navegador (setTimeout vía gloo_timers)
#[derive(Default)]
pub struct BrowserScheduler;

impl BrowserScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let status = Rc::new(Cell::new(TaskStatus::Pending));
        let timeout = Timeout::new(delay_ms, guarded(status.clone(), task));

        // forget() mantiene vivo el closure aunque se suelte el handle;
        // la cancelación usa el ID del timer.
        let timer_id: JsValue = timeout.forget();
        let canceller = move || {
            if let (Some(window), Some(id)) = (web_sys::window(), timer_id.as_f64()) {
                window.clear_timeout_with_handle(id as i32);
            }
        };

        TaskHandle::new(status, Some(Box::new(canceller)))
    }
}

struct VirtualTask {
    due: u64,
    seq: u64,
    run: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct VirtualQueue {
    now: u64,
    next_seq: u64,
    tasks: Vec<VirtualTask>,
    statuses: Vec<Rc<Cell<TaskStatus>>>,
}

/// Scheduler con reloj virtual, determinista
#[derive(Default)]
pub struct VirtualScheduler {
    queue: RefCell<VirtualQueue>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiempo virtual actual (ms)
    pub fn now(&self) -> u64 {
        self.queue.borrow().now
    }

    /// Número de tareas todavía pendientes (sin contar canceladas)
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .statuses
            .iter()
            .filter(|status| status.get() == TaskStatus::Pending)
            .count()
    }

    /// Avanzar el reloj `ms` milisegundos ejecutando las tareas vencidas en orden
    /// (tiempo de vencimiento, luego orden de inserción). Las tareas programadas
    /// por otras tareas dentro de la ventana también se ejecutan.
    pub fn advance(&self, ms: u64) {
        let target = self.queue.borrow().now + ms;

        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let position = queue
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due <= target)
                    .min_by_key(|(_, task)| (task.due, task.seq))
                    .map(|(idx, _)| idx);

                match position {
                    Some(idx) => {
                        let task = queue.tasks.remove(idx);
                        queue.now = task.due;
                        Some(task)
                    }
                    None => None,
                }
            };

            // Ejecutar fuera del borrow: la tarea puede programar otras
            match next {
                Some(task) => (task.run)(),
                None => break,
            }
        }

        let mut queue = self.queue.borrow_mut();
        queue.now = target;
        queue
            .statuses
            .retain(|status| status.get() == TaskStatus::Pending);
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let status = Rc::new(Cell::new(TaskStatus::Pending));
        let mut queue = self.queue.borrow_mut();
        let seq = queue.next_seq;
        queue.next_seq += 1;
        let due = queue.now + delay_ms as u64;
        queue.tasks.push(VirtualTask {
            due,
            seq,
            run: Box::new(guarded(status.clone(), task)),
        });
        queue.statuses.push(status.clone());

        // Cancelar solo marca el estado; advance() descarta la tarea al ejecutarla
        TaskHandle::new(status, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let log_clone = log.clone();
        let make = move |label: &'static str| {
            let log = log_clone.clone();
            Box::new(move || log.borrow_mut().push(label)) as Box<dyn FnOnce()>
        };
        (log, make)
    }

    #[test]
    fn test_runs_in_due_order() {
        let scheduler = VirtualScheduler::new();
        let (log, make) = recorder();

        scheduler.schedule(300, make("c"));
        scheduler.schedule(10, make("a"));
        scheduler.schedule(10, make("b"));

        scheduler.advance(9);
        assert!(log.borrow().is_empty());
        assert_eq!(scheduler.pending(), 3);

        scheduler.advance(1);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(scheduler.now(), 10);

        scheduler.advance(1000);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.now(), 1010);
    }

    #[test]
    fn test_cancel_prevents_run() {
        let scheduler = VirtualScheduler::new();
        let (log, make) = recorder();

        let handle = scheduler.schedule(100, make("never"));
        assert_eq!(handle.status(), TaskStatus::Pending);
        handle.cancel();
        assert_eq!(handle.status(), TaskStatus::Cancelled);
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(200);
        assert!(log.borrow().is_empty());
        assert_eq!(handle.status(), TaskStatus::Cancelled);
    }

    #[test]
    fn test_completion_signal_and_late_cancel() {
        let scheduler = VirtualScheduler::new();
        let (log, make) = recorder();

        let handle = scheduler.schedule(5, make("done"));
        scheduler.advance(5);
        assert!(handle.is_finished());
        assert_eq!(handle.status(), TaskStatus::Completed);

        // Cancelar algo ya terminado no cambia nada
        handle.cancel();
        assert_eq!(handle.status(), TaskStatus::Completed);
        assert_eq!(*log.borrow(), vec!["done"]);
    }

    #[test]
    fn test_nested_tasks_within_window() {
        let scheduler = Rc::new(VirtualScheduler::new());
        let log = Rc::new(RefCell::new(Vec::new()));

        {
            let inner_scheduler = scheduler.clone();
            let log = log.clone();
            scheduler.schedule(
                100,
                Box::new(move || {
                    log.borrow_mut().push(inner_scheduler.now());
                    let log = log.clone();
                    let clock = inner_scheduler.clone();
                    inner_scheduler.schedule(
                        50,
                        Box::new(move || log.borrow_mut().push(clock.now())),
                    );
                }),
            );
        }

        scheduler.advance(120);
        assert_eq!(*log.borrow(), vec![100]);
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(30);
        assert_eq!(*log.borrow(), vec![100, 150]);
    }
}
