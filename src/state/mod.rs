// ============================================================================
// STATE MODULE - Stores reactivos (Rc<RefCell>) + notificaciones
// ============================================================================

pub mod reactivity;

pub use reactivity::ComponentStore;
