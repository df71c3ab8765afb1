// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners en elementos del DOM: el markup del portfolio es estático y vive
//   toda la sesión, así que closure.forget() es seguro.
// - Listeners globales (document): solo deben registrarse UNA VEZ. Se protege
//   con un flag por tipo de evento para evitar acumulación.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, FocusEvent, KeyboardEvent, MouseEvent};

thread_local! {
    static GLOBAL_LISTENERS: RefCell<HashSet<&'static str>> = RefCell::new(HashSet::new());
}

/// Registrar un listener genérico y mantener vivo el closure
fn listen<E, F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Helper para click handler
pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen::<MouseEvent, _>(target, "click", handler)
}

/// Helper para blur (pérdida de foco)
pub fn on_blur<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(FocusEvent) + 'static,
{
    listen::<FocusEvent, _>(target, "blur", handler)
}

/// Helper para submit de formulario
pub fn on_submit<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen::<Event, _>(target, "submit", handler)
}

/// Listener global de keydown en document. Solo se registra una vez por `key`;
/// devuelve false si ya estaba registrado.
pub fn on_document_keydown<F>(key: &'static str, handler: F) -> Result<bool, JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    let first = GLOBAL_LISTENERS.with(|registered| registered.borrow_mut().insert(key));
    if !first {
        log::warn!("⚠️ [EVENTS] Listener global '{}' ya registrado, ignorando", key);
        return Ok(false);
    }

    let document = super::document().ok_or_else(|| JsValue::from_str("No document"))?;
    listen::<KeyboardEvent, _>(&document, "keydown", handler)?;
    Ok(true)
}
