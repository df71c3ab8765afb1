// ============================================================================
// STYLES - Regla @keyframes fadeIn inyectada en <head>
// ============================================================================

use wasm_bindgen::JsValue;

use crate::dom::{document, get_element_by_id, set_attribute, set_text_content};

const STYLE_ID: &str = "portfolio-fade-keyframes";

const FADE_KEYFRAMES: &str = r#"
    @keyframes fadeIn {
        from {
            opacity: 0;
            transform: translateY(10px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }
"#;

/// Inyectar la animación de las cards (una sola vez por página)
pub fn inject_fade_keyframes() -> Result<(), JsValue> {
    if get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }

    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    let head = doc.head().ok_or_else(|| JsValue::from_str("No head"))?;

    let style = doc.create_element("style")?;
    set_attribute(&style, "id", STYLE_ID)?;
    set_text_content(&style, FADE_KEYFRAMES);
    head.append_child(&style)?;

    log::debug!("🎨 [STYLES] Keyframes fadeIn inyectados");
    Ok(())
}
