// ============================================================================
// SCROLL VIEW - Scroll suave hasta un elemento
// ============================================================================

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Alinear el borde superior de `target` con el inicio del viewport
pub fn smooth_scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
