// ============================================================================
// SCROLL VIEWMODEL - Decide qué hacer con un click en un anchor "#..."
// ============================================================================

/// Qué hacer con el click; `T` es el destino ya resuelto en el documento
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollPlan<T> {
    /// `href="#"`: no se toca el comportamiento por defecto
    PassThrough,
    /// El destino no existe: se ignora en silencio
    NoTarget,
    /// preventDefault + scroll suave hasta `target`
    SmoothScroll { target: T },
}

/// Resolver un `href` de anchor. `resolve` busca el destino en el documento
/// (un selector inválido cuenta como inexistente).
pub fn plan_anchor_scroll<T, F>(href: &str, resolve: F) -> ScrollPlan<T>
where
    F: FnOnce(&str) -> Option<T>,
{
    if href == "#" || !href.starts_with('#') {
        return ScrollPlan::PassThrough;
    }

    match resolve(href) {
        Some(target) => ScrollPlan::SmoothScroll { target },
        None => ScrollPlan::NoTarget,
    }
}

impl<T> ScrollPlan<T> {
    /// Solo el scroll suave suprime la navegación por defecto
    pub fn prevents_default(&self) -> bool {
        matches!(self, ScrollPlan::SmoothScroll { .. })
    }
}
