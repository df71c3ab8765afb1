// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window,
};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener <body>
pub fn body() -> Result<HtmlElement, JsValue> {
    document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| JsValue::from_str("No body"))
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener elemento por ID o error con el ID que falta
pub fn require_element_by_id(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))
}

/// Cast de Element a un tipo concreto (HtmlImageElement, HtmlFormElement...)
pub fn cast<T: JsCast>(element: Element, what: &str) -> Result<T, JsValue> {
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("{} has unexpected element type", what)))
}

/// Query selector (un selector inválido devuelve Err)
pub fn query_selector(selector: &str) -> Result<Option<Element>, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)
}

/// Query selector obligatorio
pub fn require_selector(selector: &str) -> Result<Element, JsValue> {
    query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("No element matches '{}'", selector)))
}

/// Query selector all sobre todo el documento
pub fn query_selector_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    let list = doc.query_selector_all(selector)?;
    Ok(node_list_elements(&list))
}

/// Query selector all dentro de un elemento
pub fn query_within(parent: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = parent.query_selector_all(selector)?;
    Ok(node_list_elements(&list))
}

fn node_list_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

/// Agregar o remover clase según `on`
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    if on {
        add_class(element, class)
    } else {
        remove_class(element, class)
    }
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Obtener atributo
pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Establecer una propiedad de estilo inline (`style.setProperty`)
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property(property, value)
}

/// Valor actual de un <input> o <textarea>
pub fn input_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}
