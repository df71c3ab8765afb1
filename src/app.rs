// ============================================================================
// APP - Controlador de la página
// ============================================================================
// Localiza los elementos del markup UNA vez, construye los viewmodels con sus
// vistas y un scheduler compartido, y registra los listeners.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, HtmlButtonElement, HtmlFormElement, HtmlImageElement, KeyboardEvent, MouseEvent};

use crate::config::AppConfig;
use crate::dom::{
    body, cast, get_attribute, on_blur, on_click, on_document_keydown, on_submit, query_selector,
    query_selector_all, query_within, require_element_by_id, require_selector,
};
use crate::models::{CategoryFilter, Field, ProjectCard};
use crate::services::Scheduler;
use crate::state::ComponentStore;
use crate::utils::constants::*;
use crate::viewmodels::{
    plan_anchor_scroll, ContactEvent, ContactViewModel, FilterEvent, FilterViewModel,
    LightboxEvent, LightboxViewModel, MenuEvent, MenuViewModel, ScrollPlan,
};
use crate::views::{
    inject_fade_keyframes, smooth_scroll_to, DomContactView, DomFilterView, DomLightboxView,
    DomMenuView,
};

/// Elementos del markup que necesitan listeners
struct PageElements {
    hamburger: Element,
    nav_links: Element,
    filter_controls: Vec<Element>,
    /// Primera imagen de cada card (las cards sin imagen no abren lightbox)
    card_images: Vec<HtmlImageElement>,
    lightbox: Element,
    lightbox_close: Element,
}

/// Aplicación principal: un contexto por página
pub struct App {
    elements: PageElements,
    menu: ComponentStore<MenuViewModel>,
    filter: ComponentStore<FilterViewModel>,
    lightbox: ComponentStore<LightboxViewModel>,
    contact: ComponentStore<ContactViewModel>,
    contact_view: Rc<DomContactView>,
}

impl App {
    /// Crear la aplicación a partir del DOM actual
    pub fn new(config: &AppConfig, scheduler: Rc<dyn Scheduler>) -> Result<Self, JsValue> {
        // Menú
        let hamburger = require_element_by_id(HAMBURGER_ID)?;
        let nav_links = require_element_by_id(NAV_LINKS_ID)?;
        let menu = ComponentStore::new(MenuViewModel::new(), scheduler.clone());
        menu.attach_view(Rc::new(DomMenuView::new(hamburger.clone(), nav_links.clone())));

        // Filtro de proyectos
        let mut filter_controls = Vec::new();
        let mut filters = Vec::new();
        for control in query_selector_all(FILTER_BUTTON_SELECTOR)? {
            match get_attribute(&control, FILTER_ATTR) {
                Some(tag) => {
                    filters.push(CategoryFilter::parse(&tag));
                    filter_controls.push(control);
                }
                None => log::warn!("⚠️ [FILTER] Botón sin {}, ignorado", FILTER_ATTR),
            }
        }

        let card_elements = query_selector_all(PROJECT_CARD_SELECTOR)?;
        let mut cards = Vec::with_capacity(card_elements.len());
        let mut card_images = Vec::new();
        for card in &card_elements {
            let image = query_within(card, "img")?
                .into_iter()
                .next()
                .and_then(|img| cast::<HtmlImageElement>(img, "card img").ok());
            cards.push(ProjectCard::new(get_attribute(card, CATEGORY_ATTR).as_deref()));
            card_images.extend(image);
        }

        let filter = ComponentStore::new(
            FilterViewModel::new(filters, &cards, config.timing.animation_restart_ms),
            scheduler.clone(),
        );
        filter.attach_view(Rc::new(DomFilterView::new(
            filter_controls.clone(),
            card_elements,
            config.timing.fade_animation(),
        )));

        // Lightbox
        let lightbox_el = require_element_by_id(LIGHTBOX_ID)?;
        let lightbox_image = cast::<HtmlImageElement>(
            require_element_by_id(LIGHTBOX_IMAGE_ID)?,
            LIGHTBOX_IMAGE_ID,
        )?;
        let lightbox_close = require_selector(LIGHTBOX_CLOSE_SELECTOR)?;
        let lightbox = ComponentStore::new(LightboxViewModel::new(), scheduler.clone());
        lightbox.attach_view(Rc::new(DomLightboxView::new(
            lightbox_el.clone(),
            lightbox_image,
            body()?,
        )));

        // Formulario de contacto
        let form_el = require_element_by_id(CONTACT_FORM_ID)?;
        let submit = query_within(&form_el, SUBMIT_BUTTON_SELECTOR)?
            .into_iter()
            .next()
            .ok_or_else(|| JsValue::from_str("No .submit-btn inside #contactForm"))?;
        let submit = cast::<HtmlButtonElement>(submit, SUBMIT_BUTTON_SELECTOR)?;
        let form = cast::<HtmlFormElement>(form_el, CONTACT_FORM_ID)?;

        let mut inputs = Vec::with_capacity(Field::ALL.len());
        for field in Field::ALL {
            inputs.push((field, require_element_by_id(field.id())?));
        }
        let success = require_element_by_id(SUCCESS_MESSAGE_ID)?;

        let contact_view = Rc::new(DomContactView::new(form, inputs, success, submit));
        let contact = ComponentStore::new(ContactViewModel::new(config), scheduler);
        contact.attach_view(contact_view.clone());

        Ok(Self {
            elements: PageElements {
                hamburger,
                nav_links,
                filter_controls,
                card_images,
                lightbox: lightbox_el,
                lightbox_close,
            },
            menu,
            filter,
            lightbox,
            contact,
            contact_view,
        })
    }

    /// Registrar todos los listeners
    pub fn mount(&self) -> Result<(), JsValue> {
        inject_fade_keyframes()?;

        self.bind_menu()?;
        self.bind_smooth_scroll()?;
        self.bind_filter()?;
        self.bind_lightbox()?;
        self.bind_contact_form()?;

        log::info!("✅ [APP] Portfolio cargado correctamente");
        log::info!("   ✓ Navegación móvil");
        log::info!("   ✓ Filtro de proyectos");
        log::info!("   ✓ Galería lightbox");
        log::info!("   ✓ Validación de formulario");
        Ok(())
    }

    /// Cancelar los timers pendientes de todos los componentes
    pub fn cancel_pending_timers(&self) {
        self.menu.cancel_pending();
        self.filter.cancel_pending();
        self.lightbox.cancel_pending();
        self.contact.cancel_pending();
    }

    fn bind_menu(&self) -> Result<(), JsValue> {
        let menu = self.menu.clone();
        on_click(&self.elements.hamburger, move |_e: MouseEvent| {
            menu.dispatch(MenuEvent::Toggle);
        })?;

        for link in query_within(&self.elements.nav_links, NAV_LINK_SELECTOR)? {
            let menu = self.menu.clone();
            on_click(&link, move |_e: MouseEvent| {
                menu.dispatch(MenuEvent::LinkActivated);
            })?;
        }
        Ok(())
    }

    fn bind_smooth_scroll(&self) -> Result<(), JsValue> {
        for anchor in query_selector_all(ANCHOR_SELECTOR)? {
            let anchor_clone = anchor.clone();
            on_click(&anchor, move |e: MouseEvent| {
                let href = get_attribute(&anchor_clone, "href").unwrap_or_default();

                // Selector inválido (p.ej. "#1abc") = sin destino
                let plan =
                    plan_anchor_scroll(&href, |selector| query_selector(selector).ok().flatten());

                if plan.prevents_default() {
                    e.prevent_default();
                }
                match plan {
                    ScrollPlan::SmoothScroll { target } => smooth_scroll_to(&target),
                    ScrollPlan::NoTarget => {
                        log::debug!("🔗 [SCROLL] Sin destino para '{}'", href);
                    }
                    ScrollPlan::PassThrough => {}
                }
            })?;
        }
        Ok(())
    }

    fn bind_filter(&self) -> Result<(), JsValue> {
        for (idx, control) in self.elements.filter_controls.iter().enumerate() {
            let filter = self.filter.clone();
            on_click(control, move |_e: MouseEvent| {
                filter.dispatch(FilterEvent::Select { control: idx });
            })?;
        }
        Ok(())
    }

    fn bind_lightbox(&self) -> Result<(), JsValue> {
        for image in &self.elements.card_images {
            let lightbox = self.lightbox.clone();
            let image_clone = image.clone();
            on_click(image, move |_e: MouseEvent| {
                lightbox.dispatch(LightboxEvent::Open {
                    src: image_clone.src(),
                });
            })?;
        }

        let lightbox = self.lightbox.clone();
        on_click(&self.elements.lightbox_close, move |_e: MouseEvent| {
            lightbox.dispatch(LightboxEvent::CloseButton);
        })?;

        // Click en el fondo (no en la imagen)
        let lightbox = self.lightbox.clone();
        let backdrop: EventTarget = self.elements.lightbox.clone().into();
        on_click(&self.elements.lightbox, move |e: MouseEvent| {
            let on_backdrop = e.target().as_ref() == Some(&backdrop);
            lightbox.dispatch(LightboxEvent::OverlayClicked { on_backdrop });
        })?;

        let lightbox = self.lightbox.clone();
        on_document_keydown("lightbox-escape", move |e: KeyboardEvent| {
            lightbox.dispatch(LightboxEvent::KeyDown { key: e.key() });
        })?;
        Ok(())
    }

    fn bind_contact_form(&self) -> Result<(), JsValue> {
        for field in Field::ALL {
            let Some(input) = self.contact_view.input(field) else {
                continue;
            };
            let contact = self.contact.clone();
            let view = self.contact_view.clone();
            on_blur(input, move |_e: web_sys::FocusEvent| {
                contact.dispatch(ContactEvent::Blur {
                    field,
                    values: view.read_values(),
                });
            })?;
        }

        let contact = self.contact.clone();
        let view = self.contact_view.clone();
        on_submit(self.contact_view.form(), move |e: Event| {
            e.prevent_default();
            contact.dispatch(ContactEvent::Submit {
                values: view.read_values(),
                submit_label: view.submit_label(),
            });
        })?;
        Ok(())
    }
}
