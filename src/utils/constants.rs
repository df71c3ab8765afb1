// IDs, selectores y clases CSS del markup del portfolio

pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_LINKS_ID: &str = "navLinks";
pub const NAV_LINK_SELECTOR: &str = "a";

pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const FILTER_ATTR: &str = "data-filter";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const CATEGORY_ATTR: &str = "data-category";

pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_IMAGE_ID: &str = "lightboxImage";
pub const LIGHTBOX_CLOSE_SELECTOR: &str = ".lightbox-close";

pub const CONTACT_FORM_ID: &str = "contactForm";
pub const SUCCESS_MESSAGE_ID: &str = "successMessage";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".submit-btn";

pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const ERROR_CLASS: &str = "error";
