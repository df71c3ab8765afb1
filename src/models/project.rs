// ============================================================================
// PROJECT - Cards de proyecto y filtro por categoría
// ============================================================================

/// Tag comodín que muestra todas las cards
pub const ALL_CATEGORIES: &str = "all";

/// Filtro seleccionado (valor de `data-filter`)
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Tag(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Tag(tag) => tag,
        }
    }

    /// Una card es visible si el filtro es "all" o su categoría coincide exactamente.
    /// Cards sin categoría solo se ven con "all".
    pub fn matches(&self, card_category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Tag(tag) => card_category == Some(tag.as_str()),
        }
    }
}

/// Card de proyecto tal como viene en el markup
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ProjectCard {
    pub category: Option<String>,
}

impl ProjectCard {
    pub fn new(category: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_is_wildcard() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("web"), CategoryFilter::Tag("web".to_string()));
        // Coincidencia exacta, sin normalizar mayúsculas
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::Tag("All".to_string()));
    }

    #[test]
    fn test_matches() {
        let web = CategoryFilter::parse("web");
        assert!(web.matches(Some("web")));
        assert!(!web.matches(Some("mobile")));
        assert!(!web.matches(None));
        assert!(CategoryFilter::All.matches(None));
        assert!(CategoryFilter::All.matches(Some("mobile")));
    }

    #[test]
    fn test_card_keeps_only_category() {
        assert_eq!(
            ProjectCard::new(Some("web")),
            ProjectCard {
                category: Some("web".to_string())
            }
        );
        assert_eq!(ProjectCard::new(None), ProjectCard::default());
    }
}
