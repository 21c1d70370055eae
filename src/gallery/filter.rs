use std::fmt;

use crate::gallery::item::GalleryItem;

/// Category projection of the gallery.
///
/// Matching ignores case, so `"events"`, `"Events"` and `"EVENTS"` select the
/// same items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parses a filter tab label. `"all"` (any case) or a blank label means no filter.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }

    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => item.category.to_lowercase() == category.to_lowercase(),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(category) => f.write_str(&category.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_treats_all_and_blank_as_unfiltered() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("  "), CategoryFilter::All);
        assert!(CategoryFilter::parse("Events").is_active());
    }

    #[test]
    fn matching_ignores_case() {
        let item = GalleryItem::new(1, "AGM", "Events");
        assert!(CategoryFilter::parse("EVENTS").matches(&item));
        assert!(CategoryFilter::parse("events").matches(&item));
        assert!(!CategoryFilter::parse("Education").matches(&item));
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(CategoryFilter::parse("Workshops").to_string(), "workshops");
        assert_eq!(CategoryFilter::All.to_string(), "all");
    }
}
