//! Enumerated field values shared by DTOs, repositories, and route filters.
//!
//! Both enums serialize as lowercase strings and are stored as TEXT, so the
//! wire format matches the values the admin UI already sends.

use serde::{Deserialize, Serialize};

/// Gallery photo category. `All` is a sentinel: as a filter it matches
/// every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    All,
    Toc,
    Uon,
    Nhuom,
    Other,
}

impl GalleryCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            GalleryCategory::All => "all",
            GalleryCategory::Toc => "toc",
            GalleryCategory::Uon => "uon",
            GalleryCategory::Nhuom => "nhuom",
            GalleryCategory::Other => "other",
        }
    }

    /// Parse a path/query value. Unknown values are rejected so filters
    /// fail loudly instead of silently returning an empty list.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(GalleryCategory::All),
            "toc" => Some(GalleryCategory::Toc),
            "uon" => Some(GalleryCategory::Uon),
            "nhuom" => Some(GalleryCategory::Nhuom),
            "other" => Some(GalleryCategory::Other),
            _ => None,
        }
    }
}

/// Which page a testimonial appears on. `Both` rows match either page
/// filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialPage {
    Home,
    Services,
    Both,
}

impl TestimonialPage {
    pub fn as_str(self) -> &'static str {
        match self {
            TestimonialPage::Home => "home",
            TestimonialPage::Services => "services",
            TestimonialPage::Both => "both",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home" => Some(TestimonialPage::Home),
            "services" => Some(TestimonialPage::Services),
            "both" => Some(TestimonialPage::Both),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_category_round_trips_through_str() {
        for value in ["all", "toc", "uon", "nhuom", "other"] {
            let parsed = GalleryCategory::parse(value).unwrap();
            assert_eq!(parsed.as_str(), value);
        }
    }

    #[test]
    fn gallery_category_rejects_unknown_values() {
        assert_eq!(GalleryCategory::parse("perm"), None);
        assert_eq!(GalleryCategory::parse("ALL"), None);
    }

    #[test]
    fn testimonial_page_round_trips_through_str() {
        for value in ["home", "services", "both"] {
            let parsed = TestimonialPage::parse(value).unwrap();
            assert_eq!(parsed.as_str(), value);
        }
    }

    #[test]
    fn serde_uses_lowercase_representation() {
        let json = serde_json::to_string(&GalleryCategory::Nhuom).unwrap();
        assert_eq!(json, "\"nhuom\"");

        let page: TestimonialPage = serde_json::from_str("\"both\"").unwrap();
        assert_eq!(page, TestimonialPage::Both);
    }

    #[test]
    fn serde_rejects_out_of_set_values() {
        assert!(serde_json::from_str::<TestimonialPage>("\"footer\"").is_err());
    }
}
