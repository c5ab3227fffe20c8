//! Catalog data types for the site content.
//!
//! These types define the data model behind every section of the page.
//! They're designed to be:
//!
//! - **Serializable** - Easy JSON import/export via serde
//! - **Clone-friendly** - Components can share data without borrowing issues
//! - **Immutable in practice** - The catalog is built once at startup and
//!   never mutated; all runtime state lives outside these records
//!
//! # Example
//!
//! ```rust
//! use desdec_core::types::{Category, GalleryImage};
//!
//! let image = GalleryImage {
//!     id: "g1".into(),
//!     url: "https://example.com/villa.jpg".into(),
//!     category: Category::Residential,
//!     alt: "Bespoke master bedroom".into(),
//! };
//! assert_eq!(image.category.label(), "residential");
//! ```

use serde::{Deserialize, Serialize};

/// A single service offered by the firm, rendered as a card in the
/// services grid and listed in the contact form dropdown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Unique id across the service catalog
    pub id: String,
    /// Display title, also used as the selection value when booking
    pub title: String,
    /// One-paragraph description shown on the card
    pub description: String,
    /// Optional pricing label ("Turnkey Solutions", "Consultation Basis")
    pub price: Option<String>,
    /// Background image URL for the card
    pub image: String,
}

/// A fixed-price interior package (Classic / Pride / Elite tier).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Unique id across the package catalog
    pub id: String,
    /// Package name, also used as the selection value
    pub name: String,
    /// Short marketing line under the name
    pub tagline: String,
    /// Price tier label ("Standard", "Premium", "Luxury")
    pub price: String,
    /// Ordered feature bullet points
    pub features: Vec<String>,
    /// Display convention: at most one package carries this flag
    pub is_popular: bool,
}

/// A client testimonial shown in the rotating carousel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    /// Star rating, expected in 1..=5 (not validated)
    pub rating: u8,
    pub comment: String,
    /// Relative date label ("1 month ago")
    pub date: String,
}

/// Closed set of gallery categories. The filter bar renders exactly these
/// plus an "all" sentinel; an image outside this set cannot exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Residential,
    Commercial,
    Kitchen,
    Living,
}

impl Category {
    /// Every category, in the order the filter bar shows them.
    pub const ALL: [Category; 4] = [
        Category::Residential,
        Category::Commercial,
        Category::Kitchen,
        Category::Living,
    ];

    /// Lowercase label matching the serde representation.
    pub fn label(self) -> &'static str {
        match self {
            Category::Residential => "residential",
            Category::Commercial => "commercial",
            Category::Kitchen => "kitchen",
            Category::Living => "living",
        }
    }
}

/// A project photo in the filterable gallery grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    pub category: Category,
    /// Alt text, doubles as the caption on hover
    pub alt: String,
}

/// Static company details shown in the contact section and footer.
///
/// `hours` keeps its entries ordered, so it's a vec of
/// (day range, hours string) pairs rather than a map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// ("Monday - Saturday", "9:30 AM - 6:30 PM") style pairs
    pub hours: Vec<(String, String)>,
}

/// A headline figure for the hero stats strip ("15+" years, "500+" projects).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// One step of the firm's four-step engagement process.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Kitchen).unwrap();
        assert_eq!(json, "\"kitchen\"");
    }

    #[test]
    fn category_labels_match_order() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["residential", "commercial", "kitchen", "living"]);
    }
}
