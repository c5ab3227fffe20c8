//! Derived list views over the catalog.
//!
//! Each filter is a pure `(catalog, criterion) -> subsequence` function:
//! the visible set is recomputed in full on every criterion change and
//! always preserves catalog order. Empty results are a valid state, not an
//! error. At catalog sizes of tens of items nothing incremental is
//! warranted.

use crate::types::{Category, GalleryImage, Service};

/// Services whose title or description contains `query`, case-insensitive.
/// An empty query matches everything.
pub fn filter_services(catalog: &[Service], query: &str) -> Vec<Service> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|service| {
            service.title.to_lowercase().contains(&needle)
                || service.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Gallery filter criterion: either the "all" sentinel or one concrete
/// category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GalleryFilter {
    /// Match every image regardless of category
    #[default]
    All,
    /// Match only images in this category
    Only(Category),
}

impl GalleryFilter {
    /// Label for the filter bar ("all" or the category name).
    pub fn label(self) -> &'static str {
        match self {
            GalleryFilter::All => "all",
            GalleryFilter::Only(category) => category.label(),
        }
    }
}

/// Gallery images matching `filter`, in catalog order.
pub fn filter_gallery(catalog: &[GalleryImage], filter: GalleryFilter) -> Vec<GalleryImage> {
    match filter {
        GalleryFilter::All => catalog.to_vec(),
        GalleryFilter::Only(category) => catalog
            .iter()
            .filter(|image| image.category == category)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GALLERY, SERVICES};
    use pretty_assertions::assert_eq;

    fn matches(service: &Service, query: &str) -> bool {
        let needle = query.to_lowercase();
        service.title.to_lowercase().contains(&needle)
            || service.description.to_lowercase().contains(&needle)
    }

    #[test]
    fn empty_query_returns_catalog_unchanged() {
        assert_eq!(filter_services(&SERVICES, ""), *SERVICES);
    }

    #[test]
    fn query_is_case_insensitive() {
        let lower = filter_services(&SERVICES, "kitchen");
        let upper = filter_services(&SERVICES, "KITCHEN");
        assert_eq!(lower, upper);
        assert!(!lower.is_empty());
    }

    #[test]
    fn result_is_sound_and_complete() {
        for query in ["design", "Kerala", "smart", "z"] {
            let result = filter_services(&SERVICES, query);
            for service in &result {
                assert!(matches(service, query), "{:?} should match {query}", service.title);
            }
            for service in SERVICES.iter() {
                if matches(service, query) {
                    assert!(result.contains(service), "{:?} missing for {query}", service.title);
                }
            }
        }
    }

    #[test]
    fn result_preserves_catalog_order() {
        let result = filter_services(&SERVICES, "design");
        let positions: Vec<_> = result
            .iter()
            .map(|s| SERVICES.iter().position(|c| c == s).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        assert!(filter_services(&SERVICES, "submarine").is_empty());
    }

    #[test]
    fn gallery_all_returns_everything() {
        assert_eq!(filter_gallery(&GALLERY, GalleryFilter::All), *GALLERY);
    }

    #[test]
    fn gallery_category_returns_exact_members() {
        for category in Category::ALL {
            let result = filter_gallery(&GALLERY, GalleryFilter::Only(category));
            let expected: Vec<_> = GALLERY
                .iter()
                .filter(|g| g.category == category)
                .cloned()
                .collect();
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn filter_labels() {
        assert_eq!(GalleryFilter::All.label(), "all");
        assert_eq!(GalleryFilter::Only(Category::Kitchen).label(), "kitchen");
    }
}
