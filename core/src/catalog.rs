//! The static content catalog.
//!
//! Everything the page renders comes from these statics. They're built once
//! on first access and never mutated; runtime state (filters, the selection
//! relay, the carousel cursor) lives in the UI layer and only ever derives
//! views over this data.

use std::sync::LazyLock;

use crate::types::{
    BusinessInfo, Category, GalleryImage, Package, ProcessStep, Review, Service, Stat,
};

/// Company details for the contact section and footer.
pub static BUSINESS_INFO: LazyLock<BusinessInfo> = LazyLock::new(|| BusinessInfo {
    name: "Des and Dec Private Limited".into(),
    address: "First Floor, K-Complex, Kowdiar, Thiruvananthapuram, Kerala 695003".into(),
    phone: "+91 94477 66111".into(),
    email: "info@desanddec.com".into(),
    hours: vec![
        ("Monday - Saturday".into(), "9:30 AM - 6:30 PM".into()),
        ("Sunday".into(), "By Appointment".into()),
    ],
});

/// The eight services shown in the searchable grid.
pub static SERVICES: LazyLock<Vec<Service>> = LazyLock::new(|| {
    vec![
        Service {
            id: "1".into(),
            title: "Luxury Interior Design".into(),
            description: "Bespoke residential interiors focusing on comfort, luxury, and functionality using premium materials.".into(),
            price: Some("Turnkey Solutions".into()),
            image: "https://images.unsplash.com/photo-1618221195710-dd6b41faaea6?q=80&w=1000&auto=format&fit=crop".into(),
        },
        Service {
            id: "2".into(),
            title: "Architectural Design".into(),
            description: "Innovative building designs that harmonize with the tropical landscape of Kerala while embracing modern tech.".into(),
            price: Some("Consultation Basis".into()),
            image: "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?q=80&w=1000&auto=format&fit=crop".into(),
        },
        Service {
            id: "3".into(),
            title: "Commercial & Office".into(),
            description: "Productive workspaces and retail environments designed to elevate brand identity and efficiency.".into(),
            price: None,
            image: "https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=1000&auto=format&fit=crop".into(),
        },
        Service {
            id: "4".into(),
            title: "Civil Construction".into(),
            description: "High-quality construction services with rigorous project management and structural integrity.".into(),
            price: None,
            image: "https://images.unsplash.com/photo-1541976534312-301099f4d173?q=80&w=1000&auto=format&fit=crop".into(),
        },
        Service {
            id: "5".into(),
            title: "Modular Kitchens".into(),
            description: "State-of-the-art ergonomic kitchens with international fittings and optimized storage solutions.".into(),
            price: None,
            image: "https://images.unsplash.com/photo-1556911220-e15b29be8c8f?q=80&w=1000&auto=format&fit=crop".into(),
        },
        Service {
            id: "6".into(),
            title: "Landscape Design".into(),
            description: "Creating outdoor sanctuaries that extend the living space into nature seamlessly.".into(),
            price: None,
            image: "https://images.unsplash.com/photo-1558449028-b53a39d100fc?q=80&w=1000&auto=format&fit=crop".into(),
        },
        Service {
            id: "7".into(),
            title: "MEP Services".into(),
            description: "Integrated Mechanical, Electrical, and Plumbing engineering for smart, safe, and efficient homes.".into(),
            price: None,
            image: "https://images.unsplash.com/photo-1581094794329-c8112a89af12?q=80&w=1000&auto=format&fit=crop".into(),
        },
        Service {
            id: "8".into(),
            title: "Home Automation".into(),
            description: "Seamlessly integrated smart home technologies for modern convenience and enhanced security.".into(),
            price: None,
            image: "https://images.unsplash.com/photo-1558002038-1055907df827?q=80&w=1000&auto=format&fit=crop".into(),
        },
    ]
});

/// The three investment packages. Exactly one is flagged popular.
pub static PACKAGES: LazyLock<Vec<Package>> = LazyLock::new(|| {
    vec![
        Package {
            id: "pkg_classic".into(),
            name: "Classic Package".into(),
            tagline: "Essential Excellence for Modern Living".into(),
            price: "Standard".into(),
            features: vec![
                "Modular Kitchen (710 Grade BWP Plywood)".into(),
                "Essential Wardrobes for 2 Bedrooms".into(),
                "Standard TV Unit & Shoe Rack".into(),
                "Basic Electrical & Plumbing Points".into(),
                "High-Quality Hardware with Soft-Close".into(),
                "1.0mm Laminate Exterior Finishes".into(),
                "1 Year Comprehensive Service Warranty".into(),
            ],
            is_popular: false,
        },
        Package {
            id: "pkg_pride".into(),
            name: "Pride Package".into(),
            tagline: "The Perfect Balance of Style & Luxury".into(),
            price: "Premium".into(),
            features: vec![
                "All Classic + Wardrobes for 3 Bedrooms".into(),
                "Acrylic or Glass Finish Kitchen Shutters".into(),
                "Designer False Ceiling in Living & Dining".into(),
                "LED Cove Lighting & Profile Spotlights".into(),
                "Premium Wall Paneling in Master Suite".into(),
                "International Hardware (Hettich/Hafele)".into(),
                "5 Year Extended Warranty Support".into(),
            ],
            is_popular: true,
        },
        Package {
            id: "pkg_elite".into(),
            name: "Elite Package".into(),
            tagline: "Bespoke Ultra-Luxury Masterpiece".into(),
            price: "Luxury".into(),
            features: vec![
                "Full Home Automation (Lighting & Curtains)".into(),
                "Premium Italian Marble or Large Format Tiles".into(),
                "Luxury Modular Kitchen with Island/Breakfast Counter".into(),
                "Bespoke Designer Loose Furniture Set".into(),
                "Home Cinema or High-End Acoustic Paneling".into(),
                "Luxury Sanitary & Wellness Fittings".into(),
                "Lifetime Design & Consultation Support".into(),
            ],
            is_popular: false,
        },
    ]
});

/// Client testimonials for the carousel.
pub static REVIEWS: LazyLock<Vec<Review>> = LazyLock::new(|| {
    vec![
        Review {
            id: "r1".into(),
            author: "Dr. Rahul Menon".into(),
            rating: 5,
            comment: "The team at Des and Dec transformed our villa in Kowdiar beyond our expectations. Their turnkey approach meant we didn't have to worry about a single detail.".into(),
            date: "1 month ago".into(),
        },
        Review {
            id: "r2".into(),
            author: "Saritha Varma".into(),
            rating: 5,
            comment: "Exceptional design aesthetics. They have a way of bringing traditional Kerala elements into a very modern, minimalist framework.".into(),
            date: "2 months ago".into(),
        },
        Review {
            id: "r3".into(),
            author: "K. Jayachandran".into(),
            rating: 5,
            comment: "Highly professional engineers and designers. The 3D visualizations were so accurate, the final result was exactly what we saw on screen.".into(),
            date: "5 days ago".into(),
        },
    ]
});

/// Project photos for the filterable gallery.
pub static GALLERY: LazyLock<Vec<GalleryImage>> = LazyLock::new(|| {
    vec![
        GalleryImage {
            id: "g1".into(),
            url: "https://images.unsplash.com/photo-1616486341353-c5833cd717b2?q=80&w=800&auto=format&fit=crop".into(),
            category: Category::Living,
            alt: "Luxury living room in Trivandrum".into(),
        },
        GalleryImage {
            id: "g2".into(),
            url: "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?q=80&w=800&auto=format&fit=crop".into(),
            category: Category::Kitchen,
            alt: "Modern minimalist kitchen design".into(),
        },
        GalleryImage {
            id: "g3".into(),
            url: "https://images.unsplash.com/photo-1617806118233-18e16208a50a?q=80&w=800&auto=format&fit=crop".into(),
            category: Category::Residential,
            alt: "Bespoke master bedroom".into(),
        },
        GalleryImage {
            id: "g4".into(),
            url: "https://images.unsplash.com/photo-1497366754035-f200968a6e72?q=80&w=800&auto=format&fit=crop".into(),
            category: Category::Commercial,
            alt: "Corporate office design Kerala".into(),
        },
        GalleryImage {
            id: "g5".into(),
            url: "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?q=80&w=800&auto=format&fit=crop".into(),
            category: Category::Living,
            alt: "Contemporary dining hall".into(),
        },
        GalleryImage {
            id: "g6".into(),
            url: "https://images.unsplash.com/photo-1541123437800-1bb1317badc2?q=80&w=800&auto=format&fit=crop".into(),
            category: Category::Residential,
            alt: "Luxury bath suite".into(),
        },
    ]
});

/// Headline figures for the hero stats strip.
pub static STATS: LazyLock<Vec<Stat>> = LazyLock::new(|| {
    vec![
        Stat { label: "Years of Experience".into(), value: "15+".into() },
        Stat { label: "Completed Projects".into(), value: "500+".into() },
        Stat { label: "Expert Professionals".into(), value: "50+".into() },
        Stat { label: "Satisfied Clients".into(), value: "450+".into() },
    ]
});

/// The firm's engagement process, in order.
pub static PROCESS_STEPS: LazyLock<Vec<ProcessStep>> = LazyLock::new(|| {
    vec![
        ProcessStep {
            title: "Discovery".into(),
            description: "Initial consultation to understand your lifestyle, preferences, and vision for the space.".into(),
        },
        ProcessStep {
            title: "Planning".into(),
            description: "Detailed spatial analysis, budgeting, and timeline creation to ensure a seamless execution.".into(),
        },
        ProcessStep {
            title: "Design".into(),
            description: "Crafting bespoke 3D visualizations and selecting materials that define your unique aesthetic.".into(),
        },
        ProcessStep {
            title: "Execution".into(),
            description: "Turnkey implementation where our engineers and artisans bring the design to life.".into(),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn unique_ids<'a>(ids: impl Iterator<Item = &'a str>) -> bool {
        let mut seen = HashSet::new();
        ids.into_iter().all(|id| seen.insert(id))
    }

    #[test]
    fn service_ids_unique_and_titles_non_empty() {
        assert!(unique_ids(SERVICES.iter().map(|s| s.id.as_str())));
        assert!(SERVICES.iter().all(|s| !s.title.is_empty()));
    }

    #[test]
    fn package_ids_unique() {
        assert!(unique_ids(PACKAGES.iter().map(|p| p.id.as_str())));
    }

    #[test]
    fn at_most_one_popular_package() {
        let popular = PACKAGES.iter().filter(|p| p.is_popular).count();
        assert!(popular <= 1, "popular is a display convention: one badge max");
    }

    #[test]
    fn review_and_gallery_ids_unique() {
        assert!(unique_ids(REVIEWS.iter().map(|r| r.id.as_str())));
        assert!(unique_ids(GALLERY.iter().map(|g| g.id.as_str())));
    }

    #[test]
    fn ratings_in_expected_range() {
        assert!(REVIEWS.iter().all(|r| (1..=5).contains(&r.rating)));
    }

    #[test]
    fn business_hours_ordered() {
        let days: Vec<_> = BUSINESS_INFO.hours.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(days, vec!["Monday - Saturday", "Sunday"]);
    }
}
