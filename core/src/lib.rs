//! # desdec-core
//!
//! Content catalog and page-state logic for the Des and Dec marketing site.
//!
//! The single-page site has no backend and no persistence: every section
//! renders from hardcoded catalog data, and every interaction is a
//! synchronous transformation of in-memory state. This crate keeps that
//! data and those transformations out of the wasm UI crate so they can be
//! unit-tested natively.
//!
//! ## Quick Start
//!
//! ```rust
//! use desdec_core::catalog::{PACKAGES, SERVICES};
//! use desdec_core::contact::{known_options, FormMode};
//! use desdec_core::filter::filter_services;
//!
//! // What the services grid shows for a search term
//! let visible = filter_services(&SERVICES, "kitchen");
//! assert!(!visible.is_empty());
//!
//! // How the contact form reacts to a booking made elsewhere on the page
//! let options = known_options(&SERVICES, &PACKAGES);
//! let mode = FormMode::from_selection("Home Office Setup", &options);
//! assert!(mode.is_free_text());
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog record types
//! - [`catalog`] - The static content itself
//! - [`filter`] - Derived list views (services search, gallery categories)
//! - [`carousel`] - Testimonial rotation state machine
//! - [`contact`] - Contact-form mode derivation and the "Other" branch

pub mod carousel;
pub mod catalog;
pub mod contact;
pub mod filter;
pub mod types;

pub use carousel::{Carousel, ROTATION_INTERVAL_MS};
pub use contact::{apply_dropdown_choice, known_options, FormMode, OTHER_OPTION};
pub use filter::{filter_gallery, filter_services, GalleryFilter};
