// Page sections for the Des and Dec site

use leptos::prelude::*;

/// Company logo used in the navbar and footer (single source of truth)
pub const LOGO_URL: &str =
    "https://prompt-library-static-assets.s3.amazonaws.com/ms-m0v7q3m8/0f243888-9d41-477f-a648-5c4558e8073b.png";

/// Element id of the contact section, the target of every booking action
pub const CONTACT_SECTION_ID: &str = "contact";

mod about;
mod contact;
mod footer;
mod gallery;
mod hero;
mod nav;
mod packages;
mod reviews;
mod services;

pub use about::About;
pub use contact::Contact;
pub use footer::{Footer, WhatsAppButton};
pub use gallery::Gallery;
pub use hero::Hero;
pub use nav::Navbar;
pub use packages::Packages;
pub use reviews::Reviews;
pub use services::Services;

/// Ask the browser to smooth-scroll a section into view. A missing element
/// is a no-op.
pub fn scroll_to(id: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Standard heading block opening every content section.
#[component]
pub fn SectionHeading(
    title: &'static str,
    subtitle: &'static str,
    #[prop(default = true)] centered: bool,
) -> impl IntoView {
    view! {
        <div class=if centered { "section-heading centered" } else { "section-heading" }>
            <span class="section-eyebrow">{subtitle}</span>
            <h2 class="section-title">{title}</h2>
            <div class="section-rule"></div>
        </div>
    }
}
