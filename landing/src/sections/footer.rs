use desdec_core::catalog::BUSINESS_INFO;
use leptos::prelude::*;

use super::{scroll_to, LOGO_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <img src=LOGO_URL alt="Des and Dec logo" class="footer-logo" />
                        <p class="footer-blurb">
                            "Thiruvananthapuram's premier Interior Designers and Decorators. "
                            "BRING PRIDE INTO YOUR INTERIORS."
                        </p>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Navigation"</h4>
                        <ul class="footer-links">
                            <FooterLink name="Home" target="top" />
                            <FooterLink name="About" target="about" />
                            <FooterLink name="Expertise" target="services" />
                            <FooterLink name="Packages" target="packages" />
                        </ul>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Expertise"</h4>
                        <ul class="footer-links">
                            <li>"Architecture"</li>
                            <li>"Turnkey Interiors"</li>
                            <li>"Modular Kitchens"</li>
                        </ul>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Contact"</h4>
                        <ul class="footer-links">
                            <li>{BUSINESS_INFO.phone.clone()}</li>
                            <li>{BUSINESS_INFO.email.clone()}</li>
                        </ul>
                    </div>
                </div>
                <p class="footer-copyright">
                    {format!(
                        "© {} {}. ISO 9001:2015 Certified.",
                        js_sys::Date::new_0().get_full_year(),
                        BUSINESS_INFO.name
                    )}
                </p>
            </div>
        </footer>
    }
}

#[component]
fn FooterLink(name: &'static str, target: &'static str) -> impl IntoView {
    view! {
        <li>
            <a
                href=format!("#{target}")
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to(target);
                }
            >
                {name}
            </a>
        </li>
    }
}

/// Floating WhatsApp link, always visible in the bottom-right corner.
#[component]
pub fn WhatsAppButton() -> impl IntoView {
    view! {
        <a
            href="https://wa.me/919447766111"
            target="_blank"
            rel="noopener noreferrer"
            class="whatsapp-fab"
            aria-label="Chat on WhatsApp"
        >
            "WhatsApp"
        </a>
    }
}
