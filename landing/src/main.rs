// Des and Dec single-page site — Leptos 0.8 Edition

mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // Page-wide selection relay: the most recent service/package the visitor
    // picked anywhere on the page, consumed by the contact form. Empty means
    // nothing selected; last write wins.
    let (selected_service, set_selected_service) = signal(String::new());

    // Booking from a service or package card also jumps to the form.
    let book = Callback::new(move |value: String| {
        set_selected_service.set(value);
        scroll_to(CONTACT_SECTION_ID);
    });

    // The form's own edits re-propagate without scrolling.
    let service_change = Callback::new(move |value: String| {
        set_selected_service.set(value);
    });

    view! {
        <Navbar />
        <main>
            <Hero />
            <About />
            <Services on_book=book />
            <Packages on_select=book />
            <Gallery />
            <Reviews />
            <Contact selected_service=selected_service on_service_change=service_change />
        </main>
        <Footer />
        <WhatsAppButton />
    }
}
