use desdec_core::catalog::SERVICES;
use desdec_core::filter::filter_services;
use desdec_core::types::Service;
use leptos::prelude::*;

use super::SectionHeading;

#[component]
pub fn Services(on_book: Callback<String>) -> impl IntoView {
    let (search, set_search) = signal(String::new());
    // Fully recomputed on every keystroke; the catalog is tens of items.
    let visible = Memo::new(move |_| filter_services(&SERVICES, &search.get()));

    view! {
        <section id="services" class="services">
            <div class="container">
                <SectionHeading title="Comprehensive Solutions" subtitle="What We Do" />
                <div class="services-search">
                    <input
                        type="text"
                        placeholder="Search our expertise..."
                        prop:value=search
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>
                <div class="services-grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|service| view! { <ServiceCard service on_book /> })
                            .collect_view()
                    }}
                </div>
                // Zero matches is a valid state, not an error
                <Show when=move || visible.get().is_empty()>
                    <p class="services-empty">"No services match your search."</p>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service, on_book: Callback<String>) -> impl IntoView {
    let Service { title, description, price, image, .. } = service;
    let booking_value = title.clone();

    view! {
        <article class="service-card">
            <img class="service-image" src=image alt=title.clone() />
            <div class="service-body">
                <h3 class="service-title">{title}</h3>
                <p class="service-description">{description}</p>
                {price.map(|label| view! { <span class="service-price">{label}</span> })}
                <button
                    class="btn btn-book"
                    on:click=move |_| on_book.run(booking_value.clone())
                >
                    "Book Now"
                </button>
            </div>
        </article>
    }
}
