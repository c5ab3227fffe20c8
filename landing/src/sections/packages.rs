use desdec_core::catalog::PACKAGES;
use desdec_core::types::Package;
use leptos::prelude::*;

use super::SectionHeading;

#[component]
pub fn Packages(on_select: Callback<String>) -> impl IntoView {
    view! {
        <section id="packages" class="packages">
            <div class="container">
                <SectionHeading title="Tailored Investment Plans" subtitle="Our Packages" />
                <div class="packages-grid">
                    {PACKAGES
                        .iter()
                        .cloned()
                        .map(|package| view! { <PackageCard package on_select /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PackageCard(package: Package, on_select: Callback<String>) -> impl IntoView {
    let Package { name, tagline, price, features, is_popular, .. } = package;
    let selection_value = name.clone();

    view! {
        <article class=if is_popular { "package-card popular" } else { "package-card" }>
            <Show when=move || is_popular>
                <span class="package-badge">"Most Popular"</span>
            </Show>
            <h3 class="package-name">{name}</h3>
            <p class="package-tagline">{tagline}</p>
            <div class="package-price">
                {price}
                <span class="package-price-suffix">" Tier"</span>
            </div>
            <ul class="package-features">
                {features
                    .into_iter()
                    .map(|feature| view! { <li class="package-feature">{feature}</li> })
                    .collect_view()}
            </ul>
            <button
                class="btn btn-select"
                on:click=move |_| on_select.run(selection_value.clone())
            >
                "Select Package"
            </button>
        </article>
    }
}
