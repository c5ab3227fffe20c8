use desdec_core::catalog::STATS;
use leptos::prelude::*;

use super::scroll_to;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" id="top">
            <div class="hero-backdrop">
                <img
                    src="https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?q=80&w=2072&auto=format&fit=crop"
                    alt="Luxury interior"
                />
            </div>
            <div class="container hero-content">
                <span class="hero-eyebrow">"BRING PRIDE INTO YOUR INTERIORS"</span>
                <h1 class="hero-title">
                    "Turnkey"
                    <br />
                    <span class="hero-title-accent">"Excellence"</span>
                </h1>
                <p class="hero-description">
                    "As Thiruvananthapuram's premier Interior Designers and Decorators, "
                    "we craft timeless architectural statements that define luxury living."
                </p>
                <div class="hero-actions">
                    <a
                        href="#services"
                        class="btn btn-primary"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to("services");
                        }
                    >
                        "Our Expertise"
                    </a>
                    <a
                        href="#packages"
                        class="btn btn-secondary"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to("packages");
                        }
                    >
                        "View Packages"
                    </a>
                </div>
            </div>
            <StatsStrip />
        </section>
    }
}

#[component]
fn StatsStrip() -> impl IntoView {
    view! {
        <div class="hero-stats">
            {STATS
                .iter()
                .map(|stat| {
                    view! {
                        <div class="hero-stat">
                            <span class="hero-stat-value">{stat.value.clone()}</span>
                            <span class="hero-stat-label">{stat.label.clone()}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
