use std::time::Duration;

use desdec_core::carousel::{Carousel, ROTATION_INTERVAL_MS};
use desdec_core::catalog::REVIEWS;
use leptos::prelude::*;

#[component]
pub fn Reviews() -> impl IntoView {
    let (carousel, set_carousel) = signal(Carousel::new(REVIEWS.len()));

    // This section owns the interval and clears it when unmounted; with an
    // empty review list nothing is ever scheduled.
    if carousel.get_untracked().should_rotate() {
        let interval = set_interval_with_handle(
            move || set_carousel.update(Carousel::advance),
            Duration::from_millis(ROTATION_INTERVAL_MS),
        );
        if let Ok(handle) = interval {
            on_cleanup(move || handle.clear());
        }
    }

    view! {
        <section class="reviews">
            <div class="container reviews-grid">
                <div class="reviews-intro">
                    <span class="section-eyebrow">"Client Perspectives"</span>
                    <h2 class="section-title">"Trusted Across Kerala"</h2>
                    <div class="reviews-rating">
                        <div class="reviews-stars">
                            {(0..5).map(|_| view! { <span class="star">"★"</span> }).collect_view()}
                        </div>
                        <span class="reviews-score">"5.0"</span>
                    </div>
                    <p class="reviews-blurb">
                        "Prominent medical professionals and corporate leaders trust us "
                        "for their finest residences in Thiruvananthapuram."
                    </p>
                </div>
                <div class="reviews-carousel">
                    {REVIEWS
                        .iter()
                        .enumerate()
                        .map(|(index, review)| {
                            let initial = review.author.chars().next().unwrap_or('•');
                            view! {
                                <article class=move || {
                                    if carousel.get().is_active(index) {
                                        "review-card active"
                                    } else {
                                        "review-card"
                                    }
                                }>
                                    <p class="review-comment">
                                        {format!("\u{201c}{}\u{201d}", review.comment)}
                                    </p>
                                    <div class="review-author">
                                        <div class="review-avatar">{initial.to_string()}</div>
                                        <div>
                                            <h4 class="review-name">{review.author.clone()}</h4>
                                            <span class="review-date">{review.date.clone()}</span>
                                        </div>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
