use desdec_core::catalog::GALLERY;
use desdec_core::filter::{filter_gallery, GalleryFilter};
use desdec_core::types::Category;
use leptos::prelude::*;

use super::SectionHeading;

#[component]
pub fn Gallery() -> impl IntoView {
    let (filter, set_filter) = signal(GalleryFilter::All);
    let visible = Memo::new(move |_| filter_gallery(&GALLERY, filter.get()));

    let filter_options =
        std::iter::once(GalleryFilter::All).chain(Category::ALL.into_iter().map(GalleryFilter::Only));

    view! {
        <section id="gallery" class="gallery">
            <div class="container">
                <SectionHeading title="Authentic Creations" subtitle="Featured Projects" />
                <div class="gallery-filters">
                    {filter_options
                        .map(|option| {
                            view! {
                                <button
                                    class=move || {
                                        if filter.get() == option {
                                            "gallery-filter active"
                                        } else {
                                            "gallery-filter"
                                        }
                                    }
                                    on:click=move |_| set_filter.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="gallery-grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|image| {
                                view! {
                                    <figure class="gallery-item">
                                        <img src=image.url alt=image.alt.clone() />
                                        <figcaption class="gallery-caption">
                                            <span class="gallery-category">
                                                {image.category.label()}
                                            </span>
                                            <h4>{image.alt}</h4>
                                        </figcaption>
                                    </figure>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
