use desdec_core::catalog::PROCESS_STEPS;
use leptos::prelude::*;

use super::SectionHeading;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <div class="about-grid">
                    <div class="about-image">
                        <img
                            src="https://images.unsplash.com/photo-1541976534312-301099f4d173?q=80&w=1000&auto=format&fit=crop"
                            alt="Quality construction"
                        />
                        <div class="about-badge">
                            <p class="about-badge-value">"15+ Years"</p>
                            <p class="about-badge-label">"of Mastery"</p>
                        </div>
                    </div>
                    <div>
                        <SectionHeading
                            title="A Legacy of Architectural Brilliance"
                            subtitle="Who We Are"
                            centered=false
                        />
                        <p class="about-copy">
                            "Des and Dec Private Limited is a premier design-build firm in "
                            "Thiruvananthapuram. We don't just design spaces; we curate "
                            "environments that tell your story. Our expertise spans across "
                            "luxury residential architecture, sophisticated interiors, and "
                            "complex commercial projects."
                        </p>
                        <div class="about-highlights">
                            <div class="about-highlight">
                                <h4>"Turnkey Experts"</h4>
                                <p>"One-point contact for all your design and build needs."</p>
                            </div>
                            <div class="about-highlight">
                                <h4>"Sustainable Focus"</h4>
                                <p>"Eco-conscious materials and tropical design principles."</p>
                            </div>
                        </div>
                    </div>
                </div>
                <ProcessSteps />
            </div>
        </section>
    }
}

#[component]
fn ProcessSteps() -> impl IntoView {
    view! {
        <div class="process-grid">
            {PROCESS_STEPS
                .iter()
                .enumerate()
                .map(|(index, step)| {
                    view! {
                        <div class="process-step">
                            <span class="process-number">{format!("{:02}", index + 1)}</span>
                            <h4 class="process-title">{step.title.clone()}</h4>
                            <p class="process-description">{step.description.clone()}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
