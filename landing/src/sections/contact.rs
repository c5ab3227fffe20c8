use desdec_core::catalog::{BUSINESS_INFO, PACKAGES, SERVICES};
use desdec_core::contact::{apply_dropdown_choice, known_options, FormMode, OTHER_OPTION};
use leptos::prelude::*;

use super::{SectionHeading, CONTACT_SECTION_ID};

#[component]
pub fn Contact(
    selected_service: ReadSignal<String>,
    on_service_change: Callback<String>,
) -> impl IntoView {
    let options = known_options(&SERVICES, &PACKAGES);

    let (is_other, set_is_other) = signal(false);
    let (other_value, set_other_value) = signal(String::new());

    // Picking "Other" clears the relay but must leave the form in free-text
    // mode; the one-shot flag keeps that single echo from re-deriving the
    // mode out from under the visitor. Every other relay write, including
    // free-text edits, goes through the sync effect normally.
    let suppress_sync = StoredValue::new(false);

    let derived_options = options.clone();
    Effect::new(move |_| {
        let selection = selected_service.get();
        if suppress_sync.get_value() {
            suppress_sync.set_value(false);
            return;
        }
        match FormMode::from_selection(&selection, &derived_options) {
            FormMode::FreeText { value } => {
                set_is_other.set(true);
                set_other_value.set(value);
            }
            FormMode::Dropdown { .. } => set_is_other.set(false),
        }
    });

    let handle_select = move |ev| {
        let (mode, relay_value) = apply_dropdown_choice(&event_target_value(&ev));
        if mode.is_free_text() {
            set_other_value.set(String::new());
        }
        set_is_other.set(mode.is_free_text());
        suppress_sync.set_value(true);
        on_service_change.run(relay_value);
    };

    // Two-way binding: edits to the free-text field re-propagate into the
    // relay, and the sync effect re-derives the mode from the new value, so
    // typing an exact catalog entry drops the form back into dropdown mode.
    let handle_other_input = move |ev| {
        let value = event_target_value(&ev);
        set_other_value.set(value.clone());
        on_service_change.run(value);
    };

    let dropdown_options = options;

    view! {
        <section id=CONTACT_SECTION_ID class="contact">
            <div class="container contact-grid">
                <div class="contact-info">
                    <SectionHeading
                        title="Let's Build Your Vision"
                        subtitle="Connect"
                        centered=false
                    />
                    <InfoRow label="The Studio" value=BUSINESS_INFO.address.clone() />
                    <InfoRow label="Direct Line" value=BUSINESS_INFO.phone.clone() />
                    <InfoRow label="Email" value=BUSINESS_INFO.email.clone() />
                    <div class="contact-hours">
                        <h4 class="contact-label">"Hours"</h4>
                        {BUSINESS_INFO
                            .hours
                            .iter()
                            .map(|(days, hours)| {
                                view! {
                                    <p class="contact-hours-row">
                                        <span>{days.clone()}</span>
                                        <span>{hours.clone()}</span>
                                    </p>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <form class="contact-form">
                    <div class="form-row">
                        <div class="form-field">
                            <label>"Name"</label>
                            <input type="text" required=true placeholder="Full Name" />
                        </div>
                        <div class="form-field">
                            <label>"Phone"</label>
                            <input type="tel" required=true placeholder="+91" />
                        </div>
                    </div>

                    <div class="form-field">
                        <label>"Company Name (Optional)"</label>
                        <input type="text" placeholder="Organization/Firm Name" />
                    </div>

                    <div class="form-field">
                        <label>"Service Required"</label>
                        <select
                            prop:value=move || {
                                if is_other.get() {
                                    OTHER_OPTION.to_owned()
                                } else {
                                    selected_service.get()
                                }
                            }
                            on:change=handle_select
                        >
                            <option value="" disabled=true>"Select a Service or Package"</option>
                            {dropdown_options
                                .into_iter()
                                .map(|option| {
                                    view! {
                                        <option value=option.clone()>{option.clone()}</option>
                                    }
                                })
                                .collect_view()}
                            <option value=OTHER_OPTION>{OTHER_OPTION}</option>
                        </select>
                    </div>

                    <Show when=move || is_other.get()>
                        <div class="form-field">
                            <label>"Please Specify Requirement"</label>
                            <input
                                type="text"
                                required=true
                                placeholder="E.g., Home Office Setup, Lighting consultation"
                                prop:value=other_value
                                on:input=handle_other_input
                            />
                        </div>
                    </Show>

                    <div class="form-field">
                        <label>"Message"</label>
                        <textarea rows=3 placeholder="Describe your project vision..."></textarea>
                    </div>

                    // Submission is intentionally unwired; the page has no backend
                    <button type="submit" class="btn btn-submit">"Submit Inquiry"</button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn InfoRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="contact-row">
            <h4 class="contact-label">{label}</h4>
            <p class="contact-value">{value}</p>
        </div>
    }
}
