use leptos::ev;
use leptos::prelude::*;

use super::{scroll_to, CONTACT_SECTION_ID, LOGO_URL};

const NAV_LINKS: [(&str, &str); 6] = [
    ("Home", "top"),
    ("About", "about"),
    ("Services", "services"),
    ("Packages", "packages"),
    ("Gallery", "gallery"),
    ("Contact", "contact"),
];

/// Past this scroll offset the bar swaps to its solid styling.
const SCROLL_THRESHOLD: f64 = 50.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    let listener = window_event_listener(ev::scroll, move |_| {
        let offset = web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or_default();
        set_scrolled.set(offset > SCROLL_THRESHOLD);
    });
    on_cleanup(move || listener.remove());

    let go_to = move |target: &'static str| {
        set_menu_open.set(false);
        scroll_to(target);
    };

    view! {
        <nav class=move || if scrolled.get() { "nav scrolled" } else { "nav" }>
            <div class="nav-inner">
                <a
                    href="#top"
                    class="nav-brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_to("top");
                    }
                >
                    <img src=LOGO_URL alt="Des and Dec logo" class="nav-logo" />
                </a>

                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|&(name, target)| {
                            view! {
                                <a
                                    href=format!("#{target}")
                                    class="nav-link"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        go_to(target);
                                    }
                                >
                                    {name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="nav-cta"
                        on:click=move |_| go_to(CONTACT_SECTION_ID)
                    >
                        "Inquire"
                    </button>
                </div>

                <button
                    class="nav-menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "Close" } else { "Menu" }}
                </button>
            </div>

            // Mobile menu
            <Show when=move || menu_open.get()>
                <div class="nav-mobile">
                    {NAV_LINKS
                        .iter()
                        .map(|&(name, target)| {
                            view! {
                                <a
                                    href=format!("#{target}")
                                    class="nav-mobile-link"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        go_to(target);
                                    }
                                >
                                    {name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
