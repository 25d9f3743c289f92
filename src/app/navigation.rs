use leptos::{either::Either, ev, prelude::*, web_sys::HtmlElement};
use wasm_bindgen::JsCast;

use crate::content::{active_section, NAV_ITEMS, OWNER};

use super::{scroll_to_section, Theme};

/// Scroll distance after which the bar gets its solid background.
const SCROLLED_AFTER: f64 = 50.0;

/// `(id, offset_top, height)` of every section currently in the document.
fn section_bounds() -> Vec<(&'static str, f64, f64)> {
    NAV_ITEMS
        .iter()
        .filter_map(|(id, _)| {
            let el = document()
                .get_element_by_id(id)?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some((*id, f64::from(el.offset_top()), f64::from(el.offset_height())))
        })
        .collect()
}

#[component]
pub fn Navigation() -> impl IntoView {
    let theme = expect_context::<Theme>();
    let (scrolled, set_scrolled) = signal(false);
    let (active, set_active) = signal("home");
    let (drawer_open, set_drawer_open) = signal(false);

    Effect::new(move |_| {
        let handle = window_event_listener(ev::scroll, move |_| {
            let y = window().scroll_y().unwrap_or_default();
            set_scrolled.set(y > SCROLLED_AFTER);
            if let Some(id) = active_section(y, &section_bounds()) {
                if active.get_untracked() != id {
                    set_active.set(id);
                }
            }
        });
        on_cleanup(move || handle.remove());
    });

    let go_to = move |id: &'static str| {
        set_drawer_open.set(false);
        scroll_to_section(id);
    };

    let nav_link = move |id: &'static str, label: &'static str| {
        view! {
            <button
                on:click=move |_| go_to(id)
                class=move || {
                    if active.get() == id {
                        "px-3 py-2 text-sm font-mono text-primary border-b-2 border-primary"
                    } else {
                        "px-3 py-2 text-sm font-mono text-muted hover:text-primary transition-colors duration-200"
                    }
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 inset-x-0 z-40 bg-background/90 backdrop-blur shadow-lg transition-all duration-300"
            } else {
                "fixed top-0 inset-x-0 z-40 bg-transparent transition-all duration-300"
            }
        }>
            <nav class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 h-20 flex items-center justify-between">
                <button
                    on:click=move |_| go_to("home")
                    class="font-mono font-bold text-xl text-primary"
                >
                    "<"
                    {OWNER.split_whitespace().next().unwrap_or(OWNER)}
                    " />"
                </button>
                <div class="hidden md:flex items-center gap-2">
                    {NAV_ITEMS.iter().map(|&(id, label)| nav_link(id, label)).collect_view()}
                </div>
                <div class="flex items-center gap-2">
                    <button
                        on:click=move |_| theme.toggle()
                        class="p-2 rounded-md hover:bg-primary/10 transition-colors duration-200"
                        aria-label="Toggle theme"
                    >
                        {move || {
                            if theme.mode.get().is_dark() {
                                Either::Left(view! { <i class="extra-sun" /> })
                            } else {
                                Either::Right(view! { <i class="extra-moon" /> })
                            }
                        }}
                    </button>
                    <button
                        on:click=move |_| set_drawer_open.update(|open| *open = !*open)
                        class="md:hidden p-2 rounded-md hover:bg-primary/10"
                        aria-label="Open menu"
                    >
                        <i class="extra-menu" />
                    </button>
                </div>
            </nav>
            <Show when=move || drawer_open.get()>
                <div class="md:hidden flex flex-col gap-1 px-4 pb-4 bg-background/95 backdrop-blur">
                    {NAV_ITEMS.iter().map(|&(id, label)| nav_link(id, label)).collect_view()}
                </div>
            </Show>
        </header>
    }
}
