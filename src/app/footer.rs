use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::content::{Glyph, NAV_ITEMS, OWNER, SOCIAL_LINKS};

use super::scroll_to_section;

/// `(year, "Mon DD YYYY")` of this build; empty if the stamp doesn't parse.
fn build_stamp() -> (String, String) {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| (t.year().to_string(), t.format("%b %e %Y").to_string()))
        .unwrap_or_default()
}

#[component]
pub fn Footer() -> impl IntoView {
    let (year, built) = build_stamp();
    view! {
        <footer class="border-t border-muted/30 py-12 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-7xl grid md:grid-cols-3 gap-8">
                <div>
                    <div class="font-mono font-bold text-lg text-primary mb-2">{OWNER}</div>
                    <p class="text-sm text-muted">
                        "Full stack developer building for the web, one commit at a time."
                    </p>
                </div>
                <nav class="flex flex-col gap-2 text-sm">
                    {NAV_ITEMS
                        .iter()
                        .map(|&(id, label)| {
                            view! {
                                <button
                                    on:click=move |_| scroll_to_section(id)
                                    class="text-left text-muted hover:text-primary"
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex gap-4 md:justify-end">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label
                                    class="text-xl text-muted hover:text-primary"
                                >
                                    <i class=link.icon.glyph_class() />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="mx-auto max-w-7xl mt-8 pt-8 border-t border-muted/30 flex flex-col sm:flex-row justify-between gap-2 text-xs text-muted font-mono">
                <span>{format!("© {year} {OWNER}. All rights reserved.")}</span>
                <span>{format!("built {built} with Rust + Leptos")}</span>
            </div>
        </footer>
    }
}
