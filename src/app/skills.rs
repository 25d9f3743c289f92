use leptos::prelude::*;

use crate::content::{Glyph, SKILL_TABS};

use super::about::SectionHeading;

#[component]
pub fn Skills() -> impl IntoView {
    let (selected, set_selected) = signal(0usize);

    view! {
        <section id="skills" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-5xl">
                <SectionHeading number="02" title="Tech Stack" />
                <div class="rounded-lg border border-muted/30 overflow-hidden bg-black/80 font-mono text-sm">
                    <div class="flex overflow-x-auto border-b border-muted/30">
                        {SKILL_TABS
                            .iter()
                            .enumerate()
                            .map(|(i, tab)| {
                                view! {
                                    <button
                                        on:click=move |_| set_selected.set(i)
                                        class=move || {
                                            if selected.get() == i {
                                                "flex items-center gap-2 px-4 py-2 whitespace-nowrap text-primary bg-primary/10 border-b-2 border-primary"
                                            } else {
                                                "flex items-center gap-2 px-4 py-2 whitespace-nowrap text-muted hover:text-foreground"
                                            }
                                        }
                                    >
                                        <i class=tab.icon.glyph_class() />
                                        {tab.file_name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    {move || {
                        SKILL_TABS
                            .get(selected.get())
                            .map(|tab| {
                                view! {
                                    <div class="p-4">
                                        <div class="text-muted mb-2">{format!("// {}", tab.label)}</div>
                                        <pre class="whitespace-pre-wrap text-foreground/90">{tab.code}</pre>
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </section>
    }
}
