use leptos::{ev, html, prelude::*};

use crate::{
    content::{Glyph, COMMANDS},
    palette::{CommandPalette, PaletteKey},
};

use super::scroll_to_section;

#[component]
pub fn CommandPaletteOverlay() -> impl IntoView {
    let palette = RwSignal::new(CommandPalette::default());
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        let handle = window_event_listener(ev::keydown, move |ev| {
            let key = PaletteKey::from_parts(&ev.key(), ev.meta_key(), ev.ctrl_key());
            let open = palette.try_with_untracked(CommandPalette::is_open).unwrap_or(false);
            if !CommandPalette::reacts_to(open, key) {
                return;
            }
            let Some(outcome) = palette.try_update(|p| p.handle_key(key, COMMANDS)) else {
                return;
            };
            if outcome.prevent_default {
                ev.prevent_default();
            }
            if let Some(id) = outcome.navigate {
                scroll_to_section(id);
            }
        });
        on_cleanup(move || handle.remove());
    });

    // focus the search box whenever the palette opens
    Effect::new(move |_| {
        if palette.with(CommandPalette::is_open) {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let run = move |index: usize| {
        if let Some(id) = palette.try_update(|p| p.commit(index, COMMANDS)).flatten() {
            scroll_to_section(id);
        }
    };

    view! {
        <Show when=move || palette.with(CommandPalette::is_open)>
            <div
                class="fixed inset-0 z-50 flex items-start justify-center pt-32 bg-black/60 backdrop-blur-sm"
                on:click=move |_| palette.update(CommandPalette::close)
            >
                <div
                    class="w-full max-w-lg rounded-lg border border-muted/30 bg-background shadow-2xl font-mono"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex items-center gap-2 px-4 py-3 border-b border-muted/30">
                        <span class="text-primary">">"</span>
                        <input
                            node_ref=input_ref
                            type="text"
                            placeholder="Type a command or search..."
                            class="flex-1 bg-transparent focus:outline-none text-foreground"
                            prop:value=move || palette.with(|p| p.query().to_string())
                            on:input=move |ev| {
                                palette.update(|p| p.set_query(event_target_value(&ev)))
                            }
                        />
                        <kbd class="text-xs text-muted border border-muted/30 rounded px-1">"esc"</kbd>
                    </div>
                    <ul class="max-h-80 overflow-y-auto py-2">
                        {move || {
                            let (results, selected) = palette
                                .with(|p| (p.results(COMMANDS), p.selected()));
                            if results.is_empty() {
                                return view! {
                                    <li class="px-4 py-3 text-sm text-muted">"No commands found"</li>
                                }
                                    .into_any();
                            }
                            results
                                .into_iter()
                                .enumerate()
                                .map(|(i, cmd)| {
                                    view! {
                                        <li>
                                            <button
                                                on:click=move |_| run(i)
                                                class=if i == selected {
                                                    "w-full flex items-center gap-3 px-4 py-2 text-left bg-primary/10 text-primary"
                                                } else {
                                                    "w-full flex items-center gap-3 px-4 py-2 text-left text-foreground hover:bg-primary/5"
                                                }
                                            >
                                                <i class=cmd.icon.glyph_class() />
                                                {cmd.label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </ul>
                </div>
            </div>
        </Show>
    }
}

/// Floating reminder of the palette shortcut.
#[component]
pub fn PaletteHint() -> impl IntoView {
    view! {
        <div class="hidden md:flex fixed bottom-6 left-6 z-30 items-center gap-1 rounded-md border border-muted/30 bg-background/80 backdrop-blur px-3 py-2 text-xs text-muted font-mono">
            "Press"
            <kbd class="border border-muted/30 rounded px-1">"⌘"</kbd>
            <kbd class="border border-muted/30 rounded px-1">"K"</kbd>
            "to navigate"
        </div>
    }
}
