use leptos::{either::Either, prelude::*};

use crate::content::{Glyph, TimelineItem, TimelineKind, TIMELINE};

use super::about::SectionHeading;

fn accent(kind: TimelineKind) -> &'static str {
    match kind {
        TimelineKind::Experience => "text-blue border-blue",
        TimelineKind::Education => "text-purple border-purple",
        TimelineKind::Achievement => "text-yellow border-yellow",
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-4xl">
                <SectionHeading number="05" title="Experience" />
                <ol class="relative border-l border-muted/30 ml-4 space-y-12">
                    {TIMELINE.iter().map(|item| view! { <TimelineEntry item=item /> }).collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(item: &'static TimelineItem) -> impl IntoView {
    let accent = accent(item.kind);
    view! {
        <li class="ml-8">
            <span class=format!(
                "absolute -left-4 flex items-center justify-center w-8 h-8 rounded-full border bg-background {accent}",
            )>
                <i class=item.icon.glyph_class() />
            </span>
            <div class="flex flex-wrap items-center gap-2 mb-1">
                <h3 class="text-xl font-bold">{item.title}</h3>
                {if item.current {
                    Either::Left(
                        view! {
                            <span class="rounded-full px-2 py-0.5 text-xs bg-green/10 text-green font-mono">
                                "current"
                            </span>
                        },
                    )
                } else {
                    Either::Right(())
                }}
            </div>
            <div class="font-mono text-sm text-muted mb-3">
                <span class=accent>{item.company}</span>
                " · "
                {item.period}
                " · "
                {item.kind.as_str()}
            </div>
            <p class="text-muted mb-3">{item.description}</p>
            <ul class="space-y-1 text-sm">
                {item
                    .achievements
                    .iter()
                    .map(|a| {
                        view! {
                            <li class="flex gap-2">
                                <span class="text-primary">"▹"</span>
                                {*a}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </li>
    }
}
