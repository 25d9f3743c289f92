use leptos::prelude::*;

use crate::content::{ABOUT_STATS, COMPETENCIES};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-7xl">
                <SectionHeading number="01" title="About Me" />
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class="space-y-4 text-lg leading-relaxed text-muted">
                        <p>
                            "I'm a second year Software Engineering student who enjoys turning ideas into "
                            <strong class="text-foreground">"fast, accessible web applications"</strong>
                            ". Most of my time goes into full stack JavaScript and TypeScript, with a growing interest in cloud infrastructure."
                        </p>
                        <p>
                            "Outside coursework I ship side projects, compete in hackathons and help run the campus computer science society."
                        </p>
                        <div class="grid grid-cols-3 gap-4 pt-4">
                            {ABOUT_STATS
                                .iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="rounded-lg border border-muted/30 p-4 text-center">
                                            <div class="text-2xl font-bold text-primary">{*value}</div>
                                            <div class="text-sm text-muted">{*label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="rounded-lg border border-muted/30 p-6">
                        <h3 class="font-mono text-primary mb-4">"// core competencies"</h3>
                        <ul class="grid sm:grid-cols-2 gap-3">
                            {COMPETENCIES
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li class="flex items-center gap-2">
                                            <span class="text-primary">"▹"</span>
                                            {*item}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// `01. Title` heading shared by the numbered sections.
#[component]
pub fn SectionHeading(number: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <h2 class="flex items-center gap-4 text-3xl font-bold mb-12">
            <span class="font-mono text-primary text-xl">{number} "."</span>
            {title}
            <span class="flex-1 h-px bg-muted/30" />
        </h2>
    }
}
