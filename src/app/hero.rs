use leptos::{either::Either, ev, prelude::*};

use crate::{
    content::{
        matrix_columns, Glyph, HERO_LINKS, MATRIX_COLUMNS, MATRIX_COLUMN_LEN, OWNER,
        TERMINAL_LINES, TITLES,
    },
    replay::{LineKind, TerminalReplay, Typewriter, DEFAULT_REPLAY_INTERVAL},
};

use super::{
    scroll_to_section,
    timer::{drive, TimerSlot},
};

#[component]
pub fn Hero() -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(TITLES));
    let replay = RwSignal::new(TerminalReplay::new(TERMINAL_LINES, DEFAULT_REPLAY_INTERVAL));
    let typing_slot = TimerSlot::new();
    let replay_slot = TimerSlot::new();

    // browser only; effects don't run during SSR
    Effect::new(move |_| {
        drive(typewriter, typing_slot);
        drive(replay, replay_slot);
    });

    let restart = move |_: ev::MouseEvent| {
        replay.update(TerminalReplay::reset);
        drive(replay, replay_slot);
    };

    view! {
        <section id="home" class="relative min-h-screen flex items-center overflow-hidden pt-20">
            <MatrixBackdrop />
            <div class="relative z-10 mx-auto max-w-7xl w-full px-4 sm:px-6 lg:px-8 grid lg:grid-cols-2 gap-12 items-center">
                <div>
                    <StatusBadge />
                    <p class="font-mono text-primary mb-2">"Hello, World! I'm"</p>
                    <h1 class="text-4xl sm:text-6xl font-bold mb-4">{OWNER}</h1>
                    <h2 class="text-2xl sm:text-3xl font-mono text-muted h-10 mb-6">
                        <span class="text-primary">"> "</span>
                        {move || typewriter.with(Typewriter::text)}
                        <span class="animate-pulse text-primary">"|"</span>
                    </h2>
                    <p class="text-lg text-muted max-w-xl mb-8">
                        "Building scalable web applications with modern technologies. Passionate about clean code, great user experiences and solving real problems."
                    </p>
                    <div class="flex flex-wrap gap-4 mb-8">
                        <button
                            on:click=move |_| scroll_to_section("projects")
                            class="px-6 py-3 rounded-md bg-primary text-background font-medium hover:opacity-90 transition-opacity duration-200"
                        >
                            "View Projects"
                        </button>
                        <button
                            on:click=move |_| scroll_to_section("contact")
                            class="px-6 py-3 rounded-md border border-primary text-primary font-medium hover:bg-primary/10 transition-colors duration-200"
                        >
                            "Get in Touch"
                        </button>
                    </div>
                    <div class="flex gap-4">
                        {HERO_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label
                                        class="text-2xl text-muted hover:text-primary transition-colors duration-200"
                                    >
                                        <i class=link.icon.glyph_class() />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="rounded-lg border border-muted/30 bg-black/80 shadow-2xl font-mono text-sm">
                    <div class="flex items-center justify-between px-4 py-2 border-b border-muted/30">
                        <div class="flex gap-2">
                            <span class="w-3 h-3 rounded-full bg-red" />
                            <span class="w-3 h-3 rounded-full bg-yellow" />
                            <span class="w-3 h-3 rounded-full bg-green" />
                        </div>
                        <span class="text-muted">"terminal"</span>
                        <button
                            on:click=restart
                            class="text-muted hover:text-primary transition-colors duration-200"
                            aria-label="Replay"
                        >
                            <i class="extra-refresh" />
                        </button>
                    </div>
                    <div class="p-4 min-h-64 space-y-1">
                        {move || {
                            replay
                                .with(|r| r.revealed_lines())
                                .iter()
                                .map(|line| {
                                    let class = match line.kind {
                                        LineKind::Command => "text-green",
                                        LineKind::Output => "text-foreground/80 pl-4",
                                    };
                                    view! { <div class=class>{line.text}</div> }
                                })
                                .collect_view()
                        }}
                        {move || {
                            if replay.with(TerminalReplay::is_typing) {
                                Either::Left(
                                    view! {
                                        <div class="text-green">
                                            "$ " <span class="animate-pulse">"▋"</span>
                                        </div>
                                    },
                                )
                            } else {
                                Either::Right(())
                            }
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatusBadge() -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-2 px-3 py-1 mb-6 rounded-full border border-green/40 bg-green/10 text-green text-sm font-mono">
            <span class="relative flex h-2 w-2">
                <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-green opacity-75" />
                <span class="relative inline-flex rounded-full h-2 w-2 bg-green" />
            </span>
            "Available for work"
        </div>
    }
}

#[component]
fn MatrixBackdrop() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none opacity-10" aria-hidden="true">
            {matrix_columns(MATRIX_COLUMNS, MATRIX_COLUMN_LEN)
                .into_iter()
                .enumerate()
                .map(|(i, column)| {
                    let style = format!(
                        "left: {}%; animation: matrix-fall {}s linear {}s infinite;",
                        i * 100 / MATRIX_COLUMNS,
                        column.duration_secs,
                        column.delay_secs,
                    );
                    view! {
                        <div class="matrix-column absolute top-0 font-mono text-xs text-green" style=style>
                            {column.bits}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
