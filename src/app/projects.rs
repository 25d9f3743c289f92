use leptos::{either::Either, prelude::*};

use crate::content::{project_by_id, projects_for, Project, PROJECT_FILTERS};

use super::about::SectionHeading;

#[component]
pub fn Projects() -> impl IntoView {
    let (filter, set_filter) = signal("all");
    let (selected, set_selected) = signal(None::<u32>);

    view! {
        <section id="projects" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-7xl">
                <SectionHeading number="03" title="Projects" />
                <div class="flex flex-wrap gap-2 mb-8 font-mono text-sm">
                    {PROJECT_FILTERS
                        .iter()
                        .map(|&(id, label)| {
                            view! {
                                <button
                                    on:click=move |_| set_filter.set(id)
                                    class=move || {
                                        if filter.get() == id {
                                            "px-4 py-2 rounded-md bg-primary text-background"
                                        } else {
                                            "px-4 py-2 rounded-md border border-muted/30 text-muted hover:text-primary hover:border-primary"
                                        }
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        projects_for(filter.get())
                            .into_iter()
                            .map(|project| {
                                let id = project.id;
                                view! {
                                    <ProjectCard project=project on_open=move || set_selected.set(Some(id)) />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
            {move || {
                selected
                    .get()
                    .and_then(project_by_id)
                    .map(|project| {
                        view! { <ProjectModal project=project on_close=move || set_selected.set(None) /> }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    on_open: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <article
            on:click=move |_| on_open()
            class="group cursor-pointer rounded-lg border border-muted/30 p-6 hover:border-primary hover:-translate-y-1 transition-all duration-200"
        >
            <div class="flex items-center justify-between mb-4 font-mono text-sm text-muted">
                <span class="flex items-center gap-2">
                    <span
                        class="w-3 h-3 rounded-full"
                        style=format!("background-color: {}", project.language_color)
                    />
                    {project.language}
                </span>
                <span>{format!("★ {}  ⑂ {}", project.stars, project.forks)}</span>
            </div>
            <h3 class="text-xl font-bold mb-2 group-hover:text-primary transition-colors duration-200">
                {project.title}
            </h3>
            <p class="text-muted mb-4">{project.description}</p>
            <TechTags tech=project.tech />
        </article>
    }
}

#[component]
fn TechTags(tech: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tech
                .iter()
                .map(|t| {
                    view! {
                        <span class="rounded-md px-2 py-1 bg-primary/10 text-primary font-mono text-xs">
                            {*t}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectModal(
    project: &'static Project,
    on_close: impl Fn() + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let close_backdrop = on_close.clone();
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm p-4"
            on:click=move |_| close_backdrop()
        >
            <div
                class="relative w-full max-w-2xl rounded-lg border border-muted/30 bg-background p-8"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    on:click=move |_| on_close()
                    class="absolute top-4 right-4 text-muted hover:text-primary"
                    aria-label="Close"
                >
                    <i class="extra-close" />
                </button>
                <div class="font-mono text-sm text-muted mb-2">{project.github_repo}</div>
                <h3 class="text-2xl font-bold mb-4">{project.title}</h3>
                <p class="text-muted mb-6">{project.description}</p>
                <div class="grid grid-cols-4 gap-4 mb-6 text-center font-mono">
                    {[
                        ("stars", project.stars.to_string()),
                        ("forks", project.forks.to_string()),
                        ("lines", project.lines.to_string()),
                        ("commits", project.commits.to_string()),
                    ]
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="rounded-md border border-muted/30 p-3">
                                    <div class="text-lg text-primary">{value}</div>
                                    <div class="text-xs text-muted">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mb-6">
                    <TechTags tech=project.tech />
                </div>
                <div class="flex gap-4">
                    <a
                        href=project.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 rounded-md border border-primary text-primary hover:bg-primary/10"
                    >
                        <i class="devicon-github-plain mr-2" />
                        "Source"
                    </a>
                    {match project.demo {
                        Some(href) => {
                            Either::Left(
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="px-4 py-2 rounded-md bg-primary text-background hover:opacity-90"
                                    >
                                        "Live Demo"
                                    </a>
                                },
                            )
                        }
                        None => Either::Right(()),
                    }}
                </div>
            </div>
        </div>
    }
}
