use leptos::{prelude::*, server_fn::codec::GetUrl};

#[cfg(feature = "ssr")]
use crate::{activity::load_contributions, config::SiteConfig};
use crate::activity::{
    color_tier, weekly_buckets, ActivityStats, ContributionDay, ContributionSeries,
    LEGEND_SAMPLES,
};

use super::{about::SectionHeading, Theme};

#[server(input = GetUrl)]
pub async fn get_contributions_server() -> Result<ContributionSeries, ServerFnError> {
    let config = use_context::<SiteConfig>()
        .ok_or_else(|| ServerFnError::new("site configuration missing"))?;
    Ok(load_contributions(&config).await)
}

#[component]
pub fn Activity() -> impl IntoView {
    let contributions = Resource::new(
        || (),
        |_| async move {
            get_contributions_server().await.unwrap_or_else(|e| {
                log::error!("couldn't load contributions: {e}");
                ContributionSeries::default()
            })
        },
    );

    view! {
        <section id="activity" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-7xl">
                <SectionHeading number="04" title="GitHub Activity" />
                <Transition fallback=move || {
                    view! {
                        <div class="space-y-4">
                            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4">
                                {(0..6)
                                    .map(|_| view! { <div class="loading-skeleton h-20 rounded-lg"></div> })
                                    .collect_view()}
                            </div>
                            <div class="loading-skeleton h-32 rounded-lg"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        let series = contributions.await;
                        let stats = ActivityStats::from_days(series.days());
                        let weeks = weekly_buckets(series.days());
                        view! {
                            <StatCards stats=stats />
                            <Heatmap weeks=weeks />
                        }
                    })}
                </Transition>
            </div>
        </section>
    }
}

#[component]
fn StatCards(stats: ActivityStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4 mb-8">
            {stats
                .cards()
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="rounded-lg border border-muted/30 p-4">
                            <div class="text-2xl font-bold text-primary font-mono">{value}</div>
                            <div class="text-xs text-muted">{label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Heatmap(weeks: Vec<Vec<ContributionDay>>) -> impl IntoView {
    let theme = expect_context::<Theme>();
    let cell = move |day: ContributionDay| {
        let count = day.count;
        view! {
            <div
                class="w-3 h-3 rounded-sm"
                title=format!("{}: {} contributions", day.date, day.count)
                style:background-color=move || color_tier(count).color(theme.mode.get())
            />
        }
    };

    view! {
        <div class="rounded-lg border border-muted/30 p-4 overflow-x-auto">
            <div class="flex gap-1">
                {weeks
                    .into_iter()
                    .map(|week| {
                        view! {
                            <div class="flex flex-col gap-1">
                                {week.into_iter().map(cell).collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex items-center justify-end gap-1 mt-4 text-xs text-muted">
                "Less"
                {LEGEND_SAMPLES
                    .into_iter()
                    .map(|count| {
                        view! {
                            <div
                                class="w-3 h-3 rounded-sm"
                                style:background-color=move || {
                                    color_tier(count).color(theme.mode.get())
                                }
                            />
                        }
                    })
                    .collect_view()}
                "More"
            </div>
        </div>
    }
}
