use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::ThemeMode;

#[cfg(feature = "ssr")]
use std::{
    sync::LazyLock,
    time::{Duration, Instant},
};

#[cfg(feature = "ssr")]
use dashmap::DashMap;

#[cfg(feature = "ssr")]
use crate::config::SiteConfig;

/// Tail window used by the "Active Days" card.
pub const ACTIVE_WINDOW: usize = 30;

/// Sample counts rendered in the heatmap legend, one per tier.
pub const LEGEND_SAMPLES: [u32; 5] = [0, 2, 4, 8, 12];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: String,
    pub count: u32,
}

impl ContributionDay {
    pub fn new(date: impl Into<String>, count: u32) -> Self {
        Self {
            date: date.into(),
            count,
        }
    }

    fn is_active(&self) -> bool {
        self.count > 0
    }
}

/// A contribution series as received from the feed, ordered by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ContributionDay>", into = "Vec<ContributionDay>")]
pub struct ContributionSeries(Vec<ContributionDay>);

impl ContributionSeries {
    pub fn days(&self) -> &[ContributionDay] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ContributionDay>> for ContributionSeries {
    fn from(mut days: Vec<ContributionDay>) -> Self {
        // ISO dates sort lexically; stable so same-day entries keep feed order
        days.sort_by(|a, b| a.date.cmp(&b.date));
        Self(days)
    }
}

impl From<ContributionSeries> for Vec<ContributionDay> {
    fn from(series: ContributionSeries) -> Self {
        series.0
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("contribution feed request failed: {0}")]
    Request(String),
    #[error("contribution feed answered with status {0}")]
    Status(u16),
    #[error("couldn't decode contribution feed: {0}")]
    Decode(String),
    #[error("contribution feed has no contributions field")]
    MissingContributions,
}

#[derive(Deserialize)]
struct FeedResponse {
    contributions: Option<Vec<ContributionDay>>,
}

/// Decode a feed body of the shape `{ "contributions": [{ "date", "count" }] }`.
pub fn decode_feed(body: &str) -> Result<ContributionSeries, FeedError> {
    let resp: FeedResponse =
        serde_json::from_str(body).map_err(|e| FeedError::Decode(e.to_string()))?;
    resp.contributions
        .map(ContributionSeries::from)
        .ok_or(FeedError::MissingContributions)
}

pub fn total(days: &[ContributionDay]) -> u64 {
    days.iter().map(|d| u64::from(d.count)).sum()
}

/// Active days among the last `n` entries, by position rather than by date.
pub fn active_in_last(days: &[ContributionDay], n: usize) -> usize {
    let start = days.len().saturating_sub(n);
    days[start..].iter().filter(|d| d.is_active()).count()
}

pub fn longest_streak(days: &[ContributionDay]) -> usize {
    let mut max = 0;
    let mut current = 0;
    for day in days {
        if day.is_active() {
            current += 1;
            max = max.max(current);
        } else {
            current = 0;
        }
    }
    max
}

pub fn current_streak(days: &[ContributionDay]) -> usize {
    days.iter().rev().take_while(|d| d.is_active()).count()
}

/// The first day holding the maximum count, or an empty sentinel.
pub fn peak_day(days: &[ContributionDay]) -> ContributionDay {
    let mut best = None::<&ContributionDay>;
    for day in days {
        if day.count > best.map_or(0, |b| b.count) {
            best = Some(day);
        }
    }
    best.cloned().unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotal {
    /// `YYYY-MM`
    pub month: String,
    pub count: u64,
}

/// Month with the largest sum. Equal sums resolve to the earliest month.
pub fn best_month(days: &[ContributionDay]) -> MonthTotal {
    let mut months = BTreeMap::<&str, u64>::new();
    for day in days {
        let key = day.date.get(..7).unwrap_or(&day.date);
        *months.entry(key).or_default() += u64::from(day.count);
    }
    // BTreeMap iterates in month order, so keeping only strictly larger sums
    // leaves the earliest month on ties
    let best = months
        .into_iter()
        .fold(None::<(&str, u64)>, |best, (month, count)| match best {
            Some((_, c)) if count <= c => best,
            _ => Some((month, count)),
        });
    best.map(|(month, count)| MonthTotal {
        month: month.to_string(),
        count,
    })
    .unwrap_or_default()
}

fn starts_week(day: &ContributionDay) -> bool {
    NaiveDate::parse_from_str(&day.date, "%Y-%m-%d")
        .map(|d| d.weekday() == Weekday::Sun)
        .unwrap_or(false)
}

/// Split the series into Sunday-aligned weeks for the heatmap columns.
pub fn weekly_buckets(days: &[ContributionDay]) -> Vec<Vec<ContributionDay>> {
    let mut weeks = Vec::new();
    let mut week = Vec::new();
    for day in days {
        if starts_week(day) && !week.is_empty() {
            weeks.push(std::mem::take(&mut week));
        }
        week.push(day.clone());
    }
    if !week.is_empty() {
        weeks.push(week);
    }
    weeks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTier {
    Empty,
    Low,
    Medium,
    High,
    Max,
}

impl ColorTier {
    pub fn color(self, mode: ThemeMode) -> &'static str {
        match self {
            ColorTier::Empty if mode.is_dark() => "#161B22",
            ColorTier::Empty => "#EBEDF0",
            ColorTier::Low => "#9BE9A8",
            ColorTier::Medium => "#40C463",
            ColorTier::High => "#30A14E",
            ColorTier::Max => "#216E39",
        }
    }
}

pub fn color_tier(count: u32) -> ColorTier {
    match count {
        0 => ColorTier::Empty,
        1..=3 => ColorTier::Low,
        4..=6 => ColorTier::Medium,
        7..=12 => ColorTier::High,
        _ => ColorTier::Max,
    }
}

/// Everything the stat cards show, derived in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityStats {
    pub total: u64,
    pub active_recent: usize,
    pub longest_streak: usize,
    pub current_streak: usize,
    pub peak_day: ContributionDay,
    pub best_month: MonthTotal,
}

impl ActivityStats {
    pub fn from_days(days: &[ContributionDay]) -> Self {
        Self {
            total: total(days),
            active_recent: active_in_last(days, ACTIVE_WINDOW),
            longest_streak: longest_streak(days),
            current_streak: current_streak(days),
            peak_day: peak_day(days),
            best_month: best_month(days),
        }
    }

    /// `(label, value)` pairs in card order.
    pub fn cards(&self) -> [(&'static str, u64); 6] {
        [
            ("Total Contributions", self.total),
            ("Active Days (30d)", self.active_recent as u64),
            ("Longest Streak", self.longest_streak as u64),
            ("Current Streak", self.current_streak as u64),
            ("Most Active Day", u64::from(self.peak_day.count)),
            ("Top Month", self.best_month.count),
        ]
    }
}

#[cfg(feature = "ssr")]
const FEED_TTL: Duration = Duration::from_secs(60 * 60);

#[cfg(feature = "ssr")]
static GLOBAL_FEED_CACHE: LazyLock<DashMap<String, (Instant, ContributionSeries)>> =
    LazyLock::new(DashMap::new);

#[cfg(feature = "ssr")]
async fn fetch_contributions(url: &str) -> Result<ContributionSeries, FeedError> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| FeedError::Request(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(FeedError::Status(resp.status().as_u16()));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| FeedError::Request(e.to_string()))?;
    decode_feed(&body)
}

/// Contribution series for the configured profile. Failures degrade to an empty series.
#[cfg(feature = "ssr")]
pub async fn load_contributions(config: &SiteConfig) -> ContributionSeries {
    let cache = &*GLOBAL_FEED_CACHE;
    let key = config.github_user.clone();
    if let Some(entry) = cache.get(&key) {
        let (fetched_at, series) = &*entry;
        if fetched_at.elapsed() < FEED_TTL {
            return series.clone();
        }
    }

    let url = config.feed_url();
    match fetch_contributions(&url).await {
        Ok(series) => {
            tracing::debug!(days = series.days().len(), %url, "fetched contributions");
            cache.insert(key, (Instant::now(), series.clone()));
            series
        }
        Err(e) => {
            tracing::warn!(error = %e, %url, "contribution feed unavailable");
            ContributionSeries::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(counts: &[u32]) -> Vec<ContributionDay> {
        // 2024-01-01 is a Monday
        counts
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Days::new(i as u64);
                ContributionDay::new(date.format("%Y-%m-%d").to_string(), *c)
            })
            .collect()
    }

    #[test]
    fn test_scenario_stats() {
        let days = series(&[0, 3, 4, 0]);
        assert_eq!(total(&days), 7);
        assert_eq!(longest_streak(&days), 2);
        assert_eq!(current_streak(&days), 0);
        assert_eq!(peak_day(&days), ContributionDay::new("2024-01-03", 4));
    }

    #[test]
    fn test_empty_series() {
        let stats = ActivityStats::from_days(&[]);
        assert_eq!(stats, ActivityStats::default());
        assert_eq!(stats.peak_day, ContributionDay::new("", 0));
        assert_eq!(stats.best_month.month, "");
        assert!(weekly_buckets(&[]).is_empty());
    }

    #[test]
    fn test_total_matches_sum() {
        let counts = [5, 0, 1, 12, 40, 0, 3];
        let days = series(&counts);
        assert_eq!(total(&days), counts.iter().map(|c| *c as u64).sum::<u64>());
    }

    #[test]
    fn test_streaks_all_zero_and_all_positive() {
        for len in [1, 7, 45] {
            let zeros = series(&vec![0; len]);
            assert_eq!(longest_streak(&zeros), 0);
            assert_eq!(current_streak(&zeros), 0);

            let busy = series(&vec![2; len]);
            assert_eq!(longest_streak(&busy), len);
            assert_eq!(current_streak(&busy), len);
        }
    }

    #[test]
    fn test_current_never_exceeds_longest() {
        let samples: [&[u32]; 4] = [&[1, 1, 0, 1], &[0, 1, 1, 1], &[1, 0, 1, 1, 1, 0, 1, 1], &[]];
        for counts in samples {
            let days = series(counts);
            assert!(current_streak(&days) <= longest_streak(&days), "{counts:?}");
        }
        let days = series(&[1, 0, 1, 1, 1, 0, 1, 1]);
        assert_eq!(longest_streak(&days), 3);
        assert_eq!(current_streak(&days), 2);
    }

    #[test]
    fn test_active_window_is_positional() {
        let mut counts = vec![1; 10];
        counts.extend(vec![0; 25]);
        counts.extend(vec![3; 5]);
        let days = series(&counts);
        // the window covers 25 zeros and the trailing 5 active days
        assert_eq!(active_in_last(&days, ACTIVE_WINDOW), 5);
        assert_eq!(active_in_last(&days, 100), 15);
        assert_eq!(active_in_last(&days[..3], ACTIVE_WINDOW), 3);
    }

    #[test]
    fn test_peak_day_first_maximum_wins() {
        let days = vec![
            ContributionDay::new("d1", 5),
            ContributionDay::new("d2", 5),
        ];
        assert_eq!(peak_day(&days), ContributionDay::new("d1", 5));

        let quiet = series(&[0, 0]);
        assert_eq!(peak_day(&quiet), ContributionDay::default());
    }

    #[test]
    fn test_best_month() {
        let days = vec![
            ContributionDay::new("2024-01-30", 4),
            ContributionDay::new("2024-01-31", 1),
            ContributionDay::new("2024-02-01", 9),
            ContributionDay::new("2024-03-01", 2),
        ];
        assert_eq!(
            best_month(&days),
            MonthTotal {
                month: "2024-02".to_string(),
                count: 9
            }
        );
    }

    #[test]
    fn test_best_month_tie_prefers_earliest() {
        let days = vec![
            ContributionDay::new("2024-03-02", 6),
            ContributionDay::new("2024-01-05", 6),
            ContributionDay::new("2024-02-11", 1),
        ];
        assert_eq!(best_month(&days).month, "2024-01");
    }

    #[test]
    fn test_weekly_buckets_split_on_sunday() {
        // Mon 2024-01-01 .. Wed 2024-01-17
        let days = series(&[1; 17]);
        let weeks = weekly_buckets(&days);
        let lens = weeks.iter().map(Vec::len).collect::<Vec<_>>();
        assert_eq!(lens, vec![6, 7, 4]);
        assert_eq!(weeks[1][0].date, "2024-01-07");
    }

    #[test]
    fn test_weekly_buckets_partition_law() {
        let mut days = series(&[0, 2, 5, 0, 1, 9, 9, 9, 0, 0, 1]);
        days.push(ContributionDay::new("not-a-date", 3));
        let weeks = weekly_buckets(&days);
        assert!(weeks.iter().all(|w| !w.is_empty()));
        let flat = weeks.into_iter().flatten().collect::<Vec<_>>();
        assert_eq!(flat, days);
    }

    #[test]
    fn test_color_tiers() {
        assert_eq!(color_tier(0), ColorTier::Empty);
        assert_eq!(color_tier(3), ColorTier::Low);
        assert_eq!(color_tier(4), ColorTier::Medium);
        assert_eq!(color_tier(6), ColorTier::Medium);
        assert_eq!(color_tier(12), ColorTier::High);
        assert_eq!(color_tier(13), ColorTier::Max);
        assert_eq!(ColorTier::Empty.color(ThemeMode::Dark), "#161B22");
        assert_eq!(ColorTier::Empty.color(ThemeMode::Light), "#EBEDF0");
        assert_eq!(ColorTier::Max.color(ThemeMode::Light), "#216E39");

        let legend = LEGEND_SAMPLES.map(color_tier);
        assert_eq!(
            legend,
            [
                ColorTier::Empty,
                ColorTier::Low,
                ColorTier::Medium,
                ColorTier::High,
                ColorTier::High
            ]
        );
    }

    #[test]
    fn test_parse_feed() {
        let body = r#"{
            "total": { "lastYear": 7 },
            "contributions": [
                { "date": "2024-01-02", "count": 3, "level": 1 },
                { "date": "2024-01-01", "count": 4, "level": 2 }
            ]
        }"#;
        let series = decode_feed(body).unwrap();
        let dates = series.days().iter().map(|d| d.date.as_str()).collect::<Vec<_>>();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(total(series.days()), 7);
    }

    #[test]
    fn test_malformed_feed() {
        assert_eq!(
            decode_feed(r#"{ "error": "not found" }"#),
            Err(FeedError::MissingContributions)
        );
        assert!(matches!(decode_feed("<html>"), Err(FeedError::Decode(_))));
        assert_eq!(
            decode_feed(r#"{ "contributions": null }"#),
            Err(FeedError::MissingContributions)
        );
        assert!(decode_feed(r#"{ "contributions": [] }"#).unwrap().is_empty());
    }

    #[test]
    fn test_stat_cards() {
        let days = series(&[0, 3, 4, 0]);
        let cards = ActivityStats::from_days(&days).cards();
        assert_eq!(cards[0], ("Total Contributions", 7));
        assert_eq!(cards[4], ("Most Active Day", 4));
        assert_eq!(cards[5], ("Top Month", 7));
    }

    #[test]
    fn test_stat_cards_for_missing_feed_are_all_zero() {
        // an unreachable feed yields an empty series; the cards still render
        let cards = ActivityStats::from_days(ContributionSeries::default().days()).cards();
        assert_eq!(cards.len(), 6);
        assert!(cards.iter().all(|(_, value)| *value == 0), "{cards:?}");
    }
}

#[cfg(all(test, feature = "ssr"))]
mod feed_tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_feed_degrades_to_empty_and_is_not_cached() {
        let config = SiteConfig {
            github_user: "nobody-unreachable".to_string(),
            // discard port, nothing listens there
            feed_base: "http://127.0.0.1:9".to_string(),
            ..SiteConfig::default()
        };

        let series = load_contributions(&config).await;
        assert!(series.is_empty());
        assert!(!GLOBAL_FEED_CACHE.contains_key(&config.github_user));

        // a second call tries again rather than serving a cached failure
        assert!(load_contributions(&config).await.is_empty());
        assert!(!GLOBAL_FEED_CACHE.contains_key(&config.github_user));
    }
}
