//! Metric catalog, card grid and chart series
//!
//! The selected metric drives the chart. Chart values are mock data derived
//! from `(seed, metric, day)` alone, so a re-render with the same range
//! yields the same series and moving the range keeps overlapping days stable.

use crate::error::DashboardError;
use crate::format::{format_axis_date, format_compact};
use crate::range::DateRange;
use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A headline quantity shown as a card and chartable over time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Streams,
    Likes,
    Purchases,
    Credits,
    Cashouts,
    Users,
    Rank,
}

impl Metric {
    /// Card grid order
    pub fn all() -> &'static [Metric] {
        &[
            Metric::Streams,
            Metric::Likes,
            Metric::Purchases,
            Metric::Credits,
            Metric::Cashouts,
            Metric::Users,
            Metric::Rank,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Metric::Streams => "streams",
            Metric::Likes => "likes",
            Metric::Purchases => "purchases",
            Metric::Credits => "credits",
            Metric::Cashouts => "cashouts",
            Metric::Users => "users",
            Metric::Rank => "rank",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::Streams => "Streams",
            Metric::Likes => "Likes",
            Metric::Purchases => "Purchases",
            Metric::Credits => "Credits Earned",
            Metric::Cashouts => "Dollars Cashed Out",
            Metric::Users => "Users Engaged",
            Metric::Rank => "Artist Rank",
        }
    }

    /// Chart line color
    pub fn color(&self) -> &'static str {
        match self {
            Metric::Streams => "#33C3F0",
            Metric::Likes => "#E74694",
            Metric::Purchases => "#9b87f5",
            Metric::Credits => "#F7B801",
            Metric::Cashouts => "#10B981",
            Metric::Users => "#8B5CF6",
            Metric::Rank => "#EC4899",
        }
    }

    /// Half-open range of mock daily values
    pub fn daily_range(&self) -> (u64, u64) {
        match self {
            Metric::Streams => (500, 1500),
            Metric::Likes => (50, 350),
            Metric::Purchases => (5, 55),
            Metric::Credits => (100, 600),
            Metric::Cashouts => (20, 220),
            Metric::Users => (100, 500),
            Metric::Rank => (1, 21),
        }
    }

    /// Rank improves as it goes down
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Metric::Rank)
    }

    /// Headline card for this metric
    pub fn card(&self) -> MetricCard {
        let (value, change) = match self {
            Metric::Streams => ("128.5k", "+12.3%"),
            Metric::Likes => ("24.8k", "+8.1%"),
            Metric::Purchases => ("3,254", "+5.7%"),
            Metric::Credits => ("12,768", "+15.2%"),
            Metric::Cashouts => ("$5,487", "+9.8%"),
            Metric::Users => ("8,742", "+3.4%"),
            Metric::Rank => ("#28", "+5"),
        };
        MetricCard {
            metric: *self,
            label: self.display_name(),
            value,
            change,
            positive: !change.starts_with('-'),
            selected: false,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Metric {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::all()
            .iter()
            .copied()
            .find(|m| m.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| DashboardError::UnknownMetric(s.to_string()))
    }
}

/// One card of the metric grid
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricCard {
    pub metric: Metric,
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub positive: bool,
    pub selected: bool,
}

/// The card grid with `selected` highlighted
pub fn metric_cards(selected: Metric) -> Vec<MetricCard> {
    Metric::all()
        .iter()
        .map(|m| MetricCard {
            selected: *m == selected,
            ..m.card()
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    /// Axis label, e.g. `Mar 03`
    pub label: String,
    pub value: u64,
}

/// Widest bar `ChartSeries::render_text` draws
pub const MAX_BAR_WIDTH: usize = 200;

/// Daily series for the selected metric over the active range
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSeries {
    pub metric: Metric,
    pub title: String,
    pub color: &'static str,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// One point per calendar day in `range`
    pub fn generate(metric: Metric, range: &DateRange, seed: u64) -> Self {
        let points = range
            .each_day()
            .into_iter()
            .map(|date| ChartPoint {
                label: format_axis_date(date),
                value: daily_value(metric, date, seed),
                date,
            })
            .collect::<Vec<_>>();

        tracing::debug!(metric = %metric, points = points.len(), "chart series generated");

        Self {
            metric,
            title: format!("{} Over Time", metric.display_name()),
            color: metric.color(),
            points,
        }
    }

    pub fn max_value(&self) -> Option<u64> {
        self.points.iter().map(|p| p.value).max()
    }

    /// Horizontal bar rendering, one line per day
    ///
    /// `width` is capped at `MAX_BAR_WIDTH` characters.
    pub fn render_text(&self, width: usize) -> String {
        let width = width.min(MAX_BAR_WIDTH);
        let mut out = format!("{}\n", self.title);
        let max = self.max_value().unwrap_or(0).max(1);
        for point in &self.points {
            let bar = (point.value as usize).saturating_mul(width) / max as usize;
            out.push_str(&format!(
                "{}  {:>6}  {}\n",
                point.label,
                format_compact(point.value),
                "█".repeat(bar)
            ));
        }
        out
    }
}

fn daily_value(metric: Metric, date: NaiveDate, seed: u64) -> u64 {
    let metric_index = Metric::all().iter().position(|m| *m == metric).unwrap_or(0) as u64;
    let day = date.num_days_from_ce() as u64;
    let mut rng = StdRng::seed_from_u64(seed ^ (metric_index << 40) ^ day);
    let (low, high) = metric.daily_range();
    rng.gen_range(low..high)
}
