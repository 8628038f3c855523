//! Date range types shared by the picker, the chart and every table
//!
//! - `Preset`: the named shorthands offered by the picker
//! - `DateRange`: a closed interval `[from, to]` tagged with the preset that produced it

use crate::error::{DashboardError, DashboardResult};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Calendar timestamp in the viewer's wall-clock time
pub type Timestamp = NaiveDateTime;

/// Named shorthand that resolves to a concrete date interval
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Preset {
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "yesterday")]
    Yesterday,
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "thisWeek")]
    ThisWeek,
    #[serde(rename = "thisMonth")]
    ThisMonth,
    /// Endpoints come from the calendar, not from "now"
    #[serde(rename = "custom")]
    Custom,
}

impl Preset {
    /// All presets in picker order
    pub fn all() -> &'static [Preset] {
        &[
            Preset::Today,
            Preset::Yesterday,
            Preset::Last7Days,
            Preset::Last30Days,
            Preset::ThisWeek,
            Preset::ThisMonth,
            Preset::Custom,
        ]
    }

    /// Wire/config value, e.g. `"7days"`
    pub fn value(&self) -> &'static str {
        match self {
            Preset::Today => "today",
            Preset::Yesterday => "yesterday",
            Preset::Last7Days => "7days",
            Preset::Last30Days => "30days",
            Preset::ThisWeek => "thisWeek",
            Preset::ThisMonth => "thisMonth",
            Preset::Custom => "custom",
        }
    }

    /// Label shown in the picker
    pub fn label(&self) -> &'static str {
        match self {
            Preset::Today => "Today",
            Preset::Yesterday => "Yesterday",
            Preset::Last7Days => "Last 7 days",
            Preset::Last30Days => "Last 30 days",
            Preset::ThisWeek => "This week",
            Preset::ThisMonth => "This month",
            Preset::Custom => "Custom range",
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Preset::Custom)
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Preset {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::all()
            .iter()
            .copied()
            .find(|p| p.value().eq_ignore_ascii_case(s))
            .ok_or_else(|| DashboardError::UnknownPreset(s.to_string()))
    }
}

/// Closed date interval `[from, to]`
///
/// Fields are private so that `from <= to` holds for every value in
/// circulation. Non-custom ranges are produced by `PresetRangeResolver`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DateRange {
    from: Timestamp,
    to: Timestamp,
    preset: Preset,
}

impl DateRange {
    /// Create a range, rejecting `from > to`
    pub fn new(from: Timestamp, to: Timestamp, preset: Preset) -> DashboardResult<Self> {
        if from > to {
            return Err(DashboardError::InvalidDateRange {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(Self { from, to, preset })
    }

    /// Caller guarantees `from <= to`
    pub(crate) fn new_unchecked(from: Timestamp, to: Timestamp, preset: Preset) -> Self {
        debug_assert!(from <= to, "DateRange: from must not be after to");
        Self { from, to, preset }
    }

    /// Single-instant custom range `[at, at]`
    pub fn instant(at: Timestamp) -> Self {
        Self::new_unchecked(at, at, Preset::Custom)
    }

    /// Create a calendar-picked range
    pub fn custom(from: Timestamp, to: Timestamp) -> DashboardResult<Self> {
        Self::new(from, to, Preset::Custom)
    }

    /// Range covering whole calendar days, `start` midnight through the last
    /// instant of `end`
    pub fn days(start: NaiveDate, end: NaiveDate) -> DashboardResult<Self> {
        let last = end
            .and_hms_nano_opt(23, 59, 59, 999_999_999)
            .unwrap_or_else(|| end.and_time(NaiveTime::MIN));
        Self::custom(start.and_time(NaiveTime::MIN), last)
    }

    pub fn from(&self) -> Timestamp {
        self.from
    }

    pub fn to(&self) -> Timestamp {
        self.to
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Same endpoints, different preset tag
    pub fn with_preset(self, preset: Preset) -> Self {
        Self { preset, ..self }
    }

    /// Inclusive on both ends
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        self.from <= timestamp && timestamp <= self.to
    }

    /// Every calendar day touched by the range, in order
    pub fn each_day(&self) -> Vec<NaiveDate> {
        let last = self.to.date();
        let mut days = Vec::new();
        let mut day = self.from.date();
        while day <= last {
            days.push(day);
            day += Duration::days(1);
        }
        days
    }

    /// Picker button text, e.g. `Mar 03, 2024 - Mar 10, 2024`
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.from.format("%b %d, %Y"),
            self.to.format("%b %d, %Y")
        )
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.preset)
    }
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DDTHH:MM:SS`
pub fn parse_timestamp(s: &str) -> DashboardResult<Timestamp> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| DashboardError::InvalidTimestamp(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_range_rejects_inverted_endpoints() {
        let err = DateRange::custom(day(2024, 3, 10), day(2024, 3, 1)).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidDateRange { .. }));

        // A single instant is a valid range
        assert!(DateRange::custom(day(2024, 3, 1), day(2024, 3, 1)).is_ok());
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = DateRange::custom(day(2024, 3, 1), day(2024, 3, 10)).unwrap();

        assert!(!range.contains(day(2024, 2, 29)));
        assert!(range.contains(day(2024, 3, 1)));
        assert!(range.contains(day(2024, 3, 5)));
        assert!(range.contains(day(2024, 3, 10)));
        assert!(!range.contains(day(2024, 3, 10) + Duration::seconds(1)));
    }

    #[test]
    fn test_each_day_spans_calendar_days() {
        let from = day(2024, 2, 27) + Duration::hours(15);
        let to = day(2024, 3, 2) + Duration::hours(9);
        let range = DateRange::custom(from, to).unwrap();

        let days = range.each_day();
        assert_eq!(days.len(), 5); // Feb 27, 28, 29, Mar 1, 2
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 2, 27).unwrap());
        assert_eq!(days[4], NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn test_days_cover_the_whole_end_day() {
        let range = DateRange::days(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        )
        .unwrap();

        assert!(range.contains(day(2024, 3, 1)));
        assert!(range.contains(day(2024, 3, 10) + Duration::hours(18)));
        assert!(!range.contains(day(2024, 3, 11)));
        assert_eq!(range.each_day().len(), 10);

        // A single day is a valid range
        let one = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert!(DateRange::days(one, one).unwrap().contains(day(2024, 3, 5) + Duration::hours(12)));
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!("7days".parse::<Preset>().unwrap(), Preset::Last7Days);
        assert_eq!("thisweek".parse::<Preset>().unwrap(), Preset::ThisWeek);
        assert_eq!("custom".parse::<Preset>().unwrap(), Preset::Custom);
        assert!("fortnight".parse::<Preset>().is_err());

        let json = serde_json::to_string(&Preset::ThisMonth).unwrap();
        assert_eq!(json, "\"thisMonth\"");
    }

    #[test]
    fn test_label() {
        let range = DateRange::custom(day(2024, 3, 3), day(2024, 3, 10)).unwrap();
        assert_eq!(range.label(), "Mar 03, 2024 - Mar 10, 2024");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(parse_timestamp("2024-03-10").unwrap(), day(2024, 3, 10));
        assert_eq!(
            parse_timestamp("2024-03-10T14:30:00").unwrap(),
            day(2024, 3, 10) + Duration::minutes(14 * 60 + 30)
        );
        assert_eq!(
            parse_timestamp("2024-03-10 08:00:00").unwrap(),
            day(2024, 3, 10) + Duration::hours(8)
        );
        assert!(parse_timestamp("next tuesday").is_err());
    }
}
