//! Preset-to-range derivation
//!
//! Every rule is evaluated against a caller-supplied `now`, so resolution is
//! a pure function and tests can pin the clock.
//!
//! | preset    | from                                 | to   |
//! |-----------|--------------------------------------|------|
//! | today     | now at midnight                      | now  |
//! | yesterday | now - 1 day                          | from |
//! | 7days     | now - 7 days                         | now  |
//! | 30days    | now - 30 days                        | now  |
//! | thisWeek  | now - days since Sunday              | now  |
//! | thisMonth | first of now's month at midnight     | now  |
//! | custom    | unchanged                            | unchanged |

use super::types::{DateRange, Preset, Timestamp};
use chrono::{Datelike, Duration, NaiveTime};

/// Maps a named preset plus "now" to a concrete `{from, to}` pair
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetRangeResolver;

impl PresetRangeResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `preset` against `now`
    ///
    /// `current` is only consulted for `Preset::Custom`, which keeps its
    /// endpoints and flips the mode.
    pub fn resolve(&self, preset: Preset, now: Timestamp, current: &DateRange) -> DateRange {
        let (from, to) = match preset {
            Preset::Today => (midnight(now), now),
            Preset::Yesterday => {
                let from = now - Duration::days(1);
                (from, from)
            }
            Preset::Last7Days => (now - Duration::days(7), now),
            Preset::Last30Days => (now - Duration::days(30), now),
            Preset::ThisWeek => {
                let since_sunday = now.weekday().num_days_from_sunday() as i64;
                (now - Duration::days(since_sunday), now)
            }
            Preset::ThisMonth => {
                let first = now.date() - Duration::days(now.day0() as i64);
                (first.and_time(NaiveTime::MIN), now)
            }
            Preset::Custom => return current.with_preset(Preset::Custom),
        };

        tracing::debug!(preset = %preset, %from, %to, "resolved preset range");

        // Every arm above yields from <= to
        DateRange::new_unchecked(from, to, preset)
    }

    /// Resolve a non-custom preset without a prior range
    ///
    /// `Preset::Custom` has nothing to keep and collapses to `[now, now]`.
    pub fn initial(&self, preset: Preset, now: Timestamp) -> DateRange {
        self.resolve(preset, now, &DateRange::instant(now))
    }
}

fn midnight(ts: Timestamp) -> Timestamp {
    ts.date().and_time(NaiveTime::MIN)
}
