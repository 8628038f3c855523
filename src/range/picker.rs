//! Date range picker state
//!
//! Holds the active range and whether the calendar is open. Preset selection
//! goes through `PresetRangeResolver`; calendar selections are accepted
//! verbatim once both endpoints are present.

use super::resolver::PresetRangeResolver;
use super::types::{DateRange, Preset, Timestamp};
use crate::error::DashboardResult;

#[derive(Debug, Clone)]
pub struct DateRangePicker {
    range: DateRange,
    calendar_open: bool,
    resolver: PresetRangeResolver,
}

impl DateRangePicker {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            calendar_open: false,
            resolver: PresetRangeResolver::new(),
        }
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    /// The calendar is only shown in custom mode
    pub fn shows_calendar(&self) -> bool {
        self.range.preset().is_custom()
    }

    pub fn is_calendar_open(&self) -> bool {
        self.calendar_open
    }

    pub fn set_calendar_open(&mut self, open: bool) {
        self.calendar_open = open && self.shows_calendar();
    }

    /// Select a preset from the dropdown
    ///
    /// Custom keeps the current endpoints and opens the calendar.
    pub fn select_preset(&mut self, preset: Preset, now: Timestamp) -> &DateRange {
        self.range = self.resolver.resolve(preset, now, &self.range);
        self.calendar_open = preset.is_custom();
        &self.range
    }

    /// Apply a selection coming from the calendar
    ///
    /// An incomplete selection (one endpoint) is ignored and returns
    /// `Ok(false)`. A complete one replaces the range with preset custom and
    /// closes the calendar.
    pub fn select_calendar(
        &mut self,
        from: Option<Timestamp>,
        to: Option<Timestamp>,
    ) -> DashboardResult<bool> {
        let (Some(from), Some(to)) = (from, to) else {
            tracing::debug!("ignoring incomplete calendar selection");
            return Ok(false);
        };

        self.range = DateRange::custom(from, to)?;
        self.calendar_open = false;
        Ok(true)
    }

    /// Replace the range wholesale (e.g. from a saved initial range)
    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
        self.calendar_open = false;
    }

    /// Text for the range button, only meaningful in custom mode
    pub fn button_label(&self) -> String {
        self.range.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn picker() -> DateRangePicker {
        let now = day(10);
        DateRangePicker::new(PresetRangeResolver::new().initial(Preset::Last30Days, now))
    }

    #[test]
    fn test_custom_preset_keeps_range_and_opens_calendar() {
        let mut picker = picker();
        let before = *picker.range();

        picker.select_preset(Preset::Custom, day(12));

        assert_eq!(picker.range().from(), before.from());
        assert_eq!(picker.range().to(), before.to());
        assert_eq!(picker.range().preset(), Preset::Custom);
        assert!(picker.shows_calendar());
        assert!(picker.is_calendar_open());
    }

    #[test]
    fn test_calendar_selection_accepted_verbatim() {
        let mut picker = picker();
        picker.select_preset(Preset::Custom, day(10));

        let applied = picker.select_calendar(Some(day(2)), Some(day(5))).unwrap();
        assert!(applied);
        assert_eq!(picker.range().from(), day(2));
        assert_eq!(picker.range().to(), day(5));
        assert_eq!(picker.range().preset(), Preset::Custom);
        assert!(!picker.is_calendar_open());
    }

    #[test]
    fn test_incomplete_calendar_selection_ignored() {
        let mut picker = picker();
        picker.select_preset(Preset::Custom, day(10));
        let before = *picker.range();

        assert!(!picker.select_calendar(Some(day(2)), None).unwrap());
        assert_eq!(*picker.range(), before);
        assert!(picker.is_calendar_open());
    }

    #[test]
    fn test_inverted_calendar_selection_rejected() {
        let mut picker = picker();
        assert!(picker.select_calendar(Some(day(5)), Some(day(2))).is_err());
        assert_eq!(picker.range().preset(), Preset::Last30Days);
    }

    #[test]
    fn test_calendar_only_opens_in_custom_mode() {
        let mut picker = picker();
        picker.set_calendar_open(true);
        assert!(!picker.is_calendar_open());

        picker.select_preset(Preset::Custom, day(10));
        picker.set_calendar_open(false);
        assert!(!picker.is_calendar_open());
        picker.set_calendar_open(true);
        assert!(picker.is_calendar_open());
    }

    #[test]
    fn test_button_label_follows_range() {
        let mut picker = picker();
        picker.select_calendar(Some(day(3)), Some(day(10))).unwrap();
        assert_eq!(picker.button_label(), "Mar 03, 2024 - Mar 10, 2024");

        picker.set_range(DateRange::custom(day(1), day(1)).unwrap());
        assert_eq!(picker.button_label(), "Mar 01, 2024 - Mar 01, 2024");
    }

    #[test]
    fn test_preset_closes_calendar() {
        let mut picker = picker();
        picker.select_preset(Preset::Custom, day(10));
        picker.select_preset(Preset::Last7Days, day(10));

        assert!(!picker.shows_calendar());
        assert!(!picker.is_calendar_open());
        assert_eq!(picker.range().from(), day(3));
    }
}
