//! Tabular data controller
//!
//! Owns the search query, date range and sort configuration of one table and
//! derives the ordered view from a read-only row snapshot.
//!
//! # View Pipeline
//!
//! ```text
//! rows → text filter → date filter → stable sort → view
//! ```
//!
//! # Sort Toggle
//!
//! `request_sort(k)` flips the direction when `k` is already the sort key and
//! otherwise switches to `k` ascending. Each table starts on its primary
//! metric descending, so the first click on a *different* column sorts
//! ascending while clicking the primary column again sorts ascending too.

use super::schema::{SortConfig, SortDirection, TableSchema, Tabular};
use super::view::TableView;
use crate::range::DateRange;

/// Run the view pipeline over `rows`
///
/// Pure: no state is touched and identical inputs yield identical output.
/// Rows whose sort values tie keep their input order.
pub fn compute_view<'a, R>(
    schema: &TableSchema<R>,
    rows: &'a [R],
    query: &str,
    range: &DateRange,
    sort: SortConfig,
) -> Vec<&'a R> {
    let query = query.to_lowercase();
    let key = schema.resolve_sort_key(sort.key);

    let mut view: Vec<&R> = rows
        .iter()
        .filter(|row| schema.matches_query(row, &query))
        .filter(|row| schema.in_range(row, range))
        .collect();

    // slice::sort_by is stable
    view.sort_by(|a, b| sort.direction.apply(schema.compare(a, b, key)));
    view
}

/// Filter/search/sort state for one table
pub struct TabularDataController<R> {
    schema: TableSchema<R>,
    rows: Vec<R>,
    query: String,
    range: DateRange,
    sort: SortConfig,
}

impl<R: Tabular> TabularDataController<R> {
    /// Controller over `rows` using the row type's own schema
    pub fn for_rows(rows: Vec<R>, range: DateRange) -> Self {
        Self::new(R::schema(), rows, range)
    }
}

impl<R> TabularDataController<R> {
    /// Create a controller; the sort starts at the schema default
    pub fn new(schema: TableSchema<R>, rows: Vec<R>, range: DateRange) -> Self {
        let sort = schema.default_sort();
        tracing::debug!(table = schema.name(), rows = rows.len(), "table loaded");
        Self {
            schema,
            rows,
            query: String::new(),
            range,
            sort,
        }
    }

    pub fn schema(&self) -> &TableSchema<R> {
        &self.schema
    }

    /// The loaded snapshot, unfiltered and in load order
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn search_query(&self) -> &str {
        &self.query
    }

    pub fn date_range(&self) -> &DateRange {
        &self.range
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    /// Replace the active query; the empty string matches all rows
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.range = range;
    }

    /// Header click on `key`
    ///
    /// Same key flips the direction, a new key starts ascending. A column
    /// that is not sortable ignores the click; unknown keys resolve to the
    /// schema's default key first.
    pub fn request_sort(&mut self, key: &str) -> SortConfig {
        if self.schema.find_column(key).is_some_and(|c| !c.sortable) {
            tracing::debug!(table = self.schema.name(), key, "ignoring click on unsortable column");
            return self.sort;
        }

        let key = self.schema.resolve_sort_key(key);
        let direction = if self.sort.key == key {
            self.sort.direction.toggle()
        } else {
            SortDirection::Ascending
        };
        self.sort = SortConfig::new(key, direction);

        tracing::debug!(
            table = self.schema.name(),
            key,
            direction = %direction,
            "sort changed"
        );
        self.sort
    }

    /// Restore the schema's default sort
    pub fn reset_sort(&mut self) {
        self.sort = self.schema.default_sort();
    }

    /// Indicator for a column header: the direction if it is the active key
    pub fn sort_indicator(&self, key: &str) -> Option<SortDirection> {
        (self.sort.key == key).then_some(self.sort.direction)
    }

    /// The ordered, filtered rows the table paints
    pub fn view(&self) -> Vec<&R> {
        compute_view(&self.schema, &self.rows, &self.query, &self.range, self.sort)
    }

    /// Render-ready table for the current state
    pub fn table_view(&self) -> TableView {
        TableView::build(&self.schema, &self.view(), self.sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{Preset, Timestamp};
    use crate::table::schema::Column;
    use chrono::NaiveDate;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: String,
        tag: String,
        streams: u64,
        date: Timestamp,
    }

    fn schema() -> TableSchema<Item> {
        TableSchema::new("items", |i: &Item| i.date, SortConfig::descending("streams"))
            .column(Column::text("name", "Name", |i: &Item| i.name.as_str()))
            .column(Column::text("tag", "Tag", |i: &Item| i.tag.as_str()).unsortable())
            .column(Column::count("streams", "Streams", |i: &Item| i.streams))
            .column(Column::date("date", "Date", |i: &Item| i.date))
            .search_field(|i: &Item| i.name.as_str())
            .search_field(|i: &Item| i.tag.as_str())
            .empty_message("No items found matching your criteria")
    }

    fn day(d: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn item(name: &str, tag: &str, streams: u64, date: Timestamp) -> Item {
        Item {
            name: name.to_string(),
            tag: tag.to_string(),
            streams,
            date,
        }
    }

    fn range(from: u32, to: u32) -> DateRange {
        DateRange::custom(day(from), day(to)).unwrap()
    }

    fn names(view: &[&Item]) -> Vec<String> {
        view.iter().map(|i| i.name.clone()).collect()
    }

    fn sample() -> Vec<Item> {
        vec![
            item("Deep Bass Drop", "Bass Essentials", 300, day(1)),
            item("Analog Lead", "Synthwave", 100, day(2)),
            item("Lofi Kit", "Lofi Beats", 300, day(3)),
            item("Bass Pluck", "Synthwave", 200, day(4)),
            item("Ambient Pad", "Cinematic", 100, day(5)),
        ]
    }

    #[test]
    fn test_alpha_beta_scenario() {
        let rows = vec![item("Alpha", "", 100, day(1)), item("Beta", "", 50, day(2))];
        let schema = schema();

        let view = compute_view(&schema, &rows, "", &range(1, 2), SortConfig::descending("streams"));
        assert_eq!(names(&view), vec!["Alpha", "Beta"]);

        let view = compute_view(&schema, &rows, "", &range(2, 2), SortConfig::descending("streams"));
        assert_eq!(names(&view), vec!["Beta"]);
    }

    #[test]
    fn test_date_filter_is_inclusive() {
        let rows = sample();
        let schema = schema();
        let r = range(2, 4);

        let view = compute_view(&schema, &rows, "", &r, SortConfig::ascending("date"));
        assert_eq!(names(&view), vec!["Analog Lead", "Lofi Kit", "Bass Pluck"]);
        assert!(view.iter().all(|i| r.contains(i.date)));
    }

    #[test]
    fn test_text_filter_any_designated_field() {
        let rows = sample();
        let schema = schema();

        // "bass" hits a name in one row and a tag in another
        let view = compute_view(&schema, &rows, "BASS", &range(1, 5), SortConfig::ascending("name"));
        assert_eq!(names(&view), vec!["Bass Pluck", "Deep Bass Drop"]);

        let view = compute_view(&schema, &rows, "synthwave", &range(1, 5), SortConfig::ascending("name"));
        assert_eq!(names(&view), vec!["Analog Lead", "Bass Pluck"]);

        let view = compute_view(&schema, &rows, "nothing like this", &range(1, 5), schema.default_sort());
        assert!(view.is_empty());
    }

    #[test]
    fn test_empty_query_returns_all_in_range() {
        let rows = sample();
        let schema = schema();
        let view = compute_view(&schema, &rows, "", &range(1, 5), schema.default_sort());
        assert_eq!(view.len(), rows.len());
    }

    #[test]
    fn test_sort_is_stable_both_directions() {
        let rows = sample();
        let schema = schema();

        let asc = compute_view(&schema, &rows, "", &range(1, 5), SortConfig::ascending("streams"));
        assert_eq!(
            names(&asc),
            vec!["Analog Lead", "Ambient Pad", "Bass Pluck", "Deep Bass Drop", "Lofi Kit"]
        );

        // Ties keep input order in descending order too
        let desc = compute_view(&schema, &rows, "", &range(1, 5), SortConfig::descending("streams"));
        assert_eq!(
            names(&desc),
            vec!["Deep Bass Drop", "Lofi Kit", "Bass Pluck", "Analog Lead", "Ambient Pad"]
        );
    }

    #[test]
    fn test_string_sort_is_lexicographic() {
        let rows = sample();
        let schema = schema();
        let view = compute_view(&schema, &rows, "", &range(1, 5), SortConfig::descending("name"));
        assert_eq!(
            names(&view),
            vec!["Lofi Kit", "Deep Bass Drop", "Bass Pluck", "Analog Lead", "Ambient Pad"]
        );
    }

    #[test]
    fn test_compute_view_is_idempotent() {
        let rows = sample();
        let schema = schema();
        let sort = SortConfig::descending("streams");

        let first: Vec<Item> = compute_view(&schema, &rows, "a", &range(1, 5), sort)
            .into_iter()
            .cloned()
            .collect();
        let second: Vec<Item> = compute_view(&schema, &rows, "a", &range(1, 5), sort)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_sort_key_falls_back() {
        let rows = sample();
        let schema = schema();
        let fallback = compute_view(&schema, &rows, "", &range(1, 5), SortConfig::descending("nope"));
        let default = compute_view(&schema, &rows, "", &range(1, 5), SortConfig::descending("streams"));
        assert_eq!(names(&fallback), names(&default));
    }

    #[test]
    fn test_request_sort_toggle_law() {
        let mut controller = TabularDataController::new(schema(), sample(), range(1, 5));
        assert_eq!(controller.sort(), SortConfig::descending("streams"));

        // Already the key: each call flips exactly once
        assert_eq!(controller.request_sort("streams").direction, SortDirection::Ascending);
        assert_eq!(controller.request_sort("streams").direction, SortDirection::Descending);
        assert_eq!(controller.request_sort("streams").direction, SortDirection::Ascending);

        // New key starts ascending
        assert_eq!(controller.request_sort("name"), SortConfig::ascending("name"));
        assert_eq!(controller.request_sort("name"), SortConfig::descending("name"));
    }

    #[test]
    fn test_request_sort_preserves_relative_order_of_ties() {
        let mut controller = TabularDataController::new(schema(), sample(), range(1, 5));
        controller.request_sort("name");
        let before = names(&controller.view());

        controller.request_sort("streams");
        let after = names(&controller.view());

        // Deep Bass Drop and Lofi Kit tie on 300 streams
        let pos = |v: &[String], n: &str| v.iter().position(|x| x == n).unwrap();
        assert_eq!(
            pos(&before, "Deep Bass Drop") < pos(&before, "Lofi Kit"),
            pos(&after, "Deep Bass Drop") < pos(&after, "Lofi Kit")
        );
    }

    #[test]
    fn test_request_sort_unsortable_column_is_ignored() {
        let mut controller = TabularDataController::new(schema(), sample(), range(1, 5));
        let before = names(&controller.view());

        assert_eq!(controller.request_sort("tag"), SortConfig::descending("streams"));
        assert_eq!(controller.request_sort("tag"), SortConfig::descending("streams"));
        assert_eq!(names(&controller.view()), before);
    }

    #[test]
    fn test_request_sort_unknown_key_toggles_default() {
        let mut controller = TabularDataController::new(schema(), sample(), range(1, 5));
        let sort = controller.request_sort("nope");
        assert_eq!(sort, SortConfig::ascending("streams"));
    }

    #[test]
    fn test_controller_state_replacement() {
        let mut controller = TabularDataController::new(schema(), sample(), range(1, 5));
        controller.set_search_query("pad");
        assert_eq!(names(&controller.view()), vec!["Ambient Pad"]);

        controller.set_date_range(range(1, 4));
        assert!(controller.view().is_empty());
        assert_eq!(controller.rows().len(), 5);

        controller.set_search_query("");
        controller.set_date_range(
            DateRange::new(day(1), day(5), Preset::Last7Days).unwrap(),
        );
        assert_eq!(controller.view().len(), 5);
    }

    #[test]
    fn test_sort_indicator() {
        let mut controller = TabularDataController::new(schema(), sample(), range(1, 5));
        assert_eq!(controller.sort_indicator("streams"), Some(SortDirection::Descending));
        assert_eq!(controller.sort_indicator("name"), None);

        controller.request_sort("name");
        assert_eq!(controller.sort_indicator("name"), Some(SortDirection::Ascending));
        assert_eq!(controller.sort_indicator("streams"), None);

        controller.reset_sort();
        assert_eq!(controller.sort(), SortConfig::descending("streams"));
    }
}
