//! Table schemas
//!
//! A `TableSchema` is the per-table configuration the generic controller is
//! parametrized by: column definitions with their field accessors, the
//! designated search fields, the date field the range filter applies to, the
//! default sort and the empty-state message.

use crate::error::DashboardError;
use crate::format::{format_compact, format_table_date};
use crate::range::{DateRange, Timestamp};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// A single cell value as seen by the comparator
///
/// Variants are ordered so that mixed comparisons are total; within one
/// column only a single variant ever occurs. Text compares by byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue<'a> {
    Number(u64),
    Date(Timestamp),
    Text(&'a str),
}

/// Sort direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply this direction to an ascending comparison result
    ///
    /// `Equal` stays `Equal`, which keeps a stable sort stable in both directions.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }

    /// Header indicator glyph
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(DashboardError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// Active sort: a column key from the schema plus a direction
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SortConfig {
    pub key: &'static str,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: &'static str, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: &'static str) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub fn descending(key: &'static str) -> Self {
        Self::new(key, SortDirection::Descending)
    }
}

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
}

/// How a column reads its value from a row
enum Accessor<R> {
    Text(fn(&R) -> &str),
    /// Rendered compactly (`34.6k`)
    Count(fn(&R) -> u64),
    /// Rendered as the plain integer
    PlainCount(fn(&R) -> u64),
    Date(fn(&R) -> Timestamp),
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Text(f) => Accessor::Text(*f),
            Accessor::Count(f) => Accessor::Count(*f),
            Accessor::PlainCount(f) => Accessor::PlainCount(*f),
            Accessor::Date(f) => Accessor::Date(*f),
        }
    }
}

/// A column definition
pub struct Column<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub align: Align,
    pub sortable: bool,
    accessor: Accessor<R>,
    display: Option<fn(&R) -> String>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            align: self.align,
            sortable: self.sortable,
            accessor: self.accessor.clone(),
            display: self.display,
        }
    }
}

impl<R> Column<R> {
    fn with_accessor(key: &'static str, label: &'static str, align: Align, accessor: Accessor<R>) -> Self {
        Self {
            key,
            label,
            align,
            sortable: true,
            accessor,
            display: None,
        }
    }

    pub fn text(key: &'static str, label: &'static str, get: fn(&R) -> &str) -> Self {
        Self::with_accessor(key, label, Align::Left, Accessor::Text(get))
    }

    pub fn count(key: &'static str, label: &'static str, get: fn(&R) -> u64) -> Self {
        Self::with_accessor(key, label, Align::Right, Accessor::Count(get))
    }

    pub fn plain_count(key: &'static str, label: &'static str, get: fn(&R) -> u64) -> Self {
        Self::with_accessor(key, label, Align::Right, Accessor::PlainCount(get))
    }

    pub fn date(key: &'static str, label: &'static str, get: fn(&R) -> Timestamp) -> Self {
        Self::with_accessor(key, label, Align::Left, Accessor::Date(get))
    }

    /// Builder: header is not clickable
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Builder: custom cell text
    pub fn display_with(mut self, display: fn(&R) -> String) -> Self {
        self.display = Some(display);
        self
    }

    /// Comparable value of this column for a row
    pub fn value<'a>(&self, row: &'a R) -> FieldValue<'a> {
        match &self.accessor {
            Accessor::Text(f) => FieldValue::Text(f(row)),
            Accessor::Count(f) | Accessor::PlainCount(f) => FieldValue::Number(f(row)),
            Accessor::Date(f) => FieldValue::Date(f(row)),
        }
    }

    /// Cell text for a row
    pub fn cell(&self, row: &R) -> String {
        if let Some(display) = self.display {
            return display(row);
        }
        match &self.accessor {
            Accessor::Text(f) => f(row).to_string(),
            Accessor::Count(f) => format_compact(f(row)),
            Accessor::PlainCount(f) => f(row).to_string(),
            Accessor::Date(f) => format_table_date(f(row)),
        }
    }
}

/// Column definitions and filter configuration for one row type
pub struct TableSchema<R> {
    name: &'static str,
    columns: Vec<Column<R>>,
    search_fields: Vec<fn(&R) -> &str>,
    date_field: fn(&R) -> Timestamp,
    default_sort: SortConfig,
    empty_message: &'static str,
}

impl<R> Clone for TableSchema<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            columns: self.columns.clone(),
            search_fields: self.search_fields.clone(),
            date_field: self.date_field,
            default_sort: self.default_sort,
            empty_message: self.empty_message,
        }
    }
}

impl<R> TableSchema<R> {
    /// Create a schema with its date field and default sort
    ///
    /// The default sort key should name a sortable column; it is also the
    /// fallback for unknown sort keys.
    pub fn new(name: &'static str, date_field: fn(&R) -> Timestamp, default_sort: SortConfig) -> Self {
        Self {
            name,
            columns: Vec::new(),
            search_fields: Vec::new(),
            date_field,
            default_sort,
            empty_message: "No results found matching your criteria",
        }
    }

    /// Builder: append a column
    pub fn column(mut self, column: Column<R>) -> Self {
        self.columns.push(column);
        self
    }

    /// Builder: designate a string field for the text search
    pub fn search_field(mut self, field: fn(&R) -> &str) -> Self {
        self.search_fields.push(field);
        self
    }

    /// Builder: message shown when the view is empty
    pub fn empty_message(mut self, message: &'static str) -> Self {
        self.empty_message = message;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn default_sort(&self) -> SortConfig {
        self.default_sort
    }

    pub fn empty_state(&self) -> &'static str {
        self.empty_message
    }

    pub fn find_column(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Map a requested key onto a sortable column key
    ///
    /// Unknown or unsortable keys fall back to the default sort key.
    pub fn resolve_sort_key(&self, key: &str) -> &'static str {
        match self.find_column(key) {
            Some(column) if column.sortable => column.key,
            _ => {
                tracing::warn!(
                    table = self.name,
                    requested = key,
                    fallback = self.default_sort.key,
                    "unknown sort key, using fallback"
                );
                self.default_sort.key
            }
        }
    }

    /// Value of `key` for a row, `None` if the schema has no such column
    ///
    /// `None` orders before every present value.
    pub fn value<'a>(&self, row: &'a R, key: &str) -> Option<FieldValue<'a>> {
        self.find_column(key).map(|c| c.value(row))
    }

    /// `query` must already be lowercased; the empty query matches everything
    pub fn matches_query(&self, row: &R, lowered_query: &str) -> bool {
        lowered_query.is_empty()
            || self
                .search_fields
                .iter()
                .any(|field| field(row).to_lowercase().contains(lowered_query))
    }

    pub fn in_range(&self, row: &R, range: &DateRange) -> bool {
        range.contains((self.date_field)(row))
    }

    /// Ascending comparison of two rows on `key`
    pub fn compare(&self, a: &R, b: &R, key: &str) -> Ordering {
        self.value(a, key).cmp(&self.value(b, key))
    }
}

/// Row types that come with a schema
pub trait Tabular: Sized {
    fn schema() -> TableSchema<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct Track {
        title: String,
        plays: u64,
        added: Timestamp,
    }

    fn schema() -> TableSchema<Track> {
        TableSchema::new("tracks", |t: &Track| t.added, SortConfig::descending("plays"))
            .column(Column::text("title", "Title", |t: &Track| t.title.as_str()))
            .column(Column::count("plays", "Plays", |t: &Track| t.plays))
            .column(Column::date("added", "Added", |t: &Track| t.added).unsortable())
            .search_field(|t: &Track| t.title.as_str())
    }

    fn track(title: &str, plays: u64) -> Track {
        Track {
            title: title.to_string(),
            plays,
            added: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_resolve_sort_key_fallback() {
        let schema = schema();
        assert_eq!(schema.resolve_sort_key("title"), "title");
        assert_eq!(schema.resolve_sort_key("bogus"), "plays");
        // Present but not sortable
        assert_eq!(schema.resolve_sort_key("added"), "plays");
    }

    #[test]
    fn test_missing_value_orders_first() {
        let schema = schema();
        let row = track("Kick", 5);
        assert_eq!(schema.value(&row, "bogus"), None);
        assert!(None < schema.value(&row, "plays"));
        assert!(None < Some(FieldValue::Number(0)));
        assert!(None < Some(FieldValue::Text("")));
    }

    #[test]
    fn test_matches_query_case_insensitive() {
        let schema = schema();
        let row = track("Deep Bass Drop", 5);

        assert!(schema.matches_query(&row, ""));
        assert!(schema.matches_query(&row, "bass"));
        assert!(schema.matches_query(&row, "deep bass"));
        assert!(!schema.matches_query(&row, "synth"));
    }

    #[test]
    fn test_cells() {
        let schema = schema();
        let row = track("Kick", 34567);
        let cells: Vec<String> = schema.columns().iter().map(|c| c.cell(&row)).collect();
        assert_eq!(cells, vec!["Kick", "34.6k", "Jan 15, 2024"]);
    }

    #[test]
    fn test_direction_apply_keeps_ties() {
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Descending.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Ascending.toggle(), SortDirection::Descending);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
