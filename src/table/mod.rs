//! Data tables
//!
//! One generic controller serves every table; tables differ only in their
//! `TableSchema`.
//!
//! - **schema**: column definitions, field accessors, sort types
//! - **controller**: search/date/sort state and the view pipeline
//! - **view**: render-ready table model (text and CSV output)
//!
//! # Example
//!
//! ```rust
//! use soundbank_analytics::data::{DataProvider, FixtureProvider, Sound};
//! use soundbank_analytics::range::parse_timestamp;
//! use soundbank_analytics::table::TabularDataController;
//! use soundbank_analytics::DateRange;
//!
//! let sounds = FixtureProvider.sounds();
//! let range = DateRange::custom(
//!     parse_timestamp("2023-10-01").unwrap(),
//!     parse_timestamp("2023-12-31").unwrap(),
//! ).unwrap();
//!
//! let mut table = TabularDataController::<Sound>::for_rows(sounds, range);
//! table.set_search_query("bass");
//! let view = table.view();
//! assert_eq!(view[0].name, "Deep Bass Drop");
//! ```

pub mod controller;
pub mod schema;
pub mod view;

pub use controller::{compute_view, TabularDataController};
pub use schema::{Align, Column, FieldValue, SortConfig, SortDirection, TableSchema, Tabular};
pub use view::{HeaderCell, TableView};
