//! # Soundbank Analytics
//!
//! State core of an analytics dashboard for a sound catalog: filterable,
//! sortable data tables over sounds, sound packs and purchasers, driven by a
//! shared date range and search query.
//!
//! ## Modules
//!
//! - [`table`]: generic table controller (search, date filter, stable sort)
//! - [`range`]: date presets, range resolution and the picker
//! - [`data`]: row models, table schemas and data providers
//! - [`metrics`]: metric catalog, cards and chart series
//! - [`dashboard`]: the view state keeping chart and tables in sync
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use soundbank_analytics::data::FixtureProvider;
//! use soundbank_analytics::range::parse_timestamp;
//! use soundbank_analytics::{Dashboard, DashboardOptions, Preset, Tab};
//!
//! let now = parse_timestamp("2024-02-15T12:00:00").unwrap();
//! let mut dashboard = Dashboard::new(&mut FixtureProvider, DashboardOptions::default(), now);
//!
//! dashboard.select_preset(Preset::ThisMonth, now);
//! dashboard.select_tab(Tab::Purchasers);
//! // A new sort key starts ascending
//! dashboard.request_sort("streams");
//!
//! let view = dashboard.active_view();
//! assert_eq!(view.rows.len(), 2);
//! assert_eq!(view.rows[0][0], "(DM) DJ MixMaster");
//! ```

pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod format;
pub mod metrics;
pub mod range;
pub mod table;

// Re-export top-level types for convenience
pub use dashboard::{Dashboard, DashboardOptions, Tab};

pub use data::{DataProvider, DataSource, FixtureProvider, GeneratedProvider, Purchaser, Sound, SoundPack};

pub use error::{DashboardError, DashboardResult};

pub use metrics::{ChartPoint, ChartSeries, Metric, MetricCard};

pub use range::{DateRange, DateRangePicker, Preset, PresetRangeResolver, Timestamp};

pub use table::{SortConfig, SortDirection, TableSchema, TableView, Tabular, TabularDataController};
