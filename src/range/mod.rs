//! Date ranges
//!
//! - **types**: `Preset`, `DateRange`, timestamp parsing
//! - **resolver**: preset + "now" → concrete interval
//! - **picker**: dropdown/calendar state around the active range

pub mod picker;
pub mod resolver;
pub mod types;

pub use picker::DateRangePicker;
pub use resolver::PresetRangeResolver;
pub use types::{parse_timestamp, DateRange, Preset, Timestamp};
