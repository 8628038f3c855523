//! Row data
//!
//! - **models**: `Sound`, `SoundPack`, `Purchaser` and their table schemas
//! - **provider**: the `DataProvider` seam the tables load from
//! - **fixtures**: the fixed demo catalog
//! - **generator**: seeded random rows

pub mod fixtures;
pub mod generator;
pub mod models;
pub mod provider;

pub use fixtures::FixtureProvider;
pub use generator::GeneratedProvider;
pub use models::{Purchaser, Sound, SoundPack};
pub use provider::{DataProvider, DataSource};
