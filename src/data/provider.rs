//! Data provider seam
//!
//! Tables load their rows once from a `DataProvider` and never call it again,
//! so any randomness stays in initialization.

use super::models::{Purchaser, Sound, SoundPack};
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};

/// Source of the row collections behind the three tables
pub trait DataProvider {
    fn sounds(&mut self) -> Vec<Sound>;

    fn sound_packs(&mut self) -> Vec<SoundPack>;

    fn purchasers(&mut self) -> Vec<Purchaser>;
}

/// Which provider the dashboard is built from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// The fixed demo catalog
    Fixtures,
    /// Seeded random rows dated around "now"
    #[default]
    Generated,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Fixtures => write!(f, "fixtures"),
            DataSource::Generated => write!(f, "generated"),
        }
    }
}

impl std::str::FromStr for DataSource {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixtures" | "fixture" => Ok(DataSource::Fixtures),
            "generated" | "random" => Ok(DataSource::Generated),
            _ => Err(DashboardError::UnknownDataSource(s.to_string())),
        }
    }
}
