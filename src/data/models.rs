//! Row types for the three dashboard tables
//!
//! Each row type carries its table schema through `Tabular`, which is the
//! only per-table code; filtering and sorting are shared.

use crate::format::initials;
use crate::range::Timestamp;
use crate::table::{Column, SortConfig, TableSchema, Tabular};
use serde::{Deserialize, Serialize};

/// A single sound in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Sound {
    pub id: String,
    pub name: String,
    pub sound_pack: String,
    pub release_date: Timestamp,
    pub streams: u64,
    pub likes: u64,
    pub purchases: u64,
}

/// A released collection of sounds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SoundPack {
    pub id: String,
    pub name: String,
    pub release_date: Timestamp,
    pub sound_count: u64,
    pub streams: u64,
    pub likes: u64,
    pub purchases: u64,
}

/// A user who bought sounds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Purchaser {
    pub id: String,
    pub name: String,
    /// Avatar image URL; empty when the user has none
    #[serde(default)]
    pub avatar: String,
    pub streams: u64,
    pub likes: u64,
    pub credits_paid: u64,
    pub last_purchase: Timestamp,
}

impl Purchaser {
    /// Avatar fallback text
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

impl Tabular for Sound {
    fn schema() -> TableSchema<Self> {
        TableSchema::new("sounds", |s: &Sound| s.release_date, SortConfig::descending("streams"))
            .column(Column::text("name", "Name", |s: &Sound| s.name.as_str()))
            .column(Column::text("soundPack", "Sound Pack", |s: &Sound| s.sound_pack.as_str()))
            .column(Column::date("releaseDate", "Release Date", |s: &Sound| s.release_date))
            .column(Column::count("streams", "Streams", |s: &Sound| s.streams))
            .column(Column::count("likes", "Likes", |s: &Sound| s.likes))
            .column(Column::count("purchases", "Purchases", |s: &Sound| s.purchases))
            .search_field(|s: &Sound| s.name.as_str())
            .search_field(|s: &Sound| s.sound_pack.as_str())
            .empty_message("No sounds found matching your criteria")
    }
}

impl Tabular for SoundPack {
    fn schema() -> TableSchema<Self> {
        TableSchema::new("soundpacks", |p: &SoundPack| p.release_date, SortConfig::descending("streams"))
            .column(Column::text("name", "Name", |p: &SoundPack| p.name.as_str()))
            .column(Column::date("releaseDate", "Release Date", |p: &SoundPack| p.release_date))
            .column(Column::plain_count("soundCount", "Sounds", |p: &SoundPack| p.sound_count))
            .column(Column::count("streams", "Streams", |p: &SoundPack| p.streams))
            .column(Column::count("likes", "Likes", |p: &SoundPack| p.likes))
            .column(Column::count("purchases", "Purchases", |p: &SoundPack| p.purchases))
            .search_field(|p: &SoundPack| p.name.as_str())
            .empty_message("No sound packs found matching your criteria")
    }
}

impl Tabular for Purchaser {
    fn schema() -> TableSchema<Self> {
        TableSchema::new(
            "purchasers",
            |p: &Purchaser| p.last_purchase,
            SortConfig::descending("creditsPaid"),
        )
        .column(
            Column::text("name", "User", |p: &Purchaser| p.name.as_str())
                .unsortable()
                .display_with(|p: &Purchaser| format!("({}) {}", p.initials(), p.name)),
        )
        .column(Column::count("streams", "Streams", |p: &Purchaser| p.streams))
        .column(Column::count("likes", "Likes", |p: &Purchaser| p.likes))
        .column(Column::count("creditsPaid", "Credits Paid", |p: &Purchaser| p.credits_paid))
        .search_field(|p: &Purchaser| p.name.as_str())
        .empty_message("No purchasers found matching your criteria")
    }
}
