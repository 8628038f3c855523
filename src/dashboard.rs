//! Dashboard state
//!
//! The enclosing view that owns the date range, the selected metric, the
//! active tab and the shared search query. Every range change is pushed to
//! all three tables and the chart so they always agree.

use crate::data::{DataProvider, Purchaser, Sound, SoundPack};
use crate::error::{DashboardError, DashboardResult};
use crate::metrics::{metric_cards, ChartSeries, Metric, MetricCard};
use crate::range::{DateRange, DateRangePicker, Preset, PresetRangeResolver, Timestamp};
use crate::table::{SortConfig, TableView, TabularDataController};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Data table tabs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Sounds,
    SoundPacks,
    Purchasers,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Sounds, Tab::SoundPacks, Tab::Purchasers]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Sounds => "sounds",
            Tab::SoundPacks => "soundpacks",
            Tab::Purchasers => "purchasers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Sounds => "Sounds",
            Tab::SoundPacks => "Sound Packs",
            Tab::Purchasers => "Purchasers",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Tab {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sounds" => Ok(Tab::Sounds),
            "soundpacks" | "sound-packs" | "packs" => Ok(Tab::SoundPacks),
            "purchasers" => Ok(Tab::Purchasers),
            _ => Err(DashboardError::UnknownTab(s.to_string())),
        }
    }
}

/// Construction options
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub title: String,
    pub description: String,
    /// Overrides `default_preset` when set
    pub initial_range: Option<DateRange>,
    pub default_preset: Preset,
    pub selected_metric: Metric,
    pub active_tab: Tab,
    /// Seed for chart series values
    pub chart_seed: u64,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            title: "Analytics Dashboard".to_string(),
            description: "Track your performance and engagement".to_string(),
            initial_range: None,
            default_preset: Preset::Last30Days,
            selected_metric: Metric::default(),
            active_tab: Tab::default(),
            chart_seed: 0,
        }
    }
}

type RangeObserver = Box<dyn FnMut(&DateRange)>;

pub struct Dashboard {
    title: String,
    description: String,
    picker: DateRangePicker,
    selected_metric: Metric,
    active_tab: Tab,
    search_query: String,
    chart_seed: u64,
    sounds: TabularDataController<Sound>,
    sound_packs: TabularDataController<SoundPack>,
    purchasers: TabularDataController<Purchaser>,
    on_range_change: Option<RangeObserver>,
}

impl Dashboard {
    /// Load all three tables from `provider` and resolve the initial range
    pub fn new(provider: &mut dyn DataProvider, options: DashboardOptions, now: Timestamp) -> Self {
        let range = options
            .initial_range
            .unwrap_or_else(|| PresetRangeResolver::new().initial(options.default_preset, now));

        let sounds = TabularDataController::for_rows(provider.sounds(), range);
        let sound_packs = TabularDataController::for_rows(provider.sound_packs(), range);
        let purchasers = TabularDataController::for_rows(provider.purchasers(), range);

        tracing::info!(
            range = %range,
            sounds = sounds.rows().len(),
            sound_packs = sound_packs.rows().len(),
            purchasers = purchasers.rows().len(),
            "dashboard initialized"
        );

        Self {
            title: options.title,
            description: options.description,
            picker: DateRangePicker::new(range),
            selected_metric: options.selected_metric,
            active_tab: options.active_tab,
            search_query: String::new(),
            chart_seed: options.chart_seed,
            sounds,
            sound_packs,
            purchasers,
            on_range_change: None,
        }
    }

    /// Builder: observe every date range change
    pub fn on_date_range_change(mut self, observer: impl FnMut(&DateRange) + 'static) -> Self {
        self.on_range_change = Some(Box::new(observer));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date_range(&self) -> &DateRange {
        self.picker.range()
    }

    pub fn picker(&self) -> &DateRangePicker {
        &self.picker
    }

    /// Dropdown selection
    pub fn select_preset(&mut self, preset: Preset, now: Timestamp) {
        let range = *self.picker.select_preset(preset, now);
        self.propagate_range(range);
    }

    /// Calendar selection; `Ok(false)` when incomplete and ignored
    pub fn select_calendar_range(
        &mut self,
        from: Option<Timestamp>,
        to: Option<Timestamp>,
    ) -> DashboardResult<bool> {
        let applied = self.picker.select_calendar(from, to)?;
        if applied {
            let range = *self.picker.range();
            self.propagate_range(range);
        }
        Ok(applied)
    }

    /// Replace the range directly
    pub fn set_date_range(&mut self, range: DateRange) {
        self.picker.set_range(range);
        self.propagate_range(range);
    }

    fn propagate_range(&mut self, range: DateRange) {
        self.sounds.set_date_range(range);
        self.sound_packs.set_date_range(range);
        self.purchasers.set_date_range(range);
        tracing::debug!(range = %range, "date range changed");

        if let Some(observer) = self.on_range_change.as_mut() {
            observer(&range);
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The search box is shared by every tab
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.sounds.set_search_query(query.clone());
        self.sound_packs.set_search_query(query.clone());
        self.purchasers.set_search_query(query.clone());
        self.search_query = query;
    }

    pub fn search_placeholder(&self) -> String {
        format!("Search {}...", self.active_tab.id())
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn selected_metric(&self) -> Metric {
        self.selected_metric
    }

    pub fn select_metric(&mut self, metric: Metric) {
        self.selected_metric = metric;
    }

    /// Header click on the active tab's table
    pub fn request_sort(&mut self, key: &str) -> SortConfig {
        match self.active_tab {
            Tab::Sounds => self.sounds.request_sort(key),
            Tab::SoundPacks => self.sound_packs.request_sort(key),
            Tab::Purchasers => self.purchasers.request_sort(key),
        }
    }

    pub fn table_view(&self, tab: Tab) -> TableView {
        match tab {
            Tab::Sounds => self.sounds.table_view(),
            Tab::SoundPacks => self.sound_packs.table_view(),
            Tab::Purchasers => self.purchasers.table_view(),
        }
    }

    pub fn active_view(&self) -> TableView {
        self.table_view(self.active_tab)
    }

    pub fn sounds(&self) -> &TabularDataController<Sound> {
        &self.sounds
    }

    pub fn sound_packs(&self) -> &TabularDataController<SoundPack> {
        &self.sound_packs
    }

    pub fn purchasers(&self) -> &TabularDataController<Purchaser> {
        &self.purchasers
    }

    pub fn cards(&self) -> Vec<MetricCard> {
        metric_cards(self.selected_metric)
    }

    /// Series for the selected metric over the shared range
    pub fn chart(&self) -> ChartSeries {
        ChartSeries::generate(self.selected_metric, self.picker.range(), self.chart_seed)
    }
}
