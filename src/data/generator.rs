//! Seeded mock-data generator
//!
//! All randomness comes from the injected `Rng`; with a seeded `StdRng` the
//! same seed and anchor always produce the same catalog.

use super::models::{Purchaser, Sound, SoundPack};
use super::provider::DataProvider;
use crate::range::Timestamp;
use chrono::{Duration, NaiveTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const PACK_NAMES: &[&str] = &[
    "Bass Essentials",
    "Synthwave Collection",
    "Lofi Beats",
    "Acoustic Sessions",
    "Trap Essentials",
    "Cinematic Textures",
    "Jazz Fundamentals",
    "EDM Vocals",
];

const SOUND_PREFIXES: &[&str] = &[
    "Deep", "Analog", "Dusty", "Warm", "Crisp", "Lush", "Gritty", "Airy", "Punchy", "Vintage",
];

const SOUND_KINDS: &[&str] = &[
    "Bass Drop",
    "Synth Lead",
    "Drum Kit",
    "Guitar Strum",
    "Kick Pattern",
    "Pad",
    "Piano Loop",
    "Vocal Chop",
    "Snare Roll",
    "Hi-Hat Groove",
];

const FIRST_NAMES: &[&str] = &[
    "John", "Sarah", "Alex", "Chris", "Jamie", "Taylor", "Morgan", "Riley", "Jordan", "Casey",
];

const HANDLES: &[&str] = &[
    "Producer", "Beats", "Waveform", "Harmonics", "Synth", "Rhythm", "Loops", "Tempo", "Reverb",
    "Groove",
];

/// Longest generation window, one hundred years
pub const MAX_WINDOW_DAYS: i64 = 36_500;

/// Provider that generates rows dated within a window before an anchor
pub struct GeneratedProvider<R = StdRng> {
    rng: R,
    anchor: Timestamp,
    rows: usize,
    window_days: i64,
}

impl GeneratedProvider<StdRng> {
    /// Deterministic provider from a seed
    pub fn seeded(seed: u64, anchor: Timestamp) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), anchor)
    }
}

impl<R: Rng> GeneratedProvider<R> {
    pub fn with_rng(rng: R, anchor: Timestamp) -> Self {
        Self {
            rng,
            anchor,
            rows: 8,
            window_days: 90,
        }
    }

    /// Builder: rows per table
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Builder: how many days before the anchor dates may fall, clamped to
    /// `1..=MAX_WINDOW_DAYS`
    pub fn window_days(mut self, days: i64) -> Self {
        self.window_days = days.clamp(1, MAX_WINDOW_DAYS);
        self
    }

    /// A midnight timestamp within the window, never after the anchor's day
    fn date(&mut self) -> Timestamp {
        let back = self.rng.gen_range(0..self.window_days);
        (self.anchor.date() - Duration::days(back)).and_time(NaiveTime::MIN)
    }

    fn pick(&mut self, words: &[&'static str]) -> &'static str {
        words.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn pack_name(index: usize) -> String {
        let base = PACK_NAMES[index % PACK_NAMES.len()];
        match index / PACK_NAMES.len() {
            0 => base.to_string(),
            volume => format!("{} Vol. {}", base, volume + 1),
        }
    }
}

impl<R: Rng> DataProvider for GeneratedProvider<R> {
    fn sounds(&mut self) -> Vec<Sound> {
        (0..self.rows)
            .map(|i| {
                let name = format!("{} {}", self.pick(SOUND_PREFIXES), self.pick(SOUND_KINDS));
                let pack = Self::pack_name(self.rng.gen_range(0..PACK_NAMES.len()));
                let streams = self.rng.gen_range(5_000..60_000);
                Sound {
                    id: (i + 1).to_string(),
                    name,
                    sound_pack: pack,
                    release_date: self.date(),
                    streams,
                    likes: streams / self.rng.gen_range(10..20),
                    purchases: self.rng.gen_range(100..1_000),
                }
            })
            .collect()
    }

    fn sound_packs(&mut self) -> Vec<SoundPack> {
        (0..self.rows)
            .map(|i| {
                let streams = self.rng.gen_range(50_000..160_000);
                SoundPack {
                    id: (i + 1).to_string(),
                    name: Self::pack_name(i),
                    release_date: self.date(),
                    sound_count: self.rng.gen_range(24..=64),
                    streams,
                    likes: streams / self.rng.gen_range(10..20),
                    purchases: self.rng.gen_range(1_000..5_000),
                }
            })
            .collect()
    }

    fn purchasers(&mut self) -> Vec<Purchaser> {
        (0..self.rows)
            .map(|i| {
                let name = format!("{} {}", self.pick(FIRST_NAMES), self.pick(HANDLES));
                Purchaser {
                    id: (i + 1).to_string(),
                    name,
                    avatar: String::new(),
                    streams: self.rng.gen_range(1_000..9_000),
                    likes: self.rng.gen_range(200..2_000),
                    credits_paid: self.rng.gen_range(400..3_000),
                    last_purchase: self.date(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::parse_timestamp;

    fn anchor() -> Timestamp {
        parse_timestamp("2024-03-10T15:30:00").unwrap()
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let mut a = GeneratedProvider::seeded(42, anchor()).rows(20);
        let mut b = GeneratedProvider::seeded(42, anchor()).rows(20);

        assert_eq!(a.sounds(), b.sounds());
        assert_eq!(a.sound_packs(), b.sound_packs());
        assert_eq!(a.purchasers(), b.purchasers());
    }

    #[test]
    fn test_different_seed_differs() {
        let mut a = GeneratedProvider::seeded(1, anchor()).rows(20);
        let mut b = GeneratedProvider::seeded(2, anchor()).rows(20);
        assert_ne!(a.sounds(), b.sounds());
    }

    #[test]
    fn test_dates_within_window() {
        let mut provider = GeneratedProvider::seeded(7, anchor()).rows(50).window_days(30);
        let earliest = parse_timestamp("2024-02-10").unwrap();
        let latest = parse_timestamp("2024-03-10").unwrap();

        for sound in provider.sounds() {
            assert!(sound.release_date >= earliest && sound.release_date <= latest);
        }
        for purchaser in provider.purchasers() {
            assert!(purchaser.last_purchase >= earliest && purchaser.last_purchase <= latest);
        }
    }

    #[test]
    fn test_window_is_clamped() {
        let mut huge = GeneratedProvider::seeded(5, anchor()).rows(50).window_days(i64::MAX);
        let earliest = anchor() - Duration::days(MAX_WINDOW_DAYS);
        assert!(huge.sounds().iter().all(|s| s.release_date >= earliest && s.release_date <= anchor()));

        let mut negative = GeneratedProvider::seeded(5, anchor()).rows(5).window_days(-3);
        let midnight = parse_timestamp("2024-03-10").unwrap();
        assert!(negative.purchasers().iter().all(|p| p.last_purchase == midnight));
    }

    #[test]
    fn test_pack_names_get_volumes() {
        let mut provider = GeneratedProvider::seeded(3, anchor()).rows(10);
        let packs = provider.sound_packs();
        assert_eq!(packs[0].name, "Bass Essentials");
        assert_eq!(packs[8].name, "Bass Essentials Vol. 2");
        assert!(packs.iter().all(|p| (24..=64).contains(&p.sound_count)));
    }
}
