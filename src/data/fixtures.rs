//! Fixed fixture catalog
//!
//! The demo catalog of eight sounds, six sound packs and eight purchasers.
//! Dates are midnight of the listed day.

use super::models::{Purchaser, Sound, SoundPack};
use super::provider::DataProvider;
use crate::range::Timestamp;
use chrono::NaiveDate;

/// Provider returning the same fixed catalog on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureProvider;

fn date(y: i32, m: u32, d: u32) -> Timestamp {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn sound(id: &str, name: &str, pack: &str, released: Timestamp, streams: u64, likes: u64, purchases: u64) -> Sound {
    Sound {
        id: id.to_string(),
        name: name.to_string(),
        sound_pack: pack.to_string(),
        release_date: released,
        streams,
        likes,
        purchases,
    }
}

fn pack(id: &str, name: &str, released: Timestamp, sound_count: u64, streams: u64, likes: u64, purchases: u64) -> SoundPack {
    SoundPack {
        id: id.to_string(),
        name: name.to_string(),
        release_date: released,
        sound_count,
        streams,
        likes,
        purchases,
    }
}

fn purchaser(id: &str, name: &str, streams: u64, likes: u64, credits_paid: u64, last: Timestamp) -> Purchaser {
    Purchaser {
        id: id.to_string(),
        name: name.to_string(),
        avatar: String::new(),
        streams,
        likes,
        credits_paid,
        last_purchase: last,
    }
}

impl DataProvider for FixtureProvider {
    fn sounds(&mut self) -> Vec<Sound> {
        vec![
            sound("1", "Deep Bass Drop", "Bass Essentials", date(2023, 10, 15), 34567, 2341, 567),
            sound("2", "Analog Synth Lead", "Synthwave Collection", date(2023, 11, 2), 28932, 1876, 412),
            sound("3", "Lofi Drum Kit", "Lofi Beats", date(2023, 9, 21), 45678, 3210, 821),
            sound("4", "Acoustic Guitar Strum", "Acoustic Sessions", date(2024, 1, 10), 18765, 1245, 298),
            sound("5", "808 Kick Pattern", "Trap Essentials", date(2023, 12, 5), 56789, 4321, 932),
            sound("6", "Ambient Pad", "Cinematic Textures", date(2023, 8, 28), 23456, 1765, 387),
            sound("7", "Electric Piano Loop", "Jazz Fundamentals", date(2024, 2, 15), 12345, 987, 246),
            sound("8", "House Vocal Chop", "EDM Vocals", date(2023, 11, 18), 32109, 2134, 532),
        ]
    }

    fn sound_packs(&mut self) -> Vec<SoundPack> {
        vec![
            pack("1", "Bass Essentials", date(2023, 10, 1), 48, 124567, 8341, 2567),
            pack("2", "Synthwave Collection", date(2023, 11, 1), 36, 98932, 6876, 1412),
            pack("3", "Lofi Beats", date(2023, 9, 1), 64, 145678, 9210, 3821),
            pack("4", "Acoustic Sessions", date(2024, 1, 1), 32, 78765, 5245, 1298),
            pack("5", "Trap Essentials", date(2023, 12, 1), 56, 156789, 12321, 4932),
            pack("6", "Cinematic Textures", date(2023, 8, 1), 42, 83456, 4765, 1387),
        ]
    }

    fn purchasers(&mut self) -> Vec<Purchaser> {
        vec![
            purchaser("1", "John Producer", 3245, 567, 890, date(2023, 12, 28)),
            purchaser("2", "Sarah Beats", 4567, 789, 1200, date(2024, 1, 15)),
            purchaser("3", "DJ MixMaster", 6543, 1234, 2100, date(2024, 2, 2)),
            purchaser("4", "Alex Waveform", 2345, 432, 560, date(2023, 11, 18)),
            purchaser("5", "Chris Harmonics", 8765, 1876, 2800, date(2024, 1, 25)),
            purchaser("6", "Jamie Synth", 5432, 986, 1500, date(2023, 12, 12)),
            purchaser("7", "Taylor Rhythm", 3876, 765, 950, date(2024, 1, 5)),
            purchaser("8", "Morgan Beats", 7654, 1654, 2400, date(2024, 2, 10)),
        ]
    }
}
