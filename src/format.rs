//! Display formatting shared by the tables, cards and chart

use crate::range::Timestamp;
use chrono::NaiveDate;

/// Compact count: `34567` → `34.6k`, values below 1000 unchanged
pub fn format_compact(n: u64) -> String {
    if n >= 1000 {
        format!("{:.1}k", n as f64 / 1000.0)
    } else {
        n.to_string()
    }
}

/// Table date, e.g. `Oct 15, 2023`
pub fn format_table_date(ts: Timestamp) -> String {
    ts.format("%b %d, %Y").to_string()
}

/// Chart axis date, e.g. `Oct 15`
pub fn format_axis_date(day: NaiveDate) -> String {
    day.format("%b %d").to_string()
}

/// First letter of every space-separated word, uppercased
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(1000), "1.0k");
        assert_eq!(format_compact(34567), "34.6k");
        assert_eq!(format_compact(156789), "156.8k");
    }

    #[test]
    fn test_dates() {
        let day = NaiveDate::from_ymd_opt(2023, 10, 5).unwrap();
        assert_eq!(format_axis_date(day), "Oct 05");
        assert_eq!(
            format_table_date(day.and_hms_opt(13, 0, 0).unwrap()),
            "Oct 05, 2023"
        );
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("John Producer"), "JP");
        assert_eq!(initials("DJ MixMaster"), "DM");
        assert_eq!(initials("sarah beats"), "SB");
        assert_eq!(initials(""), "");
    }
}
