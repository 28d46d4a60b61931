//! Month label calendar
//!
//! Month labels look like `"Jul 25"`: a three-letter English month
//! abbreviation, one space, and a two-digit year. Parsing uses a fixed
//! abbreviation table so results never depend on the host locale.

use chrono::NaiveDate;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Two-digit years at or below this value land in the 2000s, the rest in the 1900s
const TWO_DIGIT_YEAR_PIVOT: i32 = 49;

/// A calendar month, ordered chronologically
///
/// `month` is always within 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Month key for a year and a 1-based month, None if the month is out of range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1 = January
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Canonical label, e.g. "Jul 25"
    pub fn label(&self) -> String {
        let abbr = MONTH_ABBREVIATIONS
            .get(self.month as usize - 1)
            .copied()
            .unwrap_or("???");
        format!("{} {:02}", abbr, self.year.rem_euclid(100))
    }

    /// First day of the month
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parse a `"MMM yy"` month label
///
/// Returns None for anything that is not exactly an abbreviation, a single
/// space and two digits. Abbreviations match case-insensitively.
pub fn parse_month_label(label: &str) -> Option<MonthKey> {
    let (name, year) = label.split_once(' ')?;

    if name.len() != 3 || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    if year.len() != 2 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let month = MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| abbr.eq_ignore_ascii_case(name))? as u32
        + 1;

    let yy: i32 = year.parse().ok()?;
    let year = if yy <= TWO_DIGIT_YEAR_PIVOT {
        2000 + yy
    } else {
        1900 + yy
    };

    MonthKey::new(year, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse_month_label("Jul 25"), MonthKey::new(2025, 7));
        assert_eq!(parse_month_label("Dec 99"), MonthKey::new(1999, 12));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(parse_month_label("jul 25"), parse_month_label("Jul 25"));
        assert_eq!(parse_month_label("SEP 25"), parse_month_label("Sep 25"));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        for label in [
            "invalid",
            "",
            "Jul 2025",
            "July 25",
            " Jul 25",
            "Jul 25 ",
            "Jul  25",
            "Jul-25",
            "Jul 5",
            "Xyz 25",
            "Jul ab",
            "Jul +5",
        ] {
            assert!(parse_month_label(label).is_none(), "accepted {:?}", label);
        }
    }

    #[test]
    fn test_two_digit_year_pivot() {
        let jan_50 = parse_month_label("Jan 50").unwrap();
        let jan_49 = parse_month_label("Jan 49").unwrap();
        assert_eq!(jan_50.year(), 1950);
        assert_eq!(jan_49.year(), 2049);
        assert!(jan_50 < jan_49);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut keys: Vec<MonthKey> = ["Sep 25", "Jul 25", "Jan 26", "Aug 25"]
            .iter()
            .filter_map(|l| parse_month_label(l))
            .collect();
        keys.sort();

        let labels: Vec<String> = keys.iter().map(MonthKey::label).collect();
        assert_eq!(labels, vec!["Jul 25", "Aug 25", "Sep 25", "Jan 26"]);
    }

    #[test]
    fn test_first_day() {
        let key = parse_month_label("Feb 24").unwrap();
        assert_eq!(key.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(key.to_string(), "Feb 24");
    }

    #[test]
    fn test_new_rejects_out_of_range_months() {
        assert!(MonthKey::new(2025, 0).is_none());
        assert!(MonthKey::new(2025, 13).is_none());

        let dec = MonthKey::new(2025, 12).unwrap();
        assert_eq!(dec.month(), 12);
        assert_eq!(dec.label(), "Dec 25");
    }
}
