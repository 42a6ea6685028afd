//! Period ordering.
//!
//! Turns period labels into chronological [`PeriodKey`]s. Two shapes are
//! understood:
//!
//! - `"<Mon> <Year>"` such as `"Jan 2022"`: key = `year * 12 + month`, with
//!   `month` in `1..=12` (0 when the month name is not recognized)
//! - epidemiological week labels ending in digits such as `"2022-W05"` or
//!   `"Week 5"`: key = the trailing integer, or `year * 100 + week` when a
//!   year grouping is supplied alongside the label (weeks outside `1..=99`
//!   are unparseable under a year)
//!
//! Anything else maps to [`PeriodKey::UNPARSEABLE`] and sorts first.

use std::sync::LazyLock;

use epitrend_spi::{Observation, PeriodKey};
use regex::Regex;

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Largest week number that fits the `year * 100 + week` encoding.
const MAX_GROUPED_WEEK: u32 = 99;

static MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)\.?\s+(\d{4})$").expect("month-year pattern is valid")
});

static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)$").expect("trailing-number pattern is valid"));

/// Month index for a month name, matched on its first three letters.
///
/// Returns 1 for January through 12 for December, 0 when unrecognized.
pub fn month_index(name: &str) -> u32 {
    let prefix: String = name.chars().take(3).collect::<String>().to_ascii_lowercase();
    if prefix.len() < 3 {
        return 0;
    }
    MONTHS
        .iter()
        .position(|m| *m == prefix)
        .map(|i| i as u32 + 1)
        .unwrap_or(0)
}

fn trailing_number(label: &str) -> Option<i64> {
    TRAILING_NUMBER
        .captures(label)
        .and_then(|caps| caps[1].parse().ok())
}

/// Chronological key for a label with no year grouping.
pub fn order_key(label: &str) -> PeriodKey {
    order_key_in_year(label, None)
}

/// Chronological key for a label, grouping week labels under `year` when given.
pub fn order_key_in_year(label: &str, year: Option<i32>) -> PeriodKey {
    let label = label.trim();
    if let Some(caps) = MONTH_YEAR.captures(label) {
        let year: i64 = caps[2].parse().unwrap_or(0);
        return PeriodKey(year * 12 + i64::from(month_index(&caps[1])));
    }
    match (trailing_number(label), year) {
        (Some(week), Some(year)) => year_week_key(year, week).unwrap_or(PeriodKey::UNPARSEABLE),
        (Some(week), None) => PeriodKey(week),
        (None, _) => PeriodKey::UNPARSEABLE,
    }
}

fn year_week_key(year: i32, week: i64) -> Option<PeriodKey> {
    let week = u32::try_from(week).ok().filter(|w| (1..=MAX_GROUPED_WEEK).contains(w))?;
    i64::from(year)
        .checked_mul(100)?
        .checked_add(i64::from(week))
        .map(PeriodKey)
}

/// Key for an observation, honouring its year grouping.
pub fn observation_key(observation: &Observation) -> PeriodKey {
    order_key_in_year(&observation.period_label, observation.year)
}

/// Week number encoded in a week label.
///
/// Month-year labels carry no week and return `None`, as do labels without
/// trailing digits.
pub fn week_number(label: &str) -> Option<u32> {
    let label = label.trim();
    if MONTH_YEAR.is_match(label) {
        return None;
    }
    trailing_number(label).and_then(|n| u32::try_from(n).ok())
}

/// Position of each label within a cycle of `period` weeks (1-based).
///
/// Labels whose week is missing or outside `1..=period` fall back to the
/// point's position in the series, wrapped into the cycle.
pub fn week_positions<S: AsRef<str>>(labels: &[S], period: usize) -> Vec<u32> {
    let period = period.max(1);
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| match week_number(label.as_ref()) {
            Some(week) if week >= 1 && week as usize <= period => week,
            _ => (i % period) as u32 + 1,
        })
        .collect()
}

/// Sort observations chronologically.
///
/// Equal keys keep their input order.
pub fn sort_series(observations: Vec<Observation>) -> Vec<Observation> {
    let mut keyed: Vec<(PeriodKey, Observation)> = observations
        .into_iter()
        .map(|o| (observation_key(&o), o))
        .collect();
    keyed.sort_by_key(|(key, _)| *key);
    keyed.into_iter().map(|(_, o)| o).collect()
}
