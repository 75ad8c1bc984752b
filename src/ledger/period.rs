use std::{fmt, str::FromStr};

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, LedgerError> {
        if end < start {
            return Err(LedgerError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

/// Reporting periods offered by the financial reports screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    ThisMonth,
    LastMonth,
    LastThreeMonths,
    ThisYear,
    #[default]
    AllTime,
}

impl ReportPeriod {
    /// Resolves the period against `reference` (usually today). `AllTime` has no
    /// bounds and yields `None`; every other period yields a window, with bounds
    /// past the calendar range clamped to `NaiveDate::MIN`/`NaiveDate::MAX`.
    pub fn window(self, reference: NaiveDate) -> Option<DateWindow> {
        let month_start = reference.with_day(1).unwrap_or(reference);
        let (start, end) = match self {
            ReportPeriod::AllTime => return None,
            ReportPeriod::ThisMonth => (month_start, last_day_of_month(month_start)),
            ReportPeriod::LastMonth => {
                let start = months_before(month_start, 1);
                (start, last_day_of_month(start))
            }
            ReportPeriod::LastThreeMonths => {
                (months_before(month_start, 2), last_day_of_month(month_start))
            }
            ReportPeriod::ThisYear => (
                reference.with_ordinal(1).unwrap_or(reference),
                NaiveDate::from_ymd_opt(reference.year(), 12, 31).unwrap_or(NaiveDate::MAX),
            ),
        };
        Some(DateWindow { start, end })
    }
}

fn months_before(month_start: NaiveDate, months: u32) -> NaiveDate {
    month_start
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

fn last_day_of_month(month_start: NaiveDate) -> NaiveDate {
    month_start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReportPeriod::ThisMonth => "This Month",
            ReportPeriod::LastMonth => "Last Month",
            ReportPeriod::LastThreeMonths => "Last 3 Months",
            ReportPeriod::ThisYear => "This Year",
            ReportPeriod::AllTime => "All Time",
        };
        f.write_str(label)
    }
}

impl FromStr for ReportPeriod {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "thismonth" | "month" => Ok(ReportPeriod::ThisMonth),
            "lastmonth" => Ok(ReportPeriod::LastMonth),
            "last3months" | "lastthreemonths" | "quarter" => Ok(ReportPeriod::LastThreeMonths),
            "thisyear" | "year" => Ok(ReportPeriod::ThisYear),
            "all" | "alltime" => Ok(ReportPeriod::AllTime),
            _ => Err(LedgerError::unrecognized("report period", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_inverted_window() {
        let err = DateWindow::new(ymd(2024, 2, 1), ymd(2024, 1, 1)).expect_err("inverted");
        assert!(matches!(err, LedgerError::InvalidWindow { .. }));
    }

    #[test]
    fn resolves_month_boundaries() {
        let reference = ymd(2024, 3, 14);
        assert_eq!(
            ReportPeriod::ThisMonth.window(reference),
            Some(DateWindow { start: ymd(2024, 3, 1), end: ymd(2024, 3, 31) })
        );
        assert_eq!(
            ReportPeriod::LastMonth.window(reference),
            Some(DateWindow { start: ymd(2024, 2, 1), end: ymd(2024, 2, 29) })
        );
        assert_eq!(
            ReportPeriod::LastThreeMonths.window(reference),
            Some(DateWindow { start: ymd(2024, 1, 1), end: ymd(2024, 3, 31) })
        );
        assert_eq!(ReportPeriod::AllTime.window(reference), None);
    }

    #[test]
    fn last_month_wraps_year() {
        let window = ReportPeriod::LastMonth.window(ymd(2024, 1, 20)).unwrap();
        assert_eq!(window.start, ymd(2023, 12, 1));
        assert_eq!(window.end, ymd(2023, 12, 31));
    }

    #[test]
    fn bounded_periods_clamp_at_calendar_edges() {
        let earliest = ReportPeriod::LastMonth
            .window(NaiveDate::MIN)
            .expect("bounded period");
        assert_eq!(earliest.start, NaiveDate::MIN);
        assert!(earliest.end < NaiveDate::MAX);

        let latest = ReportPeriod::ThisMonth
            .window(NaiveDate::MAX)
            .expect("bounded period");
        assert_eq!(latest.end, NaiveDate::MAX);
        assert!(latest.start <= latest.end);

        for period in [
            ReportPeriod::ThisMonth,
            ReportPeriod::LastMonth,
            ReportPeriod::LastThreeMonths,
            ReportPeriod::ThisYear,
        ] {
            for reference in [NaiveDate::MIN, NaiveDate::MAX] {
                let window = period.window(reference).expect("bounded period");
                assert!(window.start <= window.end, "{period} at {reference}");
            }
        }
    }

    #[test]
    fn parses_form_labels() {
        assert_eq!("Last 3 Months".parse::<ReportPeriod>().unwrap(), ReportPeriod::LastThreeMonths);
        assert_eq!("this-year".parse::<ReportPeriod>().unwrap(), ReportPeriod::ThisYear);
    }
}
