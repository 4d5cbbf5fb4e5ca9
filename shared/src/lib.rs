use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month (year + month) selectable for comparison.
///
/// Field order matters: the derived `Ord` compares year first, then month,
/// which is chronological order. `month` is 1-based (1 = January) and is
/// expected to stay in `1..=12`; the stepping methods preserve that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthPeriod {
    pub year: i32,
    pub month: u32,
}

impl MonthPeriod {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }

    /// The real-world present month.
    pub fn current() -> Self {
        let now = chrono::Local::now();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    /// The month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// One month earlier, crossing the year boundary from January.
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// One month later, crossing the year boundary from December.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Human-readable display label, e.g. "June 2024".
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// Full English month name.
    pub fn month_name(&self) -> &'static str {
        match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Unknown",
        }
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Last calendar day of the month (leap-year aware).
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - chrono::Duration::days(1)
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Ledger totals for a single month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub period: MonthPeriod,
    /// Sum of all positive amounts in the month
    pub total_income: f64,
    /// Sum of spending magnitudes (always non-negative)
    pub total_expenses: f64,
    /// total_income - total_expenses
    pub net: f64,
}

/// Per-category spending comparison between the two selected months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryComparison {
    pub category: String,
    pub current_amount: f64,
    pub previous_amount: f64,
    /// current_amount - previous_amount
    pub delta: f64,
}

/// Computed comparison between two calendar months of the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyComparison {
    pub current: MonthSummary,
    pub previous: MonthSummary,
    /// Change in total spending, current month vs comparison month
    pub spending_delta: f64,
    /// Percentage change in spending; None when the comparison month had
    /// no spending at all
    pub spending_delta_percent: Option<f64>,
    /// Union of spending categories across both months, largest absolute
    /// change first
    pub categories: Vec<CategoryComparison>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_crosses_year_boundary() {
        let december = MonthPeriod::new(2024, 12);
        assert_eq!(december.next(), MonthPeriod::new(2025, 1));

        let june = MonthPeriod::new(2024, 6);
        assert_eq!(june.next(), MonthPeriod::new(2024, 7));
    }

    #[test]
    fn test_previous_crosses_year_boundary() {
        let january = MonthPeriod::new(2024, 1);
        assert_eq!(january.previous(), MonthPeriod::new(2023, 12));

        let june = MonthPeriod::new(2024, 6);
        assert_eq!(june.previous(), MonthPeriod::new(2024, 5));
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(MonthPeriod::new(2024, 4) < MonthPeriod::new(2024, 5));
        assert!(MonthPeriod::new(2024, 12) < MonthPeriod::new(2025, 1));
        assert!(MonthPeriod::new(2025, 1) > MonthPeriod::new(2024, 6));
        assert_eq!(MonthPeriod::new(2024, 6), MonthPeriod::new(2024, 6));
    }

    #[test]
    fn test_label_and_display() {
        let period = MonthPeriod::new(2024, 6);
        assert_eq!(period.label(), "June 2024");
        assert_eq!(period.to_string(), "2024-06");
    }

    #[test]
    fn test_month_day_bounds() {
        let june = MonthPeriod::new(2024, 6);
        assert_eq!(june.first_day(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(june.last_day(), NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());

        // 2024 is a leap year
        let february = MonthPeriod::new(2024, 2);
        assert_eq!(february.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let december = MonthPeriod::new(2024, 12);
        assert_eq!(december.last_day(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(MonthPeriod::from_date(date), MonthPeriod::new(2024, 6));
    }
}
