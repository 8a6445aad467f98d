use anyhow::Context;
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Выбранный период (месяц-год начала и конца)
///
/// The container accepts any combination, including `end < start`;
/// normalization decides what is actually sent to the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodState {
    #[serde(rename = "startPeriod")]
    pub start_period: Option<NaiveDate>,
    #[serde(rename = "endPeriod")]
    pub end_period: Option<NaiveDate>,
}

/// Period snapped to calendar month boundaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NormalizedPeriod {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodAdvisory {
    /// End month was before the start month and has been dropped
    EndBeforeStart,
}

impl PeriodAdvisory {
    pub fn message(&self) -> &'static str {
        match self {
            PeriodAdvisory::EndBeforeStart => {
                "End period cannot be earlier than start period. The end period has been cleared."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodResolution {
    pub period: NormalizedPeriod,
    pub advisory: Option<PeriodAdvisory>,
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn month_end(date: NaiveDate) -> NaiveDate {
    let first = month_start(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

/// `Jan2025`-style label used by the API for `startPeriod`/`endPeriod`
pub fn format_period_label(date: NaiveDate) -> String {
    date.format("%b%Y").to_string()
}

pub fn parse_period_label(label: &str) -> anyhow::Result<NaiveDate> {
    let label = label.trim();
    NaiveDate::parse_from_str(&format!("01{}", label), "%d%b%Y")
        .with_context(|| format!("invalid period label '{}'", label))
}

impl PeriodState {
    pub fn new(start_period: Option<NaiveDate>, end_period: Option<NaiveDate>) -> Self {
        Self {
            start_period,
            end_period,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_period.is_none() && self.end_period.is_none()
    }

    /// Snap to month boundaries.
    ///
    /// - missing end with a start → end of the start month
    /// - end before start → end dropped, advisory raised
    pub fn normalize(&self) -> PeriodResolution {
        let start = self.start_period.map(month_start);
        let end = match (start, self.end_period) {
            (Some(s), None) => Some(month_end(s)),
            (_, Some(e)) => Some(month_end(e)),
            (None, None) => None,
        };

        match (start, end) {
            (Some(s), Some(e)) if e < s => PeriodResolution {
                period: NormalizedPeriod {
                    start: Some(s),
                    end: None,
                },
                advisory: Some(PeriodAdvisory::EndBeforeStart),
            },
            _ => PeriodResolution {
                period: NormalizedPeriod { start, end },
                advisory: None,
            },
        }
    }

    /// State to write back into the store after an invalid range was detected
    pub fn corrected(&self) -> PeriodState {
        match self.normalize().advisory {
            Some(PeriodAdvisory::EndBeforeStart) => PeriodState {
                start_period: self.start_period,
                end_period: None,
            },
            None => *self,
        }
    }
}

impl NormalizedPeriod {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(start) = self.start {
            params.push(("startPeriod", format_period_label(start)));
        }
        if let Some(end) = self.end {
            params.push(("endPeriod", format_period_label(end)));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_missing_end_defaults_to_end_of_start_month() {
        let state = PeriodState::new(Some(d(2025, 1, 17)), None);
        let res = state.normalize();
        assert_eq!(res.period.start, Some(d(2025, 1, 1)));
        assert_eq!(res.period.end, Some(d(2025, 1, 31)));
        assert_eq!(res.advisory, None);
    }

    #[test]
    fn test_month_end_handles_leap_years_and_december() {
        assert_eq!(month_end(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(month_end(d(2025, 2, 10)), d(2025, 2, 28));
        assert_eq!(month_end(d(2024, 12, 31)), d(2024, 12, 31));
    }

    #[test]
    fn test_end_before_start_is_cleared_with_advisory() {
        let state = PeriodState::new(Some(d(2025, 3, 1)), Some(d(2025, 1, 1)));
        let res = state.normalize();
        assert_eq!(res.period.start, Some(d(2025, 3, 1)));
        assert_eq!(res.period.end, None);
        assert_eq!(res.advisory, Some(PeriodAdvisory::EndBeforeStart));

        let corrected = state.corrected();
        assert_eq!(corrected.end_period, None);
        assert_eq!(corrected.start_period, Some(d(2025, 3, 1)));

        let params = res.period.to_params();
        assert!(!params.iter().any(|(k, _)| *k == "endPeriod"));
    }

    #[test]
    fn test_same_month_end_is_valid() {
        let state = PeriodState::new(Some(d(2025, 3, 20)), Some(d(2025, 3, 2)));
        let res = state.normalize();
        assert_eq!(res.advisory, None);
        assert_eq!(res.period.end, Some(d(2025, 3, 31)));
    }

    #[test]
    fn test_start_only_params_repeat_start_month() {
        let state = PeriodState::new(Some(d(2025, 1, 1)), None);
        let params = state.normalize().period.to_params();
        assert_eq!(
            params,
            vec![
                ("startPeriod", "Jan2025".to_string()),
                ("endPeriod", "Jan2025".to_string())
            ]
        );
    }

    #[test]
    fn test_period_label_parse() {
        assert_eq!(parse_period_label("Feb2024").unwrap(), d(2024, 2, 1));
        assert_eq!(format_period_label(d(2024, 11, 5)), "Nov2024");
        assert!(parse_period_label("2024-02").is_err());
    }

    #[test]
    fn test_empty_period_has_no_params() {
        let res = PeriodState::default().normalize();
        assert!(res.period.to_params().is_empty());
        assert!(PeriodState::default().is_empty());
    }
}
