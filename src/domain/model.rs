use crate::utils::error::{EtlError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 一筆得獎紀錄：某位製作人參與了某年得獎的電影
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRecord {
    pub producer_name: String,
    pub year: i32,
}

impl WinRecord {
    pub fn new(producer_name: impl Into<String>, year: i32) -> Self {
        Self {
            producer_name: producer_name.into(),
            year,
        }
    }

    /// Checks the guarantees the catalogue is expected to uphold.
    pub fn check(&self) -> std::result::Result<(), String> {
        if self.producer_name.trim().is_empty() {
            return Err("producer name is empty".to_string());
        }
        if self.producer_name.trim() != self.producer_name {
            return Err(format!(
                "producer name '{}' is not trimmed",
                self.producer_name
            ));
        }
        if !(1000..=9999).contains(&self.year) {
            return Err(format!("year {} is not a 4-digit year", self.year));
        }
        Ok(())
    }
}

/// Gap between two chronologically adjacent wins of one producer.
///
/// Only constructible through [`ProducerInterval::new`] or
/// [`ProducerInterval::from_wins`], both of which reject inconsistent values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    producer: String,
    interval: i32,
    previous_win: i32,
    following_win: i32,
}

impl ProducerInterval {
    pub fn new(
        producer: impl Into<String>,
        gap_years: i32,
        earlier_win: i32,
        later_win: i32,
    ) -> Result<Self> {
        Self::from_wins(producer, gap_years, Some(earlier_win), Some(later_win))
    }

    /// Same as [`ProducerInterval::new`] for win years that may be absent.
    pub fn from_wins(
        producer: impl Into<String>,
        gap_years: i32,
        earlier_win: Option<i32>,
        later_win: Option<i32>,
    ) -> Result<Self> {
        if gap_years <= 0 {
            return Err(invalid("Interval must be positive"));
        }
        let (Some(earlier_win), Some(later_win)) = (earlier_win, later_win) else {
            return Err(invalid("Win years cannot be absent"));
        };
        if earlier_win > later_win {
            return Err(invalid("Previous win cannot be after following win"));
        }
        if later_win - earlier_win != gap_years {
            return Err(invalid(
                "Interval years must match the difference between win years",
            ));
        }

        Ok(Self {
            producer: producer.into(),
            interval: gap_years,
            previous_win: earlier_win,
            following_win: later_win,
        })
    }

    pub fn producer(&self) -> &str {
        &self.producer
    }

    pub fn gap_years(&self) -> i32 {
        self.interval
    }

    pub fn earlier_win(&self) -> i32 {
        self.previous_win
    }

    pub fn later_win(&self) -> i32 {
        self.following_win
    }

    pub fn is_shorter_than(&self, other: &ProducerInterval) -> bool {
        self.interval < other.interval
    }

    pub fn is_longer_than(&self, other: &ProducerInterval) -> bool {
        self.interval > other.interval
    }

    pub fn has_same_duration_as(&self, other: &ProducerInterval) -> bool {
        self.interval == other.interval
    }

    /// 連續兩年得獎
    pub fn is_consecutive(&self) -> bool {
        self.interval == 1
    }

    /// 間隔超過十年
    pub fn is_long_term(&self) -> bool {
        self.interval > 10
    }
}

impl fmt::Display for ProducerInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProducerInterval{{producer='{}', years={}, {}→{}}}",
            self.producer, self.interval, self.previous_win, self.following_win
        )
    }
}

fn invalid(message: &str) -> EtlError {
    EtlError::InvalidInterval {
        message: message.to_string(),
    }
}

/// Producers with the shortest and the longest gap between wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntervalReport {
    #[serde(rename = "min")]
    pub minimal: Vec<ProducerInterval>,
    #[serde(rename = "max")]
    pub maximal: Vec<ProducerInterval>,
}

impl IntervalReport {
    pub fn is_empty(&self) -> bool {
        self.minimal.is_empty() && self.maximal.is_empty()
    }
}

/// 目錄中的一列：一部提名電影
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub year: i32,
    pub title: String,
    pub studios: Vec<String>,
    pub producers: Vec<String>,
    pub winner: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioWins {
    pub name: String,
    pub win_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearWinners {
    pub year: i32,
    pub winner_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardsSummary {
    pub producer_intervals: IntervalReport,
    pub studios: Vec<StudioWins>,
    pub years_with_multiple_winners: Vec<YearWinners>,
    pub movie_count: usize,
    pub winning_movie_count: usize,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_interval() {
        let interval = ProducerInterval::new("Joel Silver", 1, 1990, 1991).unwrap();
        assert_eq!(interval.producer(), "Joel Silver");
        assert_eq!(interval.gap_years(), 1);
        assert_eq!(interval.earlier_win(), 1990);
        assert_eq!(interval.later_win(), 1991);
        assert!(interval.is_consecutive());
        assert!(!interval.is_long_term());
    }

    #[test]
    fn test_interval_rejects_non_positive_gap() {
        assert!(matches!(
            ProducerInterval::new("Joel Silver", 0, 1990, 1990),
            Err(EtlError::InvalidInterval { .. })
        ));
        assert!(ProducerInterval::new("Joel Silver", -1, 1991, 1990).is_err());
    }

    #[test]
    fn test_interval_rejects_absent_years() {
        let result = ProducerInterval::from_wins("Joel Silver", 1, None, Some(1991));
        assert!(matches!(result, Err(EtlError::InvalidInterval { .. })));
        assert!(ProducerInterval::from_wins("Joel Silver", 1, Some(1990), None).is_err());
    }

    #[test]
    fn test_interval_rejects_reversed_years() {
        let err = ProducerInterval::new("Joel Silver", 1, 1991, 1990).unwrap_err();
        assert!(err.to_string().contains("after following win"));
    }

    #[test]
    fn test_interval_rejects_mismatched_gap() {
        let err = ProducerInterval::new("Matthew Vaughn", 10, 2002, 2015).unwrap_err();
        assert!(err.to_string().contains("must match"));
    }

    #[test]
    fn test_interval_comparisons() {
        let short = ProducerInterval::new("A", 1, 2000, 2001).unwrap();
        let long = ProducerInterval::new("B", 13, 2002, 2015).unwrap();
        let same = ProducerInterval::new("C", 1, 1990, 1991).unwrap();

        assert!(short.is_shorter_than(&long));
        assert!(long.is_longer_than(&short));
        assert!(short.has_same_duration_as(&same));
        assert!(long.is_long_term());
    }

    #[test]
    fn test_interval_display() {
        let interval = ProducerInterval::new("Matthew Vaughn", 13, 2002, 2015).unwrap();
        assert_eq!(
            interval.to_string(),
            "ProducerInterval{producer='Matthew Vaughn', years=13, 2002→2015}"
        );
    }

    #[test]
    fn test_report_json_shape() {
        let report = IntervalReport {
            minimal: vec![ProducerInterval::new("Joel Silver", 1, 1990, 1991).unwrap()],
            maximal: vec![ProducerInterval::new("Matthew Vaughn", 13, 2002, 2015).unwrap()],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "min": [{"producer": "Joel Silver", "interval": 1, "previousWin": 1990, "followingWin": 1991}],
                "max": [{"producer": "Matthew Vaughn", "interval": 13, "previousWin": 2002, "followingWin": 2015}]
            })
        );
    }

    #[test]
    fn test_empty_report_serializes_empty_arrays() {
        let json = serde_json::to_string(&IntervalReport::default()).unwrap();
        assert_eq!(json, r#"{"min":[],"max":[]}"#);
    }

    #[test]
    fn test_win_record_check() {
        assert!(WinRecord::new("Joel Silver", 1990).check().is_ok());
        assert!(WinRecord::new("", 1990).check().is_err());
        assert!(WinRecord::new("   ", 1990).check().is_err());
        assert!(WinRecord::new(" Joel Silver", 1990).check().is_err());
        assert!(WinRecord::new("Joel Silver", 199).check().is_err());
        assert!(WinRecord::new("Joel Silver", 19900).check().is_err());
    }
}
