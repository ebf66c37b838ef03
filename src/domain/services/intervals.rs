use crate::domain::model::{IntervalReport, ProducerInterval, WinRecord};
use crate::utils::error::{EtlError, Result};
use std::collections::BTreeMap;

/// Computes the producers with the shortest and longest gap between consecutive wins.
///
/// `wins` must already be restricted to winning movies. Every record is checked
/// before grouping; one malformed record fails the whole computation.
///
/// Output order is producer name, then chronological within a producer, so the
/// result does not depend on the order of `wins`.
pub fn compute_producer_intervals(wins: &[WinRecord]) -> Result<IntervalReport> {
    for (index, win) in wins.iter().enumerate() {
        win.check()
            .map_err(|reason| EtlError::InvalidWinRecord { index, reason })?;
    }

    let groups = group_by_producer(wins);
    tracing::debug!(
        "Grouped {} wins into {} producers",
        wins.len(),
        groups.len()
    );

    let mut intervals = Vec::new();
    for (producer, years) in groups {
        intervals.extend(extract_intervals(producer, years)?);
    }
    tracing::debug!("Calculated {} intervals", intervals.len());

    let report = select_extremes(intervals);
    tracing::info!(
        "Producer intervals computed. Min: {}, Max: {}",
        report.minimal.len(),
        report.maximal.len()
    );

    Ok(report)
}

/// 依製作人分組，收集各自的得獎年份
pub fn group_by_producer(wins: &[WinRecord]) -> BTreeMap<&str, Vec<i32>> {
    let mut groups: BTreeMap<&str, Vec<i32>> = BTreeMap::new();
    for win in wins {
        groups
            .entry(win.producer_name.as_str())
            .or_default()
            .push(win.year);
    }
    groups
}

/// One interval per pair of adjacent wins, after sorting the years.
///
/// Two wins in the same year produce no interval.
pub fn extract_intervals(producer: &str, mut years: Vec<i32>) -> Result<Vec<ProducerInterval>> {
    years.sort_unstable();

    let mut intervals = Vec::with_capacity(years.len().saturating_sub(1));
    for pair in years.windows(2) {
        let (earlier, later) = (pair[0], pair[1]);
        if earlier == later {
            tracing::debug!("Skipping same-year wins for {} in {}", producer, earlier);
            continue;
        }
        intervals.push(ProducerInterval::new(
            producer,
            later - earlier,
            earlier,
            later,
        )?);
    }

    Ok(intervals)
}

/// Keeps every interval equal to the global minimum or maximum gap.
pub fn select_extremes(intervals: Vec<ProducerInterval>) -> IntervalReport {
    let Some(first) = intervals.first() else {
        return IntervalReport::default();
    };

    let (mut shortest, mut longest) = (first, first);
    for interval in &intervals[1..] {
        if interval.is_shorter_than(shortest) {
            shortest = interval;
        }
        if interval.is_longer_than(longest) {
            longest = interval;
        }
    }

    let minimal = intervals
        .iter()
        .filter(|interval| interval.has_same_duration_as(shortest))
        .cloned()
        .collect();
    let maximal = intervals
        .iter()
        .filter(|interval| interval.has_same_duration_as(longest))
        .cloned()
        .collect();

    IntervalReport { minimal, maximal }
}
