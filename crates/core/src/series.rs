//! Cumulative buildup projection with limit-crossing detection.

use crate::constants::{PROJECTION_ACCELERATION, PROJECTION_DAYS, PROJECTION_LIMIT};
use crate::round2;
use crate::types::ProjectionSeries;

/// Accumulate `daily_increase` over `days`, with each day's increment
/// growing by 1% per elapsed day. The mild acceleration is the point:
/// the series demonstrates an ecological limit being approached or
/// crossed rather than a flat line.
///
/// `days_to_limit` is the first day the running total meets `limit`.
pub fn project_cumulative(daily_increase: f64, days: u32, limit: f64) -> ProjectionSeries {
    let mut labels = Vec::with_capacity(days as usize);
    let mut data = Vec::with_capacity(days as usize);
    let mut cumulative = 0.0;
    let mut days_to_limit = None;

    for day in 1..=days {
        cumulative += daily_increase * (1.0 + day as f64 * PROJECTION_ACCELERATION);
        labels.push(format!("Day {day}"));
        data.push(round2(cumulative));

        if days_to_limit.is_none() && cumulative >= limit {
            days_to_limit = Some(day);
        }
    }

    ProjectionSeries {
        labels,
        data,
        limit,
        days_to_limit,
    }
}

/// One-year horizon against the default ecological limit.
pub fn project_cumulative_default(daily_increase: f64) -> ProjectionSeries {
    project_cumulative(daily_increase, PROJECTION_DAYS, PROJECTION_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crosses_small_limit_at_exact_day() {
        // Closed form: after d days the total is d + 0.005*d*(d+1).
        // Day 9 gives 9.45, day 10 gives 10.55, so the crossing is day 10.
        let series = project_cumulative(1.0, 365, 10.0);
        assert_eq!(series.days_to_limit, Some(10));
        assert_eq!(series.data[8], 9.45);
        assert_eq!(series.data[9], 10.55);
    }

    #[test]
    fn never_crossing_yields_none() {
        let series = project_cumulative(1.0, 365, 1_000_000.0);
        assert_eq!(series.days_to_limit, None);
        assert_eq!(series.data.len(), 365);
        assert_eq!(series.labels.len(), 365);
        assert_eq!(series.labels[0], "Day 1");
        assert_eq!(series.labels[364], "Day 365");
    }

    #[test]
    fn series_is_strictly_increasing_for_positive_rate() {
        let series = project_cumulative(2.5, 100, 10_000.0);
        for pair in series.data.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn zero_rate_never_reaches_a_positive_limit() {
        let series = project_cumulative(0.0, 365, 10_000.0);
        assert_eq!(series.days_to_limit, None);
        assert!(series.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn default_horizon_matches_constants() {
        let series = project_cumulative_default(10.0);
        assert_eq!(series.data.len(), 365);
        assert_eq!(series.limit, 10_000.0);
        // 10/day with acceleration clears 10000 around day 358, inside
        // the one-year horizon.
        assert_eq!(series.days_to_limit, Some(358));
    }
}
