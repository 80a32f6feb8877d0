//! Month-aligned time axis.

use crate::api::{AxisBounds, MonthTick};
use crate::models::{first_of_month, last_of_month, next_month_start, DisplayZone, Period};

/// Compute the month-aligned axis spanning every period.
///
/// Returns `None` for an empty period set; callers render an empty state.
/// Calendar dates are anchored to local midnight in `zone` and all arithmetic
/// runs on UTC epoch milliseconds.
pub fn compute_axis(periods: &[Period], zone: DisplayZone, axis_width_px: f64) -> Option<AxisBounds> {
    let earliest_start = periods.iter().map(|p| p.start_date).min()?;
    let latest_end = periods.iter().map(|p| p.end_date).max()?;

    let min_date = first_of_month(earliest_start);
    // An inverted range can put the latest end before the earliest start; the
    // axis still covers at least the starting month.
    let max_date = last_of_month(latest_end.max(earliest_start));

    let min_ms = zone.midnight_ms(min_date);
    let max_ms = zone.midnight_ms(max_date);
    let total_span_ms = max_ms - min_ms;
    if total_span_ms <= 0 {
        return None;
    }

    let mut month_ticks = Vec::new();
    let mut tick_date = Some(min_date);
    while let Some(date) = tick_date.filter(|d| *d <= max_date) {
        let offset_ms = zone.midnight_ms(date) - min_ms;
        month_ticks.push(MonthTick {
            date,
            pixel_offset: offset_ms as f64 / total_span_ms as f64 * axis_width_px,
            label: date.format("%b %Y").to_string(),
        });
        tick_date = next_month_start(date);
    }

    log::debug!(
        "Computed axis {}..{} with {} month ticks",
        min_date,
        max_date,
        month_ticks.len()
    );

    Some(AxisBounds {
        min_date,
        max_date,
        min_ms,
        max_ms,
        total_span_ms,
        zone,
        month_ticks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Significance;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(id: &str, start: NaiveDate, end: NaiveDate) -> Period {
        Period::new(id, start, end, Significance::High, id).unwrap()
    }

    #[test]
    fn test_compute_axis_empty() {
        assert!(compute_axis(&[], DisplayZone::utc(), 1200.0).is_none());
    }

    #[test]
    fn test_compute_axis_single_month() {
        let periods = vec![
            period("p1", date(2024, 1, 1), date(2024, 1, 10)),
            period("p2", date(2024, 1, 5), date(2024, 1, 15)),
            period("p3", date(2024, 1, 20), date(2024, 1, 25)),
        ];
        let axis = compute_axis(&periods, DisplayZone::utc(), 1200.0).unwrap();

        assert_eq!(axis.min_date, date(2024, 1, 1));
        assert_eq!(axis.max_date, date(2024, 1, 31));
        assert_eq!(axis.total_span_ms, 30 * 86_400_000);
        assert_eq!(axis.month_ticks.len(), 1);
        assert_eq!(axis.month_ticks[0].pixel_offset, 0.0);
        assert_eq!(axis.month_ticks[0].label, "Jan 2024");
    }

    #[test]
    fn test_compute_axis_month_ticks() {
        let periods = vec![
            period("p1", date(2024, 3, 14), date(2024, 4, 2)),
            period("p2", date(2024, 5, 20), date(2024, 6, 9)),
        ];
        let axis = compute_axis(&periods, DisplayZone::utc(), 1200.0).unwrap();

        assert_eq!(axis.min_date, date(2024, 3, 1));
        assert_eq!(axis.max_date, date(2024, 6, 30));

        let dates: Vec<NaiveDate> = axis.month_ticks.iter().map(|t| t.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 3, 1), date(2024, 4, 1), date(2024, 5, 1), date(2024, 6, 1)]
        );

        let offsets: Vec<f64> = axis.month_ticks.iter().map(|t| t.pixel_offset).collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        assert!(offsets.iter().all(|o| *o >= 0.0 && *o <= 1200.0));
    }

    #[test]
    fn test_compute_axis_spans_year_boundary() {
        let periods = vec![period("p1", date(2024, 12, 20), date(2025, 1, 3))];
        let axis = compute_axis(&periods, DisplayZone::utc(), 1200.0).unwrap();

        assert_eq!(axis.min_date, date(2024, 12, 1));
        assert_eq!(axis.max_date, date(2025, 1, 31));
        assert_eq!(axis.month_ticks.len(), 2);
        assert_eq!(axis.month_ticks[1].label, "Jan 2025");
    }

    #[test]
    fn test_compute_axis_zone_shifts_epoch_not_dates() {
        let periods = vec![period("p1", date(2024, 1, 1), date(2024, 1, 10))];
        let utc = compute_axis(&periods, DisplayZone::utc(), 1200.0).unwrap();
        let east = compute_axis(
            &periods,
            DisplayZone::from_offset_minutes(120).unwrap(),
            1200.0,
        )
        .unwrap();

        assert_eq!(utc.min_date, east.min_date);
        assert_eq!(utc.min_ms - east.min_ms, 2 * 3_600_000);
        assert_eq!(utc.total_span_ms, east.total_span_ms);
    }
}
