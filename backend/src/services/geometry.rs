//! Period to pixel geometry mapping.

use crate::api::{AxisBounds, Geometry};
use crate::models::Period;

/// Map a period onto the axis in pixel space.
///
/// `left_px` is proportional to the start date's offset from the axis start
/// and `width_px` to the period's duration, floored at `min_width_px` so that
/// labels stay legible. The floor widens to the right without moving
/// `left_px`, so a widened box can cover neighbours it never overlapped in
/// time; `Geometry::widened` records when that happened.
pub fn map_to_geometry(period: &Period, axis: &AxisBounds, axis_width_px: f64, min_width_px: f64) -> Geometry {
    let span = axis.total_span_ms as f64;
    let start_ms = axis.date_ms(period.start_date);
    let end_ms = axis.date_ms(period.end_date);

    let left_px = (start_ms - axis.min_ms) as f64 / span * axis_width_px;
    let raw_width_px = (end_ms - start_ms) as f64 / span * axis_width_px;

    Geometry {
        left_px,
        width_px: raw_width_px.max(min_width_px),
        raw_width_px,
        widened: raw_width_px < min_width_px,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DisplayZone, Significance};
    use crate::services::axis::compute_axis;
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn period(id: &str, start: NaiveDate, end: NaiveDate) -> Period {
        Period::new(id, start, end, Significance::Moderate, id).unwrap()
    }

    #[test]
    fn test_geometry_proportional() {
        // January 2024 spans 30 days between the 1st and the 31st.
        let p = period("p", date(1, 1), date(1, 31));
        let axis = compute_axis(std::slice::from_ref(&p), DisplayZone::utc(), 1200.0).unwrap();
        let geometry = map_to_geometry(&p, &axis, 1200.0, 180.0);

        assert_eq!(geometry.left_px, 0.0);
        assert_eq!(geometry.width_px, 1200.0);
        assert!(!geometry.widened);
    }

    #[test]
    fn test_geometry_midpoint() {
        let anchor = period("anchor", date(1, 1), date(1, 31));
        let p = period("p", date(1, 16), date(1, 31));
        let axis = compute_axis(&[anchor, p.clone()], DisplayZone::utc(), 1200.0).unwrap();
        let geometry = map_to_geometry(&p, &axis, 1200.0, 0.0);

        assert!((geometry.left_px - 600.0).abs() < 1e-9);
        assert!((geometry.width_px - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_geometry_single_day_hits_floor() {
        let p = period("p", date(6, 15), date(6, 15));
        let axis = compute_axis(std::slice::from_ref(&p), DisplayZone::utc(), 1200.0).unwrap();
        let geometry = map_to_geometry(&p, &axis, 1200.0, 180.0);

        assert_eq!(geometry.raw_width_px, 0.0);
        assert_eq!(geometry.width_px, 180.0);
        assert!(geometry.widened);
    }

    #[test]
    fn test_geometry_floor_keeps_left() {
        let anchor = period("anchor", date(1, 1), date(12, 31));
        let short = period("short", date(7, 1), date(7, 2));
        let axis = compute_axis(&[anchor, short.clone()], DisplayZone::utc(), 1200.0).unwrap();

        let floored = map_to_geometry(&short, &axis, 1200.0, 180.0);
        let unfloored = map_to_geometry(&short, &axis, 1200.0, 0.0);

        assert_eq!(floored.left_px, unfloored.left_px);
        assert_eq!(floored.raw_width_px, unfloored.width_px);
        assert_eq!(floored.width_px, 180.0);
    }
}
