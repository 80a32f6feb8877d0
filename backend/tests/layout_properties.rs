use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use transit_timeline::api::{LayoutSettings, PackingOrder, Period, Significance};
use transit_timeline::models::DisplayZone;
use transit_timeline::services::{build_layout, compute_axis, map_to_geometry, pack};

const AXIS_WIDTH_PX: f64 = 1200.0;
const MIN_WIDTH_PX: f64 = 180.0;

fn significance_strategy() -> impl Strategy<Value = Significance> {
    prop_oneof![
        Just(Significance::Maximum),
        Just(Significance::High),
        Just(Significance::Moderate),
        Just(Significance::Other("minor".to_string())),
    ]
}

/// Periods inside 2024–2025 lasting up to 90 days.
fn periods_strategy(max_len: usize) -> impl Strategy<Value = Vec<Period>> {
    prop::collection::vec(
        (0i64..700, 0i64..90, significance_strategy()),
        0..max_len,
    )
    .prop_map(|specs| {
        let origin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (offset, length, significance))| {
                let start = origin + Duration::days(offset);
                let end = start + Duration::days(length);
                Period::new(format!("p{}", i), start, end, significance, "transit").unwrap()
            })
            .collect()
    })
}

fn packing_order_strategy() -> impl Strategy<Value = PackingOrder> {
    prop_oneof![Just(PackingOrder::AsGiven), Just(PackingOrder::SortedByStart)]
}

proptest! {
    #[test]
    fn rows_never_contain_overlaps(
        periods in periods_strategy(40),
        order in packing_order_strategy(),
    ) {
        prop_assume!(!periods.is_empty());
        let axis = compute_axis(&periods, DisplayZone::utc(), AXIS_WIDTH_PX).unwrap();
        let rows = pack(&periods, &axis, order);

        for row in &rows {
            for (i, a) in row.iter().enumerate() {
                for b in row.iter().skip(i + 1) {
                    prop_assert!(!a.overlaps(b), "{} and {} share a row", a.id, b.id);
                }
            }
        }

        let packed: usize = rows.iter().map(Vec::len).sum();
        prop_assert_eq!(packed, periods.len());
    }

    #[test]
    fn appending_never_reduces_rows(
        periods in periods_strategy(30),
        extra_offset in 0i64..700,
        extra_len in 0i64..90,
    ) {
        prop_assume!(!periods.is_empty());
        let origin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let start = origin + Duration::days(extra_offset);
        let extra = Period::new("extra", start, start + Duration::days(extra_len), Significance::High, "extra").unwrap();

        let mut superset = periods.clone();
        superset.push(extra);

        let axis = compute_axis(&superset, DisplayZone::utc(), AXIS_WIDTH_PX).unwrap();
        let before = pack(&periods, &axis, PackingOrder::AsGiven).len();
        let after = pack(&superset, &axis, PackingOrder::AsGiven).len();
        prop_assert!(after >= before);
    }

    #[test]
    fn geometry_respects_floor_and_axis(periods in periods_strategy(40)) {
        prop_assume!(!periods.is_empty());
        let axis = compute_axis(&periods, DisplayZone::utc(), AXIS_WIDTH_PX).unwrap();

        for period in &periods {
            let geometry = map_to_geometry(period, &axis, AXIS_WIDTH_PX, MIN_WIDTH_PX);
            prop_assert!(geometry.width_px >= MIN_WIDTH_PX);
            prop_assert!(geometry.left_px >= 0.0);
            prop_assert!(geometry.left_px <= AXIS_WIDTH_PX);
        }
    }

    #[test]
    fn left_is_monotonic_in_start(periods in periods_strategy(40)) {
        prop_assume!(!periods.is_empty());
        let axis = compute_axis(&periods, DisplayZone::utc(), AXIS_WIDTH_PX).unwrap();

        for a in &periods {
            for b in &periods {
                if a.start_date < b.start_date {
                    let left_a = map_to_geometry(a, &axis, AXIS_WIDTH_PX, MIN_WIDTH_PX).left_px;
                    let left_b = map_to_geometry(b, &axis, AXIS_WIDTH_PX, MIN_WIDTH_PX).left_px;
                    prop_assert!(left_a <= left_b);
                }
            }
        }
    }

    #[test]
    fn layout_is_deterministic(periods in periods_strategy(40)) {
        let settings = LayoutSettings::default();
        let first = build_layout(&periods, &settings);
        let second = build_layout(&periods, &settings);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn layout_accounts_for_every_period(periods in periods_strategy(40)) {
        let layout = build_layout(&periods, &LayoutSettings::default());
        prop_assert_eq!(layout.positioned().count(), periods.len());
        prop_assert_eq!(layout.axis.is_none(), periods.is_empty());
    }
}
