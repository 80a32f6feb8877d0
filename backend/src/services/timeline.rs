use chrono::NaiveDate;

use crate::api::{AxisBounds, PositionedPeriod, TierLayout, TimelineLayout, ViewMode};
use crate::config::LayoutSettings;
use crate::models::Period;
use crate::services::axis::compute_axis;
use crate::services::bucketer::bucket;
use crate::services::geometry::map_to_geometry;
use crate::services::packer::pack;

/// Pick the starting view mode for a viewport.
///
/// Narrow viewports cannot show the packed timeline legibly and start in list
/// mode. The viewport width is always passed in by the caller.
pub fn initial_view_mode(viewport_width_px: f64, breakpoint_px: f64) -> ViewMode {
    if viewport_width_px < breakpoint_px {
        ViewMode::List
    } else {
        ViewMode::Timeline
    }
}

/// Keep the periods whose inclusive range touches calendar `year`.
///
/// This is the caller-side year filter; the layout itself never filters.
pub fn filter_by_year(periods: &[Period], year: i32) -> Vec<Period> {
    let (Some(year_start), Some(year_end)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return vec![];
    };

    periods
        .iter()
        .filter(|p| p.start_date <= year_end && year_start <= p.end_date)
        .cloned()
        .collect()
}

/// Lay out a set of periods for rendering.
///
/// Axis first, then tiers in display order; each tier is packed into rows
/// (or listed one per row in list mode) and every period gets its geometry.
/// An empty period set short-circuits to an empty layout.
pub fn build_layout(periods: &[Period], settings: &LayoutSettings) -> TimelineLayout {
    let Some(axis) = compute_axis(periods, settings.zone, settings.axis_width_px) else {
        log::debug!("No periods to lay out");
        return TimelineLayout::empty(settings.view_mode);
    };

    let buckets = bucket(periods);
    let tiers: Vec<TierLayout> = buckets
        .in_display_order()
        .map(|(significance, members)| {
            let rows = match settings.view_mode {
                ViewMode::Timeline => pack(members, &axis, settings.packing_order),
                ViewMode::List => list_rows(members),
            };
            log::debug!(
                "Tier {}: {} periods in {} rows",
                significance,
                members.len(),
                rows.len()
            );

            TierLayout {
                significance: significance.clone(),
                rows: position_rows(rows, &axis, settings),
            }
        })
        .collect();

    let visual_overlap_possible = tiers
        .iter()
        .flat_map(|tier| tier.rows.iter().flatten())
        .any(|positioned| positioned.visual_overlap);

    log::debug!(
        "Laid out {} periods in {} tiers ({:?} mode)",
        periods.len(),
        tiers.len(),
        settings.view_mode
    );

    TimelineLayout {
        axis: Some(axis),
        view_mode: settings.view_mode,
        tiers,
        total_periods: periods.len(),
        visual_overlap_possible,
    }
}

/// One period per row, ordered by start date.
fn list_rows(periods: &[Period]) -> Vec<Vec<&Period>> {
    let mut ordered: Vec<&Period> = periods.iter().collect();
    ordered.sort_by_key(|p| p.start_date);
    ordered.into_iter().map(|p| vec![p]).collect()
}

fn position_rows(
    rows: Vec<Vec<&Period>>,
    axis: &AxisBounds,
    settings: &LayoutSettings,
) -> Vec<Vec<PositionedPeriod>> {
    rows.into_iter()
        .enumerate()
        .map(|(row_index, row)| {
            let mut positioned: Vec<PositionedPeriod> = row
                .into_iter()
                .map(|period| PositionedPeriod {
                    period: period.clone(),
                    geometry: map_to_geometry(
                        period,
                        axis,
                        settings.axis_width_px,
                        settings.min_width_px,
                    ),
                    row_index,
                    visual_overlap: false,
                })
                .collect();
            mark_visual_overlaps(&mut positioned);
            positioned
        })
        .collect()
}

fn mark_visual_overlaps(row: &mut [PositionedPeriod]) {
    let flags: Vec<bool> = row
        .iter()
        .enumerate()
        .map(|(i, a)| {
            row.iter()
                .enumerate()
                .any(|(j, b)| i != j && a.geometry.intersects(&b.geometry))
        })
        .collect();

    for (positioned, flag) in row.iter_mut().zip(flags) {
        positioned.visual_overlap = flag;
    }
}
