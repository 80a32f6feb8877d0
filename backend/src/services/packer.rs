//! Greedy first-fit row packing.

use serde::{Deserialize, Serialize};

use crate::api::AxisBounds;
use crate::models::Period;

/// Order in which periods are fed to the packer.
///
/// First-fit packing depends on the order periods arrive in, so the order is
/// an explicit policy rather than something the packer decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingOrder {
    /// Pack in the order the caller supplied.
    #[default]
    AsGiven,
    /// Stable-sort by start date before packing.
    SortedByStart,
}

/// Assign periods to rows so that no two periods in a row overlap.
///
/// Each period goes into the first row (scanning from row 0) where it overlaps
/// nothing under the closed-interval test; when no row fits a new one is
/// appended. Rows are returned in creation order and borrow from `periods`.
/// Periods outside `axis` are packed like any other.
///
/// Runs in O(n·r) for n periods and r rows.
pub fn pack<'a>(
    periods: &'a [Period],
    axis: &AxisBounds,
    order: PackingOrder,
) -> Vec<Vec<&'a Period>> {
    let mut ordered: Vec<&Period> = periods.iter().collect();
    if order == PackingOrder::SortedByStart {
        ordered.sort_by_key(|p| p.start_date);
    }

    let mut rows: Vec<Vec<&Period>> = Vec::new();
    for period in ordered {
        if !axis.contains(period) {
            log::debug!("Period {} lies outside the axis; packing it anyway", period.id);
        }

        match rows
            .iter_mut()
            .find(|row| row.iter().all(|placed| !placed.overlaps(period)))
        {
            Some(row) => row.push(period),
            None => rows.push(vec![period]),
        }
    }

    rows
}
