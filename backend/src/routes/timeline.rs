use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DisplayZone, Period, Significance};

// =========================================================
// Timeline layout types
// =========================================================

/// How the timeline is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Packed Gantt rows along the month axis.
    #[default]
    Timeline,
    /// One period per row, ordered by start date (narrow viewports).
    List,
}

/// A first-of-month marker on the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthTick {
    pub date: NaiveDate,
    pub pixel_offset: f64,
    /// Short label such as "Jan 2024".
    pub label: String,
}

/// Month-aligned axis spanning every period of a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    /// First day of the month holding the earliest start date.
    pub min_date: NaiveDate,
    /// Last day of the month holding the latest end date.
    pub max_date: NaiveDate,
    /// UTC epoch milliseconds of local midnight on `min_date`.
    pub min_ms: i64,
    /// UTC epoch milliseconds of local midnight on `max_date`.
    pub max_ms: i64,
    /// `max_ms - min_ms`, always positive.
    pub total_span_ms: i64,
    /// Zone the calendar dates are anchored in.
    pub zone: DisplayZone,
    pub month_ticks: Vec<MonthTick>,
}

impl AxisBounds {
    /// Epoch milliseconds of local midnight on `date` in the axis zone.
    pub fn date_ms(&self, date: NaiveDate) -> i64 {
        self.zone.midnight_ms(date)
    }

    /// Whether both ends of `period` lie inside the axis.
    pub fn contains(&self, period: &Period) -> bool {
        self.min_date <= period.start_date && period.end_date <= self.max_date
    }
}

/// Pixel placement of a period on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub left_px: f64,
    /// Rendered width, never below the configured minimum.
    pub width_px: f64,
    /// Width proportional to the period's duration, before the floor.
    pub raw_width_px: f64,
    /// True when the minimum width floor was applied.
    pub widened: bool,
}

impl Geometry {
    pub fn right_px(&self) -> f64 {
        self.left_px + self.width_px
    }

    /// Open-interval pixel intersection; touching edges do not intersect.
    pub fn intersects(&self, other: &Geometry) -> bool {
        self.left_px < other.right_px() && other.left_px < self.right_px()
    }
}

/// A period with its row and pixel geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedPeriod {
    pub period: Period,
    pub geometry: Geometry,
    /// Zero-based row within the significance tier.
    pub row_index: usize,
    /// The rendered box intersects another box in the same row. Only possible
    /// when the width floor widened one of them.
    pub visual_overlap: bool,
}

/// Rows of positioned periods for one significance tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierLayout {
    pub significance: Significance,
    pub rows: Vec<Vec<PositionedPeriod>>,
}

impl TierLayout {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn period_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Complete layout handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    /// `None` when there was nothing to lay out.
    pub axis: Option<AxisBounds>,
    pub view_mode: ViewMode,
    /// Tiers in display order, most significant first.
    pub tiers: Vec<TierLayout>,
    pub total_periods: usize,
    pub visual_overlap_possible: bool,
}

impl TimelineLayout {
    /// Layout for an empty period set.
    pub fn empty(view_mode: ViewMode) -> Self {
        Self {
            axis: None,
            view_mode,
            tiers: vec![],
            total_periods: 0,
            visual_overlap_possible: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.axis.is_none()
    }

    pub fn tier(&self, significance: &Significance) -> Option<&TierLayout> {
        self.tiers.iter().find(|t| &t.significance == significance)
    }

    /// Every positioned period, tier by tier and row by row.
    pub fn positioned(&self) -> impl Iterator<Item = &PositionedPeriod> {
        self.tiers
            .iter()
            .flat_map(|tier| tier.rows.iter().flatten())
    }
}
