//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The layout response reuses [`crate::api::TimelineLayout`] directly.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    AxisBounds, Geometry, MonthTick, PositionedPeriod, TierLayout, TimelineLayout, ViewMode,
};
use crate::config::LayoutSettings;
use crate::error::TimelineResult;
use crate::models::{parse_calendar_date, DisplayZone, Payload, Period, PeriodId, Significance};
use crate::services::packer::PackingOrder;
use crate::services::timeline::initial_view_mode;

/// A period as sent by the data-fetch layer.
///
/// Dates are strings so that both `YYYY-MM-DD` and RFC 3339 timestamps are
/// accepted; they are resolved to calendar dates in the display zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodDto {
    pub id: String,
    pub start_date: String,
    pub end_date: String,
    pub significance: Significance,
    #[serde(default)]
    pub label: String,
    #[serde(flatten)]
    pub payload: Payload,
}

impl PeriodDto {
    /// Convert into a validated [`Period`].
    pub fn into_period(self, zone: DisplayZone) -> TimelineResult<Period> {
        let period = Period {
            start_date: parse_calendar_date(&self.start_date, zone)?,
            end_date: parse_calendar_date(&self.end_date, zone)?,
            id: PeriodId::new(self.id),
            significance: self.significance,
            label: self.label,
            payload: self.payload,
        };
        period.validate()?;
        Ok(period)
    }
}

/// Request body for the layout endpoint.
///
/// Every setting is optional and overrides the server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub periods: Vec<PeriodDto>,
    /// Keep only periods touching this calendar year.
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub axis_width_px: Option<f64>,
    #[serde(default)]
    pub min_width_px: Option<f64>,
    #[serde(default)]
    pub utc_offset_minutes: Option<DisplayZone>,
    #[serde(default)]
    pub packing_order: Option<PackingOrder>,
    #[serde(default)]
    pub view_mode: Option<ViewMode>,
    /// Client viewport width, used to pick the view mode when none is given.
    #[serde(default)]
    pub viewport_width_px: Option<f64>,
}

impl LayoutRequest {
    /// Apply the request overrides on top of `base` and validate the result.
    pub fn resolve_settings(&self, base: &LayoutSettings) -> TimelineResult<LayoutSettings> {
        let mut settings = base.clone();
        if let Some(width) = self.axis_width_px {
            settings.axis_width_px = width;
        }
        if let Some(width) = self.min_width_px {
            settings.min_width_px = width;
        }
        if let Some(zone) = self.utc_offset_minutes {
            settings.zone = zone;
        }
        if let Some(order) = self.packing_order {
            settings.packing_order = order;
        }
        settings.view_mode = match (self.view_mode, self.viewport_width_px) {
            (Some(mode), _) => mode,
            (None, Some(viewport)) => initial_view_mode(viewport, settings.list_breakpoint_px),
            (None, None) => settings.view_mode,
        };
        settings.validate()?;
        Ok(settings)
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(start: &str, end: &str) -> PeriodDto {
        PeriodDto {
            id: "p1".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            significance: Significance::High,
            label: "Saturn→Moon".to_string(),
            payload: Payload::new(),
        }
    }

    #[test]
    fn test_into_period_plain_dates() {
        let period = dto("2024-01-01", "2024-01-10")
            .into_period(DisplayZone::utc())
            .unwrap();
        assert_eq!(period.start_date.to_string(), "2024-01-01");
        assert_eq!(period.end_date.to_string(), "2024-01-10");
    }

    #[test]
    fn test_into_period_rejects_inverted() {
        let err = dto("2024-01-10", "2024-01-01")
            .into_period(DisplayZone::utc())
            .unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_into_period_rejects_bad_date() {
        assert!(dto("yesterday", "2024-01-01")
            .into_period(DisplayZone::utc())
            .is_err());
    }

    #[test]
    fn test_resolve_settings_viewport() {
        let request = LayoutRequest {
            viewport_width_px: Some(390.0),
            ..LayoutRequest::default()
        };
        let settings = request.resolve_settings(&LayoutSettings::default()).unwrap();
        assert_eq!(settings.view_mode, ViewMode::List);
    }

    #[test]
    fn test_resolve_settings_explicit_mode_wins() {
        let request = LayoutRequest {
            viewport_width_px: Some(390.0),
            view_mode: Some(ViewMode::Timeline),
            ..LayoutRequest::default()
        };
        let settings = request.resolve_settings(&LayoutSettings::default()).unwrap();
        assert_eq!(settings.view_mode, ViewMode::Timeline);
    }

    #[test]
    fn test_resolve_settings_rejects_bad_width() {
        let request = LayoutRequest {
            axis_width_px: Some(-5.0),
            ..LayoutRequest::default()
        };
        assert!(request.resolve_settings(&LayoutSettings::default()).is_err());
    }
}
