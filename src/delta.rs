//! Forecast Delta Evaluation Module
//!
//! This module compares current pollutant concentrations against their
//! 24h-ahead projections. The same evaluation backs both the assistant's
//! forecast answers and the dashboard's short-term forecast summary.

use crate::models::SiteRecord;
use serde::{Deserialize, Serialize};

/// NO₂ forecast level above which the summary carries a warning, in µg/m³
pub const NO2_ALERT_THRESHOLD: f32 = 100.0;
/// O₃ forecast level above which the summary carries a warning, in µg/m³
pub const O3_ALERT_THRESHOLD: f32 = 80.0;

/// Trend direction between a current value and its forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increase,
    Decrease,
    Unchanged,
}

impl TrendDirection {
    /// The direction word used in rendered text
    #[must_use]
    pub fn word(&self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Unchanged => "unchanged",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.word())
    }
}

/// Result of comparing a current concentration with its forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastDelta {
    /// Which way the concentration is heading
    pub direction: TrendDirection,
    /// Magnitude of the change relative to the current value, in percent
    pub percent_change: f32,
}

/// Compare a current concentration with its 24h-ahead forecast.
///
/// `percent_change` is always non-negative. A current value of zero yields
/// a percent change of zero rather than dividing by zero.
#[must_use]
pub fn evaluate_delta(current: f32, forecast: f32) -> ForecastDelta {
    let direction = if forecast < current {
        TrendDirection::Decrease
    } else if forecast > current {
        TrendDirection::Increase
    } else {
        TrendDirection::Unchanged
    };

    let percent_change = if current == 0.0 {
        0.0
    } else {
        ((forecast - current) / current * 100.0).abs()
    };

    ForecastDelta {
        direction,
        percent_change,
    }
}

/// Rendered outlook for a single pollutant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollutantOutlook {
    /// Current concentration in µg/m³
    pub current: f32,
    /// Forecast concentration in µg/m³
    pub forecast: f32,
    /// Evaluated trend between the two
    pub delta: ForecastDelta,
    /// Prose summary sentence
    pub summary: String,
    /// Warning line, present when the forecast exceeds the alert threshold
    pub alert: Option<String>,
}

impl PollutantOutlook {
    fn new(current: f32, forecast: f32, alert_threshold: f32, alert_text: &str) -> Self {
        let delta = evaluate_delta(current, forecast);
        let summary = format!(
            "Current concentration of {current:.1} µg/m³ is expected to {} to {forecast:.1} µg/m³ within the next 24 hours.",
            expected_word(&delta),
        );
        let alert = (forecast > alert_threshold).then(|| alert_text.to_string());

        Self {
            current,
            forecast,
            delta,
            summary,
            alert,
        }
    }

    /// Compact comparison card line, e.g. `95.3 → 88.1 (↓ 7.6%)`
    #[must_use]
    pub fn comparison_line(&self) -> String {
        let arrow = match self.delta.direction {
            TrendDirection::Decrease => "↓",
            _ => "↑",
        };
        format!(
            "{:.1} → {:.1} ({arrow} {:.1}%)",
            self.current, self.forecast, self.delta.percent_change
        )
    }
}

/// Short-term forecast summary for a site, one outlook per pollutant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub no2: PollutantOutlook,
    pub o3: PollutantOutlook,
}

impl ForecastSummary {
    /// Build the summary shown on a site's dashboard panel
    #[must_use]
    pub fn for_site(site: &SiteRecord) -> Self {
        Self {
            no2: PollutantOutlook::new(
                site.no2_concentration,
                site.forecast_no2,
                NO2_ALERT_THRESHOLD,
                "High NO₂ levels expected. Limit outdoor activities.",
            ),
            o3: PollutantOutlook::new(
                site.o3_concentration,
                site.forecast_o3,
                O3_ALERT_THRESHOLD,
                "Elevated O₃ levels expected during peak sunlight hours.",
            ),
        }
    }
}

// Equal values fall on the "increase" side of the wording, matching the
// rendered forecast cards.
pub(crate) fn expected_word(delta: &ForecastDelta) -> &'static str {
    match delta.direction {
        TrendDirection::Decrease => "decrease",
        _ => "increase",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn site_with_forecasts(no2: f32, f_no2: f32, o3: f32, f_o3: f32) -> SiteRecord {
        SiteRecord {
            id: 7,
            site_name: "Dwarka".to_string(),
            location: crate::models::Location {
                lat: 28.5921,
                lng: 77.046,
            },
            timestamp: Utc::now(),
            no2_concentration: no2,
            o3_concentration: o3,
            forecast_no2: f_no2,
            forecast_o3: f_o3,
            temperature: 29.0,
            humidity: 52.0,
            wind_speed: 3.1,
            wind_direction: "W".to_string(),
            pressure: 1010.0,
            traffic_intensity: 40,
            emission_index: 3.2,
            air_quality_index: 120,
            aqi_category: "Moderate".to_string(),
        }
    }

    #[rstest]
    #[case(100.0, 80.0, TrendDirection::Decrease, 20.0)]
    #[case(80.0, 100.0, TrendDirection::Increase, 25.0)]
    #[case(50.0, 50.0, TrendDirection::Unchanged, 0.0)]
    #[case(40.0, 30.0, TrendDirection::Decrease, 25.0)]
    fn test_evaluate_delta_directions(
        #[case] current: f32,
        #[case] forecast: f32,
        #[case] direction: TrendDirection,
        #[case] percent: f32,
    ) {
        let delta = evaluate_delta(current, forecast);
        assert_eq!(delta.direction, direction);
        assert!((delta.percent_change - percent).abs() < 1e-4);
    }

    #[test]
    fn test_evaluate_delta_zero_current_is_guarded() {
        let delta = evaluate_delta(0.0, 55.0);
        assert_eq!(delta.direction, TrendDirection::Increase);
        assert_eq!(delta.percent_change, 0.0);
        assert!(!delta.percent_change.is_nan());
    }

    #[test]
    fn test_percent_change_is_never_negative() {
        for (current, forecast) in [(10.0, 5.0), (5.0, 10.0), (3.0, 3.0), (0.0, 1.0)] {
            assert!(evaluate_delta(current, forecast).percent_change >= 0.0);
        }
    }

    #[test]
    fn test_direction_words() {
        assert_eq!(TrendDirection::Increase.to_string(), "increase");
        assert_eq!(TrendDirection::Decrease.to_string(), "decrease");
        assert_eq!(TrendDirection::Unchanged.to_string(), "unchanged");
    }

    #[test]
    fn test_summary_sentences() {
        let site = site_with_forecasts(95.3, 88.1, 42.1, 47.6);
        let summary = ForecastSummary::for_site(&site);

        assert_eq!(
            summary.no2.summary,
            "Current concentration of 95.3 µg/m³ is expected to decrease to 88.1 µg/m³ within the next 24 hours."
        );
        assert_eq!(
            summary.o3.summary,
            "Current concentration of 42.1 µg/m³ is expected to increase to 47.6 µg/m³ within the next 24 hours."
        );
    }

    #[test]
    fn test_comparison_line() {
        let site = site_with_forecasts(100.0, 80.0, 42.1, 47.6);
        let summary = ForecastSummary::for_site(&site);
        assert_eq!(summary.no2.comparison_line(), "100.0 → 80.0 (↓ 20.0%)");
    }

    #[rstest]
    #[case(100.0, false)]
    #[case(100.1, true)]
    #[case(130.0, true)]
    fn test_no2_alert_threshold(#[case] forecast_no2: f32, #[case] fires: bool) {
        let site = site_with_forecasts(90.0, forecast_no2, 40.0, 40.0);
        let summary = ForecastSummary::for_site(&site);
        assert_eq!(summary.no2.alert.is_some(), fires);
        if fires {
            assert!(summary.no2.alert.unwrap().contains("High NO₂"));
        }
    }

    #[rstest]
    #[case(80.0, false)]
    #[case(80.5, true)]
    fn test_o3_alert_threshold(#[case] forecast_o3: f32, #[case] fires: bool) {
        let site = site_with_forecasts(90.0, 90.0, 70.0, forecast_o3);
        let summary = ForecastSummary::for_site(&site);
        assert_eq!(summary.o3.alert.is_some(), fires);
    }
}
