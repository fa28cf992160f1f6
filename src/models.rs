//! Data models for air quality monitoring sites
//!
//! This module contains the data structures used for representing per-site
//! measurements and forecasts, matching the wire format of the site feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic position of a monitoring site
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

/// One monitoring site with its latest measurements and 24h-ahead forecast.
///
/// Records are immutable snapshots supplied by the site feed; nothing in this
/// crate mutates one after loading. Numeric ranges are the feed's
/// responsibility and are passed through verbatim.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SiteRecord {
    /// Unique site identifier
    pub id: u32,
    /// Human-readable site name
    pub site_name: String,
    /// Site coordinates
    pub location: Location,
    /// Timestamp of the last measurement
    pub timestamp: DateTime<Utc>,
    /// NO₂ concentration in µg/m³
    pub no2_concentration: f32,
    /// O₃ concentration in µg/m³
    pub o3_concentration: f32,
    /// NO₂ concentration projected 24 hours ahead, in µg/m³
    pub forecast_no2: f32,
    /// O₃ concentration projected 24 hours ahead, in µg/m³
    pub forecast_o3: f32,
    /// Temperature in Celsius
    pub temperature: f32,
    /// Relative humidity percentage (0-100)
    pub humidity: f32,
    /// Wind speed in m/s
    pub wind_speed: f32,
    /// Compass label for the prevailing wind direction (e.g. "NW")
    pub wind_direction: String,
    /// Atmospheric pressure in hPa
    pub pressure: f32,
    /// Traffic intensity on a 0-100 scale
    pub traffic_intensity: u8,
    /// Emission index for the surrounding area
    pub emission_index: f32,
    /// Air Quality Index (typically 0-500)
    pub air_quality_index: u16,
    /// AQI category label from the feed's classification
    /// (e.g. "Good", "Moderate", "Poor"); never computed here
    pub aqi_category: String,
}

/// Map marker severity derived from the feed's AQI category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerSeverity {
    Good,
    Moderate,
    Poor,
}

impl MarkerSeverity {
    /// Classify a category label by substring, so "Very Poor" still reads as poor
    #[must_use]
    pub fn from_category(category: &str) -> Self {
        if category.contains("Poor") {
            Self::Poor
        } else if category.contains("Moderate") {
            Self::Moderate
        } else {
            Self::Good
        }
    }

    /// Map marker color for this severity
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "#22c55e",
            Self::Moderate => "#eab308",
            Self::Poor => "#ef4444",
        }
    }
}

impl SiteRecord {
    /// Marker severity for this site's category label
    #[must_use]
    pub fn marker_severity(&self) -> MarkerSeverity {
        MarkerSeverity::from_category(&self.aqi_category)
    }

    /// Format a pollutant concentration with its unit
    #[must_use]
    pub fn format_concentration(value: f32) -> String {
        format!("{value:.1} µg/m³")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_site() -> SiteRecord {
        SiteRecord {
            id: 1,
            site_name: "Anand Vihar".to_string(),
            location: Location {
                lat: 28.6469,
                lng: 77.3152,
            },
            timestamp: Utc::now(),
            no2_concentration: 95.3,
            o3_concentration: 42.1,
            forecast_no2: 88.1,
            forecast_o3: 47.6,
            temperature: 31.2,
            humidity: 48.0,
            wind_speed: 2.4,
            wind_direction: "NW".to_string(),
            pressure: 1008.0,
            traffic_intensity: 82,
            emission_index: 7.4,
            air_quality_index: 210,
            aqi_category: "Poor".to_string(),
        }
    }

    #[test]
    fn test_marker_severity_from_category() {
        assert_eq!(MarkerSeverity::from_category("Good"), MarkerSeverity::Good);
        assert_eq!(
            MarkerSeverity::from_category("Moderate"),
            MarkerSeverity::Moderate
        );
        assert_eq!(MarkerSeverity::from_category("Poor"), MarkerSeverity::Poor);
        assert_eq!(
            MarkerSeverity::from_category("Very Poor"),
            MarkerSeverity::Poor
        );
        assert_eq!(
            MarkerSeverity::from_category("Satisfactory"),
            MarkerSeverity::Good
        );
    }

    #[test]
    fn test_marker_colors() {
        assert_eq!(MarkerSeverity::Good.color(), "#22c55e");
        assert_eq!(MarkerSeverity::Moderate.color(), "#eab308");
        assert_eq!(MarkerSeverity::Poor.color(), "#ef4444");
    }

    #[test]
    fn test_site_record_roundtrip_field_names() {
        let site = sample_site();
        let json = serde_json::to_value(&site).unwrap();
        assert!(json.get("site_name").is_some());
        assert!(json.get("no2_concentration").is_some());
        assert!(json.get("forecast_o3").is_some());
        assert!(json.get("aqi_category").is_some());
        assert_eq!(json["location"]["lat"], 28.6469);

        let back: SiteRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, site);
    }

    #[test]
    fn test_format_concentration() {
        assert_eq!(SiteRecord::format_concentration(95.34), "95.3 µg/m³");
        assert_eq!(SiteRecord::format_concentration(42.0), "42.0 µg/m³");
    }
}
