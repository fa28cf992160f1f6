//! Response generation for the air quality assistant
//!
//! Each topic owns a template; context-dependent topics interpolate live
//! values from the selected site through an explicit formatting function, so
//! the fields a template needs are enumerable and testable in isolation.

use crate::delta::{self, evaluate_delta};
use crate::intent::Topic;
use crate::models::SiteRecord;

/// AQI above which safety guidance switches to the poor-air template.
/// Deliberately independent of the feed's `aqi_category` label.
pub const AQI_SAFETY_THRESHOLD: u16 = 150;

/// Starter questions surfaced by the presentation layer on a fresh session
pub const QUICK_QUESTIONS: &[&str] = &[
    "What is NO2?",
    "Current levels",
    "Forecast",
    "Health effects",
    "Safety recommendations",
];

const ABOUT_NO2: &str = "NO₂ (Nitrogen Dioxide) is a harmful air pollutant primarily produced by \
     vehicle emissions and industrial activities. Long-term exposure can cause respiratory \
     problems.";

const ABOUT_O3: &str = "O₃ (Ozone) at ground level is a harmful air pollutant formed by chemical \
     reactions between NOx and VOCs in sunlight. It can trigger asthma and reduce lung function.";

const AQI_EXPLANATION: &str = "Air Quality Index (AQI) is calculated based on concentrations of \
     pollutants like NO₂, O₃, PM2.5, PM10, CO, and SO₂. Higher values indicate worse air \
     quality. The scale typically ranges from 0-500.";

const HEALTH_EFFECTS: &str = "High levels of NO₂ and O₃ can cause respiratory issues, aggravate \
     asthma, reduce lung function, and increase susceptibility to respiratory infections. \
     Vulnerable groups include children, elderly, and people with pre-existing conditions.";

const CONTRIBUTING_FACTORS: &str = "Air quality is affected by traffic emissions, industrial \
     activities, weather conditions (temperature, wind, humidity), seasonal variations, and \
     geographic factors. High traffic intensity and low wind speeds typically worsen air \
     quality.";

const FALLBACK: &str = "I'm not sure about that. You can ask me about NO₂, O₃, AQI calculation, \
     current levels, forecast, health effects, factors affecting air quality, or safety \
     recommendations.";

const SELECT_SITE_FOR_LEVELS: &str =
    "Please select a monitoring site from the map to view current pollution levels.";
const SELECT_SITE_FOR_FORECAST: &str = "Please select a monitoring site to view forecast data.";
const SELECT_SITE_FOR_SAFETY: &str =
    "Please select a monitoring site to get safety recommendations.";

const SAFETY_POOR: &str = "Air quality is currently poor. Recommendations: Limit outdoor \
     activities, wear N95 masks outdoors, keep windows closed, use air purifiers indoors, and \
     stay hydrated.";

const SAFETY_ACCEPTABLE: &str = "Current air quality levels are acceptable. However, sensitive \
     groups should still monitor conditions and limit prolonged outdoor exertion during peak \
     pollution hours.";

/// Produce the assistant's answer for a matched topic.
///
/// Static topics ignore `context`. Context-dependent topics fall back to a
/// site-selection prompt when no site is selected. Pure given its inputs.
#[must_use]
pub fn generate(topic: Topic, context: Option<&SiteRecord>) -> String {
    match topic {
        Topic::AboutNo2 => ABOUT_NO2.to_string(),
        Topic::AboutO3 => ABOUT_O3.to_string(),
        Topic::AqiExplanation => AQI_EXPLANATION.to_string(),
        Topic::HealthEffects => HEALTH_EFFECTS.to_string(),
        Topic::ContributingFactors => CONTRIBUTING_FACTORS.to_string(),
        Topic::Unknown => FALLBACK.to_string(),
        Topic::CurrentLevels => context
            .map_or_else(|| SELECT_SITE_FOR_LEVELS.to_string(), current_levels_reply),
        Topic::Forecast => {
            context.map_or_else(|| SELECT_SITE_FOR_FORECAST.to_string(), forecast_reply)
        }
        Topic::SafetyRecommendations => {
            context.map_or_else(|| SELECT_SITE_FOR_SAFETY.to_string(), safety_reply)
        }
    }
}

/// Current readings, interpolating name, both pollutants, AQI and category
fn current_levels_reply(site: &SiteRecord) -> String {
    format!(
        "At {}: NO₂ is {:.1} µg/m³, O₃ is {:.1} µg/m³, and AQI is {} ({}).",
        site.site_name,
        site.no2_concentration,
        site.o3_concentration,
        site.air_quality_index,
        site.aqi_category
    )
}

/// 24h outlook, one delta evaluation per pollutant
fn forecast_reply(site: &SiteRecord) -> String {
    let no2 = evaluate_delta(site.no2_concentration, site.forecast_no2);
    let o3 = evaluate_delta(site.o3_concentration, site.forecast_o3);
    format!(
        "24-hour forecast for {}: NO₂ expected to {} to {:.1} µg/m³, O₃ expected to {} to {:.1} µg/m³.",
        site.site_name,
        delta::expected_word(&no2),
        site.forecast_no2,
        delta::expected_word(&o3),
        site.forecast_o3
    )
}

/// Guidance keyed on the fixed AQI threshold, not the category label
fn safety_reply(site: &SiteRecord) -> String {
    if site.air_quality_index > AQI_SAFETY_THRESHOLD {
        SAFETY_POOR.to_string()
    } else {
        SAFETY_ACCEPTABLE.to_string()
    }
}
