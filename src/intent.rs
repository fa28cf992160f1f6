//! Intent matching for the air quality assistant
//!
//! Free-text questions are mapped onto a closed set of topics with plain
//! substring rules over a fixed vocabulary. Topics are declared as an ordered
//! list and the first match wins, so tie-breaking is explicit rather than an
//! accident of map iteration order.

use serde::{Deserialize, Serialize};

/// Subjects the assistant can answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    AboutNo2,
    AboutO3,
    AqiExplanation,
    CurrentLevels,
    Forecast,
    HealthEffects,
    ContributingFactors,
    SafetyRecommendations,
    Unknown,
}

/// Matching vocabulary for one topic
#[derive(Debug, Clone, Copy)]
pub struct TopicDefinition {
    pub topic: Topic,
    /// Primary phrase, matched in either direction
    pub phrase: &'static str,
    /// Related terms matched inside the input
    pub related: &'static [&'static str],
}

/// Topic vocabulary in declaration order; earlier entries win ties.
pub const TOPIC_DEFINITIONS: &[TopicDefinition] = &[
    TopicDefinition {
        topic: Topic::AboutNo2,
        phrase: "what is no2",
        related: &["pollution", "health", "emissions"],
    },
    TopicDefinition {
        topic: Topic::AboutO3,
        phrase: "what is o3",
        related: &["pollution", "health", "weather"],
    },
    TopicDefinition {
        topic: Topic::AqiExplanation,
        phrase: "how is aqi calculated",
        related: &["aqi", "calculation"],
    },
    TopicDefinition {
        topic: Topic::CurrentLevels,
        phrase: "current levels",
        related: &["current", "data"],
    },
    TopicDefinition {
        topic: Topic::Forecast,
        phrase: "forecast",
        related: &["forecast", "prediction"],
    },
    TopicDefinition {
        topic: Topic::HealthEffects,
        phrase: "health effects",
        related: &["health", "safety"],
    },
    TopicDefinition {
        topic: Topic::ContributingFactors,
        phrase: "what affects air quality",
        related: &["factors", "causes"],
    },
    TopicDefinition {
        topic: Topic::SafetyRecommendations,
        phrase: "safety recommendations",
        related: &["health", "safety", "recommendations"],
    },
];

/// Match free-text input to a topic.
///
/// The input is trimmed and lowercased, then checked against each topic in
/// declaration order: a topic matches when the input contains its primary
/// phrase, the phrase contains the input (short or partial queries), or the
/// input contains any related term. Empty input resolves to
/// [`Topic::Unknown`]; this function never fails.
#[must_use]
pub fn match_intent(input: &str) -> Topic {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return Topic::Unknown;
    }

    for definition in TOPIC_DEFINITIONS {
        if normalized.contains(definition.phrase) || definition.phrase.contains(&normalized) {
            return definition.topic;
        }
        if definition
            .related
            .iter()
            .any(|term| normalized.contains(term))
        {
            return definition.topic;
        }
    }

    Topic::Unknown
}
