//! Airwatch - Air quality monitoring with per-site forecasts and an assistant
//!
//! This library provides the core functionality for evaluating pollutant
//! forecast trends, matching free-text questions to assistant topics, and
//! rendering answers against the currently selected monitoring site.

pub mod api;
pub mod config;
pub mod delta;
pub mod error;
pub mod feed;
pub mod intent;
pub mod models;
pub mod responder;
pub mod session;
pub mod web;

// Re-export core types for public API
pub use config::AirwatchConfig;
pub use delta::{ForecastDelta, ForecastSummary, TrendDirection, evaluate_delta};
pub use error::AirwatchError;
pub use feed::SiteFeed;
pub use intent::{Topic, match_intent};
pub use models::{Location, MarkerSeverity, SiteRecord};
pub use responder::generate;
pub use session::{ChatMessage, ConversationSession, Sender};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AirwatchError>;
