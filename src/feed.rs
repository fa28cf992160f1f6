//! Site feed loading
//!
//! The feed is a read-only collection of [`SiteRecord`]s supplied from
//! outside the core — here a JSON array on disk, matching the dashboard's
//! data file. Records are held as immutable snapshots; the feed only reads.

use crate::models::SiteRecord;
use crate::{AirwatchError, Result};
use std::path::Path;
use tracing::info;

/// Read-only collection of monitoring sites
#[derive(Debug, Clone)]
pub struct SiteFeed {
    sites: Vec<SiteRecord>,
}

impl SiteFeed {
    /// Wrap an already-loaded set of records
    #[must_use]
    pub fn from_records(sites: Vec<SiteRecord>) -> Self {
        Self { sites }
    }

    /// Load the feed from a JSON array of site records
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let sites: Vec<SiteRecord> = serde_json::from_str(&raw).map_err(|e| {
            AirwatchError::feed(format!("failed to parse {}: {e}", path.display()))
        })?;

        info!("Loaded {} monitoring sites from {}", sites.len(), path.display());
        Ok(Self::from_records(sites))
    }

    /// All sites in feed order
    #[must_use]
    pub fn sites(&self) -> &[SiteRecord] {
        &self.sites
    }

    /// Look up a site by id
    #[must_use]
    pub fn by_id(&self, id: u32) -> Option<&SiteRecord> {
        self.sites.iter().find(|site| site.id == id)
    }

    /// Number of sites in the feed
    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
