//! # Calculation History
//!
//! Append-only record of accepted calculations. The history belongs to the
//! host application; the engine never reads it. Entries are kept newest
//! first.
//!
//! ## Structure
//!
//! ```text
//! CalculationHistory
//! ├── meta: HistoryMetadata (schema version, timestamps)
//! └── entries: Vec<HistoryEntry> (newest first)
//!     ├── id, timestamp, job_id, part_name
//!     ├── parameters: JobParameters
//!     └── breakdown: TimeBreakdown
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gundrill_core::calculations::{compute_standard_time, JobParameters};
//! use gundrill_core::history::CalculationHistory;
//!
//! let job = JobParameters::new("13CR", 0.299, 10.0, 0.8);
//! let breakdown = compute_standard_time(&job).unwrap();
//!
//! let mut history = CalculationHistory::new();
//! history.record("J-1001", "Mandrel", job, breakdown);
//! assert_eq!(history.len(), 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{JobParameters, TimeBreakdown};

/// Current schema version for history files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root history container, serialized as one JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationHistory {
    pub meta: HistoryMetadata,

    /// Archived calculations, newest first
    pub entries: Vec<HistoryEntry>,
}

impl CalculationHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        let now = Utc::now();
        CalculationHistory {
            meta: HistoryMetadata {
                version: SCHEMA_VERSION.to_string(),
                created: now,
                modified: now,
            },
            entries: Vec::new(),
        }
    }

    /// Archive a calculation at the front of the list.
    ///
    /// Returns the id assigned to the entry.
    pub fn record(
        &mut self,
        job_id: impl Into<String>,
        part_name: impl Into<String>,
        parameters: JobParameters,
        breakdown: TimeBreakdown,
    ) -> Uuid {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            job_id: job_id.into(),
            part_name: part_name.into(),
            parameters,
            breakdown,
        };
        let id = entry.id;
        self.entries.insert(0, entry);
        self.touch();
        id
    }

    /// Get an entry by id.
    pub fn get(&self, id: &Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Most recent entries first, up to `limit`
    pub fn latest(&self, limit: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().take(limit)
    }

    /// Entries for one job id
    pub fn for_job<'a>(&'a self, job_id: &'a str) -> impl Iterator<Item = &'a HistoryEntry> + 'a {
        self.entries.iter().filter(move |e| e.job_id == job_id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CalculationHistory {
    fn default() -> Self {
        CalculationHistory::new()
    }
}

/// History metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// When the history was created
    pub created: DateTime<Utc>,

    /// When the last entry was added
    pub modified: DateTime<Utc>,
}

/// One archived calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub job_id: String,
    #[serde(default)]
    pub part_name: String,
    pub parameters: JobParameters,
    pub breakdown: TimeBreakdown,
}
