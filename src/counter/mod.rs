// Counter store module
// Owns the visit total and its persisted record

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::logger;

/// On-disk representation of the counter.
/// Every increment writes a full replacement of this object.
#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub struct VisitRecord {
    pub total: u64,
}

/// Owns the in-memory visit total and the persisted record location.
///
/// The write lock covers the whole read-modify-write-persist sequence,
/// so two concurrent increments cannot observe the same pre-increment
/// value regardless of how many worker threads serve requests.
pub struct CounterStore {
    record_path: PathBuf,
    total: RwLock<u64>,
}

impl CounterStore {
    /// Load the persisted record from `record_path`.
    ///
    /// A missing, unreadable, or malformed record silently initializes
    /// the total to zero; no failure here is surfaced to callers. Runs
    /// once during startup, before the listener accepts requests.
    pub fn load(record_path: impl Into<PathBuf>) -> Self {
        let record_path = record_path.into();
        let total = match Self::load_record(&record_path) {
            Some(total) => {
                logger::log_counter_loaded(&record_path, total);
                total
            }
            None => 0,
        };

        Self {
            record_path,
            total: RwLock::new(total),
        }
    }

    /// Read and parse the record file
    fn load_record(path: &Path) -> Option<u64> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<VisitRecord>(&content) {
                Ok(record) => Some(record.total),
                Err(e) => {
                    logger::log_warning(&format!(
                        "Malformed visit record {}: {e}. Starting from 0.",
                        path.display()
                    ));
                    None
                }
            },
            Err(e) => {
                logger::log_warning(&format!(
                    "Failed to read visit record {}: {e}. Starting from 0.",
                    path.display()
                ));
                None
            }
        }
    }

    /// Add one to the total, persist the new record, and return the new
    /// total.
    ///
    /// Persistence is write-through and best-effort: a failed write is
    /// logged and swallowed, and the in-memory total is not rolled
    /// back. Durable storage may lag behind memory after a crash, never
    /// the other way around.
    pub async fn increment(&self) -> u64 {
        let mut total = self.total.write().await;
        *total += 1;

        if let Err(e) = self.persist(VisitRecord { total: *total }) {
            logger::log_persist_error(&self.record_path, &e);
        }

        *total
    }

    /// Write the record as a full replacement
    fn persist(&self, record: VisitRecord) -> Result<(), String> {
        let content = serde_json::to_string(&record)
            .map_err(|e| format!("Failed to serialize visit record: {e}"))?;

        fs::write(&self.record_path, content)
            .map_err(|e| format!("Failed to write visit record: {e}"))
    }

    /// Current in-memory total; never touches durable storage
    pub async fn current(&self) -> u64 {
        *self.total.read().await
    }
}
