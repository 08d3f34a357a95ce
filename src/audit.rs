use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub at: DateTime<Utc>,
    pub action: String,
    pub entity: Option<String>,
    pub detail: Option<Value>,
}

/// Bounded in-memory mutation trail shared by the stores. Recording never
/// fails the operation being recorded.
#[derive(Clone)]
pub struct AuditLog {
    entries: Arc<Mutex<VecDeque<AuditEntry>>>,
    capacity: usize,
}

impl AuditLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&self, action: &str, entity: Option<&str>, detail: Option<Value>) {
        tracing::debug!(action, entity = entity.unwrap_or("-"), "audit");
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(AuditEntry {
            at: Utc::now(),
            action: action.to_string(),
            entity: entity.map(str::to_string),
            detail,
        });
    }

    /// Snapshot of the recorded entries, oldest first.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new(256)
    }
}
