//! Audit log
//!
//! Typed, timestamped entries appended as JSON lines to `audit.log` in the
//! data directory. Entries are never read back by the program; the file is
//! for the operator. Append failures are reported and swallowed - auditing
//! must never take the desk down.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Audit action types (enum, not free text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    // === Authentication ===
    LoginSuccess,
    LoginFailed,

    // === Orders ===
    OrderCreated,
    BalanceComputed,

    // === Catalog ===
    MenuEdited,
    ProductAdded,
    PurchaseRequested,

    // === Accounts ===
    EmployeeRegistered,
    EmployeeAccountEdited,
}

/// One immutable audit record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    pub action: AuditAction,
    pub detail: String,
}

#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("audit.log"),
        }
    }

    /// Append one entry. Failures are logged, not propagated.
    pub fn record(&self, actor: &str, action: AuditAction, detail: impl Into<String>) {
        let entry = AuditEntry {
            timestamp: Utc::now(),
            actor: actor.to_string(),
            action,
            detail: detail.into(),
        };
        if let Err(e) = self.append(&entry) {
            tracing::warn!(error = %e, action = ?action, "failed to append audit entry");
        }
    }

    fn append(&self, entry: &AuditEntry) -> std::io::Result<()> {
        let mut line = serde_json::to_string(entry).map_err(std::io::Error::other)?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn entries_append_as_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::new(dir.path());

        log.record("alice", AuditAction::LoginSuccess, "gate passed");
        log.record("alice", AuditAction::MenuEdited, "added Borscht");

        let text = fs::read_to_string(dir.path().join("audit.log")).unwrap();
        let entries: Vec<AuditEntry> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, AuditAction::LoginSuccess);
        assert_eq!(entries[1].actor, "alice");
        assert_eq!(entries[1].detail, "added Borscht");
    }

    #[test]
    fn append_failure_is_swallowed() {
        // Point at a directory path so the open fails.
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("audit.log")).unwrap();
        let log = AuditLog::new(dir.path());

        // Must not panic.
        log.record("alice", AuditAction::LoginFailed, "bad password");
    }
}
