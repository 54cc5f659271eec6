//! Employee account directory and access gate
//!
//! Accounts are a username -> password map compared in clear text (legacy
//! behavior, deliberately no hashing). Registration rejects a taken
//! username; direct edits overwrite unconditionally. Persistence of the
//! directory goes through the state layer.

use shared::models::EmployeeAccount;
use std::collections::BTreeMap;
use thiserror::Error;

/// Account directory errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("username already taken: {0}")]
    DuplicateUsername(String),
}

pub type AccountResult<T> = Result<T, AccountError>;

#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: BTreeMap<String, String>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loaded records; a later record with the same username
    /// overwrites the earlier one, matching the legacy file semantics.
    pub fn from_records(records: Vec<EmployeeAccount>) -> Self {
        let mut directory = Self::new();
        for record in records {
            directory.accounts.insert(record.username, record.password);
        }
        directory
    }

    pub fn is_username_taken(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    /// Register a new employee. Fails without mutating if the username is
    /// taken.
    pub fn register(&mut self, username: &str, password: &str) -> AccountResult<()> {
        if self.is_username_taken(username) {
            return Err(AccountError::DuplicateUsername(username.to_string()));
        }
        self.accounts.insert(username.to_string(), password.to_string());
        Ok(())
    }

    /// Direct edit: insert or overwrite, bypassing the uniqueness check.
    pub fn edit(&mut self, username: &str, password: &str) {
        self.accounts.insert(username.to_string(), password.to_string());
    }

    /// Exact, case-sensitive credential check. No lockout, no attempt
    /// counting.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let ok = self.accounts.get(username).is_some_and(|p| p == password);
        if !ok {
            tracing::warn!(username, "authentication failed");
        }
        ok
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Snapshot in key order, the iteration order used for persisting.
    pub fn to_records(&self) -> Vec<EmployeeAccount> {
        self.accounts
            .iter()
            .map(|(username, password)| EmployeeAccount::new(username, password))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_taken_username_without_mutating() {
        let mut directory = AccountDirectory::new();
        directory.register("alice", "pw1").unwrap();

        let err = directory.register("alice", "pw2").unwrap_err();
        assert_eq!(err, AccountError::DuplicateUsername("alice".into()));
        assert!(directory.authenticate("alice", "pw1"));
        assert!(!directory.authenticate("alice", "pw2"));
    }

    #[test]
    fn edit_overwrites_unconditionally() {
        let mut directory = AccountDirectory::new();
        directory.register("alice", "pw1").unwrap();
        directory.edit("alice", "pw2");

        assert!(directory.authenticate("alice", "pw2"));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn authenticate_is_exact_and_case_sensitive() {
        let mut directory = AccountDirectory::new();
        directory.register("alice", "pw1").unwrap();

        assert!(directory.authenticate("alice", "pw1"));
        assert!(!directory.authenticate("alice", "wrong"));
        assert!(!directory.authenticate("alice", "PW1"));
        assert!(!directory.authenticate("bob", "pw1"));
    }

    #[test]
    fn records_are_in_username_order() {
        let mut directory = AccountDirectory::new();
        directory.register("zoe", "z").unwrap();
        directory.register("alice", "a").unwrap();

        let usernames: Vec<_> = directory
            .to_records()
            .into_iter()
            .map(|r| r.username)
            .collect();
        assert_eq!(usernames, vec!["alice", "zoe"]);
    }

    #[test]
    fn later_file_record_wins_for_the_same_username() {
        let directory = AccountDirectory::from_records(vec![
            EmployeeAccount::new("alice", "old"),
            EmployeeAccount::new("alice", "new"),
        ]);
        assert!(directory.authenticate("alice", "new"));
        assert_eq!(directory.len(), 1);
    }
}
