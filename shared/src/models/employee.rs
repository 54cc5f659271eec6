//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee account record
///
/// Credentials are stored and compared in clear text. `username` is the
/// directory key; there is no role or lockout state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAccount {
    pub username: String,
    pub password: String,
}

impl EmployeeAccount {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
