//! User account matching the BloodLink users view.

use serde::{Deserialize, Serialize};

/// Role assigned to a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Donor,
    Recipient,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Donor => "Donor",
            UserRole::Recipient => "Recipient",
            UserRole::Admin => "Admin",
        }
    }
}

/// Activation state of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
        }
    }
}

/// Request body for the login form.
///
/// The demo performs no credential check; the fields exist only because the
/// form submits them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A registered BloodLink user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub role: UserRole,
    pub status: AccountStatus,
}
