//! Access events, alerts and visitors for the GateKeeper demo dashboard.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Outcome of an access attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessDecision {
    Authorized,
    Unauthorized,
}

impl AccessDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessDecision::Authorized => "Authorized",
            AccessDecision::Unauthorized => "Unauthorized",
        }
    }
}

/// A single door or gate access attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessEvent {
    pub time: NaiveTime,
    /// Display name, or "Unknown Person" for unidentified subjects.
    pub user: String,
    pub action: String,
    pub status: AccessDecision,
    /// Credential method, e.g. "Keycard" or "Facial Recognition".
    pub method: String,
}

/// Severity of a raised security alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::High => "High",
            AlertSeverity::Medium => "Medium",
            AlertSeverity::Low => "Low",
        }
    }
}

/// An alert raised by the monitoring demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAlert {
    pub alert_type: String,
    pub location: String,
    pub time: NaiveTime,
    pub severity: AlertSeverity,
}

/// Check-in state of an expected visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitorStatus {
    #[serde(rename = "Checked In")]
    CheckedIn,
    Expected,
    Approved,
    Pending,
}

impl VisitorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitorStatus::CheckedIn => "Checked In",
            VisitorStatus::Expected => "Expected",
            VisitorStatus::Approved => "Approved",
            VisitorStatus::Pending => "Pending",
        }
    }
}

/// A visitor registered at the front desk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub name: String,
    pub host: String,
    pub purpose: String,
    pub arrival_time: NaiveTime,
    pub status: VisitorStatus,
}
