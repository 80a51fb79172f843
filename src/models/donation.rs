//! Donation record matching the BloodLink donations view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::BloodType;

/// Completion state of a recorded donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DonationStatus {
    Completed,
    Pending,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Completed => "Completed",
            DonationStatus::Pending => "Pending",
        }
    }
}

/// A single blood donation entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    pub id: u32,
    pub donor_name: String,
    pub blood_type: BloodType,
    pub date: NaiveDate,
    /// Display volume, e.g. "450 ml".
    pub quantity: String,
    pub status: DonationStatus,
}
