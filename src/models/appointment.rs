//! Appointment record matching the BloodLink appointments view.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::BloodType;

/// Confirmation state of a scheduled appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Pending => "Pending",
        }
    }
}

/// A scheduled donation appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub id: u32,
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub blood_type: BloodType,
    pub status: AppointmentStatus,
}
