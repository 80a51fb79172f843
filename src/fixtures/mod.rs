//! Hard-coded sample datasets for both apps.
//!
//! The data is built once at startup and injected into handlers through
//! application state; nothing mutates it afterwards. Record order here is
//! the order every view renders.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{
    AccessDecision, AccessEvent, AccountStatus, AlertSeverity, AppointmentRecord,
    AppointmentStatus, BloodType, DonationRecord, DonationStatus, InventoryItem, SecurityAlert,
    StockStatus, UserAccount, UserRole, Visitor, VisitorStatus,
};

/// Sample data backing the BloodLink views.
#[derive(Debug, Clone)]
pub struct BloodLinkData {
    pub donations: Vec<DonationRecord>,
    pub appointments: Vec<AppointmentRecord>,
    pub inventory: Vec<InventoryItem>,
    pub users: Vec<UserAccount>,
}

/// Sample data backing the GateKeeper demo dashboard.
#[derive(Debug, Clone)]
pub struct GateKeeperData {
    pub access_events: Vec<AccessEvent>,
    pub alerts: Vec<SecurityAlert>,
    pub visitors: Vec<Visitor>,
}

/// All fixture data for both apps.
#[derive(Debug, Clone)]
pub struct DemoData {
    pub bloodlink: BloodLinkData,
    pub gatekeeper: GateKeeperData,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid fixture time")
}

/// Build the full sample dataset.
pub fn sample() -> DemoData {
    DemoData {
        bloodlink: BloodLinkData {
            donations: donations(),
            appointments: appointments(),
            inventory: inventory(),
            users: users(),
        },
        gatekeeper: GateKeeperData {
            access_events: access_events(),
            alerts: alerts(),
            visitors: visitors(),
        },
    }
}

fn donations() -> Vec<DonationRecord> {
    vec![
        DonationRecord {
            id: 1,
            donor_name: "Emma Wilson".to_string(),
            blood_type: BloodType::OPositive,
            date: date(2025, 3, 12),
            quantity: "450 ml".to_string(),
            status: DonationStatus::Completed,
        },
        DonationRecord {
            id: 2,
            donor_name: "James Rodriguez".to_string(),
            blood_type: BloodType::ANegative,
            date: date(2025, 3, 12),
            quantity: "450 ml".to_string(),
            status: DonationStatus::Completed,
        },
        DonationRecord {
            id: 3,
            donor_name: "Sophia Chen".to_string(),
            blood_type: BloodType::BPositive,
            date: date(2025, 3, 13),
            quantity: "500 ml".to_string(),
            status: DonationStatus::Pending,
        },
        DonationRecord {
            id: 4,
            donor_name: "Liam O'Brien".to_string(),
            blood_type: BloodType::AbPositive,
            date: date(2025, 3, 14),
            quantity: "450 ml".to_string(),
            status: DonationStatus::Completed,
        },
        DonationRecord {
            id: 5,
            donor_name: "Ava Thompson".to_string(),
            blood_type: BloodType::ONegative,
            date: date(2025, 3, 15),
            quantity: "450 ml".to_string(),
            status: DonationStatus::Pending,
        },
        DonationRecord {
            id: 6,
            donor_name: "Noah Patel".to_string(),
            blood_type: BloodType::BNegative,
            date: date(2025, 3, 16),
            quantity: "500 ml".to_string(),
            status: DonationStatus::Completed,
        },
    ]
}

fn appointments() -> Vec<AppointmentRecord> {
    vec![
        AppointmentRecord {
            id: 1,
            name: "Olivia Martin".to_string(),
            date: date(2025, 3, 18),
            time: time(9, 30),
            blood_type: BloodType::APositive,
            status: AppointmentStatus::Confirmed,
        },
        AppointmentRecord {
            id: 2,
            name: "William Garcia".to_string(),
            date: date(2025, 3, 18),
            time: time(11, 0),
            blood_type: BloodType::OPositive,
            status: AppointmentStatus::Pending,
        },
        AppointmentRecord {
            id: 3,
            name: "Isabella Kim".to_string(),
            date: date(2025, 3, 19),
            time: time(14, 15),
            blood_type: BloodType::AbNegative,
            status: AppointmentStatus::Confirmed,
        },
        AppointmentRecord {
            id: 4,
            name: "Ethan Nguyen".to_string(),
            date: date(2025, 3, 20),
            time: time(10, 45),
            blood_type: BloodType::BPositive,
            status: AppointmentStatus::Pending,
        },
    ]
}

fn inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: 1,
            name: "O+ Whole Blood".to_string(),
            quantity: 124,
            status: StockStatus::InStock,
        },
        InventoryItem {
            id: 2,
            name: "A- Plasma".to_string(),
            quantity: 18,
            status: StockStatus::LowStock,
        },
        InventoryItem {
            id: 3,
            name: "AB+ Platelets".to_string(),
            quantity: 0,
            status: StockStatus::OutOfStock,
        },
        InventoryItem {
            id: 4,
            name: "B+ Red Cells".to_string(),
            quantity: 67,
            status: StockStatus::InStock,
        },
        // Status is authored independently of quantity.
        InventoryItem {
            id: 5,
            name: "O- Whole Blood".to_string(),
            quantity: 9,
            status: StockStatus::InStock,
        },
    ]
}

fn users() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: 1,
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@bloodlink.example".to_string(),
            avatar_url: "/avatars/sarah.png".to_string(),
            role: UserRole::Admin,
            status: AccountStatus::Active,
        },
        UserAccount {
            id: 2,
            name: "Emma Wilson".to_string(),
            email: "emma.wilson@example.com".to_string(),
            avatar_url: "/avatars/emma.png".to_string(),
            role: UserRole::Donor,
            status: AccountStatus::Active,
        },
        UserAccount {
            id: 3,
            name: "Michael Brown".to_string(),
            email: "michael.brown@example.com".to_string(),
            avatar_url: "/avatars/michael.png".to_string(),
            role: UserRole::Recipient,
            status: AccountStatus::Inactive,
        },
        UserAccount {
            id: 4,
            name: "James Rodriguez".to_string(),
            email: "james.rodriguez@example.com".to_string(),
            avatar_url: "/avatars/james.png".to_string(),
            role: UserRole::Donor,
            status: AccountStatus::Active,
        },
    ]
}

fn access_events() -> Vec<AccessEvent> {
    vec![
        AccessEvent {
            time: time(8, 2),
            user: "Daniel Reyes".to_string(),
            action: "Main Entrance".to_string(),
            status: AccessDecision::Authorized,
            method: "Keycard".to_string(),
        },
        AccessEvent {
            time: time(8, 17),
            user: "Priya Sharma".to_string(),
            action: "Lab Wing B".to_string(),
            status: AccessDecision::Authorized,
            method: "Facial Recognition".to_string(),
        },
        AccessEvent {
            time: time(8, 41),
            user: "Unknown Person".to_string(),
            action: "Service Door 3".to_string(),
            status: AccessDecision::Unauthorized,
            method: "Forced Attempt".to_string(),
        },
        AccessEvent {
            time: time(9, 5),
            user: "Marcus Lee".to_string(),
            action: "Parking Garage".to_string(),
            status: AccessDecision::Authorized,
            method: "License Plate".to_string(),
        },
    ]
}

fn alerts() -> Vec<SecurityAlert> {
    vec![
        SecurityAlert {
            alert_type: "Forced Entry Attempt".to_string(),
            location: "Service Door 3".to_string(),
            time: time(8, 41),
            severity: AlertSeverity::High,
        },
        SecurityAlert {
            alert_type: "Door Held Open".to_string(),
            location: "Lab Wing B".to_string(),
            time: time(9, 22),
            severity: AlertSeverity::Medium,
        },
        SecurityAlert {
            alert_type: "Badge Expiring Soon".to_string(),
            location: "Front Desk".to_string(),
            time: time(10, 0),
            severity: AlertSeverity::Low,
        },
    ]
}

fn visitors() -> Vec<Visitor> {
    vec![
        Visitor {
            name: "Grace Okafor".to_string(),
            host: "Daniel Reyes".to_string(),
            purpose: "Vendor Meeting".to_string(),
            arrival_time: time(9, 0),
            status: VisitorStatus::CheckedIn,
        },
        Visitor {
            name: "Tom Becker".to_string(),
            host: "Priya Sharma".to_string(),
            purpose: "Facility Tour".to_string(),
            arrival_time: time(10, 30),
            status: VisitorStatus::Expected,
        },
        Visitor {
            name: "Lena Fischer".to_string(),
            host: "Marcus Lee".to_string(),
            purpose: "Interview".to_string(),
            arrival_time: time(11, 15),
            status: VisitorStatus::Approved,
        },
        Visitor {
            name: "Raj Mehta".to_string(),
            host: "Front Desk".to_string(),
            purpose: "Delivery".to_string(),
            arrival_time: time(13, 0),
            status: VisitorStatus::Pending,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_record_ids_are_unique_per_sequence() {
        let data = sample();

        let donation_ids: HashSet<u32> =
            data.bloodlink.donations.iter().map(|d| d.id).collect();
        assert_eq!(donation_ids.len(), data.bloodlink.donations.len());

        let appointment_ids: HashSet<u32> =
            data.bloodlink.appointments.iter().map(|a| a.id).collect();
        assert_eq!(appointment_ids.len(), data.bloodlink.appointments.len());

        let inventory_ids: HashSet<u32> =
            data.bloodlink.inventory.iter().map(|i| i.id).collect();
        assert_eq!(inventory_ids.len(), data.bloodlink.inventory.len());

        let user_ids: HashSet<u32> = data.bloodlink.users.iter().map(|u| u.id).collect();
        assert_eq!(user_ids.len(), data.bloodlink.users.len());
    }

    #[test]
    fn test_every_sequence_is_non_empty() {
        let data = sample();
        assert!(!data.bloodlink.donations.is_empty());
        assert!(!data.bloodlink.appointments.is_empty());
        assert!(!data.bloodlink.inventory.is_empty());
        assert!(!data.bloodlink.users.is_empty());
        assert!(!data.gatekeeper.access_events.is_empty());
        assert!(!data.gatekeeper.alerts.is_empty());
        assert!(!data.gatekeeper.visitors.is_empty());
    }

    #[test]
    fn test_stock_status_is_not_derived_from_quantity() {
        let data = sample();
        // Item 5 has a low quantity but stays "In Stock" as authored.
        let item = &data.bloodlink.inventory[4];
        assert_eq!(item.quantity, 9);
        assert_eq!(item.status.as_str(), "In Stock");
    }
}
