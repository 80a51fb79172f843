//! Status-to-style classification.
//!
//! Every categorical field rendered as a badge resolves its tones through
//! the single lookup in this module, so the same logical status always gets
//! the same colors on every page of both apps.

use serde::Serialize;

/// A foreground/background tone pair selected for a categorical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleToken {
    pub text: &'static str,
    pub background: &'static str,
}

impl StyleToken {
    /// Unstyled fallback for keys without a registered mapping.
    pub const NEUTRAL: StyleToken = StyleToken {
        text: "",
        background: "",
    };

    const fn tones(text: &'static str, background: &'static str) -> Self {
        StyleToken { text, background }
    }

    pub fn is_neutral(&self) -> bool {
        *self == StyleToken::NEUTRAL
    }
}

const GREEN: StyleToken = StyleToken::tones("green", "green-light");
const AMBER: StyleToken = StyleToken::tones("amber", "amber-light");
const RED: StyleToken = StyleToken::tones("red", "red-light");
const ROSE: StyleToken = StyleToken::tones("rose", "rose-light");
const BLUE: StyleToken = StyleToken::tones("blue", "blue-light");
const CYAN: StyleToken = StyleToken::tones("cyan", "cyan-light");
const PURPLE: StyleToken = StyleToken::tones("purple", "purple-light");
const GRAY: StyleToken = StyleToken::tones("gray", "gray-light");

/// Classification domain a key is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleDomain {
    DonationStatus,
    AppointmentStatus,
    BloodType,
    StockStatus,
    UserRole,
    AccountStatus,
    AccessDecision,
    AlertSeverity,
    VisitorStatus,
}

/// Resolve a categorical value to its style token.
///
/// Matching is case-sensitive and exact. Unmapped keys return
/// [`StyleToken::NEUTRAL`]; source data is externally authored, so an
/// unknown value must degrade to an unstyled badge rather than fail.
pub fn style_for(domain: StyleDomain, key: &str) -> StyleToken {
    match domain {
        StyleDomain::DonationStatus => match key {
            "Completed" => GREEN,
            "Pending" => AMBER,
            _ => StyleToken::NEUTRAL,
        },
        StyleDomain::AppointmentStatus => match key {
            "Confirmed" => GREEN,
            "Pending" => AMBER,
            _ => StyleToken::NEUTRAL,
        },
        // All blood types share the same chip color in both apps.
        StyleDomain::BloodType => match key {
            "A+" | "A-" | "B+" | "B-" | "AB+" | "AB-" | "O+" | "O-" => ROSE,
            _ => StyleToken::NEUTRAL,
        },
        StyleDomain::StockStatus => match key {
            "In Stock" => GREEN,
            "Low Stock" => AMBER,
            "Out of Stock" => RED,
            _ => StyleToken::NEUTRAL,
        },
        StyleDomain::UserRole => match key {
            "Donor" => BLUE,
            "Recipient" => CYAN,
            "Admin" => PURPLE,
            _ => StyleToken::NEUTRAL,
        },
        StyleDomain::AccountStatus => match key {
            "Active" => GREEN,
            "Inactive" => GRAY,
            _ => StyleToken::NEUTRAL,
        },
        StyleDomain::AccessDecision => match key {
            "Authorized" => GREEN,
            "Unauthorized" => RED,
            _ => StyleToken::NEUTRAL,
        },
        StyleDomain::AlertSeverity => match key {
            "High" => RED,
            "Medium" => AMBER,
            "Low" => BLUE,
            _ => StyleToken::NEUTRAL,
        },
        StyleDomain::VisitorStatus => match key {
            "Checked In" => GREEN,
            "Expected" => BLUE,
            "Approved" => CYAN,
            "Pending" => AMBER,
            _ => StyleToken::NEUTRAL,
        },
    }
}
