//! Data models for the BloodLink and GateKeeper demo apps.
//!
//! These records match the frontend interfaces exactly; every categorical
//! field is a closed enum with a stable display string.

mod appointment;
mod blood;
mod donation;
mod inventory;
mod security;
mod user;

pub use appointment::*;
pub use blood::*;
pub use donation::*;
pub use inventory::*;
pub use security::*;
pub use user::*;
