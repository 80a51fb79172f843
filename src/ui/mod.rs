//! Shared UI primitive kit.
//!
//! Both apps compose their pages from the same pieces: the status
//! classifier, stat cards, table rendering and the page envelope.

pub mod card;
pub mod page;
pub mod style;
pub mod table;

pub use card::{StatCard, Trend};
pub use page::{DetailItem, FormField, PageResponse, PageView, Section};
pub use style::{style_for, StyleDomain, StyleToken};
pub use table::{rows_from, Cell, Row, TableView};
