//! Tourbook
//!
//! Tourbook prices tour packages for a party of guests. Each tour's tickets are
//! indexed by guest category and the cheapest tickets that seat the whole party
//! are booked. Tours are then ordered by the resulting price.

pub mod allocation;
pub mod config;
pub mod currency;
pub mod fixtures;
pub mod guests;
pub mod inventory;
pub mod listing;
pub mod provider;
pub mod session;
pub mod sorting;
pub mod tickets;
pub mod tours;
