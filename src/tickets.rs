//! Tickets

use serde::{Deserialize, Serialize};

use crate::guests::GuestCategory;

/// A priced, capacity-bearing offer within one guest category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Ticket identifier
    pub id: String,

    /// Guest category the ticket is sold for
    #[serde(rename = "name")]
    pub category: GuestCategory,

    /// Number of guests one priced unit covers; zero or less is not an offer
    pub pax: i32,

    /// Unit price in minor currency units
    pub price: i64,
}

impl Ticket {
    /// Creates a new ticket.
    pub fn new(id: impl Into<String>, category: GuestCategory, pax: i32, price: i64) -> Self {
        Self {
            id: id.into(),
            category,
            pax,
            price,
        }
    }

    /// Capacity of the ticket, or `None` when it is not a valid offer.
    pub fn capacity(&self) -> Option<u32> {
        u32::try_from(self.pax).ok().filter(|pax| *pax > 0)
    }
}

/// A booked ticket and the number of units taken from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Ticket identifier
    pub id: String,

    /// Units booked
    pub count: u32,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(id: impl Into<String>, count: u32) -> Self {
        Self {
            id: id.into(),
            count,
        }
    }
}
