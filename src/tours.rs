//! Tours

use serde::{Deserialize, Serialize};

use crate::{currency::CurrencyInfo, tickets::Ticket};

/// A tour listing as supplied by the tour provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    /// Tour identifier
    pub id: String,

    /// Tour name
    pub name: String,

    /// Tour description
    #[serde(default)]
    pub description: String,

    /// Image reference
    #[serde(default)]
    pub image: String,

    /// Raw ticket offers, in provider order
    #[serde(default)]
    pub tickets: Vec<Ticket>,

    /// Smallest party the tour accepts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_pax: Option<u32>,

    /// Largest party the tour accepts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pax: Option<u32>,

    /// Total seats on the tour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
}

impl Tour {
    /// Creates a tour with no party-size bounds.
    pub fn new(id: impl Into<String>, name: impl Into<String>, tickets: Vec<Ticket>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            image: String::new(),
            tickets,
            min_pax: None,
            max_pax: None,
            seats: None,
        }
    }

    /// Returns the tour with party-size bounds set.
    #[must_use]
    pub fn with_bounds(
        mut self,
        min_pax: Option<u32>,
        max_pax: Option<u32>,
        seats: Option<u32>,
    ) -> Self {
        self.min_pax = min_pax;
        self.max_pax = max_pax;
        self.seats = seats;
        self
    }
}

/// Everything the tour provider returns for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToursAvailable {
    /// Available tours
    #[serde(default)]
    pub tours: Vec<Tour>,

    /// Currency all ticket prices are expressed in
    #[serde(default)]
    pub currency: CurrencyInfo,
}
