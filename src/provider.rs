//! Providers
//!
//! Boundaries to the outside world. Implementations report failure as `None`;
//! callers substitute their own defaults.

use serde::{Deserialize, Serialize};

use crate::{tickets::LineItem, tours::ToursAvailable};

/// A booking request for one tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Tour identifier
    pub tour_id: String,

    /// Tickets to book
    pub tickets: Vec<LineItem>,
}

impl Reservation {
    /// Creates a reservation.
    pub fn new(tour_id: impl Into<String>, tickets: impl Into<Vec<LineItem>>) -> Self {
        Self {
            tour_id: tour_id.into(),
            tickets: tickets.into(),
        }
    }
}

/// Source of the tour listing for a session.
pub trait TourProvider {
    /// Fetch every available tour and the currency they are priced in.
    ///
    /// Returns `None` if the listing could not be fetched.
    fn fetch_available_tours(&self) -> Option<ToursAvailable>;
}

/// Accepts reservations.
pub trait ReservationSubmitter {
    /// Submit a reservation.
    ///
    /// Returns the confirmed reservation, or `None` if it was not accepted.
    fn submit_reservation(&mut self, reservation: &Reservation) -> Option<Reservation>;
}
