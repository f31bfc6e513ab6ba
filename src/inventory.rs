//! Inventory
//!
//! Indexes a tour's flat ticket list by guest category. Each category's tickets
//! are kept cheapest first, which the allocation engine relies on.

use tracing::debug;

use crate::{
    guests::{GuestCategory, PerCategory},
    tickets::Ticket,
    tours::Tour,
};

/// A tour with its tickets indexed by guest category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTour {
    tour: Tour,
    seat_count: PerCategory<u32>,
    tickets: PerCategory<Vec<Ticket>>,
}

impl NormalizedTour {
    /// The source tour listing.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Tour identifier.
    pub fn id(&self) -> &str {
        &self.tour.id
    }

    /// Seats available per category, summed over that category's tickets.
    pub fn seat_count(&self) -> &PerCategory<u32> {
        &self.seat_count
    }

    /// Seats available in one category.
    pub fn seats_for(&self, category: GuestCategory) -> u32 {
        *self.seat_count.get(category)
    }

    /// Valid tickets for a category, ordered by ascending unit price.
    pub fn tickets_for(&self, category: GuestCategory) -> &[Ticket] {
        self.tickets.get(category)
    }

    /// Valid tickets grouped by category.
    pub fn tickets(&self) -> &PerCategory<Vec<Ticket>> {
        &self.tickets
    }
}

/// Index a tour's tickets by category.
///
/// Tickets with a capacity of zero or less are skipped. Within each category,
/// tickets are stably sorted by unit price so equal prices keep provider order.
pub fn normalize(tour: Tour) -> NormalizedTour {
    let mut seat_count = PerCategory::<u32>::default();
    let mut tickets = PerCategory::<Vec<Ticket>>::default();

    for ticket in &tour.tickets {
        let Some(capacity) = ticket.capacity() else {
            debug!(
                tour = %tour.id,
                ticket = %ticket.id,
                pax = ticket.pax,
                "skipping ticket without capacity"
            );
            continue;
        };

        let seats = seat_count.get_mut(ticket.category);
        *seats = seats.saturating_add(capacity);

        tickets.get_mut(ticket.category).push(ticket.clone());
    }

    for category in GuestCategory::ALL {
        tickets
            .get_mut(category)
            .sort_by_key(|ticket| ticket.price);
    }

    NormalizedTour {
        tour,
        seat_count,
        tickets,
    }
}

/// Normalize every tour in a listing, keeping provider order.
pub fn normalize_all(tours: impl IntoIterator<Item = Tour>) -> Vec<NormalizedTour> {
    tours.into_iter().map(normalize).collect()
}
