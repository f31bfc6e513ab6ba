//! Session
//!
//! State for one browsing session: the tour listing fetched at start, the party
//! being priced, and how results are ordered. Enhanced tours are recomputed from
//! this state on every read.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    allocation::{EligibilityPolicy, EnhancedTour, enhance_all},
    currency::CurrencyInfo,
    guests::GuestRequest,
    inventory::{NormalizedTour, normalize_all},
    provider::{Reservation, ReservationSubmitter, TourProvider},
    sorting::{SortDirection, UnbookablePlacement, make_comparator, sort_tours},
    tours::ToursAvailable,
};

/// Errors raised when booking.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    /// No tour with the given id was listed.
    #[error("Tour {0} not found")]
    UnknownTour(String),

    /// The tour cannot take the current party.
    #[error("Tour {0} has no tickets for the current guests")]
    NotBookable(String),
}

/// Policies applied when pricing and ordering tours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Rule deciding whether a tour can take the party
    pub eligibility: EligibilityPolicy,

    /// Where unbookable tours are placed when sorting
    pub placement: UnbookablePlacement,

    /// Drop tours with nothing to book instead of listing them
    pub hide_unbookable: bool,
}

/// One browsing session.
#[derive(Debug, Clone)]
pub struct Session {
    tours: Vec<NormalizedTour>,
    currency: CurrencyInfo,
    guests: GuestRequest,
    sort: SortDirection,
    options: SessionOptions,
}

impl Session {
    /// Party priced before the user changes anything: one adult.
    pub fn default_guests() -> GuestRequest {
        GuestRequest::new(1, 0, 0, 0)
    }

    /// Start a session, fetching the tour listing once.
    ///
    /// If the provider returns nothing, the session starts with no tours and the
    /// default currency.
    pub fn start(provider: &impl TourProvider, options: SessionOptions) -> Self {
        let available = provider.fetch_available_tours().unwrap_or_else(|| {
            warn!("no tours available from provider, starting empty");

            ToursAvailable::default()
        });

        let tours = normalize_all(available.tours);

        info!(
            tours = tours.len(),
            currency = %available.currency.iso_code,
            "session started"
        );

        Self {
            tours,
            currency: available.currency,
            guests: Self::default_guests(),
            sort: SortDirection::default(),
            options,
        }
    }

    /// Currency the listing is priced in.
    pub fn currency(&self) -> &CurrencyInfo {
        &self.currency
    }

    /// Normalized tours in provider order.
    pub fn listing(&self) -> &[NormalizedTour] {
        &self.tours
    }

    /// The party being priced.
    pub fn guests(&self) -> &GuestRequest {
        &self.guests
    }

    /// Replace the party being priced.
    pub fn set_guests(&mut self, guests: GuestRequest) {
        debug!(?guests, "guests changed");

        self.guests = guests;
    }

    /// Current sort direction.
    pub fn sort(&self) -> SortDirection {
        self.sort
    }

    /// Replace the sort direction.
    pub fn set_sort(&mut self, sort: SortDirection) {
        self.sort = sort;
    }

    /// Total number of guests in the party.
    pub fn guest_count(&self) -> u32 {
        self.guests.total()
    }

    /// Check if at least one guest is selected.
    pub fn has_selection(&self) -> bool {
        !self.guests.is_empty()
    }

    /// Price every tour for the current party and order them.
    ///
    /// With [`SessionOptions::hide_unbookable`] set, tours that cannot take the
    /// party are left out.
    pub fn tours(&self) -> Vec<EnhancedTour<'_>> {
        let mut tours = enhance_all(
            &self.tours,
            &self.guests,
            &self.currency,
            self.options.eligibility,
        );

        if self.options.hide_unbookable {
            tours.retain(EnhancedTour::is_bookable);
        }

        let comparator = make_comparator(self.sort, self.options.placement);
        sort_tours(&mut tours, comparator);

        debug!(
            tours = tours.len(),
            bookable = tours.iter().filter(|tour| tour.is_bookable()).count(),
            "recomputed tours"
        );

        tours
    }

    /// Book a tour for the current party.
    ///
    /// Returns the confirmation, or `None` if the submitter did not confirm.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownTour`] if no such tour is listed, or
    /// [`SessionError::NotBookable`] if it cannot take the current party.
    pub fn book(
        &self,
        tour_id: &str,
        submitter: &mut impl ReservationSubmitter,
    ) -> Result<Option<Reservation>, SessionError> {
        let tours = self.tours();

        let tour = tours
            .iter()
            .find(|tour| tour.id() == tour_id)
            .ok_or_else(|| SessionError::UnknownTour(tour_id.to_string()))?;

        if !tour.is_bookable() {
            return Err(SessionError::NotBookable(tour_id.to_string()));
        }

        let reservation = Reservation::new(tour_id, tour.tickets_to_book().to_vec());
        let confirmation = submitter.submit_reservation(&reservation);

        if confirmation.is_some() {
            info!(tour = tour_id, price = %tour.price(), "tour booked");
        } else {
            warn!(tour = tour_id, "reservation was not confirmed");
        }

        Ok(confirmation)
    }
}
