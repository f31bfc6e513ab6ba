//! Listing
//!
//! Text rendering of priced tours.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    allocation::EnhancedTour,
    currency::{CurrencyError, CurrencyInfo},
};

/// Shown instead of a table when no tours are listed.
pub const NO_TOURS: &str = "No Tours Available for Current Ticket Selection";

/// Errors that can occur while rendering a listing.
#[derive(Debug, Error)]
pub enum ListingError {
    /// A price could not be rendered in the listing currency.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Booking status shown for a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourStatus {
    /// No guests are selected yet.
    NoSelection,

    /// The tour can be booked for the party.
    Bookable,

    /// The tour cannot take the party.
    NotEnoughTickets,
}

impl TourStatus {
    /// Status of a tour given whether any guests are selected.
    pub fn of(tour: &EnhancedTour<'_>, has_selection: bool) -> Self {
        if !has_selection {
            TourStatus::NoSelection
        } else if tour.is_bookable() {
            TourStatus::Bookable
        } else {
            TourStatus::NotEnoughTickets
        }
    }

    /// Banner text for the status.
    pub fn label(self) -> &'static str {
        match self {
            TourStatus::NoSelection => "Please Select Tickets",
            TourStatus::Bookable => "Book Now",
            TourStatus::NotEnoughTickets => "Not Enough Tickets Available",
        }
    }
}

/// Writes tours as a table, one row per tour, in the order given.
///
/// # Errors
///
/// Returns a [`ListingError`] if a price cannot be formatted or the output
/// cannot be written.
pub fn write_listing(
    mut out: impl io::Write,
    tours: &[EnhancedTour<'_>],
    currency: &CurrencyInfo,
    has_selection: bool,
) -> Result<(), ListingError> {
    if tours.is_empty() {
        writeln!(out, "{NO_TOURS}")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["", "Tour", "Description", "Price", "Status", "Tickets"]);

    for (idx, tour) in tours.iter().enumerate() {
        let listing = tour.tour().tour();
        let status = TourStatus::of(tour, has_selection);

        let price = if tour.is_bookable() {
            format!("{} for your group", currency.format(tour.price())?)
        } else {
            String::new()
        };

        let tickets = tour
            .tickets_to_book()
            .iter()
            .map(|item| format!("{} x{}", item.id, item.count))
            .collect::<Vec<_>>()
            .join("\n");

        builder.push_record([
            format!("#{:<3}", idx + 1),
            listing.name.clone(),
            listing.description.clone(),
            price,
            status.label().to_string(),
            tickets,
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..4), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

/// Writes the confirmation shown after a successful booking.
///
/// # Errors
///
/// Returns [`ListingError::Io`] if the output cannot be written.
pub fn write_confirmation(mut out: impl io::Write, tour_name: &str) -> Result<(), ListingError> {
    writeln!(out, "Tour Successfully Booked")?;
    writeln!(out, "Have fun on your {tour_name}!")?;

    Ok(())
}
