//! Fixtures
//!
//! YAML tour listings standing in for the remote tour service.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    currency::CurrencyError,
    provider::{Reservation, ReservationSubmitter, TourProvider},
    tours::{Tour, ToursAvailable},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The fixture's currency cannot be displayed
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// Two tours share an identifier
    #[error("Duplicate tour id: {0}")]
    DuplicateTour(String),
}

/// Tour listings read from `<base>/tours/<name>.yml`.
#[derive(Debug, Clone)]
pub struct Fixture {
    base_path: PathBuf,
    name: String,
}

impl Fixture {
    /// Create a fixture for a named set under the default `./fixtures` path.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_base_path("./fixtures", name)
    }

    /// Create a fixture for a named set under a custom base path.
    pub fn with_base_path(base_path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            name: name.into(),
        }
    }

    /// Path of the YAML file backing this fixture.
    pub fn path(&self) -> PathBuf {
        self.base_path
            .join("tours")
            .join(format!("{}.yml", self.name))
    }

    /// Load and validate the tour listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if the currency is
    /// unknown, or if two tours share an id.
    pub fn load(&self) -> Result<ToursAvailable, FixtureError> {
        let contents = fs::read_to_string(self.path())?;
        let available: ToursAvailable = serde_norway::from_str(&contents)?;

        available.currency.currency()?;
        check_unique_ids(&available.tours)?;

        debug!(
            fixture = %self.name,
            tours = available.tours.len(),
            currency = %available.currency.iso_code,
            "loaded tour fixture"
        );

        Ok(available)
    }
}

fn check_unique_ids(tours: &[Tour]) -> Result<(), FixtureError> {
    let mut seen = FxHashSet::default();

    for tour in tours {
        if !seen.insert(tour.id.as_str()) {
            return Err(FixtureError::DuplicateTour(tour.id.clone()));
        }
    }

    Ok(())
}

impl TourProvider for Fixture {
    fn fetch_available_tours(&self) -> Option<ToursAvailable> {
        self.load()
            .inspect_err(|err| {
                warn!(
                    fixture = %self.name,
                    path = %self.path().display(),
                    "failed to load tours: {err}"
                );
            })
            .ok()
    }
}

/// Confirms every reservation by echoing it back, keeping a record of each.
#[derive(Debug)]
pub struct EchoSubmitter {
    accept: bool,
    submitted: Vec<Reservation>,
}

impl EchoSubmitter {
    /// A submitter that confirms everything.
    pub fn new() -> Self {
        Self {
            accept: true,
            submitted: Vec::new(),
        }
    }

    /// A submitter that records but never confirms.
    pub fn rejecting() -> Self {
        Self {
            accept: false,
            submitted: Vec::new(),
        }
    }

    /// Reservations received so far, in submission order.
    pub fn submitted(&self) -> &[Reservation] {
        &self.submitted
    }
}

impl Default for EchoSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationSubmitter for EchoSubmitter {
    fn submit_reservation(&mut self, reservation: &Reservation) -> Option<Reservation> {
        self.submitted.push(reservation.clone());

        self.accept.then(|| reservation.clone())
    }
}
