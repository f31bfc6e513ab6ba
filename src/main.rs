//! Tourbook command line
//!
//! Lists the tours in a fixture set priced for the given party, and optionally
//! books one of them.

use std::{io, process::ExitCode};

use thiserror::Error;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tourbook::{
    config::BrowserConfig,
    fixtures::EchoSubmitter,
    listing::{ListingError, write_confirmation, write_listing},
    session::{Session, SessionError},
};

#[derive(Debug, Error)]
enum MainError {
    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Reservation for tour {0} was not confirmed")]
    NotConfirmed(String),
}

fn main() -> ExitCode {
    let config = match BrowserConfig::load() {
        Ok(config) => config,
        Err(err) => err.exit(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");

            ExitCode::FAILURE
        }
    }
}

fn run(config: &BrowserConfig) -> Result<(), MainError> {
    let mut session = Session::start(&config.fixture(), config.options());

    session.set_guests(config.guests());
    session.set_sort(config.sort);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_listing(
        &mut handle,
        &session.tours(),
        session.currency(),
        session.has_selection(),
    )?;

    let Some(tour_id) = config.book.as_deref() else {
        return Ok(());
    };

    let mut submitter = EchoSubmitter::new();

    if session.book(tour_id, &mut submitter)?.is_none() {
        return Err(MainError::NotConfirmed(tour_id.to_string()));
    }

    let name = session
        .listing()
        .iter()
        .find(|tour| tour.id() == tour_id)
        .map_or(tour_id, |tour| tour.tour().name.as_str());

    write_confirmation(&mut handle, name)?;

    Ok(())
}
