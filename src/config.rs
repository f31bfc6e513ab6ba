//! Command line configuration

use std::path::PathBuf;

use clap::Parser;

use crate::{
    allocation::EligibilityPolicy,
    fixtures::Fixture,
    guests::GuestRequest,
    session::SessionOptions,
    sorting::{SortDirection, UnbookablePlacement},
};

/// Tourbook configuration
#[derive(Debug, Parser)]
#[command(
    name = "tourbook",
    about = "Find and book the cheapest tour tickets for a party",
    long_about = None
)]
pub struct BrowserConfig {
    /// Directory containing `tours/<name>.yml` fixture files
    #[arg(long, env = "TOURBOOK_FIXTURES", default_value = "./fixtures")]
    pub fixtures: PathBuf,

    /// Fixture set to load
    #[arg(short, long, env = "TOURBOOK_FIXTURE", default_value = "default")]
    pub fixture: String,

    /// Number of adults
    #[arg(long, default_value_t = 1)]
    pub adult: u32,

    /// Number of children
    #[arg(long, default_value_t = 0)]
    pub child: u32,

    /// Number of seniors
    #[arg(long, default_value_t = 0)]
    pub senior: u32,

    /// Number of infants
    #[arg(long, default_value_t = 0)]
    pub infant: u32,

    /// Sort by price: asc, desc or none
    #[arg(short, long, default_value = "asc")]
    pub sort: SortDirection,

    /// Only check per-category seats, ignoring party-size bounds
    #[arg(long)]
    pub category_seats_only: bool,

    /// Sort unbookable tours by price instead of always listing them last
    #[arg(long)]
    pub unbookable_by_price: bool,

    /// Leave out tours that cannot take the party
    #[arg(long)]
    pub hide_unbookable: bool,

    /// Book the tour with this id after listing
    #[arg(short, long)]
    pub book: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TOURBOOK_LOG", default_value = "warn")]
    pub log_level: String,
}

impl BrowserConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Party to price.
    pub fn guests(&self) -> GuestRequest {
        GuestRequest::new(self.adult, self.child, self.senior, self.infant)
    }

    /// Pricing and ordering policies.
    pub fn options(&self) -> SessionOptions {
        SessionOptions {
            eligibility: if self.category_seats_only {
                EligibilityPolicy::CategorySeats
            } else {
                EligibilityPolicy::PartyBounds
            },
            placement: if self.unbookable_by_price {
                UnbookablePlacement::Natural
            } else {
                UnbookablePlacement::Last
            },
            hide_unbookable: self.hide_unbookable,
        }
    }

    /// Tour provider for the configured fixture set.
    pub fn fixture(&self) -> Fixture {
        Fixture::with_base_path(&self.fixtures, &self.fixture)
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_to_one_adult_ascending() -> TestResult {
        let config = BrowserConfig::try_parse_from(["tourbook"])?;

        assert_eq!(config.guests(), GuestRequest::new(1, 0, 0, 0));
        assert_eq!(config.sort, SortDirection::Ascending);
        assert_eq!(config.options(), SessionOptions::default());
        assert_eq!(config.book, None);

        Ok(())
    }

    #[test]
    fn parses_party_and_policies() -> TestResult {
        let config = BrowserConfig::try_parse_from([
            "tourbook",
            "--adult",
            "2",
            "--child",
            "1",
            "--infant",
            "1",
            "--sort",
            "desc",
            "--category-seats-only",
            "--unbookable-by-price",
            "--hide-unbookable",
            "--book",
            "1001",
        ])?;

        assert_eq!(config.guests(), GuestRequest::new(2, 1, 0, 1));
        assert_eq!(config.sort, SortDirection::Descending);
        assert_eq!(
            config.options(),
            SessionOptions {
                eligibility: EligibilityPolicy::CategorySeats,
                placement: UnbookablePlacement::Natural,
                hide_unbookable: true,
            }
        );
        assert_eq!(config.book.as_deref(), Some("1001"));

        Ok(())
    }

    #[test]
    fn log_level_reads_its_own_variable() {
        let command = BrowserConfig::command();
        let env = command
            .get_arguments()
            .find(|arg| arg.get_id() == "log_level")
            .and_then(|arg| arg.get_env());

        assert_eq!(env, Some(OsStr::new("TOURBOOK_LOG")));
    }

    #[test]
    fn rejects_unknown_sort() {
        let result = BrowserConfig::try_parse_from(["tourbook", "--sort", "sideways"]);

        assert!(result.is_err());
    }
}
