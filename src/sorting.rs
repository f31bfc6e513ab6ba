//! Sorting

use std::{cmp::Ordering, str::FromStr};

use thiserror::Error;

use crate::allocation::EnhancedTour;

/// Errors parsing sort options.
#[derive(Debug, Error, PartialEq)]
pub enum SortError {
    /// The direction is not one of `asc`, `desc` or `none`.
    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),
}

/// Order to present tours in, by price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Lowest price first
    #[default]
    Ascending,

    /// Highest price first
    Descending,

    /// Provider order
    None,
}

impl FromStr for SortDirection {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            "" | "none" => Ok(SortDirection::None),
            _ => Err(SortError::UnknownDirection(s.to_string())),
        }
    }
}

/// Where tours with nothing to book are placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnbookablePlacement {
    /// Always after every bookable tour, whatever the direction.
    #[default]
    Last,

    /// Ordered by their price like any other tour.
    Natural,
}

/// Price ordering over enhanced tours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourComparator {
    direction: SortDirection,
    placement: UnbookablePlacement,
}

impl TourComparator {
    /// Direction this comparator sorts in.
    pub fn direction(self) -> SortDirection {
        self.direction
    }

    /// Placement of unbookable tours.
    pub fn placement(self) -> UnbookablePlacement {
        self.placement
    }

    /// Compare two tours.
    pub fn compare(self, a: &EnhancedTour<'_>, b: &EnhancedTour<'_>) -> Ordering {
        if self.placement == UnbookablePlacement::Last {
            match (a.is_bookable(), b.is_bookable()) {
                (false, true) => return Ordering::Greater,
                (true, false) => return Ordering::Less,
                _ => {}
            }
        }

        match self.direction {
            SortDirection::Ascending => a.price().cmp(&b.price()),
            SortDirection::Descending => b.price().cmp(&a.price()),
            SortDirection::None => Ordering::Equal,
        }
    }
}

/// Build a comparator for a direction.
///
/// Returns `None` for [`SortDirection::None`], meaning no sort is applied.
pub fn make_comparator(
    direction: SortDirection,
    placement: UnbookablePlacement,
) -> Option<TourComparator> {
    match direction {
        SortDirection::None => None,
        SortDirection::Ascending | SortDirection::Descending => Some(TourComparator {
            direction,
            placement,
        }),
    }
}

/// Stably sort tours with the comparator, if there is one.
pub fn sort_tours(tours: &mut [EnhancedTour<'_>], comparator: Option<TourComparator>) {
    if let Some(comparator) = comparator {
        tours.sort_by(|a, b| comparator.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        allocation::AllocationResult,
        inventory::{NormalizedTour, normalize},
        tickets::LineItem,
        tours::Tour,
    };

    use super::*;

    fn listings() -> Vec<NormalizedTour> {
        ["a", "b", "c", "d"]
            .into_iter()
            .map(|id| normalize(Tour::new(id, id.to_uppercase(), vec![])))
            .collect()
    }

    fn priced<'a>(tour: &'a NormalizedTour, price: i64, bookable: bool) -> EnhancedTour<'a> {
        let line_items = if bookable {
            vec![LineItem::new("ticket", 1)]
        } else {
            vec![]
        };

        EnhancedTour::new(
            tour,
            AllocationResult::new(line_items, price * 100, Decimal::new(price, 0)),
        )
    }

    fn ids<'a>(tours: &[EnhancedTour<'a>]) -> Vec<&'a str> {
        tours.iter().map(EnhancedTour::id).collect()
    }

    #[test]
    fn none_direction_has_no_comparator() {
        assert_eq!(
            make_comparator(SortDirection::None, UnbookablePlacement::Last),
            None
        );
    }

    #[test]
    fn unbookable_last_on_ascending() {
        let listings = listings();
        let [a, b, c, ..] = listings.as_slice() else {
            panic!("expected listings");
        };

        let mut tours = vec![priced(a, 10, true), priced(b, 5, false), priced(c, 20, true)];
        let comparator = make_comparator(SortDirection::Ascending, UnbookablePlacement::Last);

        sort_tours(&mut tours, comparator);

        assert_eq!(ids(&tours), vec!["a", "c", "b"]);
    }

    #[test]
    fn unbookable_last_on_descending() {
        let listings = listings();
        let [a, b, c, ..] = listings.as_slice() else {
            panic!("expected listings");
        };

        let mut tours = vec![priced(b, 50, false), priced(a, 10, true), priced(c, 20, true)];
        let comparator = make_comparator(SortDirection::Descending, UnbookablePlacement::Last);

        sort_tours(&mut tours, comparator);

        assert_eq!(ids(&tours), vec!["c", "a", "b"]);
    }

    #[test]
    fn natural_placement_sorts_by_price_alone() {
        let listings = listings();
        let [a, b, c, ..] = listings.as_slice() else {
            panic!("expected listings");
        };

        let mut tours = vec![priced(a, 10, true), priced(b, 5, false), priced(c, 20, true)];
        let comparator = make_comparator(SortDirection::Ascending, UnbookablePlacement::Natural);

        sort_tours(&mut tours, comparator);

        assert_eq!(ids(&tours), vec!["b", "a", "c"]);
    }

    #[test]
    fn equal_prices_keep_order() {
        let listings = listings();
        let [a, b, c, d] = listings.as_slice() else {
            panic!("expected listings");
        };

        let mut tours = vec![
            priced(a, 10, true),
            priced(b, 10, true),
            priced(c, 5, true),
            priced(d, 10, true),
        ];
        let comparator = make_comparator(SortDirection::Ascending, UnbookablePlacement::Last);

        sort_tours(&mut tours, comparator);

        assert_eq!(ids(&tours), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn missing_comparator_leaves_order() {
        let listings = listings();
        let [a, b, ..] = listings.as_slice() else {
            panic!("expected listings");
        };

        let mut tours = vec![priced(a, 20, true), priced(b, 10, true)];

        sort_tours(&mut tours, None);

        assert_eq!(ids(&tours), vec!["a", "b"]);
    }

    #[test]
    fn parses_directions() -> TestResult {
        assert_eq!("asc".parse::<SortDirection>()?, SortDirection::Ascending);
        assert_eq!("DESC".parse::<SortDirection>()?, SortDirection::Descending);
        assert_eq!("".parse::<SortDirection>()?, SortDirection::None);
        assert!(matches!(
            "sideways".parse::<SortDirection>(),
            Err(SortError::UnknownDirection(_))
        ));

        Ok(())
    }
}
