//! Allocation
//!
//! Decides whether a tour can take a party and books the cheapest tickets that
//! seat it. Tickets within a category are interchangeable seats with additive
//! cost, so filling from the cheapest ticket upwards is optimal.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::{
    currency::{CurrencyInfo, minor_to_major},
    guests::{GuestCategory, GuestRequest},
    inventory::NormalizedTour,
    tickets::{LineItem, Ticket},
};

/// Rule deciding whether a tour can take a party.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EligibilityPolicy {
    /// Every category needs enough seats.
    CategorySeats,

    /// Every category needs enough seats, and the party size must fall within the
    /// tour's `minPax`/`maxPax`/`seats` bounds where the tour sets them.
    #[default]
    PartyBounds,
}

/// Check whether a tour can take the requested party under the given policy.
pub fn can_accommodate(
    tour: &NormalizedTour,
    request: &GuestRequest,
    policy: EligibilityPolicy,
) -> bool {
    let seats_ok = GuestCategory::ALL
        .into_iter()
        .all(|category| *request.get(category) <= tour.seats_for(category));

    match policy {
        EligibilityPolicy::CategorySeats => seats_ok,
        EligibilityPolicy::PartyBounds => seats_ok && within_party_bounds(tour, request.total()),
    }
}

fn within_party_bounds(tour: &NormalizedTour, guests: u32) -> bool {
    let listing = tour.tour();

    listing.min_pax.is_none_or(|min| guests >= min)
        && listing.max_pax.is_none_or(|max| guests <= max)
        && listing.seats.is_none_or(|seats| guests <= seats)
}

/// Tickets chosen for a party and what they cost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationResult {
    line_items: SmallVec<[LineItem; 4]>,
    total_minor: i64,
    price: Decimal,
}

impl AllocationResult {
    /// Creates an allocation from its parts.
    pub fn new(
        line_items: impl IntoIterator<Item = LineItem>,
        total_minor: i64,
        price: Decimal,
    ) -> Self {
        Self {
            line_items: line_items.into_iter().collect(),
            total_minor,
            price,
        }
    }

    /// An allocation with nothing booked.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tickets to book, cheapest first within each category.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Total cost in minor currency units.
    pub fn total_minor(&self) -> i64 {
        self.total_minor
    }

    /// Total cost in major currency units.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Check if there is anything to book.
    pub fn has_tickets(&self) -> bool {
        !self.line_items.is_empty()
    }
}

/// Book the cheapest tickets covering the request.
///
/// Each category is filled from its cheapest ticket upwards. Category prices are
/// summed in minor units and converted to major units once at the end.
///
/// The tour must already be known to accommodate the request (see
/// [`can_accommodate`]). A category with too few seats is under-allocated, not
/// rejected.
pub fn allocate_cheapest(
    tour: &NormalizedTour,
    request: &GuestRequest,
    minor_unit_offset: NonZeroU32,
) -> AllocationResult {
    let mut line_items = SmallVec::new();

    let total_minor = GuestCategory::ALL
        .into_iter()
        .fold(0i64, |acc, category| {
            let category_price = allocate_category(
                tour.tickets_for(category),
                *request.get(category),
                &mut line_items,
            );

            acc.saturating_add(category_price)
        });

    AllocationResult {
        line_items,
        total_minor,
        price: minor_to_major(total_minor, minor_unit_offset),
    }
}

fn allocate_category(
    tickets: &[Ticket],
    count: u32,
    line_items: &mut SmallVec<[LineItem; 4]>,
) -> i64 {
    let mut remaining = count;
    let mut price = 0i64;

    for ticket in tickets {
        if remaining == 0 {
            break;
        }

        let Some(capacity) = ticket.capacity() else {
            continue;
        };

        let units = remaining.min(capacity);

        line_items.push(LineItem::new(ticket.id.clone(), units));
        price = price.saturating_add(ticket.price.saturating_mul(i64::from(units)));
        remaining -= units;
    }

    price
}

/// A normalized tour together with its allocation for the current party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancedTour<'a> {
    tour: &'a NormalizedTour,
    allocation: AllocationResult,
}

impl<'a> EnhancedTour<'a> {
    /// Pairs a tour with an allocation.
    pub fn new(tour: &'a NormalizedTour, allocation: AllocationResult) -> Self {
        Self { tour, allocation }
    }

    /// The normalized tour.
    pub fn tour(&self) -> &'a NormalizedTour {
        self.tour
    }

    /// Tour identifier.
    pub fn id(&self) -> &'a str {
        self.tour.id()
    }

    /// The allocation for the current party.
    pub fn allocation(&self) -> &AllocationResult {
        &self.allocation
    }

    /// Tickets to book, empty when the tour cannot take the party.
    pub fn tickets_to_book(&self) -> &[LineItem] {
        self.allocation.line_items()
    }

    /// Total price in major currency units.
    pub fn price(&self) -> Decimal {
        self.allocation.price()
    }

    /// Check if the tour can be booked for the current party.
    pub fn is_bookable(&self) -> bool {
        self.allocation.has_tickets()
    }
}

/// Compute a tour's allocation for a party.
///
/// Tours that cannot take the party get an empty allocation with zero price.
pub fn enhance<'a>(
    tour: &'a NormalizedTour,
    request: &GuestRequest,
    currency: &CurrencyInfo,
    policy: EligibilityPolicy,
) -> EnhancedTour<'a> {
    let allocation = if can_accommodate(tour, request, policy) {
        allocate_cheapest(tour, request, currency.minor_unit_offset)
    } else {
        AllocationResult::empty()
    };

    EnhancedTour::new(tour, allocation)
}

/// Compute allocations for every tour, keeping provider order.
pub fn enhance_all<'a>(
    tours: &'a [NormalizedTour],
    request: &GuestRequest,
    currency: &CurrencyInfo,
    policy: EligibilityPolicy,
) -> Vec<EnhancedTour<'a>> {
    tours
        .iter()
        .map(|tour| enhance(tour, request, currency, policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{inventory::normalize, tours::Tour};

    use super::*;

    fn cents() -> NonZeroU32 {
        NonZeroU32::new(100).unwrap_or(NonZeroU32::MIN)
    }

    fn tour(tickets: Vec<Ticket>) -> NormalizedTour {
        normalize(Tour::new("t", "Tour", tickets))
    }

    #[test]
    fn empty_request_books_nothing() {
        let tour = tour(vec![
            Ticket::new("a", GuestCategory::Adult, 2, 1000),
            Ticket::new("c", GuestCategory::Child, 1, 500),
        ]);

        let result = allocate_cheapest(&tour, &GuestRequest::default(), cents());

        assert!(result.line_items().is_empty());
        assert_eq!(result.total_minor(), 0);
        assert_eq!(result.price(), Decimal::ZERO);
    }

    #[test]
    fn fills_cheapest_ticket_first() {
        let tour = tour(vec![
            Ticket::new("nine", GuestCategory::Adult, 2, 9),
            Ticket::new("five", GuestCategory::Adult, 2, 5),
            Ticket::new("seven", GuestCategory::Adult, 2, 7),
        ]);

        let result = allocate_cheapest(&tour, &GuestRequest::new(3, 0, 0, 0), NonZeroU32::MIN);

        assert_eq!(
            result.line_items(),
            &[LineItem::new("five", 2), LineItem::new("seven", 1)]
        );
        assert_eq!(result.total_minor(), 17);
    }

    #[test]
    fn converts_to_major_units_once() {
        let tour = tour(vec![
            Ticket::new("a", GuestCategory::Adult, 1, 333),
            Ticket::new("c", GuestCategory::Child, 1, 333),
            Ticket::new("s", GuestCategory::Senior, 1, 1034),
        ]);

        let result = allocate_cheapest(&tour, &GuestRequest::new(1, 1, 1, 0), cents());

        assert_eq!(result.total_minor(), 1700);
        assert_eq!(result.price(), Decimal::new(17, 0));
    }

    #[test]
    fn under_supplied_category_is_partially_allocated() {
        let tour = tour(vec![Ticket::new("a", GuestCategory::Adult, 1, 100)]);

        let result = allocate_cheapest(&tour, &GuestRequest::new(3, 0, 0, 0), cents());

        assert_eq!(result.line_items(), &[LineItem::new("a", 1)]);
        assert_eq!(result.total_minor(), 100);
    }

    #[test]
    fn category_seats_boundary() {
        let tour = tour(vec![Ticket::new("a", GuestCategory::Adult, 2, 1000)]);

        let policy = EligibilityPolicy::CategorySeats;

        assert!(can_accommodate(&tour, &GuestRequest::new(2, 0, 0, 0), policy));
        assert!(!can_accommodate(&tour, &GuestRequest::new(3, 0, 0, 0), policy));
    }

    #[test]
    fn ineligible_tour_gets_empty_allocation() {
        let tour = tour(vec![Ticket::new("a", GuestCategory::Adult, 2, 1000)]);
        let currency = CurrencyInfo::default();

        let policy = EligibilityPolicy::default();

        let rejected = enhance(&tour, &GuestRequest::new(3, 0, 0, 0), &currency, policy);
        let accepted = enhance(&tour, &GuestRequest::new(2, 0, 0, 0), &currency, policy);

        assert!(!rejected.is_bookable());
        assert!(rejected.tickets_to_book().is_empty());
        assert_eq!(rejected.price(), Decimal::ZERO);
        assert!(accepted.is_bookable());
        assert_eq!(accepted.price(), Decimal::new(20, 0));
    }

    #[test]
    fn party_bounds_apply_only_when_present() {
        let tickets = vec![
            Ticket::new("a", GuestCategory::Adult, 10, 1000),
            Ticket::new("c", GuestCategory::Child, 10, 500),
        ];
        let unbounded = normalize(Tour::new("u", "Unbounded", tickets.clone()));
        let bounded =
            normalize(Tour::new("b", "Bounded", tickets).with_bounds(Some(2), Some(4), Some(3)));

        let one = GuestRequest::new(1, 0, 0, 0);
        let three = GuestRequest::new(2, 1, 0, 0);
        let four = GuestRequest::new(2, 2, 0, 0);

        assert!(can_accommodate(&unbounded, &one, EligibilityPolicy::PartyBounds));
        assert!(can_accommodate(&unbounded, &four, EligibilityPolicy::PartyBounds));

        assert!(!can_accommodate(&bounded, &one, EligibilityPolicy::PartyBounds));
        assert!(can_accommodate(&bounded, &three, EligibilityPolicy::PartyBounds));
        assert!(!can_accommodate(&bounded, &four, EligibilityPolicy::PartyBounds));

        assert!(can_accommodate(&bounded, &one, EligibilityPolicy::CategorySeats));
        assert!(can_accommodate(&bounded, &four, EligibilityPolicy::CategorySeats));
    }

    #[test]
    fn party_bounds_still_require_category_seats() {
        let tour = normalize(
            Tour::new("t", "Tour", vec![Ticket::new("a", GuestCategory::Adult, 1, 100)])
                .with_bounds(Some(0), Some(8), Some(8)),
        );

        let child = GuestRequest::new(0, 1, 0, 0);

        assert!(!can_accommodate(&tour, &child, EligibilityPolicy::PartyBounds));
    }

    #[test]
    fn enhance_all_keeps_provider_order() {
        let tours = vec![
            normalize(Tour::new(
                "x",
                "X",
                vec![Ticket::new("a", GuestCategory::Adult, 1, 300)],
            )),
            normalize(Tour::new(
                "y",
                "Y",
                vec![Ticket::new("b", GuestCategory::Adult, 1, 100)],
            )),
        ];

        let enhanced = enhance_all(
            &tours,
            &GuestRequest::new(1, 0, 0, 0),
            &CurrencyInfo::default(),
            EligibilityPolicy::default(),
        );

        let ids: Vec<&str> = enhanced.iter().map(EnhancedTour::id).collect();

        assert_eq!(ids, vec!["x", "y"]);
    }
}
