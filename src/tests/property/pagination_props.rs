//! Property-based tests for the pager
//!
//! Tests invariants:
//! - Page stays in range under any sequence of moves
//! - `has_previous`/`has_next` agree with the page number

use proptest::prelude::*;

use crate::core::listing::Pagination;

#[derive(Debug, Clone)]
enum Move {
    Previous,
    Next,
    GoTo(u32),
    Total(u32),
}

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        Just(Move::Previous),
        Just(Move::Next),
        (0u32..50).prop_map(Move::GoTo),
        (0u32..20).prop_map(Move::Total),
    ]
}

fn in_range(p: Pagination) -> bool {
    p.page() >= 1 && p.page() <= p.total_pages().max(1)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn new_clamps_into_range(page in 0u32..100, total in 0u32..20) {
        let p = Pagination::new(page, total);
        prop_assert!(in_range(p));
        if (1..=total).contains(&page) {
            prop_assert_eq!(p.page(), page);
        }
    }

    #[test]
    fn page_stays_in_range_under_any_moves(
        total in 0u32..20,
        moves in prop::collection::vec(arb_move(), 0..40),
    ) {
        let mut p = Pagination::new(1, total);
        for m in moves {
            p = match m {
                Move::Previous => p.previous(),
                Move::Next => p.next(),
                Move::GoTo(page) => p.go_to(page),
                Move::Total(total) => Pagination::new(p.page(), total),
            };
            prop_assert!(in_range(p), "{:?} out of range", p);
        }
    }

    #[test]
    fn boundary_flags_match_page(page in 1u32..30, total in 0u32..30) {
        let p = Pagination::new(page, total);
        prop_assert_eq!(p.has_previous(), p.page() > 1);
        prop_assert_eq!(p.has_next(), p.page() < p.last_page());
        if !p.has_next() {
            prop_assert_eq!(p.next(), p);
        }
        if !p.has_previous() {
            prop_assert_eq!(p.previous(), p);
        }
    }

    #[test]
    fn next_then_previous_round_trips(page in 1u32..30, total in 2u32..30) {
        let p = Pagination::new(page, total);
        prop_assume!(p.has_next());
        prop_assert_eq!(p.next().previous(), p);
    }
}
