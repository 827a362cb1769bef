//! Property-based tests for the search filter
//!
//! Tests invariants:
//! - Empty query returns all items
//! - Result is an order-preserving subsequence
//! - Membership matches a case-insensitive substring test

use proptest::prelude::*;

use crate::core::api::{Post, User};
use crate::core::listing::filter_items;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_post() -> impl Strategy<Value = Post> {
    (1u64..10_000, "[a-zA-Z ]{0,24}").prop_map(|(id, title)| Post {
        id,
        title,
        body: String::new(),
        author_id: 1,
    })
}

fn arb_posts() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec(arb_post(), 0..30)
}

fn arb_user() -> impl Strategy<Value = User> {
    (1u64..1_000, "[A-Z][a-z]{1,8}", "[A-Z][a-z]{1,8}").prop_map(|(id, first, last)| User {
        id,
        email: format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
        first_name: first,
        last_name: last,
        avatar_url: String::new(),
    })
}

/// Short queries so that matches actually happen.
fn arb_query() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{1,3}"
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn empty_query_keeps_everything(posts in arb_posts()) {
        let visible = filter_items(&posts, "");
        prop_assert_eq!(visible.len(), posts.len());
        for (kept, original) in visible.iter().zip(posts.iter()) {
            prop_assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn result_is_ordered_subsequence(posts in arb_posts(), query in arb_query()) {
        let visible = filter_items(&posts, &query);
        prop_assert!(visible.len() <= posts.len());

        let mut cursor = posts.iter();
        for kept in &visible {
            prop_assert!(
                cursor.any(|p| std::ptr::eq(p, *kept)),
                "item out of order or not from the input"
            );
        }
    }

    #[test]
    fn membership_is_case_insensitive_substring(posts in arb_posts(), query in arb_query()) {
        let visible = filter_items(&posts, &query);
        let needle = query.to_lowercase();
        for post in &posts {
            let expected = post.title.to_lowercase().contains(&needle);
            let kept = visible.iter().any(|v| std::ptr::eq(*v, post));
            prop_assert_eq!(kept, expected, "title {:?} query {:?}", post.title, query);
        }
    }

    #[test]
    fn query_case_does_not_matter(posts in arb_posts(), query in arb_query()) {
        let lower = filter_items(&posts, &query.to_lowercase());
        let upper = filter_items(&posts, &query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn users_match_on_name_or_email(users in prop::collection::vec(arb_user(), 0..20), query in arb_query()) {
        let visible = filter_items(&users, &query);
        let needle = query.to_lowercase();
        for user in &users {
            let expected = user.full_name().to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle);
            let kept = visible.iter().any(|v| std::ptr::eq(*v, user));
            prop_assert_eq!(kept, expected);
        }
    }

    #[test]
    fn filtering_does_not_modify_input(posts in arb_posts(), query in arb_query()) {
        let before = posts.clone();
        let _ = filter_items(&posts, &query);
        prop_assert_eq!(posts, before);
    }
}
