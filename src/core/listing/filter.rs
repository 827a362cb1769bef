//! Case-insensitive substring filtering over loaded items.

use std::borrow::Cow;

use crate::core::api::{Post, User};

/// Items that expose one or more text fields to the search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// `needle` must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Searchable for Post {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.title.as_str())]
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Owned(self.full_name()), Cow::Borrowed(self.email.as_str())]
    }
}

/// Items whose search fields contain `query`, ignoring case.
///
/// An empty query yields every item. Order is preserved and the input is
/// never modified.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect()
}
