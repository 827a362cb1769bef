/// dashtui - terminal dashboard over public demo REST APIs.
///
/// Core library providing remote list fetching, client-side search,
/// server-side pagination and the views that drive them.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
