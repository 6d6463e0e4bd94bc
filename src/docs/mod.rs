//! Document tree queries.
//!
//! Blocking helpers over directories the resolver has already approved:
//! directory listings, the search walk, and README discovery for the CLI.
//! Callers run them on the blocking pool.

pub mod listing;
pub mod readme;
pub mod search;

pub use listing::{read_listing, ListingEntry};
pub use readme::find_readme;
pub use search::{collect_files, filter_files, SearchResults};
