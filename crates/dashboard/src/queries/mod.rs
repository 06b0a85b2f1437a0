//! Remote data: query keys, the snapshot cache and fetching through it

pub mod cache;
pub mod fetch;
pub mod keys;

pub use cache::{FetchTicket, QueryCache};
pub use fetch::{fetch, fetch_records};
pub use keys::QueryKey;
