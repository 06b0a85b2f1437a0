//! Mutation actions: one request/response round trip each.
//!
//! Success invalidates the affected queries and resets the caller's
//! selection; failure yields a destructive notification and changes nothing.

pub mod actions;
pub mod error;
pub mod kind;
pub mod notification;
pub mod pending;
pub mod signature;

pub use error::MutationError;
pub use kind::MutationKind;
pub use notification::{Notification, Variant};
pub use pending::{PendingGuard, PendingToken};
pub use signature::{decode_data_url, SignatureRole};
