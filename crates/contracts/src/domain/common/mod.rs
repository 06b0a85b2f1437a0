//! Common types shared by the resource payloads

pub mod organization;
pub mod person;
pub mod reference;

// Re-exports
pub use organization::{branch_choices, branch_locations, destination_branches, Branch, Choice, Company, Location};
pub use person::{user_name, Attachment, FamilyRoom, GuestRef, ImagePaths, RemovalInfo, RoomRef, User};
pub use reference::{populated, referenced_id, Document, Reference};
