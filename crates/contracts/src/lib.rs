//! Shared types for the care-facility dashboard.
//!
//! `domain` holds the raw API payloads and the flat display records built
//! from them; `shared` holds the list machinery (search, filters, sort,
//! pagination) and small helpers used by every list view.

pub mod domain;
pub mod shared;
