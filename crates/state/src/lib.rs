//! # dndate-state
//!
//! Persist [`Calendar`](dndate_calendar::Calendar) values as JSON documents
//! and upgrade documents written by older versions. The calendar itself holds
//! no storage; callers load a calendar, mutate it and save it back.

mod error;
mod migrate;
mod store;

pub use error::StateError;
pub use migrate::{SCHEMA_VERSION, migrate};
pub use store::{from_json, load, save, to_json};
