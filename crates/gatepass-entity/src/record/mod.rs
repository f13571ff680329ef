//! Visitor record entities.

pub mod model;

pub use model::{CheckInRecord, NewCheckInRecord, NewPassRecord, PassRecord, Record};
