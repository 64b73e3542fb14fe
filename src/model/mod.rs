//! Data transfer objects exchanged with HTTP clients.
//!
//! These types define the JSON wire format only. The backend converts them to and from
//! its domain models at the controller boundary.

pub mod account;
pub mod api;
pub mod band;
pub mod invitation;
