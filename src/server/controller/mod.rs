//! HTTP request handlers.
//!
//! Controllers translate between DTOs and domain models, call into the service layer,
//! and shape the HTTP response. Protected handlers take a `Principal`, which the
//! authentication middleware places on the request.

pub mod account;
pub mod band;
pub mod invitation;
