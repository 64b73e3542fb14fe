//! SeaORM entities for the rider schema.
//!
//! Accounts join bands through `account_band` memberships. Invitations carry a short
//! random code that grants a non-admin membership in their band until they expire or
//! are culled.

pub mod prelude;

pub mod account;
pub mod account_band;
pub mod band;
pub mod invitation;
