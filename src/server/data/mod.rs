//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for accounts,
//! bands, memberships and invitations. Repositories use SeaORM entity models internally
//! and return domain models to keep the data layer separate from business logic.

pub mod account;
pub mod account_band;
pub mod band;
pub mod invitation;

#[cfg(test)]
mod test;
