//! Domain models and operation parameters used by the service and data layers.

pub mod account;
pub mod band;
pub mod invitation;
