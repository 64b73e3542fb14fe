mod account;
mod account_band;
mod band;
mod invitation;
