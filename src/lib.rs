#![no_std]

//! A bidirectional decoder for magnetic stripe card reader bitstreams.
//!
//! Magstripe turns the bits sampled from a reader's data line into the ASCII
//! text of a single track. It locates the start sentinel, frames characters,
//! verifies per-character parity and the longitudinal redundancy check, and
//! retries with the bits reversed when a card was swiped backward.
//!
//! Most users should begin with [`avec::CardReader`], or with the decode
//! functions in the [`avec`] module for bits captured ahead of time. If these
//! prove insufficient, consider driving the finite-state machine described in
//! the [`sans`] module directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

pub mod avec;
pub mod sans;
