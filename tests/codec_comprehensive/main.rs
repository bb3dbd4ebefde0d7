//! Codec Test Suite
//!
//! End-to-end tests for the problem record XML codec.
//!
//! ## Modules
//!
//! - `round_trip`: decode(encode(r)) == r over generated records
//! - `documents`: behaviour on hand-written documents
//! - `configuration`: options, presets and the sentinel collision
//! - `interop`: JSON form, streams and shared use across threads

#[path = "../common/mod.rs"]
mod common;

mod configuration;
mod documents;
mod interop;
mod round_trip;
