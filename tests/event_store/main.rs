//! EventStore Integration Tests
//!
//! Tests for the public store API: appends, preconditions, reads and
//! concurrent writers.

#[path = "../common/mod.rs"]
mod common;

mod appends;
mod reads;
