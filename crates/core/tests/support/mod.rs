//! Shared test support utilities for core integration tests.

pub mod calendar;
