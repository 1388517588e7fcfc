//! Domain data types

pub mod calendar;
pub mod session;
