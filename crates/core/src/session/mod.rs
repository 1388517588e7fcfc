//! Session status transitions

pub mod service;

pub use service::SessionService;
