//! Calendar reconciliation: ports, merge projection, and the sync
//! coordinator.

pub mod coordinator;
pub mod merge;
pub mod ports;
pub mod sync_session;
