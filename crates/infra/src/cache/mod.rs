//! Local calendar cache

mod store;

pub use store::InMemoryCacheStore;
