//! HTTP client support

mod client;

pub use client::{HttpClient, HttpClientBuilder};
