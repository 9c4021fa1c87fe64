//! HTTP client layer — `TrackerHttp`, one method per remote endpoint.

pub mod client;

pub use client::TrackerHttp;
