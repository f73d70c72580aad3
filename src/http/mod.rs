//! HTTP client module
//!
//! Thin wrapper over `reqwest` for fetching remote JSON samples.
//!
//! # Policy
//!
//! - **Single attempt**: one `GET` per call, no retry or backoff
//! - **Verbatim headers**: caller-supplied headers are attached as-is
//! - **No redirects**: 3xx responses surface as status errors unless enabled
//! - **Transport timeouts**: none beyond the transport's own unless configured

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
