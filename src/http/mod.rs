//! HTTP gateway module
//!
//! Provides the [`Gateway`] seam used by the paginated fetcher and its
//! reqwest-backed implementation.
//!
//! # Features
//!
//! - **Single round trip**: one request per call, no retry
//! - **Cloud Controller errors**: non-2xx bodies are parsed into `Error::Api`
//! - **Warnings**: `X-Cf-Warnings` headers are collected per client

mod client;

pub use client::{Gateway, HttpClient, HttpClientConfig, HttpClientConfigBuilder};

#[cfg(test)]
mod tests;
