//! HTTP access to the upstream catalog API

mod client;

pub use client::UpstreamClient;
