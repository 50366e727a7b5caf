//! Reasoning feed library.
//!
//! Renders a feed of AI reasoning posts and their detail pages from
//! pre-generated JSON documents, and serves both pages over HTTP.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod components;
pub mod config;
pub mod constants;
pub mod controller;
pub mod posts;
pub mod source;
pub mod web;
