//! Internal modules for the bracket client.
//!
//! This library provides the HTTP match source, configuration and
//! renderers used by the bracket_client binary.

pub mod api_client;
pub mod config;
pub mod render;
