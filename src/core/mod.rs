//! Core library components.
//!
//! The transport client, the resource lifecycle engine, data sources, and
//! the provider registry that ties them together.

pub mod client;
pub mod config;
pub mod constants;
pub mod data_source;
pub mod provider;
pub mod resource;
pub mod schema;
pub mod types;
