//! Plumbing shared by nikufam services: configuration loading, tracing setup,
//! HTTP middleware layers, health probes and serde helpers.
//!
//! Nothing in here knows about posts, users or access codes.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
