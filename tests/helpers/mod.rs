//! Shared fixtures and assertions for the integration tests.

pub mod assertions;
pub mod fixtures;
