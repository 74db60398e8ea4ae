//! Syntax tests
//!
//! Tests for:
//! - Printing values back to text that parses to the same value
//! - Positions and regions resolved against an origin

pub mod tests_round_trip;
pub mod tests_spatial;
