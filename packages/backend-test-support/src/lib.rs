//! Backend test support utilities
//!
//! Unified logging initialization so every test binary gets the same
//! subscriber exactly once.

pub mod logging;
