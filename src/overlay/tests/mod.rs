//! Overlay tests
//!
//! - Standard and transient binding behaviour
//! - Press/release lifecycle, re-entrancy and leak checks
