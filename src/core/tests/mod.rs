//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Mnemonic allocation tests
//! - Shortcut parser tests
