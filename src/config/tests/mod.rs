//! Configuration tests

#[cfg(test)]
mod config_tests;
