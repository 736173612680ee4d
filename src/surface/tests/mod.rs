//! Surface tests
//!
//! - Candidate collection priority and filtering
//! - Underline mark/unmark round trips
//! - Page chrome dropdown behaviour and TOML layouts

#[cfg(test)]
mod chrome_tests;
#[cfg(test)]
mod collector_tests;
#[cfg(test)]
mod render_tests;
