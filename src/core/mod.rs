// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/mod.rs
//!
//! Core mnemonic logic
//!
//! This module contains the data structures and algorithms that do not
//! touch the page surface:
//! - Type definitions for key combinations, elements and assignments
//! - Shortcut string parsing and normalisation
//! - Structured label decoration
//! - Conflict-free mnemonic allocation
//!
//! Everything here is pure, so it is unit tested without any page state.

pub mod allocator;
pub mod label;
pub mod parser;
pub mod types;

pub use allocator::{MnemonicAllocator, ReservedCharacterSet, DEFAULT_RESERVED, MNEMONIC_CAP};
pub use label::MarkedLabel;
pub use parser::{parse_shortcut, ShortcutParseError};
pub use types::*;

#[cfg(test)]
mod tests;
