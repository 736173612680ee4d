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

//! Page Mnemonics
//!
//! A modifier-held mnemonic shortcut overlay for a page's action surface.
//! While the modifier (Alt by default) is held, every visible button,
//! breadcrumb, sidebar link or dropdown item gets a unique underlined
//! character from its own label and a transient shortcut that triggers it.
//! Releasing the modifier removes every underline and binding.
//!
//! # Features
//!
//! - **Conflict-free allocation:** Mnemonics never reuse a reserved or
//!   already-assigned character
//! - **Exact teardown:** Unmarking restores the original label markup and
//!   every transient binding is cleared on release
//! - **Standard shortcuts:** Menu items can declare permanent shortcuts,
//!   registered at most once per page
//!
//! # Architecture
//!
//! - **`core`:** Pure logic (types, shortcut parser, labels, allocator)
//! - **`surface`:** Page action surface, collector and renderer
//! - **`overlay`:** Binding registry, binder and session state machine
//! - **`config`:** TOML overlay settings
//!
//! # Examples
//!
//! ## Running one overlay session
//!
//! ```
//! use page_mnemonics::config::OverlayConfig;
//! use page_mnemonics::overlay::{BindingRegistry, Key, KeyEvent};
//! use page_mnemonics::surface::PageChrome;
//! use page_mnemonics::Modifier;
//!
//! let mut chrome = PageChrome::new(BindingRegistry::shared());
//! chrome.add_button("Save");
//! chrome.add_breadcrumb("Home", "/app");
//!
//! let mut controller = chrome.session_controller(OverlayConfig::default());
//! controller.handle_key(chrome.surface_mut(), &KeyEvent::down(Key::Modifier(Modifier::Alt)));
//! assert_eq!(controller.assignments().len(), 2);
//!
//! controller.handle_key(chrome.surface_mut(), &KeyEvent::up(Key::Modifier(Modifier::Alt)));
//! assert!(controller.assignments().is_empty());
//! ```

pub mod config;
pub mod core;
pub mod overlay;
pub mod surface;

// Re-export commonly used types for convenience
pub use crate::core::{ElementId, KeyCombo, MnemonicAssignment, Modifier};
