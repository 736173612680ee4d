//! Mnemonic overlay: bindings and the press/release session
//!
//! # Module Structure
//!
//! ```text
//! overlay/
//! ├── mod.rs          // This file - exports
//! ├── registry.rs     // Standard + transient binding partitions
//! ├── binder.rs       // Registering and firing shortcuts
//! └── session.rs      // Modifier-key state machine
//! ```

pub mod binder;
pub mod registry;
pub mod session;

pub use binder::{shortcut_action, ShortcutBinder};
pub use registry::{BindingRegistry, SharedRegistry, StandardBinding, TransientBinding};
pub use session::{EventResponse, Key, KeyEvent, KeyPhase, OverlayState, SessionController};

#[cfg(test)]
mod tests;
