//! src/core/types.rs
//!
//! Core type definitions for the mnemonic overlay
//!
//! This module defines the fundamental types used throughout the crate:
//! - `Modifier`: Keyboard modifier keys (ALT, CTRL, SHIFT, META)
//! - `KeyCombo`: A combination of modifiers and a key
//! - `ElementId` / `ElementCategory`: Handles onto the page action surface
//! - `MnemonicAssignment`: One element paired with its chosen character
//!
//! Key combinations are normalised on construction so that equal shortcuts
//! hash equally regardless of modifier order or letter case.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyboard modifier keys
///
/// Parsed from several spellings (e.g., CONTROL → Ctrl, CMD → Meta).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Modifier {
    /// Control key
    Ctrl,
    /// Alt/Option key
    Alt,
    /// Shift key
    Shift,
    /// Meta/Command/Super key
    Meta,
}

impl Modifier {
    /// Lower-case name used in normalised shortcut strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Ctrl => "ctrl",
            Modifier::Alt => "alt",
            Modifier::Shift => "shift",
            Modifier::Meta => "meta",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Ctrl => write!(f, "CTRL"),
            Modifier::Alt => write!(f, "ALT"),
            Modifier::Shift => write!(f, "SHIFT"),
            Modifier::Meta => write!(f, "META"),
        }
    }
}

/// A combination of modifier keys and a base key
///
/// Represents a complete key combination like ALT+A or CTRL+SHIFT+P.
///
/// # Hash Implementation
/// Modifiers are kept **sorted** and deduplicated, and the key is stored
/// in uppercase, so CTRL+SHIFT+p and SHIFT+CTRL+P are the same combo.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct KeyCombo {
    /// Modifier keys, sorted and unique
    pub modifiers: Vec<Modifier>,

    /// Base key name (e.g., "A", "ENTER", "F1"), always uppercase
    pub key: String,
}

impl KeyCombo {
    /// Create a new KeyCombo with normalised data
    pub fn new(mut modifiers: Vec<Modifier>, key: &str) -> Self {
        modifiers.sort();
        modifiers.dedup();

        Self {
            modifiers,
            key: key.to_uppercase(),
        }
    }

    /// Combination of a single modifier and a character key.
    pub fn with_char(modifier: Modifier, key: char) -> Self {
        Self::new(vec![modifier], &key.to_string())
    }

    /// Lower-case, space-free form used as the registry key (e.g. `alt+a`).
    pub fn normalized(&self) -> String {
        let mut parts: Vec<&str> = self.modifiers.iter().map(Modifier::as_str).collect();
        let key = self.key.to_lowercase();
        parts.push(&key);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            let mods = self
                .modifiers
                .iter()
                .map(|m| format!("{}", m))
                .collect::<Vec<_>>()
                .join("+");
            write!(f, "{}+{}", mods, self.key)
        }
    }
}

/// Stable handle onto one element of the page surface.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which part of the page chrome an actionable element belongs to
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ElementCategory {
    /// Button in the page toolbar
    ToolbarButton,
    /// Link in the navbar breadcrumbs
    Breadcrumb,
    /// Link in the list-view sidebar
    SidebarLink,
    /// Link in the form-view sidebar
    FormSidebarLink,
    /// Related-record link on the form dashboard
    RelatedRecord,
    /// Toggle button of the overflow "menu" dropdown
    MenuToggle,
    /// Item in the "menu" dropdown
    MenuItem,
    /// Item in the "actions" dropdown
    ActionsItem,
}

impl ElementCategory {
    /// True for items living inside a dropdown group.
    pub fn is_dropdown_item(&self) -> bool {
        matches!(self, ElementCategory::MenuItem | ElementCategory::ActionsItem)
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementCategory::ToolbarButton => "button",
            ElementCategory::Breadcrumb => "breadcrumb",
            ElementCategory::SidebarLink => "sidebar",
            ElementCategory::FormSidebarLink => "form-sidebar",
            ElementCategory::RelatedRecord => "related",
            ElementCategory::MenuToggle => "menu",
            ElementCategory::MenuItem => "menu-item",
            ElementCategory::ActionsItem => "actions-item",
        };
        write!(f, "{}", name)
    }
}

/// Snapshot of one visible, actionable element
///
/// The surface owns the element; this is what the collector hands to the
/// allocator for a single session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActionElement {
    /// Handle onto the underlying element
    pub id: ElementId,

    /// Owning category
    pub category: ElementCategory,

    /// Visible label (sub-label when present, else full text), trimmed
    pub label: String,
}

/// One candidate paired with its chosen mnemonic character
///
/// Created when the modifier is pressed, dropped on release.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MnemonicAssignment {
    /// Element receiving the mnemonic
    pub element: ElementId,

    /// Category of that element when it was collected
    pub category: ElementCategory,

    /// Trimmed label the character was drawn from
    pub label: String,

    /// Char (not byte) index of the chosen character inside `label`
    pub char_index: usize,

    /// The chosen character, as it appears in the label
    pub character: char,

    /// Modifier + character
    pub combo: KeyCombo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_display() {
        assert_eq!(format!("{}", Modifier::Alt), "ALT");
        assert_eq!(format!("{}", Modifier::Ctrl), "CTRL");
    }

    #[test]
    fn test_key_combo_normalization() {
        let combo1 = KeyCombo::new(vec![Modifier::Shift, Modifier::Ctrl], "p");
        let combo2 = KeyCombo::new(vec![Modifier::Ctrl, Modifier::Shift, Modifier::Ctrl], "P");

        assert_eq!(combo1, combo2);
        assert_eq!(combo1.normalized(), "ctrl+shift+p");
    }

    #[test]
    fn test_with_char_normalized() {
        let combo = KeyCombo::with_char(Modifier::Alt, 'a');
        assert_eq!(combo.normalized(), "alt+a");
        assert_eq!(format!("{}", combo), "ALT+A");
    }

    #[test]
    fn test_dropdown_item_categories() {
        assert!(ElementCategory::MenuItem.is_dropdown_item());
        assert!(ElementCategory::ActionsItem.is_dropdown_item());
        assert!(!ElementCategory::MenuToggle.is_dropdown_item());
    }
}
