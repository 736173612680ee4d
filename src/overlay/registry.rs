//! Process-wide shortcut binding registry
//!
//! Two partitions:
//! - **standard**: permanent bindings declared by menu items, keyed by the
//!   canonical shortcut string. Append-only; re-registration is a no-op.
//! - **transient**: session-scoped bindings grouped by namespace, cleared
//!   namespace-at-a-time when the modifier is released.
//!
//! Bindings are plain data (element handle plus label), so nothing is
//! captured across sessions.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::core::{parse_shortcut, ElementId, KeyCombo, Modifier};

/// Registry shared between the page chrome and the session controller.
pub type SharedRegistry = Rc<RefCell<BindingRegistry>>;

/// A permanent binding declared by a menu item
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StandardBinding {
    /// Canonical shortcut string (e.g. `ctrl+p`)
    pub shortcut: String,
    /// Label of the element at registration time
    pub label: String,
    /// Element at registration time (may since have been re-rendered)
    pub element: ElementId,
}

/// A session-scoped binding
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransientBinding {
    pub combo: KeyCombo,
    pub element: ElementId,
}

/// Map from key combination to triggering element
#[derive(Debug, Default)]
pub struct BindingRegistry {
    standard: BTreeMap<String, StandardBinding>,
    transient: BTreeMap<String, BTreeMap<String, TransientBinding>>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry behind the shared handle.
    pub fn shared() -> SharedRegistry {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Registers a standard binding. Returns false, leaving the existing
    /// binding untouched, when the shortcut is already registered.
    pub fn register_standard(&mut self, binding: StandardBinding) -> bool {
        if self.standard.contains_key(&binding.shortcut) {
            return false;
        }
        self.standard.insert(binding.shortcut.clone(), binding);
        true
    }

    pub fn standard(&self, shortcut: &str) -> Option<&StandardBinding> {
        self.standard.get(shortcut)
    }

    pub fn has_standard(&self, shortcut: &str) -> bool {
        self.standard.contains_key(shortcut)
    }

    /// Standard bindings sorted by shortcut.
    pub fn standard_bindings(&self) -> impl Iterator<Item = &StandardBinding> {
        self.standard.values()
    }

    pub fn standard_len(&self) -> usize {
        self.standard.len()
    }

    /// Characters standard shortcuts bind to `modifier` alone (e.g. `P` for
    /// `alt+p` under Alt), uppercased.
    pub fn standard_chars(&self, modifier: Modifier) -> impl Iterator<Item = char> + '_ {
        self.standard.keys().filter_map(move |shortcut| {
            let combo = parse_shortcut(shortcut).ok()?;
            if combo.modifiers != [modifier] {
                return None;
            }
            let mut chars = combo.key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        })
    }

    /// Registers a transient binding under `namespace`.
    ///
    /// A later binding for the same combination in the same namespace
    /// replaces the earlier one.
    pub fn register_transient(&mut self, namespace: &str, binding: TransientBinding) {
        self.transient
            .entry(namespace.to_string())
            .or_default()
            .insert(binding.combo.normalized(), binding);
    }

    pub fn transient(&self, namespace: &str, shortcut: &str) -> Option<&TransientBinding> {
        self.transient.get(namespace)?.get(shortcut)
    }

    /// Removes every transient binding in `namespace`. Returns how many.
    pub fn clear_namespace(&mut self, namespace: &str) -> usize {
        self.transient
            .remove(namespace)
            .map(|bindings| bindings.len())
            .unwrap_or(0)
    }

    /// Transient bindings in `namespace`.
    pub fn transient_in(&self, namespace: &str) -> usize {
        self.transient.get(namespace).map(|b| b.len()).unwrap_or(0)
    }

    /// Transient bindings across all namespaces.
    pub fn transient_len(&self) -> usize {
        self.transient.values().map(|b| b.len()).sum()
    }
}
