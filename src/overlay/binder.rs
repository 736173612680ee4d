//! Shortcut binding and firing
//!
//! Registers standard and transient bindings in the shared
//! [`BindingRegistry`](super::BindingRegistry) and performs the shortcut
//! action when one fires: navigate to a real destination, otherwise click.

use tracing::{debug, info};

use crate::core::parser::canonical_shortcut;
use crate::core::{ElementCategory, ElementId, KeyCombo, MnemonicAssignment};
use crate::overlay::registry::{SharedRegistry, StandardBinding, TransientBinding};
use crate::surface::{Activation, PageSurface};

/// Binds and fires shortcuts against the shared registry
#[derive(Clone, Debug)]
pub struct ShortcutBinder {
    registry: SharedRegistry,
}

impl ShortcutBinder {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// The registry this binder writes to.
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Registers a permanent binding for `combination` on `element`.
    ///
    /// The combination is normalised (whitespace stripped, lower-cased).
    /// Returns false when it was already registered; the first registration
    /// wins.
    pub fn bind_standard(&self, combination: &str, label: &str, element: ElementId) -> bool {
        let shortcut = canonical_shortcut(combination);
        let added = self.registry.borrow_mut().register_standard(StandardBinding {
            shortcut: shortcut.clone(),
            label: label.trim().to_string(),
            element,
        });

        if added {
            info!(shortcut = %shortcut, label, "standard shortcut registered");
        } else {
            debug!(shortcut = %shortcut, "standard shortcut already registered");
        }
        added
    }

    /// Registers a session-scoped binding under `namespace`.
    pub fn bind_transient(&self, combo: &KeyCombo, element: ElementId, namespace: &str) {
        self.registry.borrow_mut().register_transient(
            namespace,
            TransientBinding {
                combo: combo.clone(),
                element,
            },
        );
    }

    /// Binds every assignment of a session under `namespace`.
    pub fn bind_assignments(&self, assignments: &[MnemonicAssignment], namespace: &str) {
        for assignment in assignments {
            self.bind_transient(&assignment.combo, assignment.element, namespace);
        }
    }

    /// Removes all bindings in `namespace` in one operation.
    pub fn unbind_transient_namespace(&self, namespace: &str) -> usize {
        self.registry.borrow_mut().clear_namespace(namespace)
    }

    /// Fires the standard binding for `combo`, if one is registered.
    ///
    /// The target is looked up again by label among the dropdown menu
    /// items, because the menu may have been re-rendered since binding.
    /// Falls back to the original element while it still exists.
    pub fn fire_standard(&self, surface: &mut PageSurface, combo: &KeyCombo) -> Option<Activation> {
        let binding = self.registry.borrow().standard(&combo.normalized()).cloned()?;

        let target = surface
            .by_category(ElementCategory::MenuItem)
            .filter(|e| e.label() == binding.label)
            .last()
            .map(|e| e.id)
            .or_else(|| surface.get(binding.element).map(|e| e.id));

        let Some(target) = target else {
            debug!(shortcut = %binding.shortcut, "standard shortcut target is gone");
            return None;
        };

        debug!(shortcut = %binding.shortcut, element = %target, "standard shortcut fired");
        shortcut_action(surface, target)
    }

    /// Fires the transient binding for `combo` in `namespace`, if any.
    pub fn fire_transient(
        &self,
        surface: &mut PageSurface,
        namespace: &str,
        combo: &KeyCombo,
    ) -> Option<Activation> {
        let element = self
            .registry
            .borrow()
            .transient(namespace, &combo.normalized())
            .map(|b| b.element)?;

        debug!(combo = %combo, element = %element, "mnemonic fired");
        shortcut_action(surface, element)
    }
}

/// Navigates to the element's destination when it has a real one,
/// otherwise clicks it. Returns `None` when the element no longer exists.
pub fn shortcut_action(surface: &mut PageSurface, element: ElementId) -> Option<Activation> {
    let href = surface
        .get(element)?
        .navigable_href()
        .map(str::to_string);

    match href {
        Some(href) => Some(surface.navigate(&href)),
        None => surface.activate(element),
    }
}
