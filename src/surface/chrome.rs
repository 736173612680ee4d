//! Page chrome builder
//!
//! The page widget's action-building API: toolbar buttons, breadcrumbs,
//! sidebar links and the "menu" / "actions" dropdowns. Menu items that
//! declare a keyboard shortcut register it as a standard binding at
//! creation time.

use crate::core::{ElementCategory, ElementId};
use crate::overlay::{SessionController, SharedRegistry, ShortcutBinder};
use crate::surface::PageSurface;
use crate::config::OverlayConfig;

/// Label of the menu dropdown toggle.
pub const MENU_LABEL: &str = "Menu";

/// Destination placeholder used by dropdown items.
pub const PLACEHOLDER_HREF: &str = "#";

/// Builds and owns the page action surface
#[derive(Debug)]
pub struct PageChrome {
    surface: PageSurface,
    binder: ShortcutBinder,
    menu_toggle: ElementId,
}

impl PageChrome {
    /// Creates an empty page whose menu toggle is hidden until the first
    /// menu item is added.
    pub fn new(registry: SharedRegistry) -> Self {
        let mut surface = PageSurface::new();
        let menu_toggle = surface.push(ElementCategory::MenuToggle, MENU_LABEL);
        if let Some(toggle) = surface.get_mut(menu_toggle) {
            toggle.sub_label = Some(MENU_LABEL.to_string());
        }

        Self {
            surface,
            binder: ShortcutBinder::new(registry),
            menu_toggle,
        }
    }

    /// Session controller sharing this page's registry.
    pub fn session_controller(&self, config: OverlayConfig) -> SessionController {
        SessionController::new(config, self.binder.registry().clone())
    }

    pub fn surface(&self) -> &PageSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut PageSurface {
        &mut self.surface
    }

    pub fn menu_toggle(&self) -> ElementId {
        self.menu_toggle
    }

    pub fn add_button(&mut self, label: &str) -> ElementId {
        self.surface.push(ElementCategory::ToolbarButton, label)
    }

    pub fn add_breadcrumb(&mut self, label: &str, href: &str) -> ElementId {
        self.add_link(ElementCategory::Breadcrumb, label, Some(href))
    }

    pub fn add_sidebar_link(&mut self, label: &str, href: Option<&str>, disabled: bool) -> ElementId {
        let id = self.add_link(ElementCategory::SidebarLink, label, href);
        if let Some(element) = self.surface.get_mut(id) {
            element.disabled = disabled;
        }
        id
    }

    pub fn add_form_sidebar_link(&mut self, label: &str, href: Option<&str>) -> ElementId {
        self.add_link(ElementCategory::FormSidebarLink, label, href)
    }

    pub fn add_related_record(&mut self, label: &str, href: Option<&str>) -> ElementId {
        self.add_link(ElementCategory::RelatedRecord, label, href)
    }

    fn add_link(&mut self, category: ElementCategory, label: &str, href: Option<&str>) -> ElementId {
        let id = self.surface.push(category, label);
        if let Some(element) = self.surface.get_mut(id) {
            element.href = href.map(str::to_string);
        }
        id
    }

    /// Adds an item to the "menu" dropdown and shows the menu.
    ///
    /// Returns `None` when an item with the same label already exists. A
    /// declared `shortcut` is registered as a standard binding.
    pub fn add_menu_item(&mut self, label: &str, standard: bool, shortcut: Option<&str>) -> Option<ElementId> {
        let id = self.add_dropdown_item(ElementCategory::MenuItem, label, standard, shortcut)?;
        self.show_menu();

        if let Some(shortcut) = shortcut {
            self.binder.bind_standard(shortcut, label, id);
        }
        Some(id)
    }

    /// Adds an item to the "actions" dropdown and shows it.
    pub fn add_action_item(&mut self, label: &str, standard: bool) -> Option<ElementId> {
        let id = self.add_dropdown_item(ElementCategory::ActionsItem, label, standard, None)?;
        self.show_actions_menu();
        Some(id)
    }

    /// Standard items go to the end of the group; user-action items go
    /// before the first standard item.
    fn add_dropdown_item(
        &mut self,
        category: ElementCategory,
        label: &str,
        standard: bool,
        shortcut: Option<&str>,
    ) -> Option<ElementId> {
        if self.has_dropdown_item(category, label) {
            return None;
        }

        let text = match shortcut {
            Some(shortcut) => format!("{} {}", label, shortcut),
            None => label.to_string(),
        };

        let first_standard = self
            .surface
            .by_category(category)
            .find(|e| e.standard)
            .and_then(|e| self.surface.position(e.id));

        let id = match (standard, first_standard) {
            (false, Some(index)) => self.surface.insert(index, category, &text),
            _ => self.surface.push(category, &text),
        };

        if let Some(element) = self.surface.get_mut(id) {
            element.sub_label = Some(label.to_string());
            element.href = Some(PLACEHOLDER_HREF.to_string());
            element.standard = standard;
            element.shortcut = shortcut.map(str::to_string);
        }
        Some(id)
    }

    fn has_dropdown_item(&self, category: ElementCategory, label: &str) -> bool {
        self.surface
            .by_category(category)
            .any(|e| e.label() == label.trim())
    }

    pub fn show_menu(&mut self) {
        self.surface.menu.shown = true;
    }

    pub fn hide_menu(&mut self) {
        self.surface.menu.shown = false;
    }

    pub fn open_menu(&mut self) {
        self.surface.menu.open = true;
    }

    pub fn close_menu(&mut self) {
        self.surface.menu.open = false;
    }

    pub fn show_actions_menu(&mut self) {
        self.surface.actions.shown = true;
    }

    pub fn hide_actions_menu(&mut self) {
        self.surface.actions.shown = false;
    }

    pub fn open_actions(&mut self) {
        self.surface.actions.open = true;
    }

    pub fn close_actions(&mut self) {
        self.surface.actions.open = false;
    }

    /// Removes every menu item. Standard shortcuts stay registered.
    pub fn clear_menu(&mut self) -> usize {
        self.surface.remove_category(ElementCategory::MenuItem)
    }

    pub fn clear_actions_menu(&mut self) -> usize {
        self.surface.remove_category(ElementCategory::ActionsItem)
    }
}
