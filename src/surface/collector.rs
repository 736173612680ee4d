//! Candidate collection
//!
//! Reads the visible action surface in a fixed priority order. An open
//! "menu" dropdown supersedes everything else, then an open "actions"
//! dropdown; otherwise toolbar buttons, breadcrumbs and sidebar links are
//! merged in that order.

use crate::core::{ActionElement, ElementCategory};
use crate::surface::{Element, PageSurface};

/// Produces the ordered candidate list for a session
#[derive(Clone, Copy, Debug, Default)]
pub struct ElementCollector;

impl ElementCollector {
    pub fn new() -> Self {
        Self
    }

    /// Collects candidates. Pure read; the order is stable for an
    /// unchanged surface.
    pub fn collect(&self, surface: &PageSurface) -> Vec<ActionElement> {
        let menu_items = visible(surface, ElementCategory::MenuItem);
        if !menu_items.is_empty() {
            let mut candidates = visible(surface, ElementCategory::MenuToggle);
            candidates.extend(menu_items);
            return candidates;
        }

        let action_items = visible(surface, ElementCategory::ActionsItem);
        if !action_items.is_empty() {
            return action_items;
        }

        let mut candidates = visible(surface, ElementCategory::ToolbarButton);
        candidates.extend(visible(surface, ElementCategory::Breadcrumb));
        candidates.extend(
            visible(surface, ElementCategory::SidebarLink)
                .into_iter()
                .filter(|c| surface.get(c.id).is_some_and(|e| !e.disabled)),
        );

        let form_sidebar = visible(surface, ElementCategory::FormSidebarLink);
        if !form_sidebar.is_empty() {
            candidates.extend(form_sidebar);
            candidates.extend(visible(surface, ElementCategory::RelatedRecord));
        }

        candidates
    }
}

/// Visible elements of one category, in document order
fn visible(surface: &PageSurface, category: ElementCategory) -> Vec<ActionElement> {
    surface
        .by_category(category)
        .filter(|e| surface.is_visible(e.id))
        .map(to_action_element)
        .collect()
}

fn to_action_element(element: &Element) -> ActionElement {
    ActionElement {
        id: element.id,
        category: element.category,
        label: element.label().to_string(),
    }
}
