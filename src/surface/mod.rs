// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! Page action surface
//!
//! An in-memory model of the page chrome the overlay operates over: toolbar
//! buttons, breadcrumbs, sidebar links and dropdown items, each with a
//! label, visibility and optional destination.
//!
//! # Module Structure
//!
//! ```text
//! surface/
//! ├── mod.rs          // This file - PageSurface and Element
//! ├── chrome.rs       // Page widget API that builds the surface
//! ├── collector.rs    // Candidate collection per session
//! ├── render.rs       // Underline decoration
//! └── layout.rs       // TOML page descriptions
//! ```
//!
//! The surface never fails: lookups on removed elements return `None` and
//! mutations on them are skipped.

pub mod chrome;
pub mod collector;
pub mod layout;
pub mod render;

pub use chrome::PageChrome;
pub use collector::ElementCollector;
pub use layout::{LayoutError, PageLayout};
pub use render::OverlayRenderer;

use crate::core::{ElementCategory, ElementId, MarkedLabel};
use tracing::debug;

/// One actionable element of the page
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub category: ElementCategory,
    /// Full text content
    pub text: String,
    /// Inner label span, when the element has one
    pub sub_label: Option<String>,
    /// Navigable destination
    pub href: Option<String>,
    /// Own visibility flag
    pub visible: bool,
    pub disabled: bool,
    /// Dropdown items only: added as a standard (non user-action) item
    pub standard: bool,
    /// Dropdown items only: declared keyboard shortcut text
    pub shortcut: Option<String>,
    /// Mnemonic decoration currently applied
    pub mark: Option<MarkedLabel>,
}

impl Element {
    /// Visible label: the trimmed sub-label when present, else the trimmed text.
    pub fn label(&self) -> &str {
        self.sub_label.as_deref().unwrap_or(&self.text).trim()
    }

    /// Label markup as rendered, with the mnemonic decoration if any.
    ///
    /// Whitespace around the label source is preserved.
    pub fn render_html(&self) -> String {
        let source = self.sub_label.as_deref().unwrap_or(&self.text);
        match &self.mark {
            None => source.to_string(),
            Some(mark) => {
                let trimmed = source.trim();
                let lead = &source[..source.len() - source.trim_start().len()];
                let trail = &source[trimmed.len() + lead.len()..];
                format!("{}{}{}", lead, mark, trail)
            }
        }
    }

    /// True for an anchor with a real destination (not the `#` placeholder).
    pub fn navigable_href(&self) -> Option<&str> {
        self.href
            .as_deref()
            .filter(|href| !href.is_empty() && *href != "#")
    }
}

/// Shown/open state of one dropdown group
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DropdownState {
    /// Group button is displayed
    pub shown: bool,
    /// Dropdown list is expanded
    pub open: bool,
}

/// Something the page did in response to a shortcut
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Activation {
    Clicked(ElementId),
    Navigated(String),
}

/// The page action surface
#[derive(Clone, Debug, Default)]
pub struct PageSurface {
    elements: Vec<Element>,
    next_id: u32,
    /// Overflow "menu" dropdown
    pub menu: DropdownState,
    /// "Actions" dropdown
    pub actions: DropdownState,
    location: Option<String>,
    activations: Vec<Activation>,
}

impl PageSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a visible element and returns its id.
    pub fn push(&mut self, category: ElementCategory, text: &str) -> ElementId {
        let element = self.make(category, text);
        let id = element.id;
        self.elements.push(element);
        id
    }

    /// Inserts a visible element at `index` in document order.
    pub fn insert(&mut self, index: usize, category: ElementCategory, text: &str) -> ElementId {
        let element = self.make(category, text);
        let id = element.id;
        let index = index.min(self.elements.len());
        self.elements.insert(index, element);
        id
    }

    fn make(&mut self, category: ElementCategory, text: &str) -> Element {
        let id = ElementId(self.next_id);
        self.next_id += 1;

        Element {
            id,
            category,
            text: text.to_string(),
            sub_label: None,
            href: None,
            visible: true,
            disabled: false,
            standard: false,
            shortcut: None,
            mark: None,
        }
    }

    /// Removes an element. Returns it if it was present.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.position(id)?;
        Some(self.elements.remove(index))
    }

    /// Removes every element of `category`.
    pub fn remove_category(&mut self, category: ElementCategory) -> usize {
        let before = self.elements.len();
        self.elements.retain(|e| e.category != category);
        before - self.elements.len()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Index of `id` in document order.
    pub fn position(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// All elements in document order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Elements of one category in document order.
    pub fn by_category(&self, category: ElementCategory) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.category == category)
    }

    /// Sets an element's own visibility flag.
    pub fn set_visible(&mut self, id: ElementId, visible: bool) {
        if let Some(element) = self.get_mut(id) {
            element.visible = visible;
        }
    }

    /// Effective visibility, taking the owning dropdown into account.
    pub fn is_visible(&self, id: ElementId) -> bool {
        let Some(element) = self.get(id) else {
            return false;
        };
        if !element.visible {
            return false;
        }

        match element.category {
            ElementCategory::MenuToggle => self.menu.shown,
            ElementCategory::MenuItem => self.menu.shown && self.menu.open,
            ElementCategory::ActionsItem => self.actions.shown && self.actions.open,
            _ => true,
        }
    }

    /// Clicks an element. Clicking the menu toggle opens or closes the menu.
    pub fn activate(&mut self, id: ElementId) -> Option<Activation> {
        let category = self.get(id)?.category;
        if category == ElementCategory::MenuToggle {
            self.menu.open = !self.menu.open;
        }

        debug!(element = %id, "element clicked");
        let activation = Activation::Clicked(id);
        self.activations.push(activation.clone());
        Some(activation)
    }

    /// Navigates the page to `href`.
    pub fn navigate(&mut self, href: &str) -> Activation {
        debug!(href, "page navigated");
        self.location = Some(href.to_string());
        let activation = Activation::Navigated(href.to_string());
        self.activations.push(activation.clone());
        activation
    }

    /// Current location after the last navigation.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Every activation so far, oldest first.
    pub fn activations(&self) -> &[Activation] {
        &self.activations
    }

    /// Rendered label markup of every element, in document order.
    pub fn snapshot(&self) -> Vec<(ElementId, String)> {
        self.elements
            .iter()
            .map(|e| (e.id, e.render_html()))
            .collect()
    }
}

#[cfg(test)]
mod tests;
