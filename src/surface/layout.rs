//! TOML page descriptions
//!
//! Describes a page's action surface declaratively so the CLI and tests can
//! build a [`PageChrome`] without code:
//!
//! ```toml
//! [[buttons]]
//! label = "Save"
//!
//! [[breadcrumbs]]
//! label = "Home"
//! href = "/app"
//!
//! [menu]
//! open = true
//!
//! [[menu_items]]
//! label = "Print"
//! shortcut = "Ctrl+P"
//! standard = true
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::ElementId;
use crate::overlay::SharedRegistry;
use crate::surface::PageChrome;

/// Errors loading a page description
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Failed to read page layout {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid page layout: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One link or button entry
#[derive(Clone, Debug, Deserialize)]
pub struct LinkEntry {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub disabled: bool,
}

/// One dropdown item entry
#[derive(Clone, Debug, Deserialize)]
pub struct DropdownEntry {
    pub label: String,
    #[serde(default)]
    pub standard: bool,
    #[serde(default)]
    pub shortcut: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}

/// Open state of a dropdown group
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct DropdownEntryState {
    #[serde(default)]
    pub open: bool,
    #[serde(default)]
    pub hidden: bool,
}

/// Declarative page description
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub buttons: Vec<LinkEntry>,
    pub breadcrumbs: Vec<LinkEntry>,
    pub sidebar: Vec<LinkEntry>,
    pub form_sidebar: Vec<LinkEntry>,
    pub related: Vec<LinkEntry>,
    pub menu: DropdownEntryState,
    pub menu_items: Vec<DropdownEntry>,
    pub actions: DropdownEntryState,
    pub action_items: Vec<DropdownEntry>,
}

impl PageLayout {
    /// Parses a TOML page description.
    pub fn from_toml(content: &str) -> Result<Self, LayoutError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a TOML page description.
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let content = fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Builds the page, registering declared shortcuts in `registry`.
    pub fn build(&self, registry: SharedRegistry) -> PageChrome {
        let mut chrome = PageChrome::new(registry);

        for entry in &self.buttons {
            let id = chrome.add_button(&entry.label);
            apply_link(&mut chrome, id, entry);
        }
        for entry in &self.breadcrumbs {
            let id = chrome.add_breadcrumb(&entry.label, entry.href.as_deref().unwrap_or("#"));
            apply_link(&mut chrome, id, entry);
        }
        for entry in &self.sidebar {
            let id = chrome.add_sidebar_link(&entry.label, entry.href.as_deref(), entry.disabled);
            apply_link(&mut chrome, id, entry);
        }
        for entry in &self.form_sidebar {
            let id = chrome.add_form_sidebar_link(&entry.label, entry.href.as_deref());
            apply_link(&mut chrome, id, entry);
        }
        for entry in &self.related {
            let id = chrome.add_related_record(&entry.label, entry.href.as_deref());
            apply_link(&mut chrome, id, entry);
        }

        for entry in &self.menu_items {
            if let Some(id) = chrome.add_menu_item(&entry.label, entry.standard, entry.shortcut.as_deref()) {
                chrome.surface_mut().set_visible(id, !entry.hidden);
            }
        }
        for entry in &self.action_items {
            if let Some(id) = chrome.add_action_item(&entry.label, entry.standard) {
                chrome.surface_mut().set_visible(id, !entry.hidden);
            }
        }

        if self.menu.hidden {
            chrome.hide_menu();
        }
        if self.menu.open {
            chrome.open_menu();
        }
        if self.actions.hidden {
            chrome.hide_actions_menu();
        }
        if self.actions.open {
            chrome.open_actions();
        }

        chrome
    }
}

fn apply_link(chrome: &mut PageChrome, id: ElementId, entry: &LinkEntry) {
    let surface = chrome.surface_mut();
    surface.set_visible(id, !entry.hidden);
    if let Some(element) = surface.get_mut(id) {
        element.disabled = entry.disabled;
    }
}
