//! PageChrome and PageLayout tests

use std::fs;
use tempfile::TempDir;

use crate::core::ElementCategory;
use crate::overlay::BindingRegistry;
use crate::surface::{Activation, LayoutError, PageChrome, PageLayout};

fn menu_labels(chrome: &PageChrome) -> Vec<String> {
    chrome
        .surface()
        .by_category(ElementCategory::MenuItem)
        .map(|e| e.label().to_string())
        .collect()
}

#[test]
fn test_duplicate_dropdown_label_is_ignored() {
    let mut chrome = PageChrome::new(BindingRegistry::shared());

    assert!(chrome.add_menu_item("Print", true, None).is_some());
    assert!(chrome.add_menu_item("Print", true, None).is_none());
    assert_eq!(menu_labels(&chrome), vec!["Print"]);
}

#[test]
fn test_user_actions_go_before_standard_items() {
    let mut chrome = PageChrome::new(BindingRegistry::shared());

    chrome.add_menu_item("Print", true, None);
    chrome.add_menu_item("Email", true, None);
    chrome.add_menu_item("Make Copy", false, None);
    chrome.add_menu_item("Send SMS", false, None);

    assert_eq!(menu_labels(&chrome), vec!["Make Copy", "Send SMS", "Print", "Email"]);
}

#[test]
fn test_adding_menu_item_shows_menu() {
    let mut chrome = PageChrome::new(BindingRegistry::shared());
    assert!(!chrome.surface().is_visible(chrome.menu_toggle()));

    chrome.add_menu_item("Print", true, None);
    assert!(chrome.surface().is_visible(chrome.menu_toggle()));

    chrome.hide_menu();
    assert!(!chrome.surface().is_visible(chrome.menu_toggle()));
}

#[test]
fn test_menu_item_shortcut_registers_standard_binding() {
    let registry = BindingRegistry::shared();
    let mut chrome = PageChrome::new(registry.clone());

    let id = chrome.add_menu_item("Print", true, Some("Ctrl + P")).unwrap();

    let registry = registry.borrow();
    let binding = registry.standard("ctrl+p").unwrap();
    assert_eq!(binding.element, id);
    assert_eq!(binding.label, "Print");
    assert_eq!(chrome.surface().get(id).unwrap().label(), "Print");
}

#[test]
fn test_clear_menu_keeps_standard_shortcuts() {
    let registry = BindingRegistry::shared();
    let mut chrome = PageChrome::new(registry.clone());

    chrome.add_menu_item("Print", true, Some("Ctrl+P"));
    chrome.add_menu_item("Email", true, None);
    assert_eq!(chrome.clear_menu(), 2);

    assert!(menu_labels(&chrome).is_empty());
    assert!(registry.borrow().has_standard("ctrl+p"));
}

#[test]
fn test_menu_toggle_click_opens_menu() {
    let mut chrome = PageChrome::new(BindingRegistry::shared());
    let print = chrome.add_menu_item("Print", true, None).unwrap();
    assert!(!chrome.surface().is_visible(print));

    let toggle = chrome.menu_toggle();
    let activation = chrome.surface_mut().activate(toggle);

    assert_eq!(activation, Some(Activation::Clicked(toggle)));
    assert!(chrome.surface().is_visible(print));
}

#[test]
fn test_layout_from_toml() {
    let layout = PageLayout::from_toml(
        r#"
[[buttons]]
label = "Save"

[[buttons]]
label = "Delete"
hidden = true

[[breadcrumbs]]
label = "Home"
href = "/app"

[[sidebar]]
label = "Tags"
disabled = true

[menu]
open = true

[[menu_items]]
label = "Print"
shortcut = "Ctrl+P"
standard = true
"#,
    )
    .unwrap();

    let registry = BindingRegistry::shared();
    let chrome = layout.build(registry.clone());
    let surface = chrome.surface();

    let delete = surface
        .by_category(ElementCategory::ToolbarButton)
        .find(|e| e.label() == "Delete")
        .unwrap();
    assert!(!surface.is_visible(delete.id));

    let tags = surface.by_category(ElementCategory::SidebarLink).next().unwrap();
    assert!(tags.disabled);

    assert!(surface.menu.open);
    assert!(registry.borrow().has_standard("ctrl+p"));
}

#[test]
fn test_layout_load_errors() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.toml");
    assert!(matches!(PageLayout::load(&missing), Err(LayoutError::Io { .. })));

    let broken = temp_dir.path().join("broken.toml");
    fs::write(&broken, "[[buttons]]\nlabel = 3\n").unwrap();
    assert!(matches!(PageLayout::load(&broken), Err(LayoutError::Parse(_))));
}
