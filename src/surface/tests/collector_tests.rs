//! ElementCollector tests

use crate::core::ElementCategory;
use crate::overlay::BindingRegistry;
use crate::surface::{ElementCollector, PageChrome};

fn labels(chrome: &PageChrome) -> Vec<String> {
    ElementCollector::new()
        .collect(chrome.surface())
        .into_iter()
        .map(|c| c.label)
        .collect()
}

#[test]
fn test_priority_order() {
    let mut chrome = PageChrome::new(BindingRegistry::shared());
    // Added out of priority order on purpose
    chrome.add_sidebar_link("Assigned To", None, false);
    chrome.add_breadcrumb("Home", "/app");
    chrome.add_button("Save");
    chrome.add_button("Refresh");

    assert_eq!(labels(&chrome), vec!["Save", "Refresh", "Home", "Assigned To"]);
}

#[test]
fn test_hidden_and_disabled_are_skipped() {
    let mut chrome = PageChrome::new(BindingRegistry::shared());
    chrome.add_button("Save");
    let hidden = chrome.add_button("Delete");
    chrome.surface_mut().set_visible(hidden, false);
    chrome.add_sidebar_link("Tags", None, true);
    chrome.add_sidebar_link("Reports", Some("/app/reports"), false);

    assert_eq!(labels(&chrome), vec!["Save", "Reports"]);
}

#[test]
fn test_form_sidebar_includes_related_records() {
    let mut chrome = PageChrome::new(BindingRegistry::shared());
    chrome.add_button("Save");
    chrome.add_related_record("Sales Invoice", Some("/app/sales-invoice"));
    assert_eq!(labels(&chrome), vec!["Save"], "Related records need a form sidebar");

    chrome.add_form_sidebar_link("Attachments", None);
    assert_eq!(labels(&chrome), vec!["Save", "Attachments", "Sales Invoice"]);
}

#[test]
fn test_open_menu_supersedes_everything() {
    let mut chrome = PageChrome::new(BindingRegistry::shared());
    chrome.add_button("Save");
    chrome.add_breadcrumb("Home", "/app");
    chrome.add_menu_item("Print", true, None);
    chrome.add_menu_item("Email", true, None);
    chrome.add_action_item("Submit", true);
    chrome.open_actions();

    // Menu closed: the open actions dropdown wins
    assert_eq!(labels(&chrome), vec!["Submit"]);

    chrome.open_menu();
    assert_eq!(labels(&chrome), vec!["Menu", "Print", "Email"]);
}

#[test]
fn test_closed_dropdowns_fall_back_to_buttons() {
    let mut chrome = PageChrome::new(BindingRegistry::shared());
    chrome.add_button("Save");
    chrome.add_menu_item("Print", true, None);
    chrome.add_action_item("Submit", true);

    let candidates = ElementCollector::new().collect(chrome.surface());
    let categories: Vec<ElementCategory> = candidates.iter().map(|c| c.category).collect();
    assert_eq!(categories, vec![ElementCategory::ToolbarButton]);
}

#[test]
fn test_collection_is_stable() {
    let mut chrome = PageChrome::new(BindingRegistry::shared());
    chrome.add_button("Save");
    chrome.add_breadcrumb("Home", "/app");
    chrome.add_sidebar_link("Reports", None, false);

    let collector = ElementCollector::new();
    assert_eq!(collector.collect(chrome.surface()), collector.collect(chrome.surface()));
}
