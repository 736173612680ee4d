//! OverlayRenderer tests

use crate::core::{MnemonicAllocator, ReservedCharacterSet, DEFAULT_RESERVED};
use crate::overlay::BindingRegistry;
use crate::surface::{ElementCollector, OverlayRenderer, PageChrome};

fn page() -> PageChrome {
    let mut chrome = PageChrome::new(BindingRegistry::shared());
    chrome.add_button("  Save  ");
    chrome.add_button("Settings");
    chrome.add_breadcrumb("Help", "/help");
    chrome
}

fn allocate(chrome: &PageChrome) -> Vec<crate::core::MnemonicAssignment> {
    let candidates = ElementCollector::new().collect(chrome.surface());
    let mut reserved = ReservedCharacterSet::seeded(DEFAULT_RESERVED);
    MnemonicAllocator::default().allocate(&candidates, &mut reserved)
}

#[test]
fn test_mark_decorates_exactly_the_chosen_character() {
    let mut chrome = page();
    let assignments = allocate(&chrome);

    let marked = OverlayRenderer::new().mark_all(chrome.surface_mut(), &assignments);
    assert_eq!(marked, 3);

    let html: Vec<String> = chrome.surface().snapshot().into_iter().map(|(_, h)| h).collect();
    // First entry is the hidden menu toggle
    assert_eq!(html[1], "  S<u>a</u>ve  ");
    assert_eq!(html[2], "S<u>e</u>ttings");
    assert_eq!(html[3], "He<u>l</u>p");
}

#[test]
fn test_unmark_restores_original_markup() {
    let mut chrome = page();
    let before = chrome.surface().snapshot();
    let assignments = allocate(&chrome);
    let renderer = OverlayRenderer::new();

    renderer.mark_all(chrome.surface_mut(), &assignments);
    assert_ne!(chrome.surface().snapshot(), before);

    let unmarked = renderer.unmark_all(chrome.surface_mut(), &assignments);
    assert_eq!(unmarked, 3);
    assert_eq!(chrome.surface().snapshot(), before);
}

#[test]
fn test_unmark_after_element_hidden_leaves_no_decoration() {
    let mut chrome = page();
    let before = chrome.surface().snapshot();
    let assignments = allocate(&chrome);
    let renderer = OverlayRenderer::new();

    renderer.mark_all(chrome.surface_mut(), &assignments);
    chrome.surface_mut().set_visible(assignments[0].element, false);
    renderer.unmark_all(chrome.surface_mut(), &assignments);

    assert_eq!(chrome.surface().snapshot(), before);
}

#[test]
fn test_unmark_skips_removed_elements() {
    let mut chrome = page();
    let assignments = allocate(&chrome);
    let renderer = OverlayRenderer::new();

    renderer.mark_all(chrome.surface_mut(), &assignments);
    chrome.surface_mut().remove(assignments[1].element);

    assert_eq!(renderer.unmark_all(chrome.surface_mut(), &assignments), 2);
    assert!(chrome.surface().elements().iter().all(|e| e.mark.is_none()));
}

#[test]
fn test_mark_skips_relabelled_element() {
    let mut chrome = page();
    let assignments = allocate(&chrome);

    if let Some(element) = chrome.surface_mut().get_mut(assignments[0].element) {
        element.text = "Submit".to_string();
    }

    let marked = OverlayRenderer::new().mark_all(chrome.surface_mut(), &assignments);
    assert_eq!(marked, 2);
    assert!(chrome.surface().get(assignments[0].element).unwrap().mark.is_none());
}

#[test]
fn test_empty_assignment_list_is_a_no_op() {
    let mut chrome = page();
    let before = chrome.surface().snapshot();
    let renderer = OverlayRenderer::new();

    assert_eq!(renderer.mark_all(chrome.surface_mut(), &[]), 0);
    assert_eq!(renderer.unmark_all(chrome.surface_mut(), &[]), 0);
    assert_eq!(chrome.surface().snapshot(), before);
}
