//! Underline decoration of mnemonic characters
//!
//! Marking stores a [`MarkedLabel`] on the element; unmarking drops it. The
//! label source itself is never rewritten, so unmark is an exact inverse.

use tracing::trace;

use crate::core::{MarkedLabel, MnemonicAssignment};
use crate::surface::PageSurface;

/// Applies and removes mnemonic decorations
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlayRenderer;

impl OverlayRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Marks the chosen character of every assignment.
    ///
    /// Skips elements that are gone, hidden, or whose label changed since
    /// allocation. Returns the number of elements marked.
    pub fn mark_all(&self, surface: &mut PageSurface, assignments: &[MnemonicAssignment]) -> usize {
        let mut marked = 0;

        for assignment in assignments {
            if !surface.is_visible(assignment.element) {
                trace!(element = %assignment.element, "skipping hidden element");
                continue;
            }
            let Some(element) = surface.get_mut(assignment.element) else {
                continue;
            };
            if element.label() != assignment.label {
                trace!(element = %assignment.element, "label changed since allocation");
                continue;
            }

            if let Some(mark) = MarkedLabel::split(&assignment.label, assignment.char_index) {
                element.mark = Some(mark);
                marked += 1;
            }
        }

        marked
    }

    /// Strips the decoration from every assigned element still present,
    /// visible or not. Returns the number of decorations removed.
    pub fn unmark_all(&self, surface: &mut PageSurface, assignments: &[MnemonicAssignment]) -> usize {
        let mut unmarked = 0;

        for assignment in assignments {
            let Some(element) = surface.get_mut(assignment.element) else {
                continue;
            };
            if element.mark.take().is_some() {
                unmarked += 1;
            }
        }

        unmarked
    }
}
