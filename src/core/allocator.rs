//! Mnemonic character allocation
//!
//! Given the ordered candidate list, each candidate gets the first
//! character of its own label that is not already reserved. Every choice is
//! reserved immediately, so later candidates can never reuse it.
//!
//! # Performance
//! - Reserved lookup: O(log n) (BTreeSet)
//! - Allocation: O(c · l) for c capped candidates with labels of length l

use std::collections::BTreeSet;
use tracing::trace;

use crate::core::types::{ActionElement, KeyCombo, MnemonicAssignment, Modifier};

/// Maximum number of candidates considered in one session.
///
/// Candidates past this point (in collector order) receive no mnemonic.
pub const MNEMONIC_CAP: usize = 20;

/// Characters bound by the application's global modifier shortcuts.
pub const DEFAULT_RESERVED: [char; 3] = ['S', 'C', 'H'];

/// Characters that cannot be handed out as a mnemonic
///
/// Seeded with the standard shortcut characters, then grown by one
/// character per successful assignment. Stored uppercase.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReservedCharacterSet {
    chars: BTreeSet<char>,
}

impl ReservedCharacterSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set seeded with `seed` (case-insensitive).
    pub fn seeded<I: IntoIterator<Item = char>>(seed: I) -> Self {
        let mut set = Self::new();
        for c in seed {
            set.reserve(c);
        }
        set
    }

    /// Reserves `c`. Returns false when it was already reserved.
    pub fn reserve(&mut self, c: char) -> bool {
        self.chars.insert(fold(c))
    }

    /// True when `c` (in any case) is reserved.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&fold(c))
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Uppercase form used for reservation checks
fn fold(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Only letters and digits can be typed as a mnemonic.
fn is_assignable(c: char) -> bool {
    c.is_alphanumeric()
}

/// Assigns mnemonic characters to candidates
#[derive(Clone, Copy, Debug)]
pub struct MnemonicAllocator {
    modifier: Modifier,
}

impl MnemonicAllocator {
    /// Creates an allocator composing combinations with `modifier`.
    pub fn new(modifier: Modifier) -> Self {
        Self { modifier }
    }

    /// Allocates mnemonics for at most the first [`MNEMONIC_CAP`] candidates.
    ///
    /// `reserved` is grown in place as each assignment is made. Candidates
    /// whose label has no free character get no assignment.
    pub fn allocate(
        &self,
        candidates: &[ActionElement],
        reserved: &mut ReservedCharacterSet,
    ) -> Vec<MnemonicAssignment> {
        let mut assignments = Vec::new();

        for candidate in candidates.iter().take(MNEMONIC_CAP) {
            match self.allocate_one(candidate, reserved) {
                Some(assignment) => assignments.push(assignment),
                None => trace!(
                    element = %candidate.id,
                    label = %candidate.label,
                    "no free mnemonic character"
                ),
            }
        }

        assignments
    }

    fn allocate_one(
        &self,
        candidate: &ActionElement,
        reserved: &mut ReservedCharacterSet,
    ) -> Option<MnemonicAssignment> {
        let label = candidate.label.trim();

        let (char_index, character) = label
            .chars()
            .enumerate()
            .find(|(_, c)| is_assignable(*c) && !reserved.contains(*c))?;

        reserved.reserve(character);

        Some(MnemonicAssignment {
            element: candidate.id,
            category: candidate.category,
            label: label.to_string(),
            char_index,
            character,
            combo: KeyCombo::with_char(self.modifier, character),
        })
    }
}

impl Default for MnemonicAllocator {
    fn default() -> Self {
        Self::new(Modifier::Alt)
    }
}
