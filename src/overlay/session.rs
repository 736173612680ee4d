//! Modifier-held overlay session
//!
//! # State machine
//!
//! ```text
//!            modifier down
//!   Idle ───────────────────▶ OverlayActive
//!    ▲                             │
//!    └─────────────────────────────┘
//!         any key up while active
//! ```
//!
//! On press: collect → allocate → mark → bind. The reserved set is seeded
//! from the config and from standard shortcuts on the overlay modifier.
//! On release: fire the transient binding for the released key (if any),
//! then unmark and unbind.
//! A second press while active first tears the previous session down.

use tracing::{debug, trace};

use crate::config::OverlayConfig;
use crate::core::{KeyCombo, MnemonicAllocator, MnemonicAssignment, Modifier, ReservedCharacterSet};
use crate::overlay::binder::ShortcutBinder;
use crate::overlay::registry::SharedRegistry;
use crate::surface::{Activation, ElementCollector, OverlayRenderer, PageSurface};

/// Overlay state
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OverlayState {
    Idle,
    OverlayActive,
}

/// Physical key of an event
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    Modifier(Modifier),
    Char(char),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyPhase {
    Down,
    Up,
}

/// One keyboard event from the page's shared key-event source
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyEvent {
    pub phase: KeyPhase,
    pub key: Key,
    /// Modifiers held when the event fired
    pub modifiers: Vec<Modifier>,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self {
            phase: KeyPhase::Down,
            key,
            modifiers: Vec::new(),
        }
    }

    pub fn up(key: Key) -> Self {
        Self {
            phase: KeyPhase::Up,
            key,
            modifiers: Vec::new(),
        }
    }

    /// Sets the held modifiers.
    pub fn with_modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }

    /// Key combination formed by the held modifiers and a character key.
    pub fn combo(&self) -> Option<KeyCombo> {
        match self.key {
            Key::Char(c) => Some(KeyCombo::new(self.modifiers.clone(), &c.to_string())),
            Key::Modifier(_) => None,
        }
    }
}

/// What the controller did with an event
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EventResponse {
    pub stop_propagation: bool,
    pub prevent_default: bool,
    pub activation: Option<Activation>,
}

#[derive(Debug)]
struct OverlaySession {
    assignments: Vec<MnemonicAssignment>,
}

/// Owns the modifier press/release lifecycle for one page
#[derive(Debug)]
pub struct SessionController {
    config: OverlayConfig,
    collector: ElementCollector,
    allocator: MnemonicAllocator,
    renderer: OverlayRenderer,
    binder: ShortcutBinder,
    session: Option<OverlaySession>,
}

impl SessionController {
    /// Creates an idle controller bound to the page's shared registry.
    pub fn new(config: OverlayConfig, registry: SharedRegistry) -> Self {
        Self {
            allocator: MnemonicAllocator::new(config.modifier),
            collector: ElementCollector::new(),
            renderer: OverlayRenderer::new(),
            binder: ShortcutBinder::new(registry),
            session: None,
            config,
        }
    }

    pub fn state(&self) -> OverlayState {
        match self.session {
            Some(_) => OverlayState::OverlayActive,
            None => OverlayState::Idle,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Assignments of the active session (empty when idle).
    pub fn assignments(&self) -> &[MnemonicAssignment] {
        self.session
            .as_ref()
            .map(|s| s.assignments.as_slice())
            .unwrap_or(&[])
    }

    /// Routes one key event.
    pub fn handle_key(&mut self, surface: &mut PageSurface, event: &KeyEvent) -> EventResponse {
        let mut response = EventResponse::default();

        match (event.phase, event.key) {
            (KeyPhase::Down, Key::Modifier(m)) if m == self.config.modifier => {
                response.stop_propagation = true;
                self.press(surface);
            }
            (KeyPhase::Down, Key::Char(_)) => {
                if let Some(combo) = event.combo() {
                    if let Some(activation) = self.binder.fire_standard(surface, &combo) {
                        response.prevent_default = true;
                        response.activation = Some(activation);
                    }
                }
            }
            (KeyPhase::Down, Key::Modifier(_)) => {}
            (KeyPhase::Up, _) => {
                if self.session.is_none() {
                    return response;
                }
                if let Some(combo) = event.combo() {
                    let fired = self
                        .binder
                        .fire_transient(surface, &self.config.namespace, &combo);
                    if let Some(activation) = fired {
                        response.stop_propagation = true;
                        response.prevent_default = true;
                        response.activation = Some(activation);
                    }
                }
                self.release(surface);
            }
        }

        response
    }

    /// Starts a session: collect, allocate, mark and bind.
    ///
    /// Returns the number of assignments made.
    pub fn press(&mut self, surface: &mut PageSurface) -> usize {
        if self.session.is_some() {
            trace!("modifier pressed while overlay active; tearing down first");
            self.release(surface);
        }

        let candidates = self.collector.collect(surface);
        let mut reserved = ReservedCharacterSet::seeded(self.config.reserved.iter().copied());
        for c in self.binder.registry().borrow().standard_chars(self.config.modifier) {
            if reserved.reserve(c) {
                trace!(character = %c, "reserved by standard shortcut");
            }
        }
        let assignments = self.allocator.allocate(&candidates, &mut reserved);

        self.renderer.mark_all(surface, &assignments);
        self.binder.bind_assignments(&assignments, &self.config.namespace);

        debug!(
            candidates = candidates.len(),
            assigned = assignments.len(),
            "mnemonic overlay shown"
        );

        let count = assignments.len();
        self.session = Some(OverlaySession { assignments });
        count
    }

    /// Ends the active session: unmark and unbind. No-op when idle.
    pub fn release(&mut self, surface: &mut PageSurface) {
        let Some(session) = self.session.take() else {
            return;
        };

        let unmarked = self.renderer.unmark_all(surface, &session.assignments);
        let unbound = self.binder.unbind_transient_namespace(&self.config.namespace);

        debug!(unmarked, unbound, "mnemonic overlay hidden");
    }
}
