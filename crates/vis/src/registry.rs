//! Callbacks the dashboard invokes by name.
//!
//! The dashboard declares its client-side callbacks by name. The registry
//! resolves those names to functions once, when the dashboard is configured,
//! instead of looking them up on every event.

use dashcoch_payload::Payload;

use crate::error::Result;
use crate::error::VisError;
use crate::figure::Figure;
use crate::map::map_frame;
use crate::selection::Selection;
use crate::text::TextTarget;
use crate::trend::cantonal_trend;
use crate::trend::regional_trend;

/// A callback: turns a selection and a payload into a figure, possibly updating page text.
pub type Callback = fn(&Selection, &Payload, &mut dyn TextTarget) -> Figure;

/// The localized trend chart of the regional dashboard.
pub const REGIONAL_TREND: &str = "update_caseincrease_regional_graph";
/// The English trend chart of the cantonal dashboard.
pub const CANTONAL_TREND: &str = "update_caseincrease_cantonal_graph";
/// The map frame.
pub const MAP: &str = "update_map";

/// Callbacks by name.
#[derive(Debug, Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<(&'static str, Callback)>,
}

impl CallbackRegistry {
    /// Creates an empty registry.
    pub fn new() -> CallbackRegistry {
        Self::default()
    }

    /// Returns a registry with all the dashboard's client-side callbacks.
    pub fn clientside() -> CallbackRegistry {
        let mut registry = Self::new();
        registry.register(REGIONAL_TREND, regional_trend);
        registry.register(CANTONAL_TREND, cantonal_trend);
        registry.register(MAP, map_frame);
        registry
    }

    /// Registers `callback` under `name`, replacing a previous registration.
    pub fn register(&mut self, name: &'static str, callback: Callback) {
        match self.callbacks.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = callback,
            None => self.callbacks.push((name, callback)),
        }
    }

    /// Returns the callback registered as `name`.
    ///
    /// Fails with [VisError::UnknownCallback] if there is none.
    pub fn resolve(&self, name: &str) -> Result<Callback> {
        self.callbacks
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, callback)| *callback)
            .ok_or_else(|| VisError::UnknownCallback(name.to_string()))
    }

    /// Returns the registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.callbacks.iter().map(|(name, _)| *name)
    }
}
