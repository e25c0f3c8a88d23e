//! The map launcher service: registry ∩ OS state, plus launch dispatch.

use std::sync::Arc;

use crate::error::{MapError, Result};
use crate::platform::{self, Platform};
use crate::provider::{MapKind, MapProvider};
use crate::registry;

/// Stateless facade over the provider registry and the platform backend.
///
/// The registry and backend are injected so tests can run against fake OS
/// state; `native()` wires up the real ones.
pub struct MapLauncher {
    registry: &'static [MapProvider],
    platform: Arc<dyn Platform>,
}

impl MapLauncher {
    pub fn new(registry: &'static [MapProvider], platform: Arc<dyn Platform>) -> Self {
        Self { registry, platform }
    }

    /// Launcher over the built-in registry and the current OS backend.
    pub fn native() -> Self {
        Self::new(registry::PROVIDERS, platform::native())
    }

    /// Registry providers currently installed, in registry order.
    ///
    /// The OS is queried fresh on every call; an empty result just means no
    /// known map application is installed.
    pub fn installed_maps(&self) -> Vec<&'static MapProvider> {
        let inventory = self.platform.inventory();
        self.registry
            .iter()
            .filter(|p| inventory.contains(p))
            .collect()
    }

    pub fn is_available(&self, kind: MapKind) -> bool {
        self.installed_maps().iter().any(|p| p.kind == kind)
    }

    /// Resolve `kind`, verify availability, then hand the URL to the OS.
    ///
    /// The availability gate runs before any launch interaction, so an
    /// uninstalled provider never reaches the OS.
    pub fn launch(&self, kind: MapKind, url: &str) -> Result<()> {
        let provider = self
            .registry
            .iter()
            .find(|p| p.kind == kind)
            .ok_or_else(|| MapError::UnknownProvider(kind.to_string()))?;

        if !self.is_available(kind) {
            return Err(MapError::NotAvailable(kind));
        }

        tracing::debug!(kind = %kind, url, "launching map application");
        self.platform.launch(provider, url)
    }
}
