//! Platform-specific probing and launching.
//!
//! Each supported OS gets one backend implementing [`Platform`]; other
//! targets fall back to [`NullPlatform`], which reports nothing installed.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::error::{MapError, Result};
use crate::provider::MapProvider;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use macos::MacosPlatform;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub use linux::LinuxPlatform;

/// One fresh view of the OS application registry.
///
/// Backends report raw state; matching against providers happens in one
/// place, [`AppInventory::contains`].
#[derive(Debug, Default)]
pub struct AppInventory {
    /// Reverse-DNS ids of installed applications.
    pub app_ids: HashSet<String>,
    /// URL schemes some installed application has registered a handler for.
    pub url_schemes: HashSet<String>,
}

impl AppInventory {
    pub fn contains(&self, provider: &MapProvider) -> bool {
        if !provider.package.is_empty() && self.app_ids.contains(provider.package) {
            return true;
        }
        !provider.scheme.is_empty() && self.url_schemes.contains(provider.scheme)
    }
}

/// Seam between the map service and the operating system.
pub trait Platform: Send + Sync {
    /// Query the OS for installed applications and registered URL schemes.
    ///
    /// Queried fresh on every call; unreadable OS state yields an empty
    /// inventory rather than an error.
    fn inventory(&self) -> AppInventory;

    /// Hand `url` to the OS, biased to `provider` where the OS supports
    /// explicit targeting. Does not await or verify the launched app.
    fn launch(&self, provider: &MapProvider, url: &str) -> Result<()>;
}

/// Stub for targets without a native backend.
pub struct NullPlatform;

impl Platform for NullPlatform {
    fn inventory(&self) -> AppInventory {
        AppInventory::default()
    }

    fn launch(&self, provider: &MapProvider, _url: &str) -> Result<()> {
        Err(MapError::LaunchFailed(
            provider.kind,
            "no launch backend for this platform".to_string(),
        ))
    }
}

/// Fake backend with scripted OS state, for tests and headless harnesses.
///
/// Records every launch it is asked to perform for later inspection.
#[derive(Default)]
pub struct RecordingPlatform {
    installed: Vec<String>,
    schemes: Vec<String>,
    launches: Mutex<Vec<(crate::provider::MapKind, String)>>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripted state with the given installed application ids.
    pub fn with_apps(installed: &[&str]) -> Self {
        Self {
            installed: installed.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Scripted state with the given registered URL schemes.
    pub fn with_schemes(schemes: &[&str]) -> Self {
        Self {
            schemes: schemes.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Every `(kind, url)` launch dispatched so far.
    pub fn launches(&self) -> Vec<(crate::provider::MapKind, String)> {
        self.launches.lock().unwrap().clone()
    }
}

impl Platform for RecordingPlatform {
    fn inventory(&self) -> AppInventory {
        let mut inventory = AppInventory::default();
        inventory.app_ids.extend(self.installed.iter().cloned());
        inventory.url_schemes.extend(self.schemes.iter().cloned());
        inventory
    }

    fn launch(&self, provider: &MapProvider, url: &str) -> Result<()> {
        self.launches
            .lock()
            .unwrap()
            .push((provider.kind, url.to_string()));
        Ok(())
    }
}

/// The backend for the current target.
pub fn native() -> Arc<dyn Platform> {
    #[cfg(target_os = "macos")]
    {
        Arc::new(MacosPlatform)
    }
    #[cfg(target_os = "linux")]
    {
        Arc::new(LinuxPlatform)
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        Arc::new(NullPlatform)
    }
}
