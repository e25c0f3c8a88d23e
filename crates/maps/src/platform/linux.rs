//! Linux backend.
//!
//! Availability comes from the XDG application directories: a provider is
//! installed when a desktop entry with its reverse-DNS id exists, and URL
//! schemes come from `x-scheme-handler/*` mime declarations. Launching goes
//! through `gio launch` for a found entry, `xdg-open` otherwise.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{AppInventory, Platform};
use crate::error::{MapError, Result};
use crate::provider::MapProvider;

pub struct LinuxPlatform;

impl Platform for LinuxPlatform {
    fn inventory(&self) -> AppInventory {
        let inventory = scan_inventory(&application_dirs());
        tracing::debug!(
            apps = inventory.app_ids.len(),
            schemes = inventory.url_schemes.len(),
            "scanned desktop entries"
        );
        inventory
    }

    fn launch(&self, provider: &MapProvider, url: &str) -> Result<()> {
        let spawn_err = |e: std::io::Error| MapError::LaunchFailed(provider.kind, e.to_string());

        if let Some(entry) = find_desktop_entry(provider.package) {
            let status = Command::new("gio")
                .arg("launch")
                .arg(&entry)
                .arg(url)
                .status()
                .map_err(spawn_err)?;
            if status.success() {
                return Ok(());
            }
            tracing::warn!(kind = %provider.kind, "gio launch failed, falling back to xdg-open");
        }

        let status = Command::new("xdg-open")
            .arg(url)
            .status()
            .map_err(spawn_err)?;
        if status.success() {
            return Ok(());
        }

        Err(MapError::LaunchFailed(
            provider.kind,
            format!("xdg-open rejected {url}"),
        ))
    }
}

fn scan_inventory(dirs: &[PathBuf]) -> AppInventory {
    let mut inventory = AppInventory::default();

    for dir in dirs {
        let Ok(entries) = std::fs::read_dir(dir) else {
            continue;
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("desktop") {
                continue;
            }

            if let Some(id) = path.file_stem().and_then(|s| s.to_str()) {
                inventory.app_ids.insert(id.to_string());
            }
            if let Ok(content) = std::fs::read_to_string(&path) {
                for scheme in scheme_handlers(&content) {
                    inventory.url_schemes.insert(scheme);
                }
            }
        }
    }

    inventory
}

fn application_dirs() -> Vec<PathBuf> {
    let home = std::env::var("HOME").unwrap_or_default();
    let data_home =
        std::env::var("XDG_DATA_HOME").unwrap_or_else(|_| format!("{home}/.local/share"));
    let data_dirs = std::env::var("XDG_DATA_DIRS")
        .unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());

    std::iter::once(data_home)
        .chain(data_dirs.split(':').map(str::to_string))
        .filter(|d| !d.is_empty())
        .map(|d| Path::new(&d).join("applications"))
        .collect()
}

fn find_desktop_entry(app_id: &str) -> Option<PathBuf> {
    if app_id.is_empty() {
        return None;
    }
    application_dirs()
        .into_iter()
        .map(|dir| dir.join(format!("{app_id}.desktop")))
        .find(|path| path.exists())
}

/// Schemes this desktop entry registers a handler for, from lines like
/// `MimeType=x-scheme-handler/waze;text/html;`.
fn scheme_handlers(desktop_entry: &str) -> Vec<String> {
    desktop_entry
        .lines()
        .filter_map(|line| line.strip_prefix("MimeType="))
        .flat_map(|mimes| mimes.split(';'))
        .filter_map(|mime| mime.strip_prefix("x-scheme-handler/"))
        .filter(|scheme| !scheme.is_empty())
        .map(str::to_string)
        .collect()
}
