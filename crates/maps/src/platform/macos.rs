//! macOS backend.
//!
//! Availability comes from walking the application folders and reading each
//! bundle's `Info.plist`: `CFBundleIdentifier` for the application id and
//! `CFBundleURLTypes` for the URL schemes it handles. Launching goes through
//! `open(1)`, targeted at the provider's bundle where possible.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{AppInventory, Platform};
use crate::error::{MapError, Result};
use crate::provider::MapProvider;

pub struct MacosPlatform;

impl Platform for MacosPlatform {
    fn inventory(&self) -> AppInventory {
        let mut inventory = AppInventory::default();

        for dir in app_dirs() {
            if !dir.exists() {
                continue;
            }

            let mut stack = vec![dir];
            while let Some(current) = stack.pop() {
                let Ok(entries) = std::fs::read_dir(&current) else {
                    continue;
                };

                for entry in entries.flatten() {
                    let path = entry.path();
                    if !path.is_dir() {
                        continue;
                    }

                    if is_app_bundle(&path) {
                        record_bundle(&path, &mut inventory);
                    } else {
                        stack.push(path);
                    }
                }
            }
        }

        tracing::debug!(
            apps = inventory.app_ids.len(),
            schemes = inventory.url_schemes.len(),
            "scanned application bundles"
        );
        inventory
    }

    fn launch(&self, provider: &MapProvider, url: &str) -> Result<()> {
        let spawn_err = |e: std::io::Error| MapError::LaunchFailed(provider.kind, e.to_string());

        // `open -b` refuses unknown bundle ids, so a miss falls back to a
        // generic open and lets Launch Services pick the handler.
        if !provider.package.is_empty() {
            if open_with(Some(provider.package), url).map_err(spawn_err)? {
                return Ok(());
            }
            tracing::warn!(kind = %provider.kind, "targeted open failed, falling back to generic open");
        }

        if open_with(None, url).map_err(spawn_err)? {
            return Ok(());
        }

        Err(MapError::LaunchFailed(
            provider.kind,
            format!("open(1) rejected {url}"),
        ))
    }
}

fn open_with(bundle_id: Option<&str>, url: &str) -> std::io::Result<bool> {
    let mut cmd = Command::new("open");
    if let Some(id) = bundle_id {
        cmd.args(["-b", id]);
    }
    Ok(cmd.arg(url).status()?.success())
}

fn app_dirs() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/Applications"),
        PathBuf::from("/System/Applications"),
        PathBuf::from(format!(
            "{}/Applications",
            std::env::var("HOME").unwrap_or_default()
        )),
    ]
}

fn is_app_bundle(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("app")
}

fn record_bundle(app_path: &Path, inventory: &mut AppInventory) {
    let plist_path = app_path.join("Contents/Info.plist");
    let Ok(plist_data) = std::fs::read(&plist_path) else {
        return;
    };
    let Ok(plist) = plist::from_bytes::<plist::Dictionary>(&plist_data) else {
        return;
    };

    if let Some(bundle_id) = plist.get("CFBundleIdentifier").and_then(|v| v.as_string()) {
        inventory.app_ids.insert(bundle_id.to_string());
    }

    let Some(url_types) = plist.get("CFBundleURLTypes").and_then(|v| v.as_array()) else {
        return;
    };
    for url_type in url_types {
        let Some(schemes) = url_type
            .as_dictionary()
            .and_then(|d| d.get("CFBundleURLSchemes"))
            .and_then(|v| v.as_array())
        else {
            continue;
        };
        for scheme in schemes {
            if let Some(s) = scheme.as_string() {
                inventory.url_schemes.insert(s.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_bundle(root: &Path, name: &str, plist_xml: &str) {
        let contents = root.join(name).join("Contents");
        std::fs::create_dir_all(&contents).unwrap();
        std::fs::write(contents.join("Info.plist"), plist_xml).unwrap();
    }

    #[test]
    fn test_record_bundle_reads_id_and_schemes() {
        let tmp = tempfile::tempdir().unwrap();
        write_bundle(
            tmp.path(),
            "Waze.app",
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleIdentifier</key>
    <string>com.waze</string>
    <key>CFBundleURLTypes</key>
    <array>
        <dict>
            <key>CFBundleURLSchemes</key>
            <array>
                <string>waze</string>
            </array>
        </dict>
    </array>
</dict>
</plist>"#,
        );

        let mut inventory = AppInventory::default();
        record_bundle(&tmp.path().join("Waze.app"), &mut inventory);
        assert!(inventory.app_ids.contains("com.waze"));
        assert!(inventory.url_schemes.contains("waze"));
    }

    #[test]
    fn test_record_bundle_ignores_broken_plists() {
        let tmp = tempfile::tempdir().unwrap();
        write_bundle(tmp.path(), "Broken.app", "not a plist");

        let mut inventory = AppInventory::default();
        record_bundle(&tmp.path().join("Broken.app"), &mut inventory);
        assert!(inventory.app_ids.is_empty());
        assert!(inventory.url_schemes.is_empty());
    }
}
