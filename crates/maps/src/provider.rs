//! Map provider model.
//!
//! A provider is a map application this system knows how to detect and
//! launch. Providers are static data; identity is the [`MapKind`].

use serde::{Deserialize, Serialize};

/// The fixed set of map applications the registry knows about.
///
/// Wire names are camelCase (`"yandexNavi"`), matching the strings the
/// application layer sends over the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub enum MapKind {
    Google,
    Amap,
    Baidu,
    Waze,
    YandexNavi,
    YandexMaps,
    Apple,
}

impl MapKind {
    pub const ALL: [MapKind; 7] = [
        MapKind::Google,
        MapKind::Amap,
        MapKind::Baidu,
        MapKind::Waze,
        MapKind::YandexNavi,
        MapKind::YandexMaps,
        MapKind::Apple,
    ];

    /// The camelCase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapKind::Google => "google",
            MapKind::Amap => "amap",
            MapKind::Baidu => "baidu",
            MapKind::Waze => "waze",
            MapKind::YandexNavi => "yandexNavi",
            MapKind::YandexMaps => "yandexMaps",
            MapKind::Apple => "apple",
        }
    }

    /// Parse a wire name. Unrecognized strings are `None`, never a panic.
    pub fn parse(raw: &str) -> Option<MapKind> {
        MapKind::ALL.iter().copied().find(|k| k.as_str() == raw)
    }
}

impl std::fmt::Display for MapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known map application and the OS-level handles used to detect and
/// target it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapProvider {
    pub kind: MapKind,
    /// Human-readable name shown in pickers.
    pub name: &'static str,
    /// Reverse-DNS application id (Android package name, macOS bundle id,
    /// Linux desktop-entry id).
    pub package: &'static str,
    /// URL scheme the application registers, without the `://` suffix.
    /// Empty when the application registers no scheme of its own.
    pub scheme: &'static str,
}

impl MapProvider {
    /// The identifier the running platform detects and targets this
    /// provider by: the URL scheme on scheme-probe platforms, the
    /// application id everywhere else.
    pub fn platform_identifier(&self) -> &'static str {
        #[cfg(any(target_os = "macos", target_os = "ios"))]
        {
            if !self.scheme.is_empty() {
                return self.scheme;
            }
        }
        self.package
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_names_round_trip() {
        for kind in MapKind::ALL {
            assert_eq!(MapKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_unrecognized_kind_parses_to_none() {
        assert_eq!(MapKind::parse("here"), None);
        assert_eq!(MapKind::parse(""), None);
        assert_eq!(MapKind::parse("Google"), None);
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for kind in MapKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
        }
    }
}
