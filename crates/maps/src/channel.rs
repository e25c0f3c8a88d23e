//! String-keyed method-channel surface.
//!
//! Hosts that still speak the original `maps_channel` protocol send a method
//! name plus a JSON argument map; [`dispatch`] routes it onto the service.
//! Unknown methods get a structured not-implemented reply, never a crash.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MapError, Result};
use crate::provider::{MapKind, MapProvider};
use crate::service::MapLauncher;

pub const GET_INSTALLED_MAPS: &str = "getInstalledMaps";
pub const IS_MAP_AVAILABLE: &str = "isMapAvailable";
pub const LAUNCH_MAP: &str = "launchMap";

/// Wire shape of a registry entry.
#[derive(Debug, Clone, Serialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct MapDescriptor {
    pub map_type: MapKind,
    pub map_name: String,
    pub platform_identifier: String,
}

impl From<&MapProvider> for MapDescriptor {
    fn from(provider: &MapProvider) -> Self {
        Self {
            map_type: provider.kind,
            map_name: provider.name.to_string(),
            platform_identifier: provider.platform_identifier().to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeArgs {
    map_type: String,
}

// Extra fields (the original sent `title`/`address` on some hosts) are
// accepted and ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LaunchArgs {
    map_type: String,
    url: String,
}

/// Route one channel call.
pub fn dispatch(launcher: &MapLauncher, method: &str, args: Value) -> Result<Value> {
    match method {
        GET_INSTALLED_MAPS => {
            let maps: Vec<MapDescriptor> = launcher
                .installed_maps()
                .into_iter()
                .map(MapDescriptor::from)
                .collect();
            Ok(serde_json::json!(maps))
        }
        IS_MAP_AVAILABLE => {
            let args: TypeArgs = parse_args(args)?;
            // Unrecognized types answer false rather than erroring.
            let available = MapKind::parse(&args.map_type)
                .map(|kind| launcher.is_available(kind))
                .unwrap_or(false);
            Ok(Value::Bool(available))
        }
        LAUNCH_MAP => {
            let args: LaunchArgs = parse_args(args)?;
            let kind = MapKind::parse(&args.map_type)
                .ok_or_else(|| MapError::UnknownProvider(args.map_type.clone()))?;
            launcher.launch(kind, &args.url)?;
            Ok(Value::Null)
        }
        other => {
            tracing::warn!(method = other, "unknown channel method");
            Err(MapError::NotImplemented(other.to_string()))
        }
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(args: Value) -> Result<T> {
    serde_json::from_value(args).map_err(|e| MapError::InvalidArguments(e.to_string()))
}
