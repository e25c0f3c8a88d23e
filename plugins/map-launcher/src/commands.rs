use serde_json::Value;
use tauri::{command, State};
use waypoint_maps::{channel, MapDescriptor, MapError, MapKind};

use crate::MapsState;

/// Registry providers currently installed, in registry order.
#[command]
pub async fn get_installed_maps(
    state: State<'_, MapsState>,
) -> Result<Vec<MapDescriptor>, MapError> {
    Ok(state
        .launcher
        .installed_maps()
        .into_iter()
        .map(MapDescriptor::from)
        .collect())
}

/// Whether the given map type is installed. Unrecognized types are simply
/// not available.
#[command]
pub async fn is_map_available(
    state: State<'_, MapsState>,
    map_type: String,
) -> Result<bool, MapError> {
    Ok(MapKind::parse(&map_type)
        .map(|kind| state.launcher.is_available(kind))
        .unwrap_or(false))
}

/// Launch the given map application with a destination URL.
#[command]
pub async fn launch_map(
    state: State<'_, MapsState>,
    map_type: String,
    url: String,
) -> Result<(), MapError> {
    let kind =
        MapKind::parse(&map_type).ok_or_else(|| MapError::UnknownProvider(map_type.clone()))?;
    state.launcher.launch(kind, &url)
}

/// Raw method-channel surface for hosts that still speak the string-keyed
/// `maps_channel` protocol (method name + JSON argument map).
#[command]
pub async fn channel_message(
    state: State<'_, MapsState>,
    method: String,
    args: Option<Value>,
) -> Result<Value, MapError> {
    channel::dispatch(&state.launcher, &method, args.unwrap_or(Value::Null)).map_err(|e| {
        tracing::warn!(method, code = e.code(), "channel dispatch failed: {e}");
        e
    })
}
