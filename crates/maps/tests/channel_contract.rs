//! End-to-end contract of the maps method channel against a scripted OS.

use std::sync::Arc;

use serde_json::{json, Value};
use waypoint_maps::channel::{self, GET_INSTALLED_MAPS, IS_MAP_AVAILABLE, LAUNCH_MAP};
use waypoint_maps::{registry, MapKind, MapLauncher, RecordingPlatform};

fn launcher(platform: &Arc<RecordingPlatform>) -> MapLauncher {
    MapLauncher::new(registry::PROVIDERS, platform.clone())
}

#[test]
fn only_google_installed_scenario() {
    let platform = Arc::new(RecordingPlatform::with_apps(&[
        "com.google.android.apps.maps",
    ]));
    let launcher = launcher(&platform);

    let installed = channel::dispatch(&launcher, GET_INSTALLED_MAPS, Value::Null).unwrap();
    let installed = installed.as_array().unwrap();
    assert_eq!(installed.len(), 1);
    assert_eq!(installed[0]["mapType"], "google");
    assert_eq!(installed[0]["mapName"], "Google Maps");

    let waze = channel::dispatch(&launcher, IS_MAP_AVAILABLE, json!({"mapType": "waze"})).unwrap();
    assert_eq!(waze, Value::Bool(false));

    let err = channel::dispatch(
        &launcher,
        LAUNCH_MAP,
        json!({"mapType": "waze", "url": "https://maps.example/x"}),
    )
    .unwrap_err();
    assert_eq!(err.code(), "MAP_NOT_AVAILABLE");
    assert_eq!(err.to_string(), "Map is not installed on a device");
    assert!(platform.launches().is_empty());
}

#[test]
fn available_launch_dispatches_exactly_once() {
    let platform = Arc::new(RecordingPlatform::with_apps(&[
        "com.google.android.apps.maps",
    ]));
    let launcher = launcher(&platform);

    let reply = channel::dispatch(
        &launcher,
        LAUNCH_MAP,
        json!({"mapType": "google", "url": "https://maps.example/x"}),
    )
    .unwrap();
    assert_eq!(reply, Value::Null);
    assert_eq!(
        platform.launches(),
        vec![(MapKind::Google, "https://maps.example/x".to_string())]
    );
}

#[test]
fn unknown_method_reports_not_implemented() {
    let platform = Arc::new(RecordingPlatform::new());
    let launcher = launcher(&platform);

    let err = channel::dispatch(&launcher, "foo", Value::Null).unwrap_err();
    assert_eq!(err.code(), "NOT_IMPLEMENTED");

    // The channel stays usable after an unknown method.
    let reply = channel::dispatch(&launcher, GET_INSTALLED_MAPS, Value::Null).unwrap();
    assert_eq!(reply, json!([]));
}

#[test]
fn structured_errors_carry_code_and_message() {
    let platform = Arc::new(RecordingPlatform::new());
    let launcher = launcher(&platform);

    let err = channel::dispatch(
        &launcher,
        LAUNCH_MAP,
        json!({"mapType": "here", "url": "https://maps.example/x"}),
    )
    .unwrap_err();

    let wire = serde_json::to_value(&err).unwrap();
    assert_eq!(wire["code"], "UNKNOWN_MAP_TYPE");
    assert!(wire["message"].as_str().unwrap().contains("here"));
}
