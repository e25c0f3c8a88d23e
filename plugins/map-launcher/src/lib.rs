use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};
use waypoint_maps::MapLauncher;

mod commands;

const PLUGIN_NAME: &str = "waypoint-maps";

pub struct MapsState {
    pub(crate) launcher: MapLauncher,
}

pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![
            commands::get_installed_maps,
            commands::is_map_available,
            commands::launch_map,
            commands::channel_message,
        ])
        .setup(|app, _api| {
            app.manage(MapsState {
                launcher: MapLauncher::native(),
            });
            Ok(())
        })
        .build()
}
