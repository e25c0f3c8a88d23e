fn main() {
    tauri_plugin::Builder::new(&[
        "get_installed_maps",
        "is_map_available",
        "launch_map",
        "channel_message",
    ])
    .build();
}
