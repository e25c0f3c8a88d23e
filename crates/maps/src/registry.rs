//! The static provider registry.
//!
//! One shared table for every platform backend; insertion order is the
//! display and filter order returned to callers. Platforms that cannot see
//! a given provider simply never report it installed.

use crate::provider::{MapKind, MapProvider};

/// Known map applications, in display order.
pub const PROVIDERS: &[MapProvider] = &[
    MapProvider {
        kind: MapKind::Google,
        name: "Google Maps",
        package: "com.google.android.apps.maps",
        scheme: "comgooglemaps",
    },
    MapProvider {
        kind: MapKind::Amap,
        name: "Amap",
        package: "com.autonavi.minimap",
        scheme: "iosamap",
    },
    MapProvider {
        kind: MapKind::Baidu,
        name: "Baidu Maps",
        package: "com.baidu.BaiduMap",
        scheme: "baidumap",
    },
    MapProvider {
        kind: MapKind::Waze,
        name: "Waze",
        package: "com.waze",
        scheme: "waze",
    },
    MapProvider {
        kind: MapKind::YandexNavi,
        name: "Yandex Navigator",
        package: "ru.yandex.yandexnavi",
        scheme: "yandexnavi",
    },
    MapProvider {
        kind: MapKind::YandexMaps,
        name: "Yandex Maps",
        package: "ru.yandex.yandexmaps",
        scheme: "yandexmaps",
    },
    MapProvider {
        kind: MapKind::Apple,
        name: "Apple Maps",
        package: "com.apple.Maps",
        scheme: "",
    },
];

/// Look up a provider by kind.
pub fn find(kind: MapKind) -> Option<&'static MapProvider> {
    PROVIDERS.iter().find(|p| p.kind == kind)
}
