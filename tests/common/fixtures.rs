//! Test fixtures - payloads as the backend serves them.

/// Menu tree: a group with two modules, one of which has a nested menu.
/// Uses `recursiveChildren` and `menu_title` on purpose.
pub const MENUS_JSON: &str = r#"{
  "success": true,
  "data": [
    {"id": 1, "title": "Fleet", "children": [
      {"id": 11, "title": "Vehicles", "type": "module"},
      {"id": 12, "menu_title": "Bookings", "recursiveChildren": [
        {"id": 121, "title": "Calendar"}
      ]}
    ]},
    {"id": 2, "title": "Admin", "children": [
      {"id": 21, "title": "Users"}
    ]}
  ]
}"#;

/// Feature tree with string ids
pub const FEATURES_JSON: &str = r#"[
  {"id": "tracking", "name": "Tracking", "items": [
    {"id": "gps", "name": "GPS"},
    {"id": "geofence", "name": "Geofence"}
  ]},
  {"id": "billing", "name": "Billing"}
]"#;

pub const PACKAGES_JSON: &str = r#"{"data": [
  {"id": 1, "name": "Starter"},
  {"id": 2, "package_name": "Fleet Pro"}
]}"#;

/// Every menu id in [`MENUS_JSON`]
pub const MENU_COUNT: usize = 6;

/// Every feature id in [`FEATURES_JSON`]
pub const FEATURE_COUNT: usize = 4;
