#![deny(warnings)]
pub mod engine;
pub mod model;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "whodunit"
    }

    pub const fn codename() -> &'static str {
        "Case File"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
