//! Build metadata injected into the bundle as a compile-time constant.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::package::PackageMetadata;

/// Global constant name the build engine defines.
pub const APP_INFO_CONSTANT: &str = "__APP_INFO__";

/// Timestamp layout for `lastBuildTime`.
pub const BUILD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the build timestamp.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub pkg: PackageMetadata,
    pub last_build_time: String,
}

impl AppInfo {
    /// Snapshot package metadata together with the clock's current reading.
    pub fn capture(pkg: PackageMetadata, clock: &dyn Clock) -> Self {
        Self {
            pkg,
            last_build_time: clock.now().format(BUILD_TIME_FORMAT).to_string(),
        }
    }

    /// JSON text used as the constant's replacement value.
    pub fn to_define_value(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
