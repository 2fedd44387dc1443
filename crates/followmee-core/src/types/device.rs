use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::{Map, Value};

use super::wire::RawRecord;
use crate::error::Result;

/// One tracked device, as returned by the device list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceInfo {
    /// Stable device identifier
    pub device_id: String,

    /// Human-readable device name
    pub device_name: String,

    /// Device platform (e.g. "Android", "iOS")
    pub platform: String,

    /// App edition running on the device
    pub edition: String,

    /// Group the device belongs to
    pub group: String,

    /// Whether tracking is currently active
    pub active: bool,

    /// Tracker state code
    pub tracker_state: i32,

    /// When the tracker state was last reported
    pub tracker_state_time: DateTime<FixedOffset>,

    /// Battery level as a fraction in [0, 1]
    pub battery: f64,

    /// When the battery level was last reported
    pub battery_time: DateTime<FixedOffset>,
}

impl DeviceInfo {
    /// Construct a device record from one element of the wire `Data` array.
    ///
    /// Fails if a required field is missing or a value does not parse;
    /// the error names the offending field.
    pub fn from_wire(fields: Map<String, Value>) -> Result<Self> {
        let mut raw = RawRecord::new("DeviceInfo", fields);
        Ok(Self {
            device_id: raw.string("DeviceID")?,
            device_name: raw.string("DeviceName")?,
            platform: raw.string("Platform")?,
            edition: raw.string("Edition")?,
            group: raw.string("Group")?,
            active: raw.flag("Active")?,
            tracker_state: raw.integer("TrackerState")?,
            tracker_state_time: raw.timestamp("TrackerStateTime")?,
            battery: raw.battery("Battery")?,
            battery_time: raw.timestamp("BatteryTime")?,
        })
    }
}
