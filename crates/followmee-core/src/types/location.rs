use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::{Map, Value};

use super::wire::RawRecord;
use crate::error::Result;

/// One position sample for a device
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationData {
    /// Stable device identifier
    pub device_id: String,

    /// Human-readable device name
    pub device_name: String,

    /// When the sample was taken
    pub date: DateTime<FixedOffset>,

    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,

    /// Sample type (e.g. "motion", "stationary")
    pub sample_type: String,

    /// Speed in miles per hour
    pub speed_mph: i32,

    /// Speed in kilometers per hour
    pub speed_kmh: i32,

    /// Heading in degrees
    pub direction: i32,

    /// Altitude in feet
    pub altitude_ft: i32,

    /// Altitude in meters
    pub altitude_m: i32,

    /// Reported accuracy of the fix
    pub accuracy: i32,

    /// Battery level as a fraction in [0, 1]
    pub battery: f64,
}

impl LocationData {
    /// Construct a location record from one element of the wire `Data` array.
    ///
    /// Unit-annotated keys (`Altitude(ft)`, `Speed(km/h)`, ...) are
    /// normalized before lookup. Fails if a required field is missing or a
    /// value does not parse; the error names the offending field.
    pub fn from_wire(fields: Map<String, Value>) -> Result<Self> {
        let mut raw = RawRecord::normalized("LocationData", fields);
        Ok(Self {
            device_id: raw.string("DeviceID")?,
            device_name: raw.string("DeviceName")?,
            date: raw.timestamp("Date")?,
            latitude: raw.float("Latitude")?,
            longitude: raw.float("Longitude")?,
            sample_type: raw.string("Type")?,
            speed_mph: raw.integer("Speedmph")?,
            speed_kmh: raw.integer("Speedkmh")?,
            direction: raw.integer("Direction")?,
            altitude_ft: raw.integer("Altitudeft")?,
            altitude_m: raw.integer("Altitudem")?,
            accuracy: raw.integer("Accuracy")?,
            battery: raw.battery("Battery")?,
        })
    }

    /// Returns the sample's coordinates as a `(latitude, longitude)` pair
    #[must_use]
    pub const fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}
