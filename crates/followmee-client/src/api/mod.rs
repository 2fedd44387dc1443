//! API endpoint modules.

mod devices;
mod tracks;

pub use devices::DevicesApi;
pub use tracks::{
    AllDevicesDateRangeBuilder, AllDevicesHistoryBuilder, CurrentForAllDevicesBuilder,
    CurrentForDevicesBuilder, DeviceDateRangeBuilder, DeviceHistoryBuilder, TracksApi,
};
