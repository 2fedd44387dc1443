//! Location query endpoints.
//!
//! Every operation hits `tracks.aspx` with a `function` parameter selecting
//! the query, requests JSON output, and maps the response into
//! [`LocationData`] records. Operations with optional parameters hand back a
//! request builder with a `send()` method.

use chrono::NaiveDate;
use followmee_core::{LocationData, Result};

use crate::FollowMeeClient;

/// Location query endpoints
pub struct TracksApi<'a> {
    client: &'a FollowMeeClient,
}

impl<'a> TracksApi<'a> {
    pub(crate) fn new(client: &'a FollowMeeClient) -> Self {
        Self { client }
    }

    /// Current location of specific devices
    #[must_use]
    pub fn current_for_devices<I, S>(&self, device_ids: I) -> CurrentForDevicesBuilder<'a>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CurrentForDevicesBuilder {
            client: self.client,
            device_ids: device_ids.into_iter().map(Into::into).collect(),
            address: false,
        }
    }

    /// Current location of every device in the account
    #[must_use]
    pub fn current_for_all_devices(&self) -> CurrentForAllDevicesBuilder<'a> {
        CurrentForAllDevicesBuilder {
            client: self.client,
            address: false,
            group_ids: Vec::new(),
        }
    }

    /// Location history of one device over the last `hours` hours
    #[must_use]
    pub fn history_for_device(
        &self,
        device_id: impl Into<String>,
        hours: u32,
    ) -> DeviceHistoryBuilder<'a> {
        DeviceHistoryBuilder {
            client: self.client,
            device_id: device_id.into(),
            hours,
            address: false,
            visit_info: false,
        }
    }

    /// Location history of every device over the last `hours` hours
    #[must_use]
    pub fn history_for_all_devices(&self, hours: u32) -> AllDevicesHistoryBuilder<'a> {
        AllDevicesHistoryBuilder {
            client: self.client,
            hours,
            address: false,
            visit_info: false,
        }
    }

    /// Location history of one device between two dates
    #[must_use]
    pub fn date_range_for_device(
        &self,
        device_id: impl Into<String>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DeviceDateRangeBuilder<'a> {
        DeviceDateRangeBuilder {
            client: self.client,
            device_id: device_id.into(),
            from,
            to,
            address: false,
            visit_info: false,
        }
    }

    /// Location history of every device between two dates
    #[must_use]
    pub fn date_range_for_all_devices(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AllDevicesDateRangeBuilder<'a> {
        AllDevicesDateRangeBuilder {
            client: self.client,
            from,
            to,
            address: false,
            visit_info: false,
            group_ids: Vec::new(),
        }
    }
}

/// Encode a boolean flag the way the wire expects it
fn flag(enabled: bool) -> String {
    i32::from(enabled).to_string()
}

/// Encode a date parameter the way the wire expects it
fn date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

async fn send_track_query(
    client: &FollowMeeClient,
    params: &[(&str, String)],
) -> Result<Vec<LocationData>> {
    let envelope = client.get("tracks.aspx", params).await?;
    envelope.into_records(LocationData::from_wire)
}

/// Builder for current-location queries against specific devices
pub struct CurrentForDevicesBuilder<'a> {
    client: &'a FollowMeeClient,
    device_ids: Vec<String>,
    address: bool,
}

impl CurrentForDevicesBuilder<'_> {
    /// Include a reverse-geocoded address with each sample
    #[must_use]
    pub fn address(mut self, include: bool) -> Self {
        self.address = include;
        self
    }

    /// Execute the query
    pub async fn send(self) -> Result<Vec<LocationData>> {
        let params = vec![
            ("function", "currentfordevice".to_string()),
            ("output", "json".to_string()),
            ("deviceid", self.device_ids.join(",")),
            ("address", flag(self.address)),
        ];
        send_track_query(self.client, &params).await
    }
}

/// Builder for current-location queries against the whole account
pub struct CurrentForAllDevicesBuilder<'a> {
    client: &'a FollowMeeClient,
    address: bool,
    group_ids: Vec<String>,
}

impl CurrentForAllDevicesBuilder<'_> {
    /// Include a reverse-geocoded address with each sample
    #[must_use]
    pub fn address(mut self, include: bool) -> Self {
        self.address = include;
        self
    }

    /// Restrict the query to the given device groups
    #[must_use]
    pub fn group_ids<I, S>(mut self, group_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_ids = group_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Execute the query
    pub async fn send(self) -> Result<Vec<LocationData>> {
        let mut params = vec![
            ("function", "currentforalldevices".to_string()),
            ("output", "json".to_string()),
            ("address", flag(self.address)),
        ];
        if !self.group_ids.is_empty() {
            params.push(("groupid", self.group_ids.join(",")));
        }
        send_track_query(self.client, &params).await
    }
}

/// Builder for recent-history queries against one device
pub struct DeviceHistoryBuilder<'a> {
    client: &'a FollowMeeClient,
    device_id: String,
    hours: u32,
    address: bool,
    visit_info: bool,
}

impl DeviceHistoryBuilder<'_> {
    /// Include a reverse-geocoded address with each sample
    #[must_use]
    pub fn address(mut self, include: bool) -> Self {
        self.address = include;
        self
    }

    /// Include visit begin/end annotations
    #[must_use]
    pub fn visit_info(mut self, include: bool) -> Self {
        self.visit_info = include;
        self
    }

    /// Execute the query
    pub async fn send(self) -> Result<Vec<LocationData>> {
        let params = vec![
            ("function", "historyfordevice".to_string()),
            ("output", "json".to_string()),
            ("deviceid", self.device_id),
            ("history", self.hours.to_string()),
            ("address", flag(self.address)),
            ("visit", flag(self.visit_info)),
        ];
        send_track_query(self.client, &params).await
    }
}

/// Builder for recent-history queries against the whole account
pub struct AllDevicesHistoryBuilder<'a> {
    client: &'a FollowMeeClient,
    hours: u32,
    address: bool,
    visit_info: bool,
}

impl AllDevicesHistoryBuilder<'_> {
    /// Include a reverse-geocoded address with each sample
    #[must_use]
    pub fn address(mut self, include: bool) -> Self {
        self.address = include;
        self
    }

    /// Include visit begin/end annotations
    #[must_use]
    pub fn visit_info(mut self, include: bool) -> Self {
        self.visit_info = include;
        self
    }

    /// Execute the query
    pub async fn send(self) -> Result<Vec<LocationData>> {
        let params = vec![
            ("function", "historyforalldevices".to_string()),
            ("output", "json".to_string()),
            ("history", self.hours.to_string()),
            ("address", flag(self.address)),
            ("visit", flag(self.visit_info)),
        ];
        send_track_query(self.client, &params).await
    }
}

/// Builder for date-range queries against one device
pub struct DeviceDateRangeBuilder<'a> {
    client: &'a FollowMeeClient,
    device_id: String,
    from: NaiveDate,
    to: NaiveDate,
    address: bool,
    visit_info: bool,
}

impl DeviceDateRangeBuilder<'_> {
    /// Include a reverse-geocoded address with each sample
    #[must_use]
    pub fn address(mut self, include: bool) -> Self {
        self.address = include;
        self
    }

    /// Include visit begin/end annotations
    #[must_use]
    pub fn visit_info(mut self, include: bool) -> Self {
        self.visit_info = include;
        self
    }

    /// Execute the query
    pub async fn send(self) -> Result<Vec<LocationData>> {
        let params = vec![
            ("function", "daterangefordevice".to_string()),
            ("output", "json".to_string()),
            ("from", date(self.from)),
            ("to", date(self.to)),
            ("deviceid", self.device_id),
            ("address", flag(self.address)),
            ("visit", flag(self.visit_info)),
        ];
        send_track_query(self.client, &params).await
    }
}

/// Builder for date-range queries against the whole account
pub struct AllDevicesDateRangeBuilder<'a> {
    client: &'a FollowMeeClient,
    from: NaiveDate,
    to: NaiveDate,
    address: bool,
    visit_info: bool,
    group_ids: Vec<String>,
}

impl AllDevicesDateRangeBuilder<'_> {
    /// Include a reverse-geocoded address with each sample
    #[must_use]
    pub fn address(mut self, include: bool) -> Self {
        self.address = include;
        self
    }

    /// Include visit begin/end annotations
    #[must_use]
    pub fn visit_info(mut self, include: bool) -> Self {
        self.visit_info = include;
        self
    }

    /// Restrict the query to the given device groups
    #[must_use]
    pub fn group_ids<I, S>(mut self, group_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_ids = group_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Execute the query
    pub async fn send(self) -> Result<Vec<LocationData>> {
        let mut params = vec![
            ("function", "daterangeforalldevices".to_string()),
            ("output", "json".to_string()),
            ("from", date(self.from)),
            ("to", date(self.to)),
            ("address", flag(self.address)),
            ("visit", flag(self.visit_info)),
        ];
        if !self.group_ids.is_empty() {
            params.push(("groupid", self.group_ids.join(",")));
        }
        send_track_query(self.client, &params).await
    }
}
