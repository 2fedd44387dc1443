//! Device listing endpoints.

use crate::FollowMeeClient;
use followmee_core::{DeviceInfo, Result};

/// Device listing endpoints
pub struct DevicesApi<'a> {
    client: &'a FollowMeeClient,
}

impl<'a> DevicesApi<'a> {
    pub(crate) fn new(client: &'a FollowMeeClient) -> Self {
        Self { client }
    }

    /// List every device registered to the account
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let devices = client.devices().list().await?;
    /// for device in &devices {
    ///     println!("{} ({})", device.device_name, device.platform);
    /// }
    /// ```
    pub async fn list(&self) -> Result<Vec<DeviceInfo>> {
        let envelope = self
            .client
            .get("info.aspx", &[("function", "devicelist".to_string())])
            .await?;
        envelope.into_records(DeviceInfo::from_wire)
    }
}
