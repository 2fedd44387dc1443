//! Rust client for the FollowMee location-tracking API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use followmee::FollowMeeClient;
//!
//! #[tokio::main]
//! async fn main() -> followmee::Result<()> {
//!     let client = FollowMeeClient::new("your-api-key", "your-username");
//!
//!     // List every device on the account
//!     for device in client.devices().list().await? {
//!         println!("{}: {:.0}% battery", device.device_name, device.battery * 100.0);
//!     }
//!
//!     // Where has the van been in the last six hours?
//!     let samples = client.tracks()
//!         .history_for_device("866423549", 6)
//!         .address(true)
//!         .send()
//!         .await?;
//!
//!     for sample in &samples {
//!         let (lat, lon) = sample.coordinates();
//!         println!("{}: {lat:.5}, {lon:.5}", sample.date);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/followmee/0.2.0")]

// Re-export core types
pub use followmee_core::*;

// Re-export client
pub use followmee_client::{api, FollowMeeClient, FollowMeeClientBuilder};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
