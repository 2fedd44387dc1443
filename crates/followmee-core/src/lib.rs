//! Core types and errors for the FollowMee API client.
//!
//! This crate provides the foundational types used across the FollowMee
//! library:
//!
//! - **Records**: [`DeviceInfo`] and [`LocationData`], parsed from the
//!   service's wire format
//! - **Envelope**: the normalized [`Envelope`] every HTTP call produces
//! - **Errors**: comprehensive error handling with [`FollowMeeError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use followmee_core::{DeviceInfo, FollowMeeError, Result};
//!
//! fn report(device: &DeviceInfo) {
//!     println!("{}: {:.0}% battery", device.device_name, device.battery * 100.0);
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/followmee-core/0.2.0")]

mod error;
pub mod types;

pub use error::{FollowMeeError, Result};
pub use types::*;
