//! HTTP client for the FollowMee API.
//!
//! This crate provides the main [`FollowMeeClient`] for interacting with the
//! FollowMee location-tracking service.

#![doc(html_root_url = "https://docs.rs/followmee-client/0.2.0")]

mod client;
pub mod api;

pub use client::{FollowMeeClient, FollowMeeClientBuilder};
pub use followmee_core::{FollowMeeError, Result};
