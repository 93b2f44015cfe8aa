// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation and API discovery.

pub mod capability;
pub mod client;
pub mod discovery;

pub use capability::is_capability_available;
pub use client::create_client;
pub use discovery::{server_groups_and_resources, DiscoveryError, GroupVersion};
