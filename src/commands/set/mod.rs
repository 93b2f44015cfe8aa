// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `odf set` subcommands.

pub mod multicluster_service;

pub use multicluster_service::{enable_multi_cluster_service, MultiClusterServiceEnabled};
