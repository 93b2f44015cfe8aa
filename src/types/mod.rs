// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed views of the cluster resources this tool reads and writes.

pub mod storage_cluster;

pub use storage_cluster::{MultiClusterServiceSpec, NetworkSpec, StorageCluster, StorageClusterSpec};
